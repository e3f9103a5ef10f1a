//! Scenario session state machine.
//!
//! Like the rest of the engine it holds no timers and does no I/O; each user
//! action is one method call. Calls made from the wrong state are rejected
//! with [`ScenarioError::InvalidTransition`] rather than ignored.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Presenting -> Reflecting -> Completed -> Exited
//!            ^                            |
//!            +-------- start_new ---------+
//! ```
//!
//! `start` is also accepted from `Exited`, which re-enters `Idle` first.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::library::{Choice, Scenario, ScenarioLibrary};
use super::picker::{IndexPicker, RandomPicker};
use super::presence::PresenceLevel;
use crate::emotion::EmotionTag;
use crate::error::ScenarioError;
use crate::progression::{ActivityEvent, ActivityKind};

/// How many of the most recently completed scenarios are excluded from a draw.
pub const DEFAULT_ANTI_REPEAT_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Presenting,
    Reflecting,
    Completed,
    /// The user left the simulator.
    Exited,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::Idle => "idle",
            SessionState::Presenting => "presenting",
            SessionState::Reflecting => "reflecting",
            SessionState::Completed => "completed",
            SessionState::Exited => "exited",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSettings {
    pub anti_repeat_window: usize,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            anti_repeat_window: DEFAULT_ANTI_REPEAT_WINDOW,
        }
    }
}

/// Outcome of a finished scenario, forwarded to the progression tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub choice: Choice,
    /// May be empty.
    pub user_reflection: String,
    pub presence_level: PresenceLevel,
    pub timestamp: DateTime<Utc>,
    /// The hint active when the scenario was drawn.
    pub emotional_state_at_time: Option<EmotionTag>,
}

impl ScenarioResult {
    pub fn activity_event(&self) -> ActivityEvent {
        ActivityEvent::at(ActivityKind::ScenarioCompleted, self.timestamp)
    }
}

/// What the user sees after choosing: a projection of the selected choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceFeedback {
    pub choice_text: String,
    pub consequence: String,
    pub feedback: String,
    pub presence_level: PresenceLevel,
    pub presence_name: &'static str,
    pub presence_color: &'static str,
}

impl From<&Choice> for ChoiceFeedback {
    fn from(choice: &Choice) -> Self {
        Self {
            choice_text: choice.text.clone(),
            consequence: choice.consequence.clone(),
            feedback: choice.feedback.clone(),
            presence_level: choice.presence_level,
            presence_name: choice.presence_level.name(),
            presence_color: choice.presence_level.color(),
        }
    }
}

/// Serializable session state, so a session can outlive the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSession {
    pub state: SessionState,
    pub active: Option<Scenario>,
    pub selected: Option<Choice>,
    /// Emotion hint given to the last draw.
    pub hint: Option<EmotionTag>,
    /// Completed scenarios, oldest first.
    #[serde(default)]
    pub history: Vec<ScenarioResult>,
}

impl ScenarioSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            active: None,
            selected: None,
            hint: None,
            history: Vec::new(),
        }
    }

    /// Ids of the last `window` completed scenarios.
    pub fn recent_ids(&self, window: usize) -> Vec<&str> {
        let skip = self.history.len().saturating_sub(window);
        self.history[skip..]
            .iter()
            .map(|r| r.scenario.id.as_str())
            .collect()
    }
}

impl Default for ScenarioSession {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ScenarioEngine<P = RandomPicker> {
    library: ScenarioLibrary,
    settings: ScenarioSettings,
    picker: P,
    session: ScenarioSession,
}

impl<P: IndexPicker> ScenarioEngine<P> {
    pub fn new(library: ScenarioLibrary, picker: P) -> Self {
        Self::from_session(library, picker, ScenarioSession::new())
    }

    /// Resume a previously saved session.
    pub fn from_session(library: ScenarioLibrary, picker: P, session: ScenarioSession) -> Self {
        Self {
            library,
            settings: ScenarioSettings::default(),
            picker,
            session,
        }
    }

    pub fn with_settings(mut self, settings: ScenarioSettings) -> Self {
        self.settings = settings;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn session(&self) -> &ScenarioSession {
        &self.session
    }

    pub fn into_session(self) -> ScenarioSession {
        self.session
    }

    pub fn library(&self) -> &ScenarioLibrary {
        &self.library
    }

    pub fn active_scenario(&self) -> Option<&Scenario> {
        self.session.active.as_ref()
    }

    pub fn selected_choice(&self) -> Option<&Choice> {
        self.session.selected.as_ref()
    }

    pub fn history(&self) -> &[ScenarioResult] {
        &self.session.history
    }

    pub fn recent_ids(&self) -> Vec<&str> {
        self.session.recent_ids(self.settings.anti_repeat_window)
    }

    /// Feedback for the selected choice, available while reflecting.
    pub fn feedback(&self) -> Option<ChoiceFeedback> {
        if self.session.state != SessionState::Reflecting {
            return None;
        }
        self.session.selected.as_ref().map(ChoiceFeedback::from)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Draw a scenario and begin presenting it. Valid from `Idle` or `Exited`.
    pub fn start(&mut self, hint: Option<EmotionTag>) -> Result<&Scenario, ScenarioError> {
        match self.session.state {
            SessionState::Idle => {}
            SessionState::Exited => {
                self.session.state = SessionState::Idle;
            }
            state => return Err(invalid("start a scenario", state)),
        }
        self.present(hint)
    }

    /// Record the user's choice. Valid from `Presenting`.
    pub fn select_choice(&mut self, choice_id: &str) -> Result<&Choice, ScenarioError> {
        self.expect_state("select a choice", SessionState::Presenting)?;
        let scenario = self
            .session
            .active
            .as_ref()
            .ok_or(invalid("select a choice", SessionState::Idle))?;
        let choice = scenario
            .choice(choice_id)
            .ok_or_else(|| ScenarioError::UnknownChoice {
                scenario_id: scenario.id.clone(),
                choice_id: choice_id.to_string(),
            })?
            .clone();

        debug!(scenario = %scenario.id, choice = %choice.id, level = choice.presence_level.value(), "choice selected");
        self.session.state = SessionState::Reflecting;
        Ok(self.session.selected.insert(choice))
    }

    /// Close the scenario with the user's reflection. Valid from `Reflecting`.
    pub fn complete(&mut self, reflection: &str) -> Result<ScenarioResult, ScenarioError> {
        self.expect_state("complete a scenario", SessionState::Reflecting)?;
        let (Some(scenario), Some(choice)) =
            (self.session.active.clone(), self.session.selected.clone())
        else {
            return Err(invalid("complete a scenario", SessionState::Presenting));
        };

        let result = ScenarioResult {
            presence_level: choice.presence_level,
            scenario,
            choice,
            user_reflection: reflection.to_string(),
            timestamp: Utc::now(),
            emotional_state_at_time: self.session.hint,
        };
        info!(
            scenario = %result.scenario.id,
            level = result.presence_level.value(),
            completed = self.session.history.len() + 1,
            "scenario completed"
        );
        self.session.history.push(result.clone());
        self.session.state = SessionState::Completed;
        Ok(result)
    }

    /// Draw the next scenario. Valid from `Completed`.
    pub fn start_new(&mut self, hint: Option<EmotionTag>) -> Result<&Scenario, ScenarioError> {
        self.expect_state("start a new scenario", SessionState::Completed)?;
        self.present(hint)
    }

    /// Drop the scenario in progress and return to `Idle`. Valid from
    /// `Presenting` or `Reflecting`; history is untouched.
    pub fn abandon(&mut self) -> Result<Scenario, ScenarioError> {
        match self.session.state {
            SessionState::Presenting | SessionState::Reflecting => {}
            state => return Err(invalid("abandon a scenario", state)),
        }
        let scenario = self
            .session
            .active
            .take()
            .ok_or(invalid("abandon a scenario", SessionState::Idle))?;
        self.session.selected = None;
        self.session.hint = None;
        self.session.state = SessionState::Idle;
        info!(scenario = %scenario.id, "scenario abandoned");
        Ok(scenario)
    }

    /// Leave the simulator. Valid from `Completed`; yields no result.
    pub fn exit(&mut self) -> Result<(), ScenarioError> {
        self.expect_state("exit the simulator", SessionState::Completed)?;
        self.session.active = None;
        self.session.selected = None;
        self.session.state = SessionState::Exited;
        info!(completed = self.session.history.len(), "scenario simulator exited");
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn expect_state(
        &self,
        operation: &'static str,
        expected: SessionState,
    ) -> Result<(), ScenarioError> {
        if self.session.state == expected {
            Ok(())
        } else {
            Err(invalid(operation, self.session.state))
        }
    }

    fn present(&mut self, hint: Option<EmotionTag>) -> Result<&Scenario, ScenarioError> {
        let pool = self.library.candidates(hint);
        if pool.is_empty() {
            return Err(ScenarioError::NoScenarios);
        }

        let recent = self.session.recent_ids(self.settings.anti_repeat_window);
        let fresh: Vec<&Scenario> = pool
            .iter()
            .copied()
            .filter(|s| !recent.contains(&s.id.as_str()))
            .collect();
        let candidates = if fresh.is_empty() {
            warn!(pool = pool.len(), window = self.settings.anti_repeat_window, "every candidate seen recently, ignoring anti-repeat filter");
            pool
        } else {
            fresh
        };

        let index = self.picker.pick_index(candidates.len()).min(candidates.len() - 1);
        let scenario = candidates[index].clone();
        info!(scenario = %scenario.id, hint = ?hint, candidates = candidates.len(), "scenario presented");

        self.session.hint = hint;
        self.session.selected = None;
        self.session.state = SessionState::Presenting;
        Ok(self.session.active.insert(scenario))
    }
}

fn invalid(operation: &'static str, state: SessionState) -> ScenarioError {
    ScenarioError::InvalidTransition { operation, state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::library::ScenarioCategory;
    use crate::scenario::picker::SequencePicker;

    fn engine(seq: Vec<usize>) -> ScenarioEngine<SequencePicker> {
        ScenarioEngine::new(ScenarioLibrary::builtin(), SequencePicker::new(seq))
    }

    fn universal(id: &str) -> Scenario {
        let mut s = ScenarioLibrary::builtin()
            .get("unexpected_interruption")
            .unwrap()
            .clone();
        s.id = id.to_string();
        s.category = ScenarioCategory::Universal;
        s
    }

    fn run_once(engine: &mut ScenarioEngine<SequencePicker>) -> String {
        let choice = engine.active_scenario().unwrap().choices[0].id.clone();
        engine.select_choice(&choice).unwrap();
        engine.complete("").unwrap().scenario.id
    }

    #[test]
    fn full_lifecycle() {
        let mut e = engine(vec![1]);
        let drawn = e.start(Some(EmotionTag::Anxiety)).unwrap().id.clone();
        assert_eq!(drawn, "work_deadline");
        assert_eq!(e.state(), SessionState::Presenting);
        assert!(e.feedback().is_none());

        let choice = e.select_choice("communicate_boundaries").unwrap();
        assert_eq!(choice.presence_level, PresenceLevel::WISE);
        assert_eq!(e.state(), SessionState::Reflecting);
        let fb = e.feedback().unwrap();
        assert_eq!(fb.presence_name, "Sábio");
        assert_eq!(fb.consequence, "Seu chefe aprecia a transparência e ajuda a redefinir as prioridades.");

        let result = e.complete("Aprendi a pedir ajuda").unwrap();
        assert_eq!(result.presence_level, PresenceLevel::WISE);
        assert_eq!(result.user_reflection, "Aprendi a pedir ajuda");
        assert_eq!(result.emotional_state_at_time, Some(EmotionTag::Anxiety));
        assert_eq!(result.activity_event().kind, ActivityKind::ScenarioCompleted);
        assert_eq!(e.state(), SessionState::Completed);
        assert_eq!(e.history().len(), 1);

        e.exit().unwrap();
        assert_eq!(e.state(), SessionState::Exited);
        assert!(e.active_scenario().is_none());
    }

    #[test]
    fn no_hint_draws_universal_only() {
        let mut e = engine(vec![0, 1, 2, 3, 4, 5]);
        for _ in 0..6 {
            let scenario = e.start_or_new(None);
            assert_eq!(scenario, "unexpected_interruption");
            run_once(&mut e);
        }
    }

    impl ScenarioEngine<SequencePicker> {
        fn start_or_new(&mut self, hint: Option<EmotionTag>) -> String {
            let drawn = match self.state() {
                SessionState::Completed => self.start_new(hint),
                _ => self.start(hint),
            };
            drawn.unwrap().id.clone()
        }
    }

    #[test]
    fn recent_scenarios_are_not_repeated() {
        let library = ScenarioLibrary::new((0..5).map(|i| universal(&format!("u{i}"))).collect());
        let mut e = ScenarioEngine::new(library, SequencePicker::new(vec![0]));
        let mut drawn = Vec::new();
        for _ in 0..8 {
            drawn.push(e.start_or_new(None));
            run_once(&mut e);
        }
        for (i, id) in drawn.iter().enumerate() {
            let window = &drawn[i.saturating_sub(3)..i];
            assert!(!window.contains(id), "{id} repeated within {window:?}");
        }
        // u0 leaves the window after three completions.
        assert_eq!(&drawn[..5], ["u0", "u1", "u2", "u3", "u0"]);
    }

    #[test]
    fn exhausted_pool_ignores_filter() {
        let mut e = engine(vec![0]);
        assert_eq!(e.start_or_new(None), "unexpected_interruption");
        run_once(&mut e);
        assert_eq!(e.start_or_new(None), "unexpected_interruption");
    }

    #[test]
    fn anti_repeat_window_is_configurable() {
        let library = ScenarioLibrary::new(vec![universal("a"), universal("b")]);
        let mut e = ScenarioEngine::new(library, SequencePicker::new(vec![0]))
            .with_settings(ScenarioSettings { anti_repeat_window: 0 });
        assert_eq!(e.start_or_new(None), "a");
        run_once(&mut e);
        assert_eq!(e.start_or_new(None), "a");
    }

    #[test]
    fn invalid_transitions_fail_loudly() {
        let mut e = engine(vec![0]);
        assert_eq!(
            e.select_choice("x").unwrap_err(),
            ScenarioError::InvalidTransition { operation: "select a choice", state: SessionState::Idle }
        );
        assert!(e.complete("").is_err());
        assert!(e.start_new(None).is_err());
        assert!(e.exit().is_err());

        e.start(None).unwrap();
        assert!(e.start(None).is_err());
        assert!(e.complete("").is_err());
        assert!(e.exit().is_err());

        e.select_choice("mindful_pause").unwrap();
        assert!(e.select_choice("mindful_pause").is_err());
        assert!(e.start_new(None).is_err());
    }

    #[test]
    fn unknown_choice_is_rejected_without_state_change() {
        let mut e = engine(vec![0]);
        e.start(None).unwrap();
        let err = e.select_choice("road_rage").unwrap_err();
        assert_eq!(
            err,
            ScenarioError::UnknownChoice {
                scenario_id: "unexpected_interruption".into(),
                choice_id: "road_rage".into(),
            }
        );
        assert_eq!(e.state(), SessionState::Presenting);
    }

    #[test]
    fn start_after_exit_reenters() {
        let mut e = engine(vec![0]);
        e.start(None).unwrap();
        run_once(&mut e);
        e.exit().unwrap();
        assert!(e.exit().is_err());
        e.start(Some(EmotionTag::Sadness)).unwrap();
        assert_eq!(e.state(), SessionState::Presenting);
        assert_eq!(e.history().len(), 1);
    }

    #[test]
    fn abandon_returns_to_idle_from_either_open_state() {
        let mut e = engine(vec![0]);
        assert_eq!(
            e.abandon().unwrap_err(),
            ScenarioError::InvalidTransition { operation: "abandon a scenario", state: SessionState::Idle }
        );

        e.start(Some(EmotionTag::Anger)).unwrap();
        let dropped = e.abandon().unwrap();
        assert_eq!(dropped.id, "unexpected_interruption");
        assert_eq!(e.state(), SessionState::Idle);
        assert!(e.active_scenario().is_none());

        e.start(None).unwrap();
        e.select_choice("mindful_pause").unwrap();
        e.abandon().unwrap();
        assert!(e.selected_choice().is_none());
        assert!(e.history().is_empty());

        e.start(None).unwrap();
        run_once(&mut e);
        assert!(e.abandon().is_err());
        assert_eq!(e.history().len(), 1);
    }

    #[test]
    fn empty_library_reports_no_scenarios() {
        let mut e = ScenarioEngine::new(ScenarioLibrary::new(vec![]), SequencePicker::default());
        assert_eq!(e.start(None).unwrap_err(), ScenarioError::NoScenarios);
        assert_eq!(e.state(), SessionState::Idle);
    }

    #[test]
    fn session_survives_serialization() {
        let mut e = engine(vec![1]);
        e.start(Some(EmotionTag::Anger)).unwrap();
        e.select_choice("breathing_acceptance").unwrap();
        let json = serde_json::to_string(e.session()).unwrap();

        let session: ScenarioSession = serde_json::from_str(&json).unwrap();
        let mut resumed =
            ScenarioEngine::from_session(ScenarioLibrary::builtin(), SequencePicker::default(), session);
        assert_eq!(resumed.state(), SessionState::Reflecting);
        let result = resumed.complete("calma").unwrap();
        assert_eq!(result.scenario.id, "traffic_frustration");
        assert_eq!(result.presence_level, PresenceLevel::PRESENT);
    }

    #[test]
    fn recent_ids_take_the_tail() {
        let library = ScenarioLibrary::new((0..5).map(|i| universal(&format!("u{i}"))).collect());
        let mut e = ScenarioEngine::new(library, SequencePicker::new(vec![0]));
        for _ in 0..5 {
            e.start_or_new(None);
            run_once(&mut e);
        }
        assert_eq!(e.recent_ids(), ["u2", "u3", "u0"]);
    }
}
