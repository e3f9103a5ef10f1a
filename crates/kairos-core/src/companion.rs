//! Companion facade wiring the presence engine together.
//!
//! Classifier output is remembered and used both for the environment and as
//! the scenario selection hint; scenario and immersive-session outcomes are
//! forwarded to the tracker. Every mutating call persists the affected
//! records to the store and queues [`Event`]s for [`Companion::drain_events`].

use chrono::Utc;
use tracing::debug;

use crate::emotion::{EmotionClassifier, EmotionTag, EmotionalProfile, IntensityLevel, Lexicon};
use crate::environment::{
    BreathingGuide, Environment, EnvironmentCatalog, EnvironmentComposer, ImmersiveExperience,
};
use crate::error::Result;
use crate::events::Event;
use crate::progression::{
    ActivityEvent, ActivityKind, Award, ProgressionState, ProgressionTracker, RecentActivity,
    TrackerSettings,
};
use crate::scenario::{
    ChoiceFeedback, IndexPicker, RandomPicker, Scenario, ScenarioEngine, ScenarioLibrary,
    ScenarioResult, ScenarioSession, ScenarioSettings,
};
use crate::storage::{Config, ProgressStore};

/// Storage key for the serialized scenario session.
pub const SESSION_KEY: &str = "scenario_session";
/// Storage key for the most recent emotional profile.
pub const LAST_PROFILE_KEY: &str = "last_profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompanionSettings {
    pub tracker: TrackerSettings,
    pub scenarios: ScenarioSettings,
}

impl From<&Config> for CompanionSettings {
    fn from(config: &Config) -> Self {
        Self {
            tracker: config.tracker_settings(),
            scenarios: config.scenario_settings(),
        }
    }
}

pub struct Companion<S, P = RandomPicker> {
    store: S,
    lexicon: Lexicon,
    catalog: EnvironmentCatalog,
    tracker: ProgressionTracker,
    scenarios: ScenarioEngine<P>,
    last_profile: Option<EmotionalProfile>,
    events: Vec<Event>,
}

impl<S: ProgressStore, P: IndexPicker> Companion<S, P> {
    /// Restore every persisted record from `store`. Missing records start fresh.
    ///
    /// # Errors
    /// Returns an error if the store fails or a record cannot be parsed.
    pub fn load(store: S, settings: CompanionSettings, picker: P) -> Result<Self> {
        let tracker = ProgressionTracker::load(&store, settings.tracker)?;
        let session = match store.load(SESSION_KEY)? {
            Some(raw) => serde_json::from_str::<ScenarioSession>(&raw)?,
            None => ScenarioSession::new(),
        };
        let last_profile = match store.load(LAST_PROFILE_KEY)? {
            Some(raw) => Some(serde_json::from_str::<EmotionalProfile>(&raw)?),
            None => None,
        };
        let scenarios = ScenarioEngine::from_session(ScenarioLibrary::builtin(), picker, session)
            .with_settings(settings.scenarios);

        Ok(Self {
            store,
            lexicon: Lexicon::builtin(),
            catalog: EnvironmentCatalog::builtin(),
            tracker,
            scenarios,
            last_profile,
            events: Vec::new(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn last_profile(&self) -> Option<&EmotionalProfile> {
        self.last_profile.as_ref()
    }

    /// Dominant emotion of the last profile, used as the scenario hint.
    pub fn emotional_hint(&self) -> Option<EmotionTag> {
        self.last_profile.as_ref().and_then(|p| p.dominant_emotion)
    }

    pub fn progression(&self) -> ProgressionState {
        self.tracker.current_state()
    }

    pub fn recent(&self, limit: usize) -> Vec<RecentActivity> {
        self.tracker.recent(limit)
    }

    pub fn scenarios(&self) -> &ScenarioEngine<P> {
        &self.scenarios
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Environment for the last profile; peace at medium intensity when
    /// nothing dominant was detected.
    pub fn environment(&self) -> Environment {
        let composer = EnvironmentComposer::new(&self.catalog);
        match &self.last_profile {
            Some(profile) => composer.compose_for(profile),
            None => composer.compose_for(&EmotionalProfile::none()),
        }
    }

    pub fn compose(&self, emotion: EmotionTag, intensity: IntensityLevel) -> Environment {
        EnvironmentComposer::new(&self.catalog).compose(emotion, intensity)
    }

    pub fn classify(&self, text: &str) -> EmotionalProfile {
        EmotionClassifier::new(&self.lexicon).classify(text)
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Classify text and remember the profile.
    ///
    /// # Errors
    /// Returns an error if the profile cannot be persisted.
    pub fn reflect(&mut self, text: &str) -> Result<&EmotionalProfile> {
        let profile = self.classify(text);
        self.store
            .save(LAST_PROFILE_KEY, &serde_json::to_string(&profile)?)?;
        self.events.push(Event::ProfileAnalyzed {
            dominant_emotion: profile.dominant_emotion,
            intensity: profile.intensity,
            at: profile.analyzed_at,
        });
        Ok(self.last_profile.insert(profile))
    }

    /// Award points for an activity and persist progression.
    ///
    /// # Errors
    /// Returns an error if progression cannot be persisted.
    pub fn record(&mut self, activity: ActivityEvent) -> Result<ProgressionState> {
        let kind = activity.kind.clone();
        let award = self.award(activity)?;
        self.awarded(kind, &award);
        Ok(award.state)
    }

    /// Close an immersive session and award its points.
    ///
    /// # Errors
    /// Returns an error if progression cannot be persisted.
    pub fn finish_experience(
        &mut self,
        environment: &Environment,
        guide: &BreathingGuide,
        user_input: &str,
        user_reflection: &str,
    ) -> Result<(ImmersiveExperience, ProgressionState)> {
        let experience = ImmersiveExperience::finish(environment, guide, user_input, user_reflection);
        let state = self.record(experience.activity())?;
        Ok((experience, state))
    }

    /// Start a scenario session, biased by the last profile.
    ///
    /// # Errors
    /// Fails if the session is not idle or exited, or the session cannot be persisted.
    pub fn start_scenario(&mut self) -> Result<Scenario> {
        let hint = self.emotional_hint();
        let scenario = self.scenarios.start(hint)?.clone();
        self.presented(&scenario, hint)?;
        Ok(scenario)
    }

    /// Draw the next scenario after completing one.
    ///
    /// # Errors
    /// Fails if the session is not completed, or the session cannot be persisted.
    pub fn start_new_scenario(&mut self) -> Result<Scenario> {
        let hint = self.emotional_hint();
        let scenario = self.scenarios.start_new(hint)?.clone();
        self.presented(&scenario, hint)?;
        Ok(scenario)
    }

    /// # Errors
    /// Fails if no scenario is being presented, the id is unknown, or the
    /// session cannot be persisted.
    pub fn select_choice(&mut self, choice_id: &str) -> Result<ChoiceFeedback> {
        let choice = self.scenarios.select_choice(choice_id)?.clone();
        let feedback = ChoiceFeedback::from(&choice);
        let scenario_id = self
            .scenarios
            .active_scenario()
            .map(|s| s.id.clone())
            .unwrap_or_default();
        self.save_session()?;
        self.events.push(Event::ChoiceSelected {
            scenario_id,
            choice_id: choice.id,
            presence_level: choice.presence_level,
            at: Utc::now(),
        });
        Ok(feedback)
    }

    /// Complete the scenario and forward its result to the tracker.
    ///
    /// # Errors
    /// Fails if no choice was made, or state cannot be persisted.
    pub fn complete_scenario(
        &mut self,
        reflection: &str,
    ) -> Result<(ScenarioResult, ProgressionState)> {
        let result = self.scenarios.complete(reflection)?;
        let activity = result.activity_event();
        let kind = activity.kind.clone();
        // Points are persisted before the session is marked completed.
        let award = self.award(activity)?;
        self.save_session()?;

        self.events.push(Event::ScenarioCompleted {
            scenario_id: result.scenario.id.clone(),
            presence_level: result.presence_level,
            at: result.timestamp,
        });
        self.awarded(kind, &award);
        Ok((result, award.state))
    }

    /// Drop the scenario in progress so a new one can be started.
    ///
    /// # Errors
    /// Fails if no scenario is in progress, or the session cannot be persisted.
    pub fn abandon_scenario(&mut self) -> Result<Scenario> {
        let scenario = self.scenarios.abandon()?;
        self.save_session()?;
        self.events.push(Event::ScenarioAbandoned {
            scenario_id: scenario.id.clone(),
            at: Utc::now(),
        });
        Ok(scenario)
    }

    /// Leave the simulator after a completed scenario.
    ///
    /// # Errors
    /// Fails if the session is not completed, or cannot be persisted.
    pub fn exit_scenario(&mut self) -> Result<()> {
        self.scenarios.exit()?;
        self.save_session()?;
        self.events.push(Event::SimulatorExited {
            completed: self.scenarios.history().len(),
            at: Utc::now(),
        });
        Ok(())
    }

    fn award(&mut self, activity: ActivityEvent) -> Result<Award> {
        let award = self.tracker.award(activity);
        self.tracker.save(&mut self.store)?;
        Ok(award)
    }

    fn awarded(&mut self, activity: ActivityKind, award: &Award) {
        let at = Utc::now();
        self.events.push(Event::PointsAwarded {
            activity,
            points: award.points_awarded,
            total: award.state.points,
            at,
        });
        if award.leveled_up() {
            self.events.push(Event::LevelUp {
                level: award.state.level,
                level_name: award.state.level_name.clone(),
                at,
            });
        }
    }

    fn presented(&mut self, scenario: &Scenario, hint: Option<EmotionTag>) -> Result<()> {
        self.save_session()?;
        debug!(scenario = %scenario.id, "scenario session saved");
        self.events.push(Event::ScenarioPresented {
            scenario_id: scenario.id.clone(),
            hint,
            at: Utc::now(),
        });
        Ok(())
    }

    fn save_session(&mut self) -> Result<()> {
        let raw = serde_json::to_string(self.scenarios.session())?;
        self.store.save(SESSION_KEY, &raw)
    }
}
