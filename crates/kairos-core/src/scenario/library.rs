//! Static scenario catalogue for guided presence practice.

use serde::{Deserialize, Serialize};

use super::presence::PresenceLevel;
use crate::emotion::EmotionTag;

/// Which pool a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioCategory {
    /// Offered for any emotional state.
    Universal,
    /// Offered when the hint matches.
    Emotion(EmotionTag),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
    pub presence_level: PresenceLevel,
    pub consequence: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub context: String,
    pub situation: String,
    pub category: ScenarioCategory,
    pub choices: Vec<Choice>,
    /// Scene description for the surrounding environment.
    pub environment_hint: String,
    pub learning_focus: String,
}

impl Scenario {
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}

/// Immutable set of scenarios, universal and emotion-specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioLibrary {
    scenarios: Vec<Scenario>,
}

impl ScenarioLibrary {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Selection pool for a hint: every universal scenario, then the
    /// scenarios of the hinted emotion (if any exist).
    pub fn candidates(&self, hint: Option<EmotionTag>) -> Vec<&Scenario> {
        let universal = self
            .scenarios
            .iter()
            .filter(|s| s.category == ScenarioCategory::Universal);
        let specific = self.scenarios.iter().filter(move |s| match (hint, s.category) {
            (Some(tag), ScenarioCategory::Emotion(cat)) => tag == cat,
            _ => false,
        });
        universal.chain(specific).collect()
    }

    /// Built-in scenarios.
    pub fn builtin() -> Self {
        use EmotionTag::*;
        use PresenceLevel as P;
        use ScenarioCategory::{Emotion, Universal};

        Self::new(vec![
            scenario(
                "work_deadline",
                "Prazo Apertado no Trabalho",
                "Você tem uma apresentação importante em 2 horas e ainda não terminou de preparar. Seu chefe acabou de enviar mais três tarefas \"urgentes\".",
                "Você está no seu escritório, sentindo o coração acelerar. O que você faz primeiro?",
                Emotion(Anxiety),
                [
                    ("panic_rush", "Entro em pânico e tento fazer tudo ao mesmo tempo", P::REACTIVE,
                        "Você se sente mais ansioso e comete erros. A qualidade do trabalho diminui.",
                        "O pânico raramente nos ajuda a ser mais eficientes. Que tal uma pausa para respirar?"),
                    ("prioritize_breathe", "Paro, respiro fundo e priorizo as tarefas", P::PRESENT,
                        "Você se sente mais centrado e consegue focar no que realmente importa.",
                        "Excelente! A presença nos permite ver com clareza mesmo sob pressão."),
                    ("communicate_boundaries", "Comunico ao chefe sobre o conflito de prioridades", P::WISE,
                        "Seu chefe aprecia a transparência e ajuda a redefinir as prioridades.",
                        "Comunicação consciente é um ato de coragem e sabedoria. Você honrou suas limitações."),
                ],
                "Busy office with papers scattered, computer screen glowing, clock ticking loudly",
                "Gestão de ansiedade e priorização consciente",
            ),
            scenario(
                "social_anxiety",
                "Ansiedade Social em Evento",
                "Você está em um evento de networking importante para sua carreira, mas se sente desconfortável e fora do lugar.",
                "Você está parado no canto da sala, observando as pessoas conversarem. Como você se aproxima da situação?",
                Emotion(Anxiety),
                [
                    ("avoid_hide", "Fico no celular evitando contato visual", P::REACTIVE,
                        "Você perde oportunidades valiosas e se sente ainda mais isolado.",
                        "Evitar pode parecer seguro, mas nos impede de crescer. Que tal um pequeno passo?"),
                    ("mindful_observation", "Observo conscientemente o ambiente e respiro", P::GROWING,
                        "Você se sente mais calmo e nota oportunidades naturais de conversa.",
                        "A observação consciente transforma ansiedade em curiosidade. Bem feito!"),
                    ("authentic_approach", "Me aproximo de alguém com autenticidade", P::PRESENT,
                        "Você tem uma conversa genuína e faz uma conexão real.",
                        "Autenticidade é magnética. Você escolheu a coragem sobre o conforto."),
                ],
                "Crowded networking event, soft lighting, people in small groups talking",
                "Transformação de ansiedade social em presença autêntica",
            ),
            scenario(
                "traffic_frustration",
                "Trânsito Engarrafado",
                "Você está atrasado para um compromisso importante e preso em um engarrafamento. Um motorista acabou de \"furar\" sua frente.",
                "Você sente a raiva subindo. Suas mãos apertam o volante. O que você escolhe fazer?",
                Emotion(Anger),
                [
                    ("road_rage", "Buzino, grito e faço gestos para o motorista", P::REACTIVE,
                        "Você se sente ainda mais estressado e o conflito escala.",
                        "A raiva expressa impulsivamente raramente resolve algo. Ela apenas alimenta mais raiva."),
                    ("breathing_acceptance", "Respiro profundamente e aceito a situação", P::PRESENT,
                        "Você se sente mais calmo e consegue pensar em soluções.",
                        "Que transformação! Você escolheu a paz sobre a reatividade."),
                    ("compassionate_understanding", "Imagino que o motorista também pode estar passando por dificuldades", P::WISE,
                        "Sua raiva se transforma em compreensão e você se sente em paz.",
                        "Compaixão é o antídoto mais poderoso para a raiva. Você encontrou sabedoria."),
                ],
                "Heavy traffic, car horns honking, tension in the air, red traffic lights",
                "Transformação de raiva em compreensão e aceitação",
            ),
            scenario(
                "relationship_ending",
                "Fim de Relacionamento",
                "Você acabou de terminar um relacionamento importante. Está em casa, sozinho, sentindo o peso da perda.",
                "As lágrimas vêm e você sente um vazio no peito. Como você escolhe estar com essa dor?",
                Emotion(Sadness),
                [
                    ("numb_distract", "Tento me distrair com TV, comida ou redes sociais", P::AWARE,
                        "A distração oferece alívio temporário, mas a dor permanece não processada.",
                        "Distrações podem ajudar momentaneamente, mas a cura vem do acolhimento."),
                    ("feel_fully", "Permito-me sentir completamente a tristeza", P::PRESENT,
                        "Você sente a dor, mas também uma estranha sensação de alívio e autenticidade.",
                        "Que coragem! Sentir plenamente é o primeiro passo para a cura genuína."),
                    ("gratitude_love", "Honro o relacionamento com gratidão pelo que foi vivido", P::WISE,
                        "A tristeza permanece, mas é acompanhada por uma sensação de completude e amor.",
                        "Que sabedoria profunda! Você transformou perda em gratidão e amor."),
                ],
                "Quiet apartment, soft lighting, tissues nearby, rain outside the window",
                "Processamento consciente da tristeza e transformação em gratidão",
            ),
            scenario(
                "career_crossroads",
                "Encruzilhada na Carreira",
                "Você recebeu duas ofertas de emprego muito diferentes. Uma é segura mas entediante, outra é arriscada mas alinhada com seus sonhos.",
                "Você está na mesa da cozinha com os dois contratos à sua frente. Sua mente está em turbilhão. Como você aborda essa decisão?",
                Emotion(Confusion),
                [
                    ("overthink_pros_cons", "Faço listas intermináveis de prós e contras", P::AWARE,
                        "Você se sente mais confuso e ansioso com tantas variáveis.",
                        "A mente analítica tem seu lugar, mas às vezes precisamos ouvir o coração."),
                    ("body_wisdom", "Imagino-me em cada situação e sinto as sensações no corpo", P::PRESENT,
                        "Você sente uma clareza sutil emergindo através das sensações corporais.",
                        "O corpo é um sábio conselheiro. Você acessou uma inteligência mais profunda."),
                    ("values_alignment", "Reflito sobre meus valores mais profundos e o que realmente importa", P::WISE,
                        "A decisão se torna clara quando alinhada com seus valores essenciais.",
                        "Quando nos conectamos com nossos valores, a confusão se dissolve em clareza."),
                ],
                "Kitchen table with two contracts, morning coffee, sunlight streaming through window",
                "Tomada de decisão consciente através de valores e sabedoria corporal",
            ),
            scenario(
                "unexpected_interruption",
                "Interrupção Inesperada",
                "Você está profundamente concentrado em uma tarefa importante quando alguém interrompe com uma \"urgência\".",
                "Você sente sua concentração se quebrar. Como você responde a essa interrupção?",
                Universal,
                [
                    ("reactive_irritation", "Demonstro irritação e respondo de forma brusca", P::REACTIVE,
                        "A pessoa se sente mal e você perde ainda mais tempo com o conflito.",
                        "Reatividade cria mais problemas. Que tal uma pausa consciente?"),
                    ("mindful_pause", "Faço uma pausa, respiro e pergunto sobre a urgência", P::PRESENT,
                        "Você descobre que não era tão urgente e negocia um melhor momento.",
                        "A pausa consciente cria espaço para sabedoria. Excelente escolha!"),
                    ("compassionate_presence", "Ofereço presença total, mesmo que por alguns minutos", P::WISE,
                        "A pessoa se sente ouvida e você retorna ao trabalho com o coração leve.",
                        "Presença genuína é o presente mais valioso que podemos oferecer."),
                ],
                "Focused workspace suddenly disrupted, person standing at door, scattered attention",
                "Gestão consciente de interrupções e presença relacional",
            ),
        ])
    }
}

impl Default for ScenarioLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

type ChoiceRow<'a> = (&'a str, &'a str, PresenceLevel, &'a str, &'a str);

#[allow(clippy::too_many_arguments)]
fn scenario<const N: usize>(
    id: &str,
    title: &str,
    context: &str,
    situation: &str,
    category: ScenarioCategory,
    choices: [ChoiceRow<'_>; N],
    environment_hint: &str,
    learning_focus: &str,
) -> Scenario {
    Scenario {
        id: id.into(),
        title: title.into(),
        context: context.into(),
        situation: situation.into(),
        category,
        choices: choices
            .into_iter()
            .map(|(id, text, presence_level, consequence, feedback)| Choice {
                id: id.into(),
                text: text.into(),
                presence_level,
                consequence: consequence.into(),
                feedback: feedback.into(),
            })
            .collect(),
        environment_hint: environment_hint.into(),
        learning_focus: learning_focus.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let library = ScenarioLibrary::builtin();
        let ids: HashSet<_> = library.scenarios().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), library.scenarios().len());
        assert_eq!(library.scenarios().len(), 6);
        for s in library.scenarios() {
            assert_eq!(s.choices.len(), 3);
        }
    }

    #[test]
    fn no_hint_offers_only_universal() {
        let library = ScenarioLibrary::builtin();
        let pool = library.candidates(None);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "unexpected_interruption");
    }

    #[test]
    fn hint_adds_emotion_pool_after_universal() {
        let library = ScenarioLibrary::builtin();
        let ids: Vec<_> = library
            .candidates(Some(EmotionTag::Anxiety))
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["unexpected_interruption", "work_deadline", "social_anxiety"]);
    }

    #[test]
    fn hint_without_scenarios_falls_back_to_universal() {
        let library = ScenarioLibrary::builtin();
        assert_eq!(library.candidates(Some(EmotionTag::Joy)).len(), 1);
    }

    #[test]
    fn choice_lookup() {
        let library = ScenarioLibrary::builtin();
        let s = library.get("traffic_frustration").unwrap();
        assert_eq!(s.choice("road_rage").unwrap().presence_level, PresenceLevel::REACTIVE);
        assert!(s.choice("nope").is_none());
    }
}
