//! Pure state transitions
//!
//! `Reducer::apply` takes the current state and an action and returns the
//! next state together with the effects the screen should perform. The only
//! source of nondeterminism (which message or prompt to show) comes from the
//! caller's RNG.

use super::action::Action;
use super::effect::{Effect, NotificationLevel};
use super::error::{StateError, StateResult};
use super::model::{AppState, Tab, MAX_GARDEN_PROGRESS};
use crate::content::{self, Character, TextFormat, MAX_MOOD, MIN_MOOD};
use crate::sentiment::{text_len, Sentiment, SentimentClassifier};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sparkles spawned per garden sparkle effect
const SPARKLES_PER_EFFECT: usize = 5;

/// Encouragement fires every time the journal length (UTF-16 units) hits a multiple of this
const WRITING_MILESTONE_CHARS: usize = 50;

/// Garden progress gained per "continue journey"
const JOURNEY_PROGRESS_STEP: u8 = 2;

/// Points awarded per interaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rewards {
    #[serde(default = "default_character_points")]
    pub character: u32,

    #[serde(default = "default_plant_points")]
    pub plant: u32,

    #[serde(default = "default_journey_points")]
    pub journey: u32,

    #[serde(default = "default_mood_points")]
    pub mood: u32,

    #[serde(default = "default_formatting_points")]
    pub formatting: u32,
}

fn default_character_points() -> u32 {
    5
}

fn default_plant_points() -> u32 {
    3
}

fn default_journey_points() -> u32 {
    10
}

fn default_mood_points() -> u32 {
    15
}

fn default_formatting_points() -> u32 {
    2
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            character: default_character_points(),
            plant: default_plant_points(),
            journey: default_journey_points(),
            mood: default_mood_points(),
            formatting: default_formatting_points(),
        }
    }
}

/// Next state plus the effects that go with it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Applies actions to app state
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    classifier: SentimentClassifier,
    rewards: Rewards,
}

impl Reducer {
    pub fn new(classifier: SentimentClassifier, rewards: Rewards) -> Self {
        Self {
            classifier,
            rewards,
        }
    }

    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    pub fn rewards(&self) -> &Rewards {
        &self.rewards
    }

    /// Apply one action
    ///
    /// On error the input state is left as it was and no effects apply.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        state: &AppState,
        action: Action,
        rng: &mut R,
    ) -> StateResult<Transition> {
        let mut next = Step {
            state: state.clone(),
            effects: Vec::new(),
        };

        match action {
            Action::SwitchTab { tab } => {
                let tab: Tab = tab.parse()?;
                self.switch_tab(&mut next, tab, rng);
            }
            Action::CharacterClicked { character } => {
                let Ok(character) = character.parse::<Character>() else {
                    tracing::debug!(%character, "Click on unknown garden character ignored");
                    return Ok(next.finish());
                };
                next.notify(character.random_message(rng), NotificationLevel::Success);
                next.highlight(character.as_str(), 1.3, rng);
                next.award(self.rewards.character, "Character interaction");
            }
            Action::PlantClicked { plant } => {
                next.notify(content::plant_message(&plant), NotificationLevel::Success);
                next.highlight(&plant, 1.2, rng);
                next.award(self.rewards.plant, "Plant interaction");
            }
            Action::ContinueJourney => {
                next.notify(
                    "Your wellness journey continues! Keep growing! 🌱✨",
                    NotificationLevel::Success,
                );
                next.award(self.rewards.journey, "Journey continuation");

                let progress = next
                    .state
                    .user
                    .garden_progress
                    .saturating_add(JOURNEY_PROGRESS_STEP)
                    .min(MAX_GARDEN_PROGRESS);
                next.state.user.garden_progress = progress;
                next.effects.push(Effect::GardenProgress { progress });
            }
            Action::OpenMoodLogger => {
                next.state.mood.modal_open = true;
                next.effects.push(Effect::MoodModal { open: true });
                next.notify("Select your current mood! 😊", NotificationLevel::Info);
            }
            Action::CloseMoodModal => next.close_mood_modal(),
            Action::SelectMood { mood } => {
                if !(MIN_MOOD..=MAX_MOOD).contains(&mood) {
                    return Err(StateError::InvalidMood(mood));
                }
                next.state.mood.selected = Some(mood);
                next.effects.push(Effect::MoodSelection { mood: Some(mood) });
                next.notify(
                    "Mood selected! Click \"Log Mood\" to save.",
                    NotificationLevel::Info,
                );
            }
            Action::LogMood => match next.state.mood.selected {
                None => {
                    next.notify("Please select a mood first! 😊", NotificationLevel::Warning);
                }
                Some(mood) => {
                    next.state.mood.record(mood);
                    next.mood_chart();
                    next.mood_display();
                    next.close_mood_modal();
                    next.notify("Mood logged successfully! 📊", NotificationLevel::Success);
                    next.award(self.rewards.mood, "Mood tracking");
                }
            },
            Action::SetActiveNav { button } => {
                next.effects.push(Effect::PressFeedback {
                    target: button.clone(),
                });
                next.state.active_nav = Some(button);
                next.notify("Navigation updated! 📱", NotificationLevel::Info);
            }
            Action::JournalInput { text } => self.journal_input(&mut next, text, rng),
            Action::FormatText { format } => self.format_text(&mut next, format),
            Action::Tick => {
                if next.state.current_tab == Tab::Garden {
                    let elements = next.state.garden.element_names();
                    if let Some(target) = elements.choose(rng) {
                        next.sparkle(target, rng);
                    }
                }
            }
        }

        Ok(next.finish())
    }

    fn switch_tab<R: Rng + ?Sized>(&self, next: &mut Step, tab: Tab, rng: &mut R) {
        next.state.current_tab = tab;
        next.effects.push(Effect::ActivateTab { tab });

        match tab {
            Tab::Dashboard => {
                next.mood_chart();
                next.mood_display();
            }
            Tab::Journal => {
                next.suggest(Sentiment::Neutral, rng);
                next.effects.push(Effect::ResizeSentimentChart);
            }
            Tab::Discovery => {
                next.effects.push(Effect::AnimateContentCards);
                next.notify("Discover wellness content! 🔍", NotificationLevel::Info);
            }
            Tab::Garden => {}
        }

        next.notify(
            format!("Switched to {} section! ✨", tab.title()),
            NotificationLevel::Success,
        );
    }

    fn journal_input<R: Rng + ?Sized>(&self, next: &mut Step, text: String, rng: &mut R) {
        let sentiment = self.classifier.classify(&text);
        let length = text_len(&text);

        tracing::debug!(length, %sentiment, "Journal text updated");

        next.state.journal.text = text;
        next.state.journal.sentiment = sentiment;
        next.effects.push(Effect::SentimentChart {
            values: sentiment.as_array(),
            dominant: sentiment.dominant,
        });
        next.effects.push(Effect::SentimentEmoji {
            emoji: content::sentiment_emoji(sentiment.dominant).to_string(),
        });
        next.suggest(sentiment.dominant, rng);

        if length > 0 && length % WRITING_MILESTONE_CHARS == 0 {
            next.notify(
                "Keep writing! Your thoughts are being analyzed. ✍️",
                NotificationLevel::Info,
            );
        }
    }

    fn format_text(&self, next: &mut Step, format: TextFormat) {
        next.effects.push(Effect::PressFeedback {
            target: format.label().to_lowercase(),
        });
        next.notify(
            format!("{} formatting applied!", format.label()),
            NotificationLevel::Info,
        );
        next.award(self.rewards.formatting, "Text formatting");
    }
}

/// State and effects being built up for one transition
struct Step {
    state: AppState,
    effects: Vec<Effect>,
}

impl Step {
    fn finish(self) -> Transition {
        Transition {
            state: self.state,
            effects: self.effects,
        }
    }

    fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.effects.push(Effect::notify(message, level));
    }

    fn award(&mut self, points: u32, reason: &str) {
        self.state.user.points = self.state.user.points.saturating_add(points);
        self.effects.push(Effect::Points {
            total: self.state.user.points,
        });
        self.notify(
            format!("+{} points for {}! ⭐", points, reason),
            NotificationLevel::Success,
        );
    }

    fn highlight<R: Rng + ?Sized>(&mut self, target: &str, scale: f32, rng: &mut R) {
        self.effects.push(Effect::Highlight {
            target: target.to_string(),
            scale,
        });
        self.sparkle(target, rng);
    }

    fn sparkle<R: Rng + ?Sized>(&mut self, target: &str, rng: &mut R) {
        let mut glyphs = Vec::with_capacity(SPARKLES_PER_EFFECT);
        for _ in 0..SPARKLES_PER_EFFECT {
            if let Some(glyph) = content::SPARKLES.choose(rng) {
                glyphs.push(glyph.to_string());
            }
        }
        self.effects.push(Effect::Sparkle {
            target: target.to_string(),
            glyphs,
        });
    }

    fn suggest<R: Rng + ?Sized>(&mut self, sentiment: Sentiment, rng: &mut R) {
        let text = content::random_prompt(sentiment, rng).to_string();
        self.state.journal.prompt = Some(text.clone());
        self.effects.push(Effect::Suggestion { text });
    }

    fn mood_chart(&mut self) {
        self.effects.push(Effect::MoodChart {
            labels: content::MOOD_CHART_LABELS
                .iter()
                .map(|l| l.to_string())
                .collect(),
            values: self.state.mood.history.clone(),
        });
    }

    fn mood_display(&mut self) {
        let mood = self.state.mood.current;
        let face = content::mood_face(mood);
        self.effects.push(Effect::MoodDisplay {
            mood,
            emoji: face.emoji.to_string(),
            label: face.label.to_string(),
        });
    }

    fn close_mood_modal(&mut self) {
        self.state.mood.modal_open = false;
        self.state.mood.selected = None;
        self.effects.push(Effect::MoodModal { open: false });
        self.effects.push(Effect::MoodSelection { mood: None });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentResult;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Reducer, AppState, StdRng) {
        (
            Reducer::default(),
            AppState::default(),
            StdRng::seed_from_u64(42),
        )
    }

    fn notifications(effects: &[Effect]) -> Vec<(&str, NotificationLevel)> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify { message, level } => Some((message.as_str(), *level)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_apply_does_not_touch_input() {
        let (reducer, state, mut rng) = setup();
        let before = state.clone();
        let transition = reducer
            .apply(&state, Action::ContinueJourney, &mut rng)
            .unwrap();

        assert_eq!(state, before);
        assert_ne!(transition.state, before);
    }

    #[test]
    fn test_switch_tab_dashboard() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::SwitchTab {
                    tab: "dashboard".to_string(),
                },
                &mut rng,
            )
            .unwrap();

        assert_eq!(t.state.current_tab, Tab::Dashboard);
        assert_eq!(t.effects[0], Effect::ActivateTab { tab: Tab::Dashboard });
        assert!(matches!(&t.effects[1], Effect::MoodChart { values, labels }
            if values == &vec![3, 4, 3, 5, 4, 5, 4] && labels.len() == 7));
        assert!(matches!(&t.effects[2], Effect::MoodDisplay { label, .. } if label == "Good"));
        assert_eq!(
            notifications(&t.effects),
            vec![("Switched to Dashboard section! ✨", NotificationLevel::Success)]
        );
    }

    #[test]
    fn test_switch_tab_journal_shows_neutral_prompt() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::SwitchTab {
                    tab: "journal".to_string(),
                },
                &mut rng,
            )
            .unwrap();

        let prompt = t.state.journal.prompt.clone().unwrap();
        assert!(content::journal_prompts(Sentiment::Neutral).contains(&prompt.as_str()));
        assert!(t.effects.contains(&Effect::ResizeSentimentChart));
    }

    #[test]
    fn test_switch_tab_discovery() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::SwitchTab {
                    tab: "discovery".to_string(),
                },
                &mut rng,
            )
            .unwrap();

        assert!(t.effects.contains(&Effect::AnimateContentCards));
        assert_eq!(notifications(&t.effects).len(), 2);
    }

    #[test]
    fn test_switch_unknown_tab() {
        let (reducer, state, mut rng) = setup();
        let err = reducer
            .apply(
                &state,
                Action::SwitchTab {
                    tab: "settings".to_string(),
                },
                &mut rng,
            )
            .unwrap_err();
        assert_eq!(err, StateError::UnknownTab("settings".to_string()));
    }

    #[test]
    fn test_character_interaction_awards_points() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::CharacterClicked {
                    character: "bee".to_string(),
                },
                &mut rng,
            )
            .unwrap();

        assert_eq!(t.state.user.points, 345);
        let notes = notifications(&t.effects);
        assert!(Character::Bee.messages().contains(&notes[0].0));
        assert_eq!(
            notes[1],
            ("+5 points for Character interaction! ⭐", NotificationLevel::Success)
        );
        assert!(t.effects.contains(&Effect::Highlight {
            target: "bee".to_string(),
            scale: 1.3
        }));
        assert!(matches!(
            t.effects.iter().find(|e| e.kind() == "sparkle"),
            Some(Effect::Sparkle { glyphs, .. }) if glyphs.len() == SPARKLES_PER_EFFECT
        ));
    }

    #[test]
    fn test_unknown_character_is_ignored() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::CharacterClicked {
                    character: "dragon".to_string(),
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_plant_interaction() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::PlantClicked {
                    plant: "sunflowers".to_string(),
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(t.state.user.points, 343);
        assert_eq!(
            notifications(&t.effects)[0].0,
            "The sunflowers turn toward your bright spirit! 🌻"
        );

        let t = reducer
            .apply(
                &state,
                Action::PlantClicked {
                    plant: "cactus".to_string(),
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(notifications(&t.effects)[0].0, content::DEFAULT_PLANT_MESSAGE);
    }

    #[test]
    fn test_continue_journey_caps_progress() {
        let (reducer, mut state, mut rng) = setup();
        let t = reducer
            .apply(&state, Action::ContinueJourney, &mut rng)
            .unwrap();
        assert_eq!(t.state.user.garden_progress, 74);
        assert_eq!(t.state.user.points, 350);
        assert!(t.effects.contains(&Effect::GardenProgress { progress: 74 }));

        state.user.garden_progress = 99;
        let t = reducer
            .apply(&state, Action::ContinueJourney, &mut rng)
            .unwrap();
        assert_eq!(t.state.user.garden_progress, 100);
    }

    #[test]
    fn test_mood_logging_flow() {
        let (reducer, state, mut rng) = setup();

        let t = reducer
            .apply(&state, Action::OpenMoodLogger, &mut rng)
            .unwrap();
        assert!(t.state.mood.modal_open);

        let t = reducer
            .apply(&t.state, Action::SelectMood { mood: 2 }, &mut rng)
            .unwrap();
        assert_eq!(t.state.mood.selected, Some(2));

        let t = reducer.apply(&t.state, Action::LogMood, &mut rng).unwrap();
        assert_eq!(t.state.mood.current, 2);
        assert_eq!(t.state.mood.history, vec![4, 3, 5, 4, 5, 4, 2]);
        assert_eq!(t.state.mood.selected, None);
        assert!(!t.state.mood.modal_open);
        assert_eq!(t.state.user.points, 355);
        assert!(matches!(&t.effects[1], Effect::MoodDisplay { label, .. } if label == "Okay"));
        assert_eq!(
            notifications(&t.effects),
            vec![
                ("Mood logged successfully! 📊", NotificationLevel::Success),
                ("+15 points for Mood tracking! ⭐", NotificationLevel::Success),
            ]
        );
    }

    #[test]
    fn test_log_mood_without_selection_warns() {
        let (reducer, state, mut rng) = setup();
        let t = reducer.apply(&state, Action::LogMood, &mut rng).unwrap();

        assert_eq!(t.state, state);
        assert_eq!(
            t.effects,
            vec![Effect::notify(
                "Please select a mood first! 😊",
                NotificationLevel::Warning
            )]
        );
    }

    #[test]
    fn test_select_mood_out_of_range() {
        let (reducer, state, mut rng) = setup();
        for mood in [0, 6] {
            let err = reducer
                .apply(&state, Action::SelectMood { mood }, &mut rng)
                .unwrap_err();
            assert_eq!(err, StateError::InvalidMood(mood));
        }
    }

    #[test]
    fn test_close_mood_modal_clears_selection() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(&state, Action::SelectMood { mood: 5 }, &mut rng)
            .unwrap();
        let t = reducer
            .apply(&t.state, Action::CloseMoodModal, &mut rng)
            .unwrap();
        assert_eq!(t.state.mood.selected, None);
        assert_eq!(t.state.mood.current, 4);
    }

    #[test]
    fn test_journal_input_classifies_text() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::JournalInput {
                    text: "I feel sad and anxious and worried about tomorrow".to_string(),
                },
                &mut rng,
            )
            .unwrap();

        assert_eq!(
            t.state.journal.sentiment,
            SentimentResult::new(20, 50, 30, Sentiment::Negative)
        );
        assert_eq!(
            t.effects[0],
            Effect::SentimentChart {
                values: [20, 50, 30],
                dominant: Sentiment::Negative
            }
        );
        assert_eq!(
            t.effects[1],
            Effect::SentimentEmoji {
                emoji: "😔".to_string()
            }
        );
        let prompt = t.state.journal.prompt.unwrap();
        assert!(content::journal_prompts(Sentiment::Negative).contains(&prompt.as_str()));
        assert!(notifications(&t.effects).is_empty());
    }

    #[test]
    fn test_journal_writing_milestone() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::JournalInput {
                    text: "a".repeat(100),
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(
            notifications(&t.effects),
            vec![(
                "Keep writing! Your thoughts are being analyzed. ✍️",
                NotificationLevel::Info
            )]
        );

        let t = reducer
            .apply(&state, Action::JournalInput { text: String::new() }, &mut rng)
            .unwrap();
        assert!(notifications(&t.effects).is_empty());
        assert_eq!(t.state.journal.sentiment, SentimentResult::NOT_ENOUGH_TEXT);
    }

    #[test]
    fn test_journal_milestone_counts_utf16_units() {
        let (reducer, state, mut rng) = setup();

        // 48 chars but 50 UTF-16 units
        let text = format!("{}🌱🌱", "a".repeat(46));
        assert_eq!(text.chars().count(), 48);
        let t = reducer
            .apply(&state, Action::JournalInput { text }, &mut rng)
            .unwrap();
        assert_eq!(notifications(&t.effects).len(), 1);

        // 50 chars but 52 units
        let text = format!("{}🌱🌱", "a".repeat(48));
        let t = reducer
            .apply(&state, Action::JournalInput { text }, &mut rng)
            .unwrap();
        assert!(notifications(&t.effects).is_empty());
    }

    #[test]
    fn test_format_text() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::FormatText {
                    format: TextFormat::Bold,
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(t.state.user.points, 342);
        assert_eq!(
            notifications(&t.effects)[0].0,
            "Bold formatting applied!"
        );
    }

    #[test]
    fn test_set_active_nav() {
        let (reducer, state, mut rng) = setup();
        let t = reducer
            .apply(
                &state,
                Action::SetActiveNav {
                    button: "home".to_string(),
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(t.state.active_nav.as_deref(), Some("home"));
        assert_eq!(
            t.effects[0],
            Effect::PressFeedback {
                target: "home".to_string()
            }
        );
    }

    #[test]
    fn test_tick_only_sparkles_in_garden() {
        let (reducer, state, mut rng) = setup();
        let t = reducer.apply(&state, Action::Tick, &mut rng).unwrap();
        assert_eq!(t.effects.len(), 1);
        assert_eq!(t.effects[0].kind(), "sparkle");

        let mut journal = state.clone();
        journal.current_tab = Tab::Journal;
        let t = reducer.apply(&journal, Action::Tick, &mut rng).unwrap();
        assert!(t.effects.is_empty());
        assert_eq!(t.state, journal);
    }

    #[test]
    fn test_custom_rewards() {
        let rewards = Rewards {
            mood: 50,
            ..Default::default()
        };
        let reducer = Reducer::new(SentimentClassifier::builtin(), rewards);
        let mut state = AppState::default();
        state.mood.selected = Some(3);
        let mut rng = StdRng::seed_from_u64(0);

        let t = reducer.apply(&state, Action::LogMood, &mut rng).unwrap();
        assert_eq!(t.state.user.points, 390);
    }

    #[test]
    fn test_same_seed_same_transition() {
        let reducer = Reducer::default();
        let state = AppState::default();
        let action = Action::CharacterClicked {
            character: "fox".to_string(),
        };

        let a = reducer
            .apply(&state, action.clone(), &mut StdRng::seed_from_u64(9))
            .unwrap();
        let b = reducer
            .apply(&state, action, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(a, b);
    }
}
