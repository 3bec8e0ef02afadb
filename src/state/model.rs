//! Application state value
//!
//! Everything the screen reflects lives in one `AppState` value. It is
//! never mutated in place by callers; the reducer takes a state and returns
//! the next one.

use crate::content::{Character, Plant};
use crate::sentiment::{Sentiment, SentimentResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::StateError;

/// Number of days kept in the mood chart
pub const MOOD_HISTORY_DAYS: usize = 7;

/// Garden progress is shown out of this
pub const MAX_GARDEN_PROGRESS: u8 = 100;

/// Content section shown in the main area
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Garden,
    Dashboard,
    Journal,
    Discovery,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Garden, Tab::Dashboard, Tab::Journal, Tab::Discovery]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Garden => "garden",
            Tab::Dashboard => "dashboard",
            Tab::Journal => "journal",
            Tab::Discovery => "discovery",
        }
    }

    /// Capitalized name for messages
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Garden => "Garden",
            Tab::Dashboard => "Dashboard",
            Tab::Journal => "Journal",
            Tab::Discovery => "Discovery",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "garden" => Ok(Tab::Garden),
            "dashboard" => Ok(Tab::Dashboard),
            "journal" => Ok(Tab::Journal),
            "discovery" => Ok(Tab::Discovery),
            _ => Err(StateError::UnknownTab(s.to_string())),
        }
    }
}

/// The signed-in user's progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub points: u32,
    pub level: u32,
    /// Consecutive active days
    pub streak: u32,
    /// Garden growth, 0-100
    pub garden_progress: u8,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 340,
            level: 3,
            streak: 5,
            garden_progress: 72,
        }
    }
}

/// Mood logging state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodState {
    /// Most recently logged mood (1-5)
    pub current: u8,
    /// Oldest first, at most `MOOD_HISTORY_DAYS` entries
    pub history: Vec<u8>,
    /// Mood picked in the modal but not yet logged
    pub selected: Option<u8>,
    pub modal_open: bool,
}

impl Default for MoodState {
    fn default() -> Self {
        Self {
            current: 4,
            history: vec![3, 4, 3, 5, 4, 5, 4],
            selected: None,
            modal_open: false,
        }
    }
}

impl MoodState {
    /// Append a mood, dropping the oldest entries beyond the chart window
    pub(crate) fn record(&mut self, mood: u8) {
        self.history.push(mood);
        if self.history.len() > MOOD_HISTORY_DAYS {
            let excess = self.history.len() - MOOD_HISTORY_DAYS;
            self.history.drain(..excess);
        }
        self.current = mood;
    }
}

/// Journal editor state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalState {
    pub text: String,
    pub sentiment: SentimentResult,
    /// Writing prompt currently shown
    pub prompt: Option<String>,
}

impl Default for JournalState {
    fn default() -> Self {
        Self {
            text: String::new(),
            sentiment: SentimentResult::new(70, 25, 5, Sentiment::Positive),
            prompt: None,
        }
    }
}

/// Inhabitants of the garden scene
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GardenState {
    pub characters: Vec<Character>,
    pub plants: Vec<Plant>,
}

impl Default for GardenState {
    fn default() -> Self {
        Self {
            characters: Character::all().to_vec(),
            plants: Plant::all().to_vec(),
        }
    }
}

impl GardenState {
    /// Element names that can receive garden effects
    pub fn element_names(&self) -> Vec<&'static str> {
        self.plants
            .iter()
            .map(|p| p.class_name())
            .chain(self.characters.iter().map(|c| c.as_str()))
            .collect()
    }
}

/// Complete application state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    pub current_tab: Tab,
    /// Bottom navigation button last pressed
    pub active_nav: Option<String>,
    pub user: UserProfile,
    pub mood: MoodState,
    pub journal: JournalState,
    pub garden: GardenState,
}

impl AppState {
    /// Fresh state for a user
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            current_tab: Tab::default(),
            active_nav: None,
            user: UserProfile::new(user_name),
            mood: MoodState::default(),
            journal: JournalState::default(),
            garden: GardenState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("Alex")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_tab, Tab::Garden);
        assert_eq!(state.user.name, "Alex");
        assert_eq!(state.user.points, 340);
        assert_eq!(state.user.garden_progress, 72);
        assert_eq!(state.mood.history, vec![3, 4, 3, 5, 4, 5, 4]);
        assert_eq!(state.journal.sentiment.dominant, Sentiment::Positive);
        assert_eq!(state.garden.characters.len(), 4);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Journal".parse::<Tab>().unwrap(), Tab::Journal);
        assert_eq!(
            "settings".parse::<Tab>(),
            Err(StateError::UnknownTab("settings".to_string()))
        );
    }

    #[test]
    fn test_mood_history_window() {
        let mut mood = MoodState::default();
        mood.record(1);
        assert_eq!(mood.history, vec![4, 3, 5, 4, 5, 4, 1]);
        assert_eq!(mood.current, 1);

        let mut short = MoodState {
            history: vec![2],
            ..Default::default()
        };
        short.record(5);
        assert_eq!(short.history, vec![2, 5]);
    }

    #[test]
    fn test_state_serialization() {
        let state = AppState::new("Sam");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["current_tab"], "garden");
        assert_eq!(json["garden"]["plants"][0], "flower-red");

        let restored: AppState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_garden_element_names() {
        let names = GardenState::default().element_names();
        assert!(names.contains(&"main-tree"));
        assert!(names.contains(&"fox"));
        assert_eq!(names.len(), 8);
    }
}
