//! User and timer inputs to the reducer

use crate::content::TextFormat;
use serde::{Deserialize, Serialize};

/// Something that happened on screen
///
/// Serialized as an internally tagged object, e.g.
/// `{"type": "select_mood", "mood": 4}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Navigation tab pressed
    SwitchTab { tab: String },
    /// Garden character tapped
    CharacterClicked { character: String },
    /// Garden plant tapped, identified by element class
    PlantClicked { plant: String },
    /// "Continue journey" button
    ContinueJourney,
    OpenMoodLogger,
    CloseMoodModal,
    SelectMood { mood: u8 },
    LogMood,
    /// Bottom navigation button pressed
    SetActiveNav { button: String },
    /// Journal text changed
    JournalInput { text: String },
    /// Journal toolbar button
    FormatText { format: TextFormat },
    /// Periodic ambient animation
    Tick,
}

impl Action {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::SwitchTab { .. } => "switch_tab",
            Action::CharacterClicked { .. } => "character_clicked",
            Action::PlantClicked { .. } => "plant_clicked",
            Action::ContinueJourney => "continue_journey",
            Action::OpenMoodLogger => "open_mood_logger",
            Action::CloseMoodModal => "close_mood_modal",
            Action::SelectMood { .. } => "select_mood",
            Action::LogMood => "log_mood",
            Action::SetActiveNav { .. } => "set_active_nav",
            Action::JournalInput { .. } => "journal_input",
            Action::FormatText { .. } => "format_text",
            Action::Tick => "tick",
        }
    }
}
