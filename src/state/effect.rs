//! UI-bound side effects
//!
//! The reducer never touches the screen. It describes what the screen should
//! do as `Effect` values, and a `Presenter` carries them out.

use super::model::Tab;
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Toast style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
}

impl NotificationLevel {
    /// Toast background color
    pub fn color(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "#10B981",
            NotificationLevel::Info => "#3B82F6",
            NotificationLevel::Warning => "#F59E0B",
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A side effect for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Show a toast
    Notify {
        message: String,
        level: NotificationLevel,
    },
    /// Mark a tab button and its section active
    ActivateTab { tab: Tab },
    /// Redraw the 7-day mood line
    MoodChart { labels: Vec<String>, values: Vec<u8> },
    /// Update the current mood face
    MoodDisplay {
        mood: u8,
        emoji: String,
        label: String,
    },
    /// Show or hide the mood logger modal
    MoodModal { open: bool },
    /// Highlight the chosen mood option (`None` clears it)
    MoodSelection { mood: Option<u8> },
    /// Redraw the sentiment doughnut: positive, neutral, negative
    SentimentChart { values: [u8; 3], dominant: Sentiment },
    ResizeSentimentChart,
    /// Emoji in the middle of the doughnut
    SentimentEmoji { emoji: String },
    /// Journal writing prompt
    Suggestion { text: String },
    /// Briefly scale and brighten an element
    Highlight { target: String, scale: f32 },
    /// Float sparkle glyphs over an element
    Sparkle { target: String, glyphs: Vec<String> },
    /// Pressed-button feedback
    PressFeedback { target: String },
    /// Fade in discovery cards one after another
    AnimateContentCards,
    GardenProgress { progress: u8 },
    /// Refresh the points counter
    Points { total: u32 },
}

impl Effect {
    pub fn notify(message: impl Into<String>, level: NotificationLevel) -> Self {
        Effect::Notify {
            message: message.into(),
            level,
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::Notify { .. } => "notify",
            Effect::ActivateTab { .. } => "activate_tab",
            Effect::MoodChart { .. } => "mood_chart",
            Effect::MoodDisplay { .. } => "mood_display",
            Effect::MoodModal { .. } => "mood_modal",
            Effect::MoodSelection { .. } => "mood_selection",
            Effect::SentimentChart { .. } => "sentiment_chart",
            Effect::ResizeSentimentChart => "resize_sentiment_chart",
            Effect::SentimentEmoji { .. } => "sentiment_emoji",
            Effect::Suggestion { .. } => "suggestion",
            Effect::Highlight { .. } => "highlight",
            Effect::Sparkle { .. } => "sparkle",
            Effect::PressFeedback { .. } => "press_feedback",
            Effect::AnimateContentCards => "animate_content_cards",
            Effect::GardenProgress { .. } => "garden_progress",
            Effect::Points { .. } => "points",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Notify { message, level } => write!(f, "[{}] {}", level, message),
            Effect::ActivateTab { tab } => write!(f, "tab -> {}", tab),
            Effect::MoodChart { values, .. } => write!(f, "mood chart {:?}", values),
            Effect::MoodDisplay { emoji, label, .. } => write!(f, "mood {} {}", emoji, label),
            Effect::MoodModal { open } => {
                write!(f, "mood modal {}", if *open { "open" } else { "closed" })
            }
            Effect::MoodSelection { mood } => match mood {
                Some(m) => write!(f, "mood option {} selected", m),
                None => write!(f, "mood selection cleared"),
            },
            Effect::SentimentChart { values, dominant } => write!(
                f,
                "sentiment chart {}/{}/{} ({})",
                values[0], values[1], values[2], dominant
            ),
            Effect::ResizeSentimentChart => write!(f, "sentiment chart resized"),
            Effect::SentimentEmoji { emoji } => write!(f, "sentiment {}", emoji),
            Effect::Suggestion { text } => write!(f, "prompt: {}", text),
            Effect::Highlight { target, scale } => write!(f, "highlight {} x{}", target, scale),
            Effect::Sparkle { target, glyphs } => write!(f, "sparkle {} {}", target, glyphs.concat()),
            Effect::PressFeedback { target } => write!(f, "pressed {}", target),
            Effect::AnimateContentCards => write!(f, "content cards animated"),
            Effect::GardenProgress { progress } => write!(f, "garden {}/100", progress),
            Effect::Points { total } => write!(f, "points {}", total),
        }
    }
}
