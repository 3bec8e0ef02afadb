//! Canned Content
//!
//! Static message tables shown by the app:
//! - garden character and plant messages
//! - journal prompts keyed by dominant sentiment
//! - mood level emoji/labels and sentiment emoji

use crate::sentiment::Sentiment;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Garden character
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Fox,
    Bee,
    Butterfly,
    Bird,
}

impl Character {
    pub fn all() -> &'static [Character] {
        &[
            Character::Fox,
            Character::Bee,
            Character::Butterfly,
            Character::Bird,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Character::Fox => "fox",
            Character::Bee => "bee",
            Character::Butterfly => "butterfly",
            Character::Bird => "bird",
        }
    }

    /// Encouragement lines this character can say
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Character::Fox => &[
                "Great job tending to your wellness garden today! 🌱",
                "Your consistent care is helping everything bloom beautifully. ✨",
                "Remember, small daily actions lead to big transformations. 💪",
            ],
            Character::Bee => &[
                "Buzzing with excitement about your progress! 🐝",
                "Keep pollinating your mind with positive thoughts. 🌸",
                "Every wellness activity helps our garden grow stronger. 🌻",
            ],
            Character::Butterfly => &[
                "Transformation is beautiful, just like your wellness journey! 🦋",
                "Every day you're becoming a more vibrant version of yourself. ✨",
                "Your growth inspires everyone in this garden. 💖",
            ],
            Character::Bird => &[
                "Soaring to new heights of wellness with you! 🐦",
                "Your dedication lifts everyone's spirits in this garden. 🌈",
                "Freedom comes from taking care of your mental health. 🕊️",
            ],
        }
    }

    /// Pick one of this character's messages
    pub fn random_message<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        pick(self.messages(), rng)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Character {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fox" => Ok(Character::Fox),
            "bee" => Ok(Character::Bee),
            "butterfly" => Ok(Character::Butterfly),
            "bird" => Ok(Character::Bird),
            _ => Err(format!("Unknown character: {}", s)),
        }
    }
}

/// Garden plant, identified by its element class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Plant {
    #[serde(rename = "flower-red")]
    RedFlower,
    #[serde(rename = "flower-blue")]
    BlueFlower,
    #[serde(rename = "main-tree")]
    Tree,
    #[serde(rename = "sunflowers")]
    Sunflowers,
}

/// Shown for plant classes without a dedicated message
pub const DEFAULT_PLANT_MESSAGE: &str = "You interact with a beautiful plant! 🌱";

impl Plant {
    pub fn all() -> &'static [Plant] {
        &[
            Plant::RedFlower,
            Plant::BlueFlower,
            Plant::Tree,
            Plant::Sunflowers,
        ]
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Plant::RedFlower => "flower-red",
            Plant::BlueFlower => "flower-blue",
            Plant::Tree => "main-tree",
            Plant::Sunflowers => "sunflowers",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Plant::RedFlower => "The red flower blooms with your positive energy! 🌺",
            Plant::BlueFlower => "The blue flower appreciates your gentle care! 🌸",
            Plant::Tree => "The wisdom tree shares its strength with you! 🌳",
            Plant::Sunflowers => "The sunflowers turn toward your bright spirit! 🌻",
        }
    }

    /// Look up a plant by element class
    pub fn from_class(class: &str) -> Option<Plant> {
        Plant::all().iter().copied().find(|p| p.class_name() == class)
    }
}

/// Message for any plant class, known or not
pub fn plant_message(class: &str) -> &'static str {
    Plant::from_class(class)
        .map(|p| p.message())
        .unwrap_or(DEFAULT_PLANT_MESSAGE)
}

/// Journal formatting buttons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Bold,
    Italic,
    List,
}

impl TextFormat {
    /// Capitalized label used in feedback messages
    pub fn label(&self) -> &'static str {
        match self {
            TextFormat::Bold => "Bold",
            TextFormat::Italic => "Italic",
            TextFormat::List => "List",
        }
    }
}

/// Journal writing prompts for a dominant sentiment
pub fn journal_prompts(sentiment: Sentiment) -> &'static [&'static str] {
    match sentiment {
        Sentiment::Positive => &[
            "Reflect on something you are grateful for today.",
            "What specific moment brought you the most joy?",
            "How can you share this positive energy with others?",
            "What would you like to remember about this feeling?",
        ],
        Sentiment::Neutral => &[
            "What's one small thing that could brighten your day?",
            "Describe the environment around you right now.",
            "What are you looking forward to most this week?",
            "How are you taking care of yourself today?",
        ],
        Sentiment::Negative => &[
            "What support do you need right now?",
            "Can you identify what triggered these feelings?",
            "What would your best friend tell you in this moment?",
            "What's one tiny step you could take to feel better?",
        ],
    }
}

/// Pick a journal prompt for a dominant sentiment
pub fn random_prompt<R: Rng + ?Sized>(sentiment: Sentiment, rng: &mut R) -> &'static str {
    pick(journal_prompts(sentiment), rng)
}

/// Emoji shown in the center of the sentiment doughnut
pub fn sentiment_emoji(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Neutral => "😐",
        Sentiment::Negative => "😔",
    }
}

/// Emoji and label for a logged mood value (1-5)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MoodFace {
    pub emoji: &'static str,
    pub label: &'static str,
}

pub const MIN_MOOD: u8 = 1;
pub const MAX_MOOD: u8 = 5;
const FALLBACK_MOOD: u8 = 4;

/// Display face for a mood value; out-of-range values show as "Good"
pub fn mood_face(mood: u8) -> MoodFace {
    let (emoji, label) = match mood {
        1 => ("😢", "Sad"),
        2 => ("😐", "Okay"),
        3 => ("🙂", "Fine"),
        4 => ("😊", "Good"),
        5 => ("😄", "Great"),
        _ => return mood_face(FALLBACK_MOOD),
    };
    MoodFace { emoji, label }
}

/// Day labels under the 7-day mood chart
pub const MOOD_CHART_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Sparkle glyphs used for garden effects
pub static SPARKLES: [&str; 3] = ["✨", "🌟", "💫"];

fn pick<R: Rng + ?Sized>(options: &'static [&'static str], rng: &mut R) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}
