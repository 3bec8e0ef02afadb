//! PeacePal Application State
//!
//! The screen's state as an explicit value plus pure update functions:
//!
//! - **model**: `AppState` and its parts (user, mood, journal, garden)
//! - **action**: inputs (`Action`)
//! - **effect**: UI-bound outputs (`Effect`)
//! - **reducer**: `Reducer::apply(state, action) -> (state, effects)`
//! - **presenter**: where effects get performed
//! - **session**: owns the current state and RNG, dispatches actions
//! - **error**: error types
//!
//! # Flow
//!
//! ```text
//! Action ─► Reducer::apply(&AppState) ─► Transition { AppState, Vec<Effect> }
//!                                                          │
//!                                             Presenter::present_all
//! ```
//!
//! # Example
//!
//! ```rust
//! use peacepal::state::{Action, AppState, Reducer, Session, TracingPresenter};
//!
//! let mut session = Session::with_seed(AppState::default(), Reducer::default(), 7);
//! let mut presenter = TracingPresenter;
//!
//! session.dispatch_to(Action::SelectMood { mood: 5 }, &mut presenter).unwrap();
//! let state = session.dispatch_to(Action::LogMood, &mut presenter).unwrap();
//!
//! assert_eq!(state.mood.current, 5);
//! assert_eq!(state.user.points, 355);
//! ```

pub mod action;
pub mod effect;
pub mod error;
pub mod model;
pub mod presenter;
pub mod reducer;
pub mod session;

pub use action::Action;
pub use effect::{Effect, NotificationLevel};
pub use error::{StateError, StateResult};
pub use model::{
    AppState, GardenState, JournalState, MoodState, Tab, UserProfile, MAX_GARDEN_PROGRESS,
    MOOD_HISTORY_DAYS,
};
pub use presenter::{Presenter, TracingPresenter, WriterPresenter};
pub use reducer::{Reducer, Rewards, Transition};
pub use session::Session;
