//! Session: the one place state is replaced
//!
//! Owns the current `AppState`, the reducer and the RNG. Each dispatch runs
//! the pure reducer, swaps in the new state and hands the effects to a
//! presenter.

use super::action::Action;
use super::effect::Effect;
use super::error::StateResult;
use super::model::AppState;
use super::presenter::Presenter;
use super::reducer::Reducer;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A running app session
#[derive(Debug)]
pub struct Session {
    state: AppState,
    initial: AppState,
    reducer: Reducer,
    rng: StdRng,
}

impl Session {
    /// Session with an entropy-seeded RNG
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self::with_rng(state, reducer, StdRng::from_entropy())
    }

    /// Session with reproducible message picks
    pub fn with_seed(state: AppState, reducer: Reducer, seed: u64) -> Self {
        Self::with_rng(state, reducer, StdRng::seed_from_u64(seed))
    }

    fn with_rng(state: AppState, reducer: Reducer, rng: StdRng) -> Self {
        Self {
            initial: state.clone(),
            state,
            reducer,
            rng,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn reducer(&self) -> &Reducer {
        &self.reducer
    }

    /// Apply an action and return its effects
    ///
    /// The state only changes if the action applies cleanly.
    pub fn dispatch(&mut self, action: Action) -> StateResult<Vec<Effect>> {
        let name = action.name();
        let transition = self
            .reducer
            .apply(&self.state, action, &mut self.rng)
            .map_err(|e| {
                tracing::warn!(action = name, error = %e, "Action rejected");
                e
            })?;

        tracing::debug!(
            action = name,
            effects = transition.effects.len(),
            points = transition.state.user.points,
            "Action applied"
        );

        self.state = transition.state;
        Ok(transition.effects)
    }

    /// Apply an action and pass its effects to a presenter
    pub fn dispatch_to<P: Presenter + ?Sized>(
        &mut self,
        action: Action,
        presenter: &mut P,
    ) -> StateResult<&AppState> {
        let effects = self.dispatch(action)?;
        presenter.present_all(&effects);
        Ok(&self.state)
    }

    /// Return to the state the session started with
    pub fn reset(&mut self) {
        tracing::info!("Session reset");
        self.state = self.initial.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::error::StateError;
    use crate::state::model::Tab;

    fn session() -> Session {
        Session::with_seed(AppState::default(), Reducer::default(), 11)
    }

    #[test]
    fn test_dispatch_updates_state() {
        let mut session = session();
        let effects = session
            .dispatch(Action::SwitchTab {
                tab: "journal".to_string(),
            })
            .unwrap();

        assert_eq!(session.state().current_tab, Tab::Journal);
        assert!(!effects.is_empty());
    }

    #[test]
    fn test_rejected_action_keeps_state() {
        let mut session = session();
        let before = session.state().clone();

        let err = session.dispatch(Action::SelectMood { mood: 9 }).unwrap_err();
        assert_eq!(err, StateError::InvalidMood(9));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_dispatch_to_presenter() {
        let mut session = session();
        let mut seen: Vec<Effect> = Vec::new();

        session
            .dispatch_to(Action::ContinueJourney, &mut seen)
            .unwrap();
        assert_eq!(session.state().user.garden_progress, 74);
        assert!(seen.contains(&Effect::GardenProgress { progress: 74 }));
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.dispatch(Action::ContinueJourney).unwrap();
        assert_ne!(session.state(), &AppState::default());

        session.reset();
        assert_eq!(session.state(), &AppState::default());
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = session();
        let mut b = session();
        for action in [
            Action::CharacterClicked {
                character: "bird".to_string(),
            },
            Action::Tick,
            Action::JournalInput {
                text: "A beautiful fresh morning".to_string(),
            },
        ] {
            assert_eq!(a.dispatch(action.clone()), b.dispatch(action));
        }
        assert_eq!(a.state(), b.state());
    }
}
