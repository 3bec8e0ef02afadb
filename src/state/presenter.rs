//! Presentation layer boundary
//!
//! Anything that actually shows effects to a person (a browser bridge, a
//! terminal, a log) implements `Presenter`.

use super::effect::{Effect, NotificationLevel};

/// Performs UI-bound effects
pub trait Presenter {
    fn present(&mut self, effect: &Effect);

    fn present_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.present(effect);
        }
    }
}

/// Collects effects, mostly for tests and API responses
impl Presenter for Vec<Effect> {
    fn present(&mut self, effect: &Effect) {
        self.push(effect.clone());
    }
}

/// Logs every effect through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn present(&mut self, effect: &Effect) {
        match effect {
            Effect::Notify {
                message,
                level: NotificationLevel::Warning,
            } => tracing::warn!(kind = effect.kind(), "{}", message),
            Effect::Notify { message, level } => {
                tracing::info!(kind = effect.kind(), %level, "{}", message)
            }
            _ => tracing::debug!(kind = effect.kind(), "{}", effect),
        }
    }
}

/// Writes effects as lines to any `io::Write`
#[derive(Debug)]
pub struct WriterPresenter<W> {
    out: W,
}

impl<W: std::io::Write> WriterPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: std::io::Write> Presenter for WriterPresenter<W> {
    fn present(&mut self, effect: &Effect) {
        if let Err(e) = writeln!(self.out, "{}", effect) {
            tracing::warn!("Failed to write effect: {}", e);
        }
    }
}
