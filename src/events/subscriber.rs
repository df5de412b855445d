//! Passive event subscribers.
//!
//! Subscribers observe events after an intent has been applied. They see
//! the resulting state but cannot change it; audio cues, debug logging and
//! renderers hook in here, never inside the rules.

use crate::core::GameState;

use super::event::GameEvent;

/// Receives events as a `Session` applies intents.
pub trait EventSubscriber {
    /// Called once per new event, in emission order.
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> EventSubscriber for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state);
    }
}

/// Forwards every event to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSubscriber;

impl EventSubscriber for LogSubscriber {
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        log::info!(target: "tactics_core::events", "[turn {}] {event}", state.turn_number());
    }
}

/// Collects events for later inspection.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<GameEvent>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSubscriber for EventRecorder {
    fn on_event(&mut self, event: &GameEvent, _state: &GameState) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, PlayerId};

    #[test]
    fn test_recorder_take() {
        let state = MatchConfig::new(4).build().unwrap();
        let mut recorder = EventRecorder::new();
        let event = GameEvent::BattleStarted { first: PlayerId::ONE };

        recorder.on_event(&event, &state);
        recorder.on_event(&event, &state);

        assert_eq!(recorder.events().len(), 2);
        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_closure_subscriber() {
        let state = MatchConfig::new(4).build().unwrap();
        let mut lines = Vec::new();
        {
            let mut subscriber = |event: &GameEvent, _: &GameState| lines.push(event.to_string());
            subscriber.on_event(&GameEvent::GameOver { winner: None }, &state);
        }
        assert_eq!(lines, vec!["The match ended in a draw".to_string()]);
    }
}
