//! Host-side match session.
//!
//! A `Session` owns the live `GameState` for one match. It adds what the
//! pure operations leave to the host:
//!
//! - a trust check on each submitted intent (turn order, unit ownership,
//!   deploying only for one's own seat)
//! - the ordered `IntentRecord` history, which `replay` turns back into the
//!   same state
//! - snapshot history for `undo`, unbounded unless capped with
//!   `Session::with_history_limit`
//! - notification of passive `EventSubscriber`s

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{
    EngineError, GameState, Intent, IntentRecord, MatchConfig, Phase, PlayerId, Result,
};
use crate::engine;
use crate::events::EventSubscriber;

/// Why a submitted intent was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// Combat intent from the seat that is not acting.
    NotYourTurn,
    /// The acting unit belongs to the other seat.
    NotYourUnit,
    /// A deployment on behalf of the other seat.
    WrongSeat,
    /// The match has ended.
    MatchOver,
    /// The rules turned the intent into a no-op.
    NoEffect,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::NotYourTurn => "not your turn",
            Rejection::NotYourUnit => "not your unit",
            Rejection::WrongSeat => "cannot act for the other seat",
            Rejection::MatchOver => "the match is over",
            Rejection::NoEffect => "intent had no effect",
        };
        f.write_str(reason)
    }
}

/// Result of `Session::submit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// A running match.
pub struct Session {
    state: GameState,
    /// Snapshot taken before each applied intent, oldest first.
    history: Vector<GameState>,
    history_limit: Option<usize>,
    records: Vec<IntentRecord>,
    subscribers: Vec<Box<dyn EventSubscriber>>,
}

impl Session {
    /// Start a session from an initial state.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            history: Vector::new(),
            history_limit: None,
            records: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Build the initial state from a config and start a session on it.
    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        Ok(Self::new(config.build()?))
    }

    /// Keep at most `limit` undo snapshots, dropping the oldest first.
    /// The intent records are never trimmed, so `replay` still sees the
    /// whole match.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self.trim_history();
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applied intents, in order.
    #[must_use]
    pub fn records(&self) -> &[IntentRecord] {
        &self.records
    }

    /// Register a subscriber. It sees events from the next applied intent
    /// onwards.
    pub fn subscribe(&mut self, subscriber: impl EventSubscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Validate and apply an intent from `seat`.
    ///
    /// Programmer errors (unknown unit, coordinates off the board) are
    /// returned as `Err` and leave the session unchanged, as do rejections.
    pub fn submit(&mut self, seat: PlayerId, intent: Intent) -> Result<Outcome> {
        if !seat.is_valid() {
            return Err(EngineError::UnknownPlayer(seat));
        }
        if let Some(rejection) = self.check(seat, &intent)? {
            log::trace!("{seat} intent {intent:?} rejected: {rejection}");
            return Ok(Outcome::Rejected(rejection));
        }

        let next = engine::apply_intent(&self.state, &intent)?;
        if next == self.state {
            return Ok(Outcome::Rejected(Rejection::NoEffect));
        }

        let record = IntentRecord::new(
            seat,
            intent,
            self.state.turn_number(),
            self.records.len() as u32,
        );
        let seen = self.state.events().len();
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push_back(previous);
        self.trim_history();
        self.records.push(record);

        for event in self.state.events().iter().skip(seen) {
            for subscriber in &mut self.subscribers {
                subscriber.on_event(event, &self.state);
            }
        }
        Ok(Outcome::Applied)
    }

    fn check(&self, seat: PlayerId, intent: &Intent) -> Result<Option<Rejection>> {
        let state = &self.state;
        if state.phase() == Phase::End {
            return Ok(Some(Rejection::MatchOver));
        }

        match intent {
            Intent::Deploy { owner, .. } if *owner != seat => return Ok(Some(Rejection::WrongSeat)),
            Intent::Deploy { .. } | Intent::StartBattle | Intent::Select { .. } => return Ok(None),
            Intent::Move { .. }
            | Intent::Attack { .. }
            | Intent::UseAbility { .. }
            | Intent::EndTurn => {}
        }

        if state.phase() == Phase::Game && state.current_player() != seat {
            return Ok(Some(Rejection::NotYourTurn));
        }
        if let Some(target) = intent.target() {
            state.checked_position(target.x, target.y)?;
        }
        if let Some(unit) = intent.acting_unit() {
            if state.unit(unit)?.owner != seat {
                return Ok(Some(Rejection::NotYourUnit));
            }
        }
        Ok(None)
    }

    /// Revert the last applied intent. Returns false if there is none, or
    /// if its snapshot was dropped by the history limit.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_back() else {
            return false;
        };
        self.state = previous;
        self.records.pop();
        true
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("phase", &self.state.phase())
            .field("turn", &self.state.turn_number())
            .field("records", &self.records.len())
            .field("history", &self.history.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Rebuild a match from its config and intent history.
pub fn replay(config: &MatchConfig, records: &[IntentRecord]) -> Result<GameState> {
    records
        .iter()
        .try_fold(config.build()?, |state, record| engine::apply_intent(&state, &record.intent))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::Position;
    use crate::events::GameEvent;
    use crate::units::{TemplateId, UnitId};

    fn deploy(template: &str, owner: PlayerId, x: i32, y: i32) -> Intent {
        Intent::Deploy {
            template: TemplateId::new(template),
            owner,
            position: Position::new(x, y),
        }
    }

    fn started() -> Session {
        let mut session = Session::from_config(&MatchConfig::new(8)).unwrap();
        session.submit(PlayerId::ONE, deploy("bulwark", PlayerId::ONE, 1, 6)).unwrap();
        session.submit(PlayerId::TWO, deploy("berserker", PlayerId::TWO, 2, 1)).unwrap();
        session.submit(PlayerId::ONE, Intent::StartBattle).unwrap();
        session
    }

    #[test]
    fn test_submit_applies() {
        let session = started();
        assert_eq!(session.state().phase(), Phase::Game);
        assert_eq!(session.records().len(), 3);
        assert_eq!(session.records()[2].sequence, 2);
    }

    #[test]
    fn test_wrong_seat_deploy() {
        let mut session = Session::from_config(&MatchConfig::new(8)).unwrap();
        let outcome = session.submit(PlayerId::TWO, deploy("scout", PlayerId::ONE, 0, 0)).unwrap();

        assert_eq!(outcome, Outcome::Rejected(Rejection::WrongSeat));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_out_of_turn() {
        let mut session = started();
        let outcome = session.submit(PlayerId::TWO, Intent::EndTurn).unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::NotYourTurn));
    }

    #[test]
    fn test_foreign_unit() {
        let mut session = started();
        let outcome = session
            .submit(
                PlayerId::ONE,
                Intent::Move {
                    unit: UnitId::new(2),
                    to: Position::new(2, 2),
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::NotYourUnit));
    }

    #[test]
    fn test_no_effect() {
        let mut session = started();
        let outcome = session
            .submit(
                PlayerId::ONE,
                Intent::Move {
                    unit: UnitId::new(1),
                    to: Position::new(7, 0),
                },
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::NoEffect));
    }

    #[test]
    fn test_errors_pass_through() {
        let mut session = started();
        let result = session.submit(
            PlayerId::ONE,
            Intent::Move {
                unit: UnitId::new(1),
                to: Position::new(1, 9),
            },
        );
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
        assert_eq!(session.records().len(), 3);
    }

    #[test]
    fn test_bounds_checked_before_unit_lookup() {
        let mut session = started();
        let result = session.submit(
            PlayerId::ONE,
            Intent::Attack {
                unit: UnitId::new(99),
                target: Position::new(-1, 3),
            },
        );
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));

        let result = session.submit(
            PlayerId::ONE,
            Intent::Attack {
                unit: UnitId::new(99),
                target: Position::new(1, 3),
            },
        );
        assert!(matches!(result, Err(EngineError::UnknownUnit(_))));
    }

    #[test]
    fn test_history_limit() {
        let mut session = started().with_history_limit(2);
        session.submit(PlayerId::ONE, Intent::EndTurn).unwrap();
        session.submit(PlayerId::TWO, Intent::EndTurn).unwrap();
        session.submit(PlayerId::ONE, Intent::EndTurn).unwrap();
        assert_eq!(session.records().len(), 6);

        assert!(session.undo());
        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.records().len(), 4);
        assert_eq!(session.state().current_player(), PlayerId::TWO);
    }

    #[test]
    fn test_undo() {
        let mut session = started();
        let before = session.state().clone();

        session
            .submit(
                PlayerId::ONE,
                Intent::Move {
                    unit: UnitId::new(1),
                    to: Position::new(1, 4),
                },
            )
            .unwrap();
        assert!(session.undo());

        assert_eq!(session.state(), &before);
        assert_eq!(session.records().len(), 3);
    }

    #[test]
    fn test_subscribers_see_new_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut session = started();
        session.subscribe(move |event: &GameEvent, _: &GameState| {
            sink.borrow_mut().push(event.clone())
        });
        session.submit(PlayerId::ONE, Intent::EndTurn).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], GameEvent::TurnStarted { player: PlayerId::TWO, turn: 1 }));
    }

    #[test]
    fn test_replay_matches_live_state() {
        let mut session = started();
        session
            .submit(
                PlayerId::ONE,
                Intent::Move {
                    unit: UnitId::new(1),
                    to: Position::new(1, 4),
                },
            )
            .unwrap();
        session.submit(PlayerId::ONE, Intent::EndTurn).unwrap();

        let rebuilt = replay(&MatchConfig::new(8), session.records()).unwrap();
        assert_eq!(&rebuilt, session.state());
    }
}
