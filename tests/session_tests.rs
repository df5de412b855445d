//! Session, replay and snapshot encoding tests.

use std::cell::RefCell;
use std::rc::Rc;

use tactics_core::core::{GameState, Intent, IntentRecord, MatchConfig, Phase, PlayerId, Position};
use tactics_core::engine::legal_intents;
use tactics_core::events::{GameEvent, LogSubscriber};
use tactics_core::session::{replay, Outcome, Rejection, Session};
use tactics_core::units::{TemplateId, UnitId};

fn deploy(template: &str, owner: PlayerId, x: i32, y: i32) -> Intent {
    Intent::Deploy {
        template: TemplateId::new(template),
        owner,
        position: Position::new(x, y),
    }
}

fn config() -> MatchConfig {
    MatchConfig::new(8)
        .with_player(PlayerId::ONE, "acct-17", "Ada")
        .with_player(PlayerId::TWO, "acct-42", "Bo")
        .with_obstacles(5)
        .with_objectives(2)
        .with_seed(2024)
        .with_wager(250)
}

/// Play until the match ends or `max_intents` have been applied, preferring
/// attacks over moves and ending the turn when neither is left.
fn play(session: &mut Session, max_intents: usize) {
    for _ in 0..max_intents {
        let state = session.state();
        if state.phase() == Phase::End {
            break;
        }
        let seat = state.current_player();
        let intents = legal_intents(state);
        let intent = intents
            .iter()
            .find(|i| matches!(i, Intent::Attack { .. }))
            .or_else(|| intents.iter().find(|i| matches!(i, Intent::Move { .. })))
            .cloned()
            .unwrap_or(Intent::EndTurn);
        let outcome = session.submit(seat, intent).unwrap();
        assert!(outcome.is_applied());
    }
}

fn open_tiles(state: &GameState) -> Vec<Position> {
    state
        .board()
        .tiles()
        .filter(|t| t.is_passable())
        .map(|t| t.position)
        .collect()
}

fn started_session() -> Session {
    let mut session = Session::from_config(&config()).unwrap();
    let open = open_tiles(session.state());
    let (first, last) = (open[0], open[open.len() - 1]);

    let setup = [
        (PlayerId::ONE, deploy("berserker", PlayerId::ONE, first.x, first.y)),
        (PlayerId::TWO, deploy("scout", PlayerId::TWO, last.x, last.y)),
        (PlayerId::ONE, Intent::StartBattle),
    ];
    for (seat, intent) in setup {
        assert_eq!(session.submit(seat, intent).unwrap(), Outcome::Applied);
    }
    session
}

#[test]
fn test_wager_and_players_are_context() {
    let session = started_session();
    let state = session.state();

    assert_eq!(state.wager(), Some(250));
    assert_eq!(state.seat_of("acct-42"), Some(PlayerId::TWO));
    assert_eq!(state.seed(), 2024);
}

#[test]
fn test_replay_reproduces_match() {
    let mut session = started_session();
    play(&mut session, 60);

    let rebuilt = replay(&config(), session.records()).unwrap();
    assert_eq!(&rebuilt, session.state());
}

#[test]
fn test_records_survive_json() {
    let mut session = started_session();
    play(&mut session, 20);

    let json = serde_json::to_string(session.records()).unwrap();
    let records: Vec<IntentRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(records.as_slice(), session.records());
    assert_eq!(replay(&config(), &records).unwrap(), *session.state());
}

#[test]
fn test_snapshot_bytes() {
    let mut session = started_session();
    play(&mut session, 15);

    let bytes = session.state().to_bytes().unwrap();
    let restored = GameState::from_bytes(&bytes).unwrap();

    assert_eq!(&restored, session.state());
    assert!(GameState::from_bytes(&bytes[..bytes.len() / 2]).is_err());
}

#[test]
fn test_undo_back_to_start() {
    let mut session = started_session();
    let start = session.state().clone();
    play(&mut session, 10);

    while session.records().len() > 3 {
        assert!(session.undo());
    }
    assert_eq!(session.state(), &start);
}

#[test]
fn test_match_over_rejects_everything() {
    let mut session = Session::from_config(&MatchConfig::new(6)).unwrap();
    session.submit(PlayerId::ONE, deploy("berserker", PlayerId::ONE, 3, 3)).unwrap();
    session.submit(PlayerId::TWO, deploy("scout", PlayerId::TWO, 3, 4)).unwrap();
    session.submit(PlayerId::ONE, Intent::StartBattle).unwrap();

    let strike = Intent::Attack {
        unit: UnitId::new(1),
        target: Position::new(3, 4),
    };
    assert!(session.submit(PlayerId::ONE, strike.clone()).unwrap().is_applied());
    assert!(session.submit(PlayerId::ONE, strike).unwrap().is_applied());
    assert_eq!(session.state().phase(), Phase::End);
    assert_eq!(session.state().winner(), Some(PlayerId::ONE));

    let outcome = session.submit(PlayerId::ONE, Intent::EndTurn).unwrap();
    assert_eq!(outcome, Outcome::Rejected(Rejection::MatchOver));
}

#[test]
fn test_subscribers_observe_in_order() {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);

    let mut session = started_session();
    session.subscribe(LogSubscriber);
    session.subscribe(move |event: &GameEvent, _: &GameState| {
        sink.borrow_mut().push(event.to_string())
    });
    let seen_before = session.state().log().len();
    play(&mut session, 12);

    let log: Vec<String> = session.state().log().iter().skip(seen_before).cloned().collect();
    assert_eq!(*lines.borrow(), log);
}

#[test]
fn test_select_is_open_to_both_seats() {
    let mut session = started_session();
    let outcome = session
        .submit(PlayerId::TWO, Intent::Select { unit: UnitId::new(1) })
        .unwrap();

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(session.state().selection().unit, Some(UnitId::new(1)));
}
