//! Tests for move history and undo.

use strictly_hexothello::{Cell, GameErrorKind, Player, Snapshot, new_game};

#[test]
fn test_move_then_undo_restores_everything() {
    let mut game = new_game(3, true).expect("standard game");
    let before = game.state().clone();

    game.apply_move(Cell::new(3, -2)).expect("legal move");
    assert_ne!(game.state(), &before);

    game.undo().expect("one move to undo");
    assert_eq!(game.state(), &before);
    assert_eq!(game.board(), before.board());
    assert_eq!(game.scores(), *before.counts());
    assert_eq!(game.current_player(), Player::Black);
}

#[test]
fn test_steps_count_up_and_back_down() {
    let mut game = new_game(3, true).expect("standard game");

    let mut states = vec![game.state().clone()];
    for expected_step in 1..=4 {
        let position = game.legal_moves().into_iter().next().expect("a legal move");
        let report = game.apply_move(position).expect("legal move");
        assert_eq!(*report.step(), Some(expected_step));
        states.push(game.state().clone());
    }

    while let Some(expected) = states.pop() {
        assert_eq!(game.state(), &expected);
        if states.is_empty() {
            break;
        }
        game.undo().expect("history remains");
    }
    assert_eq!(game.history().map(|h| h.step()), Some(0));
}

#[test]
fn test_undo_at_initial_state_fails() {
    let mut game = new_game(3, true).expect("standard game");
    let before = game.state().clone();

    let err = game.undo().unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::AtInitialState);
    assert_eq!(game.state(), &before);
}

#[test]
fn test_undo_without_history_fails() {
    let mut game = new_game(3, false).expect("standard game");
    game.apply_move(Cell::new(0, -3)).expect("legal move");
    let before = game.state().clone();

    let err = game.undo().unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::NoHistory);
    assert_eq!(game.state(), &before);
    assert!(game.history().is_none());
}

#[test]
fn test_new_move_after_undo_replaces_discarded_step() {
    let mut game = new_game(3, true).expect("standard game");
    game.apply_move(Cell::new(0, -3)).expect("legal move");
    game.undo().expect("one move to undo");

    let report = game.apply_move(Cell::new(2, 0)).expect("legal move");
    assert_eq!(*report.step(), Some(1));
    assert_eq!(game.history().map(|h| h.snapshots().len()), Some(2));
    assert_eq!(game.board().owner(Cell::new(0, -3)), None);
}

#[test]
fn test_snapshots_serialize_for_external_storage() {
    let mut game = new_game(3, true).expect("standard game");
    game.apply_move(Cell::new(0, -3)).expect("legal move");
    game.apply_move(Cell::new(-2, 3)).expect("legal move");

    let snapshots = game.history().expect("history enabled").snapshots();
    let json = serde_json::to_string(snapshots).expect("serialize");
    let restored: Vec<Snapshot> = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.as_slice(), snapshots);
    assert_eq!(restored.last().map(|s| s.state()), Some(game.state()));
}
