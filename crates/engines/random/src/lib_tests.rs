use super::*;
use shogi_core::{is_legal, legal_moves};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let state = BoardState::startpos();

    let reply = engine.reply(&state);

    let mv = reply.best_move.unwrap();
    assert!(legal_moves(&state, state.side_to_move).contains(&mv));
    assert_eq!(reply.nodes, 30);
}

#[test]
fn random_engine_answers_check_legally() {
    let mut engine = RandomEngine::new();
    let state = BoardState::from_sfen("4k4/9/9/3s5/4R4/9/9/9/4K4 w p").unwrap();

    for _ in 0..20 {
        let mv = engine.reply(&state).best_move.unwrap();
        assert!(is_legal(&state, &mv));
    }
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let state = BoardState::from_sfen("6R1k/9/7G1/9/9/9/9/9/4K4 w -").unwrap();

    let reply = engine.reply(&state);

    assert!(reply.best_move.is_none());
    assert_eq!(reply.nodes, 0);
}
