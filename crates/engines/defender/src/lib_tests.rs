use super::*;
use crate::score::*;
use shogi_core::{move_to_usi, parse_usi_move, PieceKind};

fn state(sfen: &str) -> BoardState {
    BoardState::from_sfen(sfen).unwrap()
}

fn usi(state: &BoardState, token: &str) -> Move {
    parse_usi_move(state, token).unwrap()
}

#[test]
fn king_takes_unprotected_checker() {
    let pos = state("4k4/4G4/9/9/9/9/9/9/4K4 w -");
    let (mv, score) = pick_defense(&pos, Side::Gote).unwrap();
    assert_eq!(move_to_usi(&mv), "5a5b");
    assert_eq!(score, KING_CAPTURES_CHECKER + piece_value(PieceKind::Gold));
}

#[test]
fn capture_beats_king_move_and_block() {
    let pos = state("4k4/9/9/3s5/4R4/9/9/9/4K4 w -");
    let (mv, score) = pick_defense(&pos, Side::Gote).unwrap();
    assert_eq!(move_to_usi(&mv), "6d5e");
    assert_eq!(score, CAPTURES_CHECKER + piece_value(PieceKind::Rook));
}

#[test]
fn tiers_are_ordered() {
    let pos = state("4k4/9/9/3s5/4R4/9/9/9/4K4 w p");
    let checking = checkers(&pos.board, Side::Gote);

    assert_eq!(score_reply(&pos, &usi(&pos, "5a6a"), &checking), KING_MOVE);
    assert_eq!(score_reply(&pos, &usi(&pos, "6d5c"), &checking), INTERPOSITION);
    assert_eq!(score_reply(&pos, &usi(&pos, "P*5c"), &checking), DROP_BLOCK);
}

#[test]
fn reply_allowing_mate_is_penalised() {
    // Only 1a2a is legal, after which R*4a mates.
    let pos = state("8k/9/7G1/9/9/9/9/9/4K4 w R");
    let (mv, score) = pick_defense(&pos, Side::Gote).unwrap();
    assert_eq!(move_to_usi(&mv), "1a2a");
    assert_eq!(score, ALLOWS_MATE);
}

#[test]
fn ties_keep_first_generated_move() {
    let pos = state("4k4/9/9/9/4R4/9/9/9/4K4 w -");
    let first = legal_moves(&pos, Side::Gote)[0];
    let (mv, score) = pick_defense(&pos, Side::Gote).unwrap();
    assert_eq!(mv, first);
    assert_eq!(score, KING_MOVE);
}

#[test]
fn mated_defender_has_no_reply() {
    let pos = state("6R1k/9/7G1/9/9/9/9/9/4K4 w -");
    assert!(pick_defense(&pos, Side::Gote).is_none());

    let mut engine = DefenderEngine::new();
    let reply = engine.reply(&pos);
    assert!(reply.best_move.is_none());
}

#[test]
fn engine_answers_for_side_to_move() {
    let pos = state("4k4/4G4/9/9/9/9/9/9/4K4 w -");
    let mut engine = DefenderEngine::new();
    let reply = engine.reply(&pos);
    let mv = reply.best_move.unwrap();
    assert_eq!(mv.piece().side, Side::Gote);
    assert!(shogi_core::is_legal(&pos, &mv));
    assert_eq!(reply.nodes, legal_moves(&pos, Side::Gote).len() as u64);
}

#[test]
fn reply_counts_each_candidate_once() {
    let pos = state("4k4/9/9/3s5/4R4/9/9/9/4K4 w p");
    let mut engine = DefenderEngine::new();
    let reply = engine.reply(&pos);

    assert_eq!(reply.nodes, legal_moves(&pos, Side::Gote).len() as u64);
    assert_eq!(reply.best_move.map(|mv| move_to_usi(&mv)), Some("6d5e".to_string()));
    assert_eq!(reply.score, CAPTURES_CHECKER + piece_value(PieceKind::Rook));

    engine.new_problem();
    let mated = engine.reply(&state("6R1k/9/7G1/9/9/9/9/9/4K4 w -"));
    assert_eq!(mated.nodes, 0);
}
