//! Invariants checked along a deterministic game walk.
//!
//! Each ply plays the legal move at a fixed index, so captures, drops and
//! promotions all show up without hand-picking positions.

use shogi_core::{
    has_any_legal_move, is_checkmate, is_in_check, legal_moves, move_to_usi, parse_usi_move,
    BoardState, Move, PieceKind,
};

fn walk(start: BoardState, plies: usize, pick: usize, mut check: impl FnMut(&BoardState)) {
    let mut state = start;
    for _ in 0..plies {
        check(&state);
        let moves = legal_moves(&state, state.side_to_move);
        if moves.is_empty() {
            break;
        }
        let mv = moves[(pick * 7 + 3) % moves.len()];
        state = state.apply(&mv).unwrap();
    }
}

#[test]
fn notation_round_trips_along_games() {
    for pick in 0..6 {
        walk(BoardState::startpos(), 80, pick, |state| {
            let sfen = state.to_sfen();
            assert_eq!(&BoardState::from_sfen(&sfen).unwrap(), state, "{sfen}");

            for mv in legal_moves(state, state.side_to_move) {
                let token = move_to_usi(&mv);
                assert_eq!(parse_usi_move(state, &token).unwrap(), mv, "{token} in {sfen}");
            }
        });
    }
}

#[test]
fn legal_moves_are_safe_along_games() {
    for pick in 0..4 {
        walk(BoardState::startpos(), 60, pick, |state| {
            let side = state.side_to_move;
            for mv in legal_moves(state, side) {
                let next = state.apply(&mv).unwrap();
                assert!(!is_in_check(&next.board, side), "{mv} in {state}");
            }
        });
    }
}

#[test]
fn checkmate_definition_holds_along_games() {
    for pick in 0..4 {
        walk(BoardState::startpos(), 60, pick, |state| {
            let side = state.side_to_move;
            let moves = legal_moves(state, side);
            assert_eq!(has_any_legal_move(state, side), !moves.is_empty());
            assert_eq!(
                is_checkmate(state, side),
                is_in_check(&state.board, side) && moves.is_empty()
            );
        });
    }
}

#[test]
fn hands_only_hold_base_kinds() {
    for pick in 0..6 {
        walk(BoardState::startpos(), 80, pick, |state| {
            for hand in &state.hands {
                for (kind, count) in hand.iter() {
                    assert!(count > 0);
                    assert!(!kind.is_promoted(), "{kind:?} in hand");
                    assert_ne!(kind, PieceKind::King);
                }
            }
            for mv in legal_moves(state, state.side_to_move) {
                if let Move::Drop { piece, .. } = mv {
                    assert!(state.hand(piece.side).count(piece.kind) > 0);
                }
            }
        });
    }
}
