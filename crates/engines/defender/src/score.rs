//! Static scoring of check replies.
//!
//! A reply is scored by what it does against the check, not by searching.
//! Higher is better for the defender.

use shogi_core::{is_checkmate, legal_moves, BoardState, Move, PieceKind, Side, Square};

/// The attacker has a mate in one after this reply.
pub const ALLOWS_MATE: i32 = -1000;
pub const KING_CAPTURES_CHECKER: i32 = 2000;
pub const CAPTURES_CHECKER: i32 = 1000;
pub const KING_MOVE: i32 = 500;
pub const INTERPOSITION: i32 = 100;
pub const DROP_BLOCK: i32 = 50;

/// Material value of a piece kind, used to prefer bigger captures.
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Lance => 3,
        PieceKind::Knight => 4,
        PieceKind::Silver => 5,
        PieceKind::Gold => 6,
        PieceKind::Bishop => 8,
        PieceKind::Rook => 10,
        PieceKind::ProPawn | PieceKind::ProLance | PieceKind::ProKnight | PieceKind::ProSilver => 6,
        PieceKind::Horse => 10,
        PieceKind::Dragon => 12,
        PieceKind::King => 0,
    }
}

/// Whether `attacker`, to move in `state`, can checkmate in one move.
pub fn attacker_mates_in_one(state: &BoardState, attacker: Side) -> bool {
    let defender = attacker.other();
    legal_moves(state, attacker).iter().any(|mv| {
        state
            .apply(mv)
            .map(|next| is_checkmate(&next, defender))
            .unwrap_or(false)
    })
}

/// Scores the defender's reply `mv` in `state`.
///
/// `checkers` are the squares of the pieces giving check before the reply.
/// Replies that hand the attacker a mate in one score `ALLOWS_MATE`
/// regardless of what they capture.
pub fn score_reply(state: &BoardState, mv: &Move, checkers: &[Square]) -> i32 {
    let defender = mv.piece().side;
    let Ok(next) = state.apply(mv) else {
        return ALLOWS_MATE;
    };
    if attacker_mates_in_one(&next, defender.other()) {
        return ALLOWS_MATE;
    }

    match *mv {
        Move::Drop { .. } => DROP_BLOCK,
        Move::Board { to, piece, .. } => {
            let captured = state
                .piece_at(to)
                .filter(|_| checkers.contains(&to))
                .map(|pc| piece_value(pc.kind));
            match (captured, piece.kind == PieceKind::King) {
                (Some(value), true) => KING_CAPTURES_CHECKER + value,
                (Some(value), false) => CAPTURES_CHECKER + value,
                (None, true) => KING_MOVE,
                (None, false) => INTERPOSITION,
            }
        }
    }
}
