//! Check, legal moves and checkmate.
//!
//! Every function here is total: a side without a king is simply never in check.

use crate::{
    board::{Board, BoardState},
    error::{IllegalState, Result},
    movegen::{attacks, board_moves, drop_moves, pseudo_moves},
    notation::parse_usi_move,
    types::*,
};

/// Which moves an existence check considers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Drops {
    Include,
    /// Board moves only. Used when asking whether a dropped pawn mates: the
    /// only checker is then an adjacent pawn, which no drop can block.
    Skip,
}

pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    board
        .pieces()
        .any(|(sq, pc)| pc.side != side && attacks(board, sq, king))
}

/// Squares of the enemy pieces currently giving check to `side`.
pub fn checkers(board: &Board, side: Side) -> Vec<Square> {
    let Some(king) = board.king_square(side) else {
        return Vec::new();
    };
    board
        .pieces()
        .filter(|&(sq, pc)| pc.side != side && attacks(board, sq, king))
        .map(|(sq, _)| sq)
        .collect()
}

/// The position after `mv`, if it leaves `side`'s king safe.
fn safe_successor(state: &BoardState, side: Side, mv: &Move) -> Option<BoardState> {
    let next = state.apply(mv).ok()?;
    (!is_in_check(&next.board, side)).then_some(next)
}

fn is_pawn_drop(mv: &Move) -> bool {
    matches!(mv, Move::Drop { piece, .. } if piece.kind == PieceKind::Pawn)
}

fn is_legal_pseudo(state: &BoardState, side: Side, mv: &Move) -> bool {
    match safe_successor(state, side, mv) {
        None => false,
        Some(next) => !(is_pawn_drop(mv) && is_mated(&next, side.other(), Drops::Skip)),
    }
}

/// All legal moves of `side`, returning a freshly allocated vector.
pub fn legal_moves(state: &BoardState, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(128);
    legal_moves_into(state, side, &mut out);
    out
}

/// All legal moves of `side` into the provided buffer, reusing it across calls.
pub fn legal_moves_into(state: &BoardState, side: Side, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(state, side, out);
    out.retain(|mv| is_legal_pseudo(state, side, mv));
}

fn any_legal_move(state: &BoardState, side: Side, drops: Drops) -> bool {
    let mut moves = Vec::with_capacity(64);
    board_moves(state, side, &mut moves);
    if moves
        .iter()
        .any(|mv| safe_successor(state, side, mv).is_some())
    {
        return true;
    }
    if drops == Drops::Skip {
        return false;
    }

    moves.clear();
    drop_moves(state, side, &mut moves);
    moves.iter().any(|mv| is_legal_pseudo(state, side, mv))
}

fn is_mated(state: &BoardState, side: Side, drops: Drops) -> bool {
    is_in_check(&state.board, side) && !any_legal_move(state, side, drops)
}

/// Whether `side` has at least one legal move. Stops at the first one found.
pub fn has_any_legal_move(state: &BoardState, side: Side) -> bool {
    any_legal_move(state, side, Drops::Include)
}

pub fn is_checkmate(state: &BoardState, side: Side) -> bool {
    is_mated(state, side, Drops::Include)
}

/// Whether a pawn dropped by `side` on `square` would checkmate the opponent.
///
/// The hand is not consulted; an occupied or off-board square is never a mate.
pub fn is_drop_pawn_mate(state: &BoardState, square: Square, side: Side) -> bool {
    if !square.is_valid() || state.board.get(square).is_some() {
        return false;
    }
    let mut next = state.clone();
    next.hands[side.idx()].take(PieceKind::Pawn);
    next.board.set(square, Some(Piece::new(PieceKind::Pawn, side)));
    next.side_to_move = side.other();
    is_mated(&next, side.other(), Drops::Skip)
}

/// Whether `mv` is a legal move for the side to move.
pub fn is_legal(state: &BoardState, mv: &Move) -> bool {
    let side = mv.piece().side;
    if side != state.side_to_move {
        return false;
    }
    let mut candidates = Vec::with_capacity(128);
    pseudo_moves(state, side, &mut candidates);
    candidates.contains(mv) && is_legal_pseudo(state, side, mv)
}

/// Decodes `token` and plays it if it is legal for the side to move.
pub fn play_usi(state: &BoardState, token: &str) -> Result<BoardState> {
    let mv = parse_usi_move(state, token)?;
    if !is_legal(state, &mv) {
        return Err(IllegalState::IllegalMove {
            token: token.to_string(),
        }
        .into());
    }
    Ok(state.apply(&mv)?)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
