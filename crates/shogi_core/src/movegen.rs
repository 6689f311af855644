//! Pseudo-legal move generation.
//!
//! Nothing here checks whether the mover's own king is left in check; that is
//! the job of `rules`.

use crate::{
    board::{Board, BoardState},
    types::*,
};

/// Movement of one piece kind, written for Sente (forward is row - 1).
/// Gote uses the same offsets negated.
#[derive(Clone, Copy, Debug)]
pub struct Movement {
    pub steps: &'static [(i8, i8)],
    pub rays: &'static [(i8, i8)],
}

const NONE: &[(i8, i8)] = &[];
const FORWARD: &[(i8, i8)] = &[(-1, 0)];
const KNIGHT_STEPS: &[(i8, i8)] = &[(-2, -1), (-2, 1)];
const GOLD_STEPS: &[(i8, i8)] = &[(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)];
const SILVER_STEPS: &[(i8, i8)] = &[(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)];
const KING_STEPS: &[(i8, i8)] = &[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const DIAGONALS: &[(i8, i8)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: &[(i8, i8)] = &[(-1, 0), (0, -1), (0, 1), (1, 0)];

pub fn movement(kind: PieceKind) -> Movement {
    let (steps, rays) = match kind {
        PieceKind::Pawn => (FORWARD, NONE),
        PieceKind::Lance => (NONE, FORWARD),
        PieceKind::Knight => (KNIGHT_STEPS, NONE),
        PieceKind::Silver => (SILVER_STEPS, NONE),
        PieceKind::Gold
        | PieceKind::ProPawn
        | PieceKind::ProLance
        | PieceKind::ProKnight
        | PieceKind::ProSilver => (GOLD_STEPS, NONE),
        PieceKind::King => (KING_STEPS, NONE),
        PieceKind::Bishop => (NONE, DIAGONALS),
        PieceKind::Rook => (NONE, ORTHOGONALS),
        PieceKind::Horse => (ORTHOGONALS, DIAGONALS),
        PieceKind::Dragon => (DIAGONALS, ORTHOGONALS),
    };
    Movement { steps, rays }
}

fn oriented(side: Side, (d_row, d_col): (i8, i8)) -> (i8, i8) {
    match side {
        Side::Sente => (d_row, d_col),
        Side::Gote => (-d_row, -d_col),
    }
}

/// Visits every square the piece on `from` could move to, in a fixed order
/// (steps, then rays). Stops early when `visit` returns true.
fn walk(board: &Board, from: Square, pc: Piece, mut visit: impl FnMut(Square) -> bool) {
    let m = movement(pc.kind);

    for &delta in m.steps {
        let (dr, dc) = oriented(pc.side, delta);
        if let Some(to) = from.offset(dr, dc) {
            match board.get(to) {
                Some(other) if other.side == pc.side => {}
                _ => {
                    if visit(to) {
                        return;
                    }
                }
            }
        }
    }

    for &delta in m.rays {
        let (dr, dc) = oriented(pc.side, delta);
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.get(to) {
                None => {
                    if visit(to) {
                        return;
                    }
                }
                Some(other) => {
                    if other.side != pc.side && visit(to) {
                        return;
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

/// Pseudo-legal destinations of the piece on `from` (empty if there is none).
pub fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    if let Some(pc) = board.get(from) {
        walk(board, from, pc, |to| {
            out.push(to);
            false
        });
    }
    out
}

/// True if the piece on `from` could move onto `target`.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    let Some(pc) = board.get(from) else {
        return false;
    };
    let mut hit = false;
    walk(board, from, pc, |to| {
        hit = to == target;
        hit
    });
    hit
}

/// Whether a piece of `kind` standing on `row` would still have a move.
fn has_forward_room(kind: PieceKind, side: Side, row: u8) -> bool {
    let distance = side.distance_to_far_rank(row);
    match kind {
        PieceKind::Pawn | PieceKind::Lance => distance >= 1,
        PieceKind::Knight => distance >= 2,
        _ => true,
    }
}

fn has_unpromoted_pawn_on_file(board: &Board, side: Side, col: u8) -> bool {
    (0..BOARD_SIZE).any(|row| {
        board.get(Square::new(row, col)) == Some(Piece::new(PieceKind::Pawn, side))
    })
}

/// Empty squares where `side` may drop a `kind` from hand.
///
/// Whether the hand actually holds one is not checked. Pawn drops that would
/// mate are filtered later by `rules`.
pub fn drop_squares(state: &BoardState, kind: PieceKind, side: Side) -> Vec<Square> {
    if !kind.is_droppable() {
        return Vec::new();
    }
    Square::all()
        .filter(|&sq| state.board.get(sq).is_none())
        .filter(|&sq| has_forward_room(kind, side, sq.row))
        .filter(|&sq| {
            kind != PieceKind::Pawn || !has_unpromoted_pawn_on_file(&state.board, side, sq.col)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Promotion {
    /// The piece cannot promote on this move.
    Unavailable,
    /// Promoting and staying unpromoted are both allowed.
    Optional,
    /// The piece would have no further move unless it promotes.
    Forced,
}

impl Promotion {
    /// Promote flags to generate, promotion first.
    pub fn choices(self) -> &'static [bool] {
        match self {
            Promotion::Unavailable => &[false],
            Promotion::Optional => &[true, false],
            Promotion::Forced => &[true],
        }
    }
}

pub fn promotion_options(piece: Piece, from: Square, to: Square) -> Promotion {
    if !piece.kind.can_promote() {
        return Promotion::Unavailable;
    }
    if !piece.side.in_promotion_zone(from.row) && !piece.side.in_promotion_zone(to.row) {
        return Promotion::Unavailable;
    }
    if has_forward_room(piece.kind, piece.side, to.row) {
        Promotion::Optional
    } else {
        Promotion::Forced
    }
}

/// Board moves of `side`, one per offered promotion choice, appended to `out`.
pub fn board_moves(state: &BoardState, side: Side, out: &mut Vec<Move>) {
    for (from, pc) in state.board.pieces() {
        if pc.side != side {
            continue;
        }
        walk(&state.board, from, pc, |to| {
            for &promote in promotion_options(pc, from, to).choices() {
                out.push(Move::Board {
                    from,
                    to,
                    piece: pc,
                    promote,
                });
            }
            false
        });
    }
}

/// Drops of `side` from its hand, appended to `out`.
pub fn drop_moves(state: &BoardState, side: Side, out: &mut Vec<Move>) {
    for (kind, _) in state.hand(side).iter() {
        for to in drop_squares(state, kind, side) {
            out.push(Move::Drop {
                to,
                piece: Piece::new(kind, side),
            });
        }
    }
}

/// Every pseudo-legal move of `side`: board moves first, then drops.
pub fn pseudo_moves(state: &BoardState, side: Side, out: &mut Vec<Move>) {
    board_moves(state, side, out);
    drop_moves(state, side, out);
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
