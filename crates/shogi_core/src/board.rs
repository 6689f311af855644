use crate::{error::IllegalState, types::*};

pub const STARTPOS_SFEN: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b -";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 9]; 9],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Piece on `sq`; off-board squares read as empty.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if sq.is_valid() {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Panics if `sq` is off the board.
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = pc;
    }

    /// Occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.side == side && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

/// Full game state. Transitions return a new value and leave `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub board: Board,
    pub hands: [Hand; 2],
    pub side_to_move: Side,
}

impl BoardState {
    pub fn new(board: Board, hands: [Hand; 2], side_to_move: Side) -> Self {
        Self {
            board,
            hands,
            side_to_move,
        }
    }

    pub fn startpos() -> Self {
        let mut board = Board::empty();
        let back = [
            PieceKind::Lance,
            PieceKind::Knight,
            PieceKind::Silver,
            PieceKind::Gold,
            PieceKind::King,
            PieceKind::Gold,
            PieceKind::Silver,
            PieceKind::Knight,
            PieceKind::Lance,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            board.set(Square::new(0, col), Some(Piece::new(kind, Side::Gote)));
            board.set(Square::new(2, col), Some(Piece::new(PieceKind::Pawn, Side::Gote)));
            board.set(Square::new(6, col), Some(Piece::new(PieceKind::Pawn, Side::Sente)));
            board.set(Square::new(8, col), Some(Piece::new(kind, Side::Sente)));
        }
        board.set(Square::new(1, 1), Some(Piece::new(PieceKind::Rook, Side::Gote)));
        board.set(Square::new(1, 7), Some(Piece::new(PieceKind::Bishop, Side::Gote)));
        board.set(Square::new(7, 1), Some(Piece::new(PieceKind::Bishop, Side::Sente)));
        board.set(Square::new(7, 7), Some(Piece::new(PieceKind::Rook, Side::Sente)));

        Self::new(board, [Hand::default(); 2], Side::Sente)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side.idx()]
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.board.king_square(side)
    }

    /// Moves the piece on `from` to `to`, capturing whatever stands there.
    ///
    /// A captured piece is demoted and added to the mover's hand. The side to
    /// move becomes the mover's opponent.
    pub fn apply_move(&self, from: Square, to: Square, promote: bool) -> Result<Self, IllegalState> {
        for square in [from, to] {
            if !square.is_valid() {
                return Err(IllegalState::OffBoard { square });
            }
        }
        let moved = self
            .board
            .get(from)
            .ok_or(IllegalState::EmptySquare { square: from })?;

        let mut next = self.clone();
        if let Some(captured) = next.board.get(to) {
            next.hands[moved.side.idx()].add(captured.kind.demoted());
        }

        let kind = if promote {
            moved.kind.promoted().unwrap_or(moved.kind)
        } else {
            moved.kind
        };
        next.board.set(from, None);
        next.board.set(to, Some(Piece::new(kind, moved.side)));
        next.side_to_move = moved.side.other();
        Ok(next)
    }

    /// Places an unpromoted `kind` from `side`'s hand on the empty square `to`.
    pub fn apply_drop(&self, kind: PieceKind, to: Square, side: Side) -> Result<Self, IllegalState> {
        if !to.is_valid() {
            return Err(IllegalState::OffBoard { square: to });
        }
        if !kind.is_droppable() {
            return Err(IllegalState::NotDroppable { kind });
        }
        if self.board.get(to).is_some() {
            return Err(IllegalState::Occupied { square: to });
        }

        let mut next = self.clone();
        if !next.hands[side.idx()].take(kind) {
            return Err(IllegalState::NotInHand { kind, side });
        }
        next.board.set(to, Some(Piece::new(kind, side)));
        next.side_to_move = side.other();
        Ok(next)
    }

    pub fn apply(&self, mv: &Move) -> Result<Self, IllegalState> {
        match *mv {
            Move::Board {
                from, to, promote, ..
            } => self.apply_move(from, to, promote),
            Move::Drop { to, piece } => self.apply_drop(piece.kind, to, piece.side),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
