use std::fmt;

pub const BOARD_SIZE: u8 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First player. Moves toward row 0 and is written in upper case.
    Sente,
    Gote,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Sente => Side::Gote,
            Side::Gote => Side::Sente,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Sente => 0,
            Side::Gote => 1,
        }
    }
    /// Row delta of one step "forward" for this side.
    pub fn forward(self) -> i8 {
        match self {
            Side::Sente => -1,
            Side::Gote => 1,
        }
    }
    /// How many rows `row` lies from this side's farthest rank (0 = on it).
    pub fn distance_to_far_rank(self, row: u8) -> u8 {
        match self {
            Side::Sente => row,
            Side::Gote => BOARD_SIZE - 1 - row,
        }
    }
    pub fn in_promotion_zone(self, row: u8) -> bool {
        self.distance_to_far_rank(row) < 3
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Lance,
    Knight,
    Silver,
    Gold,
    Bishop,
    Rook,
    King,
    ProPawn,
    ProLance,
    ProKnight,
    ProSilver,
    Horse,
    Dragon,
}

/// Droppable kinds, in the order hands are written in board notation.
pub const HAND_KINDS: [PieceKind; 7] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
    PieceKind::Pawn,
];

impl PieceKind {
    pub fn promoted(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => Some(PieceKind::ProPawn),
            PieceKind::Lance => Some(PieceKind::ProLance),
            PieceKind::Knight => Some(PieceKind::ProKnight),
            PieceKind::Silver => Some(PieceKind::ProSilver),
            PieceKind::Bishop => Some(PieceKind::Horse),
            PieceKind::Rook => Some(PieceKind::Dragon),
            _ => None,
        }
    }

    /// Base kind a piece reverts to when captured.
    pub fn demoted(self) -> PieceKind {
        match self {
            PieceKind::ProPawn => PieceKind::Pawn,
            PieceKind::ProLance => PieceKind::Lance,
            PieceKind::ProKnight => PieceKind::Knight,
            PieceKind::ProSilver => PieceKind::Silver,
            PieceKind::Horse => PieceKind::Bishop,
            PieceKind::Dragon => PieceKind::Rook,
            base => base,
        }
    }

    pub fn can_promote(self) -> bool {
        self.promoted().is_some()
    }

    pub fn is_promoted(self) -> bool {
        self.demoted() != self
    }

    pub fn is_droppable(self) -> bool {
        HAND_KINDS.contains(&self)
    }

    /// Upper-case letter of the base kind.
    pub fn letter(self) -> char {
        match self.demoted() {
            PieceKind::Pawn => 'P',
            PieceKind::Lance => 'L',
            PieceKind::Knight => 'N',
            PieceKind::Silver => 'S',
            PieceKind::Gold => 'G',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            _ => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'L' => Some(PieceKind::Lance),
            'N' => Some(PieceKind::Knight),
            'S' => Some(PieceKind::Silver),
            'G' => Some(PieceKind::Gold),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    fn hand_idx(self) -> Option<usize> {
        HAND_KINDS.iter().position(|&k| k == self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// A board coordinate. Row 0 is rank `a`, column 0 is file 9.
///
/// The type does not enforce bounds; `is_valid` and `offset` do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 81 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

/// Captured pieces available to one side, keyed by droppable base kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    counts: [u8; 7],
}

impl Hand {
    pub fn count(&self, kind: PieceKind) -> u8 {
        kind.hand_idx().map_or(0, |i| self.counts[i])
    }

    /// Adds one piece; promoted kinds are stored as their base kind.
    pub fn add(&mut self, kind: PieceKind) {
        if let Some(i) = kind.demoted().hand_idx() {
            self.counts[i] = self.counts[i].saturating_add(1);
        }
    }

    /// Removes one piece. Returns false when none is held.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        match kind.hand_idx() {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn set(&mut self, kind: PieceKind, count: u8) {
        if let Some(i) = kind.hand_idx() {
            self.counts[i] = count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Held kinds with their counts, in notation order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        HAND_KINDS
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, c)| **c > 0)
            .map(|(&k, &c)| (k, c))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Board {
        from: Square,
        to: Square,
        piece: Piece,
        promote: bool,
    },
    Drop {
        to: Square,
        piece: Piece,
    },
}

impl Move {
    pub fn to(&self) -> Square {
        match *self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    pub fn piece(&self) -> Piece {
        match *self {
            Move::Board { piece, .. } | Move::Drop { piece, .. } => piece,
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, Move::Drop { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::move_to_usi(self))
    }
}

// Helpers
pub fn file_of(sq: Square) -> u8 {
    BOARD_SIZE - sq.col
}
pub fn rank_of(sq: Square) -> char {
    (b'a' + sq.row) as char
}

pub fn square_to_coord(sq: Square) -> String {
    format!("{}{}", file_of(sq), rank_of(sq))
}

pub fn coord_to_square(c: &str) -> Option<Square> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'1'..=b'9').contains(&f) || !(b'a'..=b'i').contains(&r) {
        return None;
    }
    Some(Square::new(r - b'a', BOARD_SIZE - (f - b'0')))
}
