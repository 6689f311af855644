//! Board notation (SFEN without a move number) and USI move tokens.
//!
//! Board: `<ranks> <side> <hand>`, e.g.
//! `lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b -`.
//! Moves: `7g7f`, `8h2b+`, `P*5e`.

use std::fmt;
use std::str::FromStr;

use crate::{board::*, error::ParseError, types::*};

const PROMOTION_MARKER: char = '+';
const DROP_MARKER: char = '*';
const EMPTY_HAND: &str = "-";

fn piece_char(pc: Piece) -> char {
    match pc.side {
        Side::Sente => pc.kind.letter(),
        Side::Gote => pc.kind.letter().to_ascii_lowercase(),
    }
}

fn side_of_char(ch: char) -> Side {
    if ch.is_ascii_uppercase() {
        Side::Sente
    } else {
        Side::Gote
    }
}

impl BoardState {
    pub fn to_sfen(&self) -> String {
        let mut out = String::with_capacity(96);

        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            let mut empties = 0;
            for col in 0..BOARD_SIZE {
                match self.board.get(Square::new(row, col)) {
                    None => empties += 1,
                    Some(pc) => {
                        if empties > 0 {
                            out.push_str(&empties.to_string());
                            empties = 0;
                        }
                        if pc.kind.is_promoted() {
                            out.push(PROMOTION_MARKER);
                        }
                        out.push(piece_char(pc));
                    }
                }
            }
            if empties > 0 {
                out.push_str(&empties.to_string());
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Side::Sente => 'b',
            Side::Gote => 'w',
        });

        out.push(' ');
        if self.hands.iter().all(Hand::is_empty) {
            out.push_str(EMPTY_HAND);
        } else {
            for side in [Side::Sente, Side::Gote] {
                for (kind, count) in self.hand(side).iter() {
                    if count > 1 {
                        out.push_str(&count.to_string());
                    }
                    out.push(piece_char(Piece::new(kind, side)));
                }
            }
        }
        out
    }

    pub fn from_sfen(sfen: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = sfen.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ParseError::FieldCount {
                expected: 3,
                found: parts.len(),
            });
        }

        let board = parse_ranks(parts[0])?;
        let side_to_move = match parts[1] {
            "b" => Side::Sente,
            "w" => Side::Gote,
            other => {
                return Err(ParseError::InvalidSide {
                    token: other.to_string(),
                })
            }
        };
        let hands = parse_hands(parts[2])?;

        Ok(BoardState::new(board, hands, side_to_move))
    }
}

fn parse_ranks(text: &str) -> Result<Board, ParseError> {
    let ranks: Vec<&str> = text.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(ParseError::RankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = row + 1;
        let mut col: usize = 0;
        let mut promoted = false;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d == 0 || promoted {
                    return Err(ParseError::InvalidBoardChar { ch, rank });
                }
                col += d as usize;
            } else if ch == PROMOTION_MARKER {
                if promoted {
                    return Err(ParseError::DanglingPromotion { rank });
                }
                promoted = true;
                continue;
            } else {
                let base =
                    PieceKind::from_letter(ch).ok_or(ParseError::InvalidBoardChar { ch, rank })?;
                let kind = if promoted {
                    base.promoted().ok_or(ParseError::DanglingPromotion { rank })?
                } else {
                    base
                };
                if col < BOARD_SIZE as usize {
                    board.set(
                        Square::new(row as u8, col as u8),
                        Some(Piece::new(kind, side_of_char(ch))),
                    );
                }
                col += 1;
                promoted = false;
            }
            if col > BOARD_SIZE as usize {
                return Err(ParseError::RankWidth { rank, width: col });
            }
        }
        if promoted {
            return Err(ParseError::DanglingPromotion { rank });
        }
        if col != BOARD_SIZE as usize {
            return Err(ParseError::RankWidth { rank, width: col });
        }
    }
    Ok(board)
}

fn parse_hands(text: &str) -> Result<[Hand; 2], ParseError> {
    let mut hands = [Hand::default(); 2];
    if text == EMPTY_HAND {
        return Ok(hands);
    }

    let mut count: Option<u32> = None;
    for ch in text.chars() {
        if let Some(d) = ch.to_digit(10) {
            let next = count.unwrap_or(0) * 10 + d;
            if next > u8::MAX as u32 {
                return Err(ParseError::hand(text, "count out of range"));
            }
            count = Some(next);
            continue;
        }

        let kind = PieceKind::from_letter(ch)
            .ok_or_else(|| ParseError::hand(text, format!("unknown piece '{ch}'")))?;
        if !kind.is_droppable() {
            return Err(ParseError::hand(text, format!("'{ch}' cannot be held")));
        }
        let n = count.take().unwrap_or(1);
        if n == 0 {
            return Err(ParseError::hand(text, format!("zero count for '{ch}'")));
        }
        let hand = &mut hands[side_of_char(ch).idx()];
        if hand.count(kind) > 0 {
            return Err(ParseError::hand(text, format!("'{ch}' listed twice")));
        }
        hand.set(kind, n as u8);
    }

    if count.is_some() {
        return Err(ParseError::hand(text, "count without a piece"));
    }
    if hands.iter().all(Hand::is_empty) {
        return Err(ParseError::hand(text, "empty hand must be written as '-'"));
    }
    Ok(hands)
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sfen())
    }
}

impl FromStr for BoardState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardState::from_sfen(s)
    }
}

pub fn move_to_usi(mv: &Move) -> String {
    match *mv {
        Move::Board {
            from, to, promote, ..
        } => {
            let mut s = String::with_capacity(5);
            s.push_str(&square_to_coord(from));
            s.push_str(&square_to_coord(to));
            if promote {
                s.push(PROMOTION_MARKER);
            }
            s
        }
        Move::Drop { to, piece } => {
            format!("{}{}{}", piece.kind.letter(), DROP_MARKER, square_to_coord(to))
        }
    }
}

/// Decodes a USI move token against `state`.
///
/// Board moves take their piece from the from-square; drops are attributed to
/// the side to move. Legality is not checked here.
pub fn parse_usi_move(state: &BoardState, txt: &str) -> Result<Move, ParseError> {
    if !txt.is_ascii() {
        return Err(ParseError::mv(txt, "non-ASCII characters"));
    }

    if let Some((letter, target)) = txt.split_once(DROP_MARKER) {
        let mut chars = letter.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_uppercase() => PieceKind::from_letter(ch),
            _ => None,
        }
        .filter(|k| k.is_droppable())
        .ok_or_else(|| ParseError::mv(txt, "expected a droppable piece letter before '*'"))?;
        let to = coord_to_square(target)
            .ok_or_else(|| ParseError::mv(txt, "invalid drop square"))?;
        return Ok(Move::Drop {
            to,
            piece: Piece::new(kind, state.side_to_move),
        });
    }

    let (squares, promote) = match txt.strip_suffix(PROMOTION_MARKER) {
        Some(rest) => (rest, true),
        None => (txt, false),
    };
    if squares.len() != 4 {
        return Err(ParseError::mv(txt, "expected <from><to>[+]"));
    }
    let from = coord_to_square(&squares[0..2])
        .ok_or_else(|| ParseError::mv(txt, "invalid from-square"))?;
    let to =
        coord_to_square(&squares[2..4]).ok_or_else(|| ParseError::mv(txt, "invalid to-square"))?;
    if from == to {
        return Err(ParseError::mv(txt, "from and to are the same square"));
    }
    let piece = state
        .piece_at(from)
        .ok_or_else(|| ParseError::mv(txt, "no piece on the from-square"))?;
    if promote && !piece.kind.can_promote() {
        return Err(ParseError::mv(txt, "piece cannot promote"));
    }

    Ok(Move::Board {
        from,
        to,
        piece,
        promote,
    })
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
