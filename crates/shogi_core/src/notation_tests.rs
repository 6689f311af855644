use super::*;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_startpos_sfen() {
    assert_eq!(BoardState::startpos().to_sfen(), STARTPOS_SFEN);
    assert_eq!(
        BoardState::from_sfen(STARTPOS_SFEN).unwrap(),
        BoardState::startpos()
    );
}

#[test]
fn test_hands_round_trip() {
    let sfen = "4k4/9/9/9/9/9/9/9/4K4 w 2RB3Pg18p";
    let state = BoardState::from_sfen(sfen).unwrap();

    assert_eq!(state.side_to_move, Side::Gote);
    assert_eq!(state.hand(Side::Sente).count(PieceKind::Rook), 2);
    assert_eq!(state.hand(Side::Sente).count(PieceKind::Bishop), 1);
    assert_eq!(state.hand(Side::Sente).count(PieceKind::Pawn), 3);
    assert_eq!(state.hand(Side::Gote).count(PieceKind::Gold), 1);
    assert_eq!(state.hand(Side::Gote).count(PieceKind::Pawn), 18);
    assert_eq!(state.to_sfen(), sfen);
}

#[test]
fn test_promoted_pieces_round_trip() {
    let sfen = "+P3k3+r/9/2+b6/9/4+S4/9/+l7+N/9/4K3+B b -";
    let state: BoardState = sfen.parse().unwrap();

    assert_eq!(
        state.piece_at(sq(0, 0)),
        Some(Piece::new(PieceKind::ProPawn, Side::Sente))
    );
    assert_eq!(
        state.piece_at(sq(0, 8)),
        Some(Piece::new(PieceKind::Dragon, Side::Gote))
    );
    assert_eq!(
        state.piece_at(sq(2, 2)),
        Some(Piece::new(PieceKind::Horse, Side::Gote))
    );
    assert_eq!(
        state.piece_at(sq(6, 0)),
        Some(Piece::new(PieceKind::ProLance, Side::Gote))
    );
    assert_eq!(state.to_string(), sfen);
}

#[test]
fn test_explicit_single_count_is_accepted() {
    let state = BoardState::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 1G").unwrap();
    assert_eq!(state.hand(Side::Sente).count(PieceKind::Gold), 1);
    assert_eq!(state.to_sfen(), "4k4/9/9/9/9/9/9/9/4K4 b G");
}

#[test]
fn test_malformed_board_notation_rejected() {
    let cases = [
        ("", ParseError::FieldCount { expected: 3, found: 0 }),
        (
            "4k4/9/9/9/9/9/9/9/4K4 b",
            ParseError::FieldCount { expected: 3, found: 2 },
        ),
        (
            "4k4/9/9/9/9/9/9/4K4 b -",
            ParseError::RankCount { found: 8 },
        ),
        (
            "8/9/9/9/9/9/9/9/4K4 b -",
            ParseError::RankWidth { rank: 1, width: 8 },
        ),
        (
            "4k5/9/9/9/9/9/9/9/4K4 b -",
            ParseError::RankWidth { rank: 1, width: 10 },
        ),
        (
            "4x4/9/9/9/9/9/9/9/4K4 b -",
            ParseError::InvalidBoardChar { ch: 'x', rank: 1 },
        ),
        (
            "4+k4/9/9/9/9/9/9/9/4K4 b -",
            ParseError::DanglingPromotion { rank: 1 },
        ),
        (
            "4k3+/9/9/9/9/9/9/9/4K4 b -",
            ParseError::DanglingPromotion { rank: 1 },
        ),
        (
            "4k4/9/9/9/9/9/9/9/4K4 x -",
            ParseError::InvalidSide {
                token: "x".to_string(),
            },
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(BoardState::from_sfen(input), Err(expected), "input {input:?}");
    }
}

#[test]
fn test_malformed_hands_rejected() {
    for hand in ["0P", "K", "PP", "+P", "2", "P2", "x", "3+B"] {
        let sfen = format!("4k4/9/9/9/9/9/9/9/4K4 b {hand}");
        match BoardState::from_sfen(&sfen) {
            Err(ParseError::InvalidHand { token, .. }) => assert_eq!(token, hand),
            other => panic!("hand {hand:?} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_board_move_tokens() {
    let state = BoardState::startpos();
    let mv = parse_usi_move(&state, "7g7f").unwrap();
    assert_eq!(
        mv,
        Move::Board {
            from: sq(6, 2),
            to: sq(5, 2),
            piece: Piece::new(PieceKind::Pawn, Side::Sente),
            promote: false,
        }
    );
    assert_eq!(move_to_usi(&mv), "7g7f");
    assert_eq!(mv.to_string(), "7g7f");
}

#[test]
fn test_promotion_token_round_trip() {
    let state = BoardState::from_sfen(
        "lnsgkgsnl/1r5b1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL b -",
    )
    .unwrap();
    let mv = parse_usi_move(&state, "8h2b+").unwrap();
    assert_eq!(
        mv,
        Move::Board {
            from: sq(7, 1),
            to: sq(1, 7),
            piece: Piece::new(PieceKind::Bishop, Side::Sente),
            promote: true,
        }
    );
    assert_eq!(move_to_usi(&mv), "8h2b+");
}

#[test]
fn test_drop_token_round_trip() {
    let state = BoardState::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w p").unwrap();
    let mv = parse_usi_move(&state, "P*5e").unwrap();
    assert_eq!(
        mv,
        Move::Drop {
            to: sq(4, 4),
            piece: Piece::new(PieceKind::Pawn, Side::Gote),
        }
    );
    assert_eq!(move_to_usi(&mv), "P*5e");
}

#[test]
fn test_malformed_move_tokens_rejected() {
    let state = BoardState::startpos();
    for token in [
        "", "7g7", "7g7f++", "0a1b", "7j7f", "7g7g", "5e5d", "K*5e", "p*5e", "+P*5e", "P*5", "P*0e",
        "6i5h+", "７g7f",
    ] {
        match parse_usi_move(&state, token) {
            Err(ParseError::InvalidMove { token: t, .. }) => assert_eq!(t, token),
            other => panic!("token {token:?} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_square_coordinates() {
    assert_eq!(square_to_coord(sq(0, 0)), "9a");
    assert_eq!(square_to_coord(sq(8, 8)), "1i");
    assert_eq!(square_to_coord(sq(6, 2)), "7g");
    assert_eq!(coord_to_square("5e"), Some(sq(4, 4)));
    assert_eq!(coord_to_square("1a"), Some(sq(0, 8)));
    assert_eq!(coord_to_square("0a"), None);
    assert_eq!(coord_to_square("5j"), None);
}
