//! Authored lines replayed against the rules engine.

use move_tree::{MoveTree, ProblemLines};
use shogi_core::{is_checkmate, is_legal, parse_usi_move, BoardState};

const CORNER_MATE: &str = "8k/9/7G1/9/9/9/9/9/4K4 b RG";

fn replay(start: &str, line: &[String]) -> BoardState {
    let mut state = BoardState::from_sfen(start).unwrap();
    for token in line {
        let mv = parse_usi_move(&state, token).unwrap();
        assert!(is_legal(&state, &mv), "{token} is illegal in {state}");
        state = state.apply(&mv).unwrap();
    }
    state
}

#[test]
fn every_authored_line_is_legal() {
    let tree = MoveTree::from_sequences(
        CORNER_MATE,
        &[vec!["R*3a"], vec!["R*2a", "1a2a", "G*2b"]],
    );

    for line in tree.to_sequences() {
        replay(&tree.start, &line);
    }
}

#[test]
fn stored_lines_end_in_mate() {
    let json = r#"{
        "start": "8k/9/7G1/9/9/9/9/9/4K4 b R",
        "sequences": [["R*3a"]]
    }"#;
    let lines = ProblemLines::from_json(json).unwrap();

    for line in &lines.sequences {
        let end = replay(&lines.start, line);
        assert!(is_checkmate(&end, end.side_to_move));
    }
}
