use crate::{board::BoardState, rules::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with the
/// side to move alternating each ply.
pub fn perft(state: &BoardState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &BoardState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let (buf, rest) = match layers.split_first_mut() {
            Some(split) => split,
            None => return 1,
        };

        legal_moves_into(state, state.side_to_move, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            if let Ok(next) = state.apply(mv) {
                nodes += inner(&next, depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(128); depth as usize];
    inner(state, depth, &mut layers[..])
}
