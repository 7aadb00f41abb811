use crate::puzzle::{apply_move, heuristic, valid_moves, Move, State};

/// One-ply greedy hint: the move whose successor has the smallest Manhattan
/// distance. Ties go to the first move in enumeration order.
///
/// This is advisory only; following hints repeatedly can cycle.
pub fn best_move(state: &State) -> Option<Move> {
    let mut best: Option<(usize, Move)> = None;

    for mv in valid_moves(state) {
        let Ok(next) = apply_move(state, mv) else {
            continue;
        };
        let score = heuristic(&next);

        if best.map_or(true, |(best_score, _)| score < best_score) {
            best = Some((score, mv));
        }
    }

    best.map(|(_, mv)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    #[test]
    fn one_move_from_goal() {
        let s = State::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert_eq!(best_move(&s), Some(Move::new(2, 2)));
    }

    #[test]
    fn goal_still_offers_a_move() {
        // Both successors score 1; Up is enumerated first.
        assert_eq!(best_move(&GOAL), Some(Move::new(1, 2)));
    }

    #[test]
    fn picks_strictly_smaller_score() {
        // empty at centre; moving 5 up from (2,1) is the only improving move
        let s = State::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        assert_eq!(best_move(&s), Some(Move::new(2, 1)));
    }
}
