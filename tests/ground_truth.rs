use std::collections::{HashMap, VecDeque};

use eight_puzzle::{
    apply_move, best_move, heuristic, is_solvable, solve, valid_moves, Move, SearchLimits,
    SolveError, Solver, State, GOAL,
};

/// Distance from the goal for every reachable state, by breadth-first search.
fn distances() -> HashMap<State, usize> {
    let mut dist = HashMap::with_capacity(181_440);
    let mut queue = VecDeque::new();
    dist.insert(GOAL, 0);
    queue.push_back(GOAL);

    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for mv in valid_moves(&state) {
            let next = apply_move(&state, mv).expect("valid move");
            dist.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    dist
}

fn permutations(cells: &mut [u8; 9], k: usize, out: &mut Vec<[u8; 9]>) {
    if k == cells.len() {
        out.push(*cells);
        return;
    }
    for i in k..cells.len() {
        cells.swap(k, i);
        permutations(cells, k + 1, out);
        cells.swap(k, i);
    }
}

fn play(start: State, moves: &[Move]) -> State {
    moves
        .iter()
        .try_fold(start, |s, &mv| apply_move(&s, mv))
        .expect("path uses legal moves")
}

#[test]
fn parity_matches_reachability() {
    let dist = distances();
    assert_eq!(dist.len(), 181_440);

    let mut all = Vec::with_capacity(362_880);
    permutations(&mut [0, 1, 2, 3, 4, 5, 6, 7, 8], 0, &mut all);
    assert_eq!(all.len(), 362_880);

    for cells in all {
        let state = State::from_cells(cells).expect("permutation");
        assert_eq!(
            is_solvable(&state),
            dist.contains_key(&state),
            "parity disagrees with reachability for\n{}",
            state
        );
    }
}

#[test]
fn heuristic_is_admissible_and_changes_by_one_per_move() {
    for (state, d) in distances() {
        let h = heuristic(&state);
        assert!(h <= d, "h={} exceeds true distance {} for\n{}", h, d, state);

        for mv in valid_moves(&state) {
            let next = apply_move(&state, mv).unwrap();
            assert_eq!(heuristic(&next).abs_diff(h), 1);
        }
    }
}

#[test_log::test]
fn solver_paths_are_shortest() {
    let dist = distances();
    let solver = Solver::default();

    let mut sample: Vec<(State, usize)> = dist
        .iter()
        .filter(|(_, &d)| d >= 30)
        .map(|(&s, &d)| (s, d))
        .take(10)
        .collect();
    sample.extend(dist.iter().step_by(1_500).map(|(&s, &d)| (s, d)));

    for (state, d) in sample {
        let solution = solver.solve(&state).expect("solvable state");
        assert_eq!(solution.len(), d, "suboptimal path for\n{}", state);
        assert_eq!(play(state, &solution.moves), GOAL);
    }
}

#[test]
fn default_ceiling_never_triggers_on_deepest_states() {
    let deepest: Vec<State> = distances()
        .into_iter()
        .filter(|&(_, d)| d == 31)
        .map(|(s, _)| s)
        .collect();
    assert_eq!(deepest.len(), 2);

    for state in deepest {
        let solution = Solver::default().solve(&state).unwrap();
        assert_eq!(solution.len(), 31);
        assert!(solution.iterations < SearchLimits::default().max_iterations);
    }
}

#[test]
fn one_move_scenario() {
    let s = State::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
    assert_eq!(s.empty(), (2, 1));
    assert_eq!(best_move(&s), Some(Move::new(2, 2)));
    assert_eq!(solve(&s), Ok(vec![Move::new(2, 2)]));
}

#[test]
fn two_move_scenario() {
    let s = play(GOAL, &[Move::new(2, 1), Move::new(2, 0)]);
    assert!(is_solvable(&s));

    let path = solve(&s).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(play(s, &path), GOAL);
}

#[test]
fn goal_solves_to_empty_path() {
    assert_eq!(solve(&GOAL), Ok(vec![]));
    assert_eq!(heuristic(&GOAL), 0);
}

#[test]
fn unsolvable_and_exhausted_are_distinct() {
    let odd = State::from_grid([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
    assert_eq!(solve(&odd), Err(SolveError::Unsolvable));

    let far = State::from_grid([[6, 4, 7], [8, 5, 0], [3, 2, 1]]).unwrap();
    let capped = Solver::new(SearchLimits::new(SearchLimits::REFERENCE_MAX_ITERATIONS / 100));
    assert!(matches!(
        capped.solve(&far),
        Err(SolveError::Exhausted { .. })
    ));
}
