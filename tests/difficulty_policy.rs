//! Difficulty levels measured over many seeded trials

mod common;

use std::collections::HashSet;

use common::board;
use oxo::{
    Error,
    ai::{Difficulty, MovePolicy, Sides, select_move},
    tictactoe::{Board, Player},
};
use rand::{SeedableRng, rngs::StdRng};

const TRIALS: usize = 2000;

/// How often `policy` picks `target` for O on "XX.OO...." where 5 wins
fn count_choice(policy: MovePolicy, target: usize, seed: u64) -> usize {
    let b = board("XX.OO....");
    let sides = Sides::for_player(Player::O);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..TRIALS)
        .filter(|_| policy.choose_move(&b, sides, &mut rng).unwrap() == target)
        .count()
}

#[test]
fn easy_reaches_every_empty_cell() {
    let b = board("X...O....");
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let pos = select_move(&b, Player::X, Player::O, Difficulty::Easy, &mut rng).unwrap();
        assert!(b.is_empty(pos), "easy chose occupied cell {pos}");
        seen.insert(pos);
    }
    let expected: HashSet<usize> = b.empty_positions().into_iter().collect();
    assert_eq!(seen, expected);
}

#[test]
fn easy_is_roughly_uniform() {
    // Five empty cells, so the winning cell comes up about a fifth of the time
    let hits = count_choice(MovePolicy::new(Difficulty::Easy), 5, 11);
    assert!((300..=500).contains(&hits), "easy hit the win {hits} times");
}

#[test]
fn medium_mixes_optimal_and_random() {
    // 0.5 optimal plus 0.5 * 1/5 random
    let hits = count_choice(MovePolicy::new(Difficulty::Medium), 5, 13);
    assert!((1050..=1350).contains(&hits), "medium hit the win {hits} times");
}

#[test]
fn medium_probability_is_configurable() {
    let always = MovePolicy::new(Difficulty::Medium)
        .with_optimal_probability(1.0)
        .unwrap();
    assert_eq!(count_choice(always, 5, 17), TRIALS);

    assert!(
        MovePolicy::new(Difficulty::Medium)
            .with_optimal_probability(-0.1)
            .is_err()
    );
}

#[test]
fn hard_always_plays_the_minimax_move() {
    assert_eq!(count_choice(MovePolicy::new(Difficulty::Hard), 5, 19), TRIALS);

    let mut rng = StdRng::seed_from_u64(23);
    let b = board("X.O.O...X");
    for _ in 0..20 {
        assert_eq!(
            select_move(&b, Player::X, Player::O, Difficulty::Hard, &mut rng).unwrap(),
            6
        );
    }
}

#[test]
fn hard_completes_column_for_either_side() {
    let b = board("XO.XO....");
    let mut rng = StdRng::seed_from_u64(37);
    assert_eq!(
        select_move(&b, Player::X, Player::O, Difficulty::Hard, &mut rng).unwrap(),
        6
    );
    assert_eq!(
        select_move(&b, Player::O, Player::X, Difficulty::Hard, &mut rng).unwrap(),
        7
    );
}

#[test]
fn rejects_unplayable_boards() {
    let mut rng = StdRng::seed_from_u64(29);
    for difficulty in Difficulty::ALL {
        let full = board("XOXXOOOXX");
        assert!(matches!(
            select_move(&full, Player::X, Player::O, difficulty, &mut rng),
            Err(Error::NoLegalMove)
        ));

        let won = board("XXXOO....");
        assert!(matches!(
            select_move(&won, Player::O, Player::X, difficulty, &mut rng),
            Err(Error::GameOver)
        ));

        let impossible = board("XXX......");
        assert!(matches!(
            select_move(&impossible, Player::O, Player::X, difficulty, &mut rng),
            Err(Error::InconsistentState { .. })
        ));

        assert!(matches!(
            select_move(&Board::new(), Player::X, Player::X, difficulty, &mut rng),
            Err(Error::InconsistentState { .. })
        ));
    }
}

#[test]
fn policy_never_mutates_the_board() {
    let b = board("X...O..X.");
    let before = b;
    let mut rng = StdRng::seed_from_u64(31);
    for difficulty in Difficulty::ALL {
        MovePolicy::new(difficulty)
            .choose_move(&b, Sides::for_player(Player::O), &mut rng)
            .unwrap();
    }
    assert_eq!(b, before);
}

#[test]
fn difficulty_parses_case_insensitively() {
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert!("expert".parse::<Difficulty>().is_err());
}
