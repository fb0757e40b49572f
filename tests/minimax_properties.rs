//! Properties of the minimax searcher

mod common;

use common::{all_boards, board};
use oxo::{
    ai::{Sides, WIN_SCORE, best_move, find_best_move, minimax, score_moves},
    tictactoe::{Board, Cell, GameOutcome, Player, outcome, rules::validate},
};

#[test]
fn takes_immediate_win_for_either_side() {
    let result = best_move(&board("XX.OO...."), Sides::for_player(Player::X)).unwrap();
    assert_eq!(result.position, 2);
    assert_eq!(result.score, WIN_SCORE);

    let result = best_move(&board("XX.OO...."), Sides::for_player(Player::O)).unwrap();
    assert_eq!(result.position, 5);
}

#[test]
fn blocks_opponent_threat() {
    // O threatens the 2-4-6 diagonal
    let result = best_move(&board("X.O.O...X"), Sides::for_player(Player::X)).unwrap();
    assert_eq!(result.position, 6);
}

#[test]
fn prefers_quicker_win() {
    // Completing column 0 now beats any slower win
    let result = best_move(&board("XO.XO...."), Sides::for_player(Player::X)).unwrap();
    assert_eq!(result.position, 6);
    assert_eq!(result.score, WIN_SCORE);

    // With O to move the same board is won by completing column 1
    let result = best_move(&board("XO.XO...."), Sides::for_player(Player::O)).unwrap();
    assert_eq!(result.position, 7);
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn intermediate_positions_are_restored() {
    let sides = Sides::for_player(Player::O);
    let mut b = board("X........");
    let snapshot = b;
    let mut trial = b.speculate(4, Player::O).unwrap();
    minimax(&mut trial, 1, false, sides);
    assert_eq!(trial.get(4), Some(Cell::O));
    assert_eq!(trial.empty_positions().len(), 7);
    drop(trial);
    assert_eq!(b, snapshot);
}

#[test]
fn full_board_has_no_move() {
    let mut b = board("XOXXOOOXX");
    assert!(find_best_move(&mut b, Sides::for_player(Player::X)).is_none());
}

#[test]
fn empty_board_opening_is_a_draw_at_cell_zero() {
    let result = best_move(&Board::new(), Sides::for_player(Player::X)).unwrap();
    assert_eq!(result.position, 0);
    assert_eq!(result.score, 0);
}

#[test]
fn search_restores_every_reachable_board() {
    for b in all_boards()
        .filter(|b| validate(b).is_ok() && outcome(b).is_none())
        .step_by(7)
    {
        let mut scratch = b;
        let count = b.count_pieces();
        let mover = if count.x > count.o { Player::O } else { Player::X };
        let result = find_best_move(&mut scratch, Sides::for_player(mover)).unwrap();
        assert_eq!(scratch, b);
        assert!(b.is_empty(result.position));
    }
}

#[test]
fn best_move_score_is_the_maximum() {
    let mut b = board("X...O....");
    let sides = Sides::for_player(Player::X);
    let scores = score_moves(&mut b, sides);
    let top = scores.iter().map(|r| r.score).max().unwrap();
    let best = find_best_move(&mut b, sides).unwrap();
    assert_eq!(best.score, top);
    let first_top = scores.iter().find(|r| r.score == top).unwrap();
    assert_eq!(best.position, first_top.position);
}

/// Play every possible line for `opponent` while `computer` answers with
/// the minimax move, returning the number of games the computer lost.
fn count_losses(b: &mut Board, to_move: Player, computer: Player) -> usize {
    match outcome(b) {
        Some(GameOutcome::Win(winner)) => return usize::from(winner != computer),
        Some(GameOutcome::Draw) => return 0,
        None => {}
    }

    if to_move == computer {
        let position = best_move(b, Sides::for_player(computer)).unwrap().position;
        let mut next = *b;
        next.place(position, computer).unwrap();
        count_losses(&mut next, to_move.opponent(), computer)
    } else {
        b.empty_positions()
            .into_iter()
            .map(|position| {
                let mut next = *b;
                next.place(position, to_move).unwrap();
                count_losses(&mut next, to_move.opponent(), computer)
            })
            .sum()
    }
}

#[test]
fn minimax_never_loses_as_second_player() {
    assert_eq!(count_losses(&mut Board::new(), Player::X, Player::O), 0);
}

#[test]
fn minimax_never_loses_as_first_player() {
    assert_eq!(count_losses(&mut Board::new(), Player::X, Player::X), 0);
}

#[test]
fn minimax_never_loses_when_o_opens() {
    assert_eq!(count_losses(&mut Board::new(), Player::O, Player::X), 0);
}
