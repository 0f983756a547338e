//! Tests for board evaluation and snapshot production.

use tictactoe_replay::{
    Board, LINES, MoveError, Player, Position, Verdict, evaluate, is_full, next_snapshot,
};

fn board_from(marks: &str) -> Board {
    // 9 characters, row-major: 'X', 'O' or '.'
    marks
        .chars()
        .zip(Position::ALL)
        .fold(Board::new(), |board, (c, pos)| match c {
            'X' => board.with_mark(pos, Player::X),
            'O' => board.with_mark(pos, Player::O),
            _ => board,
        })
}

#[test]
fn test_every_line_for_every_player() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let board = line
                .positions()
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, player));
            assert_eq!(evaluate(&board), Verdict::Winner { player, line });
        }
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    for marks in ["XOXXOOOXX", "XOXOXXOXO", "OXOXXOXOX"] {
        let board = board_from(marks);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Verdict::Draw, "board {}", marks);
    }
}

#[test]
fn test_partial_boards_without_line_are_ongoing() {
    for marks in [".........", "X........", "XO.XO.OX.", "XOXOXO..."] {
        assert_eq!(evaluate(&board_from(marks)), Verdict::Ongoing, "board {}", marks);
    }
}

#[test]
fn test_evaluate_is_pure() {
    let board = board_from("XX.OO....");
    let copy = board;
    assert_eq!(evaluate(&board), evaluate(&board));
    assert_eq!(board, copy);
}

#[test]
fn test_next_snapshot_contract() {
    let board = board_from("X...O....");
    let next = next_snapshot(&board, Position::BottomRight, Player::X).unwrap();
    assert_eq!(board.changed_positions(&next), vec![Position::BottomRight]);

    assert_eq!(
        next_snapshot(&board, Position::Center, Player::X),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(
        next_snapshot(&board_from("XXXOO...."), Position::BottomLeft, Player::O),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = board_from("X...O....");
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
