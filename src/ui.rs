#![cfg(feature = "std")]

use crate::{board::Board, grid::Perspective};

/// Print the board as seen by `perspective`, with row and column labels.
pub fn print_board(board: &Board, perspective: Perspective) {
    let view = board.view(perspective).to_string();
    std::print!("  ");
    for c in 0..crate::config::BOARD_SIZE {
        std::print!(" {}", c);
    }
    std::println!();
    for (r, line) in view.lines().enumerate() {
        std::println!("{:2} {}", r, line);
    }
}

