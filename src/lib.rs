//! A perfect agent for playing or analysing the game 'Tic-tac-toe'
//!
//! This agent searches the full game tree with minimax and alpha-beta
//! pruning to find the mathematically optimal move for any position.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{board::Board, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // X holds the top-left and top-centre cells, O the two on the left of the middle row
//! let mut solver = Solver::new(Board::from_moves("1425")?);
//! let (score, best_move) = solver.solve().ok_or("game is over")?;
//!
//! assert_eq!(score, 1);
//! assert_eq!((best_move.row, best_move.column), (0, 2));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod solver;


pub use board::{initial_board, Board, Cell, InvalidMoveError, Move, Player};
pub use rules::{GameState, MoveList};
pub use solver::{best_move, minimax_value, Solver};

/// The width and height of the game board in cells
pub const SIZE: usize = 3;

/// The number of cells on the game board
pub const CELLS: usize = SIZE * SIZE;

/// The number of cells in a row needed to win
pub const LINE_LENGTH: usize = 3;

// a winning line spans the whole board in every direction
const_assert_eq!(LINE_LENGTH, SIZE);
// cell numbers 1..=CELLS are entered as single digits
const_assert!(CELLS <= 9);
