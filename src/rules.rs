//! Turn order, legal moves and game outcomes, all derived from a [`Board`]

use crate::{board::*, CELLS, SIZE};

/// The eight winning lines as row-major cell indices:
/// rows top to bottom, columns left to right, then both diagonals
pub const LINES: [[usize; SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// The legal moves of a position, in row-major order
#[derive(Copy, Clone, Debug)]
pub struct MoveList {
    size: usize,
    next: usize,
    moves: [Move; CELLS],
}

impl MoveList {
    fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            moves: [Move::new(0, 0); CELLS],
        }
    }

    fn push(&mut self, new_move: Move) {
        self.moves[self.size] = new_move;
        self.size += 1;
    }

    /// The moves not yet yielded by iteration
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[self.next..self.size]
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl Iterator for MoveList {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.size {
            return None;
        }
        self.next += 1;
        Some(self.moves[self.next - 1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveList {}

impl Board {
    /// The player whose turn it is, assuming the game is not over
    ///
    /// X moves whenever both players have placed the same number of marks.
    /// On a terminal board the answer follows the same counting rule and
    /// carries no meaning, check [`Board::is_terminal`] first or use
    /// [`Board::to_move`].
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// The player whose turn it is, or `None` once the game is over
    pub fn to_move(&self) -> Option<Player> {
        if self.is_terminal() {
            None
        } else {
            Some(self.current_player())
        }
    }

    /// Every empty cell, or no moves at all if the game is over
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.winner().is_some() {
            return moves;
        }
        for (index, cell) in self.cells().iter().enumerate() {
            if cell.is_empty() {
                moves.push(Move::from_index(index));
            }
        }
        moves
    }

    /// The owner of the first completed line, if any
    pub fn winner(&self) -> Option<Player> {
        let cells = self.cells();
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = cells[a].player()?;
            if cells[b] == cells[a] && cells[c] == cells[a] {
                Some(owner)
            } else {
                None
            }
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise
    ///
    /// Only meaningful on a terminal board: an unfinished game also scores 0.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    pub fn state(&self) -> GameState {
        match self.winner() {
            Some(player) => GameState::Won(player),
            None if self.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }
}
