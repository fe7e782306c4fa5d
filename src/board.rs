use anyhow::{anyhow, Result};
use derive_more::{Display, Error};

use std::fmt;
use std::str::FromStr;

use crate::{CELLS, SIZE};

/// One of the two players, X always moves first
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A cell to be marked, addressed by zero-indexed row and column
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[display("({row}, {column})")]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Converts a one-indexed, row-major cell number (1 is top-left, 9 is bottom-right)
    pub fn from_cell_number(number: usize) -> Option<Self> {
        match number {
            1..=CELLS => Some(Self::from_index(number - 1)),
            _ => None,
        }
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    pub fn in_range(&self) -> bool {
        self.row < SIZE && self.column < SIZE
    }

    /// Row-major index of the cell, only meaningful for in-range moves
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }

    /// One-indexed cell number, the inverse of [`Move::from_cell_number`]
    pub fn cell_number(&self) -> usize {
        self.index() + 1
    }
}

/// Reasons a move cannot be applied to a board
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
pub enum InvalidMoveError {
    #[display("Invalid move {at}, cell is off the board")]
    OutOfRange { at: Move },
    #[display("Invalid move {at}, cell is already taken")]
    Occupied { at: Move },
    #[display("Invalid move {at}, game is over")]
    GameOver { at: Move },
}

/// A 3x3 board, stored row-major
///
/// `Board` is a plain value: playing a move returns a new board and
/// leaves the original untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; CELLS],
}

/// Returns the starting board with every cell empty
pub fn initial_board() -> Board {
    Board::new()
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Plays a string of one-indexed cell numbers (see [`Move::from_cell_number`])
    /// from the empty board, alternating players starting with X
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        for cell_char in moves.as_ref().chars() {
            let mv = cell_char
                .to_digit(10)
                .and_then(|number| Move::from_cell_number(number as usize))
                .ok_or_else(|| anyhow!("could not parse '{}' as a valid move", cell_char))?;
            board = board.apply_move(mv)?;
        }
        Ok(board)
    }

    /// Returns a new board with `mv` marked for the player to move
    pub fn apply_move(&self, mv: Move) -> Result<Self, InvalidMoveError> {
        if !mv.in_range() {
            return Err(InvalidMoveError::OutOfRange { at: mv });
        }
        if !self.cells[mv.index()].is_empty() {
            return Err(InvalidMoveError::Occupied { at: mv });
        }
        // a decided game still has empty cells, but none of them are legal
        if self.is_terminal() {
            return Err(InvalidMoveError::GameOver { at: mv });
        }

        let mut next = *self;
        next.cells[mv.index()] = self.current_player().into();
        Ok(next)
    }

    /// The content of a cell, or `None` for an out-of-range move
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        if mv.in_range() {
            Some(self.cells[mv.index()])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Number of marks placed by `player`
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    /// Reads nine cells row-major: `X`, `O`, and `.`, `_` or `-` for empty.
    /// `/` and whitespace may be used to separate rows.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELLS];
        let mut filled = 0;

        for cell_char in s.chars() {
            let cell = match cell_char {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(anyhow!("could not parse '{}' as a cell", c)),
            };
            if filled == CELLS {
                return Err(anyhow!("Invalid board, more than {} cells given", CELLS));
            }
            cells[filled] = cell;
            filled += 1;
        }
        if filled != CELLS {
            return Err(anyhow!(
                "Invalid board, expected {} cells but found {}",
                CELLS,
                filled
            ));
        }

        let board = Self { cells };
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        if x != o && x != o + 1 {
            return Err(anyhow!(
                "Invalid board, X has {} marks and O has {} but X moves first",
                x,
                o
            ));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
