//! An agent to solve the game of Tic-tac-toe

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::board::*;

/// Lower end of an unbounded search window
pub const NEG_INFINITY: i32 = i32::MIN;
/// Upper end of an unbounded search window
pub const INFINITY: i32 = i32::MAX;

/// An agent to solve Tic-tac-toe positions
///
/// # Notes
/// This agent runs a full minimax search with alpha-beta pruning down to the
/// end of the game, so the move it returns is optimal for the player to move
/// assuming both players play perfectly from then on.
///
/// # Position Scoring
/// Positions are scored from X's point of view: 1 if X can force a win,
/// -1 if O can, and 0 if best play leads to a draw. X maximises the score
/// and O minimises it.
#[derive(Clone, Debug)]
pub struct Solver {
    board: Board,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` for a position
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Value of `board` for the maximising player X, with O to reply
    /// inside the window `(alpha, beta)`
    pub fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> i32 {
        self.node_count += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut v = NEG_INFINITY;
        for mv in board.legal_moves() {
            if let Ok(child) = board.apply_move(mv) {
                v = v.max(self.min_value(&child, alpha, beta));
            }
            alpha = alpha.max(v);
            // O already has a better option elsewhere
            if alpha >= beta {
                break;
            }
        }
        v
    }

    /// Value of `board` for the minimising player O, with X to reply
    /// inside the window `(alpha, beta)`
    pub fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> i32 {
        self.node_count += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut v = INFINITY;
        for mv in board.legal_moves() {
            if let Ok(child) = board.apply_move(mv) {
                v = v.min(self.max_value(&child, alpha, beta));
            }
            beta = beta.min(v);
            // X already has a better option elsewhere
            if beta <= alpha {
                break;
            }
        }
        v
    }

    /// Searches one child of the root with the bound function of the player replying
    fn child_value(&mut self, player: Player, child: &Board) -> i32 {
        match player {
            Player::X => self.min_value(child, NEG_INFINITY, INFINITY),
            Player::O => self.max_value(child, NEG_INFINITY, INFINITY),
        }
    }

    /// Calculates the game value and best move of the current position
    ///
    /// Returns `None` if the game is already over. When several moves are
    /// equally good, the first one in row-major order is returned.
    #[instrument(level = "debug", skip(self), fields(moves_played = self.board.num_moves()))]
    pub fn solve(&mut self) -> Option<(i32, Move)> {
        let player = self.board.to_move()?;
        self.node_count += 1;

        let board = self.board;
        let mut best: Option<(i32, Move)> = None;
        for mv in board.legal_moves() {
            let child = match board.apply_move(mv) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let value = self.child_value(player, &child);
            trace!(%mv, value, "searched root move");

            if best.map_or(true, |(best_value, _)| improves(player, value, best_value)) {
                best = Some((value, mv));
            }
        }

        if let Some((value, mv)) = best {
            debug!(%player, value, %mv, nodes = self.node_count, "search complete");
        }
        best
    }

    /// Returns the optimal move for the player to move, or `None` if the game is over
    pub fn best_move(&mut self) -> Option<Move> {
        self.solve().map(|(_, mv)| mv)
    }

    /// As [`Solver::solve`], searching each root move on its own thread
    ///
    /// The move chosen is identical to the sequential search. Nodes searched
    /// by the worker solvers are added to this solver's `node_count`.
    #[instrument(level = "debug", skip(self), fields(moves_played = self.board.num_moves()))]
    pub fn solve_parallel(&mut self) -> Option<(i32, Move)> {
        let player = self.board.to_move()?;
        self.node_count += 1;

        let board = self.board;
        let children: Vec<(Move, Board)> = board
            .legal_moves()
            .filter_map(|mv| board.apply_move(mv).ok().map(|child| (mv, child)))
            .collect();

        // collect keeps row-major order so ties resolve the same way as `solve`
        let searched: Vec<(Move, i32, usize)> = children
            .par_iter()
            .map(|(mv, child)| {
                let mut worker = Solver::new(*child);
                let value = worker.child_value(player, child);
                (*mv, value, worker.node_count)
            })
            .collect();

        let mut best: Option<(i32, Move)> = None;
        for (mv, value, nodes) in searched {
            self.node_count += nodes;
            trace!(%mv, value, "searched root move");
            if best.map_or(true, |(best_value, _)| improves(player, value, best_value)) {
                best = Some((value, mv));
            }
        }

        if let Some((value, mv)) = best {
            debug!(%player, value, %mv, nodes = self.node_count, "parallel search complete");
        }
        best
    }
}

impl std::ops::Deref for Solver {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

// strict improvement only, so the earliest of equally good moves is kept
fn improves(player: Player, value: i32, best: i32) -> bool {
    match player {
        Player::X => value > best,
        Player::O => value < best,
    }
}

/// Returns the optimal move for the player to move, or `None` if the game is over
pub fn best_move(board: &Board) -> Option<Move> {
    Solver::new(*board).best_move()
}

/// Game value of `board` by plain minimax over the whole tree, without pruning
///
/// Visits every node, so it is only useful as a reference for the
/// alpha-beta search.
pub fn minimax_value(board: &Board) -> i32 {
    let player = match board.to_move() {
        Some(player) => player,
        None => return board.utility(),
    };

    let values = board
        .legal_moves()
        .filter_map(|mv| board.apply_move(mv).ok())
        .map(|child| minimax_value(&child));

    let value = match player {
        Player::X => values.max(),
        Player::O => values.min(),
    };
    // a non-terminal board always has a legal move
    value.unwrap_or_else(|| board.utility())
}
