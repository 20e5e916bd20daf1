//! Game state: the single owner of the grid and turn order
//!
//! Every mutation goes through [`GameState::place_move`] or
//! [`GameState::reset`]. A rejected move leaves the state untouched.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Pos, Stone};
use crate::error::{GameError, MoveError};
use crate::rules::{find_winning_line, WinningLine};

/// Outcome of a single `place_move` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Nothing changed
    Rejected(MoveError),
    /// Stone placed, the given player moves next
    Continue(Player),
    /// Stone placed and completed a line of five
    Win(Player),
    /// Stone placed on the last empty cell without a winner
    Draw,
}

impl MoveResult {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }
}

/// High-level game status for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress { to_move: Player },
    Won(Player),
    Drawn,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress { to_move } => write!(f, "Current turn: {to_move}"),
            Status::Won(winner) => write!(f, "Game over! {winner} wins!"),
            Status::Drawn => write!(f, "Game over! Draw."),
        }
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    winning_line: Option<WinningLine>,
    last_move: Option<Pos>,
    move_count: u32,
}

impl GameState {
    /// Fresh game on a `size` x `size` board, Black to move
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            current_player: Player::Black,
            game_over: false,
            winner: None,
            winning_line: None,
            last_move: None,
            move_count: 0,
        }
    }

    /// Attempt to place the current player's stone at `(row, col)`
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_move(&mut self, row: i32, col: i32) -> MoveResult {
        let pos = match self.validate(row, col) {
            Ok(pos) => pos,
            Err(err) => {
                debug!(%err, "move rejected");
                return MoveResult::Rejected(err);
            }
        };

        let mover = self.current_player;
        self.board.place_stone(pos, mover.stone());
        self.last_move = Some(pos);
        self.move_count += 1;

        if let Some(line) = find_winning_line(&self.board, pos, mover) {
            info!(winner = %mover, axis = ?line.axis, moves = self.move_count, "five in a row");
            self.game_over = true;
            self.winner = Some(mover);
            self.winning_line = Some(line);
            return MoveResult::Win(mover);
        }

        if self.board.is_full() {
            info!(moves = self.move_count, "board full, game drawn");
            self.game_over = true;
            return MoveResult::Draw;
        }

        self.current_player = mover.opponent();
        debug!(%pos, next = %self.current_player, "move accepted");
        MoveResult::Continue(self.current_player)
    }

    /// Checks run in order: game over, bounds, occupancy
    fn validate(&self, row: i32, col: i32) -> Result<Pos, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let pos = Pos::checked(row, col, self.board.size()).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(pos)
    }

    /// Back to an empty board with Black to move. The size is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Black;
        self.game_over = false;
        self.winner = None;
        self.winning_line = None;
        self.last_move = None;
        self.move_count = 0;
        info!(size = self.board.size(), "game reset");
    }

    /// Stone at `(row, col)`
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Stone, GameError> {
        let size = self.board.size();
        Pos::checked(row, col, size)
            .map(|pos| self.board.get(pos))
            .ok_or(GameError::OutOfBounds { row, col, size })
    }

    /// Whether a stone could go at `(row, col)` right now, ignoring game over.
    /// Out-of-range coordinates are never empty.
    pub fn is_empty_at(&self, row: i32, col: i32) -> bool {
        matches!(self.cell_at(row, col), Ok(Stone::Empty))
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn status(&self) -> Status {
        match (self.game_over, self.winner) {
            (false, _) => Status::InProgress {
                to_move: self.current_player,
            },
            (true, Some(winner)) => Status::Won(winner),
            (true, None) => Status::Drawn,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}
