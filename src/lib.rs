//! Five-in-a-row (freestyle Gomoku) game engine
//!
//! Two players alternate placing stones on a square grid. The first to
//! form an unbroken horizontal, vertical or diagonal line of five or more
//! wins. A full board without such a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Grid representation with one bitboard per color
//! - [`rules`]: Axis table and local five-in-a-row detection
//! - [`game`]: [`GameState`], the sole owner of the grid and turn order
//! - [`config`]: TOML configuration
//! - [`error`]: Error types
//! - [`ui`]: egui front end that renders a [`GameState`] and forwards clicks
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, MoveResult, Player};
//!
//! let mut game = GameState::new(15).unwrap();
//! for col in 7..11 {
//!     game.place_move(7, col); // Black
//!     game.place_move(0, col); // White
//! }
//! assert_eq!(game.place_move(7, 11), MoveResult::Win(Player::Black));
//! assert!(game.is_over());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::AppConfig;
pub use error::{ConfigError, GameError, MoveError};
pub use game::{GameState, MoveResult, Status};
pub use rules::{WinningLine, WIN_LENGTH};
