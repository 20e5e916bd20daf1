//! GUI module for the Gomoku game
//!
//! Draws the board and forwards clicks to [`crate::GameState`]. It holds no
//! game rules of its own.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::BoardView;
