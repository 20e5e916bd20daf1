//! Game rules for freestyle Gomoku
//!
//! Five or more stones in an unbroken line wins. There are no captures
//! and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{
    axis_count, find_winning_line, has_five_at_pos, winning_axis, Axis, AxisKind, WinningLine,
    AXES, WIN_LENGTH,
};
