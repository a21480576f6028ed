//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the game logic and the outside
//! world. The traits are owned by the domain and implemented by adapters.

pub mod move_source;
pub mod terminal;

pub use move_source::MoveSource;
pub use terminal::Terminal;
