//! Adapters implementing domain ports.
//!
//! This module contains the concrete implementations of the traits defined in
//! the ports module: a console terminal over any reader/writer pair, a human
//! move source that reads from it, and the minimax move source.

pub mod console;
pub mod human;
pub mod minimax_player;

pub use console::Console;
pub use human::HumanPlayer;
pub use minimax_player::MinimaxPlayer;
