pub mod board;
pub mod cli;
pub mod engine;

pub use board::{Board, Cell, Color, Move, Square};
pub use engine::Game;
