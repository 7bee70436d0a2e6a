//! Chess rules over a standard 8×8 board: legal move generation, move
//! application, and check, checkmate and stalemate detection.
//!
//! Castling, en passant and the draw rules other than stalemate are not
//! modelled.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    reason = "every error type documents the conditions it reports"
)]
#![allow(clippy::must_use_candidate)]

pub mod board;
pub mod board_display;
pub mod end_state;
pub mod error;
pub mod fen;
#[cfg(test)]
mod fuzz;
pub mod game;
pub mod movegen;
pub mod movement;
pub mod piece;
pub mod position;
pub mod side;

pub use crate::{
    board::Board,
    end_state::EndState,
    error::{CorruptState, MoveError},
    fen::Fen,
    game::Game,
    movegen::{MoveSet, piece_moves},
    movement::Move,
    piece::{Piece, PieceKind},
    position::Position,
    side::Side,
};

/// Position from a square name such as `"e4"`.
#[cfg(test)]
#[macro_export]
macro_rules! position {
    ($square:literal) => {
        $square.parse::<$crate::position::Position>().unwrap()
    };
}
