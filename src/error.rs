use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{movement::Move, piece::Piece, position::Position, side::Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidByte;

impl Display for InvalidByte {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid byte")?;
        Ok(())
    }
}
impl Error for InvalidByte {}

/// The board has no king for `side`, so check cannot be decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorruptState {
    pub side: Side,
}
impl Display for CorruptState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "no {} king found on the board", self.side)?;
        Ok(())
    }
}
impl Error for CorruptState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    NoPieceAtOrigin(Position),
    WrongTurn { piece: Piece, turn: Side },
    IllegalMove(Move),
    CorruptState(CorruptState),
}
impl From<CorruptState> for MoveError {
    fn from(value: CorruptState) -> Self {
        MoveError::CorruptState(value)
    }
}
impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtOrigin(position) => write!(f, "no piece found on {position}")?,
            MoveError::WrongTurn { piece, turn } => {
                write!(f, "cannot move {piece}, it is {turn}'s turn")?;
            }
            MoveError::IllegalMove(movement) => write!(f, "{movement} is not a legal move")?,
            MoveError::CorruptState(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveError::CorruptState(err) => Some(err),
            _ => None,
        }
    }
}
