use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Not,
    str::FromStr,
};

use crate::error::InvalidByte;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseSideError;
impl Display for ParseSideError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "provided string was not `w`, `b`, `W`, `B`, `white`, or `black`"
        )?;
        Ok(())
    }
}
impl Error for ParseSideError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}
impl Side {
    pub const ALL: [Self; 2] = [Side::White, Side::Black];

    pub fn lowercase(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}
impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white")?,
            Side::Black => write!(f, "black")?,
        }
        Ok(())
    }
}
impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let side = match s {
            "w" | "W" | "white" => Side::White,
            "b" | "B" | "black" => Side::Black,
            _ => return Err(ParseSideError),
        };
        Ok(side)
    }
}
impl TryFrom<u8> for Side {
    type Error = InvalidByte;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let side = match value {
            0 => Side::Black,
            1 => Side::White,
            2.. => return Err(InvalidByte),
        };
        Ok(side)
    }
}
impl From<Side> for u8 {
    fn from(value: Side) -> Self {
        match value {
            Side::White => 1,
            Side::Black => 0,
        }
    }
}
impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}
