use std::fmt::{self, Display, Formatter};

use crate::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndState {
    Win(Side),
    Draw,
}
impl Display for EndState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EndState::Win(side) => write!(f, "{side} wins")?,
            EndState::Draw => write!(f, "draw")?,
        }
        Ok(())
    }
}
