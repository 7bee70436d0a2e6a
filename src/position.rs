use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg},
    str::FromStr,
};

use crate::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePositionError {
    InvalidColumn(char),
    InvalidRow(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParsePositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePositionError::InvalidColumn(column) => write!(
                f,
                "found `{column}`, characters from `a` to `h` were expected instead"
            )?,
            ParsePositionError::InvalidRow(row) => write!(
                f,
                "found `{row}`, characters from `1` to `8` were expected instead"
            )?,
            ParsePositionError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParsePositionError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParsePositionError {}

/// A square on the board. Row 1 is white's back rank, column 1 is the
/// queenside file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}
impl Position {
    pub fn new(row: u8, column: u8) -> Self {
        debug_assert!((1..=8).contains(&row));
        debug_assert!((1..=8).contains(&column));
        Position { row, column }
    }
    pub fn new_checked(row: u8, column: u8) -> Option<Self> {
        if in_bounds(row, column) {
            Some(Position { row, column })
        } else {
            None
        }
    }
    pub fn from_chars(column: char, row: char) -> Result<Self, ParsePositionError> {
        let column = match column {
            'a'..='h' => column as u8 - b'a' + 1,
            _ => return Err(ParsePositionError::InvalidColumn(column)),
        };
        let row = match row {
            '1'..='8' => row as u8 - b'0',
            _ => return Err(ParsePositionError::InvalidRow(row)),
        };
        Ok(Position::new(row, column))
    }
    pub fn row(self) -> u8 {
        self.row
    }
    pub fn column(self) -> u8 {
        self.column
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.row.checked_add_signed(movement.row)?,
            self.column.checked_add_signed(movement.column)?,
        )
    }
    /// Walks away from `self` in `direction`, excluding `self` and stopping at
    /// the edge of the board.
    pub fn line(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..).map_while(move |distance| self.move_by(direction * distance))
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8).flat_map(|row| (1..=8).map(move |column| Position::new(row, column)))
    }
    pub fn is_light(self) -> bool {
        (self.row + self.column) % 2 == 1
    }
    pub(crate) fn index(self) -> usize {
        (self.row - 1) as usize * 8 + (self.column - 1) as usize
    }
}
pub fn in_bounds(row: u8, column: u8) -> bool {
    (1..=8).contains(&row) && (1..=8).contains(&column)
}
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let column = (self.column - 1 + b'a') as char;
        write!(f, "{column}{}", self.row)?;
        Ok(())
    }
}
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(column) = chars.next() else {
            return Err(ParsePositionError::NotEnoughCharacter(0));
        };
        let Some(row) = chars.next() else {
            return Err(ParsePositionError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParsePositionError::Unexpected(c));
        }
        Position::from_chars(column, row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub column: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { row: 0, column: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { row: -1, column: -2 },
        Vector { row: 1, column: -2 },
        Vector { row: -1, column: 2 },
        Vector { row: 1, column: 2 },
        Vector { row: -2, column: -1 },
        Vector { row: 2, column: -1 },
        Vector { row: -2, column: 1 },
        Vector { row: 2, column: 1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { row: -1, column: -1 },
        Vector { row: 0, column: -1 },
        Vector { row: 1, column: -1 },
        Vector { row: -1, column: 0 },
        Vector { row: 1, column: 0 },
        Vector { row: -1, column: 1 },
        Vector { row: 0, column: 1 },
        Vector { row: 1, column: 1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { row: 0, column: 1 },
        Vector { row: 0, column: -1 },
        Vector { row: 1, column: 0 },
        Vector { row: -1, column: 0 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { row: 1, column: 1 },
        Vector { row: 1, column: -1 },
        Vector { row: -1, column: 1 },
        Vector { row: -1, column: -1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_single_move(side: Side) -> Self {
        Vector {
            row: pawn_direction(side),
            column: 0,
        }
    }
    pub fn pawn_attacks(side: Side) -> [Self; 2] {
        [-1, 1].map(|column| Vector {
            row: pawn_direction(side),
            column,
        })
    }
}
pub fn pawn_direction(side: Side) -> i8 {
    match side {
        Side::White => 1,
        Side::Black => -1,
    }
}
pub fn home_rank(side: Side) -> u8 {
    match side {
        Side::White => 1,
        Side::Black => 8,
    }
}
pub fn pawn_home_rank(side: Side) -> u8 {
    match side {
        Side::White => 2,
        Side::Black => 7,
    }
}
pub fn pawn_promotion_rank(side: Side) -> u8 {
    match side {
        Side::White => 8,
        Side::Black => 1,
    }
}
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            row: -self.row,
            column: -self.column,
        }
    }
}
impl Add<Self> for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Vector {
            row: self.row + rhs.row,
            column: self.column + rhs.column,
        }
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            row: self.row * rhs,
            column: self.column * rhs,
        }
    }
}
