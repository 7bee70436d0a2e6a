//! Text form of a [`Game`]: the piece placement field of FEN followed by the
//! side to move, e.g. `rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b`.
//! Castling, en passant and move clocks are neither written nor accepted.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    iter::Peekable,
    str::FromStr,
};

use crate::{
    board::Board,
    game::Game,
    piece::{InvalidFenPiece, Piece},
    position::Position,
    side::{ParseSideError, Side},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fen(pub Game);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseFenError {
    NotEnoughSquaresOnRow,
    ExceedingSquaresOnRow,
    UnexpectedChar(char),
    UnexpectedEol,
    InvalidFenPiece(InvalidFenPiece),
    InvalidSide(ParseSideError),
}
impl From<InvalidFenPiece> for ParseFenError {
    fn from(value: InvalidFenPiece) -> Self {
        ParseFenError::InvalidFenPiece(value)
    }
}
impl From<ParseSideError> for ParseFenError {
    fn from(value: ParseSideError) -> Self {
        ParseFenError::InvalidSide(value)
    }
}
impl Display for ParseFenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseFenError::NotEnoughSquaresOnRow => write!(f, "not enough squares on a row")?,
            ParseFenError::ExceedingSquaresOnRow => write!(f, "too many squares on a row")?,
            ParseFenError::UnexpectedChar(c) => write!(f, "unexpected `{c}`")?,
            ParseFenError::UnexpectedEol => write!(f, "unexpected end of input")?,
            ParseFenError::InvalidFenPiece(err) => write!(f, "{err}")?,
            ParseFenError::InvalidSide(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseFenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseFenError::InvalidFenPiece(err) => Some(err),
            ParseFenError::InvalidSide(err) => Some(err),
            _ => None,
        }
    }
}
impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (placement, side) = s.split_once(' ').ok_or(ParseFenError::UnexpectedEol)?;
        let mut board = Board::empty();
        let mut rows = placement.split('/');
        for row in (1..=8).rev() {
            let squares = rows.next().ok_or(ParseFenError::UnexpectedEol)?;
            let mut column: u8 = 0;
            for c in squares.chars() {
                if matches!(c, '1'..='8') {
                    column += c as u8 - b'0';
                } else {
                    column += 1;
                    if column <= 8 {
                        board[Position::new(row, column)] = Some(Piece::from_fen(c)?);
                    }
                }
                if column > 8 {
                    return Err(ParseFenError::ExceedingSquaresOnRow);
                }
            }
            if column < 8 {
                return Err(ParseFenError::NotEnoughSquaresOnRow);
            }
        }
        if rows.next().is_some() {
            return Err(ParseFenError::UnexpectedChar('/'));
        }
        let side: Side = side.parse()?;
        Ok(Fen(Game::from_parts(board, side)))
    }
}
impl Display for Fen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.0.board();
        for row in (1..=8).rev() {
            let cells = (1..=8).map(|column| board[Position::new(row, column)]);
            for cell in CellIter(cells.peekable()) {
                write!(f, "{cell}")?;
            }
            if row != 1 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.0.team_turn().lowercase())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Cell {
    Piece(Piece),
    Space(u8),
}
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Piece(piece) => write!(f, "{}", piece.fen())?,
            Cell::Space(space) => write!(f, "{space}")?,
        }
        Ok(())
    }
}
struct CellIter<T>(Peekable<T>)
where
    T: Iterator;

impl<T> Iterator for CellIter<T>
where
    T: Iterator<Item = Option<Piece>>,
{
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|piece| match piece {
            Some(piece) => Cell::Piece(piece),
            None => {
                let mut count = 1;
                while self.0.peek().is_some_and(Option::is_none) {
                    self.0.next();
                    count += 1;
                }
                Cell::Space(count)
            }
        })
    }
}
