use std::fmt::{self, Display, Formatter};

use crate::{board::Board, piece::Piece, position::Position, side::Side};

const LIGHT: &str = "\x1b[30;107m";
const DARK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

/// Renders a board with figurines on colored squares.
pub struct BoardDisplay<'a> {
    pub board: &'a Board,
    pub view: Side,
    pub highlighted: &'a [Position],
}
impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardDisplay {
            board,
            view: Side::White,
            highlighted: &[],
        }
    }
}
impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 1..=8 {
            let row = match self.view {
                Side::White => 9 - row,
                Side::Black => row,
            };
            for column in 1..=8 {
                let column = match self.view {
                    Side::White => column,
                    Side::Black => 9 - column,
                };
                let position = Position::new(row, column);
                let color = if self.highlighted.contains(&position) {
                    HIGHLIGHTED
                } else if position.is_light() {
                    LIGHT
                } else {
                    DARK
                };
                let figurine = self.board[position].map_or(' ', Piece::figurine);
                write!(f, "{color}{figurine} {RESET}")?;
            }
            writeln!(f, "{row}")?;
        }
        match self.view {
            Side::White => writeln!(f, "a b c d e f g h")?,
            Side::Black => writeln!(f, "h g f e d c b a")?,
        }
        Ok(())
    }
}
