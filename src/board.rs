use std::{
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
};

use crate::{
    board_display::BoardDisplay,
    movement::Move,
    piece::{Piece, PieceKind},
    position::{Position, home_rank, pawn_home_rank},
    side::Side,
};

/// Placement of pieces over all 64 squares. Cloning yields an independent
/// copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}
impl Board {
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        board.reset_board();
        board
    }
    pub fn reset_board(&mut self) {
        self.cells = [None; 64];
        for side in Side::ALL {
            for (column, kind) in (1..).zip(PieceKind::STARTING_CONFIGURATION) {
                self[Position::new(home_rank(side), column)] = Some(Piece::new(side, kind));
                self[Position::new(pawn_home_rank(side), column)] =
                    Some(Piece::new(side, PieceKind::Pawn));
            }
        }
    }
    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        self[position]
    }
    pub fn add_piece(&mut self, position: Position, piece: Option<Piece>) {
        self[position] = piece;
    }
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .filter_map(move |position| self[position].map(|piece| (position, piece)))
    }
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }
    pub fn king_of(&self, side: Side) -> Option<Position> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
    /// Lifts the piece on `movement.from` and drops it, or its promoted
    /// replacement, on `movement.to`. Performs no legality checks.
    pub fn move_piece(&mut self, movement: &Move) {
        let Some(piece) = self[movement.from].take() else {
            return;
        };
        self[movement.to] = Some(match movement.promotion {
            Some(kind) => Piece::new(piece.side, kind),
            None => piece,
        });
    }
    pub fn clone_and_move(&self, movement: &Move) -> Self {
        let mut board = self.clone();
        board.move_piece(movement);
        board
    }
    pub(crate) fn cells(&self) -> &[Option<Piece>; 64] {
        &self.cells
    }
    pub(crate) fn from_cells(cells: [Option<Piece>; 64]) -> Self {
        Board { cells }
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}
impl Index<Position> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[index.index()]
    }
}
impl IndexMut<Position> for Board {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.cells[index.index()]
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardDisplay::new(self))?;
        Ok(())
    }
}
