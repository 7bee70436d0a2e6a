use std::fmt::{self, Display, Formatter};

use crate::{
    board::Board,
    end_state::EndState,
    error::{CorruptState, InvalidByte, MoveError},
    movegen::{MoveSet, moves_of},
    movement::Move,
    position::Position,
    side::Side,
};

/// A board together with the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Side,
}
impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::starting_position(),
            turn: Side::White,
        }
    }
    pub fn from_parts(board: Board, turn: Side) -> Self {
        Game { board, turn }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn team_turn(&self) -> Side {
        self.turn
    }
    /// Replaces the board without any rule checks.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }
    /// Sets the side to move without any rule checks.
    pub fn set_team_turn(&mut self, turn: Side) {
        self.turn = turn;
    }
    /// Legal moves of the piece on `origin`, or `None` if the square is empty.
    ///
    /// Whose turn it is does not matter here; moves of either side can be
    /// listed at any time.
    pub fn valid_moves(&self, origin: Position) -> Result<Option<MoveSet>, CorruptState> {
        let Some(piece) = self.board[origin] else {
            return Ok(None);
        };
        let mut scratch = self.board.clone();
        let mut valid = MoveSet::default();
        for movement in moves_of(&self.board, origin, piece) {
            let captured = scratch[movement.to];
            scratch.move_piece(&movement);
            let check = is_in_check(&scratch, piece.side);
            scratch[movement.to] = captured;
            scratch[movement.from] = Some(piece);
            if !check? {
                valid.insert(movement);
            }
        }
        tracing::trace!(%origin, count = valid.len(), "computed valid moves");
        Ok(Some(valid))
    }
    /// Legal moves of every piece of `side`.
    pub fn all_valid_moves(&self, side: Side) -> Result<MoveSet, CorruptState> {
        let mut moves = MoveSet::default();
        for (position, _) in self.board.pieces_of(side) {
            moves.extend(self.valid_moves(position)?.into_iter().flatten());
        }
        Ok(moves)
    }
    fn has_valid_moves(&self, side: Side) -> Result<bool, CorruptState> {
        for (position, _) in self.board.pieces_of(side) {
            if self
                .valid_moves(position)?
                .is_some_and(|moves| !moves.is_empty())
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
    pub fn make_move(&mut self, movement: &Move) -> Result<(), MoveError> {
        let piece = self.board[movement.from].ok_or(MoveError::NoPieceAtOrigin(movement.from))?;
        if piece.side != self.turn {
            return Err(MoveError::WrongTurn {
                piece,
                turn: self.turn,
            });
        }
        let valid = self.valid_moves(movement.from)?.unwrap_or_default();
        if !valid.contains(movement) {
            tracing::debug!(%movement, "rejected illegal move");
            return Err(MoveError::IllegalMove(*movement));
        }
        self.board.move_piece(movement);
        self.turn = !self.turn;
        tracing::debug!(%movement, turn = %self.turn, "move applied");
        Ok(())
    }
    /// Whether any piece of the other side attacks the king of `side`.
    /// Attacks are taken from pseudo-moves, so a pinned piece still gives
    /// check.
    pub fn is_in_check(&self, side: Side) -> Result<bool, CorruptState> {
        is_in_check(&self.board, side).inspect_err(|err| tracing::warn!(%err, "corrupt state"))
    }
    pub fn is_in_checkmate(&self, side: Side) -> Result<bool, CorruptState> {
        Ok(self.is_in_check(side)? && !self.has_valid_moves(side)?)
    }
    pub fn is_in_stalemate(&self, side: Side) -> Result<bool, CorruptState> {
        Ok(!self.is_in_check(side)? && !self.has_valid_moves(side)?)
    }
    /// Outcome for the side to move, if the game is over.
    pub fn end_state(&self) -> Result<Option<EndState>, CorruptState> {
        if self.has_valid_moves(self.turn)? {
            Ok(None)
        } else if self.is_in_check(self.turn)? {
            Ok(Some(EndState::Win(!self.turn)))
        } else {
            Ok(Some(EndState::Draw))
        }
    }
    /// One byte for the side to move followed by one byte per square, rank 1
    /// first, with 0 for an empty square.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut bytes = [0; 65];
        bytes[0] = self.turn.into();
        for (byte, cell) in bytes[1..].iter_mut().zip(self.board.cells()) {
            *byte = cell.map_or(0, Into::into);
        }
        bytes
    }
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidByte> {
        let [turn, cells @ ..] = bytes else {
            return Err(InvalidByte);
        };
        if cells.len() != 64 {
            return Err(InvalidByte);
        }
        let mut board = [None; 64];
        for (cell, byte) in board.iter_mut().zip(cells) {
            *cell = match byte {
                0 => None,
                byte => Some((*byte).try_into()?),
            };
        }
        Ok(Game {
            board: Board::from_cells(board),
            turn: (*turn).try_into()?,
        })
    }
}
fn is_in_check(board: &Board, side: Side) -> Result<bool, CorruptState> {
    let king = board.king_of(side).ok_or(CorruptState { side })?;
    Ok(board.pieces_of(!side).any(|(position, piece)| {
        moves_of(board, position, piece).any(|movement| movement.to == king)
    }))
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "{} to move", self.turn)?;
        Ok(())
    }
}
