//! Pseudo-move generation: every move a piece could make under its movement
//! rules, ignoring whether its own king is left in check.

use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    movement::Move,
    piece::{Piece, PieceKind},
    position::{Position, Vector, pawn_home_rank, pawn_promotion_rank},
};

pub type MoveSet = FxHashSet<Move>;

/// Pseudo-moves of the piece on `origin`. Empty when the square is empty or
/// the piece has nowhere to go.
pub fn piece_moves(board: &Board, origin: Position) -> MoveSet {
    match board[origin] {
        Some(piece) => moves_of(board, origin, piece).collect(),
        None => MoveSet::default(),
    }
}
pub(crate) fn moves_of(
    board: &Board,
    origin: Position,
    piece: Piece,
) -> Box<dyn Iterator<Item = Move> + '_> {
    match piece.kind {
        PieceKind::Pawn => Box::new(pawn_moves(board, origin, piece)),
        PieceKind::Knight => Box::new(step_moves(board, origin, piece, &Vector::KNIGHT_MOVES)),
        PieceKind::Bishop => Box::new(all_directional_moves(
            board,
            origin,
            piece,
            &Vector::BISHOP_DIRECTIONS,
        )),
        PieceKind::Rook => Box::new(all_directional_moves(
            board,
            origin,
            piece,
            &Vector::ROOK_DIRECTIONS,
        )),
        PieceKind::Queen => Box::new(all_directional_moves(
            board,
            origin,
            piece,
            &Vector::QUEEN_DIRECTIONS,
        )),
        PieceKind::King => Box::new(step_moves(board, origin, piece, &Vector::KING_MOVES)),
    }
}
fn can_land(board: &Board, piece: Piece, destination: Position) -> bool {
    board[destination].is_none_or(|occupant| occupant.side != piece.side)
}
fn step_moves<'a>(
    board: &'a Board,
    origin: Position,
    piece: Piece,
    moves: &'static [Vector],
) -> impl Iterator<Item = Move> + 'a {
    moves
        .iter()
        .copied()
        .filter_map(move |movement| origin.move_by(movement))
        .filter(move |destination| can_land(board, piece, *destination))
        .map(move |destination| Move::new(origin, destination))
}
fn directional_moves(
    board: &Board,
    origin: Position,
    piece: Piece,
    direction: Vector,
) -> impl Iterator<Item = Move> + '_ {
    let mut resume = true;
    origin
        .line(direction)
        .map_while(move |destination| {
            if !resume {
                return None;
            }
            match board[destination] {
                Some(occupant) => {
                    resume = false;
                    Some((occupant.side != piece.side).then_some(destination))
                }
                None => Some(Some(destination)),
            }
        })
        .flatten()
        .map(move |destination| Move::new(origin, destination))
}
fn all_directional_moves<'a>(
    board: &'a Board,
    origin: Position,
    piece: Piece,
    directions: &'static [Vector],
) -> impl Iterator<Item = Move> + 'a {
    directions
        .iter()
        .copied()
        .flat_map(move |direction| directional_moves(board, origin, piece, direction))
}
fn pawn_moves(board: &Board, origin: Position, piece: Piece) -> impl Iterator<Item = Move> + '_ {
    static PROMOTION_CHOICES: [Option<PieceKind>; 4] = [
        Some(PieceKind::Queen),
        Some(PieceKind::Rook),
        Some(PieceKind::Bishop),
        Some(PieceKind::Knight),
    ];
    static NON_PROMOTION_CHOICES: [Option<PieceKind>; 1] = [None];

    let forward_jumps = if origin.row() == pawn_home_rank(piece.side) {
        2
    } else {
        1
    };
    // a blocked single push also blocks the double push
    let pushes = origin
        .line(Vector::pawn_single_move(piece.side))
        .take(forward_jumps)
        .take_while(move |destination| board[*destination].is_none());
    let captures = Vector::pawn_attacks(piece.side)
        .into_iter()
        .filter_map(move |movement| origin.move_by(movement))
        .filter(move |destination| {
            board[*destination].is_some_and(|occupant| occupant.side != piece.side)
        });
    pushes.chain(captures).flat_map(move |destination| {
        let promotion_choices: &[_] = if destination.row() == pawn_promotion_rank(piece.side) {
            &PROMOTION_CHOICES
        } else {
            &NON_PROMOTION_CHOICES
        };
        promotion_choices.iter().map(move |promotion| Move {
            from: origin,
            to: destination,
            promotion: *promotion,
        })
    })
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        movegen::{MoveSet, piece_moves},
        movement::Move,
        piece::{Piece, PieceKind},
        position,
        position::Position,
        side::Side,
    };

    fn place(pieces: &[(&str, Side, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for (square, side, kind) in pieces {
            let position: Position = square.parse().unwrap();
            board.add_piece(position, Some(Piece::new(*side, *kind)));
        }
        board
    }
    fn destinations(moves: &MoveSet) -> Vec<String> {
        let mut destinations: Vec<_> = moves
            .iter()
            .map(|movement| movement.to.to_string())
            .collect();
        destinations.sort();
        destinations
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(piece_moves(&Board::starting_position(), position!("e4")).is_empty());
    }
    #[test]
    fn starting_knight() {
        let moves = piece_moves(&Board::starting_position(), position!("g1"));
        assert_eq!(destinations(&moves), ["f3", "h3"]);
    }
    #[test]
    fn starting_pieces_behind_pawns_are_stuck() {
        let board = Board::starting_position();
        for square in ["a1", "c1", "d1", "e1", "f1", "h8", "d8"] {
            assert!(piece_moves(&board, square.parse().unwrap()).is_empty());
        }
    }
    #[test]
    fn rook_stops_at_blockers() {
        let board = place(&[
            ("d4", Side::White, PieceKind::Rook),
            ("d6", Side::Black, PieceKind::Pawn),
            ("f4", Side::White, PieceKind::Knight),
        ]);
        let moves = piece_moves(&board, position!("d4"));
        assert_eq!(
            destinations(&moves),
            ["a4", "b4", "c4", "d1", "d2", "d3", "d5", "d6", "e4"]
        );
    }
    #[test]
    fn bishop_in_corner() {
        let board = place(&[("a1", Side::Black, PieceKind::Bishop)]);
        let moves = piece_moves(&board, position!("a1"));
        assert_eq!(
            destinations(&moves),
            ["b2", "c3", "d4", "e5", "f6", "g7", "h8"]
        );
    }
    #[test]
    fn queen_is_rook_and_bishop() {
        let pieces = [
            ("c2", Side::White, PieceKind::Pawn),
            ("e6", Side::Black, PieceKind::Knight),
            ("g2", Side::Black, PieceKind::Pawn),
        ];
        let mut queen = place(&pieces);
        queen.add_piece(position!("e4"), Some(Piece::new(Side::White, PieceKind::Queen)));
        let mut rook = place(&pieces);
        rook.add_piece(position!("e4"), Some(Piece::new(Side::White, PieceKind::Rook)));
        let mut bishop = place(&pieces);
        bishop.add_piece(position!("e4"), Some(Piece::new(Side::White, PieceKind::Bishop)));

        let queen_moves = piece_moves(&queen, position!("e4"));
        let union: MoveSet = piece_moves(&rook, position!("e4"))
            .union(&piece_moves(&bishop, position!("e4")))
            .copied()
            .collect();
        assert_eq!(queen_moves, union);
        assert_eq!(queen_moves.len(), 22);
    }
    #[test]
    fn knight_jumps_and_skips_own_pieces() {
        let board = place(&[
            ("b1", Side::White, PieceKind::Knight),
            ("d2", Side::White, PieceKind::Pawn),
            ("a3", Side::Black, PieceKind::Pawn),
            ("b2", Side::White, PieceKind::Pawn),
            ("c2", Side::White, PieceKind::Pawn),
        ]);
        let moves = piece_moves(&board, position!("b1"));
        assert_eq!(destinations(&moves), ["a3", "c3"]);
    }
    #[test]
    fn king_in_the_middle() {
        let board = place(&[
            ("e5", Side::Black, PieceKind::King),
            ("e6", Side::Black, PieceKind::Pawn),
            ("f4", Side::White, PieceKind::Pawn),
        ]);
        let moves = piece_moves(&board, position!("e5"));
        assert_eq!(
            destinations(&moves),
            ["d4", "d5", "d6", "e4", "f4", "f5", "f6"]
        );
    }
    #[test]
    fn pawn_pushes_from_home_rank() {
        let board = Board::starting_position();
        let moves = piece_moves(&board, position!("e7"));
        assert_eq!(destinations(&moves), ["e5", "e6"]);
        assert!(moves.iter().all(|movement| movement.promotion.is_none()));
    }
    #[test]
    fn pawn_single_push_off_home_rank() {
        let board = place(&[("c3", Side::White, PieceKind::Pawn)]);
        let moves = piece_moves(&board, position!("c3"));
        assert_eq!(destinations(&moves), ["c4"]);
    }
    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::starting_position();
        board.add_piece(position!("f3"), Some(Piece::new(Side::Black, PieceKind::Knight)));
        assert!(piece_moves(&board, position!("f2")).is_empty());

        let mut board = Board::starting_position();
        board.add_piece(position!("f4"), Some(Piece::new(Side::Black, PieceKind::Knight)));
        let moves = piece_moves(&board, position!("f2"));
        assert_eq!(destinations(&moves), ["f3"]);
    }
    #[test]
    fn pawn_captures_only_diagonally_forward() {
        let board = place(&[
            ("d5", Side::Black, PieceKind::Pawn),
            ("c4", Side::White, PieceKind::Pawn),
            ("e4", Side::White, PieceKind::Knight),
            ("d4", Side::White, PieceKind::Pawn),
            ("c6", Side::White, PieceKind::Pawn),
        ]);
        let moves = piece_moves(&board, position!("d5"));
        assert_eq!(destinations(&moves), ["c4", "e4"]);
    }
    #[test]
    fn promotion_fans_out() {
        let board = place(&[
            ("b2", Side::Black, PieceKind::Pawn),
            ("a1", Side::White, PieceKind::Rook),
        ]);
        let moves = piece_moves(&board, position!("b2"));
        assert_eq!(moves.len(), 8);
        for to in [position!("a1"), position!("b1")] {
            for kind in PieceKind::PROMOTION_CHOICES {
                assert!(moves.contains(&Move::promoting(position!("b2"), to, kind)));
            }
            assert!(!moves.contains(&Move::new(position!("b2"), to)));
        }
    }
    #[test]
    fn never_lands_on_own_piece() {
        let board = Board::starting_position();
        for (origin, piece) in board.pieces() {
            for movement in piece_moves(&board, origin) {
                assert_eq!(movement.from, origin);
                assert!(board[movement.to].is_none_or(|occupant| occupant.side != piece.side));
            }
        }
    }
}
