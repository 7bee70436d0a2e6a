//! Differential testing of legal move generation against the `chess` crate.
//! Positions are handed over without castling rights or an en passant
//! target, so both sides play by the same rules.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    fen::Fen, game::Game, movegen::MoveSet, movement::Move, piece::PieceKind, position::Position,
};

const SEEDS: [u64; 4] = [0, 1, 0x5eed, 0xc0ffee];
const MAX_PLIES: usize = 160;

impl From<chess::Piece> for PieceKind {
    fn from(value: chess::Piece) -> Self {
        match value {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}
impl From<chess::Square> for Position {
    fn from(value: chess::Square) -> Self {
        Position::new(
            u8::try_from(value.get_rank().to_index()).unwrap() + 1,
            u8::try_from(value.get_file().to_index()).unwrap() + 1,
        )
    }
}
impl From<chess::ChessMove> for Move {
    fn from(value: chess::ChessMove) -> Self {
        Move {
            from: value.get_source().into(),
            to: value.get_dest().into(),
            promotion: value.get_promotion().map(Into::into),
        }
    }
}
fn reference_board(game: &Game) -> chess::Board {
    format!("{} - - 0 1", Fen(game.clone())).parse().unwrap()
}
fn play_random_game(seed: u64) {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..MAX_PLIES {
        let turn = game.team_turn();
        let moves: MoveSet = game.all_valid_moves(turn).unwrap();
        let reference = reference_board(&game);
        let reference_moves: FxHashSet<Move> =
            chess::MoveGen::new_legal(&reference).map(Into::into).collect();
        if let Some(movement) = moves.difference(&reference_moves).next() {
            panic!("found {movement} but it's not a legal move\n{game}\n{}", Fen(game.clone()));
        }
        if let Some(movement) = reference_moves.difference(&moves).next() {
            panic!("{movement} not found\n{game}\n{}", Fen(game.clone()));
        }
        assert_eq!(
            game.is_in_check(turn).unwrap(),
            reference.checkers().popcnt() > 0,
            "check disagreement\n{game}"
        );
        if moves.is_empty() {
            let checkmate = reference.status() == chess::BoardStatus::Checkmate;
            assert_eq!(game.is_in_checkmate(turn), Ok(checkmate));
            assert_eq!(game.is_in_stalemate(turn), Ok(!checkmate));
            return;
        }
        let mut moves: Vec<_> = moves.into_iter().collect();
        moves.sort_by_key(|movement| {
            (
                movement.from.row(),
                movement.from.column(),
                movement.to.row(),
                movement.to.column(),
                movement.promotion.map(u8::from),
            )
        });
        let movement = moves[rng.random_range(0..moves.len())];
        game.make_move(&movement).unwrap();
    }
}
#[test]
fn matches_reference_move_generator() {
    for seed in SEEDS {
        play_random_game(seed);
    }
}
