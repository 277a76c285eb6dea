//! Legal move generation.

pub(crate) mod king;
pub(crate) mod knights;
pub(crate) mod pawns;
pub(crate) mod pins;
pub(crate) mod sliders;

use std::collections::BTreeMap;

use crate::chess_move::{Move, MoveId};
use crate::game::GameState;
use crate::piece_kind::PieceKind;
use crate::tile::Tile;

/// The legal moves of a position, keyed by [`Move::id`].
///
/// Iteration is in ascending id order, so traversal is deterministic for a
/// given position.
#[derive(Debug, Clone, Default)]
pub struct MoveSet {
    moves: BTreeMap<MoveId, Move>,
}

impl MoveSet {
    /// Create an empty move set.
    pub fn new() -> MoveSet {
        MoveSet {
            moves: BTreeMap::new(),
        }
    }

    /// Insert a move under its id.
    #[inline]
    pub fn insert(&mut self, mv: Move) {
        let _ = self.moves.insert(mv.id(), mv);
    }

    /// Look up a move by id.
    #[inline]
    pub fn get(&self, id: MoveId) -> Option<&Move> {
        self.moves.get(&id)
    }

    /// Return `true` if a move with this id is present.
    #[inline]
    pub fn contains(&self, id: MoveId) -> bool {
        self.moves.contains_key(&id)
    }

    /// Return the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if there are no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over the moves in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }

    /// Keep only the moves satisfying the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(|_, mv| keep(mv));
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::collections::btree_map::Values<'a, MoveId, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.values()
    }
}

impl GameState {
    /// Generate all fully legal moves for the side to move.
    ///
    /// Also refreshes `in_check`, `checkmate`, `stalemate`, the pin and
    /// check lists, and the cached `valid_moves`. No returned move leaves
    /// the mover's own king in check.
    pub fn generate_valid_moves(&mut self) -> MoveSet {
        // Trial king moves below run the analyzer against mutated state;
        // hold the per-ply fields aside and put them back before returning.
        let saved_en_passant = self.en_passant_possible;
        let saved_castling = self.castling;

        let (in_check, pins, checks) = self.pins_and_checks(self.side_to_move());
        self.in_check = in_check;
        self.pins = pins;
        self.checks = checks;
        let king = self.king_location(self.side_to_move());

        let mut moves;
        if self.in_check {
            if self.checks.len() == 1 {
                moves = self.pseudo_moves();
                let check = self.checks[0];
                let checker = self
                    .piece_at(check.tile)
                    .expect("check list entries sit on occupied tiles");
                // Squares that resolve the check for a non-king piece:
                // capture the checker, or stand between it and the king.
                // A knight's check cannot be blocked, only captured.
                let mut blocking_tiles = Vec::new();
                if checker.kind() == PieceKind::Knight {
                    blocking_tiles.push(check.tile);
                } else {
                    for i in 1..8i8 {
                        let Some(tile) = king.offset(check.dir.0 * i, check.dir.1 * i) else {
                            break;
                        };
                        blocking_tiles.push(tile);
                        if tile == check.tile {
                            break;
                        }
                    }
                }
                moves.retain(|mv| {
                    mv.piece_moved().kind() == PieceKind::King
                        || blocking_tiles.contains(&mv.end())
                });
            } else {
                // Double check: only the king can resolve it. Capturing one
                // checker leaves the other, and no single move blocks both.
                moves = MoveSet::new();
                self.king_moves(king, &mut moves);
            }
        } else {
            moves = self.pseudo_moves();
        }

        self.castle_moves(king, &mut moves);

        self.en_passant_possible = saved_en_passant;
        self.castling = saved_castling;

        if moves.is_empty() {
            if self.in_check {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        self.valid_moves = moves.clone();
        moves
    }

    /// Emit every pseudo-legal move for the side to move: piece movement
    /// rules and pin restrictions are honored, but the king may still be
    /// left in check by non-king moves.
    pub(crate) fn pseudo_moves(&mut self) -> MoveSet {
        let mut moves = MoveSet::new();
        for row in 0..8 {
            for col in 0..8 {
                let tile = Tile::new(row, col);
                let Some(piece) = self.piece_at(tile) else {
                    continue;
                };
                if piece.color() != self.side_to_move() {
                    continue;
                }
                match piece.kind() {
                    PieceKind::Pawn => self.pawn_moves(tile, &mut moves),
                    PieceKind::Knight => self.knight_moves(tile, &mut moves),
                    PieceKind::Bishop => self.bishop_moves(tile, &mut moves),
                    PieceKind::Rook => self.rook_moves(tile, &mut moves),
                    PieceKind::Queen => self.queen_moves(tile, &mut moves),
                    PieceKind::King => self.king_moves(tile, &mut moves),
                }
            }
        }
        moves
    }

    /// Return `true` if any enemy pseudo-move lands on the tile.
    ///
    /// Computed by flipping the side to move and generating the opponent's
    /// pseudo-moves, so the cost is one full generation pass.
    pub fn tile_under_attack(&mut self, tile: Tile) -> bool {
        self.white_to_move = !self.white_to_move;
        let opponent_moves = self.pseudo_moves();
        self.white_to_move = !self.white_to_move;
        opponent_moves.iter().any(|mv| mv.end() == tile)
    }
}

#[cfg(test)]
mod tests {
    use crate::game::GameState;
    use crate::piece_kind::PieceKind;
    use crate::tile::Tile;

    fn tile(s: &str) -> Tile {
        Tile::from_notation(s).unwrap()
    }

    fn play(state: &mut GameState, notation: &str) {
        let moves = state.generate_valid_moves();
        let mv = moves
            .iter()
            .find(|m| m.chess_notation() == notation)
            .copied()
            .unwrap_or_else(|| panic!("move {notation} should be legal"));
        state.make_move(mv);
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut state = GameState::new();
        let moves = state.generate_valid_moves();
        assert_eq!(moves.len(), 20);
        assert!(!state.in_check());
        let pawn_moves = moves
            .iter()
            .filter(|m| m.piece_moved().kind() == PieceKind::Pawn)
            .count();
        let knight_moves = moves
            .iter()
            .filter(|m| m.piece_moved().kind() == PieceKind::Knight)
            .count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut state = GameState::new();
        play(&mut state, "F2F3");
        play(&mut state, "E7E5");
        play(&mut state, "G2G4");
        play(&mut state, "D8H4");
        let moves = state.generate_valid_moves();
        assert!(moves.is_empty());
        assert!(state.checkmate());
        assert!(state.in_check());
        assert!(!state.stalemate());
        assert!(state.white_to_move());
    }

    #[test]
    fn scholars_mate_threat_can_be_parried() {
        let mut state = GameState::new();
        play(&mut state, "E2E4");
        play(&mut state, "E7E5");
        play(&mut state, "F1C4");
        play(&mut state, "B8C6");
        play(&mut state, "D1H5");
        // ...g6 blocks the h5-f7 diagonal and parries the mate threat.
        play(&mut state, "G7G6");
        let moves = state.generate_valid_moves();
        assert!(!state.checkmate());
        assert!(!state.in_check());
        assert!(moves.iter().all(|m| m.chess_notation() != "H5F7"));
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let mut state: GameState = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.iter().all(|m| m.start() != tile("E2")));
    }

    #[test]
    fn pinned_rook_stays_on_its_ray() {
        // Rook e4 is pinned along the e-file; it may slide on the file but
        // never leave it.
        let mut state: GameState = "4r2k/8/8/8/4R3/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        for mv in moves.iter().filter(|m| m.start() == tile("E4")) {
            assert_eq!(mv.end().col(), tile("E4").col(), "pinned rook left the file: {mv}");
        }
        assert!(moves.iter().any(|m| m.start() == tile("E4") && m.end() == tile("E8")));
    }

    #[test]
    fn single_check_forces_block_capture_or_king_move() {
        // Rook e8 checks the king on e1. Every answer must block on the
        // e-file, capture the rook, or move the king.
        let mut state: GameState = "4r2k/8/8/8/8/2N5/6B1/4K3 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(state.in_check());
        for mv in moves.iter() {
            let resolves = mv.piece_moved().kind() == PieceKind::King
                || mv.end().col() == 4
                || mv.end() == tile("E8");
            assert!(resolves, "{mv} does not address the check");
        }
        assert!(moves.iter().any(|m| m.start() == tile("C3") && m.end() == tile("E2")));
    }

    #[test]
    fn double_check_allows_only_king_moves() {
        let mut state: GameState = "4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(!moves.is_empty());
        for mv in moves.iter() {
            assert_eq!(mv.piece_moved().kind(), PieceKind::King);
        }
    }

    #[test]
    fn stalemate_is_flagged_without_check() {
        // Black to move: king a8 has no moves but is not attacked.
        let mut state: GameState = "k7/2Q5/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.is_empty());
        assert!(state.stalemate());
        assert!(!state.checkmate());
        assert!(!state.in_check());
    }

    #[test]
    fn back_rank_mate_is_flagged() {
        // The pawns box their own king in; Ra8 mates along the back rank.
        let mut state: GameState = "6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        play(&mut state, "A1A8");
        let replies = state.generate_valid_moves();
        assert!(replies.is_empty());
        assert!(state.checkmate());
        assert!(state.in_check());
    }

    #[test]
    fn en_passant_appears_only_after_a_double_step() {
        let mut state: GameState = "4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1".parse().unwrap();
        play(&mut state, "D7D5");
        let moves = state.generate_valid_moves();
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].end(), tile("D6"));
    }

    #[test]
    fn en_passant_blocked_by_rank_exposure() {
        // King and rook share rank 5 with the two pawns; capturing en
        // passant would strip the rank bare and expose the king.
        let mut state: GameState = "4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn en_passant_allowed_when_rank_is_shielded() {
        // Same shape, but an extra white knight on f5 still blocks the rook
        // after the pawns vanish.
        let mut state: GameState = "4k3/8/8/K2pPN1r/8/8/8/8 w - d6 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn castle_through_attacked_transit_is_illegal() {
        // A black rook on f8 covers f1: no king-side castle, queen-side fine.
        let mut state: GameState = "5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].end(), tile("C1"));
    }

    #[test]
    fn no_castling_while_in_check() {
        let mut state: GameState = "4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn castling_requires_empty_lanes() {
        // Bishops on b1 and f1 block both wings.
        let mut state: GameState = "4k3/8/8/8/8/8/8/RB2KB1R w KQ - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        assert!(moves.iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn both_castles_available_on_open_board() {
        let mut state: GameState = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let moves = state.generate_valid_moves();
        let ends: Vec<_> = moves.iter().filter(|m| m.is_castle()).map(|m| m.end()).collect();
        assert!(ends.contains(&tile("G1")));
        assert!(ends.contains(&tile("C1")));
    }

    #[test]
    fn empty_move_set_means_mate_xor_stalemate() {
        let fens = [
            "6k1/5ppp/8/8/8/8/8/6KR b - - 0 1",  // live game
            "k7/2Q5/8/8/8/8/8/4K3 b - - 0 1",    // stalemate
            "k1Q5/8/K7/8/8/8/8/8 b - - 0 1",     // checkmate
        ];
        for fen in fens {
            let mut state: GameState = fen.parse().unwrap();
            let moves = state.generate_valid_moves();
            if moves.is_empty() {
                assert!(state.checkmate() ^ state.stalemate(), "flags wrong for {fen}");
            } else {
                assert!(!state.checkmate() && !state.stalemate(), "flags wrong for {fen}");
            }
        }
    }

    #[test]
    fn no_legal_move_leaves_own_king_in_check() {
        let fens = [
            crate::STARTING_FEN,
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1",
            "4r2k/8/8/8/8/2N5/6B1/4K3 w - - 0 1",
            "4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1",
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
        ];
        for fen in fens {
            let mut state: GameState = fen.parse().unwrap();
            let moves = state.generate_valid_moves();
            for mv in moves.iter().copied().collect::<Vec<_>>() {
                state.make_move(mv);
                let mover = state.side_to_move().flip();
                let (in_check, _, _) = state.pins_and_checks(mover);
                assert!(!in_check, "{mv} leaves the king in check in {fen}");
                state.undo_move();
            }
        }
    }

    #[test]
    fn generation_preserves_en_passant_and_castling() {
        let mut state: GameState =
            "r3k2r/pppppppp/8/8/4P3/8/PPPP1PPP/R3K2R b KQkq e3 0 1".parse().unwrap();
        let en_passant = state.en_passant_possible();
        let castling = state.castling();
        let _ = state.generate_valid_moves();
        assert_eq!(state.en_passant_possible(), en_passant);
        assert_eq!(state.castling(), castling);
    }

    #[test]
    fn valid_moves_cache_matches_return() {
        let mut state = GameState::new();
        let moves = state.generate_valid_moves();
        assert_eq!(moves.len(), state.valid_moves().len());
        for mv in moves.iter() {
            assert!(state.valid_moves().contains(mv.id()));
        }
    }

    #[test]
    fn move_set_lookup_by_id() {
        let mut state = GameState::new();
        let moves = state.generate_valid_moves();
        let e2e4 = moves
            .iter()
            .find(|m| m.chess_notation() == "E2E4")
            .copied()
            .unwrap();
        assert!(moves.contains(e2e4.id()));
        assert_eq!(moves.get(e2e4.id()), Some(&e2e4));
        assert_eq!(moves.get(0), None);
    }

    #[test]
    fn tile_under_attack_asks_about_the_opponent() {
        // White to move, so the query reports what Black reaches: the g8
        // knight covers f6, and nothing black reaches f3.
        let mut state = GameState::new();
        assert!(state.tile_under_attack(tile("F6")));
        assert!(!state.tile_under_attack(tile("F3")));
    }
}
