//! Shared construction skeleton for the slider attack tables.
//!
//! Every indexing strategy builds its tables the same way: compute the
//! relevant occupancy mask of each square, enumerate all of its subsets with
//! the carry-rippler, resolve the true attack set with a ray walk and store
//! it at the strategy's index. This module holds the strategy-independent
//! pieces: the masks, the subset enumeration and the flat table sizing.

use super::rays::cast_slider;
use crate::core::{Bitboard, File, PieceType, Rank, Square};

/// Total entries of the flat bishop table, one segment per square
/// (sum over squares of 2^popcount(mask)).
pub(crate) const BISHOP_TABLE_SIZE: usize = 0x1480;

/// Total entries of the flat rook table, one segment per square.
pub(crate) const ROOK_TABLE_SIZE: usize = 0x19000;

/// Returns the board-edge squares that do not matter for a slider on `sq`:
/// the first and eighth ranks unless `sq` is on them, and the A and H files
/// unless `sq` is on them. A blocker on the far end of a ray never changes
/// what the slider sees, so these squares carry no index information.
pub(crate) const fn edge_mask(sq: Square) -> Bitboard {
    use File::*;
    use Rank::*;

    let rank_18bb = Rank1.bb().0 | Rank8.bb().0;
    let file_ahbb = FileA.bb().0 | FileH.bb().0;

    let rank_mask = rank_18bb & !sq.rank().bb().0;
    let file_mask = file_ahbb & !sq.file().bb().0;

    Bitboard(rank_mask | file_mask)
}

/// Returns the relevant occupancy mask for a slider on `sq`: the squares
/// whose occupancy can change the attack set. The edge squares themselves
/// remain legal destinations, they are just never part of the index.
pub(crate) const fn relevant_occupancy(pt: PieceType, sq: Square) -> Bitboard {
    Bitboard(cast_slider(pt, sq, Bitboard::EMPTY).0 & !edge_mask(sq).0)
}

/// Advances the carry-rippler subset enumeration: starting from the empty
/// subset, `next_subset(current, mask)` visits every subset of `mask` exactly
/// once and returns to empty after 2^popcount(mask) steps.
pub(crate) const fn next_subset(current: Bitboard, mask: Bitboard) -> Bitboard {
    Bitboard(current.0.wrapping_sub(mask.0) & mask.0)
}

/// Number of relevant occupancy subsets for `sq`, which is also the size of
/// its table segment.
pub(crate) const fn segment_size(pt: PieceType, sq: Square) -> usize {
    1 << relevant_occupancy(pt, sq).count_bits()
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_relevant_occupancy_popcounts() {
        // Rook corner masks keep 12 bits, the centre 10; bishop corner masks
        // keep 6 bits, the centre 9.
        assert_eq!(
            relevant_occupancy(PieceType::Rook, Square::A1).count_bits(),
            12
        );
        assert_eq!(
            relevant_occupancy(PieceType::Rook, Square::D4).count_bits(),
            10
        );
        assert_eq!(
            relevant_occupancy(PieceType::Bishop, Square::A1).count_bits(),
            6
        );
        assert_eq!(
            relevant_occupancy(PieceType::Bishop, Square::D4).count_bits(),
            9
        );
    }

    #[test]
    fn test_relevant_occupancy_excludes_origin() {
        for pt in [PieceType::Bishop, PieceType::Rook] {
            for sq in Square::iter() {
                assert!(!relevant_occupancy(pt, sq).contains(sq));
            }
        }
    }

    #[test]
    fn test_edge_square_mask_attack_divergence() {
        // On an edge square the mask drops the far ends of each ray, but the
        // attack set still reaches them.
        let mask = relevant_occupancy(PieceType::Rook, Square::A1);
        let attacks = cast_slider(PieceType::Rook, Square::A1, Bitboard::EMPTY);

        assert!(!mask.contains(Square::A8));
        assert!(!mask.contains(Square::H1));
        assert!(attacks.contains(Square::A8));
        assert!(attacks.contains(Square::H1));

        assert_eq!(
            mask,
            (Square::A1.file().bb() | Square::A1.rank().bb())
                ^ Bitboard::from([Square::A1, Square::A8, Square::H1])
        );
    }

    #[test]
    fn test_carry_rippler_enumerates_all_subsets() {
        for (pt, sq) in [
            (PieceType::Bishop, Square::A1),
            (PieceType::Bishop, Square::E4),
            (PieceType::Rook, Square::H8),
            (PieceType::Rook, Square::D4),
        ] {
            let mask = relevant_occupancy(pt, sq);
            let mut seen = HashSet::new();

            let mut subset = Bitboard::EMPTY;
            loop {
                assert_eq!(subset.0 & !mask.0, 0, "subset escaped the mask");
                assert!(seen.insert(subset.0), "subset visited twice");

                subset = next_subset(subset, mask);
                if subset.is_empty() {
                    break;
                }
            }

            assert_eq!(seen.len(), segment_size(pt, sq));
        }
    }

    #[test]
    fn test_table_sizes_match_segment_sum() {
        let bishop: usize = Square::iter()
            .map(|sq| segment_size(PieceType::Bishop, sq))
            .sum();
        assert_eq!(bishop, BISHOP_TABLE_SIZE);

        let rook: usize = Square::iter()
            .map(|sq| segment_size(PieceType::Rook, sq))
            .sum();
        assert_eq!(rook, ROOK_TABLE_SIZE);
    }
}
