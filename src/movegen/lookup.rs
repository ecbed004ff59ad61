//! Precomputed lookup tables and the attack query facade.
//!
//! The leaper tables and square-pair geometry tables are `const`-evaluated.
//! The slider queries are answered by exactly one indexing backend, selected
//! at build time from the declared hardware capability:
//!
//! - `bmi2` + `compact-tables` feature: hardware extraction, compressed table
//! - `bmi2`: hardware extraction, full table
//! - otherwise: multiply-shift magic indexing
//!
//! There is no runtime dispatch between backends and no fallback.

use super::init::*;
use crate::core::{Bitboard, Colour, Direction, PieceType, Square};

/******************************************\
|==========================================|
|              Type Definitions            |
|==========================================|
\******************************************/

/// Attack table for a single piece type indexed by square
pub(super) type AttackTable = [Bitboard; Square::NUM];
/// Attack table for pawns indexed by colour and square
type PawnAttackTable = [[Bitboard; Square::NUM]; Colour::NUM];
/// Table mapping square pairs to bitboards
pub(super) type SquarePairTable = [[Bitboard; Square::NUM]; Square::NUM];
/// Table mapping square pairs to distances
pub(super) type DistanceTable = [[u8; Square::NUM]; Square::NUM];

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

use Direction::*;

/// Precomputed pawn attacks, indexed by `[Colour][Square]`.
const PAWN_ATTACKS: PawnAttackTable = [
    init_pseudo_attacks(&[NE, NW]), // White pawn attacks (index 0)
    init_pseudo_attacks(&[SE, SW]), // Black pawn attacks (index 1)
];

/// Precomputed knight attacks, indexed by `[Square]`.
const KNIGHT_ATTACKS: AttackTable = init_pseudo_attacks(&[NNE, NNW, NEE, NWW, SEE, SWW, SSE, SSW]);

/// Precomputed king attacks, indexed by `[Square]`.
const KING_ATTACKS: AttackTable = init_pseudo_attacks(&[N, NE, NW, E, W, SE, SW, S]);

/******************************************\
|==========================================|
|              Lookup Tables               |
|==========================================|
\******************************************/

/// Precomputed lines between squares (exclusive), indexed by `[Square][Square]`.
const BETWEEN_BB: SquarePairTable = init_between_bb_table();

/// Precomputed lines through squares (inclusive of endpoints, extending to
/// the board edges), indexed by `[Square][Square]`.
const LINE_BB: SquarePairTable = init_line_bb_table();

/// Precomputed Chebyshev distances between squares, indexed by `[Square][Square]`.
const DIST: DistanceTable = init_dist_table();

/******************************************\
|==========================================|
|               Get Attacks                |
|==========================================|
\******************************************/

#[inline]
pub fn pawn_attack(col: Colour, sq: Square) -> Bitboard {
    unsafe {
        *PAWN_ATTACKS
            .get_unchecked(col.index())
            .get_unchecked(sq.index())
    }
}

#[inline]
pub fn knight_attack(sq: Square) -> Bitboard {
    unsafe { *KNIGHT_ATTACKS.get_unchecked(sq.index()) }
}

#[inline]
pub fn king_attack(sq: Square) -> Bitboard {
    unsafe { *KING_ATTACKS.get_unchecked(sq.index()) }
}

#[inline]
pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    #[cfg(all(target_feature = "bmi2", feature = "compact-tables"))]
    return super::pext::bishop_attacks_compact(sq, occ);

    #[cfg(all(target_feature = "bmi2", not(feature = "compact-tables")))]
    return super::pext::bishop_attacks(sq, occ);

    #[cfg(not(target_feature = "bmi2"))]
    return super::magic::bishop_attacks(sq, occ);
}

#[inline]
pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    #[cfg(all(target_feature = "bmi2", feature = "compact-tables"))]
    return super::pext::rook_attacks_compact(sq, occ);

    #[cfg(all(target_feature = "bmi2", not(feature = "compact-tables")))]
    return super::pext::rook_attacks(sq, occ);

    #[cfg(not(target_feature = "bmi2"))]
    return super::magic::rook_attacks(sq, occ);
}

#[inline]
pub fn queen_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    bishop_attacks(sq, occ) | rook_attacks(sq, occ)
}

/// Gets the attack `Bitboard` for a piece of type `pt` and colour `col` on
/// `sq`, with `occ` as the board occupancy. The occupancy only matters for
/// sliders, and the colour only for pawns.
#[inline]
pub fn attacks(col: Colour, pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
    match pt {
        PieceType::Pawn => pawn_attack(col, sq),
        PieceType::Knight => knight_attack(sq),
        PieceType::King => king_attack(sq),
        PieceType::Bishop => bishop_attacks(sq, occ),
        PieceType::Rook => rook_attacks(sq, occ),
        PieceType::Queen => queen_attacks(sq, occ),
    }
}

/******************************************\
|==========================================|
|           Get Bitboard Lookups           |
|==========================================|
\******************************************/

/// Gets the `Bitboard` of the squares strictly between two squares.
///
/// If the two squares do not lie on the same rank, file, or diagonal, or if
/// they are adjacent or the same, an empty `Bitboard` is returned.
#[inline]
pub fn between_bb(from: Square, to: Square) -> Bitboard {
    BETWEEN_BB[from.index()][to.index()]
}

/// Gets the `Bitboard` of the full line through two squares, inclusive of
/// both and extended to the board edges. Empty if the squares are not
/// colinear or are the same.
#[inline]
pub fn line_bb(from: Square, to: Square) -> Bitboard {
    LINE_BB[from.index()][to.index()]
}

/// Gets the Chebyshev distance (king distance) between two squares.
#[inline]
pub fn sq_dist(sq1: Square, sq2: Square) -> u8 {
    DIST[sq1.index()][sq2.index()]
}

/// Checks whether three squares lie on one rank, file or diagonal.
#[inline]
pub fn aligned(sq1: Square, sq2: Square, sq3: Square) -> bool {
    line_bb(sq1, sq2).contains(sq3)
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
