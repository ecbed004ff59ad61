//! Compile-time construction of the small lookup tables.
//!
//! The leaper attack tables and the square-pair geometry tables are cheap
//! enough to build in const evaluation, so they carry no runtime init at
//! all. The between table memoizes the branchless `Bitboard::between`; the
//! line table is derived from empty-board ray casts.

use super::lookup::{AttackTable, DistanceTable, SquarePairTable};
use super::rays::cast_slider;
use crate::core::{Bitboard, Direction, PieceType, Square};

/// Initializes pseudo-attack tables for non-sliding pieces (Pawn, Knight, King).
/// "Pseudo attacks" are potential moves ignoring blockers.
pub(super) const fn init_pseudo_attacks(dirs: &[Direction]) -> AttackTable {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq_bb = unsafe { Square::from_unchecked(i as u8).bb() };

        let mut j = 0;
        while j < dirs.len() {
            attacks[i].0 |= Bitboard::shift(&sq_bb, dirs[j]).0;
            j += 1;
        }

        i += 1;
    }

    attacks
}

/// Initialise the between table from the branchless formula.
pub(super) const fn init_between_bb_table() -> SquarePairTable {
    let mut table = [[Bitboard::EMPTY; Square::NUM]; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let mut j = 0;
        while j < Square::NUM {
            let from = unsafe { Square::from_unchecked(i as u8) };
            let to = unsafe { Square::from_unchecked(j as u8) };

            table[i][j] = Bitboard::between(from, to);

            j += 1;
        }

        i += 1;
    }

    table
}

// Returns the full line crossing 2 squares, extended to the board edges.
// Empty when the squares do not share a rank, file or diagonal.
const fn line_bb(pt: PieceType, from: Square, to: Square) -> Bitboard {
    let from_ray = cast_slider(pt, from, Bitboard::EMPTY);
    let to_ray = cast_slider(pt, to, Bitboard::EMPTY);

    Bitboard((from_ray.0 & to_ray.0) | from.bb().0 | to.bb().0)
}

// Populate line table entries for every square the piece type reaches from `from`
const fn populate_line_bb(table: &mut SquarePairTable, pt: PieceType, from: Square) {
    let mut bb = cast_slider(pt, from, Bitboard::EMPTY);
    while !bb.is_empty() {
        let to = bb.pop_lsb_unchecked();
        table[from.index()][to.index()] = line_bb(pt, from, to);
    }
}

/// Initialise line table
pub(super) const fn init_line_bb_table() -> SquarePairTable {
    let mut table = [[Bitboard::EMPTY; Square::NUM]; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let from = unsafe { Square::from_unchecked(i as u8) };

        populate_line_bb(&mut table, PieceType::Bishop, from);
        populate_line_bb(&mut table, PieceType::Rook, from);

        i += 1;
    }

    table
}

/// Initializes the Chebyshev distance table.
pub(super) const fn init_dist_table() -> DistanceTable {
    let mut table = [[0u8; Square::NUM]; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let mut j = 0;
        while j < Square::NUM {
            let sq1 = unsafe { Square::from_unchecked(i as u8) };
            let sq2 = unsafe { Square::from_unchecked(j as u8) };

            let rank_dist = Square::rank_dist(sq1, sq2);
            let file_dist = Square::file_dist(sq1, sq2);

            table[i][j] = if rank_dist > file_dist {
                rank_dist
            } else {
                file_dist
            };

            j += 1;
        }

        i += 1;
    }

    table
}
