//! Hardware bit-extraction indexing backends (BMI2 targets only).
//!
//! PEXT compacts the relevant occupancy bits straight into a dense,
//! collision-free index, so no magic constant is involved. Two table layouts
//! share that index:
//!
//! - the full layout stores one `Bitboard` per slot, exactly like the
//!   multiply-shift backend;
//! - the compact layout stores a 16-bit seed per slot and re-expands it at
//!   query time with PDEP against the square's empty-board attack span,
//!   trading one instruction for a four times smaller table.

use super::rays::cast_slider;
use super::slider::{
    BISHOP_TABLE_SIZE, ROOK_TABLE_SIZE, next_subset, relevant_occupancy, segment_size,
};
use crate::core::{Bitboard, PieceType, Square};
use std::sync::LazyLock;

/******************************************\
|==========================================|
|             Pext Definition              |
|==========================================|
\******************************************/

#[derive(Debug, Clone, Copy)]
pub(crate) struct Pext {
    mask: Bitboard,
    span: Bitboard,
    offset: usize,
}

impl Pext {
    const EMPTY: Pext = Pext {
        mask: Bitboard::EMPTY,
        span: Bitboard::EMPTY,
        offset: 0,
    };

    /// Dense index of `occ` into the square's table segment.
    #[inline]
    pub(crate) fn index(self, occ: Bitboard) -> usize {
        occ.pext(self.mask.0) as usize + self.offset
    }
}

pub(crate) type PextTable = [Pext; Square::NUM];

pub(crate) const BISHOP_PEXT: PextTable = populate_pext_table(PieceType::Bishop);

pub(crate) const ROOK_PEXT: PextTable = populate_pext_table(PieceType::Rook);

pub(crate) static BISHOP_TABLE: LazyLock<Box<[Bitboard; BISHOP_TABLE_SIZE]>> =
    LazyLock::new(|| {
        populate_attack_table::<BISHOP_TABLE_SIZE>(PieceType::Bishop)
            .into_boxed_slice()
            .try_into()
            .expect("Failed to compile bishop table")
    });

pub(crate) static ROOK_TABLE: LazyLock<Box<[Bitboard; ROOK_TABLE_SIZE]>> = LazyLock::new(|| {
    populate_attack_table::<ROOK_TABLE_SIZE>(PieceType::Rook)
        .into_boxed_slice()
        .try_into()
        .expect("Failed to compile rook table")
});

pub(crate) static BISHOP_SEEDS: LazyLock<Box<[u16; BISHOP_TABLE_SIZE]>> = LazyLock::new(|| {
    populate_seed_table::<BISHOP_TABLE_SIZE>(PieceType::Bishop)
        .into_boxed_slice()
        .try_into()
        .expect("Failed to compile bishop seed table")
});

pub(crate) static ROOK_SEEDS: LazyLock<Box<[u16; ROOK_TABLE_SIZE]>> = LazyLock::new(|| {
    populate_seed_table::<ROOK_TABLE_SIZE>(PieceType::Rook)
        .into_boxed_slice()
        .try_into()
        .expect("Failed to compile rook seed table")
});

/// Forces the one-time build of the slider tables.
pub(crate) fn init_tables() {
    #[cfg(not(feature = "compact-tables"))]
    {
        let _ = &*BISHOP_TABLE;
        let _ = &*ROOK_TABLE;
    }
    #[cfg(feature = "compact-tables")]
    {
        let _ = &*BISHOP_SEEDS;
        let _ = &*ROOK_SEEDS;
    }
}

/******************************************\
|==========================================|
|               Get Attacks                |
|==========================================|
\******************************************/

#[inline]
pub(crate) fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    unsafe { *BISHOP_TABLE.get_unchecked(BISHOP_PEXT[sq.index()].index(occ)) }
}

#[inline]
pub(crate) fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    unsafe { *ROOK_TABLE.get_unchecked(ROOK_PEXT[sq.index()].index(occ)) }
}

#[inline]
pub(crate) fn bishop_attacks_compact(sq: Square, occ: Bitboard) -> Bitboard {
    let p = BISHOP_PEXT[sq.index()];
    let seed = unsafe { *BISHOP_SEEDS.get_unchecked(p.index(occ)) };
    Bitboard(Bitboard(seed as u64).pdep(p.span.0))
}

#[inline]
pub(crate) fn rook_attacks_compact(sq: Square, occ: Bitboard) -> Bitboard {
    let p = ROOK_PEXT[sq.index()];
    let seed = unsafe { *ROOK_SEEDS.get_unchecked(p.index(occ)) };
    Bitboard(Bitboard(seed as u64).pdep(p.span.0))
}

/******************************************\
|==========================================|
|        Populating Pext Parameters        |
|==========================================|
\******************************************/

const fn populate_pext_table(pt: PieceType) -> PextTable {
    let mut offset = 0;
    let mut pext = [Pext::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };

        let mask = relevant_occupancy(pt, sq);

        pext[i] = Pext {
            mask,
            span: cast_slider(pt, sq, Bitboard::EMPTY),
            offset,
        };

        offset += 1 << mask.count_bits();

        i += 1;
    }

    pext
}

fn populate_attack_table<const N: usize>(pt: PieceType) -> Vec<Bitboard> {
    let mut table = vec![Bitboard::EMPTY; N];

    let pext = match pt {
        PieceType::Rook => ROOK_PEXT,
        PieceType::Bishop => BISHOP_PEXT,
        _ => unreachable!(),
    };

    for sq in Square::iter() {
        let p = pext[sq.index()];

        let mut occ = Bitboard::EMPTY;
        for _ in 0..segment_size(pt, sq) {
            table[p.index(occ)] = cast_slider(pt, sq, occ);

            occ = next_subset(occ, p.mask);
        }
    }

    table
}

fn populate_seed_table<const N: usize>(pt: PieceType) -> Vec<u16> {
    let mut table = vec![0u16; N];

    let pext = match pt {
        PieceType::Rook => ROOK_PEXT,
        PieceType::Bishop => BISHOP_PEXT,
        _ => unreachable!(),
    };

    for sq in Square::iter() {
        let p = pext[sq.index()];

        let mut occ = Bitboard::EMPTY;
        for _ in 0..segment_size(pt, sq) {
            // Any attack set is a subset of the empty-board span, whose
            // population never exceeds 14 bits, so the extracted seed
            // always fits a u16.
            let attacks = cast_slider(pt, sq, occ);
            table[p.index(occ)] = attacks.pext(p.span.0) as u16;

            occ = next_subset(occ, p.mask);
        }
    }

    table
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
