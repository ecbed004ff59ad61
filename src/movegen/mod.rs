//! # Module: `movegen`
//!
//! Attack generation for all piece types, backed by tables built once per
//! process.
//!
//! ## Overview
//!
//! - **`rays`**: stepwise ray casting, the slow reference implementation.
//! - **`slider`**: the construction skeleton shared by the indexing
//!   strategies (relevant occupancy masks, carry-rippler subset enumeration,
//!   flat table sizing).
//! - **`magic`**: multiply-shift (magic bitboard) indexing, the portable
//!   backend.
//! - **`pext`**: hardware bit-extraction indexing (full and compressed
//!   layouts), compiled on `bmi2` targets.
//! - **`lookup`**: the query facade and the precomputed leaper and
//!   square-pair geometry tables.
//!
//! ## Initialization and concurrency
//!
//! The leaper and geometry tables are `const`-evaluated. The slider attack
//! tables are built lazily behind `LazyLock`: if several threads race on the
//! first query, exactly one build runs and every thread observes the
//! completed table. Call [`init_attack_tables`] to pay that cost eagerly at
//! startup. After the build everything is read-only and shared without
//! locking; queries never allocate or block.

pub(crate) mod init;
pub mod lookup;
// The multiply-shift backend stays compiled on bmi2 targets so the
// equivalence tests can cross-check the strategies; only the facade decides
// which one answers queries.
#[cfg_attr(target_feature = "bmi2", allow(dead_code))]
pub(crate) mod magic;
// Both pext layouts are compiled so the compressed round trip can be tested
// against the full table; the feature flag only switches the facade.
#[cfg(target_feature = "bmi2")]
#[allow(dead_code)]
pub(crate) mod pext;
pub mod rays;
pub(crate) mod slider;

pub use lookup::{
    aligned, attacks, between_bb, bishop_attacks, king_attack, knight_attack, line_bb,
    pawn_attack, queen_attacks, rook_attacks, sq_dist,
};

/// Eagerly builds the slider attack tables of the compiled-in backend. The
/// build happens at most once per process; without this call it runs on the
/// first slider query instead.
pub fn init_attack_tables() {
    #[cfg(target_feature = "bmi2")]
    pext::init_tables();

    #[cfg(not(target_feature = "bmi2"))]
    magic::init_tables();
}
