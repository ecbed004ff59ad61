//! Stepwise ray casting, the slow reference for every attack table.
//!
//! Walks outward one square at a time until the board edge or the first
//! blocker, which is included in the result. The table builders use these
//! functions to fill their entries and the tests use them to cross-check
//! every fast indexing strategy.

use crate::core::{Bitboard, Direction, PieceType, Square};

/// Casts a single ray from `origin` in `dir`, stopping at the board edge or
/// at the first square set in `occ`. The blocking square is part of the
/// result; the occupancy of `origin` itself is irrelevant.
pub const fn cast_ray(dir: Direction, origin: Square, occ: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let mut sq = origin;

    loop {
        sq = match sq.add(dir) {
            Ok(next) => next,
            Err(_) => break,
        };
        attacks.0 |= sq.bb().0;
        if occ.contains(sq) {
            break;
        }
    }

    attacks
}

/// Returns the four ray directions of a slider piece type.
pub const fn slider_directions(pt: PieceType) -> [Direction; 4] {
    use Direction::*;
    match pt {
        PieceType::Rook => [N, E, W, S],
        PieceType::Bishop => [NE, NW, SE, SW],
        _ => unreachable!(),
    }
}

/// Unions the four rays of a rook or bishop on `origin`, blocked by `occ`.
pub const fn cast_slider(pt: PieceType, origin: Square, occ: Bitboard) -> Bitboard {
    let dirs = slider_directions(pt);

    let mut attacks = Bitboard::EMPTY;
    let mut i = 0;
    while i < dirs.len() {
        attacks.0 |= cast_ray(dirs[i], origin, occ).0;
        i += 1;
    }

    attacks
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cast_ray_to_edge() {
        assert_eq!(
            cast_ray(Direction::N, Square::D4, Bitboard::EMPTY),
            Bitboard::from([Square::D5, Square::D6, Square::D7, Square::D8])
        );
        assert_eq!(
            cast_ray(Direction::W, Square::D4, Bitboard::EMPTY),
            Bitboard::from([Square::C4, Square::B4, Square::A4])
        );
        assert_eq!(
            cast_ray(Direction::SW, Square::D4, Bitboard::EMPTY),
            Bitboard::from([Square::C3, Square::B2, Square::A1])
        );
    }

    #[test]
    fn test_cast_ray_from_edge_is_empty() {
        assert_eq!(
            cast_ray(Direction::E, Square::H4, Bitboard::EMPTY),
            Bitboard::EMPTY
        );
        assert_eq!(
            cast_ray(Direction::N, Square::E8, Bitboard::EMPTY),
            Bitboard::EMPTY
        );
        assert_eq!(
            cast_ray(Direction::SW, Square::A1, Bitboard::EMPTY),
            Bitboard::EMPTY
        );
    }

    #[test]
    fn test_cast_ray_blocker_is_included() {
        let occ = Square::D6.bb();
        assert_eq!(
            cast_ray(Direction::N, Square::D4, occ),
            Bitboard::from([Square::D5, Square::D6])
        );

        // A blocker right next to the origin yields just that square.
        let occ = Square::D5.bb();
        assert_eq!(cast_ray(Direction::N, Square::D4, occ), Square::D5.bb());
    }

    #[test]
    fn test_cast_ray_origin_occupancy_is_ignored() {
        let occ = Square::D4.bb() | Square::D6.bb();
        assert_eq!(
            cast_ray(Direction::N, Square::D4, occ),
            Bitboard::from([Square::D5, Square::D6])
        );
    }

    #[test]
    fn test_rook_on_open_board() {
        let expected = (Square::D4.file().bb() | Square::D4.rank().bb()) ^ Square::D4.bb();
        assert_eq!(
            cast_slider(PieceType::Rook, Square::D4, Bitboard::EMPTY),
            expected
        );
    }

    #[test]
    fn test_bishop_immediately_blocked() {
        assert_eq!(
            cast_slider(PieceType::Bishop, Square::A1, Square::B2.bb()),
            Square::B2.bb()
        );
    }

    #[test]
    fn test_bishop_on_open_board() {
        assert_eq!(
            cast_slider(PieceType::Bishop, Square::A1, Bitboard::EMPTY),
            (Square::A1.diag_bb() | Square::A1.anti_diag_bb()) ^ Square::A1.bb()
        );
    }
}
