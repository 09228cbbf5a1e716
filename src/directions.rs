// Wordsearch – A word search solver
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

// Words can run in a straight line along any of the eight directions
// of a square grid. The offsets are (x, y) where x is the column and
// y is the row, so the first entry reads left to right and the second
// reads top to bottom.

pub const N_DIRECTIONS: u8 = 8;

static OFFSETS: [(i32, i32); N_DIRECTIONS as usize] = [
    (1, 0),   // right
    (0, 1),   // down
    (-1, 0),  // left
    (0, -1),  // up
    (1, 1),   // down right
    (-1, 1),  // down left
    (1, -1),  // up right
    (-1, -1), // up left
];

pub fn offset(direction: u8) -> (i32, i32) {
    assert!(direction < N_DIRECTIONS);

    OFFSETS[direction as usize]
}

// Move `distance` letters away from (x, y) in the given direction.
pub fn step(x: u32, y: u32, direction: u8, distance: u32) -> (u32, u32) {
    let (x_off, y_off) = offset(direction);
    let distance = distance as i32;

    (
        x.wrapping_add_signed(x_off.wrapping_mul(distance)),
        y.wrapping_add_signed(y_off.wrapping_mul(distance)),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_all_directions() {
        assert_eq!(step(1, 1, 0, 1), (2, 1));
        assert_eq!(step(1, 1, 1, 1), (1, 2));
        assert_eq!(step(1, 1, 2, 1), (0, 1));
        assert_eq!(step(1, 1, 3, 1), (1, 0));
        assert_eq!(step(1, 1, 4, 1), (2, 2));
        assert_eq!(step(1, 1, 5, 1), (0, 2));
        assert_eq!(step(1, 1, 6, 1), (2, 0));
        assert_eq!(step(1, 1, 7, 1), (0, 0));
    }

    #[test]
    fn distance() {
        assert_eq!(step(3, 4, 0, 0), (3, 4));
        assert_eq!(step(3, 4, 4, 2), (5, 6));
        assert_eq!(step(3, 4, 7, 3), (0, 1));
    }

    #[test]
    fn overflow() {
        // Going off the top or left of the grid should wrap the
        // coordinates around the integer maximum so that the rest of
        // the program can easily detect invalid positions with just a
        // single comparison against the dimensions of the grid.
        assert_eq!(step(0, 0, 2, 1), (u32::MAX, 0));
        assert_eq!(step(0, 0, 3, 1), (0, u32::MAX));
        assert_eq!(step(1, 1, 7, 2), (u32::MAX, u32::MAX));
    }

    #[test]
    fn all_distinct_unit_vectors() {
        for a in 0..N_DIRECTIONS {
            let (x, y) = offset(a);

            assert!(x.abs() <= 1 && y.abs() <= 1);
            assert!((x, y) != (0, 0));

            for b in a + 1..N_DIRECTIONS {
                assert_ne!(offset(a), offset(b));
            }
        }
    }
}
