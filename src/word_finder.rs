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

use super::grid::Grid;
use super::directions::{self, N_DIRECTIONS};
use super::report::Report;

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn matches_in_direction(
    grid: &Grid,
    word: &[char],
    start_x: u32, start_y: u32,
    direction: u8,
) -> bool {
    word.iter().enumerate().all(|(i, &letter)| {
        let (x, y) = directions::step(start_x, start_y, direction, i as u32);

        // Positions off the top or left wrap around to huge values so
        // this also catches them
        x < grid.width() &&
            y < grid.height() &&
            same_letter(grid.at(x, y), letter)
    })
}

/// Returns whether `word` can be read in a straight line starting at
/// the given position, trying each direction in turn.
pub fn find_from_position(
    grid: &Grid,
    word: &[char],
    start_x: u32, start_y: u32,
) -> bool {
    !word.is_empty() &&
        (0..N_DIRECTIONS).any(|direction| {
            matches_in_direction(grid, word, start_x, start_y, direction)
        })
}

/// Returns whether `word` appears anywhere in the grid. Letters are
/// compared case-insensitively. An empty word is never found.
pub fn find(grid: &Grid, word: &str) -> bool {
    let word = word.chars().collect::<Vec<char>>();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if find_from_position(grid, &word, x, y) {
                return true;
            }
        }
    }

    false
}

/// Searches for each word independently and collects the results in
/// the order the words were given. A repeated word only gets one entry
/// in the report.
pub fn find_many<I, T>(grid: &Grid, words: I) -> Report
    where I: IntoIterator<Item = T>,
          T: AsRef<str>
{
    let mut report = Report::new();

    for word in words {
        let word = word.as_ref();
        let found = find(grid, word);

        log::debug!("{}: {}", word, if found { "found" } else { "not found" });

        report.insert(word.to_string(), found);
    }

    report
}
