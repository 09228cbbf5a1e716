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

// A puzzle file starts with the rows of the grid, followed by a
// separator line and then one word per line:
//
// CATXO
// ARBXO
// TREXO
// XXXXO
// OOOOO
//
// CAT
// TREE

use std::fmt;
use std::str::FromStr;
use super::grid::{self, Grid};

pub const GRID_ROWS: usize = 5;

#[derive(Debug)]
pub struct PuzzleData {
    pub grid: Grid,
    pub words: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    GridError(grid::Error),
    TooFewLines {
        expected: usize,
        found: usize,
    },
}

impl From<grid::Error> for Error {
    fn from(e: grid::Error) -> Error {
        Error::GridError(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::GridError(e) => e.fmt(f),
            Error::TooFewLines { expected, found } => write!(
                f,
                "expected {} grid rows but the puzzle only has {} lines",
                expected,
                found,
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::GridError(e) => Some(e),
            Error::TooFewLines { .. } => None,
        }
    }
}

impl PuzzleData {
    pub fn parse(s: &str, grid_rows: usize) -> Result<PuzzleData, Error> {
        let lines = s.lines().map(str::trim).collect::<Vec<_>>();

        if lines.len() < grid_rows {
            return Err(Error::TooFewLines {
                expected: grid_rows,
                found: lines.len(),
            });
        }

        let grid = Grid::from_rows(&lines[0..grid_rows])?;

        if let Some(separator) = lines.get(grid_rows) {
            if !separator.is_empty() {
                log::warn!(
                    "ignoring line {} of the puzzle: “{}”",
                    grid_rows + 1,
                    separator,
                );
            }
        }

        let words = lines.iter()
            .skip(grid_rows + 1)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect::<Vec<_>>();

        log::debug!(
            "loaded a {}×{} grid with {} words",
            grid.width(),
            grid.height(),
            words.len(),
        );

        Ok(PuzzleData { grid, words })
    }
}

impl FromStr for PuzzleData {
    type Err = Error;

    fn from_str(s: &str) -> Result<PuzzleData, Error> {
        PuzzleData::parse(s, GRID_ROWS)
    }
}
