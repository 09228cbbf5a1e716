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

use std::fmt;

#[derive(Debug)]
pub struct Grid {
    values: Box<[char]>,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    IrregularRow {
        row: usize,
        width: usize,
        expected: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "empty grid"),
            Error::IrregularRow { row, width, expected } => write!(
                f,
                "row {} has {} letters but the grid is {} wide",
                row + 1,
                width,
                expected,
            ),
        }
    }
}

impl std::error::Error for Error {}

impl Grid {
    // One row per line. Surrounding whitespace on each line and any
    // trailing blank lines are ignored.
    pub fn new(s: &str) -> Result<Grid, Error> {
        let mut lines = s.lines().map(str::trim).collect::<Vec<_>>();

        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        Grid::from_rows(lines)
    }

    pub fn from_rows<I, T>(rows: I) -> Result<Grid, Error>
        where I: IntoIterator<Item = T>,
              T: AsRef<str>
    {
        let mut values = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let start = values.len();

            values.extend(line.as_ref().chars());

            let row_width = values.len() - start;

            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(Error::IrregularRow {
                        row,
                        width: row_width,
                        expected,
                    });
                },
                Some(_) => (),
            }

            height += 1;
        }

        let width = width.unwrap_or(0);

        if width < 1 {
            return Err(Error::EmptyGrid);
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn at(&self, x: u32, y: u32) -> char {
        assert!(x < self.width);

        self.values[(y * self.width + x) as usize]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.values.chunks(self.width as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for &ch in row {
                write!(f, "{}", ch)?;
            }
        }

        Ok(())
    }
}
