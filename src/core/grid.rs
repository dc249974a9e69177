//! Tile grid loading and validation.
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("map has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("border cell ({x}, {y}) is not a wall")]
    OpenBorder { x: usize, y: usize },
    #[error("unknown map glyph {glyph:?} at line {line}, column {column}")]
    UnknownGlyph { glyph: char, line: usize, column: usize },
    #[error("could not read map {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 1 = wall, 0 = empty.
const SAMPLE_MAP: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 0, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 0, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Immutable wall grid. Only constructible with a solid wall border, so
/// rays and the player can never leave it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::Ragged { row, expected: width, found: cells.len() });
            }
        }
        for (y, cells) in rows.iter().enumerate() {
            for (x, &cell) in cells.iter().enumerate() {
                let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if on_border && cell != Cell::Wall {
                    return Err(GridError::OpenBorder { x, y });
                }
            }
        }
        Ok(Self { width, height, cells: rows.into_iter().flatten().collect() })
    }

    /// The built-in 10x10 arena.
    pub fn sample() -> Self {
        let cells = SAMPLE_MAP
            .iter()
            .flatten()
            .map(|&c| if c == 1 { Cell::Wall } else { Cell::Empty })
            .collect();
        Self { width: 10, height: 10, cells }
    }

    /// Parse the text map format: `#` or `1` is a wall, `.`, `0` or a space
    /// is empty. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (column, glyph) in line.chars().enumerate() {
                let cell = match glyph {
                    '#' | '1' => Cell::Wall,
                    '.' | '0' | ' ' => Cell::Empty,
                    _ => {
                        return Err(GridError::UnknownGlyph { glyph, line: line_no + 1, column: column + 1 });
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<Cell> {
        if i < self.width && j < self.height {
            Some(self.cells[j * self.width + i])
        } else {
            None
        }
    }

    /// Whether the continuous point `(x, y)` lies in a wall. Anything off the
    /// grid counts as wall.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return true;
        }
        let (i, j) = (x.floor(), y.floor());
        if i < 0.0 || j < 0.0 || i >= self.width as f32 || j >= self.height as f32 {
            return true;
        }
        self.cells[j as usize * self.width + i as usize] == Cell::Wall
    }

    /// Rows top to bottom, for map views.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_passes_validation() {
        let rows: Vec<Vec<Cell>> = Grid::sample().rows().map(|r| r.to_vec()).collect();
        let rebuilt = Grid::from_rows(rows).unwrap();
        assert_eq!(rebuilt, Grid::sample());
    }

    #[test]
    fn parse_accepts_both_glyph_sets() {
        let grid = Grid::parse("####\n#..#\n#00#\n1111\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 4));
        assert_eq!(grid.cell(1, 1), Some(Cell::Empty));
        assert_eq!(grid.cell(0, 3), Some(Cell::Wall));
        assert_eq!(grid.cell(4, 0), None);
    }

    #[test]
    fn open_border_is_rejected() {
        let err = Grid::parse("###\n#..\n###").unwrap_err();
        assert!(matches!(err, GridError::OpenBorder { x: 2, y: 1 }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::parse("####\n#.#\n####").unwrap_err();
        assert!(matches!(err, GridError::Ragged { row: 1, expected: 4, found: 3 }));
    }

    #[test]
    fn unknown_glyph_reports_position() {
        let err = Grid::parse("###\n#g#\n###").unwrap_err();
        assert!(matches!(err, GridError::UnknownGlyph { glyph: 'g', line: 2, column: 2 }));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(Grid::parse("\n\n"), Err(GridError::Empty)));
    }

    #[test]
    fn out_of_bounds_counts_as_wall() {
        let grid = Grid::sample();
        assert!(grid.is_wall(-0.1, 5.0));
        assert!(grid.is_wall(5.0, 10.0));
        assert!(grid.is_wall(f32::NAN, 1.5));
        assert!(!grid.is_wall(1.5, 1.5));
        assert!(grid.is_wall(4.5, 4.5));
    }
}
