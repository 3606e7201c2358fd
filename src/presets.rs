//! Catalogue of named seed patterns, and a reader for plaintext patterns.

use crate::{cell, CellId, Dims};

/// live cells of a pattern as (row, col), anchored at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

impl Preset {
    /// (rows, cols) of the bounding box.
    pub fn extent(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(row, col)| {
            (rows.max(row + 1), cols.max(col + 1))
        })
    }

    /// the pattern's cells translated to the middle of a grid. Patterns larger
    /// than the grid start at the origin and wrap around the torus, so some
    /// cells may land on the same position.
    pub fn centered(&self, dims: Dims) -> Vec<CellId> {
        let (rows, cols) = self.extent();
        let top = dims.rows().saturating_sub(rows) / 2;
        let left = dims.cols().saturating_sub(cols) / 2;
        self.cells
            .iter()
            .map(|&(row, col)| {
                dims.wrap(cell!(0, 0), (top + row) as i64, (left + col) as i64)
            })
            .collect()
    }
}

pub const BLINKER: Preset = Preset {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Preset = Preset {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Preset = Preset {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Preset = Preset {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const LWSS: Preset = Preset {
    name: "lwss",
    cells: &[
        (0, 1),
        (0, 4),
        (1, 0),
        (2, 0),
        (2, 4),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
    ],
};

#[rustfmt::skip]
pub const PULSAR: Preset = Preset {
    name: "pulsar",
    cells: &[
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

pub const R_PENTOMINO: Preset = Preset {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const DIEHARD: Preset = Preset {
    name: "diehard",
    cells: &[(0, 6), (1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7)],
};

pub const ACORN: Preset = Preset {
    name: "acorn",
    cells: &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
};

#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Preset = Preset {
    name: "gosper-glider-gun",
    cells: &[
        (0, 24),
        (1, 22), (1, 24),
        (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
        (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
        (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
        (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
        (6, 10), (6, 16), (6, 24),
        (7, 11), (7, 15),
        (8, 12), (8, 13),
    ],
};

pub const ALL: &[Preset] = &[
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    LWSS,
    PULSAR,
    R_PENTOMINO,
    DIEHARD,
    ACORN,
    GOSPER_GLIDER_GUN,
];

pub fn find(name: &str) -> Option<&'static Preset> {
    ALL.iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    ALL.iter().map(|preset| preset.name)
}

/// reads a plaintext pattern: `#`, `O` or `*` is alive, any other character is
/// dead, each line is a row. Lines starting with `!` are comments.
pub fn parse_plaintext(text: &str) -> Vec<CellId> {
    text.lines()
        .filter(|line| !line.starts_with('!'))
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, c)| matches!(c, '#' | 'O' | '*'))
                .map(move |(col, _)| cell!(row as u32, col as u32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = names().collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn no_duplicate_cells() {
        for preset in ALL {
            let mut cells = preset.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), preset.cells.len(), "{}", preset.name);
        }
    }

    #[test]
    fn extents() {
        assert_eq!(BLINKER.extent(), (1, 3));
        assert_eq!(PULSAR.extent(), (13, 13));
        assert_eq!(GOSPER_GLIDER_GUN.extent(), (9, 36));
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("Glider"), Some(&GLIDER));
        assert_eq!(find("nope"), None);
    }

    #[test]
    fn centered_in_grid() {
        let cells = BLINKER.centered(Dims::new(5, 5).unwrap());
        assert_eq!(cells, vec![cell!(2, 1), cell!(2, 2), cell!(2, 3)]);
    }

    #[test]
    fn oversized_pattern_wraps() {
        let dims = Dims::new(5, 5).unwrap();
        let cells = GOSPER_GLIDER_GUN.centered(dims);
        assert_eq!(cells.len(), GOSPER_GLIDER_GUN.cells.len());
        assert!(cells.iter().all(|&cell| dims.contains(cell)));
        // (2, 34) lands on column 34 % 5
        assert!(cells.contains(&cell!(2, 4)));
    }

    #[test]
    fn plaintext() {
        let text = "!Name: glider\n.O.\n..O\nOOO\n";
        let mut cells = parse_plaintext(text);
        cells.sort();
        let mut expected: Vec<_> = GLIDER
            .cells
            .iter()
            .map(|&(row, col)| cell!(row, col))
            .collect();
        expected.sort();
        assert_eq!(cells, expected);
    }
}
