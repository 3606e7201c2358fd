use crate::EngineError;

/// identifies one cell of a grid by zero-based row and column.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct CellId {
    pub row: u32,
    pub col: u32,
}

#[macro_export]
macro_rules! cell {
    ($row:expr, $col:expr) => {
        $crate::CellId {
            row: $row,
            col: $col,
        }
    };
}

impl CellId {
    /// packs both coordinates into a single key, row in the high half.
    pub fn packed(self) -> u64 {
        ((self.row as u64) << 32) | self.col as u64
    }

    pub fn from_packed(key: u64) -> Self {
        cell!((key >> 32) as u32, key as u32)
    }
}

/// N, NE, E, SE, S, SW, W, NW as (row delta, col delta).
pub const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// grid dimensions, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    rows: u32,
    cols: u32,
}

impl Default for Dims {
    fn default() -> Self {
        Self { rows: 32, cols: 64 }
    }
}

impl Dims {
    pub fn new(rows: u32, cols: u32) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn contains(&self, cell: CellId) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn check(&self, cell: CellId) -> Result<CellId, EngineError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(EngineError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// moves `cell` by the signed offset, wrapping around both axes.
    pub fn wrap(&self, cell: CellId, row_delta: i64, col_delta: i64) -> CellId {
        let row = (cell.row as i64 + row_delta).rem_euclid(self.rows as i64);
        let col = (cell.col as i64 + col_delta).rem_euclid(self.cols as i64);
        cell!(row as u32, col as u32)
    }

    /// row-major index of an in-bounds cell.
    pub fn index(&self, cell: CellId) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }
}

#[test]
fn test_wrap() {
    let dims = Dims::new(4, 5).unwrap();
    assert_eq!(dims.wrap(cell!(0, 0), -1, -1), cell!(3, 4));
    assert_eq!(dims.wrap(cell!(3, 4), 1, 1), cell!(0, 0));
    assert_eq!(dims.wrap(cell!(2, 2), 1, -1), cell!(3, 1));
}

#[test]
fn test_wrap_single_row() {
    let dims = Dims::new(1, 3).unwrap();
    assert_eq!(dims.wrap(cell!(0, 1), -1, 0), cell!(0, 1));
    assert_eq!(dims.wrap(cell!(0, 0), 1, -1), cell!(0, 2));
}

#[test]
fn test_packed() {
    let cell = cell!(7, u32::MAX);
    assert_eq!(CellId::from_packed(cell.packed()), cell);
    assert_ne!(cell!(1, 2).packed(), cell!(2, 1).packed());
}

#[test]
fn test_zero_dims() {
    assert!(matches!(
        Dims::new(0, 3),
        Err(EngineError::InvalidDimensions { rows: 0, cols: 3 })
    ));
}

#[test]
fn test_check() {
    let dims = Dims::new(2, 2).unwrap();
    assert_eq!(dims.check(cell!(1, 1)).unwrap(), cell!(1, 1));
    assert!(dims.check(cell!(2, 0)).is_err());
}
