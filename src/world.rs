use crate::{cell, CellId, Dims, NEIGHBOUR_OFFSETS};

/// the life transition rule.
pub fn next_state(current: bool, neighbour_count: u8) -> bool {
    match (current, neighbour_count) {
        (true, count) if count < 2 => false, // underpopulation
        (true, 2 | 3) => true,               // survival
        (true, _) => false,                  // overpopulation
        (false, 3) => true,                  // reproduction
        _ => false,
    }
}

/// a fixed-size toroidal grid of boolean cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![false; dims.area()],
        }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// panics if `cell` is outside the grid; callers validate through [`Dims::check`].
    pub fn get(&self, cell: CellId) -> bool {
        self.cells[self.dims.index(cell)]
    }

    /// writes `alive` and reports whether the stored value changed.
    pub fn set(&mut self, cell: CellId, alive: bool) -> bool {
        let index = self.dims.index(cell);
        let changed = self.cells[index] != alive;
        self.cells[index] = alive;
        changed
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// the 8 wrapped neighbour positions, N first then clockwise.
    pub fn neighbours(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.dims.wrap(cell, dr, dc))
    }

    /// on grids narrower than 3 along an axis, wrapped positions repeat and are
    /// counted once per offset.
    pub fn neighbour_count(&self, cell: CellId) -> u8 {
        self.neighbours(cell).filter(|&n| self.get(n)).count() as u8
    }

    pub fn actives(&self) -> Vec<CellId> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| self.cell_at(index))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// rows of cell states, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.dims.cols() as usize)
    }

    /// evaluates the rule over every cell. Reference for the incremental stepper.
    pub fn evolve_exhaustive(&self) -> Grid {
        let cells = (0..self.cells.len())
            .map(|index| {
                let cell = self.cell_at(index);
                next_state(self.cells[index], self.neighbour_count(cell))
            })
            .collect();
        Grid {
            dims: self.dims,
            cells,
        }
    }

    fn cell_at(&self, index: usize) -> CellId {
        let cols = self.dims.cols() as usize;
        cell!((index / cols) as u32, (index % cols) as u32)
    }
}

pub use dirty::{step, CandidateSet, DirtySet, StepReport};
mod dirty;

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u32, cols: u32, actives: &[(u32, u32)]) -> Grid {
        let mut grid = Grid::new(Dims::new(rows, cols).unwrap());
        for &(row, col) in actives {
            grid.set(cell!(row, col), true);
        }
        grid
    }

    #[test]
    fn rule_table() {
        let cases = [
            (true, 0, false),
            (true, 1, false),
            (true, 2, true),
            (true, 3, true),
            (true, 4, false),
            (true, 8, false),
            (false, 0, false),
            (false, 2, false),
            (false, 3, true),
            (false, 4, false),
            (false, 8, false),
        ];
        for (current, count, expected) in cases {
            assert_eq!(next_state(current, count), expected, "({current}, {count})");
            assert_eq!(next_state(current, count), next_state(current, count));
        }
    }

    #[test]
    fn corner_wraps_to_opposite_corner() {
        let grid = grid(5, 7, &[(4, 6)]);
        assert_eq!(grid.neighbour_count(cell!(0, 0)), 1);
        let grid = grid_with_ring();
        assert_eq!(grid.neighbour_count(cell!(0, 0)), 8);
    }

    fn grid_with_ring() -> Grid {
        grid(
            4,
            4,
            &[(3, 3), (3, 0), (3, 1), (0, 3), (0, 1), (1, 3), (1, 0), (1, 1)],
        )
    }

    #[test]
    fn neighbour_order() {
        let grid = grid(4, 4, &[]);
        let order: Vec<_> = grid.neighbours(cell!(1, 1)).collect();
        assert_eq!(
            order,
            vec![
                cell!(0, 1),
                cell!(0, 2),
                cell!(1, 2),
                cell!(2, 2),
                cell!(2, 1),
                cell!(2, 0),
                cell!(1, 0),
                cell!(0, 0),
            ]
        );
    }

    #[test]
    fn counting_does_not_mutate() {
        let grid = grid(3, 3, &[(0, 0), (1, 1)]);
        let before = grid.clone();
        grid.neighbour_count(cell!(2, 2));
        assert_eq!(grid, before);
    }

    #[test]
    fn set_reports_change() {
        let mut grid = grid(2, 2, &[]);
        assert!(grid.set(cell!(0, 1), true));
        assert!(!grid.set(cell!(0, 1), true));
        assert!(grid.set(cell!(0, 1), false));
        assert!(!grid.set(cell!(1, 1), false));
    }

    #[test]
    fn actives_and_rows() {
        let grid = grid(2, 3, &[(0, 2), (1, 0)]);
        assert_eq!(grid.actives(), vec![cell!(0, 2), cell!(1, 0)]);
        assert_eq!(grid.population(), 2);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[false, false, true][..], &[true, false, false][..]]);
    }

    #[test]
    fn exhaustive_blinker() {
        let horizontal = grid(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(horizontal.evolve_exhaustive(), vertical);
        assert_eq!(vertical.evolve_exhaustive(), horizontal);
    }
}
