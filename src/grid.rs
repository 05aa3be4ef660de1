use std::fmt;

use crate::pref::{format_pref, Pref};

/// A grid preference profile. Cells are stored row-major; `None` marks a voter
/// whose preferences have not been decided yet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Pref>>,
}
impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0);
        Grid { rows, cols, cells: vec![None; rows * cols] }
    }
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<Pref>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let mut res = Grid::new(rows.len(), cols);
        for (r, row) in rows.into_iter().enumerate() {
            assert_eq!(row.len(), cols);
            for (c, p) in row.into_iter().enumerate() {
                res.set(r, c, p);
            }
        }
        res
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn get(&self, r: usize, c: usize) -> Option<&Pref> {
        self.cells[r * self.cols + c].as_ref()
    }
    pub fn set(&mut self, r: usize, c: usize, p: Pref) {
        self.cells[r * self.cols + c] = Some(p);
    }
    pub fn clear(&mut self, r: usize, c: usize) {
        self.cells[r * self.cols + c] = None;
    }

    /// Assigned cells in row-major order, with their coordinates.
    pub fn assigned(&self) -> impl Iterator<Item = (i32, i32, &Pref)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, p)| {
            p.as_ref().map(|p| ((i / self.cols) as i32, (i % self.cols) as i32, p))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                match self.get(r, c) {
                    Some(p) => write!(f, "{} ", format_pref(p))?,
                    None => write!(f, "? ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "####")
    }
}

#[test]
fn test_grid_set_clear() {
    let mut g = Grid::new(2, 3);
    assert_eq!(g.assigned().count(), 0);
    g.set(1, 2, vec![1, 0]);
    assert_eq!(g.get(1, 2), Some(&vec![1, 0]));
    assert_eq!(g.assigned().map(|(r, c, _)| (r, c)).collect::<Vec<_>>(), vec![(1, 2)]);
    g.clear(1, 2);
    assert_eq!(g.get(1, 2), None);
}
#[test]
fn test_grid_display() {
    let mut g = Grid::new(2, 2);
    g.set(0, 0, vec![0, 1, 2]);
    g.set(1, 1, vec![2, 1, 0]);
    assert_eq!(g.to_string(), "012 ? \n? 210 \n####");
}
