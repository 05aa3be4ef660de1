//! Queries over a (possibly partial) grid profile. None of these mutate the grid;
//! every bounding box is recomputed from the live cells.

use itertools::Itertools;

use crate::grid::Grid;
use crate::pref::{crossing_count, prefers};
use crate::rect::Rect;

/// Bounding box of all assigned voters preferring `c0` to `c1`.
pub fn preference_bounding_box(g: &Grid, c0: usize, c1: usize) -> Rect {
    g.assigned().filter(|(_, _, p)| prefers(p, c0, c1)).fold(Rect::empty(), |acc, (r, c, _)| acc.add(r, c))
}

/// Bounding box of all assigned voters whose top choice is `cand`.
pub fn dominance_box(g: &Grid, cand: usize) -> Rect {
    g.assigned().filter(|(_, _, p)| p[0] == cand).fold(Rect::empty(), |acc, (r, c, _)| acc.add(r, c))
}

fn dominance_boxes(g: &Grid, candidates: usize) -> Vec<Rect> {
    (0..candidates).map(|c| dominance_box(g, c)).collect()
}

/// Returns false iff the profile certainly cannot be completed to a single-crossing one.
pub fn is_single_crossing_feasible(g: &Grid, candidates: usize) -> bool {
    (0..candidates).tuple_combinations().all(|(c0, c1)| {
        !preference_bounding_box(g, c0, c1).overlaps(&preference_bounding_box(g, c1, c0))
    })
}

/// Every voter ranks candidate 0 first. Voter (0, 0) is pinned to the identity
/// ranking, so candidate 0 is the only one that can dominate the whole grid.
///
/// On feasible profiles this is the same as the dominance box of 0 spanning the
/// grid; counting the voters also rejects infeasible grids whose box happens to.
pub fn is_monodominated(g: &Grid) -> bool {
    g.assigned().filter(|(_, _, p)| p[0] == 0).count() == g.rows() * g.cols()
}

/// Some candidate's dominance box touches none of the four sides of the grid.
pub fn has_isolated_dominance_region(g: &Grid, candidates: usize) -> bool {
    let (n, m) = (g.rows() as i32, g.cols() as i32);
    dominance_boxes(g, candidates)
        .into_iter()
        .filter(|r| !r.is_empty())
        .any(|r| r.r0 > 0 && r.r1 < n - 1 && r.c0 > 0 && r.c1 < m - 1)
}

/// Some horizontal or vertical grid line crosses no dominance box, i.e. the
/// tiling by dominance regions can be sliced at the top level.
pub fn admits_split_line(g: &Grid, candidates: usize) -> bool {
    let boxes = dominance_boxes(g, candidates);
    let horizontal = (0..g.rows() as i32 - 1).any(|i| boxes.iter().all(|b| !b.intersects_horizontal(i)));
    horizontal || (0..g.cols() as i32 - 1).any(|j| boxes.iter().all(|b| !b.intersects_vertical(j)))
}

/// Two grid-adjacent assigned voters disagree on more than one candidate pair.
pub fn has_fast_cross(g: &Grid, candidates: usize) -> bool {
    let (n, m) = (g.rows(), g.cols());
    let crosses = |a: (usize, usize), b: (usize, usize)| match (g.get(a.0, a.1), g.get(b.0, b.1)) {
        (Some(p), Some(q)) => crossing_count(p, q, candidates) > 1,
        _ => false,
    };
    (0..n).cartesian_product(0..m).any(|(i, j)| {
        (i + 1 < n && crosses((i, j), (i + 1, j))) || (j + 1 < m && crosses((i, j), (i, j + 1)))
    })
}

#[cfg(test)]
pub(crate) fn parse_grid(rows: &[&str]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.split_whitespace().map(|tok| tok.chars().map(|ch| ch.to_digit(10).unwrap() as usize).collect()).collect())
            .collect(),
    )
}
