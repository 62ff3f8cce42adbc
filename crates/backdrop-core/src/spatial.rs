//! Neighbour search for the swarm links.
//!
//! Small swarms are checked pair by pair. Past [`SPATIAL_INDEX_THRESHOLD`]
//! points a uniform grid with cells as wide as the link distance limits each
//! point to the 3x3 block of cells around it. Both paths produce the same
//! links in the same order.

use crate::constants::SPATIAL_INDEX_THRESHOLD;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// Two points closer than the link distance, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

type Bucket = SmallVec<[usize; 8]>;

#[derive(Clone, Debug, Default)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: FnvHashMap<(i32, i32), Bucket>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FnvHashMap::default(),
        }
    }

    /// Empty every bucket, keeping allocations unless the cell size changes.
    pub fn reset(&mut self, cell_size: f32) {
        if cell_size != self.cell_size {
            self.cells.clear();
            self.cell_size = cell_size;
        } else {
            for bucket in self.cells.values_mut() {
                bucket.clear();
            }
        }
    }

    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, index: usize, pos: Vec2) {
        let cell = self.cell_of(pos);
        self.cells.entry(cell).or_default().push(index);
    }

    /// Indices stored in the 3x3 block of cells around `pos`.
    pub fn neighbors(&self, pos: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = self.cell_of(pos);
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter_map(move |(dx, dy)| {
                self.cells
                    .get(&(cx.saturating_add(dx), cy.saturating_add(dy)))
            })
            .flat_map(|bucket| bucket.iter().copied())
    }
}

/// Collect every pair of `positions` no further apart than `max_distance`.
pub fn find_links(
    positions: &[Vec2],
    max_distance: f32,
    grid: &mut SpatialGrid,
    out: &mut Vec<Link>,
) {
    out.clear();
    if !(max_distance > 0.0) {
        return;
    }
    if positions.len() <= SPATIAL_INDEX_THRESHOLD {
        for (a, pa) in positions.iter().enumerate() {
            for (b, pb) in positions.iter().enumerate().skip(a + 1) {
                let distance = pa.distance(*pb);
                if distance <= max_distance {
                    out.push(Link { a, b, distance });
                }
            }
        }
        return;
    }

    grid.reset(max_distance);
    for (i, p) in positions.iter().enumerate() {
        grid.insert(i, *p);
    }
    for (a, pa) in positions.iter().enumerate() {
        for b in grid.neighbors(*pa) {
            if b <= a {
                continue;
            }
            let distance = pa.distance(positions[b]);
            if distance <= max_distance {
                out.push(Link { a, b, distance });
            }
        }
    }
    out.sort_unstable_by_key(|l| (l.a, l.b));
}
