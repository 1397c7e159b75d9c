use crate::{NavSurface, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    x: i32,
    z: i32,
}

/// Walkability grid over the ground plane, anchored at the world origin.
///
/// Cells outside the grid count as blocked. Height (`y`) is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavGrid {
    width: i32,
    depth: i32,
    cell_size: f32,
    blocked: Vec<bool>,
}

impl NavGrid {
    /// # Panics
    ///
    /// Panics on an empty grid, a non-positive cell size, or dimensions whose cell count
    /// does not fit in `i32`.
    pub fn new(width: u32, depth: u32, cell_size: f32) -> Self {
        assert!(width > 0 && depth > 0, "grid must be non-empty");
        assert!(cell_size > 0.0, "cell_size must be > 0");
        let (Ok(width), Ok(depth)) = (i32::try_from(width), i32::try_from(depth)) else {
            panic!("grid dimensions {width}x{depth} exceed i32 cell coordinates");
        };
        let Some(cells) = width.checked_mul(depth) else {
            panic!("grid of {width}x{depth} cells is too large");
        };
        Self {
            width,
            depth,
            cell_size,
            blocked: vec![false; cells as usize],
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn set_blocked(&mut self, x: i32, z: i32, blocked: bool) {
        if let Some(idx) = self.idx(Cell { x, z }) {
            self.blocked[idx] = blocked;
        }
    }

    pub fn is_blocked(&self, x: i32, z: i32) -> bool {
        self.idx(Cell { x, z })
            .map(|idx| self.blocked[idx])
            .unwrap_or(true)
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        let in_bounds = cell.x >= 0 && cell.z >= 0 && cell.x < self.width && cell.z < self.depth;
        in_bounds.then(|| (cell.z * self.width + cell.x) as usize)
    }

    fn walkable(&self, cell: Cell) -> bool {
        !self.is_blocked(cell.x, cell.z)
    }

    fn cell_of(&self, p: Vec3) -> Cell {
        Cell {
            x: (p.x / self.cell_size).floor() as i32,
            z: (p.z / self.cell_size).floor() as i32,
        }
    }

    fn cell_center(&self, cell: Cell, y: f32) -> Vec3 {
        Vec3::new(
            (cell.x as f32 + 0.5) * self.cell_size,
            y,
            (cell.z as f32 + 0.5) * self.cell_size,
        )
    }
}

impl NavSurface for NavGrid {
    /// Returns `point` itself when its cell is walkable, otherwise the nearest walkable cell
    /// centre within `max_distance` (ties broken by scan order, so results are deterministic).
    fn sample_position(&self, point: Vec3, max_distance: f32) -> Option<Vec3> {
        let origin = self.cell_of(point);
        if self.walkable(origin) {
            return Some(point);
        }

        let max_distance = max_distance.max(0.0);
        let reach = (max_distance / self.cell_size).ceil() as i32 + 1;

        let mut best: Option<(f32, Vec3)> = None;
        for dz in -reach..=reach {
            for dx in -reach..=reach {
                let cell = Cell {
                    x: origin.x + dx,
                    z: origin.z + dz,
                };
                if !self.walkable(cell) {
                    continue;
                }
                let center = self.cell_center(cell, point.y);
                let dist = center.horizontal_distance(point);
                if dist > max_distance {
                    continue;
                }
                if best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, center));
                }
            }
        }

        best.map(|(_, p)| p)
    }
}
