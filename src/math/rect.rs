//! Integer cell rectangle on a 2-D grid

use crate::core::types::{IVec2, Vec2};

/// Rectangle of grid cells defined by min and max corners, both inclusive.
///
/// A rect with min > max on either axis covers no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl GridRect {
    /// Create a rect from min and max cells (inclusive)
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Bounding box of a disc, clipped to `[0, width) x [0, height)`.
    ///
    /// Covers every integer cell of the circle's axis-aligned bounding box,
    /// including the cells on the +radius rim. Returns an empty rect when the
    /// disc lies entirely outside the grid.
    pub fn circle_bounds(center: Vec2, radius: f32, width: u32, height: u32) -> Self {
        let radius = radius.max(0.0);
        let min = IVec2::new(
            (center.x - radius).floor().max(0.0) as i32,
            (center.y - radius).floor().max(0.0) as i32,
        );
        let max = IVec2::new(
            ((center.x + radius).ceil() as i32).min(width as i32 - 1),
            ((center.y + radius).ceil() as i32).min(height as i32 - 1),
        );
        Self { min, max }
    }

    /// Check if the rect covers no cells
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.max.x - self.min.x + 1) as usize) * ((self.max.y - self.min.y + 1) as usize)
    }

    /// Check if a cell lies inside the rect
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x &&
        cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Iterate covered cells in row-major order
    pub fn cells(self) -> impl Iterator<Item = IVec2> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| IVec2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let rect = GridRect::new(IVec2::new(1, 2), IVec2::new(3, 4));
        assert!(!rect.is_empty());
        assert_eq!(rect.cell_count(), 9);
    }

    #[test]
    fn test_contains() {
        let rect = GridRect::new(IVec2::ZERO, IVec2::new(2, 2));
        assert!(rect.contains(IVec2::new(0, 0)));
        assert!(rect.contains(IVec2::new(2, 2)));
        assert!(!rect.contains(IVec2::new(3, 0)));
        assert!(!rect.contains(IVec2::new(0, -1)));
    }

    #[test]
    fn test_circle_bounds_interior() {
        // Disc at (5,5) r=2 on a 10x10 grid spans cells 3..=7 on both axes
        let rect = GridRect::circle_bounds(Vec2::new(5.0, 5.0), 2.0, 10, 10);
        assert_eq!(rect.min, IVec2::new(3, 3));
        assert_eq!(rect.max, IVec2::new(7, 7));
        assert_eq!(rect.cell_count(), 25);
    }

    #[test]
    fn test_circle_bounds_clipped() {
        let rect = GridRect::circle_bounds(Vec2::new(0.5, 9.5), 2.0, 10, 10);
        assert_eq!(rect.min, IVec2::new(0, 7));
        assert_eq!(rect.max, IVec2::new(3, 9));
    }

    #[test]
    fn test_circle_bounds_outside_is_empty() {
        let rect = GridRect::circle_bounds(Vec2::new(-5.0, -5.0), 2.0, 10, 10);
        assert!(rect.is_empty());
        assert_eq!(rect.cell_count(), 0);
        assert_eq!(rect.cells().count(), 0);

        let rect = GridRect::circle_bounds(Vec2::new(50.0, 5.0), 2.0, 10, 10);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_circle_bounds_zero_radius() {
        let rect = GridRect::circle_bounds(Vec2::new(5.0, 5.0), 0.0, 10, 10);
        assert_eq!(rect.min, IVec2::new(5, 5));
        assert_eq!(rect.max, IVec2::new(5, 5));
        assert_eq!(rect.cell_count(), 1);
    }

    #[test]
    fn test_circle_bounds_negative_radius() {
        // Treated as zero
        let rect = GridRect::circle_bounds(Vec2::new(5.0, 5.0), -3.0, 10, 10);
        assert_eq!(rect.cell_count(), 1);
    }

    #[test]
    fn test_cells_row_major() {
        let rect = GridRect::new(IVec2::new(1, 1), IVec2::new(2, 2));
        let cells: Vec<IVec2> = rect.cells().collect();
        assert_eq!(cells, vec![
            IVec2::new(1, 1),
            IVec2::new(2, 1),
            IVec2::new(1, 2),
            IVec2::new(2, 2),
        ]);
    }
}
