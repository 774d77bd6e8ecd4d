//! Cuttable grass field: occupancy grid plus renderable mask.
//!
//! `GrassField` owns the authoritative `OccupancyGrid` and its committed
//! `RenderMask`. Cuts mutate the grid immediately; the mask is only rebuilt
//! when a cut crosses the commit threshold (or on an explicit `commit`),
//! since the rebuild touches the whole mask rather than the changed region.

use crate::core::types::{Result, Vec2};
use crate::grass::config::GrassFieldConfig;
use crate::grass::grid::OccupancyGrid;
use crate::grass::mask::RenderMask;
use crate::math::GridRect;
use crate::terrain::detail::DetailSnapshot;

/// Result of a single cut call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CutOutcome {
    /// Cells flipped from present to cut by this call.
    pub cells_cut: u32,
    /// Crossed the particle threshold; caller should play a burst effect.
    pub spawn_particles: bool,
    /// Crossed the commit threshold; the mask was rebuilt before returning.
    pub committed: bool,
}

impl CutOutcome {
    /// Whether the call changed anything.
    pub fn any_cut(self) -> bool {
        self.cells_cut > 0
    }
}

/// Cuttable grass layer for one terrain.
///
/// A value of this type is always ready to cut: the only constructor runs
/// the full density walk, so there is no observable uninitialized state.
#[derive(Clone)]
pub struct GrassField {
    config: GrassFieldConfig,
    grid: OccupancyGrid,
    mask: RenderMask,
    /// Grid holds flips the mask has not seen yet.
    mask_stale: bool,
}

impl GrassField {
    /// Build a field from a terrain detail snapshot.
    ///
    /// Walks the detail layers on `precision_stride` in each axis, sums
    /// density across layers at each sampled coordinate and projects it onto
    /// the grid by linear scaling. A cell whose summed density exceeds
    /// `density_cutoff` starts with no grass; cells the stride never visits
    /// keep the default grass-present state. Deterministic for identical
    /// snapshots.
    pub fn from_details(snapshot: &DetailSnapshot, config: GrassFieldConfig) -> Result<Self> {
        config.validate()?;

        let width = snapshot.terrain_width();
        let depth = snapshot.terrain_depth();
        let mut grid = OccupancyGrid::new_filled(width, depth);

        let sample_width = snapshot.sample_width();
        let sample_height = snapshot.sample_height();
        for sample_x in (0..sample_width).step_by(config.precision_stride) {
            for sample_y in (0..sample_height).step_by(config.precision_stride) {
                let grid_x = (sample_x as f32 / sample_width as f32 * width as f32) as u32;
                let grid_y = (sample_y as f32 / sample_height as f32 * depth as f32) as u32;
                let dense = snapshot.stacked_count(sample_x, sample_y) > config.density_cutoff;
                grid.set(grid_x, grid_y, !dense);
            }
        }

        let mask = RenderMask::from_grid(&grid);
        log::debug!(
            "grass field {}x{}: {} of {} cells start with grass",
            width,
            depth,
            grid.present_count(),
            (width as usize) * (depth as usize)
        );

        Ok(Self { config, grid, mask, mask_stale: false })
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn config(&self) -> &GrassFieldConfig {
        &self.config
    }

    /// Whether grass is present at a cell.
    pub fn grass_at(&self, x: u32, y: u32) -> bool {
        self.grid.present(x, y)
    }

    /// Cells that still have grass.
    pub fn remaining(&self) -> usize {
        self.grid.present_count()
    }

    /// Committed renderable mask. May lag the grid until the next commit.
    pub fn mask(&self) -> &RenderMask {
        &self.mask
    }

    /// True when the grid holds cuts the mask has not been rebuilt for.
    pub fn mask_stale(&self) -> bool {
        self.mask_stale
    }

    /// Cheap cast pre-check: accepts positions up to `bounds_margin` outside
    /// the grid rectangle. Callers should skip `cut` for positions this
    /// rejects rather than paying for the bounding-box scan.
    pub fn in_cut_range(&self, position: Vec2) -> bool {
        let margin = self.config.bounds_margin;
        position.x > -margin
            && position.y > -margin
            && position.x < self.width() as f32 + margin
            && position.y < self.height() as f32 + margin
    }

    /// Cut a disc of grass around `center` (grid-local coordinates).
    ///
    /// Flips every still-present cell within `radius` of `center`. Cells
    /// outside the disc, outside the grid, or already cut are untouched, so
    /// repeating a cut is a no-op. A cut that crosses the commit threshold
    /// rebuilds the mask before returning.
    pub fn cut(&mut self, center: Vec2, radius: f32) -> CutOutcome {
        let bounds = GridRect::circle_bounds(center, radius, self.width(), self.height());
        let squared_radius = radius * radius;

        let mut cells_cut = 0u32;
        for cell in bounds.cells() {
            let delta = Vec2::new(cell.x as f32, cell.y as f32) - center;
            if delta.length_squared() <= squared_radius
                && self.grid.present(cell.x as u32, cell.y as u32)
            {
                self.grid.clear(cell.x as u32, cell.y as u32);
                cells_cut += 1;
            }
        }

        if cells_cut > 0 {
            self.mask_stale = true;
        }

        let outcome = CutOutcome {
            cells_cut,
            spawn_particles: cells_cut > self.config.particle_threshold,
            committed: cells_cut > self.config.cut_threshold,
        };
        if outcome.committed {
            self.commit();
        }
        if outcome.any_cut() {
            log::trace!(
                "cut {} cells at ({:.1}, {:.1}) r={:.1}{}",
                cells_cut,
                center.x,
                center.y,
                radius,
                if outcome.committed { ", committed" } else { "" }
            );
        }
        outcome
    }

    /// Rebuild the renderable mask from the grid.
    pub fn commit(&mut self) {
        self.mask.rebuild(&self.grid);
        self.mask_stale = false;
    }
}
