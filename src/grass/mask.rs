//! Renderable grass mask.
//!
//! Presentation-side mirror of the occupancy grid: one byte per cell, white
//! where grass is present, black where it has been cut. The mask is rebuilt
//! from the grid only at commit points, so it can lag the grid between a
//! cut's writes and the next commit.

use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::grass::grid::OccupancyGrid;

/// Single mask pixel. White = grass present, black = cut/empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct MaskPixel(pub u8);

impl MaskPixel {
    pub const BLACK: Self = Self(0x00);
    pub const WHITE: Self = Self(0xFF);

    /// Returns true if this pixel shows grass.
    pub fn is_white(self) -> bool {
        self == Self::WHITE
    }

    fn from_present(present: bool) -> Self {
        if present { Self::WHITE } else { Self::BLACK }
    }
}

/// Committed renderable mask, same dimensions as the grid it mirrors.
#[derive(Clone, Debug)]
pub struct RenderMask {
    width: u32,
    height: u32,
    pixels: Vec<MaskPixel>,
}

impl RenderMask {
    /// Build a mask matching the current grid state.
    pub fn from_grid(grid: &OccupancyGrid) -> Self {
        let mut mask = Self {
            width: grid.width(),
            height: grid.height(),
            pixels: vec![MaskPixel::BLACK; (grid.width() as usize) * (grid.height() as usize)],
        };
        mask.rebuild(grid);
        mask
    }

    /// Rebuild every pixel from the grid.
    ///
    /// Cost is proportional to the full mask size regardless of how few
    /// cells actually changed, which is why callers gate it behind a
    /// threshold.
    pub fn rebuild(&mut self, grid: &OccupancyGrid) {
        debug_assert_eq!((self.width, self.height), (grid.width(), grid.height()));
        let width = self.width as usize;
        self.pixels
            .par_chunks_mut(width)
            .zip(grid.cells().par_chunks(width))
            .for_each(|(row, cells)| {
                for (pixel, &present) in row.iter_mut().zip(cells) {
                    *pixel = MaskPixel::from_present(present);
                }
            });
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at a cell.
    pub fn pixel(&self, x: u32, y: u32) -> MaskPixel {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Row-major pixel data
    pub fn pixels(&self) -> &[MaskPixel] {
        &self.pixels
    }

    /// Raw bytes for handoff to a renderer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the mask as an 8-bit grayscale PNG (debugging aid).
    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        image::save_buffer(
            path.as_ref(),
            self.as_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::L8,
        )
        .map_err(|e| Error::Image(e.to_string()))
    }
}
