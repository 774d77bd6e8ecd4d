//! Terrain detail-layer density snapshot.
//!
//! A `DetailSnapshot` is the immutable input consumed when building a grass
//! field: one integer density layer per vegetation detail type, all sampled
//! at the same sub-cell resolution, plus the terrain size in world units.
//! Taken once at scene start; never refreshed.

use crate::core::error::Error;
use crate::core::types::Result;

/// A single 2-D density layer at the terrain detail resolution.
///
/// Counts are stored row-major: index = y * width + x.
#[derive(Clone, Debug)]
pub struct DetailLayer {
    width: u32,
    height: u32,
    counts: Vec<u32>,
}

impl DetailLayer {
    /// Create a layer from row-major density counts.
    pub fn new(width: u32, height: u32, counts: Vec<u32>) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if counts.len() != expected {
            return Err(Error::Terrain(format!(
                "detail layer size mismatch: {}x{} needs {} counts, got {}",
                width,
                height,
                expected,
                counts.len()
            )));
        }
        Ok(Self { width, height, counts })
    }

    /// Create a layer by evaluating a density function per sample cell.
    pub fn from_fn(width: u32, height: u32, mut density: impl FnMut(u32, u32) -> u32) -> Self {
        let mut counts = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                counts.push(density(x, y));
            }
        }
        Self { width, height, counts }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Density count at a sample coordinate.
    pub fn count_at(&self, x: u32, y: u32) -> u32 {
        self.counts[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

/// Immutable snapshot of terrain detail density data.
#[derive(Clone, Debug)]
pub struct DetailSnapshot {
    layers: Vec<DetailLayer>,
    terrain_width: u32,
    terrain_depth: u32,
}

impl DetailSnapshot {
    /// Bundle detail layers with the terrain size (world units, one grid cell
    /// per unit). All layers must share the same sample resolution.
    pub fn new(layers: Vec<DetailLayer>, terrain_width: u32, terrain_depth: u32) -> Result<Self> {
        if terrain_width == 0 || terrain_depth == 0 {
            return Err(Error::Terrain(format!(
                "terrain size must be non-zero, got {}x{}",
                terrain_width, terrain_depth
            )));
        }
        let Some(first) = layers.first() else {
            return Err(Error::Terrain("at least one detail layer is required".into()));
        };
        let (width, height) = (first.width(), first.height());
        if width == 0 || height == 0 {
            return Err(Error::Terrain("detail resolution must be non-zero".into()));
        }
        for layer in &layers[1..] {
            if layer.width() != width || layer.height() != height {
                return Err(Error::Terrain(format!(
                    "detail layers disagree on resolution: {}x{} vs {}x{}",
                    width,
                    height,
                    layer.width(),
                    layer.height()
                )));
            }
        }
        Ok(Self { layers, terrain_width, terrain_depth })
    }

    pub fn sample_width(&self) -> u32 {
        self.layers[0].width()
    }

    pub fn sample_height(&self) -> u32 {
        self.layers[0].height()
    }

    pub fn terrain_width(&self) -> u32 {
        self.terrain_width
    }

    pub fn terrain_depth(&self) -> u32 {
        self.terrain_depth
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total density across all layers at a sample coordinate.
    pub fn stacked_count(&self, x: u32, y: u32) -> u32 {
        self.layers.iter().map(|layer| layer.count_at(x, y)).sum()
    }
}
