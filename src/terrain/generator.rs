//! Noise-based synthetic detail-layer source.
//!
//! Stands in for an engine terrain when no real detail data is available
//! (demos, benchmarks, tests). Produces density layers from fractal Perlin
//! noise, one seed offset per layer.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::core::types::Result;
use crate::terrain::detail::{DetailLayer, DetailSnapshot};

/// Parameters controlling synthetic detail generation
#[derive(Clone, Debug)]
pub struct DetailFieldParams {
    pub seed: u32,
    pub scale: f32,     // Horizontal scale in samples (larger = smoother patches)
    pub octaves: u32,   // FBM octaves (detail levels)
    pub persistence: f32,
    pub lacunarity: f32,
    pub max_count: u32, // Peak per-cell density count
}

impl Default for DetailFieldParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            scale: 24.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            max_count: 8,
        }
    }
}

/// Synthetic detail-layer generator using fractal Brownian motion (FBM)
pub struct DetailFieldGenerator {
    params: DetailFieldParams,
    noise: Fbm<Perlin>,
}

impl DetailFieldGenerator {
    /// Create a new generator with the given parameters
    pub fn new(params: DetailFieldParams) -> Self {
        let noise = Fbm::<Perlin>::new(params.seed)
            .set_octaves(params.octaves as usize)
            .set_persistence(params.persistence as f64)
            .set_lacunarity(params.lacunarity as f64);

        Self { params, noise }
    }

    /// Get generator parameters
    pub fn params(&self) -> &DetailFieldParams {
        &self.params
    }

    /// Density count at a sample coordinate, in `[0, max_count]`
    pub fn count_at(&self, x: u32, y: u32) -> u32 {
        let nx = (x as f32 / self.params.scale) as f64;
        let ny = (y as f32 / self.params.scale) as f64;

        // Noise value in [-1, 1], mapped to [0, max_count]
        let noise_value = self.noise.get([nx, ny]);
        let normalized = ((noise_value + 1.0) / 2.0).clamp(0.0, 1.0);
        (normalized * self.params.max_count as f64).round() as u32
    }

    /// Generate one detail layer at the given sample resolution
    pub fn generate_layer(&self, width: u32, height: u32) -> DetailLayer {
        DetailLayer::from_fn(width, height, |x, y| self.count_at(x, y))
    }

    /// Generate a full snapshot with `layer_count` layers.
    ///
    /// Each layer uses the base seed plus its index, so layers vary but the
    /// snapshot stays deterministic for a given parameter set.
    pub fn generate_snapshot(
        &self,
        sample_width: u32,
        sample_height: u32,
        layer_count: usize,
        terrain_width: u32,
        terrain_depth: u32,
    ) -> Result<DetailSnapshot> {
        let layers = (0..layer_count)
            .map(|i| {
                let layer_params = DetailFieldParams {
                    seed: self.params.seed.wrapping_add(i as u32),
                    ..self.params.clone()
                };
                DetailFieldGenerator::new(layer_params).generate_layer(sample_width, sample_height)
            })
            .collect();
        DetailSnapshot::new(layers, terrain_width, terrain_depth)
    }
}
