//! Simulate attack casts cutting across a synthetic grass field.
//!
//! Usage: cargo run --release --bin cut_sim -- [--size 128] [--casts 200] [--png mask.png]

use std::time::Instant;

use glam::Vec3;

use swathe::grass::{AbilityId, AttackCast, GrassCutter, GrassField, GrassFieldConfig, ParticleSink};
use swathe::terrain::generator::{DetailFieldGenerator, DetailFieldParams};

struct CountingSink {
    bursts: usize,
}

impl ParticleSink for CountingSink {
    fn play_at(&mut self, position: Vec3) {
        self.bursts += 1;
        log::debug!("particle burst at ({:.1}, {:.1})", position.x, position.z);
    }
}

fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let size: u32 = arg_value(&args, "--size").and_then(|v| v.parse().ok()).unwrap_or(128);
    let casts: u32 = arg_value(&args, "--casts").and_then(|v| v.parse().ok()).unwrap_or(200);

    let generator = DetailFieldGenerator::new(DetailFieldParams::default());
    let snapshot = generator
        .generate_snapshot(size * 4, size * 4, 2, size, size)
        .expect("Failed to build detail snapshot");

    let start = Instant::now();
    let field = GrassField::from_details(&snapshot, GrassFieldConfig::default())
        .expect("Failed to build grass field");
    log::info!(
        "built {}x{} field in {:.1}ms, {} of {} cells start with grass",
        field.width(),
        field.height(),
        start.elapsed().as_secs_f64() * 1000.0,
        field.remaining(),
        (size as usize) * (size as usize)
    );

    let light = AbilityId(1);
    let heavy = AbilityId(2);
    let mut cutter = GrassCutter::new(field, Vec3::ZERO, vec![light, heavy]);
    let mut sink = CountingSink { bursts: 0 };

    // Walk the caster outward on a spiral so casts land all over the field
    let mut total_cut = 0u64;
    let mut commits = 0u32;
    let start = Instant::now();
    for i in 0..casts {
        let angle = i as f32 * 0.35;
        let reach = (i as f32 / casts as f32) * size as f32 * 0.45;
        let origin = Vec3::new(
            size as f32 * 0.5 + angle.cos() * reach,
            0.0,
            size as f32 * 0.5 + angle.sin() * reach,
        );
        let forward = Vec3::new(angle.cos(), 0.0, angle.sin());
        let ability = if i % 3 == 0 { heavy } else { light };

        if let Some(outcome) = cutter.handle_cast(&AttackCast { ability, origin, forward }, &mut sink) {
            total_cut += outcome.cells_cut as u64;
            if outcome.committed {
                commits += 1;
            }
        }
        cutter.tick(0.5); // cooldown expires before the next cast
    }

    let elapsed = start.elapsed();
    log::info!(
        "{} casts in {:.1}ms: {} cells cut, {} commits, {} particle bursts, {} cells left",
        casts,
        elapsed.as_secs_f64() * 1000.0,
        total_cut,
        commits,
        sink.bursts,
        cutter.field().remaining()
    );

    if let Some(path) = arg_value(&args, "--png") {
        let mut field = cutter.into_field();
        if field.mask_stale() {
            field.commit();
        }
        field.mask().write_png(&path).expect("Failed to write mask PNG");
        log::info!("wrote mask to {}", path);
    }
}
