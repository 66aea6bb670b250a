use std::time::Instant;

use terrascape_core::TerrainError;
use terrascape_world::TerrainGenerator;

use crate::scenes::Scene;

/// Timing statistics over repeated generations.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// What one scene produced and how long it took.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneResult {
    pub scene_name: String,
    pub size_xz: u32,
    pub cubes: u32,
    pub vertices: usize,
    pub indices: usize,
    pub triangles: usize,
    pub vertex_bytes: u32,
    pub index_bytes: u32,
    pub runs: u32,
    pub timings: TimingSeries,
}

/// Generates each scene `runs` times, keeping the mesh of the last run.
pub struct ReportRunner {
    runs: u32,
}

impl ReportRunner {
    pub fn new(runs: u32) -> Self {
        Self { runs: runs.max(1) }
    }

    pub fn run_scene(&self, scene: &Scene) -> Result<SceneResult, TerrainError> {
        log::info!("Generating scene '{}' ({} runs)...", scene.name, self.runs);
        let generator = TerrainGenerator::new(scene.config.clone())?;

        let mut times = Vec::with_capacity(self.runs as usize);
        let mut last = None;
        for _ in 0..self.runs {
            let start = Instant::now();
            let terrain = generator.generate();
            times.push(start.elapsed().as_secs_f64() * 1000.0);
            last = Some(terrain);
        }

        let timings = compute_timings(&times);
        log::info!(
            "  Done: mean={:.2}ms, min={:.2}ms, max={:.2}ms",
            timings.mean_ms,
            timings.min_ms,
            timings.max_ms
        );

        // runs >= 1, so the loop always produced a terrain.
        let terrain = last.unwrap_or_else(|| generator.generate());
        let mesh = &terrain.mesh;
        Ok(SceneResult {
            scene_name: scene.name.clone(),
            size_xz: scene.config.size_xz,
            cubes: terrain.stats.cubes,
            vertices: mesh.vertex_count(),
            indices: mesh.index_count(),
            triangles: mesh.triangle_count(),
            vertex_bytes: mesh.vertices_size_bytes(),
            index_bytes: mesh.indices_size_bytes(),
            runs: self.runs,
            timings,
        })
    }
}

/// Compute timing statistics from a list of run times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries::default();
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
