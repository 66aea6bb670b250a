use std::path::Path;

use crate::runner::SceneResult;

/// A saved set of scene results to compare later runs against.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub label: String,
    pub results: Vec<SceneResult>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist
/// or doesn't parse.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Scenes whose geometry differs from the baseline: (scene, baseline cubes,
/// current cubes). With fixed seeds any difference is a generator change.
pub fn geometry_changes(current: &[SceneResult], baseline: &Baseline) -> Vec<(String, u32, u32)> {
    current
        .iter()
        .filter_map(|result| {
            let base = baseline
                .results
                .iter()
                .find(|b| b.scene_name == result.scene_name)?;
            let changed = base.cubes != result.cubes
                || base.vertices != result.vertices
                || base.indices != result.indices;
            changed.then(|| (result.scene_name.clone(), base.cubes, result.cubes))
        })
        .collect()
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[SceneResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Cubes | Vertices | Indices | Triangles | VB (KiB) | IB (KiB) | Mean (ms) | Min (ms) | Max (ms) |\n");
    out.push_str("|-------|-------|----------|---------|-----------|----------|----------|-----------|----------|----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.1} | {:.1} | {:.2} | {:.2} | {:.2} |\n",
            r.scene_name,
            r.cubes,
            r.vertices,
            r.indices,
            r.triangles,
            r.vertex_bytes as f64 / 1024.0,
            r.index_bytes as f64 / 1024.0,
            r.timings.mean_ms,
            r.timings.min_ms,
            r.timings.max_ms,
        ));
    }

    out
}

/// Format the baseline comparison.
pub fn format_comparison(changes: &[(String, u32, u32)]) -> String {
    if changes.is_empty() {
        return "Geometry matches baseline.\n".to_string();
    }

    let mut out = String::from("GEOMETRY CHANGED:\n");
    for (scene, before, after) in changes {
        out.push_str(&format!("  - {scene}: {before} -> {after} cubes\n"));
    }
    out
}
