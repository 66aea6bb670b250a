use terrascape_world::TerrainConfig;

/// A named terrain configuration to generate and measure.
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub config: TerrainConfig,
}

/// Standard suite: the stock demo landscape plus smaller and larger grids,
/// all with a fixed seed so counts are comparable between runs.
pub fn standard_scenes(seed: u64) -> Vec<Scene> {
    [("16x16", 16), ("64x64", 64), ("demo-100x100", 100), ("256x256", 256)]
        .into_iter()
        .map(|(name, size_xz)| Scene {
            name: name.to_string(),
            config: TerrainConfig {
                size_xz,
                seed: Some(seed),
                ..Default::default()
            },
        })
        .collect()
}
