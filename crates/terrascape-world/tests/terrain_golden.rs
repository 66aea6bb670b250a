use glam::Vec3;
use terrascape_noise::{NoiseField, PermutationTable};
use terrascape_world::{load_config_from_path, NoiseLayer, TerrainConfig, TerrainGenerator};

/// Bijective stride permutation: 167 is odd, so `i * 167 + 13` covers 0..=255.
fn stride_table() -> PermutationTable {
    let mut values = [0u8; 256];
    for (i, v) in values.iter_mut().enumerate() {
        *v = ((i * 167 + 13) % 256) as u8;
    }
    PermutationTable::from_values(values)
}

fn golden_config() -> TerrainConfig {
    TerrainConfig {
        size_xz: 2,
        size_y: 1,
        base: NoiseLayer {
            bias: 0.0,
            ..NoiseLayer::base()
        },
        ..Default::default()
    }
}

#[test]
fn test_golden_2x2_terrain_counts() {
    assert!(stride_table().is_permutation());
    let field = NoiseField::from_table(stride_table());
    let gen = TerrainGenerator::with_field(field, golden_config()).unwrap();
    let terrain = gen.generate();

    // Column heights are ~2.73..2.79, so y = -5..=2 gives 8 cubes per column.
    let expected_heights = [
        (0, 0, 2.788_235_4),
        (0, 1, 2.740_277_8),
        (1, 0, 2.779_275_4),
        (1, 1, 2.731_325),
    ];
    for (x, z, h) in expected_heights {
        let actual = gen.column_height(x, z);
        assert!((actual - h).abs() < 1e-4, "column ({x},{z}) height {actual}, recorded {h}");
    }

    assert_eq!(terrain.stats.columns, 4);
    assert_eq!(terrain.stats.cubes, 32);
    assert_eq!(terrain.stats.tallest_column, 8);
    assert_eq!(terrain.mesh.vertex_count(), 32 * 24);
    assert_eq!(terrain.mesh.index_count(), 32 * 36);
    assert_eq!(terrain.mesh.vertices_size_bytes(), 32 * 24 * 32);
    assert_eq!(terrain.mesh.indices_size_bytes(), 32 * 36 * 4);
    assert!(terrain.mesh.is_well_formed());
}

#[test]
fn test_golden_first_vertex() {
    let field = NoiseField::from_table(stride_table());
    let terrain = TerrainGenerator::with_field(field, golden_config())
        .unwrap()
        .generate();

    // First cube: cell (0, 0) at y = -5, shifted by the half extent of 1.
    // First face is +X; its top-right corner sits at +X half, -Z half, +Y half.
    let first = terrain.mesh.vertices()[0];
    let expected = Vec3::new(-0.9, -4.9, -1.1);
    assert!((Vec3::from(first.position) - expected).length() < 1e-5, "{:?}", first.position);
    assert_eq!(first.uv, [1.0, 0.0]);
    assert_eq!(first.color, [0.0, 0.8, 0.0]);
    assert_eq!(&terrain.mesh.indices()[..6], &[0, 1, 3, 1, 2, 3]);

    // Second column (0, 1) starts after 8 cubes and takes the odd colour.
    let second_column = terrain.mesh.vertices()[8 * 24];
    assert_eq!(second_column.color, [0.0, 0.5, 0.0]);
}

#[test]
fn test_same_table_reproduces_buffers() {
    let build = || {
        TerrainGenerator::with_field(NoiseField::from_table(stride_table()), golden_config())
            .unwrap()
            .generate()
            .mesh
    };
    let a = build();
    let b = build();
    assert_eq!(a.vertex_bytes(), b.vertex_bytes());
    assert_eq!(a.index_bytes(), b.index_bytes());
}

#[test]
fn test_generate_from_config_file() {
    let path = std::env::temp_dir().join(format!("terrascape-golden-{}.ron", std::process::id()));
    std::fs::write(&path, "(size_xz: 3, size_y: 4, seed: Some(5))").unwrap();
    let config = load_config_from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let a = terrascape_world::generate(config.clone()).unwrap();
    let b = terrascape_world::generate(config).unwrap();
    assert_eq!(a.stats.columns, 9);
    assert_eq!(a.mesh, b.mesh, "fixed seed must reproduce the mesh");
}
