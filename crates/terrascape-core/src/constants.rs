//! Single source of truth for shared constants.

/// Number of entries in a noise permutation table.
pub const PERMUTATION_SIZE: usize = 256;

/// Largest lattice hash value a permutation table can produce.
pub const MAX_HASH_VALUE: f32 = (PERMUTATION_SIZE - 1) as f32;

/// Upper bound on fractal octaves accepted from configuration files.
/// Beyond this the per-octave amplitude drops under f32 precision.
pub const MAX_OCTAVES: u32 = 24;

/// Bound on `|y|` for any terrain cube. Configs whose floor or reachable
/// column height exceeds it are rejected.
pub const MAX_COLUMN_HEIGHT: i32 = 1024;

/// Vertices emitted per quad.
pub const QUAD_VERTICES: u32 = 4;

/// Indices emitted per quad (two triangles).
pub const QUAD_INDICES: u32 = 6;

/// Local index pattern for a quad whose corners are pushed in
/// {top-right, bottom-right, bottom-left, top-left} order.
pub const QUAD_INDEX_PATTERN: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Texture coordinates matching the quad corner order above.
pub const QUAD_UVS: [[f32; 2]; 4] = [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];

/// Faces per cube.
pub const CUBE_FACES: u32 = 6;

/// Vertices emitted per cube (no sharing between faces).
pub const CUBE_VERTICES: u32 = CUBE_FACES * QUAD_VERTICES;

/// Indices emitted per cube.
pub const CUBE_INDICES: u32 = CUBE_FACES * QUAD_INDICES;

/// Default quad/cube colour (blue).
pub const DEFAULT_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// Colour used by the flat 2D quad emitter.
pub const FLAT_QUAD_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
