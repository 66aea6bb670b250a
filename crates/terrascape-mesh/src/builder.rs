use terrascape_core::types::MeshVertex;

use crate::mesh::Mesh;

/// Append-only accumulator for vertices and triangle indices.
///
/// Indices passed to [`push_triangle`](Self::push_triangle) are absolute and
/// must reference vertices already pushed; the builder does not check this.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuilder<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
}

impl<V: MeshVertex> GeometryBuilder<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Index the next pushed vertex will receive.
    pub fn base_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Push a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: V) -> u32 {
        let index = self.base_index();
        self.vertices.push(vertex);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Push `local` indices offset by `base`.
    pub fn push_indices(&mut self, base: u32, local: &[u32]) {
        self.indices.extend(local.iter().map(|i| base + i));
    }

    /// Reserve room for `vertices` more vertices and `indices` more indices.
    pub fn reserve(&mut self, vertices: usize, indices: usize) {
        self.vertices.reserve(vertices);
        self.indices.reserve(indices);
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Byte size of the vertex buffer (count x record size).
    pub fn vertices_size_bytes(&self) -> u32 {
        (self.vertices.len() * V::STRIDE) as u32
    }

    /// Byte size of the index buffer (count x 4).
    pub fn indices_size_bytes(&self) -> u32 {
        (self.indices.len() * std::mem::size_of::<u32>()) as u32
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Hand the accumulated buffers over as an immutable mesh.
    pub fn finish(self) -> Mesh<V> {
        log::debug!(
            "Finished mesh: {} vertices, {} indices",
            self.vertices.len(),
            self.indices.len()
        );
        Mesh::new(self.vertices, self.indices)
    }
}
