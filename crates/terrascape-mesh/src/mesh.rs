use terrascape_core::types::MeshVertex;

/// Finished indexed triangle mesh. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
}

impl<V: MeshVertex> Mesh<V> {
    pub fn new(vertices: Vec<V>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
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

    pub fn vertices_size_bytes(&self) -> u32 {
        (self.vertices.len() * V::STRIDE) as u32
    }

    pub fn indices_size_bytes(&self) -> u32 {
        (self.indices.len() * std::mem::size_of::<u32>()) as u32
    }

    /// Vertex buffer contents for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents for upload (u32 little/native endian).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// True when every index references an existing vertex and the index
    /// count is a multiple of three.
    pub fn is_well_formed(&self) -> bool {
        let n = self.vertices.len() as u32;
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| i < n)
    }

    pub fn into_parts(self) -> (Vec<V>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}
