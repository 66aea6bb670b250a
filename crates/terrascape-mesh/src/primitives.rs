use glam::{Vec2, Vec3};
use terrascape_core::constants::{
    CUBE_INDICES, CUBE_VERTICES, DEFAULT_COLOR, FLAT_QUAD_COLOR, QUAD_INDEX_PATTERN, QUAD_UVS,
};
use terrascape_core::types::{Vertex2, Vertex3};

use crate::builder::GeometryBuilder;

/// Axis-aligned cube faces, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Outward unit normal.
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::X,
            CubeFace::NegX => Vec3::NEG_X,
            CubeFace::PosY => Vec3::Y,
            CubeFace::NegY => Vec3::NEG_Y,
            CubeFace::PosZ => Vec3::Z,
            CubeFace::NegZ => Vec3::NEG_Z,
        }
    }

    /// In-plane (right, up) axes with `right x up == normal`, so every face
    /// gets the same winding when seen from outside.
    pub fn axes(self) -> (Vec3, Vec3) {
        match self {
            CubeFace::PosX => (Vec3::NEG_Z, Vec3::Y),
            CubeFace::NegX => (Vec3::Z, Vec3::Y),
            CubeFace::PosY => (Vec3::X, Vec3::NEG_Z),
            CubeFace::NegY => (Vec3::X, Vec3::Z),
            CubeFace::PosZ => (Vec3::X, Vec3::Y),
            CubeFace::NegZ => (Vec3::NEG_X, Vec3::Y),
        }
    }
}

impl GeometryBuilder<Vertex3> {
    /// Push one quad centred at `center` spanning `scale` along `right` and
    /// `up`. Corners go top-right, bottom-right, bottom-left, top-left.
    pub fn push_oriented_quad(
        &mut self,
        center: Vec3,
        right: Vec3,
        up: Vec3,
        scale: f32,
        color: Vec3,
    ) {
        let half = scale * 0.5;
        let r = right * half;
        let u = up * half;
        let corners = [center + r + u, center + r - u, center - r - u, center - r + u];

        let base = self.base_index();
        for (corner, uv) in corners.iter().zip(QUAD_UVS) {
            self.push_vertex(Vertex3::from_glam(*corner, Vec2::from(uv), color));
        }
        self.push_indices(base, &QUAD_INDEX_PATTERN);
    }

    /// Unit quad in the XY plane (normal +Z) centred at `position`.
    pub fn push_quad(&mut self, scale: f32, position: Vec3, color: Vec3) {
        self.push_oriented_quad(position, Vec3::X, Vec3::Y, scale, color);
    }

    /// `push_quad` with scale 1 at the origin in blue.
    pub fn push_quad_default(&mut self) {
        self.push_quad(1.0, Vec3::ZERO, Vec3::from(DEFAULT_COLOR));
    }

    /// Cube of edge `scale` centred at `position`: six independently indexed
    /// faces, 24 vertices and 36 indices.
    pub fn push_cube(&mut self, scale: f32, position: Vec3, color: Vec3) {
        self.reserve(CUBE_VERTICES as usize, CUBE_INDICES as usize);
        let half = scale * 0.5;
        for face in CubeFace::ALL {
            let (right, up) = face.axes();
            self.push_oriented_quad(position + face.normal() * half, right, up, scale, color);
        }
    }

    /// `push_cube` with scale 1 at the origin in blue.
    pub fn push_cube_default(&mut self) {
        self.push_cube(1.0, Vec3::ZERO, Vec3::from(DEFAULT_COLOR));
    }
}

impl GeometryBuilder<Vertex2> {
    /// Push a quad from four explicit corners given as
    /// {top-right, bottom-right, bottom-left, top-left}.
    ///
    /// The quad must be convex and consistently wound; it is split along the
    /// bottom-right/top-left diagonal without any checks. Every corner gets
    /// UV `(0, 0)`.
    pub fn add_quad(&mut self, positions: [Vec2; 4]) {
        let base = self.base_index();
        for position in positions {
            self.push_vertex(Vertex2::from_glam(
                position,
                Vec2::ZERO,
                Vec3::from(FLAT_QUAD_COLOR),
            ));
        }
        self.push_indices(base, &QUAD_INDEX_PATTERN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pos(v: &Vertex3) -> Vec3 {
        Vec3::from(v.position)
    }

    #[test]
    fn test_push_quad_counts_and_local_indices() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_quad(1.0, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(builder.vertex_count(), 4);
        assert_eq!(builder.index_count(), 6);
        assert_eq!(builder.indices(), &[0, 1, 3, 1, 2, 3]);
        for tri in builder.indices().chunks_exact(3) {
            let distinct: HashSet<u32> = tri.iter().copied().collect();
            assert_eq!(distinct.len(), 3, "degenerate triangle {tri:?}");
            assert!(tri.iter().all(|&i| i < 4));
        }
    }

    #[test]
    fn test_push_quad_geometry() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_quad(2.0, Vec3::new(1.0, 1.0, 5.0), Vec3::ONE);
        let corners: Vec<Vec3> = builder.vertices().iter().map(pos).collect();
        assert_eq!(
            corners,
            vec![
                Vec3::new(2.0, 2.0, 5.0),
                Vec3::new(2.0, 0.0, 5.0),
                Vec3::new(0.0, 0.0, 5.0),
                Vec3::new(0.0, 2.0, 5.0),
            ]
        );
        let uvs: Vec<[f32; 2]> = builder.vertices().iter().map(|v| v.uv).collect();
        assert_eq!(uvs, QUAD_UVS.to_vec());
        assert!(builder.vertices().iter().all(|v| v.color == [1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_second_quad_is_offset_by_four() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_quad_default();
        builder.push_quad(1.0, Vec3::new(3.0, 0.0, 0.0), Vec3::ONE);
        let (first, second) = builder.indices().split_at(6);
        let expected: Vec<u32> = first.iter().map(|i| i + 4).collect();
        assert_eq!(second, expected.as_slice());
        assert!(first.iter().all(|&i| i < 4));
        assert!(second.iter().all(|&i| (4..8).contains(&i)));
    }

    #[test]
    fn test_default_quad_is_blue() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_quad_default();
        assert!(builder.vertices().iter().all(|v| v.color == DEFAULT_COLOR));
    }

    #[test]
    fn test_push_cube_counts() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_cube_default();
        assert_eq!(builder.vertex_count(), 24);
        assert_eq!(builder.index_count(), 36);
        assert!(builder.indices().iter().all(|&i| i < 24));
    }

    #[test]
    fn test_cube_faces_are_independent() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_cube(1.0, Vec3::ZERO, Vec3::ONE);
        for (face, indices) in builder.indices().chunks_exact(6).enumerate() {
            let lo = face as u32 * 4;
            assert!(
                indices.iter().all(|&i| (lo..lo + 4).contains(&i)),
                "face {face} references another face's vertices: {indices:?}"
            );
        }
    }

    #[test]
    fn test_cube_faces_lie_on_their_planes() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        let center = Vec3::new(10.0, -2.0, 4.0);
        let scale = 0.2;
        builder.push_cube(scale, center, Vec3::ONE);

        for (face, verts) in CubeFace::ALL.iter().zip(builder.vertices().chunks_exact(4)) {
            let n = face.normal();
            for v in verts {
                let offset = pos(v) - center;
                assert!(
                    (offset.dot(n) - scale * 0.5).abs() < 1e-5,
                    "{face:?} vertex {offset:?} not on face plane"
                );
                assert!(offset.abs().max_element() <= scale * 0.5 + 1e-5);
            }
        }
    }

    #[test]
    fn test_cube_face_winding_is_consistent() {
        let mut builder = GeometryBuilder::<Vertex3>::new();
        builder.push_cube(1.0, Vec3::ZERO, Vec3::ONE);
        let verts = builder.vertices();
        for (face, tris) in CubeFace::ALL.iter().zip(builder.indices().chunks_exact(6)) {
            for tri in tris.chunks_exact(3) {
                let a = pos(&verts[tri[0] as usize]);
                let b = pos(&verts[tri[1] as usize]);
                let c = pos(&verts[tri[2] as usize]);
                // Clockwise seen from outside: (b - a) x (c - a) points inward.
                let n = (b - a).cross(c - a);
                assert!(n.dot(face.normal()) < 0.0, "{face:?} triangle wound the wrong way");
            }
        }
    }

    #[test]
    fn test_face_axes_are_right_handed() {
        for face in CubeFace::ALL {
            let (right, up) = face.axes();
            assert_eq!(right.cross(up), face.normal(), "{face:?}");
        }
    }

    #[test]
    fn test_add_quad_uses_explicit_positions() {
        let mut builder = GeometryBuilder::<Vertex2>::new();
        let corners = [
            Vec2::new(0.5, 0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(-0.5, -0.5),
            Vec2::new(-0.5, 0.5),
        ];
        builder.add_quad(corners);
        builder.add_quad(corners.map(|c| c + Vec2::X));

        assert_eq!(builder.vertex_count(), 8);
        assert_eq!(builder.indices(), &[0, 1, 3, 1, 2, 3, 4, 5, 7, 5, 6, 7]);
        assert_eq!(builder.vertices()[0].position, [0.5, 0.5]);
        assert_eq!(builder.vertices()[5].position, [1.5, -0.5]);
        assert!(builder.vertices().iter().all(|v| v.color == FLAT_QUAD_COLOR));
        assert!(builder.vertices().iter().all(|v| v.uv == [0.0, 0.0]));
        assert_eq!(builder.vertices_size_bytes(), 8 * 28);
    }
}
