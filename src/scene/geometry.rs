use crate::math::{Aabb, Point2, Point3, Vector3};
use crate::model::{BoxDimensions, Face};

/// A triangle mesh with per-face material groups.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
    /// Material groups, as `(first_triangle, triangle_count, material_index)`.
    pub groups: Vec<(usize, usize, usize)>,
}

impl TriangleMesh {
    /// Appends `other`, offsetting its indices and groups.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;
        let triangle_offset = self.indices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + vertex_offset, b + vertex_offset, c + vertex_offset]),
        );
        self.groups.extend(
            other
                .groups
                .iter()
                .map(|&(start, count, material)| (start + triangle_offset, count, material)),
        );
    }

    /// Material index of triangle `triangle`, if it belongs to a group.
    #[must_use]
    pub fn material_of_triangle(&self, triangle: usize) -> Option<usize> {
        self.groups
            .iter()
            .find(|(start, count, _)| (*start..start + count).contains(&triangle))
            .map(|&(_, _, material)| material)
    }
}

/// An axis-aligned box centered at the origin, tessellated with one quad
/// (two triangles) per face.
#[derive(Debug, Clone)]
pub struct BoxGeometry {
    extents: Vector3,
    mesh: TriangleMesh,
}

impl BoxGeometry {
    /// Builds a box of the given `(x, y, z)` extents.
    #[must_use]
    pub fn new(extents: Vector3) -> Self {
        let mut mesh = TriangleMesh::default();
        for face in Face::ALL {
            mesh.merge(&face_quad(face, &extents));
        }
        Self { extents, mesh }
    }

    /// Box sized to `dims`.
    #[must_use]
    pub fn from_dimensions(dims: &BoxDimensions) -> Self {
        Self::new(dims.extents())
    }

    /// Full `(x, y, z)` extents.
    #[must_use]
    pub fn extents(&self) -> &Vector3 {
        &self.extents
    }

    /// Width along X, height along Y and depth along Z.
    #[must_use]
    pub fn dimensions(&self) -> BoxDimensions {
        BoxDimensions::from_extents(&self.extents)
    }

    /// Axis-aligned bounds in mesh-local coordinates.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::centered(Point3::origin(), self.extents)
    }

    /// Triangles, grouped by face.
    #[must_use]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }
}

fn face_quad(face: Face, extents: &Vector3) -> TriangleMesh {
    let half = extents * 0.5;
    let normal = face.normal();
    let axis = face.axis().index();
    // Tangents chosen so that u x v points along the outward normal.
    let (u_axis, v_axis) = ((axis + 1) % 3, (axis + 2) % 3);
    let sign = normal[axis];

    let mut u = Vector3::zeros();
    u[u_axis] = half[u_axis];
    let mut v = Vector3::zeros();
    v[v_axis] = half[v_axis] * sign;

    let center = Point3::from(normal.component_mul(&half));
    let vertices = vec![center - u - v, center + u - v, center + u + v, center - u + v];

    TriangleMesh {
        vertices,
        normals: vec![normal; 4],
        uvs: vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        indices: vec![[0, 1, 2], [0, 2, 3]],
        groups: vec![(0, 2, face.index())],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_normal(mesh: &TriangleMesh, tri: [u32; 3]) -> Vector3 {
        let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
        (b - a).cross(&(c - a))
    }

    #[test]
    fn box_has_24_vertices_12_triangles() {
        let geom = BoxGeometry::new(Vector3::new(2.0, 4.0, 6.0));
        let mesh = geom.mesh();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.groups.len(), 6);
    }

    #[test]
    fn groups_follow_face_order() {
        let geom = BoxGeometry::new(Vector3::new(1.0, 1.0, 1.0));
        for face in Face::ALL {
            assert_eq!(geom.mesh().material_of_triangle(face.index() * 2), Some(face.index()));
            assert_eq!(geom.mesh().material_of_triangle(face.index() * 2 + 1), Some(face.index()));
        }
        assert_eq!(geom.mesh().material_of_triangle(12), None);
    }

    #[test]
    fn winding_matches_outward_normals() {
        let geom = BoxGeometry::new(Vector3::new(2.0, 4.0, 6.0));
        let mesh = geom.mesh();
        for (t, tri) in mesh.indices.iter().enumerate() {
            let n = triangle_normal(mesh, *tri);
            let face = Face::from_index(mesh.material_of_triangle(t).unwrap()).unwrap();
            assert!(n.dot(&face.normal()) > 0.0, "triangle {t} faces inward");
        }
    }

    #[test]
    fn vertices_lie_on_bounds() {
        let geom = BoxGeometry::new(Vector3::new(2.0, 4.0, 6.0));
        let bounds = geom.bounds();
        for v in &geom.mesh().vertices {
            assert!(bounds.contains_point(v));
        }
        assert_relative_eq!(bounds.max, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn dimensions_round_trip() {
        let dims = BoxDimensions {
            length: 3.0,
            breadth: 1.0,
            height: 2.0,
        };
        assert_eq!(BoxGeometry::from_dimensions(&dims).dimensions(), dims);
    }
}
