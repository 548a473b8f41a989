use crate::math::{Point3, Vector3};
use crate::scene::{Camera, Light, Material, MeshId, SceneStore, TriangleMesh};

use super::{BoxEditor, PreviewBox};

/// One mesh as it should be drawn this frame.
#[derive(Debug, Clone)]
pub struct DrawItem<'a> {
    pub name: &'a str,
    pub position: Point3,
    pub extents: Vector3,
    /// Triangles in mesh-local coordinates, grouped by face.
    pub mesh: &'a TriangleMesh,
    /// One entry per material group, or a single entry shared by all groups.
    pub materials: Vec<&'a Material>,
}

impl DrawItem<'_> {
    /// Material used to draw triangle `triangle`.
    #[must_use]
    pub fn triangle_material(&self, triangle: usize) -> Option<&Material> {
        match self.materials.as_slice() {
            [only] => Some(*only),
            all => self
                .mesh
                .material_of_triangle(triangle)
                .and_then(|group| all.get(group).copied()),
        }
    }

    /// Number of triangles the renderer actually has to draw.
    #[must_use]
    pub fn visible_triangles(&self) -> usize {
        (0..self.mesh.indices.len())
            .filter(|&t| self.triangle_material(t).is_some_and(Material::is_visible))
            .count()
    }
}

/// Read-only view of the session for one render pass.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub camera: &'a Camera,
    pub lights: &'a [Light],
    /// Outer box, inner box, then handles.
    pub items: Vec<DrawItem<'a>>,
    pub preview: &'a PreviewBox,
    pub readout: &'a str,
}

impl<'a> Frame<'a> {
    pub(super) fn collect(editor: &'a BoxEditor) -> Self {
        let scene = &editor.scene;
        let items = editor
            .current
            .iter()
            .flat_map(|b| [b.outer, b.inner].into_iter().chain(b.handle_meshes.iter().copied()))
            .filter_map(|id| draw_item(scene, id))
            .collect();
        Self {
            camera: &editor.camera,
            lights: scene.lights(),
            items,
            preview: &editor.preview,
            readout: &editor.readout,
        }
    }

    /// Draw item of the mesh called `name`.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&DrawItem<'a>> {
        self.items.iter().find(|i| i.name == name)
    }
}

fn draw_item(scene: &SceneStore, id: MeshId) -> Option<DrawItem<'_>> {
    let mesh = scene.mesh(id).ok()?;
    let geometry = scene.geometry(mesh.geometry).ok()?;
    let materials = mesh
        .materials
        .iter()
        .filter_map(|m| scene.material(*m).ok())
        .collect();
    Some(DrawItem {
        name: &mesh.name,
        position: mesh.position,
        extents: *geometry.extents(),
        mesh: geometry.mesh(),
        materials,
    })
}
