pub mod camera;
pub mod geometry;
pub mod material;

pub use camera::{ndc_from_pixels, Camera, OrbitControls};
pub use geometry::{BoxGeometry, TriangleMesh};
pub use material::{Material, MaterialId, Shading};

use slotmap::SlotMap;

use crate::error::SceneError;
use crate::math::{Point3, Vector3};
use crate::model::Color;

slotmap::new_key_type! {
    /// Unique identifier for a geometry in the scene store.
    pub struct GeometryId;
}

slotmap::new_key_type! {
    /// Unique identifier for a mesh in the scene store.
    pub struct MeshId;
}

/// A drawable object: one geometry and one material per material group.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub name: String,
    pub geometry: GeometryId,
    /// Indexed by material group; a single entry covers every group.
    pub materials: Vec<MaterialId>,
    pub position: Point3,
}

impl MeshData {
    /// Creates a mesh at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>, geometry: GeometryId, materials: Vec<MaterialId>) -> Self {
        Self {
            name: name.into(),
            geometry,
            materials,
            position: Point3::origin(),
        }
    }

    /// Moves the mesh to `position`.
    #[must_use]
    pub fn at(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { color: Color, intensity: f32 },
    Directional { color: Color, intensity: f32, direction: Vector3 },
}

/// Standard rig: soft ambient plus two opposing directional lights.
#[must_use]
pub fn default_lights(key_direction: Vector3) -> Vec<Light> {
    vec![
        Light::Ambient {
            color: Color::WHITE,
            intensity: 0.5,
        },
        Light::Directional {
            color: Color::WHITE,
            intensity: 0.5,
            direction: key_direction,
        },
        Light::Directional {
            color: Color::WHITE,
            intensity: 0.5,
            direction: Vector3::new(-1.0, -1.0, -1.0),
        },
    ]
}

/// Central arena that owns every geometry, material and mesh of a scene.
///
/// Resources are released explicitly: disposing a mesh frees its geometry
/// and every material no other mesh still uses. The shared transparent
/// material is never freed.
#[derive(Debug)]
pub struct SceneStore {
    geometries: SlotMap<GeometryId, BoxGeometry>,
    materials: SlotMap<MaterialId, Material>,
    meshes: SlotMap<MeshId, MeshData>,
    transparent: MaterialId,
    lights: Vec<Light>,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SceneStore {
    /// Creates a store holding only the shared transparent material.
    #[must_use]
    pub fn new(lights: Vec<Light>) -> Self {
        let mut materials = SlotMap::with_key();
        let transparent = materials.insert(Material::invisible());
        Self {
            geometries: SlotMap::with_key(),
            materials,
            meshes: SlotMap::with_key(),
            transparent,
            lights,
        }
    }

    /// The shared material used for removed faces.
    #[must_use]
    pub fn transparent_material(&self) -> MaterialId {
        self.transparent
    }

    /// Scene lights.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    // --- Geometry operations ---

    /// Inserts a geometry and returns its ID.
    pub fn add_geometry(&mut self, geometry: BoxGeometry) -> GeometryId {
        self.geometries.insert(geometry)
    }

    /// Returns a reference to the geometry, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is not in the store.
    pub fn geometry(&self, id: GeometryId) -> Result<&BoxGeometry, SceneError> {
        self.geometries
            .get(id)
            .ok_or(SceneError::EntityNotFound("geometry"))
    }

    /// Number of live geometries.
    #[must_use]
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    // --- Material operations ---

    /// Inserts a material and returns its ID.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.insert(material)
    }

    /// Returns a reference to the material, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not in the store.
    pub fn material(&self, id: MaterialId) -> Result<&Material, SceneError> {
        self.materials
            .get(id)
            .ok_or(SceneError::EntityNotFound("material"))
    }

    /// Number of live materials, the shared transparent one included.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Frees `id` unless it is the shared transparent material or some mesh
    /// still uses it. Returns whether the material was freed.
    pub fn release_material(&mut self, id: MaterialId) -> bool {
        if id == self.transparent || self.material_in_use(id) {
            return false;
        }
        self.materials.remove(id).is_some()
    }

    fn material_in_use(&self, id: MaterialId) -> bool {
        self.meshes.values().any(|m| m.materials.contains(&id))
    }

    // --- Mesh operations ---

    /// Inserts a mesh and returns its ID.
    pub fn add_mesh(&mut self, data: MeshData) -> MeshId {
        self.meshes.insert(data)
    }

    /// Returns a reference to the mesh, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the store.
    pub fn mesh(&self, id: MeshId) -> Result<&MeshData, SceneError> {
        self.meshes.get(id).ok_or(SceneError::EntityNotFound("mesh"))
    }

    /// Returns a mutable reference to the mesh, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the store.
    pub fn mesh_mut(&mut self, id: MeshId) -> Result<&mut MeshData, SceneError> {
        self.meshes
            .get_mut(id)
            .ok_or(SceneError::EntityNotFound("mesh"))
    }

    /// Number of live meshes.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Material shown by material group `slot` of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh or slot does not exist.
    pub fn mesh_material(&self, mesh: MeshId, slot: usize) -> Result<MaterialId, SceneError> {
        self.mesh(mesh)?
            .materials
            .get(slot)
            .copied()
            .ok_or(SceneError::EntityNotFound("material slot"))
    }

    /// Swaps the material of group `slot`, returning the previous one.
    ///
    /// The previous material is not released; the caller decides whether it
    /// is still needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh or slot does not exist.
    pub fn set_mesh_material(
        &mut self,
        mesh: MeshId,
        slot: usize,
        material: MaterialId,
    ) -> Result<MaterialId, SceneError> {
        let entry = self
            .mesh_mut(mesh)?
            .materials
            .get_mut(slot)
            .ok_or(SceneError::EntityNotFound("material slot"))?;
        Ok(std::mem::replace(entry, material))
    }

    /// Gives `mesh` a new geometry and frees the old one if unshared.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh does not exist.
    pub fn replace_geometry(&mut self, mesh: MeshId, geometry: BoxGeometry) -> Result<(), SceneError> {
        let new_id = self.geometries.insert(geometry);
        let old_id = match self.meshes.get_mut(mesh) {
            Some(data) => std::mem::replace(&mut data.geometry, new_id),
            None => {
                self.geometries.remove(new_id);
                return Err(SceneError::EntityNotFound("mesh"));
            }
        };
        self.release_geometry(old_id);
        Ok(())
    }

    /// Removes a mesh and frees its unshared geometry and materials.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh does not exist.
    pub fn dispose_mesh(&mut self, id: MeshId) -> Result<(), SceneError> {
        let data = self
            .meshes
            .remove(id)
            .ok_or(SceneError::EntityNotFound("mesh"))?;
        self.release_geometry(data.geometry);
        for material in data.materials {
            self.release_material(material);
        }
        Ok(())
    }

    fn release_geometry(&mut self, id: GeometryId) {
        if !self.meshes.values().any(|m| m.geometry == id) {
            self.geometries.remove(id);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Face;

    fn box_mesh(store: &mut SceneStore, name: &str) -> MeshId {
        let geometry = store.add_geometry(BoxGeometry::new(Vector3::new(1.0, 1.0, 1.0)));
        let materials = Face::ALL
            .iter()
            .map(|f| store.add_material(Material::solid(f.color())))
            .collect();
        store.add_mesh(MeshData::new(name, geometry, materials))
    }

    #[test]
    fn new_store_holds_only_transparent_material() {
        let store = SceneStore::default();
        assert_eq!(store.material_count(), 1);
        assert_eq!(store.geometry_count(), 0);
        assert!(!store.material(store.transparent_material()).unwrap().is_visible());
    }

    #[test]
    fn dispose_releases_everything_unshared() {
        let mut store = SceneStore::default();
        let mesh = box_mesh(&mut store, "cube");
        assert_eq!(store.material_count(), 7);
        store.dispose_mesh(mesh).unwrap();
        assert_eq!(store.material_count(), 1);
        assert_eq!(store.geometry_count(), 0);
        assert_eq!(store.mesh_count(), 0);
        assert!(store.dispose_mesh(mesh).is_err());
    }

    #[test]
    fn shared_resources_survive_partial_dispose() {
        let mut store = SceneStore::default();
        let geometry = store.add_geometry(BoxGeometry::new(Vector3::new(0.1, 0.1, 0.1)));
        let material = store.add_material(Material::basic(Color::RED));
        let a = store.add_mesh(MeshData::new("a", geometry, vec![material]));
        let b = store.add_mesh(MeshData::new("b", geometry, vec![material]));
        store.dispose_mesh(a).unwrap();
        assert_eq!(store.geometry_count(), 1);
        assert!(store.material(material).is_ok());
        store.dispose_mesh(b).unwrap();
        assert_eq!(store.geometry_count(), 0);
        assert!(store.material(material).is_err());
    }

    #[test]
    fn replace_geometry_frees_old() {
        let mut store = SceneStore::default();
        let mesh = box_mesh(&mut store, "cube");
        for i in 1..20 {
            let size = f64::from(i);
            store
                .replace_geometry(mesh, BoxGeometry::new(Vector3::new(size, size, size)))
                .unwrap();
        }
        assert_eq!(store.geometry_count(), 1);
        let geometry = store.mesh(mesh).unwrap().geometry;
        assert!((store.geometry(geometry).unwrap().extents().x - 19.0).abs() < 1e-12);
    }

    #[test]
    fn set_material_returns_previous() {
        let mut store = SceneStore::default();
        let mesh = box_mesh(&mut store, "cube");
        let transparent = store.transparent_material();
        let before = store.mesh_material(mesh, 2).unwrap();
        let previous = store.set_mesh_material(mesh, 2, transparent).unwrap();
        assert_eq!(before, previous);
        assert_eq!(store.mesh_material(mesh, 2).unwrap(), transparent);
        assert!(store.set_mesh_material(mesh, 6, transparent).is_err());
    }

    #[test]
    fn transparent_material_is_never_released() {
        let mut store = SceneStore::default();
        let transparent = store.transparent_material();
        assert!(!store.release_material(transparent));
        assert!(store.material(transparent).is_ok());
    }
}
