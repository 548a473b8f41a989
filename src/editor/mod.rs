//! The box editor session.
//!
//! A [`BoxEditor`] owns the scene, camera and every piece of edit state. All
//! mutation goes through its methods (or [`BoxEditor::apply`]); rendering
//! only borrows it through [`BoxEditor::frame`].

mod command;
mod drag;
mod frame;
mod gesture;
mod preview;
mod readout;

pub use command::{EditorCommand, Ignored, KeyChord, Outcome};
pub use drag::DragState;
pub use frame::{DrawItem, Frame};
pub use gesture::PointerGesture;
pub use preview::PreviewBox;
pub use readout::{format_readout, EMPTY_READOUT};

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::{Result, SceneError};
use crate::math::{Point2, Point3, Vector3};
use crate::model::{
    BoxDimensions, Color, DimensionInput, Face, HandleSet, RemovedFaceStack,
    HANDLE_COUNT,
};
use crate::scene::{
    default_lights, BoxGeometry, Camera, Material, MaterialId, MeshData, MeshId, OrbitControls,
    SceneStore,
};

/// Name of the translucent outer box mesh.
pub const OUTER_BOX_NAME: &str = "outerBox";
/// Name of the inner box mesh.
pub const INNER_BOX_NAME: &str = "innerBox";

/// State captured when a box is created, used by reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialSnapshot {
    pub dimensions: BoxDimensions,
    pub colors: [Color; 6],
}

impl InitialSnapshot {
    fn capture(dimensions: BoxDimensions) -> Self {
        Self {
            dimensions,
            colors: Face::ALL.map(Face::color),
        }
    }
}

/// The live box: its dimensions, meshes, handles and pending removals.
#[derive(Debug)]
struct EditedBox {
    dimensions: BoxDimensions,
    inner: MeshId,
    outer: MeshId,
    handles: HandleSet,
    handle_meshes: Vec<MeshId>,
    removed: RemovedFaceStack<MaterialId>,
}

/// An interactive box-editing session.
#[derive(Debug)]
pub struct BoxEditor {
    config: EditorConfig,
    scene: SceneStore,
    camera: Camera,
    orbit: OrbitControls,
    current: Option<EditedBox>,
    snapshot: Option<InitialSnapshot>,
    drag: DragState,
    gesture: PointerGesture,
    preview: PreviewBox,
    readout: String,
}

impl Default for BoxEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl BoxEditor {
    /// Creates an empty session: lights and camera, but no box.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let camera = Camera::perspective(
            config.camera_fov_degrees,
            config.viewport.aspect(),
            config.camera_near,
            config.camera_far,
        );
        let orbit = OrbitControls::new(config.orbit_speed);
        let preview = PreviewBox::new(&config);
        let readout = format_readout(None, config.unit_label);
        Self {
            scene: SceneStore::new(default_lights(Vector3::new(1.0, 1.0, 1.5))),
            camera,
            orbit,
            current: None,
            snapshot: None,
            drag: DragState::Idle,
            gesture: PointerGesture::Idle,
            preview,
            readout,
            config,
        }
    }

    // --- Accessors ---

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Scene arenas backing the session.
    #[must_use]
    pub fn scene(&self) -> &SceneStore {
        &self.scene
    }

    /// Main viewport camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Whether pointer motion may orbit the main camera.
    #[must_use]
    pub fn orbit_enabled(&self) -> bool {
        self.orbit.enabled
    }

    /// Current handle drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The hierarchy preview box.
    #[must_use]
    pub fn preview(&self) -> &PreviewBox {
        &self.preview
    }

    /// Whether a box has been created.
    #[must_use]
    pub fn has_box(&self) -> bool {
        self.current.is_some()
    }

    /// Current outer dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Option<BoxDimensions> {
        self.current.as_ref().map(|b| b.dimensions)
    }

    /// Current inner cavity dimensions.
    #[must_use]
    pub fn inner_dimensions(&self) -> Option<BoxDimensions> {
        self.dimensions()
            .map(|d| d.inner(self.config.wall_thickness, self.config.min_dimension))
    }

    /// Resize handles of the current box.
    #[must_use]
    pub fn handles(&self) -> Option<&HandleSet> {
        self.current.as_ref().map(|b| &b.handles)
    }

    /// State captured at creation, restored by reset.
    #[must_use]
    pub fn snapshot(&self) -> Option<&InitialSnapshot> {
        self.snapshot.as_ref()
    }

    /// Text of the dimensions panel.
    #[must_use]
    pub fn readout(&self) -> &str {
        &self.readout
    }

    /// Faces currently removed, oldest first.
    #[must_use]
    pub fn removed_faces(&self) -> Vec<Face> {
        self.current
            .as_ref()
            .map(|b| b.removed.faces().collect())
            .unwrap_or_default()
    }

    /// Whether `face` is currently removed.
    #[must_use]
    pub fn is_face_removed(&self, face: Face) -> bool {
        self.current
            .as_ref()
            .is_some_and(|b| b.removed.contains(face))
    }

    /// Material id shown by `face` of the inner box.
    ///
    /// # Errors
    ///
    /// Returns an error if no box exists.
    pub fn inner_material_id(&self, face: Face) -> Result<MaterialId> {
        let current = self.current.as_ref().ok_or(SceneError::NoBox)?;
        Ok(self.scene.mesh_material(current.inner, face.index())?)
    }

    /// Material id shown by `face` of the outer box.
    ///
    /// # Errors
    ///
    /// Returns an error if no box exists.
    pub fn outer_material_id(&self, face: Face) -> Result<MaterialId> {
        let current = self.current.as_ref().ok_or(SceneError::NoBox)?;
        Ok(self.scene.mesh_material(current.outer, face.index())?)
    }

    /// Material shown by `face` of the inner box.
    ///
    /// # Errors
    ///
    /// Returns an error if no box exists.
    pub fn inner_material(&self, face: Face) -> Result<&Material> {
        Ok(self.scene.material(self.inner_material_id(face)?)?)
    }

    /// Material shown by `face` of the outer box.
    ///
    /// # Errors
    ///
    /// Returns an error if no box exists.
    pub fn outer_material(&self, face: Face) -> Result<&Material> {
        Ok(self.scene.material(self.outer_material_id(face)?)?)
    }

    // --- Commands ---

    /// Dispatches one input command.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimension input, or if the scene arena
    /// is inconsistent.
    pub fn apply(&mut self, command: EditorCommand) -> Result<Outcome> {
        match command {
            EditorCommand::Create(dims) => self.create(dims),
            EditorCommand::Submit(input) => self.submit(&input),
            EditorCommand::BeginDrag { handle } => Ok(self.begin_drag(handle)),
            EditorCommand::DragTo { handle, position } => self.drag_to(handle, &position),
            EditorCommand::EndDrag => Ok(self.end_drag()),
            EditorCommand::Click(ndc) => self.click(&ndc),
            EditorCommand::RemoveFace(face) => self.remove_face(face),
            EditorCommand::Undo => self.undo(),
            EditorCommand::Reset => self.reset(),
            EditorCommand::Key(chord) => self.key(chord),
        }
    }

    /// Validates the dimension form and creates a box from it.
    ///
    /// # Errors
    ///
    /// Returns the validation error, leaving the session untouched.
    pub fn submit(&mut self, input: &DimensionInput) -> Result<Outcome> {
        match input.parse() {
            Ok(dims) => self.create(dims),
            Err(err) => {
                warn!(field = err.field(), "rejected dimension input: {err}");
                Err(err.into())
            }
        }
    }

    /// Replaces any existing box with a new one of outer size `dims`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension exceeds the configured maximum, leaving
    /// the session untouched, or if the scene arena is inconsistent.
    pub fn create(&mut self, dims: BoxDimensions) -> Result<Outcome> {
        if let Err(err) = dims.check_max(self.config.max_dimension) {
            warn!(field = err.field(), "rejected box dimensions: {err}");
            return Err(err.into());
        }
        let snapshot = InitialSnapshot::capture(dims);
        self.rebuild(&snapshot)?;
        self.snapshot = Some(snapshot);
        info!(
            length = dims.length,
            breadth = dims.breadth,
            height = dims.height,
            "box created"
        );
        Ok(Outcome::Created(dims))
    }

    /// Rebuilds the box from the creation snapshot and clears all removals.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene arena is inconsistent.
    pub fn reset(&mut self) -> Result<Outcome> {
        let Some(snapshot) = self.snapshot else {
            debug!("reset ignored: no box");
            return Ok(Outcome::Ignored(Ignored::NoBox));
        };
        self.rebuild(&snapshot)?;
        info!("box reset to initial state");
        Ok(Outcome::Reset(snapshot.dimensions))
    }

    /// Enters the dragging state for `handle`, locking camera orbit.
    pub fn begin_drag(&mut self, handle: usize) -> Outcome {
        let Some(current) = self.current.as_mut() else {
            debug!("drag ignored: no box");
            return Outcome::Ignored(Ignored::NoBox);
        };
        if handle >= HANDLE_COUNT {
            debug!(handle, "drag ignored: unknown handle");
            return Outcome::Ignored(Ignored::UnknownHandle(handle));
        }
        current.handles.commit_baseline();
        self.drag = DragState::Dragging { handle };
        self.orbit.enabled = false;
        debug!(handle, "drag started");
        Outcome::DragStarted { handle }
    }

    /// Resizes the box for the dragged `handle` now sitting at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene arena is inconsistent.
    pub fn drag_to(&mut self, handle: usize, position: &Point3) -> Result<Outcome> {
        if self.drag.handle() != Some(handle) {
            debug!(handle, "drag update ignored: not dragging this handle");
            return Ok(Outcome::Ignored(Ignored::NotDragging));
        }
        let Some(current) = self.current.as_ref() else {
            return Ok(Outcome::Ignored(Ignored::NoBox));
        };
        let Some(resize) = current
            .handles
            .resize_for(
                handle,
                position,
                self.config.min_dimension,
                self.config.max_dimension,
            )
        else {
            return Ok(Outcome::Ignored(Ignored::UnknownHandle(handle)));
        };

        self.apply_dimensions(resize.dimensions)?;
        debug!(
            axis = ?resize.axis,
            length = resize.dimensions.length,
            breadth = resize.dimensions.breadth,
            height = resize.dimensions.height,
            "box resized"
        );
        Ok(Outcome::Resized(resize))
    }

    /// Leaves the dragging state, unlocking orbit and committing the handle
    /// positions as the next drag's baseline.
    pub fn end_drag(&mut self) -> Outcome {
        if !self.drag.is_dragging() {
            return Outcome::Ignored(Ignored::NotDragging);
        }
        self.drag = DragState::Idle;
        self.orbit.enabled = true;
        if let Some(current) = self.current.as_mut() {
            current.handles.commit_baseline();
        }
        debug!("drag ended");
        Outcome::DragEnded
    }

    /// Removes the inner-box face under `ndc`.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera is degenerate or the scene arena is
    /// inconsistent.
    pub fn click(&mut self, ndc: &Point2) -> Result<Outcome> {
        let Some(current) = self.current.as_ref() else {
            return Ok(Outcome::Ignored(Ignored::NoBox));
        };
        let ray = self.camera.ray_from_ndc(ndc)?;
        let geometry = self.scene.mesh(current.inner)?.geometry;
        let Some(hit) = self.scene.geometry(geometry)?.bounds().ray_hit(&ray) else {
            debug!(x = ndc.x, y = ndc.y, "click missed the box");
            return Ok(Outcome::Ignored(Ignored::Miss));
        };
        self.remove_face(Face::from_axis(hit.axis, hit.positive))
    }

    /// Hides `face` on both boxes, remembering the inner material for undo.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene arena is inconsistent.
    pub fn remove_face(&mut self, face: Face) -> Result<Outcome> {
        let Some(current) = self.current.as_mut() else {
            return Ok(Outcome::Ignored(Ignored::NoBox));
        };
        if current.removed.contains(face) {
            debug!(%face, "face already removed");
            return Ok(Outcome::Ignored(Ignored::AlreadyRemoved(face)));
        }

        let transparent = self.scene.transparent_material();
        let previous = self
            .scene
            .set_mesh_material(current.inner, face.index(), transparent)?;
        current.removed.push(face, previous);
        let outer_previous = self
            .scene
            .set_mesh_material(current.outer, face.index(), transparent)?;
        self.scene.release_material(outer_previous);

        info!(%face, index = face.index(), "face removed");
        Ok(Outcome::FaceRemoved(face))
    }

    /// Restores the most recently removed face.
    ///
    /// The inner face gets back the exact material it showed before removal;
    /// the outer face gets a fresh translucent material of the face color.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene arena is inconsistent.
    pub fn undo(&mut self) -> Result<Outcome> {
        let Some(entry) = self.current.as_mut().and_then(|b| b.removed.pop()) else {
            debug!("no face to undo");
            return Ok(Outcome::Ignored(Ignored::NothingToUndo));
        };
        let Some(current) = self.current.as_ref() else {
            return Ok(Outcome::Ignored(Ignored::NoBox));
        };
        let (inner, outer) = (current.inner, current.outer);
        let face = entry.face;

        let hidden = self
            .scene
            .set_mesh_material(inner, face.index(), entry.previous)?;
        self.scene.release_material(hidden);

        let fresh = self.scene.add_material(Material::translucent(
            face.color(),
            self.config.outer_opacity,
        ));
        let hidden = self.scene.set_mesh_material(outer, face.index(), fresh)?;
        self.scene.release_material(hidden);

        info!(%face, index = face.index(), "face restored");
        Ok(Outcome::FaceRestored(face))
    }

    /// Handles a keyboard chord; only Ctrl+Z is bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene arena is inconsistent.
    pub fn key(&mut self, chord: KeyChord) -> Result<Outcome> {
        if chord.is_undo() {
            self.undo()
        } else {
            Ok(Outcome::Ignored(Ignored::UnboundKey))
        }
    }

    /// Borrows the session for drawing.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame::collect(self)
    }

    // --- Internals ---

    /// Tears down the current box and builds a fresh one from `snapshot`.
    fn rebuild(&mut self, snapshot: &InitialSnapshot) -> Result<()> {
        self.teardown()?;

        let dims = snapshot.dimensions;
        let inner_dims = dims.inner(self.config.wall_thickness, self.config.min_dimension);

        let inner_geometry = self.scene.add_geometry(BoxGeometry::from_dimensions(&inner_dims));
        let inner_materials = snapshot
            .colors
            .iter()
            .map(|&color| self.scene.add_material(Material::solid(color)))
            .collect();
        let inner = self
            .scene
            .add_mesh(MeshData::new(INNER_BOX_NAME, inner_geometry, inner_materials));

        let outer_geometry = self.scene.add_geometry(BoxGeometry::from_dimensions(&dims));
        let outer_materials = snapshot
            .colors
            .iter()
            .map(|&color| {
                self.scene
                    .add_material(Material::translucent(color, self.config.outer_opacity))
            })
            .collect();
        let outer = self
            .scene
            .add_mesh(MeshData::new(OUTER_BOX_NAME, outer_geometry, outer_materials));

        let handles = HandleSet::from_dimensions(&dims);
        let handle_meshes = self.add_handle_meshes(&handles);

        self.camera
            .frame(dims.max_dimension(), self.config.camera_distance_factor);
        self.current = Some(EditedBox {
            dimensions: dims,
            inner,
            outer,
            handles,
            handle_meshes,
            removed: RemovedFaceStack::new(),
        });
        self.refresh_readout();
        Ok(())
    }

    fn add_handle_meshes(&mut self, handles: &HandleSet) -> Vec<MeshId> {
        let size = self.config.handle_size;
        let geometry = self
            .scene
            .add_geometry(BoxGeometry::new(Vector3::new(size, size, size)));
        let material = self.scene.add_material(Material::basic(Color::RED));
        handles
            .positions()
            .iter()
            .enumerate()
            .map(|(i, position)| {
                self.scene.add_mesh(
                    MeshData::new(format!("handle{i}"), geometry, vec![material]).at(*position),
                )
            })
            .collect()
    }

    /// Disposes every mesh of the current box and the materials held for
    /// undo. Cancels an in-progress drag.
    fn teardown(&mut self) -> Result<()> {
        if self.drag.is_dragging() {
            self.drag = DragState::Idle;
            self.orbit.enabled = true;
        }
        self.gesture = PointerGesture::Idle;

        let Some(mut old) = self.current.take() else {
            return Ok(());
        };
        self.scene.dispose_mesh(old.inner)?;
        self.scene.dispose_mesh(old.outer)?;
        for mesh in old.handle_meshes.drain(..) {
            self.scene.dispose_mesh(mesh)?;
        }
        for entry in old.removed.drain() {
            self.scene.release_material(entry.previous);
        }
        Ok(())
    }

    /// Applies new outer dimensions to both meshes and all handles.
    fn apply_dimensions(&mut self, dims: BoxDimensions) -> Result<()> {
        let inner_dims = dims.inner(self.config.wall_thickness, self.config.min_dimension);
        let current = self.current.as_mut().ok_or(SceneError::NoBox)?;

        self.scene
            .replace_geometry(current.inner, BoxGeometry::from_dimensions(&inner_dims))?;
        self.scene
            .replace_geometry(current.outer, BoxGeometry::from_dimensions(&dims))?;

        current.dimensions = dims;
        current.handles.reposition(&dims);
        for (mesh, position) in current.handle_meshes.iter().zip(current.handles.positions()) {
            self.scene.mesh_mut(*mesh)?.position = *position;
        }
        self.refresh_readout();
        Ok(())
    }

    fn refresh_readout(&mut self) {
        let dims = self.current.as_ref().map(|b| b.dimensions);
        self.readout = format_readout(dims.as_ref(), self.config.unit_label);
    }
}
