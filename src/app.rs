//! Top-level application state and its action handlers
//!
//! All mutation goes through `toggle`, `pick`, `edit_photo` and `tick`.
//! Within a frame the controller is advanced first and every entity system
//! then reads that same progress value.

use crate::animation::{TransitionController, TransitionState};
use crate::data::{PhotoAlbum, SceneConfig};
use crate::entities::{FoliageSystem, OrnamentSystem, PolaroidSystem, PANEL_PICK_RADIUS};
use crate::error::Result;
use crate::interaction::{HitInfo, RayPicker, Selection};
use crate::math::{Mat4, Vec3};

pub struct Greeting {
    state: TransitionState,
    controller: TransitionController,
    selection: Selection,
    photos: PhotoAlbum,
    foliage: FoliageSystem,
    ornaments: OrnamentSystem,
    polaroids: PolaroidSystem,
    picker: RayPicker,
    clear_selection_on_toggle: bool,
}

impl Greeting {
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let photos = PhotoAlbum::new(config.photos.clone());
        let foliage = FoliageSystem::new(config.foliage.count, &config.tree, config.seed)?;
        let ornaments = OrnamentSystem::new(config.ornaments.count, &config.tree, config.seed)?;
        let polaroids = PolaroidSystem::new(&photos.ids(), &config.tree)?;

        log::info!(
            "scene ready: {} foliage, {} ornaments, {} photos",
            foliage.count(),
            ornaments.count(),
            polaroids.count()
        );

        Ok(Self {
            state: TransitionState::Chaos,
            controller: TransitionController::new(
                config.transition.rate,
                config.transition.snap_epsilon,
            )?,
            selection: Selection::Unselected,
            photos,
            foliage,
            ornaments,
            polaroids,
            picker: RayPicker::new(PANEL_PICK_RADIUS),
            clear_selection_on_toggle: config.transition.clear_selection_on_toggle,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::new(&SceneConfig::from_yaml(yaml)?)
    }

    /// Per-frame update; returns the progress every entity reads this frame
    pub fn tick(&mut self, delta_time: f32) -> f32 {
        self.controller.advance(delta_time, self.state)
    }

    /// Flip between chaos and formed
    pub fn toggle(&mut self) -> TransitionState {
        self.state = self.state.toggled();
        if self.clear_selection_on_toggle && self.selection.is_selected() {
            log::debug!("toggle clears selection {:?}", self.selection);
            self.selection = Selection::Unselected;
        }
        log::info!("transition target is now {:?}", self.state);
        self.state
    }

    /// Focus a photo panel, or clear focus with `None`.
    /// Picking an id with no photo behaves like picking empty space.
    pub fn pick(&mut self, id: Option<u32>) -> Selection {
        self.selection = match id {
            Some(id) if !self.photos.contains(id) => {
                log::warn!("pick of unknown photo {}, clearing selection", id);
                Selection::Unselected
            }
            other => Selection::from_pick(other),
        };
        log::debug!("selection: {:?}", self.selection);
        self.selection
    }

    /// Screen-space pick against the panels at their current positions
    #[allow(clippy::too_many_arguments)]
    pub fn pick_at(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
        view: &Mat4,
        projection: &Mat4,
        camera_pos: Vec3,
    ) -> Option<HitInfo> {
        let targets = self.polaroids.pick_targets(self.progress());
        let hit = self.picker.pick(
            screen_x,
            screen_y,
            screen_width,
            screen_height,
            view,
            projection,
            camera_pos,
            &targets,
        );
        self.pick(hit.map(|h| h.photo_id));
        hit
    }

    /// Replace the image reference of one photo; selection is unaffected
    pub fn edit_photo(&mut self, id: u32, url: &str) -> bool {
        let updated = self.photos.set_url(id, url);
        if updated {
            log::debug!("photo {} now points at {:?}", id, url);
        } else {
            log::warn!("edit of unknown photo {} ignored", id);
        }
        updated
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.controller.progress()
    }

    /// Whether progress has reached the current target
    pub fn is_settled(&self) -> bool {
        self.controller.is_settled(self.state)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn photos(&self) -> &PhotoAlbum {
        &self.photos
    }

    /// Camera auto-rotation runs only on the formed tree with nothing focused
    pub fn auto_rotate(&self) -> bool {
        self.state == TransitionState::Formed && !self.selection.is_selected()
    }

    pub fn foliage(&self) -> &FoliageSystem {
        &self.foliage
    }

    pub fn ornaments(&self) -> &OrnamentSystem {
        &self.ornaments
    }

    pub fn polaroids(&self) -> &PolaroidSystem {
        &self.polaroids
    }
}
