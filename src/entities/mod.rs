//! Animated entity classes and their chaos/formed endpoints

pub mod foliage;
pub mod layout;
pub mod ornaments;
pub mod polaroids;
pub mod pose;
pub mod set;

pub use foliage::FoliageSystem;
pub use layout::TreeShape;
pub use ornaments::OrnamentSystem;
pub use polaroids::{Polaroid, PolaroidSystem, PANEL_PICK_RADIUS};
pub use pose::{DualPose, Entity, Pose, POSE_STRIDE};
pub use set::EntitySet;
