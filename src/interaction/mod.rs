pub mod picking;
pub mod selection;

pub use picking::{HitInfo, RayPicker};
pub use selection::Selection;
