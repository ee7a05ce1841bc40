pub mod config;
pub mod photo;

pub use config::{CountConfig, SceneConfig, TransitionConfig};
pub use photo::{Photo, PhotoAlbum};
