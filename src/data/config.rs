//! YAML scene configuration

use std::collections::HashSet;

use serde::Deserialize;

use crate::animation::{DEFAULT_RATE, DEFAULT_SNAP_EPSILON};
use crate::entities::TreeShape;
use crate::error::{non_negative, positive, unit_fraction, Result, SceneError};
use super::photo::Photo;

const DEFAULT_PHOTO_URLS: [&str; 6] = [
    "https://picsum.photos/id/10/300/300",
    "https://picsum.photos/id/13/300/300",
    "https://picsum.photos/id/17/300/300",
    "https://picsum.photos/id/25/300/300",
    "https://picsum.photos/id/28/300/300",
    "https://picsum.photos/id/29/300/300",
];

/// Full scene description; every field is optional in YAML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for the randomized foliage and ornament layouts
    pub seed: u64,
    pub transition: TransitionConfig,
    pub foliage: CountConfig,
    pub ornaments: CountConfig,
    pub tree: TreeShape,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Approach rate per second
    pub rate: f32,
    /// Distance from the target at which progress snaps
    pub snap_epsilon: f32,
    /// Whether toggling chaos/formed drops the focused photo
    pub clear_selection_on_toggle: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountConfig {
    pub count: usize,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            snap_epsilon: DEFAULT_SNAP_EPSILON,
            clear_selection_on_toggle: true,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 2025,
            transition: TransitionConfig::default(),
            foliage: CountConfig { count: 1200 },
            ornaments: CountConfig { count: 120 },
            tree: TreeShape::default(),
            photos: DEFAULT_PHOTO_URLS
                .iter()
                .enumerate()
                .map(|(i, url)| Photo::new(i as u32, url))
                .collect(),
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("transition.rate", self.transition.rate)?;
        unit_fraction("transition.snap_epsilon", self.transition.snap_epsilon)?;
        positive("tree.height", self.tree.height)?;
        non_negative("tree.base_radius", self.tree.base_radius)?;
        non_negative("tree.scatter_radius", self.tree.scatter_radius)?;

        let mut seen = HashSet::new();
        for photo in &self.photos {
            if !seen.insert(photo.id) {
                return Err(SceneError::DuplicatePhoto(photo.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r#"
seed: 7
transition:
  rate: 1.5
  clear_selection_on_toggle: false
foliage:
  count: 300
tree:
  height: 10.0
photos:
  - id: 0
    url: "https://example.com/a.jpg"
  - id: 5
    url: ""
"#;

    #[test]
    fn test_defaults_match_reference_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.transition.rate, 0.8);
        assert_eq!(config.transition.snap_epsilon, 0.001);
        assert!(config.transition.clear_selection_on_toggle);
        assert_eq!(config.photos.len(), 6);
        assert_eq!(config.photos[3].id, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let config = SceneConfig::from_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.transition.rate, 1.5);
        assert_eq!(config.transition.snap_epsilon, DEFAULT_SNAP_EPSILON);
        assert!(!config.transition.clear_selection_on_toggle);
        assert_eq!(config.foliage.count, 300);
        assert_eq!(config.ornaments.count, 120);
        assert_eq!(config.tree.height, 10.0);
        assert_eq!(config.tree.base_radius, 5.0);
        assert_eq!(config.photos[1].url, "");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SceneConfig::from_yaml("{}").unwrap();
        assert_eq!(config.photos.len(), 6);
        assert_eq!(config.foliage.count, 1200);
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let err = SceneConfig::from_yaml("transition:\n  rate: 0.0\n").unwrap_err();
        assert!(matches!(err, SceneError::InvalidSetting { name: "transition.rate", .. }));
    }

    #[test]
    fn test_rejects_snap_epsilon_of_one_or_more() {
        for yaml in ["transition: { snap_epsilon: 1.0 }", "transition: { snap_epsilon: 3.0 }"] {
            let err = SceneConfig::from_yaml(yaml).unwrap_err();
            assert!(matches!(
                err,
                SceneError::InvalidSetting { name: "transition.snap_epsilon", .. }
            ));
        }
        assert!(SceneConfig::from_yaml("transition: { snap_epsilon: 0.05 }").is_ok());
    }

    #[test]
    fn test_rejects_duplicate_photo() {
        let yaml = r#"
photos:
  - { id: 1, url: "a" }
  - { id: 1, url: "b" }
"#;
        let err = SceneConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SceneError::DuplicatePhoto(1)));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = SceneConfig::from_yaml("seed: [not a number").unwrap_err();
        assert!(matches!(err, SceneError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML parse error"));
    }
}
