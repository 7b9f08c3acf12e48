use serde::{Deserialize, Serialize};

/// A show from the user's list. The matcher reads it, never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedShow {
    /// Display name as entered by the user
    pub name: String,

    /// Preferred resolution tag, e.g. `720p`
    #[serde(default = "default_resolution")]
    pub resolution: String,
}

fn default_resolution() -> String {
    "720p".to_string()
}

impl TrackedShow {
    pub fn new(name: impl Into<String>, resolution: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolution: resolution.into(),
        }
    }

    /// A show whose name cannot be matched against anything
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let show: TrackedShow = serde_json::from_str(r#"{"name":"Gate"}"#).unwrap();
        assert_eq!(show.resolution, "720p");
    }

    #[test]
    fn test_is_blank() {
        assert!(TrackedShow::new("  ", "1080p").is_blank());
        assert!(!TrackedShow::new("Gate", "1080p").is_blank());
    }
}
