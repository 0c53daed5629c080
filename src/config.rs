use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::flip::timing::FlipTiming;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::preload::window::PreloadPolicy;

/// Controller configuration: flip timing plus preload policy.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlipbookConfig {
    /// Page turn timing.
    pub timing: FlipTiming,
    /// Preload window and eviction distance.
    pub preload: PreloadPolicy,
}

impl FlipbookConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlipbookResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlipbookError::config(format!("parse flipbook config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlipbookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlipbookError::config(format!("open flipbook config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate timing and preload constants.
    pub fn validate(&self) -> FlipbookResult<()> {
        self.timing.validate()?;
        self.preload.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
