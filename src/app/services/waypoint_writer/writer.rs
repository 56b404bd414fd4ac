//! Waypoint serialisation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::contract::RawWaypoint;
use crate::app::models::WaypointRecord;
use crate::config::OutputConfig;
use crate::{Error, Result};

/// Writes waypoint records as a JSON array
#[derive(Debug, Clone)]
pub struct WaypointWriter {
    pretty: bool,
}

impl Default for WaypointWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WaypointWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.pretty)
    }

    /// Render records as JSON text, with a trailing newline
    pub fn to_json_string(&self, records: &[WaypointRecord]) -> Result<String> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        }
        .map_err(|e| Error::json("Failed to serialise waypoints", e))?;

        json.push('\n');
        Ok(json)
    }

    /// Write records to any writer
    pub fn write_to<W: Write>(&self, records: &[WaypointRecord], mut writer: W) -> Result<()> {
        let json = self.to_json_string(records)?;
        writer
            .write_all(json.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io("Failed to write waypoints", e))
    }

    /// Write records to `path`, creating parent directories as needed
    pub fn write_file(&self, records: &[WaypointRecord], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
        self.write_to(records, BufWriter::new(file))?;

        info!("Wrote {} waypoints to {}", records.len(), path.display());
        Ok(())
    }
}

/// Load a waypoint JSON file without enforcing zone or coordinate rules
pub fn read_waypoints(path: &Path) -> Result<Vec<RawWaypoint>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::json(format!("'{}' is not a waypoint list", path.display()), e))
}
