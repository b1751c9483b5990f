use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::AreaId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AreaConfig {
    #[serde(default = "default_areas_dir")]
    pub areas_dir: PathBuf,

    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,

    #[serde(default = "default_version")]
    pub version: [u8; 2],

    #[serde(default = "default_knowledge")]
    pub knowledge: PathBuf,
}

impl Default for AreaConfig {
    fn default() -> Self {
        AreaConfig {
            areas_dir: default_areas_dir(),
            temp_dir: default_temp_dir(),
            version: default_version(),
            knowledge: default_knowledge(),
        }
    }
}

impl AreaConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(config) => {
                    info!("Uses {path:?}");
                    config
                }
                Err(error) => {
                    error!("Unable to parse config file, {error:?}");
                    AreaConfig::default()
                }
            },
            _ => {
                info!("Uses default config, {path:?} not found");
                AreaConfig::default()
            }
        }
    }

    pub fn area_path(&self, id: AreaId) -> PathBuf {
        self.areas_dir.join(format!("{id}.area"))
    }

    pub fn temp_path(&self, id: AreaId) -> PathBuf {
        self.temp_dir.join(format!("{id}.tmp"))
    }
}

fn default_areas_dir() -> PathBuf {
    PathBuf::from("areas")
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("temp")
}

fn default_version() -> [u8; 2] {
    [1, 0]
}

fn default_knowledge() -> PathBuf {
    PathBuf::from("assets/database.sqlite")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: AreaConfig = serde_json::from_str(r#"{"temp_dir": "saves/current"}"#).unwrap();
        assert_eq!(config.temp_dir, PathBuf::from("saves/current"));
        assert_eq!(config.areas_dir, PathBuf::from("areas"));
        assert_eq!(config.version, [1, 0]);
        assert_eq!(config.temp_path(12), PathBuf::from("saves/current/12.tmp"));
        assert_eq!(config.area_path(12), PathBuf::from("areas/12.area"));
    }

    #[test]
    fn test_absent_file_falls_back_to_defaults() {
        let config = AreaConfig::load("does/not/exist.json");
        assert_eq!(config.knowledge, PathBuf::from("assets/database.sqlite"));
    }
}
