//! Configuration management

use std::path::PathBuf;

use frameview_core::{Error, Result, TableFrame};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Title override for the served frame
    pub title: Option<String>,

    /// Path to a JSON dataset; the built-in sample frame is used when unset
    pub frame_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Ok(Self::load_from_env())
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Self {
        Config {
            title: std::env::var("FRAMEVIEW_TITLE").ok(),
            frame_path: std::env::var("FRAMEVIEW_FRAME").ok().map(PathBuf::from),
        }
    }

    /// Load the frame to serve, applying the title override when set
    pub fn load_frame(&self) -> Result<TableFrame> {
        let mut frame = match &self.frame_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            None => TableFrame::sample(),
        };

        if frame.columns.is_empty() {
            return Err(Error::Frame("Frame has no columns".to_string()));
        }

        if let Some(title) = &self.title {
            frame.title = title.clone();
        }

        Ok(frame)
    }
}
