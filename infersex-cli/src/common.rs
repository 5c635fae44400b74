use std::path::Path;

use anyhow::Result;
use log::info;

use infersex_core::InferSexConfig;

pub fn load_config(path: Option<&String>) -> Result<InferSexConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            InferSexConfig::from_file(Path::new(path))
        }
        None => Ok(InferSexConfig::default()),
    }
}
