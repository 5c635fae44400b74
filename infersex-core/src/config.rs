use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::consts::{
    AUTOSOME_REGION, DEFAULT_SAMTOOLS, MAX_Y_AUTOSOME_RATIO, MAX_Y_X_RATIO, MIN_X_AUTOSOME_RATIO,
    X_REGION, Y_REGION,
};
use crate::errors::InferSexError;

///
/// Region names passed to the subsetting backend.
///
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegionNames {
    pub autosome: String,
    pub x: String,
    pub y: String,
}

impl Default for RegionNames {
    fn default() -> Self {
        RegionNames {
            autosome: AUTOSOME_REGION.to_string(),
            x: X_REGION.to_string(),
            y: Y_REGION.to_string(),
        }
    }
}

impl RegionNames {
    /// Regions in the order they are counted: autosome, chrX, chrY.
    pub fn ordered(&self) -> [&str; 3] {
        [self.autosome.as_str(), self.x.as_str(), self.y.as_str()]
    }
}

///
/// Classification cut-offs. All comparisons are inclusive.
///
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub min_x_autosome: f64,
    pub max_y_autosome: f64,
    pub max_y_x: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            min_x_autosome: MIN_X_AUTOSOME_RATIO,
            max_y_autosome: MAX_Y_AUTOSOME_RATIO,
            max_y_x: MAX_Y_X_RATIO,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InferSexConfig {
    pub samtools: String,
    pub regions: RegionNames,
    pub thresholds: Thresholds,
}

impl Default for InferSexConfig {
    fn default() -> Self {
        InferSexConfig {
            samtools: DEFAULT_SAMTOOLS.to_string(),
            regions: RegionNames::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl InferSexConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)
            .with_context(|| format!("Couldn't read config file: {:?}", path))?;

        let config = Self::from_toml(&contents)
            .with_context(|| format!("Couldn't load config file: {:?}", path))?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, InferSexError> {
        let config: InferSexConfig =
            toml::from_str(contents).map_err(|e| InferSexError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InferSexError> {
        if self.samtools.trim().is_empty() {
            return Err(InferSexError::InvalidConfig(
                "samtools path must not be empty".to_string(),
            ));
        }

        for (key, name) in [
            ("autosome", &self.regions.autosome),
            ("x", &self.regions.x),
            ("y", &self.regions.y),
        ] {
            if name.trim().is_empty() {
                return Err(InferSexError::InvalidConfig(format!(
                    "region name `{}` must not be empty",
                    key
                )));
            }
        }

        for (key, value) in [
            ("min_x_autosome", self.thresholds.min_x_autosome),
            ("max_y_autosome", self.thresholds.max_y_autosome),
            ("max_y_x", self.thresholds.max_y_x),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InferSexError::InvalidConfig(format!(
                    "threshold `{}` must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_empty_config_uses_defaults() {
        let config = InferSexConfig::from_toml("").unwrap();
        assert_eq!(config, InferSexConfig::default());
        assert_eq!(config.regions.ordered(), ["chr19", "chrX", "chrY"]);
    }

    #[rstest]
    fn test_partial_config() {
        let config = InferSexConfig::from_toml(
            r#"
            samtools = "/opt/samtools/bin/samtools"

            [regions]
            autosome = "19"
            x = "X"
            y = "Y"
            "#,
        )
        .unwrap();

        assert_eq!(config.samtools, "/opt/samtools/bin/samtools");
        assert_eq!(config.regions.ordered(), ["19", "X", "Y"]);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[rstest]
    #[case("unknown_key = 1")]
    #[case("[thresholds]\nmax_y_x = -0.1")]
    #[case("[regions]\nx = \"\"")]
    #[case("samtools = \" \"")]
    fn test_invalid_config(#[case] contents: &str) {
        let res = InferSexConfig::from_toml(contents);
        assert!(matches!(res, Err(InferSexError::InvalidConfig(_))));
    }
}
