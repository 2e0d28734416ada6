use palette_match::palette::QUAKE_NON_FULLBRIGHT;
use palette_match::{ColorSpace, SearchContext, WeightVector};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::QuantizeError;
use crate::services::palette_loader::load_palette;

/// Application configuration loaded from a YAML file
///
/// ```yaml
/// palette:
///   path: palette.lmp
///   count: 224
/// color_space: lch
/// weights: [1.0, 0.8, 1.2]
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Palette source
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Working color space (selects the distance metric)
    #[serde(default)]
    pub color_space: ColorSpace,

    /// Weight slots, in the convention of `color_space`
    #[serde(default)]
    pub weights: WeightVector,
}

/// Where the reference palette comes from
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// `.lmp` (binary Quake palette) or a text file of hex colors.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Number of leading `.lmp` entries to use
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    QUAKE_NON_FULLBRIGHT
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            path: None,
            count: default_count(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub palette: Option<PathBuf>,
    pub count: Option<usize>,
    pub color_space: Option<ColorSpace>,
    pub weights: Option<WeightVector>,
}

impl AppConfig {
    /// Parse a config from YAML text. Relative palette paths stay relative.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a config file; errors are returned to the caller
    pub fn load(path: &Path) -> Result<Self, QuantizeError> {
        let content = std::fs::read_to_string(path).map_err(|source| QuantizeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&content).map_err(|e| QuantizeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(palette), Some(base)) = (&config.palette.path, path.parent()) {
            if palette.is_relative() {
                config.palette.path = Some(base.join(palette));
            }
        }

        tracing::info!(
            path = %path.display(),
            color_space = %config.color_space,
            weights = %config.weights,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load a config file if one is given, falling back to defaults when it
    /// cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(palette) = overrides.palette {
            self.palette.path = Some(palette);
        }
        if let Some(count) = overrides.count {
            self.palette.count = count;
        }
        if let Some(space) = overrides.color_space {
            self.color_space = space;
        }
        if let Some(weights) = overrides.weights {
            self.weights = weights;
        }
        self
    }

    /// Weights clamped into the supported control range
    pub fn effective_weights(&self) -> WeightVector {
        if self.weights.is_in_range() {
            return self.weights;
        }
        let clamped = self.weights.clamped();
        tracing::warn!(
            requested = %self.weights,
            clamped = %clamped,
            "Weights outside supported range, clamping"
        );
        clamped
    }

    /// One-line description of the palette source for the status screen
    pub fn palette_status(&self) -> String {
        match &self.palette.path {
            Some(path) if path.exists() => path.display().to_string(),
            Some(path) => format!("{} (file not found)", path.display()),
            None => "(not set) a palette file is required: pass --palette or set palette.path"
                .to_string(),
        }
    }

    /// Load the configured palette and build a search context for it
    pub fn build_context(&self) -> Result<SearchContext, QuantizeError> {
        let path = self.palette.path.as_deref().ok_or(QuantizeError::NoPalette)?;
        let reference = load_palette(path, self.palette.count)?;
        let weights = self.effective_weights();

        let labels = self.color_space.weight_labels();
        tracing::info!(
            colors = reference.len(),
            color_space = %self.color_space,
            "{}={} {}={} {}={}",
            labels[0],
            weights.slot(0),
            labels[1],
            weights.slot(1),
            labels[2],
            weights.slot(2),
        );

        Ok(SearchContext::new(&reference, self.color_space, weights))
    }
}
