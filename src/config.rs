//! YAML deck configuration.
//!
//! Every field is optional. Values that are present override the built-in
//! metadata, fonts and palette; everything else keeps its default.
//!
//! ```yaml
//! output: prezentacja.pptx
//! metadata:
//!   title: Przydział pracowników do projektu IT
//!   layout: 16x9
//! fonts:
//!   heading: Courier New
//! palette:
//!   primary-accent: "E63946"
//! ```

use crate::common::{Error, RGBColor, Result};
use crate::deck::model::{DeckMetadata, FontPair, SlideLayout};
use crate::deck::palette::{Palette, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Output path used when neither the configuration nor the command line
/// names one.
pub const DEFAULT_OUTPUT: &str = "prezentacja.pptx";

/// Metadata overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<SlideLayout>,
}

/// Font face overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub metadata: MetadataConfig,
    pub fonts: FontsConfig,
    /// Role name to `RRGGBB` colour
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub palette: BTreeMap<String, String>,
}

impl DeckConfig {
    /// Parse and validate a YAML document.
    ///
    /// Palette entries are checked here, so a bad role name or colour fails
    /// before any page is built.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DeckConfig = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse configuration: {}", e)))?;
        config.palette()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Destination of the written deck.
    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Built-in metadata with the configured overrides applied.
    pub fn metadata(&self) -> DeckMetadata {
        let defaults = DeckMetadata::default();
        let fonts = FontPair {
            heading: self.fonts.heading.clone().unwrap_or(defaults.fonts.heading),
            body: self.fonts.body.clone().unwrap_or(defaults.fonts.body),
        };
        DeckMetadata {
            title: self.metadata.title.clone().unwrap_or(defaults.title),
            author: self.metadata.author.clone().unwrap_or(defaults.author),
            subject: self.metadata.subject.clone().unwrap_or(defaults.subject),
            layout: self.metadata.layout.unwrap_or(defaults.layout),
            fonts,
        }
    }

    /// Built-in palette with the configured colours applied.
    pub fn palette(&self) -> Result<Palette> {
        let mut overrides = Palette::empty();
        for (name, value) in &self.palette {
            let role: Role = name.parse()?;
            let color: RGBColor = value.parse()?;
            overrides = overrides.with(role, color);
        }
        Ok(Palette::brutalist().merged(&overrides))
    }

    /// The configuration with every default filled in.
    pub fn effective(&self) -> Result<Self> {
        let metadata = self.metadata();
        let palette = self
            .palette()?
            .defined()
            .map(|(role, color)| (role.to_string(), color.to_hex()))
            .collect();

        Ok(Self {
            output: Some(self.output()),
            metadata: MetadataConfig {
                title: Some(metadata.title),
                author: Some(metadata.author),
                subject: Some(metadata.subject),
                layout: Some(metadata.layout),
            },
            fonts: FontsConfig {
                heading: Some(metadata.fonts.heading),
                body: Some(metadata.fonts.body),
            },
            palette,
        })
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))
    }
}
