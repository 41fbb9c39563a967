// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ResourceLoadError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Where the canonical record set is read from.
    pub source: PathBuf,
    pub engine: EngineOptions,
    /// Record positions to mark as highlighted after load.
    pub pins: Vec<usize>,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_RECORDS_FILE),
            engine: EngineOptions::default(),
            pins: Vec::new(),
            export: ExportOptions::default(),
        }
    }
}

/// Feature switches for the query engine. One engine, configured, instead of
/// one copy per page variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Subsequence fallback on the `title enterprise` composite. When off,
    /// either field must contain the query verbatim.
    pub fuzzy_search: bool,
    pub date_range_filter: bool,
    pub active_filter_tags: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            fuzzy_search: true,
            date_range_filter: true,
            active_filter_tags: true,
        }
    }
}

/// How selector values are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorMode {
    /// Space-separated class tokens; a node must carry all of them.
    #[default]
    ClassTokens,
    /// Raw CSS selectors (test ids, roles, ...).
    Css,
}

/// Which document nodes make up a certification entry and its fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub mode: SelectorMode,
    pub certifications: String,
    pub title: String,
    pub expedition_date: String,
    pub certification_id: String,
    pub expedition_enterprise: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            mode: SelectorMode::ClassTokens,
            certifications: s!(SEL_CERTIFICATIONS),
            title: s!(SEL_TITLE),
            expedition_date: s!(SEL_EXPEDITION_DATE),
            certification_id: s!(SEL_CERTIFICATION_ID),
            expedition_enterprise: s!(SEL_ENTERPRISE),
        }
    }
}

impl SelectorConfig {
    /// Read a selector override file (JSON). Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ResourceLoadError> {
        let text = fs::read_to_string(path).map_err(|source| ResourceLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ResourceLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// File name without extension
    pub stem: String,
    pub write_tsv: bool,
    pub write_json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            stem: s!(DEFAULT_EXPORT_STEM),
            write_tsv: true,
            write_json: true,
        }
    }
}

impl ExportOptions {
    pub fn tsv_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.stem, ".tsv"))
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.stem, ".json"))
    }
}
