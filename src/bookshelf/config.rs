//! # Configuration
//!
//! Shelf configuration is managed by [`confique`], which layers a TOML file over
//! compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sort_order` | `["AUTHOR", "TITLE", "PAGECOUNT", "ID"]` | Attribute priority for shelf ordering |
//!
//! Attribute names are case-insensitive. An empty name counts as a missing
//! attribute.
//!
//! ## Example
//!
//! ```toml
//! sort_order = ["AUTHOR", "PAGECOUNT", "ID", "TITLE"]
//! ```

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::{Attribute, SortOrder};
use crate::error::{ConfigurationError, Result};

fn default_sort_order() -> Vec<String> {
    Attribute::ALL
        .iter()
        .map(|attr| attr.name().to_string())
        .collect()
}

/// Configuration for a bookshelf, stored in `bookshelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Attribute names in priority order. The first must be AUTHOR.
    #[config(default = ["AUTHOR", "TITLE", "PAGECOUNT", "ID"])]
    pub sort_order: Vec<String>,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            sort_order: default_sort_order(),
        }
    }
}

impl BookshelfConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// anything the file leaves out.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::builder().file(path).load()?;
        debug!(path = %path.display(), sort_order = ?config.sort_order, "loaded config");
        Ok(config)
    }

    /// Parse and validate the configured attribute names.
    pub fn sort_order(&self) -> std::result::Result<SortOrder, ConfigurationError> {
        let slots = self
            .sort_order
            .iter()
            .map(|name| {
                if name.trim().is_empty() {
                    Ok(None)
                } else {
                    name.parse::<Attribute>().map(Some)
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        SortOrder::from_slots(&slots)
    }
}
