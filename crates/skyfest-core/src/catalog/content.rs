// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::model::{ContentRecord, ContentType, FlightPhase};
use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Cards keyed by flight phase, then content type.
pub type PhaseContent = HashMap<FlightPhase, HashMap<ContentType, Vec<ContentRecord>>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ContentDocument {
    #[serde(default)]
    festivals: HashMap<String, PhaseContent>,
    defaults: PhaseContent,
}

/// Festival-specific cards plus the default table used when no festival
/// applies. The default table always has a non-empty sequence for every
/// phase and content type.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCatalog {
    festivals: HashMap<String, PhaseContent>,
    defaults: PhaseContent,
}

impl ContentCatalog {
    pub fn new(
        festivals: HashMap<String, PhaseContent>,
        defaults: PhaseContent,
    ) -> Result<Self, CatalogError> {
        for phase in FlightPhase::ALL {
            for kind in ContentType::ALL {
                let present = defaults
                    .get(&phase)
                    .and_then(|by_type| by_type.get(&kind))
                    .is_some_and(|cards| !cards.is_empty());
                if !present {
                    return Err(CatalogError::MissingDefaultContent { phase, kind });
                }
            }
        }
        Ok(Self {
            festivals,
            defaults,
        })
    }

    /// Parses `{ "defaults": {...}, "festivals": { "<name>": {...} } }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: ContentDocument = serde_json::from_str(json)?;
        let catalog = Self::new(doc.festivals, doc.defaults)?;
        log::debug!(
            "[Catalog] Loaded content for {} festivals",
            catalog.festivals.len()
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        log::debug!("[Catalog] Loading content from: {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            log::error!("[Catalog] Failed to load content from {:?}: {}", path, e);
            e
        })
    }

    pub fn has_festival(&self, name: &str) -> bool {
        self.festivals.contains_key(name)
    }

    pub fn festival_names(&self) -> impl Iterator<Item = &str> {
        self.festivals.keys().map(String::as_str)
    }

    /// The festival's cards for a phase/type, if the catalog has any entry.
    /// An entry may still be an empty sequence.
    pub fn festival_content(
        &self,
        festival: &str,
        phase: FlightPhase,
        kind: ContentType,
    ) -> Option<&[ContentRecord]> {
        self.festivals
            .get(festival)?
            .get(&phase)?
            .get(&kind)
            .map(Vec::as_slice)
    }

    pub fn default_content(&self, phase: FlightPhase, kind: ContentType) -> &[ContentRecord] {
        self.defaults
            .get(&phase)
            .and_then(|by_type| by_type.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
