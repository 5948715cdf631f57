// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod content;
pub mod data;

use crate::calendar::{self, MONTH_NAMES};
use crate::model::FestivalRecord;
use crate::CatalogError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Festivals grouped by lowercase English month name, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FestivalCatalog {
    months: HashMap<String, Vec<FestivalRecord>>,
}

impl FestivalCatalog {
    /// Builds a catalog from `(month, festivals)` pairs, validating month keys
    /// and day ranges. Month keys are matched case-insensitively; repeated
    /// keys append in order.
    pub fn from_months<I, K>(months: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, Vec<FestivalRecord>)>,
        K: AsRef<str>,
    {
        let mut catalog = Self::default();
        for (key, festivals) in months {
            let month = calendar::month_index(key.as_ref())
                .and_then(calendar::month_name)
                .ok_or_else(|| CatalogError::UnknownMonth(key.as_ref().to_string()))?;

            for festival in &festivals {
                validate_day_range(festival)?;
            }

            catalog
                .months
                .entry(month.to_string())
                .or_default()
                .extend(festivals);
        }
        Ok(catalog)
    }

    /// Parses the `{ "july": [ ... ] }` JSON layout.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<FestivalRecord>> = serde_json::from_str(json)?;
        let catalog = Self::from_months(raw)?;
        log::debug!(
            "[Catalog] Loaded {} festivals across {} months",
            catalog.len(),
            catalog.months.len()
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        log::debug!("[Catalog] Loading festivals from: {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            log::error!("[Catalog] Failed to load festivals from {:?}: {}", path, e);
            e
        })
    }

    /// Festivals for a month key, in catalog order. Unknown months are empty.
    pub fn festivals_in(&self, month: &str) -> &[FestivalRecord] {
        self.months
            .get(month)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Populated months in calendar order.
    pub fn months(&self) -> impl Iterator<Item = (&'static str, &[FestivalRecord])> + '_ {
        MONTH_NAMES
            .iter()
            .filter_map(|m| self.months.get(*m).map(|f| (*m, f.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_day_range(festival: &FestivalRecord) -> Result<(), CatalogError> {
    let valid = (1..=31).contains(&festival.start_day)
        && (1..=31).contains(&festival.end_day)
        && festival.start_day <= festival.end_day;
    if valid {
        Ok(())
    } else {
        Err(CatalogError::InvalidDayRange {
            name: festival.name.clone(),
            start_day: festival.start_day,
            end_day: festival.end_day,
        })
    }
}
