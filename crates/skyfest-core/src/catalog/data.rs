// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::content::ContentCatalog;
use super::FestivalCatalog;

pub const FESTIVALS_JSON: &str = include_str!("festivals.json");
pub const CONTENT_JSON: &str = include_str!("content.json");

impl FestivalCatalog {
    /// The festival dataset shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_json(FESTIVALS_JSON).expect("Failed to parse festivals.json")
    }
}

impl ContentCatalog {
    /// The card content shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_json(CONTENT_JSON).expect("Failed to parse content.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentType, FlightPhase};

    #[test]
    fn test_festival_loading() {
        let catalog = FestivalCatalog::bundled();
        assert!(!catalog.is_empty(), "Festival list should not be empty");

        let bastille = catalog
            .festivals_in("july")
            .iter()
            .find(|f| f.name == "Bastille Day")
            .expect("Bastille Day missing");
        assert_eq!((bastille.start_day, bastille.end_day), (14, 14));
        assert!(bastille.is_in("Paris"));

        let kings_day = catalog
            .festivals_in("april")
            .iter()
            .find(|f| f.name == "King's Day")
            .expect("King's Day missing");
        assert!(kings_day.is_in("amsterdam"));
        assert_eq!(kings_day.start_day, 27);
    }

    #[test]
    fn test_content_loading() {
        let catalog = ContentCatalog::bundled();
        for phase in FlightPhase::ALL {
            for kind in ContentType::ALL {
                let defaults = catalog.default_content(phase, kind);
                assert!(!defaults.is_empty(), "{}/{} defaults empty", phase, kind);
                assert!(defaults.iter().all(|c| c.is_blank()));
            }
        }

        let promo = catalog
            .festival_content("Bastille Day", FlightPhase::Takeoff, ContentType::Promo)
            .expect("Bastille Day takeoff promo missing");
        assert_eq!(promo.len(), 3);
    }

    #[test]
    fn test_every_content_festival_exists_in_catalog() {
        let festivals = FestivalCatalog::bundled();
        let content = ContentCatalog::bundled();
        for name in content.festival_names() {
            let known = festivals
                .months()
                .any(|(_, list)| list.iter().any(|f| f.name == name));
            assert!(known, "content references unknown festival '{}'", name);
        }
    }
}
