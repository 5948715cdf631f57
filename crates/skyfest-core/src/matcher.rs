// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::calendar::QueryDate;
use crate::catalog::FestivalCatalog;
use crate::model::FestivalRecord;
use crate::ResolveError;

/// Finds the festivals running in a city on any of the given dates.
#[derive(Debug, Clone, Copy)]
pub struct FestivalMatcher<'a> {
    catalog: &'a FestivalCatalog,
}

impl<'a> FestivalMatcher<'a> {
    pub fn new(catalog: &'a FestivalCatalog) -> Self {
        Self { catalog }
    }

    /// Matches are returned in date order, then catalog order, and are not
    /// deduplicated: a festival covering two of the dates appears twice.
    /// Malformed dates are skipped.
    pub fn find_festivals<S: AsRef<str>>(
        &self,
        city: &str,
        dates: &[S],
    ) -> Vec<&'a FestivalRecord> {
        if city.is_empty() || dates.is_empty() {
            return Vec::new();
        }

        let city_lower = city.to_lowercase();
        let mut matches = Vec::new();
        for raw in dates {
            match QueryDate::parse(raw.as_ref()) {
                Some(date) => self.collect(&city_lower, date, &mut matches),
                None => log::debug!("[Matcher] Skipping malformed date {:?}", raw.as_ref()),
            }
        }

        log::trace!(
            "[Matcher] {} match(es) for city={:?} over {} date(s)",
            matches.len(),
            city,
            dates.len()
        );
        matches
    }

    /// Same as [`find_festivals`](Self::find_festivals) but fails on the first
    /// malformed date instead of skipping it.
    pub fn try_find_festivals<S: AsRef<str>>(
        &self,
        city: &str,
        dates: &[S],
    ) -> Result<Vec<&'a FestivalRecord>, ResolveError> {
        let parsed = parse_all(dates)?;
        if city.is_empty() {
            return Ok(Vec::new());
        }

        let city_lower = city.to_lowercase();
        let mut matches = Vec::new();
        for date in parsed {
            self.collect(&city_lower, date, &mut matches);
        }
        Ok(matches)
    }

    fn collect(&self, city_lower: &str, date: QueryDate, out: &mut Vec<&'a FestivalRecord>) {
        out.extend(
            self.catalog
                .festivals_in(date.month_name)
                .iter()
                .filter(|f| f.is_in_lowercase(city_lower) && f.covers_day(date.day)),
        );
    }
}

/// Parses every date, reporting the first one that is not `YYYY-MM-DD`.
pub fn parse_all<S: AsRef<str>>(dates: &[S]) -> Result<Vec<QueryDate>, ResolveError> {
    dates
        .iter()
        .map(|raw| {
            QueryDate::parse(raw.as_ref())
                .ok_or_else(|| ResolveError::MalformedDate(raw.as_ref().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn festival(name: &str, location: &str, start_day: u32, end_day: u32) -> FestivalRecord {
        FestivalRecord {
            name: name.to_string(),
            location: location.to_string(),
            start_day,
            end_day,
            color: "#000000".to_string(),
            kind: "cultural".to_string(),
        }
    }

    fn catalog() -> FestivalCatalog {
        FestivalCatalog::from_months([
            (
                "july",
                vec![
                    festival("Summer Nights", "Paris", 1, 31),
                    festival("Bastille Day", "Paris 🇫🇷", 14, 14),
                    festival("Palio", "Siena 🇮🇹", 2, 2),
                ],
            ),
            ("april", vec![festival("King's Day", "Amsterdam 🇳🇱", 27, 27)]),
        ])
        .unwrap()
    }

    fn names(found: &[&FestivalRecord]) -> Vec<String> {
        found.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_single_day_range() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);

        let hit = matcher.find_festivals("Paris", &["2024-07-14"]);
        assert_eq!(names(&hit), vec!["Summer Nights", "Bastille Day"]);

        for miss in ["2024-07-13", "2024-07-15"] {
            let found = matcher.find_festivals("Paris", &[miss]);
            assert!(
                !names(&found).contains(&"Bastille Day".to_string()),
                "{} should not match Bastille Day",
                miss
            );
        }
        assert!(matcher.find_festivals("Rome", &["2024-07-14"]).is_empty());
    }

    #[test]
    fn test_city_match_ignores_case() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);
        assert_eq!(matcher.find_festivals("AMSTERDAM", &["2024-04-27"]).len(), 1);
        assert_eq!(matcher.find_festivals("amster", &["2024-04-27"]).len(), 1);
    }

    #[test]
    fn test_matches_accumulate_per_date_without_dedup() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);
        let found = matcher.find_festivals("Paris", &["2024-07-20", "2024-07-14"]);
        assert_eq!(
            names(&found),
            vec!["Summer Nights", "Summer Nights", "Bastille Day"]
        );
    }

    #[test]
    fn test_year_is_irrelevant() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);
        assert_eq!(matcher.find_festivals("Siena", &["1999-07-02"]).len(), 1);
        assert_eq!(matcher.find_festivals("Siena", &["2031-07-02"]).len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);
        let no_dates: [&str; 0] = [];
        assert!(matcher.find_festivals("", &["2024-07-14"]).is_empty());
        assert!(matcher.find_festivals("Paris", &no_dates).is_empty());
    }

    #[test]
    fn test_malformed_date_is_skipped() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);
        let found = matcher.find_festivals("Amsterdam", &["27/04/2024", "garbage", "2024-04-27"]);
        assert_eq!(names(&found), vec!["King's Day"]);
    }

    #[test]
    fn test_try_find_rejects_malformed_date() {
        let catalog = catalog();
        let matcher = FestivalMatcher::new(&catalog);
        let err = matcher
            .try_find_festivals("Amsterdam", &["2024-04-27", "2024-04-31"])
            .unwrap_err();
        assert_eq!(err, ResolveError::MalformedDate("2024-04-31".to_string()));

        let ok = matcher
            .try_find_festivals("Amsterdam", &["2024-04-27"])
            .unwrap();
        assert_eq!(names(&ok), vec!["King's Day"]);
    }
}
