// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::FestivalCatalog;
use crate::matcher::FestivalMatcher;
use crate::model::{FestivalRecord, FlightSegment};
use std::collections::HashSet;

/// Collects festivals at both ends of a segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentFestivalResolver<'a> {
    matcher: FestivalMatcher<'a>,
}

impl<'a> SegmentFestivalResolver<'a> {
    pub fn new(catalog: &'a FestivalCatalog) -> Self {
        Self {
            matcher: FestivalMatcher::new(catalog),
        }
    }

    /// Origin matches first, then destination, keeping only the first
    /// festival of each name.
    pub fn resolve_for_segment<S: AsRef<str>>(
        &self,
        segment: Option<&FlightSegment>,
        dates: &[S],
    ) -> Vec<&'a FestivalRecord> {
        let Some(segment) = segment else {
            return Vec::new();
        };
        if dates.is_empty() {
            return Vec::new();
        }

        let at = |city: Option<&str>| {
            city.map(|c| self.matcher.find_festivals(c, dates))
                .unwrap_or_default()
        };
        let origin = at(segment.origin_city());
        let destination = at(segment.destination_city());

        let mut seen = HashSet::new();
        let resolved: Vec<_> = origin
            .into_iter()
            .chain(destination)
            .filter(|f| seen.insert(f.name.as_str()))
            .collect();

        log::debug!(
            "[Segment] {:?} -> {:?}: {} festival(s)",
            segment.origin_city(),
            segment.destination_city(),
            resolved.len()
        );
        resolved
    }
}
