// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::FestivalCatalog;
use crate::model::{FestivalRecord, SelectionContext};
use crate::segment::SegmentFestivalResolver;

/// Picks the single festival that drives card content for a context.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryFestivalSelector<'a> {
    resolver: SegmentFestivalResolver<'a>,
}

impl<'a> PrimaryFestivalSelector<'a> {
    pub fn new(catalog: &'a FestivalCatalog) -> Self {
        Self {
            resolver: SegmentFestivalResolver::new(catalog),
        }
    }

    pub fn candidates(&self, ctx: &SelectionContext) -> Vec<&'a FestivalRecord> {
        self.resolver
            .resolve_for_segment(ctx.segment.as_ref(), &ctx.dates)
    }

    pub fn select_primary(&self, ctx: &SelectionContext) -> Option<&'a FestivalRecord> {
        let candidates = self.candidates(ctx);
        let primary = pick_primary(
            &candidates,
            ctx.theme_color.as_deref(),
            ctx.pinned_festival.as_deref(),
        );
        log::debug!(
            "[Selector] primary={:?} from {} candidate(s)",
            primary.map(|f| f.name.as_str()),
            candidates.len()
        );
        primary
    }
}

/// Precedence: pinned name, then first color match, then first candidate.
/// A pin or color that matches nothing is ignored.
pub fn pick_primary<'f>(
    candidates: &[&'f FestivalRecord],
    theme_color: Option<&str>,
    pinned: Option<&str>,
) -> Option<&'f FestivalRecord> {
    if let Some(pin) = pinned {
        if let Some(&festival) = candidates.iter().find(|f| f.name == pin) {
            return Some(festival);
        }
        if !candidates.is_empty() {
            log::debug!("[Selector] Pinned festival {:?} is not a candidate", pin);
        }
    }

    if let Some(color) = theme_color {
        if let Some(&festival) = candidates.iter().find(|f| f.color == color) {
            return Some(festival);
        }
    }

    candidates.first().copied()
}
