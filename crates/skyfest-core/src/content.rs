// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::content::ContentCatalog;
use crate::catalog::FestivalCatalog;
use crate::model::{ContentRecord, ContentType, FestivalRecord, FlightPhase, SelectionContext};
use crate::selector::PrimaryFestivalSelector;

/// Turns a selection context into card content, falling back to the default
/// table whenever the primary festival has nothing for the requested slot.
#[derive(Debug, Clone, Copy)]
pub struct ContentResolver<'a> {
    selector: PrimaryFestivalSelector<'a>,
    content: &'a ContentCatalog,
}

impl<'a> ContentResolver<'a> {
    pub fn new(festivals: &'a FestivalCatalog, content: &'a ContentCatalog) -> Self {
        Self {
            selector: PrimaryFestivalSelector::new(festivals),
            content,
        }
    }

    pub fn selector(&self) -> PrimaryFestivalSelector<'a> {
        self.selector
    }

    /// One card, or `None` when `card_index` is past the end of both the
    /// festival's cards and the default cards. Never clamps.
    pub fn card_content(
        &self,
        ctx: &SelectionContext,
        phase: FlightPhase,
        kind: ContentType,
        card_index: usize,
    ) -> Option<&'a ContentRecord> {
        let primary = self.selector.select_primary(ctx);
        self.card_content_for(primary, phase, kind, card_index)
    }

    pub fn card_content_for(
        &self,
        primary: Option<&FestivalRecord>,
        phase: FlightPhase,
        kind: ContentType,
        card_index: usize,
    ) -> Option<&'a ContentRecord> {
        let festival_card = primary
            .and_then(|f| self.content.festival_content(&f.name, phase, kind))
            .and_then(|cards| cards.get(card_index));
        if let Some(card) = festival_card {
            return Some(card);
        }

        let fallback = self.content.default_content(phase, kind).get(card_index);
        log::trace!(
            "[Content] {}/{}[{}] from defaults (primary={:?}, found={})",
            phase,
            kind,
            card_index,
            primary.map(|f| f.name.as_str()),
            fallback.is_some()
        );
        fallback
    }

    /// The full card sequence for a slot. Festival cards win only when the
    /// festival has at least one; otherwise the default sequence is returned.
    pub fn all_card_content(
        &self,
        ctx: &SelectionContext,
        phase: FlightPhase,
        kind: ContentType,
    ) -> &'a [ContentRecord] {
        let primary = self.selector.select_primary(ctx);
        self.all_card_content_for(primary, phase, kind)
    }

    pub fn all_card_content_for(
        &self,
        primary: Option<&FestivalRecord>,
        phase: FlightPhase,
        kind: ContentType,
    ) -> &'a [ContentRecord] {
        match primary.and_then(|f| self.content.festival_content(&f.name, phase, kind)) {
            Some(cards) if !cards.is_empty() => cards,
            _ => self.content.default_content(phase, kind),
        }
    }

    pub fn should_use_festival_content(&self, ctx: &SelectionContext) -> bool {
        self.selector.select_primary(ctx).is_some()
    }
}
