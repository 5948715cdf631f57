// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::content::ContentCatalog;
use crate::catalog::FestivalCatalog;
use crate::config::ResolverConfig;
use crate::content::ContentResolver;
use crate::matcher::{self, FestivalMatcher};
use crate::model::{ContentRecord, ContentType, FestivalRecord, FlightPhase, SelectionContext};
use crate::ResolveError;
use serde::Serialize;
use std::sync::Arc;

/// Both card strips for one flight phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDeck<'a> {
    pub festival: Option<&'a str>,
    pub phase: FlightPhase,
    pub promo: &'a [ContentRecord],
    pub content: &'a [ContentRecord],
}

/// Entry point for consumers. Owns the injected catalogs and hands out
/// borrowed results; cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct ThemeEngine {
    festivals: Arc<FestivalCatalog>,
    content: Arc<ContentCatalog>,
    config: ResolverConfig,
}

impl ThemeEngine {
    pub fn new(festivals: Arc<FestivalCatalog>, content: Arc<ContentCatalog>) -> Self {
        Self {
            festivals,
            content,
            config: ResolverConfig::default(),
        }
    }

    pub fn bundled() -> Self {
        Self::new(
            Arc::new(FestivalCatalog::bundled()),
            Arc::new(ContentCatalog::bundled()),
        )
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn festivals(&self) -> &FestivalCatalog {
        &self.festivals
    }

    pub fn content(&self) -> &ContentCatalog {
        &self.content
    }

    fn resolver(&self) -> ContentResolver<'_> {
        ContentResolver::new(&self.festivals, &self.content)
    }

    pub fn find_festivals<S: AsRef<str>>(&self, city: &str, dates: &[S]) -> Vec<&FestivalRecord> {
        FestivalMatcher::new(&self.festivals).find_festivals(city, dates)
    }

    /// Deduplicated festivals at either end of the context's segment.
    pub fn resolve_for_segment(&self, ctx: &SelectionContext) -> Vec<&FestivalRecord> {
        self.resolver().selector().candidates(ctx)
    }

    pub fn select_primary(&self, ctx: &SelectionContext) -> Option<&FestivalRecord> {
        self.resolver().selector().select_primary(ctx)
    }

    /// Always validates, regardless of `strict_dates`.
    pub fn validate_dates<S: AsRef<str>>(&self, dates: &[S]) -> Result<(), ResolveError> {
        matcher::parse_all(dates).map(|_| ())
    }

    /// Like [`select_primary`](Self::select_primary), but with `strict_dates`
    /// on a malformed date is an error rather than a silent non-match.
    pub fn select_primary_checked(
        &self,
        ctx: &SelectionContext,
    ) -> Result<Option<&FestivalRecord>, ResolveError> {
        if self.config.strict_dates {
            self.validate_dates(&ctx.dates)?;
        }
        Ok(self.select_primary(ctx))
    }

    pub fn card_content(
        &self,
        ctx: &SelectionContext,
        phase: FlightPhase,
        kind: ContentType,
        card_index: usize,
    ) -> Option<&ContentRecord> {
        self.resolver().card_content(ctx, phase, kind, card_index)
    }

    pub fn all_card_content(
        &self,
        ctx: &SelectionContext,
        phase: FlightPhase,
        kind: ContentType,
    ) -> &[ContentRecord] {
        self.resolver().all_card_content(ctx, phase, kind)
    }

    pub fn should_use_festival_content(&self, ctx: &SelectionContext) -> bool {
        self.resolver().should_use_festival_content(ctx)
    }

    /// Resolves the primary festival once and fills both content types.
    pub fn card_deck(&self, ctx: &SelectionContext, phase: FlightPhase) -> CardDeck<'_> {
        let resolver = self.resolver();
        let primary = resolver.selector().select_primary(ctx);
        CardDeck {
            festival: primary.map(|f| f.name.as_str()),
            phase,
            promo: resolver.all_card_content_for(primary, phase, ContentType::Promo),
            content: resolver.all_card_content_for(primary, phase, ContentType::Content),
        }
    }
}
