// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// Regression tests for primary festival selection and content fallback,
// driven through ThemeEngine with small in-code catalogs.

use skyfest_core::catalog::content::PhaseContent;
use skyfest_core::{
    ContentCatalog, ContentRecord, ContentType, FestivalCatalog, FestivalRecord, FlightPhase,
    FlightSegment, SelectionContext, ThemeEngine,
};
use std::collections::HashMap;
use std::sync::Arc;

fn festival(name: &str, location: &str, day: u32, color: &str) -> FestivalRecord {
    FestivalRecord {
        name: name.to_string(),
        location: location.to_string(),
        start_day: day,
        end_day: day,
        color: color.to_string(),
        kind: "cultural".to_string(),
    }
}

fn blank_defaults() -> PhaseContent {
    FlightPhase::ALL
        .into_iter()
        .map(|phase| {
            let by_type = ContentType::ALL
                .into_iter()
                .map(|kind| (kind, vec![ContentRecord::default(); 3]))
                .collect();
            (phase, by_type)
        })
        .collect()
}

fn promo_cards(prefix: &str, count: usize) -> PhaseContent {
    let cards = (0..count)
        .map(|i| ContentRecord::new(format!("{} promo {}", prefix, i), format!("{} art", prefix)))
        .collect();
    let mut table = PhaseContent::new();
    table.insert(FlightPhase::Cruise, HashMap::from([(ContentType::Promo, cards)]));
    table
}

fn engine() -> ThemeEngine {
    let festivals = FestivalCatalog::from_months([(
        "june",
        vec![
            festival("A", "Lisbon 🇵🇹", 13, "#111"),
            festival("B", "Lisbon 🇵🇹", 13, "#222"),
        ],
    )])
    .unwrap();
    let content = ContentCatalog::new(
        HashMap::from([
            ("A".to_string(), promo_cards("A", 3)),
            ("B".to_string(), promo_cards("B", 3)),
        ]),
        blank_defaults(),
    )
    .unwrap();
    ThemeEngine::new(Arc::new(festivals), Arc::new(content))
}

fn lisbon() -> SelectionContext {
    SelectionContext::new(
        Some(FlightSegment::between("Lisbon", "Madrid")),
        ["2024-06-13"],
    )
}

fn primary_name(engine: &ThemeEngine, ctx: &SelectionContext) -> Option<String> {
    engine.select_primary(ctx).map(|f| f.name.clone())
}

// =====================================================================
// Precedence: pin > color > first found
// =====================================================================

#[test]
fn test_pin_beats_theme_color() {
    let engine = engine();
    let ctx = lisbon().with_theme_color("#222").with_pinned_festival("A");
    assert_eq!(primary_name(&engine, &ctx).as_deref(), Some("A"));
}

#[test]
fn test_theme_color_without_pin() {
    let engine = engine();
    let ctx = lisbon().with_theme_color("#222");
    assert_eq!(primary_name(&engine, &ctx).as_deref(), Some("B"));
}

#[test]
fn test_first_found_without_hints() {
    let engine = engine();
    assert_eq!(primary_name(&engine, &lisbon()).as_deref(), Some("A"));
}

#[test]
fn test_pin_drives_card_content() {
    let engine = engine();
    let ctx = lisbon().with_pinned_festival("B");
    let card = engine
        .card_content(&ctx, FlightPhase::Cruise, ContentType::Promo, 2)
        .expect("B has three cruise promos");
    assert_eq!(card.text, "B promo 2");
}

// =====================================================================
// Bounds safety and fallback
// =====================================================================

#[test]
fn test_out_of_range_index_is_none() {
    let engine = engine();
    let ctx = lisbon();
    assert!(engine
        .card_content(&ctx, FlightPhase::Cruise, ContentType::Promo, 99)
        .is_none());
    assert!(engine
        .card_content(&ctx, FlightPhase::Cruise, ContentType::Promo, usize::MAX)
        .is_none());
}

#[test]
fn test_fallback_completeness_without_context() {
    let engine = engine();
    let ctx = SelectionContext::default();
    assert!(!engine.should_use_festival_content(&ctx));

    for phase in FlightPhase::ALL {
        for kind in ContentType::ALL {
            let all = engine.all_card_content(&ctx, phase, kind);
            assert_eq!(all.len(), 3, "{}/{} default length", phase, kind);
            assert!(
                all.iter().all(|c| c.text.is_empty() && c.image.is_empty()),
                "{}/{} defaults should be blank",
                phase,
                kind
            );
            for i in 0..3 {
                assert_eq!(engine.card_content(&ctx, phase, kind, i), Some(&all[i]));
            }
            assert!(engine.card_content(&ctx, phase, kind, 3).is_none());
        }
    }
}

#[test]
fn test_festival_without_phase_falls_back() {
    let engine = engine();
    let ctx = lisbon();
    assert!(engine.should_use_festival_content(&ctx));
    let all = engine.all_card_content(&ctx, FlightPhase::Takeoff, ContentType::Promo);
    assert!(all.iter().all(ContentRecord::is_blank));
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = engine();
    let ctx = lisbon().with_theme_color("#222");
    let first_primary = engine.select_primary(&ctx).cloned();
    let first_card = engine
        .card_content(&ctx, FlightPhase::Cruise, ContentType::Promo, 0)
        .cloned();
    for _ in 0..25 {
        assert_eq!(engine.select_primary(&ctx).cloned(), first_primary);
        assert_eq!(
            engine
                .card_content(&ctx, FlightPhase::Cruise, ContentType::Promo, 0)
                .cloned(),
            first_card
        );
    }
}
