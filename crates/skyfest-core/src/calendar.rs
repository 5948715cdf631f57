// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use chrono::{Datelike, NaiveDate};

/// Catalog month keys, indexed by `month - 1`.
/// Fixed table so that month names never depend on the host locale.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month number (1-12) to its catalog key.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_NAMES.get(index).copied()
}

/// Catalog key (any case) to month number (1-12).
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

/// The two parts of a travel date the festival lookup cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDate {
    pub month_name: &'static str,
    pub day: u32,
}

impl QueryDate {
    /// Parses a `YYYY-MM-DD` string. Other shapes (unpadded fields, a sign,
    /// surrounding whitespace) and impossible dates like `2023-02-30` yield
    /// `None`.
    pub fn parse(input: &str) -> Option<Self> {
        if !is_iso_shape(input) {
            return None;
        }
        let date = NaiveDate::parse_from_str(input, DATE_FORMAT).ok()?;
        Some(Self::from_date(date))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            // month() is always 1..=12
            month_name: MONTH_NAMES[date.month0() as usize],
            day: date.day(),
        }
    }
}

// chrono's %Y/%m/%d accept signs and unpadded fields, so check the layout first.
fn is_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
