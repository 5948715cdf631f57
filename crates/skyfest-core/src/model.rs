// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalRecord {
    pub name: String,
    /// City name, possibly followed by decoration such as a flag emoji.
    pub location: String,
    pub start_day: u32,
    pub end_day: u32,
    pub color: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl FestivalRecord {
    pub fn covers_day(&self, day: u32) -> bool {
        day >= self.start_day && day <= self.end_day
    }

    /// Case-insensitive substring match of `city` against the location.
    pub fn is_in(&self, city: &str) -> bool {
        self.is_in_lowercase(&city.to_lowercase())
    }

    pub(crate) fn is_in_lowercase(&self, city_lower: &str) -> bool {
        self.location.to_lowercase().contains(city_lower)
    }
}

/// A single card's payload. Empty strings mean "nothing to show".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default)]
    pub text: String,
    /// Descriptive keyword for the artwork, not a URL.
    #[serde(default)]
    pub image: String,
}

impl ContentRecord {
    pub fn new(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: image.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.image.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseVariantError {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightPhase {
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Landing,
}

impl FlightPhase {
    /// All phases in flight order.
    pub const ALL: [FlightPhase; 5] = [
        FlightPhase::Takeoff,
        FlightPhase::Climb,
        FlightPhase::Cruise,
        FlightPhase::Descent,
        FlightPhase::Landing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightPhase::Takeoff => "takeoff",
            FlightPhase::Climb => "climb",
            FlightPhase::Cruise => "cruise",
            FlightPhase::Descent => "descent",
            FlightPhase::Landing => "landing",
        }
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightPhase {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightPhase::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError {
                kind: "flight phase",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Short promotional card.
    Promo,
    /// Longer informational card.
    Content,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Promo, ContentType::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Promo => "promo",
            ContentType::Content => "content",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError {
                kind: "content type",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Airport {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub airport: Airport,
}

impl Endpoint {
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            airport: Airport {
                city: Some(city.into()),
            },
        }
    }
}

/// A leg of the trip. Only the two city names take part in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlightSegment {
    #[serde(default)]
    pub origin: Endpoint,
    #[serde(default)]
    pub destination: Endpoint,
}

impl FlightSegment {
    pub fn between(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Endpoint::city(origin),
            destination: Endpoint::city(destination),
        }
    }

    pub fn origin_city(&self) -> Option<&str> {
        self.origin.airport.city.as_deref()
    }

    pub fn destination_city(&self) -> Option<&str> {
        self.destination.airport.city.as_deref()
    }
}

/// Everything a selection depends on besides the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionContext {
    #[serde(default)]
    pub segment: Option<FlightSegment>,
    /// Travel dates as `YYYY-MM-DD`.
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
    #[serde(default)]
    pub pinned_festival: Option<String>,
}

impl SelectionContext {
    pub fn new<I, S>(segment: Option<FlightSegment>, dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segment,
            dates: dates.into_iter().map(Into::into).collect(),
            theme_color: None,
            pinned_festival: None,
        }
    }

    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = Some(color.into());
        self
    }

    pub fn with_pinned_festival(mut self, name: impl Into<String>) -> Self {
        self.pinned_festival = Some(name.into());
        self
    }
}
