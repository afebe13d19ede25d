#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Weather warning taxonomy types and severity definitions.
//!
//! This crate defines the four-level severity scale used across the
//! weather-map system and the warning record exactly as the upstream feed
//! delivers it. Feeds label severity with free text ("红色", "黄色预警"), so
//! scoring a label is a normalization step, not a parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity level for a warning, from 1 (blue) to 4 (red).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningSeverity {
    /// Level 1: 蓝色 (general advisory).
    Blue = 1,
    /// Level 2: 黄色 (heightened risk).
    Yellow = 2,
    /// Level 3: 橙色 (severe risk).
    Orange = 3,
    /// Level 4: 红色 (extreme risk).
    Red = 4,
}

impl WarningSeverity {
    /// Returns the numeric value of this severity level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a severity level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-4.
    pub const fn from_value(value: u8) -> Result<Self, InvalidSeverityError> {
        match value {
            1 => Ok(Self::Blue),
            2 => Ok(Self::Yellow),
            3 => Ok(Self::Orange),
            4 => Ok(Self::Red),
            _ => Err(InvalidSeverityError { value }),
        }
    }

    /// Scores a free-text severity label from a warning feed.
    ///
    /// An exact match against the four canonical labels takes priority;
    /// otherwise substring containment is checked in strict order
    /// red > orange > yellow, so a composite label like "黄色预警" still lands
    /// on the right level. Unrecognized labels degrade to [`Self::Blue`]
    /// rather than being dropped.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "蓝色" => Self::Blue,
            "黄色" => Self::Yellow,
            "橙色" => Self::Orange,
            "红色" => Self::Red,
            other if other.contains('红') => Self::Red,
            other if other.contains('橙') => Self::Orange,
            other if other.contains('黄') => Self::Yellow,
            _ => Self::Blue,
        }
    }

    /// Chinese color label as rendered in legends and tooltips.
    #[must_use]
    pub const fn color_label(self) -> &'static str {
        match self {
            Self::Blue => "蓝色",
            Self::Yellow => "黄色",
            Self::Orange => "橙色",
            Self::Red => "红色",
        }
    }
}

/// Error returned when attempting to create a [`WarningSeverity`] from an
/// invalid numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSeverityError {
    /// The invalid severity value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid severity value {}: expected 1-4", self.value)
    }
}

impl std::error::Error for InvalidSeverityError {}

/// A weather warning as delivered by the upstream dashboard feed.
///
/// Field names match the upstream JSON contract verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// Issuing source (e.g. "NMC", "QWeather").
    pub source: String,
    /// Headline text.
    pub title: String,
    /// Free-text severity label (e.g. "红色", "黄色预警").
    pub level: String,
    /// Hazard category (e.g. "暴雨", "台风").
    pub hazard_type: String,
    /// Province name as the feed spells it; never assumed canonical.
    pub province: String,
    /// When the warning was issued.
    pub issue_time: DateTime<Utc>,
    /// When the warning lapses, if the feed provides it.
    pub expires_at: Option<DateTime<Utc>>,
    /// Link to the full bulletin.
    pub detail_url: String,
    /// Short human-readable summary.
    pub summary: String,
    /// Extraction confidence in `0.0..=1.0`.
    pub confidence: f64,
    /// Whether an AI step augmented this record.
    pub is_ai_augmented: bool,
}

impl Warning {
    /// Identity key of this warning for UI purposes.
    #[must_use]
    pub fn key(&self) -> WarningKey {
        WarningKey::of(self)
    }

    /// Severity score of this warning's free-text level.
    #[must_use]
    pub fn severity(&self) -> WarningSeverity {
        WarningSeverity::from_label(&self.level)
    }
}

/// Identity key for a warning: `(title, issue_time)`.
///
/// The upstream feed carries no real identifier, and two distinct warnings
/// sharing title and issue time are indistinguishable here. Every identity
/// comparison in the system goes through
/// this type so a future move to a real identifier is a one-point change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WarningKey {
    /// Headline text.
    pub title: String,
    /// Issue timestamp.
    pub issue_time: DateTime<Utc>,
}

impl WarningKey {
    /// Builds the key for a warning.
    #[must_use]
    pub fn of(warning: &Warning) -> Self {
        Self {
            title: warning.title.clone(),
            issue_time: warning.issue_time,
        }
    }

    /// Whether this key identifies the given warning.
    #[must_use]
    pub fn matches(&self, warning: &Warning) -> bool {
        self.title == warning.title && self.issue_time == warning.issue_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    fn warning(title: &str, level: &str) -> Warning {
        Warning {
            source: "NMC".to_string(),
            title: title.to_string(),
            level: level.to_string(),
            hazard_type: "暴雨".to_string(),
            province: "广东省".to_string(),
            issue_time: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
            expires_at: None,
            detail_url: "https://example.invalid/w/1".to_string(),
            summary: String::new(),
            confidence: 0.9,
            is_ai_augmented: false,
        }
    }

    #[test]
    fn value_roundtrip() {
        for v in 1..=4u8 {
            let severity = WarningSeverity::from_value(v).unwrap();
            assert_eq!(severity.value(), v);
        }
        assert!(WarningSeverity::from_value(0).is_err());
        assert!(WarningSeverity::from_value(5).is_err());
    }

    #[test]
    fn exact_labels_score_directly() {
        assert_eq!(WarningSeverity::from_label("蓝色"), WarningSeverity::Blue);
        assert_eq!(WarningSeverity::from_label("黄色"), WarningSeverity::Yellow);
        assert_eq!(WarningSeverity::from_label("橙色"), WarningSeverity::Orange);
        assert_eq!(WarningSeverity::from_label("红色"), WarningSeverity::Red);
    }

    #[test]
    fn composite_labels_score_by_containment() {
        assert_eq!(
            WarningSeverity::from_label("黄色预警"),
            WarningSeverity::Yellow
        );
        assert_eq!(
            WarningSeverity::from_label("台风红色预警"),
            WarningSeverity::Red
        );
        // Red outranks yellow when a label somehow carries both.
        assert_eq!(
            WarningSeverity::from_label("由黄色升级为红色"),
            WarningSeverity::Red
        );
    }

    #[test]
    fn unrecognized_labels_degrade_to_blue() {
        assert_eq!(WarningSeverity::from_label(""), WarningSeverity::Blue);
        assert_eq!(WarningSeverity::from_label("白色"), WarningSeverity::Blue);
    }

    #[test]
    fn severity_orders_blue_below_red() {
        assert!(WarningSeverity::Blue < WarningSeverity::Yellow);
        assert!(WarningSeverity::Yellow < WarningSeverity::Orange);
        assert!(WarningSeverity::Orange < WarningSeverity::Red);
    }

    #[test]
    fn key_matches_same_title_and_time() {
        let w = warning("暴雨预警", "黄色");
        let key = w.key();
        assert!(key.matches(&w));

        let mut other = warning("暴雨预警", "红色");
        assert!(key.matches(&other), "level is not part of identity");

        other.title = "台风预警".to_string();
        assert!(!key.matches(&other));
    }
}
