//! Form intake: turns the text-valued submission into a validated `PlayerProfile`.
//!
//! Every field arrives as text. Required fields must be present and numeric, and
//! all numbers are range-checked against the limits the form advertises.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::playability::models::{
    BallFlight, ClubAdjustments, ClubLength, FittingAttributes, Gender, GripSize, HandSize,
    HandgripIssue, LieAngle, PlayStyle, PlayerProfile, Shaft, SwingWeight,
};

pub const SWING_SPEED_RANGE: RangeInclusive<f64> = 50.0..=130.0;
pub const HANDICAP_RANGE: RangeInclusive<f64> = 0.0..=54.0;
pub const AVG_DISTANCE_RANGE: RangeInclusive<f64> = 100.0..=350.0;
pub const WRIST_TO_FLOOR_RANGE: RangeInclusive<f64> = 28.0..=42.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("'{0}' is required")]
    Missing(&'static str),

    #[error("'{field}' must be a number, got '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("'{field}' has no option '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// Raw club-finder submission. Blank strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerForm {
    pub swing_speed: Option<String>,
    pub handicap: Option<String>,
    pub avg_distance: Option<String>,
    pub play_style: Option<String>,

    pub player_height: Option<String>,
    pub wrist_to_floor: Option<String>,
    pub hand_size: Option<String>,
    pub gender: Option<String>,
    pub handgrip_issues: Option<String>,
    pub ball_flight_tendency: Option<String>,

    pub club_length_adjustment: Option<String>,
    pub lie_angle_adjustment: Option<String>,
    pub shaft_preference: Option<String>,
    pub swing_weight_adjustment: Option<String>,
    pub grip_sizes: Option<String>,
}

impl PlayerForm {
    /// Validates the submission. Stops at the first problem found, checking
    /// required fields first.
    pub fn into_profile(self) -> Result<PlayerProfile, FormError> {
        let swing_speed_mph = required_number("swing_speed", &self.swing_speed, SWING_SPEED_RANGE)?;
        let handicap_index = required_number("handicap", &self.handicap, HANDICAP_RANGE)?;
        let avg_driver_distance_yds =
            required_number("avg_distance", &self.avg_distance, AVG_DISTANCE_RANGE)?;
        let play_style: PlayStyle = optional_option("play_style", &self.play_style)?
            .ok_or(FormError::Missing("play_style"))?;

        let player_height_in = optional_number("player_height", &self.player_height)?;
        if let Some(height) = player_height_in {
            if height <= 0.0 {
                return Err(FormError::OutOfRange {
                    field: "player_height",
                    value: height,
                    min: 0.0,
                    max: f64::INFINITY,
                });
            }
        }
        let wrist_to_floor_in = optional_number("wrist_to_floor", &self.wrist_to_floor)?
            .map(|v| check_range("wrist_to_floor", v, WRIST_TO_FLOOR_RANGE))
            .transpose()?;

        let fitting = FittingAttributes {
            player_height_in,
            wrist_to_floor_in,
            hand_size: optional_option::<HandSize>("hand_size", &self.hand_size)?,
            gender: optional_option::<Gender>("gender", &self.gender)?,
            handgrip_issues: optional_option::<HandgripIssue>(
                "handgrip_issues",
                &self.handgrip_issues,
            )?,
            ball_flight: optional_option::<BallFlight>(
                "ball_flight_tendency",
                &self.ball_flight_tendency,
            )?,
        };

        let defaults = ClubAdjustments::default();
        let adjustments = ClubAdjustments {
            club_length: optional_option::<ClubLength>(
                "club_length_adjustment",
                &self.club_length_adjustment,
            )?
            .unwrap_or(defaults.club_length),
            lie_angle: optional_option::<LieAngle>(
                "lie_angle_adjustment",
                &self.lie_angle_adjustment,
            )?
            .unwrap_or(defaults.lie_angle),
            shaft: optional_option::<Shaft>("shaft_preference", &self.shaft_preference)?
                .unwrap_or(defaults.shaft),
            swing_weight: optional_option::<SwingWeight>(
                "swing_weight_adjustment",
                &self.swing_weight_adjustment,
            )?
            .unwrap_or(defaults.swing_weight),
            grip_size: optional_option::<GripSize>("grip_sizes", &self.grip_sizes)?
                .unwrap_or(defaults.grip_size),
        };

        Ok(PlayerProfile {
            swing_speed_mph,
            handicap_index,
            avg_driver_distance_yds,
            play_style,
            fitting,
            adjustments,
        })
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn optional_number(field: &'static str, raw: &Option<String>) -> Result<Option<f64>, FormError> {
    let Some(text) = present(raw) else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(FormError::NotNumeric {
            field,
            value: text.to_string(),
        }),
    }
}

fn required_number(
    field: &'static str,
    raw: &Option<String>,
    range: RangeInclusive<f64>,
) -> Result<f64, FormError> {
    let value = optional_number(field, raw)?.ok_or(FormError::Missing(field))?;
    check_range(field, value, range)
}

fn check_range(field: &'static str, value: f64, range: RangeInclusive<f64>) -> Result<f64, FormError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(FormError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn optional_option<T: FromStr>(
    field: &'static str,
    raw: &Option<String>,
) -> Result<Option<T>, FormError> {
    present(raw)
        .map(|text| {
            text.parse::<T>().map_err(|_| FormError::UnknownOption {
                field,
                value: text.to_string(),
            })
        })
        .transpose()
}
