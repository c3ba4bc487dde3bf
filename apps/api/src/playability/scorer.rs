//! Playability scorer: maps a player profile to a 0–100 forgiveness factor.
//!
//! Higher factor = the player needs more forgiving clubs. The formula is a fixed
//! sum of four threshold terms, clamped to `[0, 100]`, then banded into a
//! [`Category`]. Pure and deterministic; no I/O, no error path.

use crate::playability::categories::Category;
use crate::playability::models::{PlayStyle, PlayabilityResult, PlayerProfile, ScoreBreakdown};

pub const MIN_FACTOR: i32 = 0;
pub const MAX_FACTOR: i32 = 100;

/// Yards of carry expected per mph of driver swing speed.
pub const YARDS_PER_MPH: f64 = 2.5;

/// Scores a profile. Only the four primary fields are read.
pub fn score(profile: &PlayerProfile) -> PlayabilityResult {
    let factor = breakdown(profile).factor;
    let category = Category::from_factor(factor);

    PlayabilityResult {
        factor,
        category,
        recommendations: category
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}

/// Computes each contributing term separately. `breakdown(p).factor` always
/// equals `score(p).factor`.
pub fn breakdown(profile: &PlayerProfile) -> ScoreBreakdown {
    let swing_speed = swing_speed_term(profile.swing_speed_mph);
    let handicap = handicap_term(profile.handicap_index);
    let play_style = play_style_term(profile.play_style);
    let distance_efficiency =
        distance_efficiency_term(profile.swing_speed_mph, profile.avg_driver_distance_yds);

    let raw_total = swing_speed + handicap + play_style + distance_efficiency;
    let factor = raw_total.clamp(MIN_FACTOR, MAX_FACTOR) as u32;

    ScoreBreakdown {
        swing_speed,
        handicap,
        play_style,
        distance_efficiency,
        raw_total,
        factor,
    }
}

/// Slower swings need more help launching the ball.
pub fn swing_speed_term(speed_mph: f64) -> i32 {
    if speed_mph < 85.0 {
        35
    } else if speed_mph < 95.0 {
        25
    } else if speed_mph < 105.0 {
        15
    } else {
        5
    }
}

pub fn handicap_term(handicap: f64) -> i32 {
    if handicap >= 20.0 {
        35
    } else if handicap >= 15.0 {
        25
    } else if handicap >= 10.0 {
        15
    } else if handicap >= 5.0 {
        10
    } else {
        5
    }
}

pub fn play_style_term(style: PlayStyle) -> i32 {
    match style {
        PlayStyle::Aggressive => -10,
        PlayStyle::Balanced => 0,
        PlayStyle::Conservative => 10,
    }
}

/// Compares actual driver distance to what the swing speed should produce.
///
/// Returns 0 when the expected distance is not a positive finite number
/// (zero, negative or non-finite speed), so no NaN or infinity reaches the clamp.
pub fn distance_efficiency_term(speed_mph: f64, avg_distance_yds: f64) -> i32 {
    let expected = speed_mph * YARDS_PER_MPH;
    if !expected.is_finite() || expected <= 0.0 {
        return 0;
    }

    let ratio = avg_distance_yds / expected;
    if !ratio.is_finite() {
        0
    } else if ratio < 0.85 {
        10
    } else if ratio > 1.1 {
        -5
    } else {
        0
    }
}
