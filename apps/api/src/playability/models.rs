use serde::{Deserialize, Serialize};

use crate::playability::categories::Category;

/// Declares a closed set of form options.
///
/// Each variant carries its wire name, which is both the serde name and the
/// text accepted by `FromStr`. Parsing is case-insensitive and trims whitespace.
macro_rules! form_option {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|opt| opt.as_str().eq_ignore_ascii_case(s))
                    .ok_or(())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use form_option;

form_option! {
    /// How the player approaches the course. Feeds the play-style term.
    pub enum PlayStyle {
        Aggressive => "aggressive",
        Balanced => "balanced",
        Conservative => "conservative",
    }
}

form_option! {
    pub enum HandSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extra-large",
    }
}

form_option! {
    pub enum Gender {
        Male => "male",
        Female => "female",
    }
}

form_option! {
    pub enum HandgripIssue {
        None => "none",
        Arthritis => "arthritis",
        CarpalTunnel => "carpal-tunnel",
        Other => "other",
    }
}

form_option! {
    pub enum BallFlight {
        Straight => "straight",
        Slice => "slice",
        Hook => "hook",
        Fade => "fade",
        Draw => "draw",
    }
}

form_option! {
    pub enum ClubLength {
        Standard => "standard",
        PlusQuarter => "+1/4",
        PlusHalf => "+1/2",
        MinusQuarter => "-1/4",
        MinusHalf => "-1/2",
    }
}

form_option! {
    pub enum LieAngle {
        Standard => "standard",
        Upright => "upright",
        Flat => "flat",
    }
}

form_option! {
    pub enum Shaft {
        Steel => "steel",
        Graphite => "graphite",
        Iron => "iron",
    }
}

form_option! {
    pub enum SwingWeight {
        Standard => "standard",
        Heavier => "heavier",
        Lighter => "lighter",
    }
}

form_option! {
    pub enum GripSize {
        Standard => "standard",
        PlusSixtyFourth => "+1/64",
        PlusThirtySecond => "+1/32",
        MinusSixtyFourth => "-1/64",
    }
}

/// Body measurements and tendencies collected in the fitting section.
/// None of these feed the playability factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FittingAttributes {
    pub player_height_in: Option<f64>,
    pub wrist_to_floor_in: Option<f64>,
    pub hand_size: Option<HandSize>,
    pub gender: Option<Gender>,
    pub handgrip_issues: Option<HandgripIssue>,
    pub ball_flight: Option<BallFlight>,
}

/// Optional build adjustments. Everything defaults to standard with steel shafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubAdjustments {
    pub club_length: ClubLength,
    pub lie_angle: LieAngle,
    pub shaft: Shaft,
    pub swing_weight: SwingWeight,
    pub grip_size: GripSize,
}

impl Default for ClubAdjustments {
    fn default() -> Self {
        Self {
            club_length: ClubLength::Standard,
            lie_angle: LieAngle::Standard,
            shaft: Shaft::Steel,
            swing_weight: SwingWeight::Standard,
            grip_size: GripSize::Standard,
        }
    }
}

/// Validated player record, built once at submit time.
///
/// Only the four primary fields reach the scorer; `fitting` and `adjustments`
/// drive the auxiliary fitting notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub swing_speed_mph: f64,
    pub handicap_index: f64,
    pub avg_driver_distance_yds: f64,
    pub play_style: PlayStyle,
    #[serde(default)]
    pub fitting: FittingAttributes,
    #[serde(default)]
    pub adjustments: ClubAdjustments,
}

#[cfg(test)]
impl PlayerProfile {
    pub fn new(
        swing_speed_mph: f64,
        handicap_index: f64,
        avg_driver_distance_yds: f64,
        play_style: PlayStyle,
    ) -> Self {
        Self {
            swing_speed_mph,
            handicap_index,
            avg_driver_distance_yds,
            play_style,
            fitting: FittingAttributes::default(),
            adjustments: ClubAdjustments::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayabilityResult {
    pub factor: u32, // 0 – 100
    pub category: Category,
    pub recommendations: Vec<String>,
}

/// Per-term contributions behind a factor, for display and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub swing_speed: i32,
    pub handicap: i32,
    pub play_style: i32,
    pub distance_efficiency: i32,
    pub raw_total: i32,
    pub factor: u32,
}
