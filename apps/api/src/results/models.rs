use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::playability::models::{form_option, PlayabilityResult, PlayerProfile};

form_option! {
    pub enum ClubCondition {
        New => "new",
        LikeNew => "like-new",
        Used => "used",
        Any => "any",
    }
}

form_option! {
    pub enum GripPreference {
        StandardRubber => "standard-rubber",
        Corded => "corded",
        Oversized => "oversized",
        Midsize => "midsize",
        Wrap => "wrap",
        NoPreference => "no-preference",
    }
}

form_option! {
    pub enum LookPreference {
        Traditional => "traditional",
        Modern => "modern",
        Minimal => "minimal",
        Premium => "premium",
        Colorful => "colorful",
        NoPreference => "no-preference",
    }
}

form_option! {
    pub enum BudgetRange {
        Budget => "budget",
        MidRange => "mid-range",
        Premium => "premium",
        Luxury => "luxury",
        NoLimit => "no-limit",
    }
}

form_option! {
    pub enum BrandPreference {
        Titleist => "titleist",
        Callaway => "callaway",
        TaylorMade => "taylormade",
        Ping => "ping",
        Mizuno => "mizuno",
        Cobra => "cobra",
        Pxg => "pxg",
        Srixon => "srixon",
        NoPreference => "no-preference",
    }
}

/// Shopping preferences collected after the results are shown. All five are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubPreferences {
    pub club_condition: ClubCondition,
    pub grip_preference: GripPreference,
    pub look_preference: LookPreference,
    pub budget_range: BudgetRange,
    pub brand_preference: BrandPreference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: Uuid,
    pub profile: PlayerProfile,
    pub result: PlayabilityResult,
    pub preferences: Option<ClubPreferences>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An email accepted for delivery. Sending it is the mail provider's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub id: Uuid,
    pub calculation_id: Option<Uuid>, // None for feedback notifications
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub queued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFeedback {
    pub rating: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub rating: u8, // 1 – 5
    pub name: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Feedback listing, newest first, with the dashboard totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub total: usize,
    pub average_rating: f64, // one decimal; 0.0 when empty
    pub feedback: Vec<Feedback>,
}

impl FeedbackSummary {
    /// `feedback` must already be newest first.
    pub fn from_newest_first(feedback: Vec<Feedback>) -> Self {
        let total = feedback.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            let sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
            (f64::from(sum) / total as f64 * 10.0).round() / 10.0
        };
        Self {
            total,
            average_rating,
            feedback,
        }
    }
}
