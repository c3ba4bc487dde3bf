use serde::{Deserialize, Serialize};

/// Forgiveness bands, ordered from least to most forgiving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Tour Level")]
    TourLevel,
    #[serde(rename = "Low Forgiveness")]
    LowForgiveness,
    #[serde(rename = "Moderate Forgiveness")]
    ModerateForgiveness,
    #[serde(rename = "High Forgiveness")]
    HighForgiveness,
}

const HIGH_FORGIVENESS_CLUBS: [&str; 5] = [
    "Game Improvement Irons (e.g., TaylorMade Stealth, Callaway Rogue ST Max)",
    "Oversized Driver with High MOI (460cc head)",
    "Hybrid Clubs (4H, 5H to replace long irons)",
    "Perimeter-weighted Cavity Back Irons",
    "High-loft Driver (10.5° - 12°)",
];

const MODERATE_FORGIVENESS_CLUBS: [&str; 5] = [
    "Players Distance Irons (e.g., Ping G430, Mizuno JPX)",
    "Adjustable Driver (9.5° - 10.5° loft)",
    "One or Two Hybrids (3H, 4H)",
    "Progressive Set Design (cavity backs to muscle)",
    "Fairway Woods with Rail Design",
];

const LOW_FORGIVENESS_CLUBS: [&str; 5] = [
    "Players Irons (e.g., Titleist T100, Mizuno MP)",
    "Low-spin Driver (8.5° - 9.5° loft)",
    "Blade-style Short Irons",
    "Traditional 3-wood and 5-wood",
    "Forged Cavity Back Long Irons",
];

const TOUR_LEVEL_CLUBS: [&str; 5] = [
    "Blade Irons (e.g., Titleist MB, Mizuno MP-20)",
    "Low-loft Driver with Tour Shaft (8° - 9°)",
    "Classic Muscle Back Design",
    "Tour-caliber Woods and Hybrids",
    "High-control Wedge Setup (52°, 56°, 60°)",
];

impl Category {
    /// Most forgiving first, matching the order bands are checked in.
    pub const ALL: [Category; 4] = [
        Category::HighForgiveness,
        Category::ModerateForgiveness,
        Category::LowForgiveness,
        Category::TourLevel,
    ];

    /// Inclusive lower bound of the band.
    pub fn min_factor(self) -> u32 {
        match self {
            Category::HighForgiveness => 70,
            Category::ModerateForgiveness => 50,
            Category::LowForgiveness => 30,
            Category::TourLevel => 0,
        }
    }

    /// Bands are half-open with inclusive lower bounds, so a tie lands in the
    /// more forgiving band.
    pub fn from_factor(factor: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| factor >= c.min_factor())
            .unwrap_or(Category::TourLevel)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::HighForgiveness => "High Forgiveness",
            Category::ModerateForgiveness => "Moderate Forgiveness",
            Category::LowForgiveness => "Low Forgiveness",
            Category::TourLevel => "Tour Level",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str; 5] {
        match self {
            Category::HighForgiveness => &HIGH_FORGIVENESS_CLUBS,
            Category::ModerateForgiveness => &MODERATE_FORGIVENESS_CLUBS,
            Category::LowForgiveness => &LOW_FORGIVENESS_CLUBS,
            Category::TourLevel => &TOUR_LEVEL_CLUBS,
        }
    }

    pub fn pro_tip(self) -> &'static str {
        match self {
            Category::HighForgiveness => {
                "Focus on forgiveness and distance. Consider getting fitted at a local pro shop \
                 to maximize your game improvement potential."
            }
            Category::ModerateForgiveness => {
                "You're in a great position to balance forgiveness with workability. A \
                 professional fitting can help you fine-tune your set makeup."
            }
            Category::LowForgiveness => {
                "Your skill level allows for more precise clubs. Consider a mix of players irons \
                 with strategic forgiveness in long irons."
            }
            Category::TourLevel => {
                "Tour-level equipment demands consistency. Work with a professional fitter to \
                 optimize shaft selection and club specifications."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
