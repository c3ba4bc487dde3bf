//! Auxiliary fitting notes built from the secondary attributes.
//!
//! These never touch the playability factor; they are advisory text shown
//! next to the category recommendations.

use crate::playability::models::{
    BallFlight, ClubAdjustments, ClubLength, FittingAttributes, GripSize, HandSize, HandgripIssue,
    LieAngle, Shaft, SwingWeight,
};

pub fn fitting_notes(fitting: &FittingAttributes, adjustments: &ClubAdjustments) -> Vec<String> {
    let mut notes = Vec::new();

    match fitting.handgrip_issues {
        Some(HandgripIssue::None) | None => {}
        Some(issue) => notes.push(format!(
            "Grip comfort ({issue}): consider oversized, soft-compound grips to reduce grip pressure"
        )),
    }

    match fitting.ball_flight {
        Some(BallFlight::Slice) => {
            notes.push("Slice tendency: look for a draw-biased driver with offset irons".to_string())
        }
        Some(BallFlight::Hook) => notes.push(
            "Hook tendency: favour neutral or fade-biased heads and avoid heavy offset".to_string(),
        ),
        _ => {}
    }

    match fitting.hand_size {
        Some(HandSize::Small) => {
            notes.push("Small hands: undersize grips may improve feel".to_string())
        }
        Some(size @ (HandSize::Large | HandSize::ExtraLarge)) => notes.push(format!(
            "{} hands: midsize or oversize grips may improve control",
            if size == HandSize::Large { "Large" } else { "Extra-large" }
        )),
        _ => {}
    }

    if let Some(wrist) = fitting.wrist_to_floor_in {
        notes.push(format!("Wrist-to-floor: {wrist:.1} in (use for static length fitting)"));
    }

    if adjustments.club_length != ClubLength::Standard {
        notes.push(format!("Club length: {} inch", adjustments.club_length));
    }
    match adjustments.lie_angle {
        LieAngle::Standard => {}
        LieAngle::Upright => notes.push("Lie angle: upright (+2°)".to_string()),
        LieAngle::Flat => notes.push("Lie angle: flat (-2°)".to_string()),
    }
    match adjustments.shaft {
        Shaft::Steel => {}
        Shaft::Graphite => notes.push("Shaft: graphite".to_string()),
        Shaft::Iron => notes.push("Shaft: iron-specific".to_string()),
    }
    match adjustments.swing_weight {
        SwingWeight::Standard => {}
        SwingWeight::Heavier => notes.push("Swing weight: heavier head".to_string()),
        SwingWeight::Lighter => notes.push("Swing weight: lighter head".to_string()),
    }
    match adjustments.grip_size {
        GripSize::Standard => {}
        GripSize::PlusSixtyFourth => notes.push("Grip size: +1/64 (midsize)".to_string()),
        GripSize::PlusThirtySecond => notes.push("Grip size: +1/32 (oversize)".to_string()),
        GripSize::MinusSixtyFourth => notes.push("Grip size: -1/64 (undersize)".to_string()),
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_profile_has_no_notes() {
        let notes = fitting_notes(&FittingAttributes::default(), &ClubAdjustments::default());
        assert!(notes.is_empty());
    }

    #[test]
    fn test_no_handgrip_issue_is_silent() {
        let fitting = FittingAttributes {
            handgrip_issues: Some(HandgripIssue::None),
            ..Default::default()
        };
        assert!(fitting_notes(&fitting, &ClubAdjustments::default()).is_empty());
    }

    #[test]
    fn test_arthritis_and_slice_produce_notes() {
        let fitting = FittingAttributes {
            handgrip_issues: Some(HandgripIssue::Arthritis),
            ball_flight: Some(BallFlight::Slice),
            ..Default::default()
        };
        let notes = fitting_notes(&fitting, &ClubAdjustments::default());
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("arthritis"));
        assert!(notes[1].contains("draw-biased"));
    }

    #[test]
    fn test_hand_size_notes() {
        let small = FittingAttributes {
            hand_size: Some(HandSize::Small),
            ..Default::default()
        };
        let xl = FittingAttributes {
            hand_size: Some(HandSize::ExtraLarge),
            ..Default::default()
        };
        let adj = ClubAdjustments::default();
        assert!(fitting_notes(&small, &adj)[0].contains("undersize"));
        assert!(fitting_notes(&xl, &adj)[0].starts_with("Extra-large"));
    }

    #[test]
    fn test_non_standard_adjustments_are_echoed() {
        let adj = ClubAdjustments {
            club_length: ClubLength::PlusHalf,
            lie_angle: LieAngle::Upright,
            shaft: Shaft::Graphite,
            swing_weight: SwingWeight::Standard,
            grip_size: GripSize::PlusThirtySecond,
        };
        let notes = fitting_notes(&FittingAttributes::default(), &adj);
        assert_eq!(
            notes,
            vec![
                "Club length: +1/2 inch",
                "Lie angle: upright (+2°)",
                "Shaft: graphite",
                "Grip size: +1/32 (oversize)",
            ]
        );
    }

    #[test]
    fn test_wrist_to_floor_is_reported() {
        let fitting = FittingAttributes {
            wrist_to_floor_in: Some(34.5),
            ..Default::default()
        };
        let notes = fitting_notes(&fitting, &ClubAdjustments::default());
        assert_eq!(notes, vec!["Wrist-to-floor: 34.5 in (use for static length fitting)"]);
    }
}
