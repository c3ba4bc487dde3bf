//! Plain-text bodies for queued mail. Delivery is the provider's job; these
//! just carry what the message says.

use crate::results::models::{Feedback, SavedCalculation};

pub fn render_results_body(saved: &SavedCalculation) -> String {
    let profile = &saved.profile;
    let result = &saved.result;
    let mut lines = vec![
        format!("Playability Factor: {}", result.factor),
        format!("Category: {}", result.category),
        String::new(),
        "Your Golf Profile".to_string(),
        format!("- Swing Speed: {} mph", profile.swing_speed_mph),
        format!("- Handicap: {}", profile.handicap_index),
        format!("- Average Distance: {} yards", profile.avg_driver_distance_yds),
        format!("- Play Style: {}", profile.play_style),
    ];
    if let Some(gender) = profile.fitting.gender {
        lines.push(format!("- Gender: {gender}"));
    }

    lines.push(String::new());
    lines.push("Recommended Clubs".to_string());
    lines.extend(result.recommendations.iter().map(|r| format!("- {r}")));

    if let Some(prefs) = &saved.preferences {
        lines.push(String::new());
        lines.push("Your Club Preferences".to_string());
        lines.push(format!("- Brand: {}", prefs.brand_preference));
        lines.push(format!("- Budget: {}", prefs.budget_range));
        lines.push(format!("- Condition: {}", prefs.club_condition));
        lines.push(format!("- Look: {}", prefs.look_preference));
        lines.push(format!("- Shaft: {}", profile.adjustments.shaft));
        lines.push(format!("- Grip: {}", prefs.grip_preference));
    }

    lines.join("\n")
}

pub fn render_feedback_body(feedback: &Feedback) -> String {
    let mut body = format!(
        "Rating: {} out of 5 stars\nFrom: {}",
        feedback.rating,
        feedback.name.as_deref().unwrap_or("Anonymous")
    );
    if let Some(message) = &feedback.message {
        body.push_str("\n\n");
        body.push_str(message);
    }
    body
}
