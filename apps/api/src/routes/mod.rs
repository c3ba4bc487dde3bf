pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::playability::handlers as playability;
use crate::results::handlers as results;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/playability", post(playability::handle_score))
        .route(
            "/api/v1/calculations",
            post(results::handle_save_calculation),
        )
        .route(
            "/api/v1/calculations/:id",
            get(results::handle_get_calculation),
        )
        .route(
            "/api/v1/calculations/:id/preferences",
            patch(results::handle_attach_preferences),
        )
        .route(
            "/api/v1/calculations/:id/email",
            post(results::handle_email_results),
        )
        .route(
            "/api/v1/feedback",
            post(results::handle_feedback).get(results::handle_list_feedback),
        )
        .route("/api/v1/emails", get(results::handle_list_emails))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::results::sink::{InMemorySink, MailSettings};

    fn app() -> Router {
        let sink = InMemorySink::new(MailSettings {
            from: "Golf Club Finder <onboarding@resend.dev>".to_string(),
            feedback_recipient: "admin@yourdomain.com".to_string(),
        });
        build_router(AppState {
            sink: Arc::new(sink),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn form(speed: &str, handicap: &str, distance: &str, style: &str) -> Value {
        json!({
            "swing_speed": speed,
            "handicap": handicap,
            "avg_distance": distance,
            "play_style": style,
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "club-finder-api");
    }

    #[tokio::test]
    async fn test_score_endpoint_returns_result_and_breakdown() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/playability",
            Some(form("70", "30", "140", "aggressive")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["factor"], 70);
        assert_eq!(body["result"]["category"], "High Forgiveness");
        assert_eq!(body["result"]["recommendations"].as_array().unwrap().len(), 5);
        assert_eq!(body["breakdown"]["distance_efficiency"], 10);
        assert_eq!(body["breakdown"]["play_style"], -10);
        assert!(body["pro_tip"].as_str().unwrap().starts_with("Focus on forgiveness"));
        assert_eq!(body["fitting_notes"], json!([]));
    }

    #[tokio::test]
    async fn test_score_endpoint_includes_fitting_notes() {
        let mut body = form("115", "2", "310", "conservative");
        body["shaft_preference"] = json!("graphite");
        let (status, body) = send(&app(), Method::POST, "/api/v1/playability", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["factor"], 20);
        assert_eq!(body["result"]["category"], "Tour Level");
        assert_eq!(body["fitting_notes"], json!(["Shaft: graphite"]));
    }

    #[tokio::test]
    async fn test_score_endpoint_rejects_bad_input() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/playability",
            Some(form("abc", "10", "200", "balanced")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("swing_speed"));
    }

    #[tokio::test]
    async fn test_calculation_lifecycle() {
        let app = app();

        let (status, saved) = send(
            &app,
            Method::POST,
            "/api/v1/calculations",
            Some(form("94.9", "15", "220", "balanced")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["result"]["factor"], 50);
        assert_eq!(saved["result"]["category"], "Moderate Forgiveness");
        assert!(saved["preferences"].is_null());
        let id = saved["id"].as_str().unwrap().to_string();

        let (status, fetched) =
            send(&app, Method::GET, &format!("/api/v1/calculations/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], saved["id"]);

        let (status, updated) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/calculations/{id}/preferences"),
            Some(json!({
                "club_condition": "new",
                "grip_preference": "oversized",
                "look_preference": "modern",
                "budget_range": "premium",
                "brand_preference": "mizuno"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["preferences"]["brand_preference"], "mizuno");

        let (status, receipt) = send(
            &app,
            Method::POST,
            &format!("/api/v1/calculations/{id}/email"),
            Some(json!({ "email": "golfer@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(receipt["to"], "golfer@example.com");
        assert_eq!(receipt["calculation_id"], saved["id"]);
        assert_eq!(receipt["subject"], "Your Golf Club Recommendations");
    }

    #[tokio::test]
    async fn test_unknown_calculation_is_404() {
        let uri = format!("/api/v1/calculations/{}", uuid::Uuid::new_v4());
        let (status, body) = send(&app(), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_email_rejects_bad_address() {
        let app = app();
        let (_, saved) = send(
            &app,
            Method::POST,
            "/api/v1/calculations",
            Some(form("100", "8", "250", "balanced")),
        )
        .await;
        let id = saved["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/calculations/{id}/email"),
            Some(json!({ "email": "nobody" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_feedback() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/feedback",
            Some(json!({ "rating": 5, "name": "Sam", "feedback_text": "Spot on" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["rating"], 5);
        assert_eq!(body["name"], "Sam");
        assert_eq!(body["message"], "Spot on");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/feedback",
            Some(json!({ "rating": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, summary) = send(&app, Method::GET, "/api/v1/feedback", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["total"], 1);
        assert_eq!(summary["average_rating"], 5.0);
        assert_eq!(summary["feedback"][0]["message"], "Spot on");
    }

    #[tokio::test]
    async fn test_queued_emails_are_listed() {
        let app = app();
        let (_, saved) = send(
            &app,
            Method::POST,
            "/api/v1/calculations",
            Some(form("115", "2", "310", "conservative")),
        )
        .await;
        let id = saved["id"].as_str().unwrap();
        send(
            &app,
            Method::POST,
            &format!("/api/v1/calculations/{id}/email"),
            Some(json!({ "email": "golfer@example.com" })),
        )
        .await;
        send(&app, Method::POST, "/api/v1/feedback", Some(json!({ "rating": 4 }))).await;

        let (status, emails) = send(&app, Method::GET, "/api/v1/emails", None).await;
        assert_eq!(status, StatusCode::OK);
        let emails = emails.as_array().unwrap();
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0]["to"], "golfer@example.com");
        assert!(emails[0]["body"]
            .as_str()
            .unwrap()
            .contains("Category: Tour Level"));
        assert_eq!(emails[1]["to"], "admin@yourdomain.com");
    }
}
