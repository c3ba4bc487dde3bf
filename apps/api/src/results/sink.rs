//! Results sink: where saved calculations, queued emails and feedback go.
//!
//! The scorer never sees this; handlers call it after scoring. `AppState`
//! holds an `Arc<dyn ResultsSink>` so the backing store can be swapped without
//! touching handlers. `InMemorySink` is the default and only backend here.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::playability::models::{PlayabilityResult, PlayerProfile};
use crate::results::email::{render_feedback_body, render_results_body};
use crate::results::models::{
    ClubPreferences, EmailReceipt, Feedback, FeedbackSummary, NewFeedback, SavedCalculation,
};

pub const RESULTS_SUBJECT: &str = "Your Golf Club Recommendations";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Calculation {0} not found")]
    NotFound(Uuid),

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

#[async_trait]
pub trait ResultsSink: Send + Sync {
    async fn save(
        &self,
        profile: PlayerProfile,
        result: PlayabilityResult,
    ) -> Result<SavedCalculation, SinkError>;

    async fn get(&self, id: Uuid) -> Result<SavedCalculation, SinkError>;

    async fn attach_preferences(
        &self,
        id: Uuid,
        preferences: ClubPreferences,
    ) -> Result<SavedCalculation, SinkError>;

    /// Queues the results of a saved calculation for delivery to `address`.
    async fn email(&self, id: Uuid, address: &str) -> Result<EmailReceipt, SinkError>;

    /// Stores feedback and queues a notification for the feedback recipient.
    async fn record_feedback(&self, feedback: NewFeedback) -> Result<Feedback, SinkError>;

    /// All feedback, newest first, with count and average rating.
    async fn list_feedback(&self) -> Result<FeedbackSummary, SinkError>;

    /// Mail accepted for delivery, in the order it was queued.
    async fn queued_emails(&self) -> Result<Vec<EmailReceipt>, SinkError>;
}

/// Sender and recipient addresses used when queueing mail.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
    pub feedback_recipient: String,
}

pub struct InMemorySink {
    mail: MailSettings,
    calculations: RwLock<HashMap<Uuid, SavedCalculation>>,
    outbox: RwLock<Vec<EmailReceipt>>,
    feedback: RwLock<Vec<Feedback>>,
}

impl InMemorySink {
    pub fn new(mail: MailSettings) -> Self {
        Self {
            mail,
            calculations: RwLock::new(HashMap::new()),
            outbox: RwLock::new(Vec::new()),
            feedback: RwLock::new(Vec::new()),
        }
    }

    async fn queue(
        &self,
        calculation_id: Option<Uuid>,
        to: &str,
        subject: String,
        body: String,
    ) -> EmailReceipt {
        let receipt = EmailReceipt {
            id: Uuid::new_v4(),
            calculation_id,
            from: self.mail.from.clone(),
            to: to.to_string(),
            subject,
            body,
            queued_at: Utc::now(),
        };
        self.outbox.write().await.push(receipt.clone());
        receipt
    }
}

#[async_trait]
impl ResultsSink for InMemorySink {
    async fn save(
        &self,
        profile: PlayerProfile,
        result: PlayabilityResult,
    ) -> Result<SavedCalculation, SinkError> {
        let now = Utc::now();
        let saved = SavedCalculation {
            id: Uuid::new_v4(),
            profile,
            result,
            preferences: None,
            created_at: now,
            updated_at: now,
        };
        self.calculations
            .write()
            .await
            .insert(saved.id, saved.clone());
        info!(id = %saved.id, factor = saved.result.factor, "Saved calculation");
        Ok(saved)
    }

    async fn get(&self, id: Uuid) -> Result<SavedCalculation, SinkError> {
        self.calculations
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SinkError::NotFound(id))
    }

    async fn attach_preferences(
        &self,
        id: Uuid,
        preferences: ClubPreferences,
    ) -> Result<SavedCalculation, SinkError> {
        let mut calculations = self.calculations.write().await;
        let saved = calculations.get_mut(&id).ok_or(SinkError::NotFound(id))?;
        saved.preferences = Some(preferences);
        saved.updated_at = Utc::now();
        Ok(saved.clone())
    }

    async fn email(&self, id: Uuid, address: &str) -> Result<EmailReceipt, SinkError> {
        let address = address.trim();
        if !is_plausible_email(address) {
            return Err(SinkError::InvalidEmail(address.to_string()));
        }
        let saved = self.get(id).await?;

        let receipt = self
            .queue(
                Some(id),
                address,
                RESULTS_SUBJECT.to_string(),
                render_results_body(&saved),
            )
            .await;
        info!(calculation = %id, to = %receipt.to, "Queued results email");
        Ok(receipt)
    }

    async fn record_feedback(&self, feedback: NewFeedback) -> Result<Feedback, SinkError> {
        if !(1..=5).contains(&feedback.rating) {
            return Err(SinkError::InvalidRating(feedback.rating));
        }

        let record = Feedback {
            id: Uuid::new_v4(),
            rating: feedback.rating,
            name: non_blank(feedback.name),
            message: non_blank(feedback.feedback_text),
            created_at: Utc::now(),
        };
        self.feedback.write().await.push(record.clone());

        let recipient = self.mail.feedback_recipient.clone();
        self.queue(
            None,
            &recipient,
            feedback_subject(record.rating),
            render_feedback_body(&record),
        )
        .await;
        info!(rating = record.rating, "Recorded feedback");
        Ok(record)
    }

    async fn list_feedback(&self) -> Result<FeedbackSummary, SinkError> {
        let newest_first = self.feedback.read().await.iter().rev().cloned().collect();
        Ok(FeedbackSummary::from_newest_first(newest_first))
    }

    async fn queued_emails(&self) -> Result<Vec<EmailReceipt>, SinkError> {
        Ok(self.outbox.read().await.clone())
    }
}

/// `"New Feedback: ⭐⭐⭐ (3/5)"`
pub fn feedback_subject(rating: u8) -> String {
    format!("New Feedback: {} ({rating}/5)", "⭐".repeat(rating as usize))
}

/// Shape check only: one `@`, non-empty local part, dotted domain with no
/// empty labels, no whitespace.
pub fn is_plausible_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
