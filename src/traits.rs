use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::constants::Constants;
use crate::error::{FleetError, Result};
use crate::time::date_in_zone;

/// Trait for user-notification delivery to enable mocking
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Fire-and-forget notification; may fail with `PermissionDenied`
    async fn notify(&self, title: &str, message: &str, notification_id: i64) -> Result<()>;
}

/// Trait for clock operations to enable deterministic testing
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now_utc(&self) -> DateTime<Utc>;

    /// Calendar date in the given zone
    fn today(&self, tz: Tz) -> NaiveDate {
        date_in_zone(self.now_utc(), tz)
    }
}

/// Production implementation using system clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Production notifier that emits a tracing event on the notification channel
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, title: &str, message: &str, notification_id: i64) -> Result<()> {
        info!(
            channel = Constants::NOTIFICATION_CHANNEL_ID,
            notification_id, "{}: {}", title, message
        );
        Ok(())
    }
}

/// Notifier used when the user has not granted notification permission
pub struct DeniedNotifier;

#[async_trait]
impl Notifier for DeniedNotifier {
    async fn notify(&self, _title: &str, _message: &str, _notification_id: i64) -> Result<()> {
        Err(FleetError::PermissionDenied(
            Constants::MSG_NOTIFICATION_PERMISSION_DENIED.to_string(),
        ))
    }
}

/// A notification recorded by [`MockNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub title: String,
    pub message: String,
    pub notification_id: i64,
}

/// Mock implementation for testing
#[derive(Debug, Clone)]
pub struct MockNotifier {
    pub sent: Arc<Mutex<Vec<SentNotification>>>,
    pub deny_mode: Arc<Mutex<bool>>, // Simulate missing permission
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            deny_mode: Arc::new(Mutex::new(false)),
        }
    }

    /// Enable permission-denied simulation
    pub async fn set_deny_mode(&self, enabled: bool) {
        *self.deny_mode.lock().await = enabled;
    }

    pub async fn get_sent(&self) -> Vec<SentNotification> {
        self.sent.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, title: &str, message: &str, notification_id: i64) -> Result<()> {
        if *self.deny_mode.lock().await {
            return Err(FleetError::PermissionDenied(
                Constants::MSG_NOTIFICATION_PERMISSION_DENIED.to_string(),
            ));
        }

        self.sent.lock().await.push(SentNotification {
            title: title.to_string(),
            message: message.to_string(),
            notification_id,
        });
        Ok(())
    }
}

/// Test clock implementation for deterministic time control
#[derive(Debug, Clone)]
pub struct TestClock {
    current_time: Arc<std::sync::Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn new(initial_time: DateTime<Utc>) -> Self {
        Self {
            current_time: Arc::new(std::sync::Mutex::new(initial_time)),
        }
    }

    /// Advance the clock by a specific duration
    pub fn advance(&self, duration: chrono::Duration) {
        let mut time = self
            .current_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *time += duration;
    }

    /// Set the clock to a specific time
    pub fn set_time(&self, new_time: DateTime<Utc>) {
        let mut time = self
            .current_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *time = new_time;
    }
}

impl Clock for TestClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self
            .current_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
