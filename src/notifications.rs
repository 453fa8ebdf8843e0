use tracing::{info, warn};

use crate::constants::Constants;
use crate::error::FleetError;
use crate::traits::Notifier;

/// Outcome of a notification attempt; never fatal to the calling flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Delivered,
    Suppressed { reason: String },
}

impl NotificationOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NotificationOutcome::Delivered)
    }
}

/// Request notification types with their templates
#[derive(Debug, Clone)]
pub enum RequestNotificationType {
    /// A requisition was raised from the request form
    Submitted { equipment_name: String },
    /// Manager approved the full quantity
    Approved { equipment_name: String, quantity: u32 },
    /// Manager approved fewer units than requested
    PartiallyApproved {
        equipment_name: String,
        allocated: u32,
        requested: u32,
    },
    /// Manager rejected the request
    Rejected { equipment_name: String, reason: String },
}

impl RequestNotificationType {
    pub fn title(&self) -> &'static str {
        match self {
            RequestNotificationType::Submitted { .. } => Constants::TITLE_NEW_REQUEST,
            RequestNotificationType::Approved { .. } => Constants::TITLE_REQUEST_APPROVED,
            RequestNotificationType::PartiallyApproved { .. } => {
                Constants::TITLE_REQUEST_PARTIALLY_APPROVED
            }
            RequestNotificationType::Rejected { .. } => Constants::TITLE_REQUEST_REJECTED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RequestNotificationType::Submitted { equipment_name } => {
                format!("A request for {} has been raised.", equipment_name)
            }
            RequestNotificationType::Approved { equipment_name, quantity } => {
                format!("Your request for {} x{} has been approved.", equipment_name, quantity)
            }
            RequestNotificationType::PartiallyApproved {
                equipment_name,
                allocated,
                requested,
            } => format!(
                "Your request for {} has been partially approved: {} of {} units allocated.",
                equipment_name, allocated, requested
            ),
            RequestNotificationType::Rejected { equipment_name, reason } => {
                format!("Your request for {} has been rejected. Reason: {}", equipment_name, reason)
            }
        }
    }

    pub fn equipment_name(&self) -> &str {
        match self {
            RequestNotificationType::Submitted { equipment_name }
            | RequestNotificationType::Approved { equipment_name, .. }
            | RequestNotificationType::PartiallyApproved { equipment_name, .. }
            | RequestNotificationType::Rejected { equipment_name, .. } => equipment_name,
        }
    }
}

/// Sends request notifications and absorbs delivery failures
pub struct RequestNotifier<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> RequestNotifier<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn inner(&self) -> &N {
        &self.notifier
    }

    pub async fn send(
        &self,
        notification: RequestNotificationType,
        notification_id: i64,
    ) -> NotificationOutcome {
        let message = notification.message();

        match self
            .notifier
            .notify(notification.title(), &message, notification_id)
            .await
        {
            Ok(()) => {
                info!(
                    "Sent '{}' notification for {} (id {})",
                    notification.title(),
                    notification.equipment_name(),
                    notification_id
                );
                NotificationOutcome::Delivered
            }
            Err(FleetError::PermissionDenied(reason)) => {
                warn!("Notification {} not shown: {}", notification_id, reason);
                NotificationOutcome::Suppressed { reason }
            }
            Err(e) => {
                warn!("Failed to send notification {}: {}", notification_id, e);
                NotificationOutcome::Suppressed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
