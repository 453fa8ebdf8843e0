use chrono::NaiveDate;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

use crate::allocation::{default_partial_quantity, find_type};
use crate::availability::{fleet_overview, summarize_fleet};
use crate::error::{FleetError, Result};
use crate::fleet::{seed_manager_requests, seed_stakeholder_requests};
use crate::models::{
    AllocationResult, EquipmentAvailability, EquipmentStatus, EquipmentType, ManagerRequest,
    Requisition,
};
use crate::notifications::{NotificationOutcome, RequestNotificationType, RequestNotifier};
use crate::requests::{ApprovalBoard, RequisitionLog, StakeholderBoard};
use crate::traits::{Clock, Notifier};

/// A pending request paired with what the fleet can currently offer for it
#[derive(Debug, Clone)]
pub struct PendingReview {
    pub request: ManagerRequest,
    /// `None` when the requested equipment type is not part of the fleet
    pub availability: Option<AllocationResult>,
}

impl PendingReview {
    pub fn status_message(&self) -> Option<String> {
        self.availability
            .as_ref()
            .map(|result| result.status_message(self.request.quantity))
    }
}

/// The single coordinating context of an interactive session.
///
/// Owns the fleet, the request lists and the collaborators; every mutation goes through
/// one of its named operations.
pub struct FleetSession<N: Notifier> {
    fleet: Vec<EquipmentType>,
    board: ApprovalBoard,
    stakeholders: StakeholderBoard,
    requisitions: RequisitionLog,
    notifier: RequestNotifier<N>,
    clock: Arc<dyn Clock>,
    tz: Tz,
    decision_notifications: i64,
}

impl<N: Notifier> FleetSession<N> {
    pub fn new(fleet: Vec<EquipmentType>, notifier: N, clock: Arc<dyn Clock>, tz: Tz) -> Self {
        Self {
            fleet,
            board: ApprovalBoard::new(),
            stakeholders: StakeholderBoard::default(),
            requisitions: RequisitionLog::new(),
            notifier: RequestNotifier::new(notifier),
            clock,
            tz,
            decision_notifications: 0,
        }
    }

    /// Load the seed pending and stakeholder requests
    pub fn seed_requests(&mut self) -> Result<()> {
        for request in seed_manager_requests(self.today())? {
            self.board.submit(request)?;
        }
        self.stakeholders = StakeholderBoard::new(seed_stakeholder_requests());
        info!(
            "Seeded {} pending and {} stakeholder requests",
            self.board.pending().len(),
            self.stakeholders.requests().len()
        );
        Ok(())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.tz)
    }

    pub fn fleet(&self) -> &[EquipmentType] {
        &self.fleet
    }

    pub fn board(&self) -> &ApprovalBoard {
        &self.board
    }

    pub fn stakeholders(&self) -> &StakeholderBoard {
        &self.stakeholders
    }

    pub fn stakeholders_mut(&mut self) -> &mut StakeholderBoard {
        &mut self.stakeholders
    }

    pub fn requisitions(&self) -> &RequisitionLog {
        &self.requisitions
    }

    pub fn notifier(&self) -> &N {
        self.notifier.inner()
    }

    pub fn availability_by_type(&self) -> Vec<EquipmentAvailability> {
        summarize_fleet(&self.fleet)
    }

    pub fn overview(&self) -> EquipmentAvailability {
        fleet_overview(&self.fleet)
    }

    pub fn type_availability(&self, type_name: &str) -> Result<EquipmentAvailability> {
        Ok(find_type(&self.fleet, type_name)?.availability_summary())
    }

    pub fn check_request(&self, type_name: &str, requested_quantity: i64) -> Result<AllocationResult> {
        find_type(&self.fleet, type_name)?.can_fulfill_request(requested_quantity, self.today())
    }

    /// Sorted pending queue with an availability check for each entry
    pub fn review_pending(&self) -> Result<Vec<PendingReview>> {
        let today = self.today();
        self.board
            .sorted_pending()
            .into_iter()
            .map(|request| {
                let availability = match find_type(&self.fleet, &request.equipment_name) {
                    Ok(equipment_type) => Some(
                        equipment_type.can_fulfill_request(i64::from(request.quantity), today)?,
                    ),
                    Err(FleetError::NotFound(_)) => None,
                    Err(e) => return Err(e),
                };
                Ok(PendingReview {
                    request: request.clone(),
                    availability,
                })
            })
            .collect()
    }

    /// Change a unit's status, e.g. when it is handed out or returned
    pub fn set_item_status(&mut self, type_name: &str, item_id: i64, status: EquipmentStatus) -> Result<()> {
        let equipment_type = self
            .fleet
            .iter_mut()
            .find(|equipment_type| equipment_type.type_name == type_name)
            .ok_or_else(|| FleetError::not_found(format!("equipment type '{}'", type_name)))?;
        let item = equipment_type
            .item_mut(item_id)
            .ok_or_else(|| FleetError::not_found(format!("{} unit {}", type_name, item_id)))?;

        info!("{} ({}) is now {}", item.name, item_id, status);
        item.set_status(status);
        Ok(())
    }

    pub fn submit_manager_request(&mut self, request: ManagerRequest) -> Result<()> {
        self.board.submit(request)
    }

    /// Record a requisition from the form and announce it
    pub async fn submit_requisition(
        &mut self,
        equipment_name: &str,
        quantity: &str,
        remarks: &str,
    ) -> Result<(Requisition, NotificationOutcome)> {
        let requisition = self.requisitions.submit(equipment_name, quantity, remarks)?.clone();
        let notification_id = self.requisitions.len() as i64;
        let outcome = self
            .notifier
            .send(
                RequestNotificationType::Submitted {
                    equipment_name: requisition.equipment_name.clone(),
                },
                notification_id,
            )
            .await;
        Ok((requisition, outcome))
    }

    pub fn update_requisition(
        &mut self,
        requisition_id: &str,
        equipment_name: &str,
        quantity: &str,
        remarks: &str,
    ) -> Result<Requisition> {
        self.requisitions
            .update(requisition_id, equipment_name, quantity, remarks)
            .cloned()
    }

    pub fn delete_requisition(&mut self, requisition_id: &str) -> Result<Requisition> {
        self.requisitions.remove(requisition_id)
    }

    pub async fn approve(&mut self, request_id: &str) -> Result<NotificationOutcome> {
        let approved = self.board.approve(request_id)?;
        let notification = RequestNotificationType::Approved {
            equipment_name: approved.equipment_name.clone(),
            quantity: approved.quantity,
        };
        Ok(self.send_decision(notification).await)
    }

    /// Approve part of a request, bounded by the units currently free for its type
    pub async fn partially_approve(&mut self, request_id: &str, quantity: u32) -> Result<NotificationOutcome> {
        let type_name = self.board.find_pending(request_id)?.equipment_name.clone();
        let available = free_units(&self.fleet, &type_name)?;

        let decided = self.board.partially_approve(request_id, quantity, available)?;
        let notification = RequestNotificationType::PartiallyApproved {
            equipment_name: decided.equipment_name.clone(),
            allocated: decided.allocated_quantity,
            requested: decided.quantity,
        };
        Ok(self.send_decision(notification).await)
    }

    pub async fn reject(&mut self, request_id: &str, reason: &str) -> Result<NotificationOutcome> {
        let rejected = self.board.reject(request_id, reason)?;
        let notification = RequestNotificationType::Rejected {
            equipment_name: rejected.equipment_name.clone(),
            reason: reason.to_string(),
        };
        Ok(self.send_decision(notification).await)
    }

    pub fn approve_all(&mut self) -> usize {
        self.board.approve_all()
    }

    pub fn reject_all(&mut self) -> usize {
        self.board.reject_all()
    }

    /// Partially approve the whole queue, each request getting the default proposed quantity
    /// for its type's free units
    pub fn partially_approve_all(&mut self) -> Result<usize> {
        let fleet = &self.fleet;
        self.board.partially_approve_all(|request| {
            let available = free_units(fleet, &request.equipment_name)?;
            let quantity = default_partial_quantity(available, request.quantity).unwrap_or(0);
            Ok((quantity, available))
        })
    }

    async fn send_decision(&mut self, notification: RequestNotificationType) -> NotificationOutcome {
        self.decision_notifications += 1;
        self.notifier
            .send(notification, self.decision_notifications)
            .await
    }
}

fn free_units(fleet: &[EquipmentType], type_name: &str) -> Result<u32> {
    let available = find_type(fleet, type_name)?.available_units();
    u32::try_from(available).map_err(|_| FleetError::invalid("available unit count out of range"))
}
