use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, info};
use uuid::Uuid;

use crate::allocation::validate_partial_quantity;
use crate::error::{FleetError, Result};
use crate::models::{ManagerRequest, RequestStatus, Requisition, StakeholderRequest};
use crate::status_filter::filter_records;

/// Counts shown on the allocation dashboard, computed from board state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub pending: usize,
    pub approved: usize,
    pub partially_approved: usize,
    pub rejected: usize,
}

/// Pending manager requests and the decisions taken on them.
///
/// Every decision removes the request from `pending` and appends a copy carrying the
/// new status to `history`.
#[derive(Debug, Clone, Default)]
pub struct ApprovalBoard {
    pending: Vec<ManagerRequest>,
    history: Vec<ManagerRequest>,
}

impl ApprovalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pending(pending: Vec<ManagerRequest>) -> Self {
        Self {
            pending,
            history: Vec::new(),
        }
    }

    pub fn pending(&self) -> &[ManagerRequest] {
        &self.pending
    }

    pub fn history(&self) -> &[ManagerRequest] {
        &self.history
    }

    pub fn find_pending(&self, request_id: &str) -> Result<&ManagerRequest> {
        self.pending
            .iter()
            .find(|request| request.id == request_id)
            .ok_or_else(|| FleetError::not_found(format!("pending request '{}'", request_id)))
    }

    pub fn submit(&mut self, request: ManagerRequest) -> Result<()> {
        if request.status != RequestStatus::Pending {
            return Err(FleetError::invalid(format!(
                "request '{}' is already {}",
                request.id, request.status
            )));
        }
        if self.pending.iter().any(|existing| existing.id == request.id) {
            return Err(FleetError::invalid(format!(
                "request '{}' is already pending",
                request.id
            )));
        }

        info!(
            "Request {} submitted: {} x{} by {}",
            request.id, request.equipment_name, request.quantity, request.supervisor_name
        );
        self.pending.push(request);
        Ok(())
    }

    pub fn approve(&mut self, request_id: &str) -> Result<&ManagerRequest> {
        let mut request = self.take_pending(request_id)?;
        request.status = RequestStatus::Approved;
        info!("Request {} approved", request_id);
        Ok(self.record(request))
    }

    /// Approve `quantity` units when only `available_units` are free
    pub fn partially_approve(
        &mut self,
        request_id: &str,
        quantity: u32,
        available_units: u32,
    ) -> Result<&ManagerRequest> {
        let requested = self.find_pending(request_id)?.quantity;
        validate_partial_quantity(quantity, available_units, requested)?;

        let mut request = self.take_pending(request_id)?;
        request.status = RequestStatus::PartiallyApproved;
        request.allocated_quantity = quantity;
        info!(
            "Request {} partially approved: {} of {}",
            request_id, quantity, requested
        );
        Ok(self.record(request))
    }

    pub fn reject(&mut self, request_id: &str, reason: &str) -> Result<&ManagerRequest> {
        let mut request = self.take_pending(request_id)?;
        request.status = RequestStatus::Rejected;
        request.allocation_notes = reason.to_string();
        info!("Request {} rejected: {}", request_id, reason);
        Ok(self.record(request))
    }

    /// Approve every pending request in queue order; returns how many moved
    pub fn approve_all(&mut self) -> usize {
        self.decide_all(RequestStatus::Approved)
    }

    /// Reject every pending request in queue order; returns how many moved
    pub fn reject_all(&mut self) -> usize {
        self.decide_all(RequestStatus::Rejected)
    }

    /// Partially approve every pending request in queue order.
    ///
    /// `bounds_for` yields `(quantity, available_units)` for a request. All quantities are
    /// checked before anything moves, so one out-of-range quantity leaves the board as it was.
    pub fn partially_approve_all<F>(&mut self, mut bounds_for: F) -> Result<usize>
    where
        F: FnMut(&ManagerRequest) -> Result<(u32, u32)>,
    {
        let quantities = self
            .pending
            .iter()
            .map(|request| {
                let (quantity, available_units) = bounds_for(request)?;
                validate_partial_quantity(quantity, available_units, request.quantity)
            })
            .collect::<Result<Vec<u32>>>()?;

        let moved = quantities.len();
        self.history
            .extend(self.pending.drain(..).zip(quantities).map(|(mut request, quantity)| {
                request.status = RequestStatus::PartiallyApproved;
                request.allocated_quantity = quantity;
                request
            }));
        if moved > 0 {
            info!("Bulk {}: {} requests", RequestStatus::PartiallyApproved, moved);
        } else {
            debug!("Bulk {} on an empty queue", RequestStatus::PartiallyApproved);
        }
        Ok(moved)
    }

    fn decide_all(&mut self, status: RequestStatus) -> usize {
        let moved = self.pending.len();
        self.history.extend(self.pending.drain(..).map(|mut request| {
            request.status = status;
            request
        }));
        if moved > 0 {
            info!("Bulk {}: {} requests", status, moved);
        } else {
            debug!("Bulk {} on an empty queue", status);
        }
        moved
    }

    /// Pending queue ordered by priority weight (highest first), then requested date
    pub fn sorted_pending(&self) -> Vec<&ManagerRequest> {
        let mut sorted: Vec<&ManagerRequest> = self.pending.iter().collect();
        sorted.sort_by(|a, b| {
            b.priority
                .weight()
                .cmp(&a.priority.weight())
                .then_with(|| a.requested_date.cmp(&b.requested_date))
        });
        sorted
    }

    pub fn history_filtered(&self, selected_status: &str) -> Cow<'_, [ManagerRequest]> {
        filter_records(&self.history, selected_status)
    }

    pub fn daily_summary(&self) -> AllocationSummary {
        let mut summary = AllocationSummary {
            pending: self.pending.len(),
            ..AllocationSummary::default()
        };
        for request in &self.history {
            match request.status {
                RequestStatus::Approved => summary.approved += 1,
                RequestStatus::PartiallyApproved => summary.partially_approved += 1,
                RequestStatus::Rejected => summary.rejected += 1,
                RequestStatus::Pending => {}
            }
        }
        summary
    }

    pub fn history_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.history)
    }

    fn take_pending(&mut self, request_id: &str) -> Result<ManagerRequest> {
        let index = self
            .pending
            .iter()
            .position(|request| request.id == request_id)
            .ok_or_else(|| FleetError::not_found(format!("pending request '{}'", request_id)))?;
        Ok(self.pending.remove(index))
    }

    fn record(&mut self, request: ManagerRequest) -> &ManagerRequest {
        let index = self.history.len();
        self.history.push(request);
        &self.history[index]
    }
}

/// Stakeholder view: one list whose entries change status in place
#[derive(Debug, Clone, Default)]
pub struct StakeholderBoard {
    requests: Vec<StakeholderRequest>,
}

impl StakeholderBoard {
    pub fn new(requests: Vec<StakeholderRequest>) -> Self {
        Self { requests }
    }

    pub fn requests(&self) -> &[StakeholderRequest] {
        &self.requests
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|request| request.status == RequestStatus::Pending)
            .count()
    }

    pub fn filtered(&self, selected_status: &str) -> Cow<'_, [StakeholderRequest]> {
        filter_records(&self.requests, selected_status)
    }

    pub fn approve(&mut self, request_id: &str) -> Result<&StakeholderRequest> {
        let request = self.get_mut(request_id)?;
        request.status = RequestStatus::Approved;
        request.rejection_reason = None;
        info!("Stakeholder request {} approved", request_id);
        Ok(request)
    }

    pub fn reject(&mut self, request_id: &str, reason: &str) -> Result<&StakeholderRequest> {
        let request = self.get_mut(request_id)?;
        request.status = RequestStatus::Rejected;
        request.rejection_reason = Some(reason.to_string());
        info!("Stakeholder request {} rejected: {}", request_id, reason);
        Ok(request)
    }

    /// Approve only the entries that are still pending
    pub fn approve_all_pending(&mut self) -> usize {
        self.replace_pending(RequestStatus::Approved, None)
    }

    pub fn reject_all_pending(&mut self, reason: &str) -> usize {
        self.replace_pending(RequestStatus::Rejected, Some(reason))
    }

    fn replace_pending(&mut self, status: RequestStatus, reason: Option<&str>) -> usize {
        let mut changed = 0;
        for request in self
            .requests
            .iter_mut()
            .filter(|request| request.status == RequestStatus::Pending)
        {
            request.status = status;
            request.rejection_reason = reason.map(str::to_string);
            changed += 1;
        }
        info!("Stakeholder bulk {}: {} requests", status, changed);
        changed
    }

    fn get_mut(&mut self, request_id: &str) -> Result<&mut StakeholderRequest> {
        self.requests
            .iter_mut()
            .find(|request| request.id == request_id)
            .ok_or_else(|| FleetError::not_found(format!("stakeholder request '{}'", request_id)))
    }
}

/// Requisitions raised from the request form
#[derive(Debug, Clone, Default)]
pub struct RequisitionLog {
    requisitions: Vec<Requisition>,
}

impl RequisitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.requisitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requisitions.is_empty()
    }

    pub fn requisitions(&self) -> &[Requisition] {
        &self.requisitions
    }

    pub fn submit(&mut self, equipment_name: &str, quantity: &str, remarks: &str) -> Result<&Requisition> {
        let (equipment_name, quantity) = validate_form(equipment_name, quantity)?;
        let requisition = Requisition {
            id: Uuid::new_v4().to_string(),
            equipment_name,
            quantity,
            remarks: remarks.trim().to_string(),
            status: RequestStatus::Pending,
        };
        info!(
            "Requisition {} raised: {} x{}",
            requisition.id, requisition.equipment_name, requisition.quantity
        );
        let index = self.requisitions.len();
        self.requisitions.push(requisition);
        Ok(&self.requisitions[index])
    }

    /// Edit a requisition in place; status is left untouched
    pub fn update(
        &mut self,
        requisition_id: &str,
        equipment_name: &str,
        quantity: &str,
        remarks: &str,
    ) -> Result<&Requisition> {
        let (equipment_name, quantity) = validate_form(equipment_name, quantity)?;
        let requisition = self
            .requisitions
            .iter_mut()
            .find(|requisition| requisition.id == requisition_id)
            .ok_or_else(|| FleetError::not_found(format!("requisition '{}'", requisition_id)))?;

        requisition.equipment_name = equipment_name;
        requisition.quantity = quantity;
        requisition.remarks = remarks.trim().to_string();
        info!("Requisition {} updated", requisition_id);
        Ok(requisition)
    }

    pub fn remove(&mut self, requisition_id: &str) -> Result<Requisition> {
        let index = self
            .requisitions
            .iter()
            .position(|requisition| requisition.id == requisition_id)
            .ok_or_else(|| FleetError::not_found(format!("requisition '{}'", requisition_id)))?;
        info!("Requisition {} deleted", requisition_id);
        Ok(self.requisitions.remove(index))
    }

    pub fn filtered(&self, selected_status: &str) -> Cow<'_, [Requisition]> {
        filter_records(&self.requisitions, selected_status)
    }
}

fn validate_form(equipment_name: &str, quantity: &str) -> Result<(String, u32)> {
    let equipment_name = equipment_name.trim();
    if equipment_name.is_empty() {
        return Err(FleetError::invalid("equipment name is required"));
    }

    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| FleetError::invalid(format!("quantity '{}' is not a whole number", quantity)))?;
    if quantity == 0 {
        return Err(FleetError::invalid("quantity must be at least 1"));
    }

    Ok((equipment_name.to_string(), quantity))
}
