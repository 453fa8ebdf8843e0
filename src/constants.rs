/// Constants used throughout the application for consistency
pub struct Constants;

impl Constants {
    // Availability markers
    pub const FULLY_AVAILABLE_MARK: &'static str = "✓";
    pub const PARTIALLY_AVAILABLE_MARK: &'static str = "⚠";
    pub const NOT_AVAILABLE_MARK: &'static str = "✗";

    // Equipment status
    pub const EQUIPMENT_AVAILABLE: &'static str = "Available";
    pub const EQUIPMENT_IN_USE: &'static str = "In Use";
    pub const EQUIPMENT_UNDER_MAINTENANCE: &'static str = "Under Maintenance";

    // Request status
    pub const STATUS_ALL: &'static str = "All";
    pub const STATUS_PENDING: &'static str = "Pending";
    pub const STATUS_APPROVED: &'static str = "Approved";
    pub const STATUS_PARTIALLY_APPROVED: &'static str = "Partially Approved";
    pub const STATUS_REJECTED: &'static str = "Rejected";

    /// Options offered by the status filter dropdown, in display order
    pub const FILTER_OPTIONS: [&'static str; 4] = [
        Self::STATUS_ALL,
        Self::STATUS_PENDING,
        Self::STATUS_APPROVED,
        Self::STATUS_REJECTED,
    ];

    // Utilization bands (percent, exclusive upper bounds)
    pub const UTILIZATION_LOW_BELOW: u32 = 30;
    pub const UTILIZATION_OPTIMAL_BELOW: u32 = 70;

    // Manager request defaults
    pub const DEFAULT_PROJECT_NAME: &'static str = "General";
    pub const DEFAULT_REQUIRED_DURATION_DAYS: u32 = 1;

    // Notifications
    pub const NOTIFICATION_CHANNEL_ID: &'static str = "fleet_notifications";
    pub const TITLE_NEW_REQUEST: &'static str = "New Equipment Request";
    pub const TITLE_REQUEST_APPROVED: &'static str = "Request Approved";
    pub const TITLE_REQUEST_PARTIALLY_APPROVED: &'static str = "Request Partially Approved";
    pub const TITLE_REQUEST_REJECTED: &'static str = "Request Rejected";
    pub const MSG_NOTIFICATION_PERMISSION_DENIED: &'static str = "Notification permission denied";

    // Date format
    pub const ISO_DATE_FORMAT: &'static str = "%Y-%m-%d";
}
