use std::borrow::Cow;

use crate::constants::Constants;
use crate::models::StatusRecord;

/// Keep the records whose status label equals `selected_status`.
///
/// `"All"` hands back the input slice untouched; any other value yields the matching
/// records in their original order.
pub fn filter_by_status<'a, T, F>(items: &'a [T], selected_status: &str, status_of: F) -> Cow<'a, [T]>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    if selected_status == Constants::STATUS_ALL {
        return Cow::Borrowed(items);
    }

    Cow::Owned(
        items
            .iter()
            .filter(|item| status_of(*item) == selected_status)
            .cloned()
            .collect(),
    )
}

/// Same as [`filter_by_status`] for records that know their own status
pub fn filter_records<'a, T>(items: &'a [T], selected_status: &str) -> Cow<'a, [T]>
where
    T: StatusRecord + Clone,
{
    filter_by_status(items, selected_status, |item| item.status_label())
}

/// Dropdown options, in display order
pub fn filter_options() -> &'static [&'static str] {
    &Constants::FILTER_OPTIONS
}
