//! Enrollment pricing and end-date calculation.

use chrono::{DateTime, Months, Utc};

use super::Plan;

/// End date and total price of an enrollment in a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrollmentTerms {
    pub end_date: DateTime<Utc>,
    pub price: f64,
}

/// Compute the terms of enrolling in `plan` from `start_date`.
///
/// The end date is `start_date` moved forward by the plan's duration in
/// calendar months, clamping the day to the end of a shorter month. The
/// price is the monthly price times the duration.
///
/// Returns `None` for a negative duration or a date out of range.
pub fn compute(plan: &Plan, start_date: DateTime<Utc>) -> Option<EnrollmentTerms> {
    let months = u32::try_from(plan.duration).ok()?;
    let end_date = start_date.checked_add_months(Months::new(months))?;

    Some(EnrollmentTerms {
        end_date,
        price: plan.price * f64::from(plan.duration),
    })
}
