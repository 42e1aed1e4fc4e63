//! Payment standing.
//!
//! A payment's `due_date` is derived once from its `payment_date`;
//! `day_remaining` and `status` are recomputed against the clock on every
//! read and write, so what is stored is only the last evaluation.

use chrono::NaiveDate;
use shared::models::Payment;

use crate::utils::time::{Clock, DAY_MS, add_days, date_to_millis};

/// Days between a payment and the next one falling due.
pub const BILLING_CYCLE_DAYS: u64 = 30;

/// Days before the due date at which a payment turns "Due Soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Active,
    DueSoon,
    DueToday,
    Overdue,
    NotPaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Active => "Active",
            PaymentStatus::DueSoon => "Due Soon",
            PaymentStatus::DueToday => "Due Today",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::NotPaid => "Not Paid",
        }
    }
}

/// A payment's standing relative to the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub day_remaining: String,
    pub status: PaymentStatus,
}

/// Due date for a payment: the explicit one if set, otherwise one billing
/// cycle after the payment date. Never overwrites an existing due date.
pub fn derive_due_date(
    payment_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
) -> Option<NaiveDate> {
    due_date.or_else(|| payment_date.map(|d| add_days(d, BILLING_CYCLE_DAYS)))
}

/// Classify a due date against the clock.
///
/// Day counting compares midnight of the due date with the current instant
/// and truncates toward zero, so the entire due day reads as zero days
/// remaining ("Due Today") regardless of the hour.
pub fn classify(due_date: Option<NaiveDate>, clock: &dyn Clock) -> Standing {
    let Some(due) = due_date else {
        return Standing {
            day_remaining: "N/A".to_string(),
            status: PaymentStatus::NotPaid,
        };
    };

    let days = (date_to_millis(due) - clock.now_millis()) / DAY_MS;

    let status = if days < 0 {
        PaymentStatus::Overdue
    } else if days == 0 {
        PaymentStatus::DueToday
    } else if days <= DUE_SOON_WINDOW_DAYS {
        PaymentStatus::DueSoon
    } else {
        PaymentStatus::Active
    };

    let day_remaining = match status {
        PaymentStatus::Overdue => "Overdue".to_string(),
        _ => days.to_string(),
    };

    Standing {
        day_remaining,
        status,
    }
}

/// Refresh a payment's derived fields in place.
pub fn apply_standing(payment: &mut Payment, clock: &dyn Clock) {
    payment.due_date = derive_due_date(payment.payment_date, payment.due_date);
    let standing = classify(payment.due_date, clock);
    payment.day_remaining = standing.day_remaining;
    payment.status = standing.status.as_str().to_string();
}
