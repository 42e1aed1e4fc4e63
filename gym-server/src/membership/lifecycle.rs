//! Registration defaults and update merging for members.

use shared::models::{Member, MemberCreate, MemberUpdate};

use crate::utils::time::{Clock, add_days, parse_date_or};

/// Days of membership granted at registration.
pub const MEMBERSHIP_PERIOD_DAYS: u64 = 30;

pub const FEES_UNPAID: &str = "Unpaid";
pub const FEES_PAID: &str = "Paid";
pub const STATUS_ACTIVE: &str = "active";

/// Build the full record for a registration payload.
///
/// Backfills everything a sparse payload may omit: display name from
/// first/last, registration date (lenient parse falling back to today),
/// expiry one membership period after registration, unpaid fees, zero
/// attendance, active status. A blank trainer assignment means none.
pub fn assemble_new(input: &MemberCreate, id: String, clock: &dyn Clock) -> Member {
    let today = clock.today();

    let date_registered = match input.date_registered.as_deref() {
        Some(raw) => parse_date_or(raw, today),
        None => today,
    };
    let expiry_date = input
        .expiry_date
        .unwrap_or_else(|| add_days(date_registered, MEMBERSHIP_PERIOD_DAYS));

    let name = input
        .name
        .clone()
        .or_else(|| derive_name(input.first_name.as_deref(), input.last_name.as_deref()));

    Member {
        id,
        name,
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        age: input.age,
        gender: input.gender.clone(),
        phone_num: input.phone_num.clone(),
        contact: input.contact.clone(),
        email: input.email.clone(),
        address: input.address.clone(),
        trainer_id: normalize_trainer(input.trainer_id.as_deref()),
        member_type: input.member_type.clone(),
        amount_pay: input.amount_pay,
        date_registered,
        expiry_date,
        payment_date: None,
        fees_status: FEES_UNPAID.to_string(),
        attendance_count: 0,
        status: STATUS_ACTIVE.to_string(),
        created_at: clock.now_millis(),
    }
}

/// Merge a sparse update onto the stored record. Absent fields keep their
/// values; the caller validates trainer existence before persisting.
pub fn merge_update(existing: &Member, patch: &MemberUpdate) -> Member {
    let mut merged = existing.clone();

    if let Some(v) = &patch.first_name {
        merged.first_name = Some(v.clone());
    }
    if let Some(v) = &patch.last_name {
        merged.last_name = Some(v.clone());
    }

    // Explicit name wins; otherwise a moved first name re-derives it using
    // the incoming last name, falling back to the stored one.
    if let Some(name) = &patch.name {
        merged.name = Some(name.clone());
    } else if let Some(first) = &patch.first_name {
        let last = patch.last_name.as_deref().or(existing.last_name.as_deref());
        merged.name = derive_name(Some(first), last);
    }

    if let Some(v) = patch.age {
        merged.age = Some(v);
    }
    if let Some(v) = &patch.gender {
        merged.gender = Some(v.clone());
    }
    if let Some(v) = &patch.phone_num {
        merged.phone_num = Some(v.clone());
    }
    if let Some(v) = &patch.contact {
        merged.contact = Some(v.clone());
    }
    if let Some(v) = &patch.email {
        merged.email = Some(v.clone());
    }
    if let Some(v) = &patch.address {
        merged.address = Some(v.clone());
    }
    if let Some(v) = &patch.member_type {
        merged.member_type = Some(v.clone());
    }
    if let Some(v) = patch.amount_pay {
        merged.amount_pay = Some(v);
    }

    // Trainer assignment is three-valued: absent keeps, blank clears,
    // anything else assigns.
    match patch.trainer_id.as_deref().map(str::trim) {
        None => {}
        Some("") => merged.trainer_id = None,
        Some(t) => merged.trainer_id = Some(t.to_string()),
    }

    if let Some(v) = patch.date_registered {
        merged.date_registered = v;
    }
    if let Some(v) = patch.expiry_date {
        merged.expiry_date = v;
    }
    if let Some(v) = patch.payment_date {
        merged.payment_date = Some(v);
    }
    if let Some(v) = &patch.fees_status {
        merged.fees_status = v.clone();
    }
    if let Some(v) = patch.attendance_count {
        merged.attendance_count = v;
    }
    if let Some(v) = &patch.status {
        merged.status = v.clone();
    }

    merged
}

fn derive_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    first.map(|f| format!("{f} {}", last.unwrap_or_default()).trim().to_string())
}

fn normalize_trainer(trainer_id: Option<&str>) -> Option<String> {
    trainer_id
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
