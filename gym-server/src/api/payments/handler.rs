use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use shared::models::{Payment, PaymentCreate, PaymentUpdate};
use shared::util;

use crate::billing;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::db::repository::payment::{self, FeesSync};
use crate::membership::{lifecycle, member_id};
use crate::utils::{Ack, AppError, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub success: bool,
    pub payment: Payment,
}

/// List every payment with its standing re-evaluated against the clock.
/// The refreshed fields are persisted and paid standing propagates to the
/// member, so reads leave the store consistent with what they returned.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Payment>>> {
    let mut payments = payment::find_all(&state.pool).await?;
    refresh_standings(&state, &mut payments).await?;
    Ok(Json(payments))
}

/// Payments for one member. The filter matches the stored ID string
/// exactly; an empty result retries with the alternate ID spelling.
pub async fn by_member(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    let mut payments = payment::find_by_member(&state.pool, &raw_id).await?;
    if payments.is_empty() {
        payments = payment::find_by_member(&state.pool, &member_id::alternate(&raw_id)).await?;
    }
    refresh_standings(&state, &mut payments).await?;
    Ok(Json(payments))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<PaymentCreate>,
) -> AppResult<Json<PaymentResponse>> {
    let mut record = Payment {
        payment_id: util::snowflake_id(),
        member_id: input.member_id,
        member_name: input.member_name,
        member_type: input.member_type,
        amount_pay: input.amount_pay,
        payment_date: input.payment_date,
        due_date: input.due_date,
        day_remaining: String::new(),
        status: String::new(),
    };
    billing::apply_standing(&mut record, state.clock.as_ref());

    let sync = paid_sync(&state, &record).await?;
    let payment = payment::insert(&state.pool, &record, sync.as_ref()).await?;

    Ok(Json(PaymentResponse {
        success: true,
        payment,
    }))
}

/// Full replace of an existing payment, then re-classify and propagate.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<PaymentUpdate>,
) -> AppResult<Json<PaymentResponse>> {
    if payment::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Payment not found"));
    }

    let mut record = Payment {
        payment_id: id,
        member_id: input.member_id,
        member_name: input.member_name,
        member_type: input.member_type,
        amount_pay: input.amount_pay,
        payment_date: input.payment_date,
        due_date: input.due_date,
        day_remaining: String::new(),
        status: String::new(),
    };
    billing::apply_standing(&mut record, state.clock.as_ref());

    // A dated payment marks the member paid; a cleared one flips the fees
    // flag back while leaving the member's stored payment date alone.
    let sync = match record.payment_date {
        Some(_) => paid_sync(&state, &record).await?,
        None => unpaid_sync(&state, &record).await?,
    };
    let payment = payment::replace(&state.pool, &record, sync.as_ref()).await?;

    Ok(Json(PaymentResponse {
        success: true,
        payment,
    }))
}

/// Deleting is idempotent: removing an already-gone payment still acks.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Ack>> {
    payment::delete(&state.pool, id).await?;
    Ok(Json(Ack::ok("Payment deleted successfully")))
}

/// Re-evaluate each payment, persist the derived fields and propagate
/// paid standing to the resolved member.
async fn refresh_standings(state: &ServerState, payments: &mut [Payment]) -> AppResult<()> {
    for payment in payments.iter_mut() {
        billing::apply_standing(payment, state.clock.as_ref());
        let sync = paid_sync(state, payment).await?;
        payment::persist_standing(&state.pool, payment, sync.as_ref()).await?;
    }
    Ok(())
}

/// Member sync for a dated payment: the resolved member goes Paid with the
/// payment's date. No date, no resolvable member, no sync.
async fn paid_sync(state: &ServerState, payment: &Payment) -> AppResult<Option<FeesSync>> {
    if payment.payment_date.is_none() {
        return Ok(None);
    }
    let Some(raw_id) = payment.member_id.as_deref() else {
        return Ok(None);
    };
    let Some(member) = member::find_by_any_id(&state.pool, raw_id).await? else {
        return Ok(None);
    };
    Ok(Some(FeesSync {
        member_id: member.id,
        payment_date: payment.payment_date,
        fees_status: lifecycle::FEES_PAID.to_string(),
    }))
}

/// Member sync for a payment without a date: fees flip back to Unpaid.
async fn unpaid_sync(state: &ServerState, payment: &Payment) -> AppResult<Option<FeesSync>> {
    let Some(raw_id) = payment.member_id.as_deref() else {
        return Ok(None);
    };
    let Some(member) = member::find_by_any_id(&state.pool, raw_id).await? else {
        return Ok(None);
    };
    Ok(Some(FeesSync {
        member_id: member.id,
        payment_date: None,
        fees_status: lifecycle::FEES_UNPAID.to_string(),
    }))
}
