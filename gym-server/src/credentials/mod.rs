//! Credential issuance for member and trainer accounts.
//!
//! Registration endpoints call [`ensure_member_credentials`] or
//! [`ensure_trainer_credentials`]; both are idempotent per owner. The
//! issued password is returned exactly once, at account creation.

use rand::Rng;
use sqlx::SqlitePool;

use shared::models::{IssuedCredentials, Role, UserCreate};

use crate::db::repository::{RepoResult, user};

/// Temporary password alphabet: alphanumerics minus the lookalikes
/// (I, O, l, o, 0, 1), plus two symbols.
pub const PASSWORD_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789@#";

/// Issued password length.
pub const PASSWORD_LEN: usize = 8;

/// Draw a temporary password from the fixed alphabet.
///
/// The RNG is injected: production passes an OS-backed generator, tests a
/// seeded one.
pub fn temp_password(rng: &mut impl Rng) -> String {
    (0..PASSWORD_LEN)
        .map(|_| PASSWORD_CHARS[rng.gen_range(0..PASSWORD_CHARS.len())] as char)
        .collect()
}

/// Ensure a member login exists. Returns the existing username when the
/// member already has one, otherwise creates the account.
pub async fn ensure_member_credentials(
    pool: &SqlitePool,
    member_id: &str,
    username: Option<&str>,
    password: Option<&str>,
    rng: &mut (impl Rng + Send),
) -> RepoResult<IssuedCredentials> {
    if let Some(user) = user::find_by_member_id(pool, member_id).await? {
        return Ok(IssuedCredentials {
            username: user.username,
            password: None,
        });
    }
    issue(pool, Role::Member, member_id, username, password, rng).await
}

/// Trainer counterpart of [`ensure_member_credentials`].
pub async fn ensure_trainer_credentials(
    pool: &SqlitePool,
    trainer_id: &str,
    username: Option<&str>,
    password: Option<&str>,
    rng: &mut (impl Rng + Send),
) -> RepoResult<IssuedCredentials> {
    if let Some(user) = user::find_by_trainer_id(pool, trainer_id).await? {
        return Ok(IssuedCredentials {
            username: user.username,
            password: None,
        });
    }
    issue(pool, Role::Trainer, trainer_id, username, password, rng).await
}

async fn issue(
    pool: &SqlitePool,
    role: Role,
    owner_id: &str,
    custom_username: Option<&str>,
    custom_password: Option<&str>,
    rng: &mut (impl Rng + Send),
) -> RepoResult<IssuedCredentials> {
    // A free custom username is used verbatim; a taken one seeds the
    // suffix search. Without a custom name the base is role + owner ID.
    let username = match custom_username.map(str::trim).filter(|u| !u.is_empty()) {
        Some(custom) => {
            if user::find_by_username(pool, custom).await?.is_some() {
                unique_username(pool, custom, role).await?
            } else {
                custom.to_string()
            }
        }
        None => {
            let base = format!("{}{owner_id}", role.as_str());
            unique_username(pool, &base, role).await?
        }
    };

    let password = custom_password
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| temp_password(rng));

    let created = user::create(
        pool,
        &UserCreate {
            username,
            password: password.clone(),
            role,
            member_id: (role == Role::Member).then(|| owner_id.to_string()),
            trainer_id: (role == Role::Trainer).then(|| owner_id.to_string()),
        },
    )
    .await?;

    Ok(IssuedCredentials {
        username: created.username,
        password: Some(password),
    })
}

/// Walk `base`, `base1`, `base2`, ... until a free username turns up.
///
/// The uniqueness constraint on `users.username` still backstops this
/// against concurrent registrations; losing that race surfaces as a
/// duplicate error.
async fn unique_username(pool: &SqlitePool, base: &str, role: Role) -> RepoResult<String> {
    let base = sanitize(base, role);
    let mut candidate = base.clone();
    let mut counter = 1;
    while user::find_by_username(pool, &candidate).await?.is_some() {
        candidate = format!("{base}{counter}");
        counter += 1;
    }
    Ok(candidate)
}

/// Lowercase the base; trainer names additionally drop all whitespace.
fn sanitize(base: &str, role: Role) -> String {
    let lowered = base.to_lowercase();
    match role {
        Role::Trainer => lowered.split_whitespace().collect(),
        _ => lowered,
    }
}
