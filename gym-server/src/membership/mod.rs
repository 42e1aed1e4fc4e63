//! Member domain rules: the ID scheme and the registration/update
//! lifecycle. Pure logic only; persistence stays in the repositories.

pub mod lifecycle;
pub mod member_id;
