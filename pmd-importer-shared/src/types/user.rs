use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A row of the WordPress `users` table, plus the reset flag written to
/// `usermeta` alongside it.
///
/// `password_hash` is the legacy hash carried over unchanged. WordPress cannot
/// verify it, which is why `force_password_reset` must hold for every imported
/// user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub nicename: String,
    pub password_hash: String,
    pub email: String,
    pub registered_at: Option<NaiveDateTime>,
    pub display_name: String,
    pub force_password_reset: bool,
}
