use pmd_importer_shared::types::{LegacyUser, User};

/// WordPress caps `user_nicename` at 50 characters.
const NICENAME_MAX_LEN: usize = 50;

/// Maps a legacy user to a WordPress user.
///
/// The password hash is carried over as-is and the user is flagged for a
/// forced password reset, since WordPress cannot verify the legacy hash.
pub fn map_user(user: &LegacyUser) -> User {
    User {
        id: user.id,
        login: user.login.clone(),
        nicename: nicename(&user.login),
        password_hash: user.pass.clone(),
        email: user.user_email.clone(),
        registered_at: user.created,
        display_name: display_name(user),
        force_password_reset: true,
    }
}

/// First and last name joined by one space, blanks included.
fn display_name(user: &LegacyUser) -> String {
    format!("{} {}", user.user_first_name, user.user_last_name)
}

/// URL-safe form of the login: lowercase, anything outside `[a-z0-9_.-]`
/// becomes `-`.
fn nicename(login: &str) -> String {
    login
        .trim()
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '-'
            }
        })
        .take(NICENAME_MAX_LEN)
        .collect()
}
