//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20250101000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Whether the given role name grants access to the admin dashboard.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_role_is_admin() {
        assert!(is_admin(ROLE_ADMIN));
        assert!(!is_admin(ROLE_USER));
        assert!(!is_admin("ADMIN"));
    }
}
