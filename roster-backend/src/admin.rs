//! Password-gated admin page.

use crate::helpers::hash_secret;

/// Fixed Basic Auth username for the admin portal.
pub const ADMIN_USERNAME: &str = "admin";

/// Static page served to an authorized admin.
pub const ADMIN_PAGE: &str = "<html><h1> Admin Portal </h1></html>";

/// Checks admin credentials against the configured password.
pub struct AdminPortal {
    password_hash: String,
}

impl AdminPortal {
    pub fn new(password: &str) -> Self {
        Self {
            password_hash: hash_secret(password),
        }
    }

    /// Whether the given Basic Auth credentials grant admin access.
    pub fn authorize(&self, username: &str, password: &str) -> bool {
        username == ADMIN_USERNAME && hash_secret(password) == self.password_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_credentials() {
        let portal = AdminPortal::new("hunter2");
        assert!(portal.authorize("admin", "hunter2"));
    }

    #[test]
    fn test_wrong_password() {
        let portal = AdminPortal::new("hunter2");
        assert!(!portal.authorize("admin", "hunter3"));
        assert!(!portal.authorize("admin", ""));
    }

    #[test]
    fn test_wrong_username() {
        let portal = AdminPortal::new("hunter2");
        assert!(!portal.authorize("root", "hunter2"));
        assert!(!portal.authorize("Admin", "hunter2"));
    }
}
