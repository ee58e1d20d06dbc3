//! Simple in-memory user directory for the demo routes.
//!
//! Read-only after construction; this is deliberately not a real credential
//! store. Production consumers bring their own user storage and only hand
//! the authenticated subject identifier to the token service.

use std::collections::HashMap;

/// In-memory map of user id to password
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the demo user (`alice` / `password`)
    pub fn with_demo_users() -> Self {
        let mut directory = Self::new();
        directory.insert("alice", "password");
        directory
    }

    /// Add or replace a user
    pub fn insert(&mut self, user_id: &str, password: &str) {
        self.users.insert(user_id.to_string(), password.to_string());
    }

    /// Check a user id / password pair
    pub fn validate_credentials(&self, user_id: &str, password: &str) -> bool {
        self.users
            .get(user_id)
            .is_some_and(|stored| stored == password)
    }
}
