// Code generated by structor --type Session --constructors all-args,builder; DO NOT EDIT.

use super::*;
impl Session {
    pub fn new(user: String, active: bool) -> Session {
        Session {
            user: user,
            request_count: Default::default(),
            active: active,
        }
    }
}
pub struct SessionBuilder {
    user: String,
    active: bool,
}
impl SessionBuilder {
    pub fn new() -> SessionBuilder {
        SessionBuilder {
            user: Default::default(),
            active: Default::default(),
        }
    }
    pub fn with_user(mut self, user: String) -> SessionBuilder {
        self.user = user;
        self
    }
    pub fn with_active(mut self, active: bool) -> SessionBuilder {
        self.active = active;
        self
    }
    pub fn build(self) -> Session {
        Session {
            user: self.user,
            request_count: Default::default(),
            active: self.active,
        }
    }
}
