//! "Launch at login" registration.
//!
//! The system owns the real state: the user can remove the app from the
//! login items in System Settings at any time. [`LoginItem`] never caches
//! it and always answers with what the backend reports after a change.

use crate::error::LoginItemError;

/// OS service that registers the app as a login item.
pub trait LoginItemBackend {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError>;
}

pub struct LoginItem<B: LoginItemBackend> {
    backend: B,
}

impl<B: LoginItemBackend> LoginItem<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_enabled()
    }

    /// Requests `enabled` and returns the state the system ends up in.
    ///
    /// A request matching the current state does not reach the backend.
    pub fn apply(&mut self, enabled: bool) -> Result<bool, LoginItemError> {
        if self.backend.is_enabled() == enabled {
            return Ok(enabled);
        }
        match self.backend.set_enabled(enabled) {
            Ok(()) => {
                let actual = self.backend.is_enabled();
                log::info!("Launch at login: {}", actual);
                Ok(actual)
            }
            Err(e) => {
                log::warn!("Cannot change launch at login to {}: {}", enabled, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Fake {
        enabled: bool,
        calls: usize,
        refuse: bool,
    }

    impl LoginItemBackend for Fake {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError> {
            self.calls += 1;
            if self.refuse {
                return Err(LoginItemError("not permitted".into()));
            }
            self.enabled = enabled;
            Ok(())
        }
    }

    #[test]
    fn same_state_skips_backend() {
        let mut item = LoginItem::new(Fake::default());
        assert_eq!(item.apply(false), Ok(false));
        assert_eq!(item.backend.calls, 0);
    }

    #[test]
    fn refusal_leaves_state_unchanged() {
        let mut item = LoginItem::new(Fake {
            refuse: true,
            ..Fake::default()
        });
        assert!(item.apply(true).is_err());
        assert!(!item.is_enabled());
    }
}
