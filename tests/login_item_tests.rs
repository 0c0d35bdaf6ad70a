//! Tests for the "Launch at login" registration wrapper.

use std::cell::Cell;
use std::rc::Rc;

use symbolbar::{LoginItem, LoginItemBackend, LoginItemError};

/// Shares its state with the test so the user can "edit" it behind the app's back.
#[derive(Default)]
struct FakeService {
    enabled: Rc<Cell<bool>>,
    calls: Rc<Cell<usize>>,
    /// Registration succeeds but the system keeps the item disabled, as when
    /// approval is pending in System Settings.
    needs_approval: bool,
}

impl LoginItemBackend for FakeService {
    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError> {
        self.calls.set(self.calls.get() + 1);
        if !(enabled && self.needs_approval) {
            self.enabled.set(enabled);
        }
        Ok(())
    }
}

#[test]
fn enable_then_disable() {
    let service = FakeService::default();
    let calls = service.calls.clone();
    let mut item = LoginItem::new(service);

    assert_eq!(item.apply(true), Ok(true));
    assert!(item.is_enabled());
    assert_eq!(item.apply(false), Ok(false));
    assert!(!item.is_enabled());
    assert_eq!(calls.get(), 2);
}

#[test]
fn reports_state_the_system_settled_on() {
    let mut item = LoginItem::new(FakeService {
        needs_approval: true,
        ..FakeService::default()
    });

    assert_eq!(item.apply(true), Ok(false));
    assert!(!item.is_enabled());
}

#[test]
fn external_changes_are_seen() {
    let service = FakeService::default();
    let enabled = service.enabled.clone();
    let item = LoginItem::new(service);

    enabled.set(true);
    assert!(item.is_enabled());
}
