//! Login item registration through `SMAppService` (macOS 13+).

use objc2::runtime::AnyClass;
use objc2_service_management::{SMAppService, SMAppServiceStatus};

use crate::error::LoginItemError;
use crate::login_item::LoginItemBackend;
use crate::platform::macos::ffi::bridge::Retained;

/// The main app bundle as a login item.
pub struct AppServiceLoginItem {
    service: Retained<SMAppService>,
}

impl AppServiceLoginItem {
    /// Fails on systems older than macOS 13.
    pub fn new() -> Result<Self, LoginItemError> {
        if AnyClass::get(c"SMAppService").is_none() {
            return Err(LoginItemError("SMAppService needs macOS 13".into()));
        }
        let service = unsafe { SMAppService::mainAppService() };
        Ok(Self { service })
    }
}

impl LoginItemBackend for AppServiceLoginItem {
    fn is_enabled(&self) -> bool {
        unsafe { self.service.status() } == SMAppServiceStatus::Enabled
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError> {
        let result = if enabled {
            unsafe { self.service.registerAndReturnError() }
        } else {
            unsafe { self.service.unregisterAndReturnError() }
        };
        result.map_err(|e| LoginItemError(e.localizedDescription().to_string()))
    }
}
