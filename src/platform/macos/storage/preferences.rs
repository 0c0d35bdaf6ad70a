//! Persistence of preferences to NSUserDefaults.
//!
//! This module provides functions to load and save [`Preferences`] to the
//! macOS user defaults system.

use crate::platform::macos::ffi::bridge::{id, msg_send, nsstring, string_from_id, user_defaults};

use crate::model::constants::*;
use crate::model::Preferences;

/// Returns true if `key` has a stored value.
unsafe fn prefs_has(ud: id, key: &str) -> bool {
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    !obj.is_null()
}

/// Reads a double from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud = user_defaults();
    if !prefs_has(ud, key) {
        return default;
    }
    let k = nsstring(key);
    msg_send![ud, doubleForKey: &*k]
}

/// Saves a double to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_double(key: &str, val: f64) {
    let ud = user_defaults();
    let k = nsstring(key);
    let _: () = msg_send![ud, setDouble: val, forKey: &*k];
}

/// Reads a boolean from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud = user_defaults();
    if !prefs_has(ud, key) {
        return default;
    }
    let k = nsstring(key);
    msg_send![ud, boolForKey: &*k]
}

/// Saves a boolean to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud = user_defaults();
    let k = nsstring(key);
    let _: () = msg_send![ud, setBool: val, forKey: &*k];
}

/// Reads a string from NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud = user_defaults();
    let k = nsstring(key);
    let obj: id = msg_send![ud, stringForKey: &*k];
    string_from_id(obj)
}

/// Saves a string to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_string(key: &str, val: &str) {
    let ud = user_defaults();
    let k = nsstring(key);
    let v = nsstring(val);
    let _: () = msg_send![ud, setObject: &*v, forKey: &*k];
}

/// Loads all preferences, validated.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_preferences() -> Preferences {
    let mut prefs = Preferences {
        show_symbol_names: prefs_get_bool(PREF_SHOW_NAMES, DEFAULT_SHOW_NAMES),
        icon_size: prefs_get_double(PREF_ICON_SIZE, DEFAULT_ICON_SIZE),
        hotkey: prefs_get_string(PREF_HOTKEY).unwrap_or_else(|| DEFAULT_HOTKEY.to_string()),
    };
    prefs.validate();
    log::debug!("Loaded preferences: {:?}", prefs);
    prefs
}

/// Saves all preferences.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn save_preferences(prefs: &Preferences) {
    prefs_set_bool(PREF_SHOW_NAMES, prefs.show_symbol_names);
    prefs_set_double(PREF_ICON_SIZE, prefs.icon_size);
    prefs_set_string(PREF_HOTKEY, &prefs.hotkey);
}
