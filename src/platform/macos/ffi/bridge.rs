//! Thin helpers over the `objc2` runtime.
//!
//! Most AppKit calls in this crate are a handful of dynamic messages, so they
//! go through `msg_send!` on untyped `id` pointers instead of the generated
//! framework bindings.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::rc::{autoreleasepool, Retained};
pub use objc2::runtime::AnyObject;
pub use objc2::{class, msg_send};
pub use objc2_foundation::NSString;

/// Untyped Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Copies an `NSString` object into a Rust `String`.
///
/// # Safety
/// `obj` must be nil or point to an `NSString`.
pub unsafe fn string_from_id(obj: id) -> Option<String> {
    if obj.is_null() {
        return None;
    }
    let ns: &NSString = &*(obj as *const NSString);
    Some(ns.to_string())
}

/// `[NSUserDefaults standardUserDefaults]`.
///
/// # Safety
/// Must be called with a valid autorelease pool.
#[inline]
pub unsafe fn user_defaults() -> id {
    msg_send![class!(NSUserDefaults), standardUserDefaults]
}
