//! FFI glue for AppKit and Foundation.

pub mod bridge;
