//! Copy-to-clipboard action.

use std::time::Instant;

use crate::error::ClipboardError;
use crate::toast::ToastState;

/// Write-only plain-text pasteboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies `name` and shows the toast. A clipboard failure is logged and
/// shows nothing.
pub fn copy_symbol<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    toast: &mut ToastState,
    name: &str,
    now: Instant,
) -> bool {
    match clipboard.write_text(name) {
        Ok(()) => {
            log::debug!("Copied {}", name);
            toast.show(name, now);
            true
        }
        Err(e) => {
            log::warn!("Could not copy {}: {}", name, e);
            false
        }
    }
}

/// In-memory clipboard, used when the system one is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
