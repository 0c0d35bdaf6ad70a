//! Application-level helpers.

pub mod helpers;
pub mod login_item;
pub mod pasteboard;

pub use helpers::*;
pub use login_item::AppServiceLoginItem;
pub use pasteboard::SystemClipboard;
