pub mod composer;
pub mod copy;
pub mod session;

pub use crate::domain::model::{ComposedMessage, OutreachInput};
pub use crate::domain::ports::Clipboard;
pub use crate::utils::error::Result;
