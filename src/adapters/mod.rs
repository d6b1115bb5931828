// Adapters layer: concrete clipboard backends behind the domain port.

pub mod clipboard;

pub use clipboard::{CommandClipboard, FileClipboard, StderrClipboard};
