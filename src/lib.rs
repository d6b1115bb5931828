pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::Settings;
pub use core::composer::{
    build_acknowledgment, build_observation, build_value_proposition, compose, generate_message,
    normalize_observations, render_highlights,
};
pub use core::copy::CopyFeedback;
pub use core::session::{ComposerSession, SessionReport};
pub use domain::model::{ComposedMessage, OutreachInput};
pub use domain::ports::Clipboard;
pub use utils::error::{ComposerError, Result};
