use super::profile::TomlProfile;
use super::{ClipboardBackend, OutputFormat, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "outreach-composer")]
#[command(about = "Render a reactivation outreach message for a local business")]
pub struct CliConfig {
    /// TOML profile holding saved form values
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long)]
    pub business_name: Option<String>,

    #[arg(long)]
    pub owner_name: Option<String>,

    #[arg(long)]
    pub niche: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// One observation; repeat the flag for more
    #[arg(long = "observation")]
    pub observations: Vec<String>,

    /// Read observations from a file, one per line
    #[arg(long, conflicts_with = "observations")]
    pub observations_file: Option<PathBuf>,

    #[arg(long)]
    pub signature: Option<String>,

    /// Copy the message after rendering it
    #[arg(long)]
    pub copy: bool,

    #[arg(long, value_enum)]
    pub clipboard: Option<ClipboardBackend>,

    #[arg(long)]
    pub clipboard_file: Option<PathBuf>,

    /// How long the copy confirmation stays visible
    #[arg(long)]
    pub copied_reset_ms: Option<u64>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the numbered observation list
    #[arg(long)]
    pub highlights: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the profile (if any) and layers the command-line flags on top.
    pub fn resolve(&self) -> Result<Settings> {
        let profile = match &self.profile {
            Some(path) => {
                tracing::debug!("Loading profile from {}", path.display());
                let profile = TomlProfile::from_file(path)?;
                profile.validate()?;
                profile
            }
            None => TomlProfile::default(),
        };

        let mut input = profile.input.clone();
        override_field(&mut input.business_name, &self.business_name);
        override_field(&mut input.owner_name, &self.owner_name);
        override_field(&mut input.niche, &self.niche);
        override_field(&mut input.city, &self.city);
        override_field(&mut input.signature, &self.signature);

        if let Some(path) = &self.observations_file {
            input.observations_text = std::fs::read_to_string(path)?;
        } else if !self.observations.is_empty() {
            input.observations_text = self.observations.join("\n");
        }

        let backend = match (self.clipboard, profile.backend()) {
            (Some(backend), _) => backend,
            (None, Some(name)) => name.parse()?,
            (None, None) => ClipboardBackend::default(),
        };

        let clipboard_file = self
            .clipboard_file
            .clone()
            .or_else(|| profile.clipboard_file().map(PathBuf::from));

        let settings = Settings {
            input,
            copy: self.copy,
            backend,
            clipboard_file,
            reset_ms: self
                .copied_reset_ms
                .or(profile.reset_ms())
                .unwrap_or(Settings::default().reset_ms),
            format: self.format,
            highlights: self.highlights,
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn override_field(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
