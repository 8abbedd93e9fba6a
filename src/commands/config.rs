use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};

use crate::configtool::Settings;

pub fn show_config<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let settings = Settings::load_from(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    writeln!(out, "Config file: {}", path.display())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
    Ok(())
}

pub fn reset_config<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    Settings::default()
        .save_to(path)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    writeln!(out, "Settings reset to defaults")?;
    Ok(())
}

/// Updates only the given fields and writes the file back.
pub fn set_config<W: Write>(
    path: &Path,
    length: Option<usize>,
    include_digits: Option<bool>,
    include_special: Option<bool>,
    out: &mut W,
) -> Result<Settings> {
    let mut settings = Settings::load_from(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    if let Some(length) = length {
        settings.length = length;
    }
    if let Some(include_digits) = include_digits {
        settings.include_digits = include_digits;
    }
    if let Some(include_special) = include_special {
        settings.include_special = include_special;
    }
    settings
        .save_to(path)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    writeln!(out, "Settings updated")?;
    Ok(settings)
}
