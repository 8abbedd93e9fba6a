use std::io::Write;
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::configtool::Settings;
use crate::passgen::{GenOptions, PasswordGenerator};
use crate::report::{assessment_json, render_assessment};
use crate::strength::evaluate_password_strength;

/// Per-invocation overrides of the saved settings. `None` keeps the saved value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenOverrides {
    pub length: Option<usize>,
    pub include_digits: Option<bool>,
    pub include_special: Option<bool>,
}

/// Folds an `--x`/`--no-x` flag pair. `--x` wins; neither keeps the saved value.
pub fn toggle_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

pub fn resolve_options(settings: &Settings, overrides: &GenOverrides) -> GenOptions {
    let mut options = settings.gen_options();
    if let Some(length) = overrides.length {
        options.length = length;
    }
    if let Some(include_digits) = overrides.include_digits {
        options.include_digits = include_digits;
    }
    if let Some(include_special) = overrides.include_special {
        options.include_special = include_special;
    }
    options
}

/// Generates one password and prints it with its strength report.
/// A seed switches to a reproducible ChaCha20 source.
pub fn generate_random<W: Write>(
    options: &GenOptions,
    seed: Option<u64>,
    json: bool,
    out: &mut W,
) -> Result<String> {
    match seed {
        Some(seed) => {
            log::warn!("Using a seeded random source; output is reproducible");
            let mut generator = PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed));
            generate_with(&mut generator, options, json, out)
        }
        None => generate_with(&mut PasswordGenerator::new(), options, json, out),
    }
}

pub fn generate_with<R: Rng, W: Write>(
    generator: &mut PasswordGenerator<R>,
    options: &GenOptions,
    json: bool,
    out: &mut W,
) -> Result<String> {
    let password = generator
        .generate(options)
        .context("Failed to generate password")?;
    let assessment = evaluate_password_strength(&password);

    if json {
        writeln!(out, "{}", assessment_json(Some(&password), &assessment)?)?;
    } else {
        writeln!(out, "Generated password: {}", password)?;
        writeln!(out, "{}", render_assessment(&assessment))?;
    }
    Ok(password)
}
