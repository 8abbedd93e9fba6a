use std::io::Write;
use anyhow::{Context, Result};

use crate::commands::read_password_from_stdin;
use crate::report::{assessment_json, render_assessment};
use crate::strength::evaluate_password_strength;

pub const EMPTY_PASSWORD_HINT: &str = "Enter a password to see its strength analysis";

/// Prints the strength report for `password`, or asks for one without echo.
/// Empty input renders no assessment.
pub fn test_password<W: Write>(password: Option<String>, json: bool, out: &mut W) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password_from_stdin("Enter a password to check its strength: ")
            .context("Failed to read password")?,
    };
    report_strength(&password, json, out)
}

pub fn report_strength<W: Write>(password: &str, json: bool, out: &mut W) -> Result<()> {
    if password.is_empty() {
        if json {
            let message = serde_json::json!({ "message": EMPTY_PASSWORD_HINT });
            writeln!(out, "{}", serde_json::to_string_pretty(&message)?)?;
        } else {
            writeln!(out, "{}", EMPTY_PASSWORD_HINT)?;
        }
        return Ok(());
    }

    let assessment = evaluate_password_strength(password);
    if json {
        writeln!(out, "{}", assessment_json(None, &assessment)?)?;
    } else {
        writeln!(out, "{}", render_assessment(&assessment))?;
    }
    Ok(())
}
