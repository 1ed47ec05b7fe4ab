//! Startup dimension input: interactive prompt or CLI flags.

use std::io::{BufRead, Write};

use anyhow::Context;
use shared::domain::Dimensions;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSource {
    Entered,
    FellBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOutcome {
    pub dims: Dimensions,
    pub source: DimensionSource,
}

/// Cube used when prompt input is rejected, independent of the configured default.
const FALLBACK_SIDE: u32 = 2;

/// Reads I, J and K one line at a time. A blank line (or end of input) keeps the
/// default; anything that is not a positive integer abandons the prompt and
/// returns the 2x2x2 fallback cube.
pub fn prompt_dimensions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
) -> anyhow::Result<PromptOutcome> {
    let fallback = Dimensions::new(FALLBACK_SIDE, FALLBACK_SIDE, FALLBACK_SIDE)?;
    let default = settings.default_dimension;

    writeln!(output, "--- Matrix Tensor Calculator ---")?;
    writeln!(output, "Define Matrix Sizes:")?;

    let questions = [
        "Enter size I (Rows of A)",
        "Enter size J (Common Dim)",
        "Enter size K (Cols of B)",
    ];
    let mut values = [i64::from(default); 3];

    for (question, slot) in questions.iter().zip(values.iter_mut()) {
        write!(output, "{question} [default {default}]: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line).context("failed to read dimension input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<i64>() {
            Ok(v) if v > 0 => *slot = v,
            _ => return fall_back(output, fallback, line),
        }
    }

    match Dimensions::from_signed(values[0], values[1], values[2]) {
        Ok(dims) => Ok(PromptOutcome {
            dims,
            source: DimensionSource::Entered,
        }),
        Err(err) => fall_back(output, fallback, &err.to_string()),
    }
}

fn fall_back<W: Write>(
    output: &mut W,
    fallback: Dimensions,
    rejected: &str,
) -> anyhow::Result<PromptOutcome> {
    tracing::warn!(input = rejected, fallback = %fallback, "invalid dimension input");
    writeln!(output, "Invalid input, using defaults {fallback}.")?;
    Ok(PromptOutcome {
        dims: fallback,
        source: DimensionSource::FellBack,
    })
}

/// Dimensions from CLI flags; unset flags take the configured default.
pub fn dimensions_from_flags(
    rows: Option<u32>,
    inner: Option<u32>,
    cols: Option<u32>,
    settings: &Settings,
) -> anyhow::Result<Dimensions> {
    let d = settings.default_dimension;
    Dimensions::new(rows.unwrap_or(d), inner.unwrap_or(d), cols.unwrap_or(d))
        .context("invalid dimensions")
}

/// Large grids are allowed, just slow to draw. Returns whether the advisory fired.
pub fn advise_if_large<W: Write>(
    output: &mut W,
    dims: Dimensions,
    settings: &Settings,
) -> anyhow::Result<bool> {
    if dims.largest() <= settings.advisory_threshold {
        return Ok(false);
    }
    tracing::warn!(
        dims = %dims,
        threshold = settings.advisory_threshold,
        "large dimensions requested"
    );
    writeln!(output, "Warning: Large dimensions might be slow.")?;
    Ok(true)
}
