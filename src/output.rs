//! Workflow output file support
//!
//! GitHub Actions exposes step outputs through the file named by the
//! `GITHUB_OUTPUT` environment variable; each output is one appended
//! `name=value` line. The values written here are comma-joined lists and
//! never contain newlines, so the single-line form is sufficient.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Environment variable naming the workflow output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Appends one `name=value` line per output to the given file
pub fn write_outputs(path: &Path, outputs: &[(&str, String)]) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;

    for (name, value) in outputs {
        writeln!(file, "{}={}", name, value)
            .with_context(|| format!("failed to write output {}", name))?;
    }

    Ok(())
}
