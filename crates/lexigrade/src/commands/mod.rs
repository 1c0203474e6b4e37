//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use std::io::Read;

pub mod info;
pub mod score;
pub mod stats;

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
///
/// Files are size-checked via metadata before reading into memory; stdin is
/// checked after the fact since its length is unknowable up front.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        if let Some(max) = max_bytes {
            let size = content.len();
            if size > max {
                anyhow::bail!("input too large: stdin is {size} bytes (limit: {max} bytes)");
            }
        }
        return Ok(content);
    }

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
