// Corpus directory helpers: listing text files and the numbered chooser.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Regular files in `dir` whose extension is exactly `extension`, sorted.
pub fn list_texts(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut texts = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list directory {}", dir.display()))?
            .path();
        let matches = path.extension().and_then(|e| e.to_str()) == Some(extension);
        if matches && path.is_file() {
            texts.push(path);
        }
    }

    texts.sort();
    Ok(texts)
}

/// Print a 1-based numbered list of `texts` and read a choice from `input`.
///
/// Re-prompts on anything that isn't an in-range number. Returns the
/// 0-based index, or an error if input ends first.
pub fn prompt_choice<R: BufRead, W: Write>(
    texts: &[PathBuf],
    mut input: R,
    mut output: W,
) -> Result<usize> {
    if texts.is_empty() {
        anyhow::bail!("Nothing to choose from");
    }

    writeln!(output, "\nAvailable Texts:")?;
    for (i, path) in texts.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        writeln!(output, "{}. {}", i + 1, name)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "\nChoose a text by number (1-{}): ", texts.len())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("No selection made (input closed)");
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=texts.len()).contains(&n) => return Ok(n - 1),
            Ok(_) => writeln!(output, "Invalid number.")?,
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

/// List the texts in `dir` and let the user pick one.
///
/// Needs nothing but the directory, so it can run before any signatures
/// exist. Errors when there are no texts to choose from.
pub fn choose_text<R: BufRead, W: Write>(
    dir: &Path,
    extension: &str,
    input: R,
    output: W,
) -> Result<PathBuf> {
    let mut texts = list_texts(dir, extension)?;
    if texts.is_empty() {
        anyhow::bail!("No .{} files found in {}", extension, dir.display());
    }
    let idx = prompt_choice(&texts, input, output)?;
    Ok(texts.swap_remove(idx))
}
