use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use crate::convert::{self, ConvertError};
use crate::indent::Indent;

/// Errors from a top-level conversion run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// No file arguments and nothing piped on stdin.
    #[error("no input: pass JSON files or pipe JSON on stdin")]
    NoInput,
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),
}

/// Execute a conversion run: files to sibling `.hjson` files, or piped
/// stdin to stdout.
///
/// Files take precedence; stdin is only consulted when no files were given
/// and stdin is not a terminal. Files without a `.json` extension are
/// skipped. Stops at the first failing file.
pub fn run(files: &[PathBuf], indent: &Indent) -> Result<(), RunError> {
    tracing::debug!(indent = %indent, files = files.len(), "starting conversion");

    if files.is_empty() {
        let input = read_piped_stdin()?.ok_or(RunError::NoInput)?;
        let rendered = convert::convert_str(&input, indent)?;
        println!("{rendered}");
        return Ok(());
    }

    for path in files {
        if !convert::is_json_file(path) {
            tracing::debug!(path = %path.display(), "skipping: extension is not .json");
            continue;
        }
        let out_path = convert::convert_file(path, indent)?;
        println!("Converted {} to {}", path.display(), out_path.display());
    }
    Ok(())
}

/// Read all of stdin when it is piped.
///
/// Returns `None` when stdin is a terminal or the pipe is empty, so an
/// interactive invocation without arguments falls through to the help text.
fn read_piped_stdin() -> Result<Option<String>, RunError> {
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(RunError::Stdin)?;
    tracing::debug!(bytes = input.len(), "read stdin");
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}
