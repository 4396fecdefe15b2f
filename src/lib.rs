pub mod convert;
pub mod hjson;
pub mod indent;

pub(crate) mod cli;

pub use cli::convert::RunError;

/// Run a conversion pass over the given files, or over piped stdin when
/// `files` is empty.
///
/// This bridges the binary crate (`main.rs`) to the library without
/// exposing `cli` internals. Not a stable integration API — library
/// callers should use [`convert::convert_str`] and
/// [`convert::convert_file`] directly.
pub fn run(files: &[std::path::PathBuf], indent: &indent::Indent) -> Result<(), RunError> {
    cli::convert::run(files, indent)
}
