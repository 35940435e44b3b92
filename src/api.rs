use crate::{
    config::Settings,
    errors::{FileOperation, FilesystemError},
    materialize::{create_directory, materialize},
    preview,
    tree::Directory,
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Writes `tree` under the base directory from `settings` and returns that directory's absolute
/// path.
///
/// The base directory is created first if it is missing. Existing directories are reused and
/// existing files are overwritten.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - The base directory or any directory of the tree cannot be created.
/// - A file cannot be written.
/// - An entry of the wrong kind already sits where the tree needs a file or a directory.
/// - The base directory cannot be resolved to an absolute path.
pub fn scaffold(settings: &Settings, tree: &Directory) -> Result<PathBuf, ScaffoldError> {
    let base = &settings.base_directory;

    create_directory(base)?;

    if log::log_enabled!(log::Level::Debug) {
        let rendered = preview::render(&base.display().to_string(), tree);
        log::debug!("Writing tree:\n{}", rendered);
    }

    let summary = materialize(base, tree)?;

    log::info!("Created {} under {}", summary, base.display());

    let absolute = std::fs::canonicalize(base)
        .map_err(|error| FilesystemError::new(FileOperation::Resolve, base.clone(), error))?;

    Ok(absolute)
}
