use crate::{
    errors::{FileOperation, FilesystemError},
    tree::{Directory, Node, Summary},
};
use std::{fs::File, io::Write, path::Path};

/// Recursively writes `directory` under `base`, returning how many entries were written.
///
/// Directories are created before their children. An already existing directory is reused, an
/// already existing file is truncated and overwritten.
///
/// # Errors
///
/// Returns a [`FilesystemError`] as soon as a directory cannot be created or a file cannot be
/// written, including when an entry of the other kind already occupies the path. Nothing is
/// rolled back: everything created before the failure stays on disk.
pub fn materialize(base: &Path, directory: &Directory) -> Result<Summary, FilesystemError> {
    let mut summary = Summary::default();

    materialize_into(base, directory, &mut summary)?;

    Ok(summary)
}

fn materialize_into(
    base: &Path,
    directory: &Directory,
    summary: &mut Summary,
) -> Result<(), FilesystemError> {
    for (name, node) in directory.iter() {
        let path = base.join(name);

        match node {
            Node::Directory(children) => {
                create_directory(&path)?;
                summary.record(node);

                materialize_into(&path, children, summary)?;
            }
            Node::File(contents) => {
                write_file(&path, contents)?;
                summary.record(node);
            }
        }
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
///
/// # Errors
///
/// Returns a [`FilesystemError`] if any directory creation fails due to I/O issues.
pub fn create_directory(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path)
        .map_err(|error| FilesystemError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("mkdir {}", path.display());

    Ok(())
}
/// Writes a file with the provided contents, truncating whatever was there before.
///
/// The handle is closed when it goes out of scope, on success as well as on error.
fn write_file(path: &Path, contents: &str) -> Result<(), FilesystemError> {
    let to_error = |error| FilesystemError::new(FileOperation::Write, path.into(), error);

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;

    log::debug!("create {}", path.display());

    Ok(())
}
