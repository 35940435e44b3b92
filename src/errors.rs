use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("creating a directory")]
    Mkdir,
    #[error("writing a file")]
    Write,
    #[error("resolving a path")]
    Resolve,
}
#[derive(Debug, Error, Diagnostic)]
#[error("Filesystem error: {operation} at '{path}'")]
#[diagnostic(
    code(scaffold::filesystem),
    help("Check permissions and free space, and that no file sits where a directory is expected.")
)]
pub struct FilesystemError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl FilesystemError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}
