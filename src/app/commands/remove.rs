use log::info;

use crate::app::Session;
use crate::domain::{AppError, RemovedEntry};
use crate::ports::Filesystem;

/// Remove a file or an empty directory.
///
/// The entry kind is looked up immediately before acting. Directories must be
/// empty; this never deletes recursively.
pub fn execute<F: Filesystem>(
    session: &Session<F>,
    path: &str,
) -> Result<RemovedEntry, AppError> {
    let target = session.resolve(path);
    let meta = session.fs().metadata(&target)?;

    if meta.is_dir() {
        session.fs().remove_empty_dir(&target)?;
    } else {
        session.fs().remove_file(&target)?;
    }

    info!("Removed {} {}", meta.kind.label().to_lowercase(), target.display());
    Ok(RemovedEntry { kind: meta.kind, path: target })
}
