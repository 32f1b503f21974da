use log::info;

use crate::app::Session;
use crate::domain::{AppError, CreateKind, CreatePolicy};
use crate::ports::Filesystem;

/// Create a directory or an empty file named `name`.
///
/// Files follow the session's `CreatePolicy`: `Truncate` silently empties an
/// existing file, `CreateNew` refuses with `AlreadyExists`.
pub fn execute<F: Filesystem>(
    session: &Session<F>,
    kind: CreateKind,
    name: &str,
) -> Result<(), AppError> {
    let target = session.resolve(name);
    match kind {
        CreateKind::Directory => session.fs().create_dir(&target)?,
        CreateKind::File => match session.create_policy() {
            CreatePolicy::Truncate => session.fs().create_empty_file(&target)?,
            CreatePolicy::CreateNew => session.fs().create_new_file(&target)?,
        },
    }
    info!("Created {:?} {}", kind, target.display());
    Ok(())
}
