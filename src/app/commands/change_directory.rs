use std::io;
use std::path::Path;

use log::info;

use crate::app::Session;
use crate::domain::AppError;
use crate::ports::Filesystem;

/// Move the session to `path`, returning the new canonical directory.
pub fn execute<'a, F: Filesystem>(
    session: &'a mut Session<F>,
    path: &str,
) -> Result<&'a Path, AppError> {
    let target = session.resolve(path);
    let canonical = session.fs().canonicalize(&target).map_err(|err| as_chdir(err, &target))?;
    let meta = session.fs().metadata(&canonical).map_err(|err| as_chdir(err, &target))?;
    if !meta.is_dir() {
        return Err(AppError::filesystem(
            "chdir",
            &target,
            io::Error::from(io::ErrorKind::NotADirectory),
        ));
    }
    // Opening the directory surfaces a missing search or read permission now
    // rather than on the next command.
    drop(session.fs().list_entries(&canonical).map_err(|err| as_chdir(err, &target))?);

    info!("Changed directory to {}", canonical.display());
    session.set_current_dir(canonical);
    Ok(session.current_dir())
}

/// Report lookup failures under the chdir operation the user asked for.
fn as_chdir(err: AppError, target: &Path) -> AppError {
    match err {
        AppError::Filesystem { source, .. } => AppError::filesystem("chdir", target, source),
        other => other,
    }
}
