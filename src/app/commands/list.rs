use std::ffi::OsString;

use crate::app::Session;
use crate::domain::{AppError, is_pseudo_entry};
use crate::ports::Filesystem;

/// Names in `path`, in host enumeration order, without `.` and `..`.
pub fn execute<F: Filesystem>(
    session: &Session<F>,
    path: &str,
) -> Result<Vec<OsString>, AppError> {
    let dir = session.resolve(path);
    let mut names = Vec::new();
    for entry in session.fs().list_entries(&dir)? {
        let name = entry?;
        if !is_pseudo_entry(&name) {
            names.push(name);
        }
    }
    Ok(names)
}
