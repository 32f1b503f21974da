use log::info;

use crate::app::Session;
use crate::app::context::join_name;
use crate::domain::AppError;
use crate::ports::Filesystem;

/// Rename `dir/old_name` to `dir/new_name`.
///
/// Occupied or invalid destinations and cross-device moves fail as the host
/// reports them.
pub fn execute<F: Filesystem>(
    session: &Session<F>,
    dir: &str,
    old_name: &str,
    new_name: &str,
) -> Result<(), AppError> {
    let dir = session.resolve(dir);
    let from = join_name(&dir, old_name);
    let to = join_name(&dir, new_name);

    session.fs().rename(&from, &to)?;
    info!("Renamed {} to {}", from.display(), to.display());
    Ok(())
}
