use log::debug;

use crate::app::Session;
use crate::ports::Filesystem;

/// Whether `name` can be stat'ed. Any failure, permission errors included,
/// counts as absent.
pub fn execute<F: Filesystem>(session: &Session<F>, name: &str) -> bool {
    match session.fs().metadata(&session.resolve(name)) {
        Ok(_) => true,
        Err(err) => {
            debug!("Treating as absent: {}", err);
            false
        }
    }
}
