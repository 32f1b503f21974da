use crate::app::Session;
use crate::domain::{AppError, SizeReport};
use crate::ports::Filesystem;
use crate::services;

pub fn execute<F: Filesystem>(session: &Session<F>, path: &str) -> Result<SizeReport, AppError> {
    services::size_of(session.fs(), &session.resolve(path))
}
