use eyre::WrapErr;
use std::path::PathBuf;

pub mod logging;

/// Load environment variables from a .env file, returning where it was found
///
/// A missing file is not an error, the configuration can come entirely from the environment.
pub fn dotenv() -> eyre::Result<Option<PathBuf>> {
    loaded(dotenvy::dotenv())
}

fn loaded(result: Result<PathBuf, dotenvy::Error>) -> eyre::Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(error).wrap_err("failed to load .env"),
    }
}
