//! Constructors for well-known directories.

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::FsRef;
use crate::core::Result;

const TEMP_NAME_LEN: usize = 12;

/// The system temp directory (same as `std::env::temp_dir()`).
pub fn temp_dir() -> FsRef {
    FsRef::dir(std::env::temp_dir())
}

/// The process current working directory.
pub fn current_dir() -> Result<FsRef> {
    Ok(FsRef::dir(std::env::current_dir()?))
}

/// Creates a new directory with a random name inside the system temp directory.
/// The caller owns the directory and is responsible for removing it.
pub fn create_temp_dir() -> Result<FsRef> {
    temp_dir().create_subdir(&random_name())
}

fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_NAME_LEN)
        .map(char::from)
        .collect()
}
