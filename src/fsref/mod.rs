mod create;
#[cfg(feature = "async")]
mod create_async;
mod entry;
mod relative;

pub use entry::FsRef;
pub use relative::relative_path;
