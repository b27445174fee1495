pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use anyhow::Result;
use std::path::PathBuf;

pub trait PlatformOps: Sync + Send {
    /// The name used for `-proxy` inference, given the raw argv[0].
    fn invocation_name<'a>(&self, argv0: &'a str) -> &'a str;
    fn find_program(&self, name: &str) -> Result<PathBuf>;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
