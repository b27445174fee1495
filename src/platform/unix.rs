use crate::platform::PlatformOps;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn invocation_name<'a>(&self, argv0: &'a str) -> &'a str {
        argv0
    }
    fn find_program(&self, name: &str) -> Result<PathBuf> {
        which::which(name).with_context(|| format!("locating {name} on PATH"))
    }
}
