use crate::platform::PlatformOps;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn invocation_name<'a>(&self, argv0: &'a str) -> &'a str {
        let cut = argv0.len().saturating_sub(4);
        match argv0.get(cut..) {
            Some(ext) if ext.eq_ignore_ascii_case(".exe") => &argv0[..cut],
            _ => argv0,
        }
    }
    fn find_program(&self, name: &str) -> Result<PathBuf> { which::which(name).with_context(|| format!("locating {name} on PATH")) }
}
