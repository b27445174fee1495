use std::error::Error as _;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run. Each variant maps to one process exit code.
#[derive(Error, Debug)]
pub enum CfpxError {
    #[error("{}", with_causes(.0))]
    MissingConfigurationFile(#[source] io::Error),
    #[error("{path}: {message}")]
    ConfigurationDecode { path: PathBuf, message: String },
    #[error("command.name must be a string (found {found})")]
    InvalidCommandNameType { found: &'static str },
    #[error("{program}: {source}")]
    CommandInvocation {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("no command name provided")]
    UnresolvedCommandName,
}

/// `err` followed by each `source()`. fs-err keeps the OS error out of its own message.
pub fn with_causes(err: &io::Error) -> String {
    let mut msg = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        msg.push_str(": ");
        msg.push_str(&c.to_string());
        cause = c.source();
    }
    msg
}

impl CfpxError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CfpxError::MissingConfigurationFile(_) => 1,
            CfpxError::InvalidCommandNameType { .. } => 2,
            CfpxError::CommandInvocation { .. } => 3,
            CfpxError::UnresolvedCommandName => 4,
            // only fatal under --strict
            CfpxError::ConfigurationDecode { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errs = [
            CfpxError::MissingConfigurationFile(io::Error::from(io::ErrorKind::NotFound)),
            CfpxError::InvalidCommandNameType { found: "integer" },
            CfpxError::CommandInvocation {
                program: "nope".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            CfpxError::UnresolvedCommandName,
            CfpxError::ConfigurationDecode {
                path: PathBuf::from("argmap.toml"),
                message: "bad".into(),
            },
        ];
        let codes: Vec<i32> = errs.iter().map(CfpxError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn missing_file_message_keeps_os_cause() {
        let err = fs_err::metadata("/cfpx-no-such-dir/argmap.toml").unwrap_err();
        let msg = CfpxError::MissingConfigurationFile(err).to_string();
        assert!(msg.contains("/cfpx-no-such-dir/argmap.toml"));
        assert!(msg.contains("os error"), "{msg}");
    }

    #[test]
    fn plain_io_error_has_no_extra_causes() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        assert_eq!(with_causes(&err), "boom");
    }

    #[test]
    fn messages_match_cli_output() {
        assert_eq!(CfpxError::UnresolvedCommandName.to_string(), "no command name provided");
        let e = CfpxError::InvalidCommandNameType { found: "integer" };
        assert!(e.to_string().starts_with("command.name must be a string"));
    }
}
