use crate::cli::Cli;
use crate::config::{self, ArgMap};
use crate::error::CfpxError;
use crate::launcher::{self, LaunchMode, Launched};
use crate::platform::platform;
use crate::resolve::{self, Invocation};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Launched(Launched),
    /// `--dry-run`: resolved but not started.
    Planned(Invocation),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Launched(Launched::Exited { code }) => *code,
            Outcome::Launched(Launched::Started { .. }) | Outcome::Planned(_) => 0,
        }
    }
}

/// Locate and decode the mapping, then work out what to run.
pub fn resolve_invocation(cli: &Cli, argv0: &str) -> Result<Invocation, CfpxError> {
    let path = config::locate(&cli.mapping)?;
    let map = match ArgMap::decode(&path) {
        Ok(map) => map,
        Err(e) if cli.strict => return Err(e),
        Err(e) => {
            println!("cfpx: {e}");
            warn!("continuing without {}", path.display());
            ArgMap::default()
        }
    };

    let configured = resolve::extract_command_name(map.name())?;
    let invoked = platform().invocation_name(argv0);
    let program = resolve::executable_name(invoked, &configured);
    debug!("invoked as {invoked:?}, configured name {configured:?}, resolved {program:?}");

    let mut args = resolve::extract_string_args(map.args());
    args.extend(cli.args.iter().cloned());
    Invocation::new(program, args)
}

pub fn run(cli: &Cli, argv0: &str) -> Result<Outcome, CfpxError> {
    let inv = resolve_invocation(cli, argv0)?;
    if cli.dry_run {
        return Ok(Outcome::Planned(inv));
    }
    let mode = if cli.wait { LaunchMode::Wait } else { LaunchMode::Detached };
    launcher::launch(&inv, mode).map(Outcome::Launched)
}

/// One line for `--dry-run`: the program (with its PATH location when found) and quoted args.
pub fn describe(inv: &Invocation) -> String {
    let mut line = match platform().find_program(&inv.program) {
        Ok(found) => format!("{} ({})", inv.program, found.display()),
        Err(e) => {
            debug!("{e:#}");
            format!("{} (not found on PATH)", inv.program)
        }
    };
    for arg in &inv.args {
        line.push(' ');
        line.push_str(&format!("{arg:?}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_quotes_args() {
        let inv = Invocation::new(
            "cfpx-no-such-program".into(),
            vec!["a b".into(), "c".into()],
        )
        .unwrap();
        assert_eq!(
            describe(&inv),
            "cfpx-no-such-program (not found on PATH) \"a b\" \"c\""
        );
    }

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(Outcome::Launched(Launched::Started { pid: 10 }).exit_code(), 0);
        assert_eq!(Outcome::Launched(Launched::Exited { code: 3 }).exit_code(), 3);
    }
}
