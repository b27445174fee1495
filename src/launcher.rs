use crate::error::CfpxError;
use crate::resolve::Invocation;
use log::{debug, info};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Return as soon as the child has started. The child is never waited on.
    Detached,
    /// Block until the child exits.
    Wait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launched {
    Started { pid: u32 },
    Exited { code: i32 },
}

pub fn launch(inv: &Invocation, mode: LaunchMode) -> Result<Launched, CfpxError> {
    if inv.program.is_empty() {
        return Err(CfpxError::UnresolvedCommandName);
    }
    debug!("spawning {} with {:?}", inv.program, inv.args);
    let invocation_err = |source| CfpxError::CommandInvocation {
        program: inv.program.clone(),
        source,
    };
    let mut child = Command::new(&inv.program)
        .args(&inv.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(invocation_err)?;
    let pid = child.id();
    match mode {
        LaunchMode::Detached => {
            info!("started {} (pid {pid})", inv.program);
            Ok(Launched::Started { pid })
        }
        LaunchMode::Wait => {
            let status = child.wait().map_err(invocation_err)?;
            info!("{} (pid {pid}) exited: {status}", inv.program);
            // signal deaths carry no code
            Ok(Launched::Exited {
                code: status.code().unwrap_or(1),
            })
        }
    }
}
