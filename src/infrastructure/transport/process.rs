//! Child process execution for transport tools

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, TransportError};

/// Run `cmd` to completion and collect its output.
///
/// stdin is always inherited so password and host-key prompts keep working.
/// In quiet mode stdout and stderr are both captured and concatenated.
/// Otherwise stdout streams to the terminal (progress bars, remote output)
/// and only stderr is captured for diagnostics.
pub(crate) fn run(mut cmd: Command, quiet: bool) -> Result<CommandOutput, TransportError> {
    let program = program_name(&cmd);

    cmd.stdin(Stdio::inherit()).stderr(Stdio::piped());
    if quiet {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    let output = cmd.output().map_err(|source| TransportError::Spawn {
        program: program.clone(),
        source,
    })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(CommandOutput::new(combined))
    } else {
        Err(TransportError::CommandFailed {
            program,
            code: output.status.code(),
            output: combined,
        })
    }
}

/// Check whether `program` can be spawned at all
pub(crate) fn is_installed(program: &str, version_arg: Option<&str>) -> bool {
    let mut cmd = Command::new(program);
    if let Some(arg) = version_arg {
        cmd.arg(arg);
    }
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}

/// Render a command line for display (dry run, verbose output)
pub(crate) fn display_command(cmd: &Command) -> String {
    let mut parts = vec![program_name(cmd)];
    parts.extend(cmd.get_args().map(|arg| {
        crate::domain::services::shell_quote(&arg.to_string_lossy()).into_owned()
    }));
    parts.join(" ")
}
