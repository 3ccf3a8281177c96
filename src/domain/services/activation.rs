//! Remote Activation Command Builder
//!
//! Builds the privileged command chain that installs the unit file, enables
//! it, and restarts the service:
//!
//! ```text
//! sudo mv ~/<svc>.service /etc/systemd/system/ && sudo systemctl enable <svc> && sudo systemctl restart <svc>
//! ```
//!
//! Commands are assembled from typed arguments and rendered with POSIX
//! quoting. The `&&` chain aborts at the first failing sub-command, so the
//! service keeps running its previous binary if install or enable fails.

use std::borrow::Cow;
use std::fmt;

use crate::domain::value_objects::{ServiceName, SYSTEMD_UNIT_DIR};

/// A single argument of a remote command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteArg {
    /// Passed through quoting as-is
    Literal(String),
    /// A path relative to the remote user's home; rendered as `~/<path>` with
    /// the tilde left unquoted so the remote shell expands it
    HomeRelative(String),
}

impl RemoteArg {
    pub fn literal(s: impl Into<String>) -> Self {
        RemoteArg::Literal(s.into())
    }

    pub fn home(path: impl Into<String>) -> Self {
        RemoteArg::HomeRelative(path.into())
    }

    fn render(&self) -> String {
        match self {
            RemoteArg::Literal(s) => shell_quote(s).into_owned(),
            RemoteArg::HomeRelative(p) => format!("~/{}", shell_quote(p)),
        }
    }
}

/// A program invocation on the remote host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    program: String,
    args: Vec<RemoteArg>,
    privileged: bool,
}

impl RemoteCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            privileged: false,
        }
    }

    /// Run the command through `sudo`
    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    pub fn arg(mut self, arg: RemoteArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[RemoteArg] {
        &self.args
    }

    pub fn is_privileged(&self) -> bool {
        self.privileged
    }

    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.args.len() + 2);
        if self.privileged {
            parts.push("sudo".to_string());
        }
        parts.push(shell_quote(&self.program).into_owned());
        parts.extend(self.args.iter().map(RemoteArg::render));
        parts.join(" ")
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Ordered commands that activate a freshly copied service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationPlan {
    commands: Vec<RemoteCommand>,
}

impl ActivationPlan {
    /// Install, enable, and restart `service`
    pub fn for_service(service: &ServiceName) -> Self {
        let unit = service.unit_file_name();
        let name = service.as_str();

        let commands = vec![
            RemoteCommand::new("mv")
                .privileged()
                .arg(RemoteArg::home(unit))
                .arg(RemoteArg::literal(SYSTEMD_UNIT_DIR)),
            RemoteCommand::new("systemctl")
                .privileged()
                .arg(RemoteArg::literal("enable"))
                .arg(RemoteArg::literal(name)),
            RemoteCommand::new("systemctl")
                .privileged()
                .arg(RemoteArg::literal("restart"))
                .arg(RemoteArg::literal(name)),
        ];

        Self { commands }
    }

    pub fn commands(&self) -> &[RemoteCommand] {
        &self.commands
    }

    /// Single command line; sub-commands joined with `&&`
    pub fn render(&self) -> String {
        self.commands
            .iter()
            .map(RemoteCommand::render)
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

/// Quote `s` for a POSIX shell.
///
/// Strings made only of ASCII letters, digits and `. _ - / = : + @` are
/// returned unchanged; anything else (including `~`, `*`, `;` and
/// whitespace) is wrapped in single quotes.
///
/// Output is meant for argument positions only. An unquoted `a=b` in
/// command position is an assignment, and no quoting stops a leading `-`
/// from reading as an option to the command.
pub fn shell_quote(s: &str) -> Cow<'_, str> {
    if !s.is_empty() && s.chars().all(is_plain_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("'{}'", s.replace('\'', "'\\''")))
    }
}

/// Characters with no meaning to the shell in an argument word
fn is_plain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/' | '=' | ':' | '+' | '@')
}
