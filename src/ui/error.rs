use blitz::domain::ports::TransportError;
use blitz::{BlitzError, ConfigField, DeployError, DeployStep, ValidationError, ValidationReason};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Error panel for `err`, with a fix hint when the error kind is known
pub fn format_error(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let Some(blitz) = err.downcast_ref::<BlitzError>() else {
        return format!("[ERROR] {}\n", message(err));
    };

    let block = match blitz {
        BlitzError::Validation(validation) => {
            ErrorBlock::new("invalid configuration", validation.to_string())
                .with_fix(validation_fix(validation))
        }
        BlitzError::Deploy(deploy) => {
            let block = ErrorBlock::new(format!("{} failed", deploy.step()), deploy.to_string())
                .with_fix(deploy_fix(deploy));
            match deploy.output() {
                Some(output) => block.with_output(output),
                None => block,
            }
        }
        BlitzError::EnvFile { path, .. } => ErrorBlock::new("env file", blitz.to_string())
            .with_fix(format!(
                "Check that {} exists and is readable, or drop --env-file",
                path.display()
            )),
    };

    block.render(supports_color, supports_unicode)
}

fn validation_fix(err: &ValidationError) -> String {
    let field = err.field;
    let how = format!("set {} or {} in .env", field.flag(), field.env_key());

    match (&err.reason, field) {
        (ValidationReason::InvalidFormat { suggestion: Some(s) }, _) => {
            format!("Use {} {}", field.flag(), s)
        }
        (ValidationReason::InvalidFormat { .. }, ConfigField::Env) => {
            format!("Use one of development, staging, production ({how})")
        }
        (ValidationReason::InvalidFormat { .. }, ConfigField::Host) => {
            format!("Use an IP address or a hostname like server.example.com ({how})")
        }
        (ValidationReason::NotFound { path }, _) => {
            format!("Create {} or {how}", path.display())
        }
        (ValidationReason::InvalidCharset, ConfigField::ServiceName) => {
            "Use only letters, digits, '.', '_' and '-'".to_string()
        }
        (ValidationReason::InvalidCharset, _) => {
            "Use only letters, digits, '_' and '-'".to_string()
        }
        _ => capitalize(&how),
    }
}

fn deploy_fix(err: &DeployError) -> String {
    match err {
        DeployError::Interrupted { .. } => {
            "Steps that already ran were not rolled back; rerun the deploy".to_string()
        }
        DeployError::Step {
            source: TransportError::NotAFile(_),
            ..
        } => "Use a service name that names a file, not `.` or `..`".to_string(),
        DeployError::Step { step, .. } => match step {
            DeployStep::BinaryCopy | DeployStep::UnitCopy => {
                "Check ssh access to the host (try `ssh user@host true`)".to_string()
            }
            DeployStep::Activation => {
                "Make sure the user may run `sudo mv` and `sudo systemctl` on the host".to_string()
            }
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line message for `err`
///
/// Crate errors already name their cause, so only foreign errors get the
/// full context chain.
fn message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<BlitzError>() {
        Some(blitz) => blitz.to_string(),
        None => format!("{:#}", err),
    }
}

/// Structured fields of a failure for `{"event":"error"}` lines
fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let mut value = serde_json::json!({
        "event": "error",
        "message": message(err),
    });

    match err.downcast_ref::<BlitzError>() {
        Some(BlitzError::Validation(validation)) => {
            value["field"] = validation.field.id().into();
            value["reason"] = validation.reason.id().into();
        }
        Some(BlitzError::Deploy(deploy)) => {
            value["step"] = deploy.step().as_str().into();
            if let Some(output) = deploy.output() {
                value["output"] = output.into();
            }
        }
        _ => {}
    }

    value
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_json(err));
        return;
    }

    if crate::ui::ci::is_github_actions(|key| std::env::var(key).ok()) {
        println!(
            "{}",
            crate::ui::ci::github_actions_error(&message(err), Some("Blitz"))
        );
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
