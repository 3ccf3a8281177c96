use blitz::{Config, DeployReport, DeployStep, DeploymentTarget};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    config: &Config,
    target: &DeploymentTarget,
    transport: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = if dry_run {
        (Icon::DryRun, "Blitz Deploy (dry run)")
    } else {
        (Icon::Deploy, "Blitz Deploy")
    };

    let mut header = CommandHeader::new(icon, title);
    header.add("Service", target.service().as_str());
    header.add("Environment", config.environment().as_str());
    header.add("Remote", target.remote().to_string());
    header.add("Binary", target.binary_path().display().to_string());
    header.add("Unit", target.unit_path().display().to_string());
    header.add("Transport", transport);

    header.render(supports_color, supports_unicode)
}

pub fn render_step_started(
    step: DeployStep,
    description: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} {}",
        Icon::Progress.colored(supports_color, supports_unicode),
        ColoredText::dim(step_counter(step)).render(supports_color),
        ColoredText::info(step.as_str()).render(supports_color),
        description
    )
}

pub fn render_step_completed(
    step: DeployStep,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::dim(step_counter(step)).render(supports_color),
        step.as_str()
    )
}

pub fn render_step_failed(
    step: DeployStep,
    error: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::dim(step_counter(step)).render(supports_color),
        step.as_str(),
        ColoredText::error(error).render(supports_color)
    )
}

pub fn render_interrupted(step: DeployStep, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} interrupted before {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        step.as_str()
    )
}

/// Indented tool output shown under a step in verbose mode
pub fn render_step_output(output: &str, supports_color: bool) -> String {
    output
        .trim_end()
        .lines()
        .map(|line| format!("    {}\n", ColoredText::dim(line).render(supports_color)))
        .collect()
}

pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if report.dry_run {
        "Dry Run Complete"
    } else {
        "Deploy Complete"
    };

    let mut summary = ResultSummary::success(title);
    let verb = if report.dry_run {
        "would be restarted"
    } else {
        "restarted"
    };
    summary.add_line(format!("{} {} on {}", report.service, verb, report.remote));
    summary.add_line(format!(
        "{}/{} steps",
        report.steps.len(),
        DeployStep::ALL.len()
    ));

    if report.dry_run {
        summary.add_warning("nothing was copied or restarted");
        summary.with_next_step("Run again without --dry-run to deploy");
    } else {
        summary.with_next_step(format!(
            "ssh {} systemctl status {}",
            report.remote, report.service
        ));
    }

    summary.render(supports_color, supports_unicode)
}

fn step_counter(step: DeployStep) -> String {
    let index = DeployStep::ALL
        .iter()
        .position(|s| *s == step)
        .unwrap_or_default();
    format!("[{}/{}]", index + 1, DeployStep::ALL.len())
}
