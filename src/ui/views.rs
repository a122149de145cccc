//! Human-readable summaries

use crossterm::style::Stylize;

use cfgmigrate::application::{MigrationOutcome, MigrationReport, PlannedMigration, UpdateStatus};
use cfgmigrate::domain::services::ChangeKind;

use crate::ui::theme::{colors, icons};

fn mark(icon: &str, color: crossterm::style::Color, supports_color: bool) -> String {
    if supports_color {
        format!("{}", icon.with(color))
    } else {
        icon.to_string()
    }
}

pub fn render_report(report: &MigrationReport, supports_color: bool) -> String {
    let path = report.path.display();
    let ok = mark(icons::SUCCESS, colors::SUCCESS, supports_color);
    let mut out = String::new();

    match &report.outcome {
        MigrationOutcome::NoUserFile => {
            out.push_str(&format!("{path}: no such file, nothing to migrate\n"));
        }
        MigrationOutcome::UpToDate => {
            out.push_str(&format!("{ok} {path} is up to date (version {})\n", report.user_version));
        }
        MigrationOutcome::VersionStamped => {
            out.push_str(&format!(
                "{ok} {path}: version {} -> {}\n",
                report.user_version, report.default_version
            ));
        }
        MigrationOutcome::Rewritten { changes } => {
            out.push_str(&format!(
                "{ok} {path}: added {} key(s), version {} -> {}\n",
                report.missing_keys.len(),
                report.user_version,
                report.default_version
            ));
            for change in changes {
                let verb = match change.kind {
                    ChangeKind::Appended => "appended section",
                    ChangeKind::AppendedRendered => "appended section (rendered)",
                    ChangeKind::Spliced => "inserted into",
                };
                out.push_str(&format!(
                    "  {} {verb} {} ({} key(s))\n",
                    icons::ARROW,
                    change.section,
                    change.keys.len()
                ));
            }
        }
        MigrationOutcome::FellBack { reason } => {
            let warn = mark(icons::WARNING, colors::WARNING, supports_color);
            out.push_str(&format!(
                "{warn} {path}: updated to version {} without preserving comments\n  {} {reason}\n",
                report.default_version,
                icons::ARROW
            ));
        }
        MigrationOutcome::Aborted { reason } | MigrationOutcome::Failed { reason } => {
            let err = mark(icons::ERROR, colors::ERROR, supports_color);
            out.push_str(&format!("{err} {path}: {reason}\n"));
        }
    }
    out
}

pub fn render_pending(path: &str, plan: &PlannedMigration, supports_color: bool) -> String {
    let warn = mark(icons::WARNING, colors::WARNING, supports_color);
    let mut out = format!(
        "{warn} {path}: migration pending (version {} -> {}, {} missing key(s))\n",
        plan.user_version,
        plan.default_version,
        plan.missing_keys.len()
    );
    for key in &plan.missing_keys {
        out.push_str(&format!("  {} {key}\n", icons::ARROW));
    }
    out
}

pub fn render_release(status: &UpdateStatus, supports_color: bool) -> String {
    if status.update_available {
        let warn = mark(icons::WARNING, colors::INFO, supports_color);
        format!(
            "{warn} new release available: {} (running {})\n",
            status.latest, status.current
        )
    } else {
        let ok = mark(icons::SUCCESS, colors::SUCCESS, supports_color);
        format!("{ok} running the latest release ({})\n", status.current)
    }
}
