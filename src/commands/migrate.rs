use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use cfgmigrate::application::MigrateOptions;
use cfgmigrate::presentation::create_migrator;

use crate::ui;

pub fn cmd_migrate(
    config: &Path,
    template: &Path,
    options: MigrateOptions,
    dry_run: bool,
    json: bool,
    color: bool,
) -> Result<ExitCode> {
    super::require_template(template)?;
    let migrator = create_migrator(template, options);

    if dry_run {
        let plan = migrator
            .plan(config)
            .with_context(|| format!("failed to plan migration of {}", config.display()))?;

        if json {
            let mut out = std::io::stdout().lock();
            ui::json::write_event(&mut out, &serde_json::json!({
                "event": "plan",
                "path": config,
                "plan": plan,
            }))?;
            return Ok(ExitCode::SUCCESS);
        }

        match plan {
            Some(plan) => print!(
                "{}",
                ui::diff::render_unified_diff_with_line_numbers(
                    &config.display().to_string(),
                    &plan.original,
                    &plan.updated,
                    color,
                )
            ),
            None => println!("{}: nothing to migrate", config.display()),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let report = migrator.migrate(config);

    if json {
        let mut out = std::io::stdout().lock();
        ui::json::write_event(&mut out, &serde_json::json!({
            "event": "migrate",
            "changed": report.changed(),
            "report": report,
        }))?;
    } else {
        print!("{}", ui::views::render_report(&report, color));
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
