use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use cfgmigrate::application::MigrateOptions;
use cfgmigrate::presentation::create_migrator;

use crate::ui;

/// Exit 0 when current, 1 when a migration is pending.
pub fn cmd_check(
    config: &Path,
    template: &Path,
    options: MigrateOptions,
    json: bool,
    color: bool,
) -> Result<ExitCode> {
    super::require_template(template)?;
    if !config.exists() {
        println!("{}: no such file, nothing to migrate", config.display());
        return Ok(ExitCode::SUCCESS);
    }

    let plan = create_migrator(template, options)
        .plan(config)
        .with_context(|| format!("failed to check {}", config.display()))?;

    if json {
        let mut out = std::io::stdout().lock();
        ui::json::write_event(&mut out, &serde_json::json!({
            "event": "check",
            "path": config,
            "pending": plan.is_some(),
            "kind": plan.as_ref().map(|p| p.kind),
            "missing_keys": plan.as_ref().map(|p| p.missing_keys.clone()).unwrap_or_default(),
        }))?;
    } else if let Some(plan) = &plan {
        print!(
            "{}",
            ui::views::render_pending(&config.display().to_string(), plan, color)
        );
    } else {
        println!("{}: up to date", config.display());
    }

    Ok(if plan.is_some() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
