use std::process::ExitCode;

use anyhow::Result;

use cfgmigrate::application::check_release;

use crate::ui;

pub fn cmd_release(current: &str, latest: &str, json: bool, color: bool) -> Result<ExitCode> {
    let status = check_release(current, latest);

    if json {
        let mut out = std::io::stdout().lock();
        ui::json::write_event(&mut out, &serde_json::json!({
            "event": "release",
            "status": status,
        }))?;
    } else {
        print!("{}", ui::views::render_release(&status, color));
    }

    Ok(ExitCode::SUCCESS)
}
