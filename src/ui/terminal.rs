use is_terminal::IsTerminal;

use cfgmigrate::config::ColorMode;
use cfgmigrate::presentation::ColorWhen;

/// Whether stdout output should be colored.
///
/// The `--color` flag wins over the settings file; `auto` requires a
/// terminal that is not `dumb`.
pub fn color_enabled(flag: Option<ColorWhen>, setting: ColorMode) -> bool {
    color_enabled_impl(
        flag,
        setting,
        std::io::stdout().is_terminal(),
        |key| std::env::var(key).ok(),
    )
}

fn color_enabled_impl(
    flag: Option<ColorWhen>,
    setting: ColorMode,
    is_tty: bool,
    get_env: impl Fn(&str) -> Option<String>,
) -> bool {
    let mode = match flag {
        Some(ColorWhen::Always) => ColorMode::Always,
        Some(ColorWhen::Never) => ColorMode::Never,
        Some(ColorWhen::Auto) => ColorMode::Auto,
        None => setting,
    };

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
            is_tty && !dumb
        }
    }
}
