//! Property tests for config migration.

use proptest::prelude::*;

use cfgmigrate::domain::services::missing_keys;
use cfgmigrate::{
    ConfigMigrator, ConfigVersion, EmbeddedTemplate, LocalFs, MigrateOptions, MigrationOutcome,
    StructuredConfig,
};

const TEMPLATE: &str = r#"# General
settings:
  enabled: true
  # Check interval
  interval: 6
  worlds:
    - world
    - nether

# Messages
messages:
  reload: "Reloaded"
  # Nested block
  join:
    title: "Welcome"
    subtitle: "Have fun"

rewards:
  enabled: true

# Do not edit
config-version: 3
"#;

const KEY: &str = "config-version";

#[derive(Debug, Clone)]
struct Settings {
    enabled: Option<bool>,
    interval: Option<u16>,
    worlds: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
struct Messages {
    reload: Option<String>,
    join: Option<(Option<String>, Option<String>)>,
}

/// A user file that holds some subset of the template keys
#[derive(Debug, Clone)]
struct UserFile {
    settings: Option<Settings>,
    messages: Option<Messages>,
    rewards: Option<Option<bool>>,
    extra_keys: bool,
    note: bool,
    /// (at top, version)
    version: Option<(bool, u8)>,
}

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}").unwrap()
}

fn user_file() -> impl Strategy<Value = UserFile> {
    let settings = (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<u16>()),
        proptest::option::of(proptest::collection::vec(word(), 0..3)),
    )
        .prop_map(|(enabled, interval, worlds)| Settings {
            enabled,
            interval,
            worlds,
        });
    let messages = (
        proptest::option::of(word()),
        proptest::option::of((proptest::option::of(word()), proptest::option::of(word()))),
    )
        .prop_map(|(reload, join)| Messages { reload, join });

    (
        proptest::option::of(settings),
        proptest::option::of(messages),
        proptest::option::of(proptest::option::of(any::<bool>())),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of((any::<bool>(), 0u8..=3)),
    )
        .prop_map(
            |(settings, messages, rewards, extra_keys, note, version)| UserFile {
                settings,
                messages,
                rewards,
                extra_keys,
                note,
                version,
            },
        )
}

fn render(user: &UserFile) -> String {
    let mut out = String::new();
    if let Some((true, v)) = user.version {
        out.push_str(&format!("{KEY}: {v}\n"));
    }
    if let Some(settings) = &user.settings {
        out.push_str("settings:\n");
        if let Some(enabled) = settings.enabled {
            out.push_str(&format!("  enabled: {enabled}\n"));
        }
        if let Some(interval) = settings.interval {
            out.push_str(&format!("  interval: {interval}\n"));
        }
        match &settings.worlds {
            Some(worlds) if worlds.is_empty() => out.push_str("  worlds: []\n"),
            Some(worlds) => {
                out.push_str("  worlds:\n");
                for world in worlds {
                    out.push_str(&format!("    - {world}\n"));
                }
            }
            None => {}
        }
        if user.extra_keys {
            out.push_str("  extra: keep\n");
        }
    }
    if user.note {
        out.push_str("\n# user note\n");
    }
    if let Some(messages) = &user.messages {
        out.push_str("messages:\n");
        if let Some(reload) = &messages.reload {
            out.push_str(&format!("  reload: {reload}\n"));
        }
        if let Some((title, subtitle)) = &messages.join {
            out.push_str("  join:\n");
            if let Some(title) = title {
                out.push_str(&format!("    title: {title}\n"));
            }
            if let Some(subtitle) = subtitle {
                out.push_str(&format!("    subtitle: {subtitle}\n"));
            }
        }
    }
    if let Some(rewards) = &user.rewards {
        out.push_str("\nrewards:\n");
        if let Some(enabled) = rewards {
            out.push_str(&format!("  enabled: {enabled}\n"));
        }
    }
    if user.extra_keys {
        out.push_str("custom: 1\n");
    }
    if let Some((false, v)) = user.version {
        out.push_str(&format!("\n{KEY}: {v}\n"));
    }
    out
}

fn migrator() -> ConfigMigrator<LocalFs, EmbeddedTemplate> {
    ConfigMigrator::new(
        LocalFs::new(),
        EmbeddedTemplate::new("config.yml", TEMPLATE),
        MigrateOptions::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: migration completes on the comment-preserving path, leaves
    /// no default key missing, keeps every user value and ends with exactly
    /// one version line carrying the template version. A second run is a no-op.
    #[test]
    fn property_migration_is_complete_and_idempotent(user in user_file()) {
        let text = render(&user);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, &text).unwrap();

        let defaults = StructuredConfig::parse(TEMPLATE).unwrap();
        let before = StructuredConfig::parse(&text).unwrap();

        let report = migrator().migrate(&path);
        prop_assert!(
            matches!(
                report.outcome,
                MigrationOutcome::UpToDate
                    | MigrationOutcome::VersionStamped
                    | MigrationOutcome::Rewritten { .. }
            ),
            "unexpected outcome {:?} for:\n{}",
            report.outcome,
            text
        );

        let migrated = std::fs::read_to_string(&path).unwrap();
        let after = StructuredConfig::parse(&migrated).unwrap();

        // Completeness
        prop_assert!(missing_keys(&after, &defaults, KEY).is_empty());

        // User values survive. An empty header (null) gains children.
        for key in before.leaf_paths() {
            if key.as_str() == KEY || before.get(&key).is_some_and(|v| v.is_null()) {
                continue;
            }
            prop_assert_eq!(before.get(&key), after.get(&key), "value of {} changed", key);
        }

        if report.changed() {
            // Single trailing version block
            let markers = migrated
                .lines()
                .filter(|l| l.trim_start().starts_with("config-version:"))
                .count();
            prop_assert_eq!(markers, 1);
            let last = migrated.lines().rev().find(|l| !l.trim().is_empty());
            prop_assert_eq!(last, Some("config-version: 3"));
            prop_assert_eq!(after.version(KEY), ConfigVersion::new(3));
        } else {
            prop_assert_eq!(&migrated, &text);
        }

        // Idempotence
        let second = migrator().migrate(&path);
        prop_assert_eq!(second.outcome, MigrationOutcome::UpToDate);
        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), migrated);
    }
}
