//! Process configuration read from the environment.
//!
//! Configuration is read once at startup and passed explicitly to whatever
//! needs it; nothing else in the crate looks at the environment.
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DEBUG` | Any non-empty value enables step-by-step diagnostics on stderr | unset |
//! | `CI_BUILD_STATUS_EXIT_MODE` | `always-zero` or `verdict` | `always-zero` |
//!
//! # Example
//!
//! ```bash
//! # Trace every step and action while resolving
//! DEBUG=1 ci-build-status build.json
//!
//! # Make the exit code follow the verdict
//! CI_BUILD_STATUS_EXIT_MODE=verdict ci-build-status build.json
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::engine::Verdict;

/// Verbosity toggle
pub const ENV_VERBOSE: &str = "DEBUG";

/// Exit code policy
pub const ENV_EXIT_MODE: &str = "CI_BUILD_STATUS_EXIT_MODE";

/// Exit code used for any error (usage, load, schema, configuration)
pub const EXIT_ERROR: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} (expected one of: always-zero, verdict)")]
    InvalidExitMode { var: &'static str, value: String },
}

/// How the process exit code relates to the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitMode {
    /// Exit 0 whatever the verdict; callers read stdout
    #[default]
    AlwaysZero,
    /// Success 0, Failed 1, Indeterminate 3, NoData 4
    Verdict,
}

impl ExitMode {
    pub fn exit_code(self, verdict: Verdict) -> u8 {
        match self {
            ExitMode::AlwaysZero => 0,
            ExitMode::Verdict => match verdict {
                Verdict::Success => 0,
                Verdict::Failed => 1,
                Verdict::Indeterminate => 3,
                Verdict::NoData => 4,
            },
        }
    }
}

impl FromStr for ExitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "always-zero" => Ok(ExitMode::AlwaysZero),
            "verdict" => Ok(ExitMode::Verdict),
            other => Err(ConfigError::InvalidExitMode {
                var: ENV_EXIT_MODE,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitMode::AlwaysZero => f.write_str("always-zero"),
            ExitMode::Verdict => f.write_str("verdict"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool,
    pub exit_mode: ExitMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose = lookup(ENV_VERBOSE).is_some_and(|v| !v.is_empty());

        let exit_mode = match lookup(ENV_EXIT_MODE) {
            Some(v) if !v.is_empty() => v.parse()?,
            _ => ExitMode::default(),
        };

        Ok(Self { verbose, exit_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.verbose);
        assert_eq!(config.exit_mode, ExitMode::AlwaysZero);
    }

    #[test]
    fn test_verbose_any_non_empty_value() {
        for value in ["1", "true", "yes", "0"] {
            let config = Config::from_lookup(lookup(&[("DEBUG", value)])).unwrap();
            assert!(config.verbose, "DEBUG={:?} should enable diagnostics", value);
        }

        let config = Config::from_lookup(lookup(&[("DEBUG", "")])).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn test_exit_mode_parsing() {
        let config =
            Config::from_lookup(lookup(&[("CI_BUILD_STATUS_EXIT_MODE", "verdict")])).unwrap();
        assert_eq!(config.exit_mode, ExitMode::Verdict);

        let config =
            Config::from_lookup(lookup(&[("CI_BUILD_STATUS_EXIT_MODE", "")])).unwrap();
        assert_eq!(config.exit_mode, ExitMode::AlwaysZero);

        let err = Config::from_lookup(lookup(&[("CI_BUILD_STATUS_EXIT_MODE", "loud")]))
            .unwrap_err();
        assert!(err.to_string().contains("CI_BUILD_STATUS_EXIT_MODE"));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_exit_codes() {
        for verdict in [
            Verdict::Success,
            Verdict::Failed,
            Verdict::Indeterminate,
            Verdict::NoData,
        ] {
            assert_eq!(ExitMode::AlwaysZero.exit_code(verdict), 0);
        }

        assert_eq!(ExitMode::Verdict.exit_code(Verdict::Success), 0);
        assert_eq!(ExitMode::Verdict.exit_code(Verdict::Failed), 1);
        assert_eq!(ExitMode::Verdict.exit_code(Verdict::Indeterminate), 3);
        assert_eq!(ExitMode::Verdict.exit_code(Verdict::NoData), 4);
    }
}
