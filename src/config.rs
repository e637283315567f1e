use std::path::PathBuf;

use crate::data::export::DEFAULT_EXPORT_FILE_NAME;
use crate::data::filter::{DEFAULT_TOP_N, TOP_N_RANGE};

/// Dataset loaded when neither the command line nor the environment names one.
pub const DEFAULT_DATA_PATH: &str = "world-happiness-report-2021.csv";

/// Startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// `HAPPINESS_DATA`, overridden by the first command-line argument.
    pub data_path: PathBuf,
    /// `HAPPINESS_TOP_N`, clamped to the slider bounds.
    pub default_top_n: usize,
    /// `HAPPINESS_EXPORT_NAME`.
    pub export_file_name: String,
}

impl DashboardConfig {
    /// Read the command line and the process environment.
    pub fn from_env() -> Self {
        let arg = std::env::args().nth(1);
        Self::from_lookup(arg, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(arg: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = arg
            .or_else(|| lookup("HAPPINESS_DATA"))
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        let default_top_n = match lookup("HAPPINESS_TOP_N").map(|v| v.parse::<usize>()) {
            Some(Ok(n)) if TOP_N_RANGE.contains(&n) => n,
            Some(Ok(n)) => {
                let clamped = n.clamp(*TOP_N_RANGE.start(), *TOP_N_RANGE.end());
                log::warn!("HAPPINESS_TOP_N={n} outside {TOP_N_RANGE:?}, using {clamped}");
                clamped
            }
            Some(Err(e)) => {
                log::warn!("Ignoring HAPPINESS_TOP_N: {e}");
                DEFAULT_TOP_N
            }
            None => DEFAULT_TOP_N,
        };

        let export_file_name = lookup("HAPPINESS_EXPORT_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_FILE_NAME.to_string());

        DashboardConfig {
            data_path: PathBuf::from(data_path),
            default_top_n,
            export_file_name,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_lookup(None, |_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.default_top_n, DEFAULT_TOP_N);
        assert_eq!(config.export_file_name, DEFAULT_EXPORT_FILE_NAME);
    }

    #[test]
    fn argument_wins_over_environment() {
        let lookup = env(&[("HAPPINESS_DATA", "from_env.csv")]);
        let config = DashboardConfig::from_lookup(Some("from_arg.csv".into()), &lookup);
        assert_eq!(config.data_path, PathBuf::from("from_arg.csv"));

        let config = DashboardConfig::from_lookup(None, &lookup);
        assert_eq!(config.data_path, PathBuf::from("from_env.csv"));
    }

    #[test]
    fn top_n_is_clamped_or_ignored() {
        let config = DashboardConfig::from_lookup(None, env(&[("HAPPINESS_TOP_N", "50")]));
        assert_eq!(config.default_top_n, 20);
        let config = DashboardConfig::from_lookup(None, env(&[("HAPPINESS_TOP_N", "7")]));
        assert_eq!(config.default_top_n, 7);
        let config = DashboardConfig::from_lookup(None, env(&[("HAPPINESS_TOP_N", "many")]));
        assert_eq!(config.default_top_n, DEFAULT_TOP_N);
    }
}
