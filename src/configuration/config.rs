#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use clap::ArgMatches;

use crate::infrastructure::api::GenerateOptions;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "QUILL_BASE_URL";

/// Resolved once at startup and threaded through by value. Nothing reads
/// configuration ambiently after this point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub model: Option<String>,
    pub system_instruction: Option<String>,
    pub provider: Option<String>,
}

impl Config {
    pub fn resolve(matches: &ArgMatches) -> Config {
        return Config {
            base_url: resolve_base_url(matches.get_one::<String>("base-url")),
            model: matches.get_one::<String>("model").cloned(),
            system_instruction: matches.get_one::<String>("system-instruction").cloned(),
            provider: matches.get_one::<String>("provider").cloned(),
        };
    }

    pub fn generate_options(&self) -> GenerateOptions {
        return GenerateOptions {
            model: self.model.clone(),
            system_instruction: self.system_instruction.clone(),
            provider: self.provider.clone(),
        };
    }
}

// First defined wins: the flag passed at runtime, the deploy-time environment
// variable, then the local development default.
fn resolve_base_url(flag: Option<&String>) -> String {
    if let Some(url) = flag {
        if !url.is_empty() {
            return url.clone();
        }
    }

    if let Ok(url) = env::var(BASE_URL_ENV) {
        if !url.is_empty() {
            return url;
        }
    }

    return DEFAULT_BASE_URL.to_string();
}
