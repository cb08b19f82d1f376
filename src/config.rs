use std::path::Path;

use anyhow::Context;

use crate::github::TeamSlug;

pub const CONFIG_FILE_PATH: &str = ".github/required-reviewers.toml";

/// Configuration of the gate loaded from a `required-reviewers.toml` file
/// located in the checked out repository.
#[derive(serde::Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RepositoryConfig {
    pub required_reviewers: Option<RequiredReviewersConfig>,
}

#[derive(serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RequiredReviewersConfig {
    /// Slug of the team whose members can approve pull requests.
    pub team: String,
}

impl RepositoryConfig {
    /// Loads the configuration from `path`. A missing file results in an empty configuration.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Cannot parse config file {}", path.display()))
    }

    /// Returns the required reviewers team. A team passed explicitly takes precedence over the
    /// one from the configuration file.
    pub fn team(&self, explicit: Option<&str>) -> Option<TeamSlug> {
        explicit
            .filter(|team| !team.is_empty())
            .map(TeamSlug::from)
            .or_else(|| {
                self.required_reviewers
                    .as_ref()
                    .map(|config| TeamSlug::from(config.team.as_str()))
            })
    }
}
