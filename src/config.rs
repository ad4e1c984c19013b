//! Filesystem layout for a pipeline run. Defaults match the site repository;
//! each location can be overridden from the environment.

use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_STATIC_DIR: &str = "static/structured";
pub const DEFAULT_PROFILES_DIR: &str = "static/crew";
pub const DEFAULT_BOT_MIRROR_PATH: &str = "../datacore-bot/data/botcrew.json";

pub const STATIC_DIR_ENV: &str = "DATACORE_STATIC_DIR";
pub const PROFILES_DIR_ENV: &str = "DATACORE_PROFILES_DIR";
pub const BOT_MIRROR_ENV: &str = "DATACORE_BOT_MIRROR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub static_dir: PathBuf,
    pub profiles_dir: PathBuf,
    /// Second copy of botcrew.json, written only if the file already exists.
    pub bot_mirror_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            profiles_dir: PathBuf::from(DEFAULT_PROFILES_DIR),
            bot_mirror_path: Some(PathBuf::from(DEFAULT_BOT_MIRROR_PATH)),
        }
    }
}

impl PipelineConfig {
    /// All paths rooted at one static directory; profiles live in its sibling `crew/`.
    pub fn rooted_at(static_dir: impl Into<PathBuf>) -> Self {
        let static_dir = static_dir.into();
        let profiles_dir = static_dir
            .parent()
            .map(|parent| parent.join("crew"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_DIR));
        Self {
            static_dir,
            profiles_dir,
            bot_mirror_path: None,
        }
    }

    /// Defaults overridden by `DATACORE_*` variables. An empty
    /// `DATACORE_BOT_MIRROR` disables mirroring.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut config = match lookup(STATIC_DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => Self {
                bot_mirror_path: defaults.bot_mirror_path.clone(),
                ..Self::rooted_at(dir)
            },
            _ => defaults,
        };
        if let Some(dir) = lookup(PROFILES_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            config.profiles_dir = PathBuf::from(dir);
        }
        if let Some(mirror) = lookup(BOT_MIRROR_ENV) {
            config.bot_mirror_path = if mirror.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(mirror))
            };
        }
        config
    }

    fn artifact(&self, file: &str) -> PathBuf {
        self.static_dir.join(file)
    }

    pub fn crew_path(&self) -> PathBuf {
        self.artifact("crew.json")
    }

    pub fn items_path(&self) -> PathBuf {
        self.artifact("items.json")
    }

    pub fn skill_sets_path(&self) -> PathBuf {
        self.artifact("sortedSkillSets.json")
    }

    pub fn crew_csv_path(&self) -> PathBuf {
        self.artifact("crew.csv")
    }

    pub fn bot_crew_path(&self) -> PathBuf {
        self.artifact("botcrew.json")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.artifact(crate::data::registry::REGISTRY_FILE)
    }

    pub fn bot_mirror_path(&self) -> Option<&Path> {
        self.bot_mirror_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_site_layout() {
        let config = PipelineConfig::from_lookup(lookup(&[]));
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.crew_path(), Path::new("static/structured/crew.json"));
        assert_eq!(config.profiles_dir, Path::new("static/crew"));
    }

    #[test]
    fn static_dir_override_moves_profiles_alongside() {
        let config = PipelineConfig::from_lookup(lookup(&[(STATIC_DIR_ENV, "/data/site/structured")]));
        assert_eq!(config.items_path(), Path::new("/data/site/structured/items.json"));
        assert_eq!(config.profiles_dir, Path::new("/data/site/crew"));
        assert_eq!(config.bot_mirror_path(), Some(Path::new(DEFAULT_BOT_MIRROR_PATH)));
    }

    #[test]
    fn explicit_overrides_and_disabled_mirror() {
        let config = PipelineConfig::from_lookup(lookup(&[
            (PROFILES_DIR_ENV, "/profiles"),
            (BOT_MIRROR_ENV, ""),
        ]));
        assert_eq!(config.profiles_dir, Path::new("/profiles"));
        assert_eq!(config.bot_mirror_path(), None);
    }
}
