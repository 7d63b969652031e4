//! Analyzer configuration
//!
//! Owned by hosts (CLI, watcher). The engine never reads it: `analyze` runs
//! for any tag it recognizes, and hosts decide whether to call it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use crate::features::cost_analysis::Severity;
use crate::features::parsing::ports::LanguageId;

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex literal"));

/// Display colors per severity tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ColorPalette {
    pub low: String,
    pub moderate: String,
    pub elevated: String,
    pub high: String,
    pub unknown: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            low: Severity::Low.default_color().to_string(),
            moderate: Severity::Moderate.default_color().to_string(),
            elevated: Severity::Elevated.default_color().to_string(),
            high: Severity::High.default_color().to_string(),
            unknown: Severity::Unknown.default_color().to_string(),
        }
    }
}

impl ColorPalette {
    pub fn color_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::Low => &self.low,
            Severity::Moderate => &self.moderate,
            Severity::Elevated => &self.elevated,
            Severity::High => &self.high,
            Severity::Unknown => &self.unknown,
        }
    }

    /// `(r, g, b)` channels of the color for `severity`, `None` when the
    /// entry is not `#RRGGBB`
    pub fn rgb(&self, severity: Severity) -> Option<(u8, u8, u8)> {
        let hex = self.color_for(severity).strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(hex.get(at..at + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }

    fn entries(&self) -> [(Severity, &str); 5] {
        Severity::ALL.map(|severity| (severity, self.color_for(severity)))
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnalyzerConfigV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,

    #[serde(default = "default_enable")]
    enable: bool,

    #[serde(default = "default_languages")]
    languages: Vec<String>,

    #[serde(default)]
    colors: ColorPalette,
}

fn default_enable() -> bool {
    true
}

fn default_languages() -> Vec<String> {
    ["javascript", "typescript", "python", "java", "c", "cpp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Host-side analyzer settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub version: u32,
    /// Master switch
    pub enable: bool,
    /// Language tags the host should analyze
    pub languages: Vec<String>,
    pub colors: ColorPalette,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            enable: default_enable(),
            languages: default_languages(),
            colors: ColorPalette::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: AnalyzerConfigV1 = serde_yaml::from_str(content)?;
        let version = export.version.ok_or(ConfigError::MissingVersion)?;

        let config = Self {
            version,
            enable: export.enable,
            languages: export.languages,
            colors: export.colors,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = AnalyzerConfigV1 {
            version: Some(self.version),
            enable: self.enable,
            languages: self.languages.clone(),
            colors: self.colors.clone(),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let known: Vec<&str> = LanguageId::ALL.iter().map(|l| l.name()).collect();
        if let Some(tag) = self
            .languages
            .iter()
            .find(|tag| LanguageId::from_tag(tag).is_none())
        {
            return Err(ConfigError::unknown_language_with_suggestion(
                tag.as_str(),
                &known,
            ));
        }

        if let Some((severity, value)) = self
            .colors
            .entries()
            .into_iter()
            .find(|(_, value)| !HEX_COLOR.is_match(value))
        {
            return Err(ConfigError::InvalidColor {
                severity: severity.to_string(),
                value: value.to_string(),
            });
        }

        Ok(())
    }

    /// Languages the configured tags resolve to
    pub fn enabled_languages(&self) -> Vec<LanguageId> {
        let mut languages: Vec<LanguageId> = Vec::new();
        for lang in self.languages.iter().filter_map(|tag| LanguageId::from_tag(tag)) {
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }
        languages
    }

    /// Should a host analyze documents tagged `tag`?
    ///
    /// Tags are compared by the language they resolve to, so enabling
    /// `javascript` also enables `javascriptreact`.
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.enable
            && LanguageId::from_tag(tag)
                .map_or(false, |lang| self.is_language_enabled(lang))
    }

    pub fn is_language_enabled(&self, language: LanguageId) -> bool {
        self.enable
            && self
                .languages
                .iter()
                .any(|tag| LanguageId::from_tag(tag) == Some(language))
    }
}
