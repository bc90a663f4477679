//! Quiz configuration.
//!
//! Settings come from a TOML file with environment variable overrides.
//! Priority: env vars > config file > built-in defaults.
//!
//! ```toml
//! [quiz]
//! right_answers_to_pass = 3
//! locale = "en"
//!
//! [quiz.questions_files]
//! en = "questions.csv"
//! ru = "questions_ru.csv"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value in {var}: {value}")]
    InvalidEnvValue { var: &'static str, value: String },
    #[error("no questions file configured for locale '{0}'")]
    NoQuestionsForLocale(String),
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    quiz: Option<QuizSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct QuizSection {
    right_answers_to_pass: Option<u32>,
    locale: Option<String>,
    questions_files: Option<BTreeMap<String, PathBuf>>,
}

/// Resolved quiz settings.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Minimum right answers for a passing result.
    pub right_answers_to_pass: u32,
    /// Locale tag selecting the question bank.
    pub locale: String,
    /// Question bank file per locale tag.
    pub questions_files: BTreeMap<String, PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let mut questions_files = BTreeMap::new();
        questions_files.insert("en".to_string(), PathBuf::from("questions.csv"));
        Self {
            right_answers_to_pass: 3,
            locale: "en".to_string(),
            questions_files,
        }
    }
}

impl QuizConfig {
    /// Load configuration, merging file values over defaults and env
    /// overrides over both.
    ///
    /// `path` overrides the default location (`STUDYHALL_CONFIG` env var,
    /// then `<config dir>/studyhall/config.toml`). A missing file is not
    /// an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) {
            if path.exists() {
                config.merge_file(&path)?;
            }
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Resolve the question bank path for the configured locale.
    ///
    /// `STUDYHALL_QUESTIONS_FILE` overrides the per-locale map entirely.
    pub fn questions_file(&self) -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var("STUDYHALL_QUESTIONS_FILE") {
            return Ok(PathBuf::from(path));
        }
        self.questions_files
            .get(&self.locale)
            .cloned()
            .ok_or_else(|| ConfigError::NoQuestionsForLocale(self.locale.clone()))
    }

    fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(quiz) = file.quiz {
            if let Some(n) = quiz.right_answers_to_pass {
                self.right_answers_to_pass = n;
            }
            if let Some(locale) = quiz.locale {
                self.locale = locale;
            }
            if let Some(files) = quiz.questions_files {
                self.questions_files = files;
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var("STUDYHALL_PASS_COUNT") {
            self.right_answers_to_pass =
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        var: "STUDYHALL_PASS_COUNT",
                        value,
                    })?;
        }
        if let Ok(locale) = std::env::var("STUDYHALL_LOCALE") {
            self.locale = locale;
        }
        Ok(())
    }
}

/// Default config file location under the user config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STUDYHALL_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("studyhall").join("config.toml"))
}
