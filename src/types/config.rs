use crate::error::AssessError;
use crate::types::scoring::Score;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FitcheckConfig {
    pub report: Option<ReportConfig>,
    pub thresholds: Option<ThresholdsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub strong_fit: Option<Score>,
    pub developing: Option<Score>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Cut points on the final overall score. At or above `strong_fit` is a
/// YES, at or above `developing` a MAYBE, anything lower a NO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationThresholds {
    pub strong_fit: Score,
    pub developing: Score,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            strong_fit: 75,
            developing: 55,
        }
    }
}

pub const DEFAULT_LOG_LEVEL: &str = "warn";

impl FitcheckConfig {
    pub fn thresholds(&self) -> RecommendationThresholds {
        let defaults = RecommendationThresholds::default();
        match &self.thresholds {
            Some(thresholds) => RecommendationThresholds {
                strong_fit: thresholds.strong_fit.unwrap_or(defaults.strong_fit),
                developing: thresholds.developing.unwrap_or(defaults.developing),
            },
            None => defaults,
        }
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), AssessError> {
        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(AssessError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        let thresholds = self.thresholds();
        if thresholds.strong_fit > 100 || thresholds.developing > 100 {
            return Err(AssessError::ConfigParse(
                "thresholds values must be between 0 and 100".to_string(),
            ));
        }
        if thresholds.developing >= thresholds.strong_fit {
            return Err(AssessError::ConfigParse(format!(
                "thresholds.developing ({}) must be below thresholds.strong_fit ({})",
                thresholds.developing, thresholds.strong_fit
            )));
        }

        if self.log_level().trim().is_empty() {
            return Err(AssessError::ConfigParse(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: FitcheckConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.thresholds(), RecommendationThresholds::default());
        assert_eq!(cfg.report_format(), None);
        assert_eq!(cfg.log_level(), "warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[report]
format = "json"

[thresholds]
strong_fit = 80
developing = 60

[logging]
level = "debug"
"#;
        let cfg: FitcheckConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(
            cfg.thresholds(),
            RecommendationThresholds {
                strong_fit: 80,
                developing: 60,
            }
        );
        assert_eq!(cfg.log_level(), "debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_thresholds_keep_remaining_defaults() {
        let cfg: FitcheckConfig =
            toml::from_str("[thresholds]\nstrong_fit = 90\n").expect("config should parse");
        assert_eq!(cfg.thresholds().strong_fit, 90);
        assert_eq!(cfg.thresholds().developing, 55);
    }

    #[test]
    fn validate_rejects_inverted_thresholds() {
        let cfg: FitcheckConfig = toml::from_str("[thresholds]\nstrong_fit = 50\ndeveloping = 60\n")
            .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must be below thresholds.strong_fit"));
    }

    #[test]
    fn validate_rejects_thresholds_above_one_hundred() {
        let cfg: FitcheckConfig =
            toml::from_str("[thresholds]\nstrong_fit = 120\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let cfg: FitcheckConfig =
            toml::from_str("[report]\nformat = \"sarif\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format"));
    }

    #[test]
    fn validate_rejects_blank_log_level() {
        let cfg: FitcheckConfig =
            toml::from_str("[logging]\nlevel = \" \"\n").expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
