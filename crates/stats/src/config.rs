use serde::Deserialize;

use crate::bonus::BonusByProfit;
use crate::engine::AnalyzeOptions;
use crate::error::StatsError;
use crate::revenue::SimpleRevenue;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SalesConfig {
    pub name: String,
    /// Dataset JSON path, resolved relative to the config file.
    pub dataset: String,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Named strategies. Both keys are required; they are optional here only so
/// that a missing key reports `MissingConfiguration` instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsConfig {
    #[serde(default)]
    pub calculate_revenue: Option<RevenueStrategy>,
    #[serde(default)]
    pub calculate_bonus: Option<BonusStrategy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategy {
    /// Sale price × quantity, less the percent discount.
    Simple,
}

impl std::fmt::Display for RevenueStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategy {
    /// 150 / 100 / 100 / 50… / 0 by profit rank.
    ByProfit,
}

impl std::fmt::Display for BonusStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByProfit => write!(f, "by_profit"),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl SalesConfig {
    pub fn from_toml(input: &str) -> Result<Self, StatsError> {
        let config: SalesConfig =
            toml::from_str(input).map_err(|e| StatsError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.name.trim().is_empty() {
            return Err(StatsError::ConfigValidation("name must not be empty".into()));
        }

        if self.dataset.trim().is_empty() {
            return Err(StatsError::ConfigValidation(
                "dataset path must not be empty".into(),
            ));
        }

        if self.options.calculate_revenue.is_none() {
            return Err(StatsError::MissingConfiguration("calculate_revenue"));
        }
        if self.options.calculate_bonus.is_none() {
            return Err(StatsError::MissingConfiguration("calculate_bonus"));
        }

        Ok(())
    }

    /// Resolve the named strategies into engine options.
    pub fn analyze_options(&self) -> Result<AnalyzeOptions, StatsError> {
        let mut options = AnalyzeOptions::default();

        match self.options.calculate_revenue {
            Some(RevenueStrategy::Simple) => options = options.with_revenue(SimpleRevenue),
            None => return Err(StatsError::MissingConfiguration("calculate_revenue")),
        }
        match self.options.calculate_bonus {
            Some(BonusStrategy::ByProfit) => options = options.with_bonus(BonusByProfit),
            None => return Err(StatsError::MissingConfiguration("calculate_bonus")),
        }

        Ok(options)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
name = "Q3 bonus run"
dataset = "data.json"

[options]
calculate_revenue = "simple"
calculate_bonus = "by_profit"

[output]
json = "report.json"
"#;

    #[test]
    fn parse_valid() {
        let config = SalesConfig::from_toml(VALID).unwrap();
        assert_eq!(config.name, "Q3 bonus run");
        assert_eq!(config.dataset, "data.json");
        assert_eq!(config.options.calculate_revenue, Some(RevenueStrategy::Simple));
        assert_eq!(config.options.calculate_bonus, Some(BonusStrategy::ByProfit));
        assert_eq!(config.output.json.as_deref(), Some("report.json"));

        let options = config.analyze_options().unwrap();
        assert!(options.calculate_revenue.is_some());
        assert!(options.calculate_bonus.is_some());
    }

    #[test]
    fn output_section_is_optional() {
        let input = r#"
name = "No output"
dataset = "data.json"

[options]
calculate_revenue = "simple"
calculate_bonus = "by_profit"
"#;
        let config = SalesConfig::from_toml(input).unwrap();
        assert!(config.output.json.is_none());
    }

    #[test]
    fn reject_missing_bonus_option() {
        let input = r#"
name = "Half configured"
dataset = "data.json"

[options]
calculate_revenue = "simple"
"#;
        let err = SalesConfig::from_toml(input).unwrap_err();
        assert!(matches!(err, StatsError::MissingConfiguration("calculate_bonus")));
    }

    #[test]
    fn reject_missing_options_table() {
        let input = r#"
name = "Unconfigured"
dataset = "data.json"
"#;
        let err = SalesConfig::from_toml(input).unwrap_err();
        assert!(matches!(err, StatsError::MissingConfiguration("calculate_revenue")));
    }

    #[test]
    fn reject_unknown_strategy() {
        let input = r#"
name = "Typo"
dataset = "data.json"

[options]
calculate_revenue = "simpel"
calculate_bonus = "by_profit"
"#;
        let err = SalesConfig::from_toml(input).unwrap_err();
        assert!(matches!(err, StatsError::ConfigParse(_)));
    }

    #[test]
    fn reject_empty_dataset_path() {
        let input = r#"
name = "No data"
dataset = "  "

[options]
calculate_revenue = "simple"
calculate_bonus = "by_profit"
"#;
        let err = SalesConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("dataset path"));
    }
}
