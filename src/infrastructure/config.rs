use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config/sea_level";
const ENV_PREFIX: &str = "SEA_LEVEL";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputSettings,
    pub analysis: AnalysisSettings,
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputSettings {
    pub path: PathBuf,
    pub year_column: String,
    pub value_column: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("epa-sea-level.csv"),
            year_column: "Year".to_string(),
            value_column: "CSIRO Adjusted Sea Level".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// First year of the recent-trend window
    pub cutoff_year: i32,
    /// Last year both trends are projected to
    pub horizon_year: i32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            cutoff_year: 2000,
            horizon_year: 2050,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    pub output_path: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub observation_color: String,
    pub full_history_color: String,
    pub recent_color: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("sea_level_plot.png"),
            title: "Rise in Sea Level".to_string(),
            x_label: "Year".to_string(),
            y_label: "Sea Level (inches)".to_string(),
            width: 1200,
            height: 600,
            x_min: 1870.0,
            x_max: 2060.0,
            y_min: -1.0,
            y_max: 16.0,
            observation_color: "#1f77b4".to_string(),
            full_history_color: "red".to_string(),
            recent_color: "green".to_string(),
        }
    }
}

/// Load configuration from `config/sea_level.*` (optional) and `SEA_LEVEL__*` variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from(CONFIG_FILE, None)
}

/// `env_overrides` replaces the process environment when given.
pub fn load_config_from(
    file: &str,
    env_overrides: Option<config::Map<String, String>>,
) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env_overrides),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    validate(&app_config)?;
    Ok(app_config)
}

fn validate(app_config: &AppConfig) -> anyhow::Result<()> {
    let analysis = &app_config.analysis;
    if analysis.cutoff_year > analysis.horizon_year {
        anyhow::bail!(
            "cutoff_year {} is after horizon_year {}",
            analysis.cutoff_year,
            analysis.horizon_year
        );
    }

    let chart = &app_config.chart;
    if chart.x_min >= chart.x_max || chart.y_min >= chart.y_max {
        anyhow::bail!("chart axis limits must be increasing");
    }
    if chart.width == 0 || chart.height == 0 {
        anyhow::bail!("chart size must be non-zero");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_sources() {
        let app_config = load_config_from("does/not/exist", Some(config::Map::new())).unwrap();

        assert_eq!(app_config, AppConfig::default());
        assert_eq!(app_config.analysis.cutoff_year, 2000);
        assert_eq!(app_config.analysis.horizon_year, 2050);
        assert_eq!(app_config.input.value_column, "CSIRO Adjusted Sea Level");
    }

    #[test]
    fn test_file_and_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[analysis]\ncutoff_year = 1990\n\n[chart]\ntitle = \"Custom\"\n",
        )
        .unwrap();

        let mut env = config::Map::new();
        env.insert("SEA_LEVEL__ANALYSIS__HORIZON_YEAR".to_string(), "2100".to_string());
        env.insert("SEA_LEVEL__INPUT__PATH".to_string(), "data/other.csv".to_string());
        env.insert("UNRELATED".to_string(), "x".to_string());

        let app_config = load_config_from(path.to_str().unwrap(), Some(env)).unwrap();

        assert_eq!(app_config.analysis.cutoff_year, 1990);
        assert_eq!(app_config.analysis.horizon_year, 2100);
        assert_eq!(app_config.chart.title, "Custom");
        assert_eq!(app_config.chart.y_label, "Sea Level (inches)");
        assert_eq!(app_config.input.path, PathBuf::from("data/other.csv"));
    }

    #[test]
    fn test_rejects_cutoff_after_horizon() {
        let mut env = config::Map::new();
        env.insert("SEA_LEVEL__ANALYSIS__CUTOFF_YEAR".to_string(), "2060".to_string());

        let err = load_config_from("does/not/exist", Some(env)).unwrap_err();
        assert!(err.to_string().contains("after horizon_year"));
    }
}
