use serde::Deserialize;

/// Top-level chronos configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChronosConfig {
    /// Leap-day insertion settings.
    #[serde(default)]
    pub insert: InsertToml,

    /// Date-vector settings.
    #[serde(default)]
    pub dates: DatesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertToml {
    /// RNG seed; omitted means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for InsertToml {
    fn default() -> Self {
        Self {
            seed: None,
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> String {
    "nan".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatesToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default = "default_calendar")]
    pub calendar: String,
}

impl Default for DatesToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            calendar: default_calendar(),
        }
    }
}

fn default_start_year() -> i32 {
    1960
}
fn default_end_year() -> i32 {
    2099
}
fn default_calendar() -> String {
    "gregorian".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: ChronosConfig = toml::from_str("").unwrap();
        assert_eq!(config.insert.seed, None);
        assert_eq!(config.insert.placeholder, "nan");
        assert_eq!(config.dates.start_year, 1960);
        assert_eq!(config.dates.end_year, 2099);
        assert_eq!(config.dates.calendar, "gregorian");
    }

    #[test]
    fn partial_sections_fill_in() {
        let config: ChronosConfig = toml::from_str(
            r#"
            [insert]
            seed = 42

            [dates]
            end_year = 2005
            "#,
        )
        .unwrap();
        assert_eq!(config.insert.seed, Some(42));
        assert_eq!(config.insert.placeholder, "nan");
        assert_eq!(config.dates.start_year, 1960);
        assert_eq!(config.dates.end_year, 2005);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<ChronosConfig, _> = toml::from_str(
            r#"
            [insert]
            sede = 42
            "#,
        );
        assert!(result.is_err());
    }
}
