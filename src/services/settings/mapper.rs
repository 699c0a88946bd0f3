use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};

/// Parse a settings file. Keys missing from the file keep their defaults.
pub fn toml_to_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).context("Malformed settings file")?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    Ok(settings)
}

pub fn settings_to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::TimeFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = toml_to_settings("weekends_visible = false\ntime_format = \"24h\"\n").unwrap();

        assert!(!settings.weekends_visible);
        assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(settings.initial_view, "Month");
        assert_eq!(settings.day_max_events, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(toml_to_settings("slot_minutes = 7\n").is_err());
        assert!(toml_to_settings("initial_view = 12\n").is_err());
    }

    #[test]
    fn test_serialized_form_reads_back() {
        let settings = Settings {
            first_day_of_week: 1,
            theme: "dark".to_string(),
            ..Settings::default()
        };
        let text = settings_to_toml(&settings).unwrap();
        assert_eq!(toml_to_settings(&text).unwrap(), settings);
    }
}
