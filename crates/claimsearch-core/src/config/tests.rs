//! Tests for configuration loading.

use super::*;

// ==================== SETTINGS PARSING TESTS ====================

mod parsing_tests {
    use super::*;

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[search]
threshold = 0.75
sheet = "Claims"

[output]
format = "json"
show_scores = true
"#;

        let settings: Settings = toml::from_str(toml).unwrap();

        assert_eq!(settings.search.threshold, 0.75);
        assert_eq!(settings.search.sheet.as_deref(), Some("Claims"));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.output.show_scores);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.search.threshold, 0.6);
        assert_eq!(settings.search.sheet, None);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(!settings.output.show_scores);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[output]
show_scores = true
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.search.threshold, 0.6);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(settings.output.show_scores);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}

// ==================== LOADER TESTS ====================

mod loader_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Settings::from_toml_str("[search\nthreshold = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_returns_error() {
        let result = Settings::from_toml_str("[output]\nformat = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let toml = r#"
[search]
threshold = 0.8
fuzziness = "high"

[extra]
key = 1
"#;

        let settings = Settings::from_toml_str(toml).unwrap();
        assert_eq!(settings.search.threshold, 0.8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[search]\nsheet = \"Archive\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.search.sheet.as_deref(), Some("Archive"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "threshold = [").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_discover_with_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[search]\nthreshold = 0.9\n",
        )
        .unwrap();

        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings.search.threshold, 0.9);
    }

    #[test]
    fn test_discover_skips_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
