//! Environment variable layering
//!
//! Each test runs inside a `figment::Jail`, which serializes jailed tests,
//! runs them in a scratch working directory and restores the environment
//! afterwards. Only logging keys that no other loader test asserts on are
//! overridden here.

use figment::Jail;
use fmtreg_infrastructure::config::ConfigLoader;
use fmtreg_infrastructure::constants::{DEFAULT_CONFIG_FILENAME, LOG_MAX_FILES};

#[test]
fn test_prefixed_env_vars_are_loaded() {
    Jail::expect_with(|jail| {
        jail.set_env("FMTREG__LOGGING__JSON_FORMAT", "true");
        jail.set_env("FMTREG__LOGGING__MAX_FILES", 9);

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert!(config.logging.json_format);
        assert_eq!(config.logging.max_files, 9);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[logging]\nmax_files = 3\njson_format = true\n")?;
        jail.set_env("FMTREG__LOGGING__MAX_FILES", 12);

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.max_files, 12, "Environment wins over the file");
        assert!(config.logging.json_format, "File values without overrides are kept");
        Ok(())
    });
}

#[test]
fn test_default_config_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILENAME, "[logging]\nmax_files = 2\n")?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.max_files, 2);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("COMICS__LOGGING__MAX_FILES", 7);
        jail.set_env("FMTREG__LOGGING__JSON_FORMAT", "true");

        let config = ConfigLoader::new()
            .with_env_prefix("COMICS")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.max_files, 7);
        assert!(!config.logging.json_format, "Default prefix is ignored");
        Ok(())
    });
}

#[test]
fn test_invalid_env_value_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FMTREG__LOGGING__MAX_FILES", 0);
        jail.set_env("FMTREG__LOGGING__FILE_OUTPUT", "fmtreg.log");

        assert!(ConfigLoader::new().load().is_err());

        let unprefixed = ConfigLoader::new()
            .with_env_prefix("UNUSED")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(unprefixed.logging.max_files, LOG_MAX_FILES);
        Ok(())
    });
}
