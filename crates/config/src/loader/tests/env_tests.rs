//! Environment variable tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

use super::env_lock;
use super::profile_tests::create_test_config_file;

#[test]
#[serial]
fn test_env_overrides_profile() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(
        [("JOBWATCH_BASE_URL", Some("https://override.example.com"))],
        || {
            let config = ConfigLoader::new()
                .with_profile_name("dev".to_string())
                .with_config_path(config_path.clone())
                .from_profile()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://override.example.com");
            // Untouched profile values survive.
            assert_eq!(config.connection.max_retries, 5);
        },
    );
}

#[test]
#[serial]
fn test_env_reads_all_supported_variables() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("JOBWATCH_BASE_URL", Some("https://env.example.com/")),
            ("JOBWATCH_API_TOKEN", Some("env-token")),
            ("JOBWATCH_SKIP_VERIFY", Some("true")),
            ("JOBWATCH_TIMEOUT", Some("45")),
            ("JOBWATCH_MAX_RETRIES", Some("2")),
            ("JOBWATCH_POLL_INTERVAL", Some("9")),
            ("JOBWATCH_PAGE_SIZE", Some("40")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.base_url, "https://env.example.com");
            assert_eq!(config.auth.api_token.unwrap().expose_secret(), "env-token");
            assert!(config.connection.skip_verify);
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            assert_eq!(config.connection.max_retries, 2);
            assert_eq!(config.dashboard.poll_interval_secs, 9);
            assert_eq!(config.dashboard.page_size, 40);
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("JOBWATCH_API_TOKEN", Some("")),
            ("JOBWATCH_BASE_URL", Some("   ")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_base_url("https://builder.example.com".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert!(config.auth.api_token.is_none());
            assert_eq!(config.connection.base_url, "https://builder.example.com");
        },
    );
}

#[test]
#[serial]
fn test_invalid_numeric_env_var_names_variable() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("JOBWATCH_POLL_INTERVAL", Some("often"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "JOBWATCH_POLL_INTERVAL");
            }
            Err(other) => panic!("expected InvalidValue, got {other:?}"),
            Ok(_) => panic!("expected InvalidValue, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("JOBWATCH_SKIP_VERIFY", Some("yes"))], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}

#[test]
#[serial]
fn test_profile_and_config_path_from_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(
        [
            ("JOBWATCH_PROFILE", Some("prod")),
            ("JOBWATCH_CONFIG_PATH", config_path.to_str()),
        ],
        || {
            // env first to pick up the profile selection, then the profile file,
            // then env again so env values win over the profile.
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .from_profile()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://app.example.com");
            assert_eq!(config.dashboard.page_size, 50);
        },
    );
}

#[test]
#[serial]
fn test_builder_profile_name_wins_over_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars([("JOBWATCH_PROFILE", Some("prod"))], || {
        let config = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(config_path.clone())
            .from_env()
            .unwrap()
            .from_profile()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "http://localhost:3000");
        assert!(config.connection.skip_verify);
    });
}
