//! Configuration loading and validation tests
//!
//! Loader tests run inside `figment::Jail`, which serializes them and
//! restores the working directory and environment afterwards.

use figment::Jail;
use vss_domain::constants::{FETCH_DEFAULT_CONCURRENCY, IMAGE_BATCH_SIZE};
use vss_infrastructure::config::{
    AppConfig, CacheConfig, ConfigBuilder, ConfigLoader, FetchConfig,
};
use vss_infrastructure::constants::{
    DEFAULT_CACHE_PROVIDER, DEFAULT_EMBEDDING_PROVIDER, DEFAULT_LOG_LEVEL,
};

fn load(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn defaults_apply_without_a_file() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.fetch.concurrency, FETCH_DEFAULT_CONCURRENCY);
        assert_eq!(config.embedding.provider, DEFAULT_EMBEDDING_PROVIDER);
        assert_eq!(config.embedding.image_batch_size, IMAGE_BATCH_SIZE);
        assert_eq!(config.cache.provider, DEFAULT_CACHE_PROVIDER);
        assert!(config.cache.enabled);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
                [store]
                provider = "filesystem"
                root = "/srv/images"

                [fetch]
                concurrency = 12
                jitter = false
            "#,
        )?;

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;

        assert_eq!(config.store.provider, "filesystem");
        assert_eq!(
            config.store.root.as_deref(),
            Some(std::path::Path::new("/srv/images"))
        );
        assert_eq!(config.fetch.concurrency, 12);
        assert!(!config.fetch.jitter);
        assert_eq!(config.fetch.max_attempts, FetchConfig::default().max_attempts);
        Ok(())
    });
}

#[test]
fn discovers_vss_toml_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("vss.toml", "[cache]\ncapacity = 64\n")?;

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.cache.capacity, 64);
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("vss.toml", "[fetch]\nconcurrency = 12\n")?;
        jail.set_env("VSS_FETCH__CONCURRENCY", "16");
        jail.set_env("VSS_EMBEDDING__PROVIDER", "null");
        jail.set_env("VSS_CACHE__ENABLED", "false");

        let config = load(&ConfigLoader::new())?;

        assert_eq!(config.fetch.concurrency, 16);
        assert_eq!(config.embedding.provider, "null");
        assert!(!config.cache.enabled);
        Ok(())
    });
}

#[test]
fn custom_env_prefix_is_honored() {
    Jail::expect_with(|jail| {
        jail.set_env("IMGSEARCH_FETCH__MAX_ATTEMPTS", "5");
        jail.set_env("VSS_FETCH__MAX_ATTEMPTS", "7");

        let config = load(&ConfigLoader::new().with_env_prefix("IMGSEARCH"))?;

        assert_eq!(config.fetch.max_attempts, 5);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_config_path("nope.toml")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
        Ok(())
    });
}

#[test]
fn zero_concurrency_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("VSS_FETCH__CONCURRENCY", "0");

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("concurrency"));
        Ok(())
    });
}

#[test]
fn malformed_values_are_configuration_errors() {
    Jail::expect_with(|jail| {
        jail.create_file("vss.toml", "[fetch]\nconcurrency = \"many\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(matches!(
            err,
            vss_domain::error::Error::Configuration { .. }
        ));
        Ok(())
    });
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let original = ConfigBuilder::new()
        .with_fetch(FetchConfig {
            concurrency: 20,
            backoff_base_ms: 50,
            ..FetchConfig::default()
        })
        .build()
        .unwrap();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&original, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn builder_validates() {
    assert!(
        ConfigBuilder::new()
            .with_cache(CacheConfig {
                capacity: 0,
                ..CacheConfig::default()
            })
            .build()
            .is_err()
    );
    assert!(
        ConfigBuilder::new()
            .with_cache(CacheConfig {
                enabled: false,
                capacity: 0,
                ..CacheConfig::default()
            })
            .build()
            .is_ok()
    );
}

#[test]
fn fetch_config_maps_to_policy() {
    let policy = FetchConfig {
        concurrency: 4,
        max_attempts: 2,
        backoff_base_ms: 250,
        jitter: false,
        target_size: 64,
    }
    .to_policy();

    assert_eq!(policy.concurrency, 4);
    assert_eq!(policy.max_attempts, 2);
    assert_eq!(policy.backoff_base, std::time::Duration::from_millis(250));
    assert_eq!(policy.backoff_delay(1), std::time::Duration::from_millis(500));
    assert_eq!(policy.target_size, 64);
}

#[test]
fn recommended_concurrency_range_is_flagged_not_rejected() {
    let with = |concurrency| FetchConfig {
        concurrency,
        ..FetchConfig::default()
    };

    assert!(FetchConfig::default().has_recommended_concurrency());
    assert!(with(10).has_recommended_concurrency());
    assert!(with(50).has_recommended_concurrency());
    assert!(!with(4).has_recommended_concurrency());
    assert!(!with(64).has_recommended_concurrency());
    assert!(ConfigBuilder::new().with_fetch(with(4)).build().is_ok());
}
