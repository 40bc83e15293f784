//! Configuration loading and precedence tests.

use postcache::infrastructure::config::ConfigLoader;
use std::io::Write;

#[test]
fn load_from_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "api:\n  base_url: http://localhost:9999\ncache:\n  namespace: posts:staging\n"
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9999");
    assert_eq!(config.cache.namespace, "posts:staging");
    // Untouched values keep their defaults
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.cache.url, "redis://127.0.0.1:6379");
}

#[test]
fn environment_variables_take_precedence() {
    temp_env::with_vars(
        [
            ("POSTCACHE_API__TIMEOUT_SECS", Some("3")),
            ("POSTCACHE_CACHE__NAMESPACE", Some("posts:alt")),
        ],
        || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.api.timeout_secs, 3);
            assert_eq!(config.cache.namespace, "posts:alt");
        },
    );
}

#[test]
fn invalid_environment_value_fails_validation() {
    temp_env::with_var("POSTCACHE_LOGGING__LEVEL", Some("verbose"), || {
        assert!(ConfigLoader::load().is_err());
    });
}
