use mentorship::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

const KEYS: [&str; 7] = [
    "MENTORSHIP_PROFILE",
    "MENTORSHIP_API_BIND_ADDR",
    "MENTORSHIP_LOG_LEVEL",
    "MENTORSHIP_LOG_FORMAT",
    "MENTORSHIP_DATABASE_URL",
    "MENTORSHIP_DB_MAX_CONNECTIONS",
    "MENTORSHIP_DB_ACQUIRE_TIMEOUT_MS",
];

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    for key in KEYS {
        unsafe {
            env::remove_var(key);
        }
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

fn loader_for(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::with_base_dir(PathBuf::from(dir.path()))
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "json");
    assert_eq!(cfg.database_url, "sqlite://mentorship.db?mode=rwc");
    assert_eq!(cfg.db_max_connections, 10);
    assert_eq!(cfg.db_acquire_timeout_ms, 5000);
    cfg.bind_addr().expect("default bind addr parses");
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "MENTORSHIP_API_BIND_ADDR=127.0.0.1:3000\nMENTORSHIP_LOG_LEVEL=warn\n",
    );
    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "MENTORSHIP_PROFILE=test\nMENTORSHIP_API_BIND_ADDR=127.0.0.1:4000\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test",
        "MENTORSHIP_API_BIND_ADDR=192.168.0.10:5000\nMENTORSHIP_DB_MAX_CONNECTIONS=4\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "MENTORSHIP_API_BIND_ADDR=10.0.0.5:6000\n",
    );

    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.api_bind_addr, "10.0.0.5:6000");
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.db_max_connections, 4);
}

#[test]
fn unprefixed_keys_are_ignored() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "API_BIND_ADDR=127.0.0.1:1234\n");

    let cfg = loader_for(&temp_dir).load().unwrap();
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:3000");
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "MENTORSHIP_API_BIND_ADDR=127.0.0.1:3000\n");

    unsafe {
        env::set_var("MENTORSHIP_API_BIND_ADDR", "0.0.0.0:9090");
    }

    let cfg = loader_for(&temp_dir)
        .load()
        .expect("config loads with env override");
    assert_eq!(cfg.api_bind_addr, "0.0.0.0:9090");

    clear_env();
}

#[test]
fn invalid_bind_addr_returns_error() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "MENTORSHIP_API_BIND_ADDR=not-an-addr\n");

    let err = loader_for(&temp_dir).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}

#[test]
fn out_of_range_pool_settings_are_rejected() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "MENTORSHIP_DB_MAX_CONNECTIONS=500\n");
    let err = loader_for(&temp_dir).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidDbMaxConnections { value: 500 }
    ));

    write_env_file(&temp_dir, ".env", "MENTORSHIP_DB_ACQUIRE_TIMEOUT_MS=soon\n");
    let err = loader_for(&temp_dir).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
}
