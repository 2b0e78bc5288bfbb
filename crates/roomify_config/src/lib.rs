use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/default` at the workspace root (any extension the `config`
///    crate understands),
/// 2. `config/{RUN_ENV}` (RUN_ENV defaults to `debug`),
/// 3. environment variables prefixed with the configured prefix (default
///    `ROOMIFY`), with `__` as the nesting separator, e.g.
///    `ROOMIFY_SERVER__PORT=9000` or `ROOMIFY_AGENDA__API_KEY=...`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "ROOMIFY".to_string());

    let config_root = find_config_root();
    let default_path = config_root.join("config/default");
    let env_path = config_root.join(format!("config/{}", run_env));

    let builder = Config::builder()
        .add_source(File::with_name(default_path.to_string_lossy().as_ref()).required(false))
        .add_source(File::with_name(env_path.to_string_lossy().as_ref()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

/// Walks up from the crate manifest dir (or the current dir when cargo did
/// not set one) to the first ancestor containing a `config` directory.
fn find_config_root() -> PathBuf {
    let start = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    start
        .ancestors()
        .find(|dir| dir.join("config").is_dir())
        .map(|dir| dir.to_path_buf())
        .unwrap_or(start)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file defaults to `.env`; `DOTENV_OVERRIDE` selects another path. A
/// missing file is not an error. Loading happens at most once per process.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
