use crate::config::types::{ConfigFile, DEFAULT_CONFIG_CONTENT};
use crate::config::validation::validate_seeds;
use crate::{ConfigError, ConfigResult};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(ConfigFile)` - Successfully loaded configuration with valid seeds
/// * `Err(ConfigError)` - Failed to read, parse, or validate the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use crawsan::config::load_config;
///
/// let file = load_config(Path::new("config.toml")).unwrap();
/// println!("Seeds: {:?}", file.urls);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&content)?;
    validate_seeds(&config.urls)?;

    tracing::debug!(
        "Loaded {} seed URLs from {}",
        config.urls.len(),
        path.display()
    );

    Ok(config)
}

/// Returns `<home>/.config/crawsan/config.toml`
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".config").join("crawsan").join("config.toml"))
}

/// Offers to create the config file at `path` when it does not exist yet
///
/// The parent directory is always created. The question is written to
/// `output` and a single line is read from `input`; only `y` or `Y` creates
/// the file.
///
/// # Returns
///
/// * `Ok(true)` - The file exists (already there or just created)
/// * `Ok(false)` - The user declined and no file exists
/// * `Err(ConfigError)` - Filesystem or terminal IO failed
pub fn create_default_config<R: BufRead, W: Write>(
    path: &Path,
    mut input: R,
    mut output: W,
) -> ConfigResult<bool> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    if path.exists() {
        return Ok(true);
    }

    writeln!(output, "Do you create configfile in {}?(y/N): ", path.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if matches!(answer.trim(), "y" | "Y") {
        std::fs::write(path, DEFAULT_CONFIG_CONTENT)?;
        writeln!(output, "successful to create config file.")?;
        tracing::info!("Created config file at {}", path.display());
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Loads the explicit config file, or the default one after offering to create it
///
/// # Returns
///
/// * `Ok(Some(ConfigFile))` - Configuration to crawl with
/// * `Ok(None)` - No explicit path and the user declined to create the default file
/// * `Err(ConfigError)` - The file could not be created, read, or parsed
pub fn read_or_create_config<R: BufRead, W: Write>(
    explicit: Option<&Path>,
    input: R,
    output: W,
) -> ConfigResult<Option<ConfigFile>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !create_default_config(&path, input, output)? {
                return Ok(None);
            }
            path
        }
    };

    load_config(&path).map(Some)
}
