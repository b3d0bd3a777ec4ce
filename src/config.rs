use std::io;
use std::path::{Path, PathBuf};

/// Data root for game scripts and character sheets. Resolved once at startup
/// and passed in explicitly; nothing below `main` reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    /// Flag value first, environment variable second.
    pub fn from_flag_or_env(flag: Option<PathBuf>, var: &str) -> io::Result<Config> {
        if let Some(root) = flag {
            return Ok(Config::new(root));
        }
        match std::env::var_os(var) {
            Some(v) => Ok(Config::new(PathBuf::from(v))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("data root not set: pass --root or set {}", var),
            )),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("game_scripts")
    }

    pub fn characters_dir(&self) -> PathBuf {
        self.root.join("characters")
    }

    /// Named-game convention: `<root>/game_scripts/<name>.toml`.
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.scripts_dir().join(format!("{}.toml", name))
    }
}
