//! Layout file discovery and loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::api::Layout;
use crate::config::environment::EnvironmentConfig;
use crate::config::schema::LayoutConfig;
use crate::error::{Error, Result};

/// File name searched for by [`LayoutLoader::discover`].
pub const LAYOUT_FILE_NAME: &str = "treepath.yaml";

/// Directory under the home directory holding the user layout file.
pub const USER_LAYOUT_DIR: &str = ".treepath";

/// Loads layout files.
///
/// # Examples
///
/// ```no_run
/// use treepath::config::LayoutLoader;
/// use std::path::Path;
///
/// let layout = LayoutLoader::load(None, Path::new(".")).unwrap();
/// for keypath in layout.keypaths() {
///     println!("{keypath}");
/// }
/// ```
pub struct LayoutLoader;

impl LayoutLoader {
    /// Parses a layout from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or does not
    /// match the layout schema.
    pub fn load_str(yaml: &str) -> Result<LayoutConfig> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutNotFound`] if the file does not exist,
    /// [`Error::Io`] if it cannot be read, or [`Error::Configuration`] if it
    /// does not parse.
    pub fn load_file(path: &Path) -> Result<LayoutConfig> {
        log::debug!("loading layout file {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::LayoutNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        Self::load_str(&contents)
    }

    /// Finds the layout file for `start_dir`.
    ///
    /// Walks up from `start_dir` looking for `treepath.yaml`, then falls back
    /// to `~/.treepath/treepath.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutNotFound`] if neither exists.
    pub fn discover(start_dir: &Path) -> Result<PathBuf> {
        Self::discover_with_fallback(start_dir, Self::user_layout_path().as_deref())
    }

    /// Like [`LayoutLoader::discover`] with an explicit fallback file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutNotFound`] if no file is found.
    pub fn discover_with_fallback(start_dir: &Path, fallback: Option<&Path>) -> Result<PathBuf> {
        let mut current = start_dir.to_path_buf();
        loop {
            let candidate = current.join(LAYOUT_FILE_NAME);
            if candidate.is_file() {
                log::debug!("discovered layout file {}", candidate.display());
                return Ok(candidate);
            }
            if !current.pop() {
                break;
            }
        }

        match fallback {
            Some(path) if path.is_file() => {
                log::debug!("using user layout file {}", path.display());
                Ok(path.to_path_buf())
            }
            _ => Err(Error::LayoutNotFound {
                path: start_dir.join(LAYOUT_FILE_NAME),
            }),
        }
    }

    /// The user layout file, `~/.treepath/treepath.yaml`.
    #[must_use]
    pub fn user_layout_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_LAYOUT_DIR).join(LAYOUT_FILE_NAME))
    }

    /// Loads a ready-to-use [`Layout`].
    ///
    /// Reads `path` when given, otherwise the file [`discover`](Self::discover)
    /// finds from `start_dir`. Environment overrides are applied before the
    /// tree is built.
    ///
    /// # Errors
    ///
    /// Returns any discovery, loading, override, or construction error.
    pub fn load(path: Option<&Path>, start_dir: &Path) -> Result<Layout> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::discover(start_dir)?,
        };
        let mut config = Self::load_file(&path)?;
        EnvironmentConfig::apply_overrides(&mut config)?;
        config.into_layout()
    }
}
