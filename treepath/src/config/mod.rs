//! Layout files.
//!
//! Layouts can be written as YAML instead of built in code. This module
//! provides:
//! - the file schema ([`LayoutConfig`], [`NodeSpec`])
//! - discovery of `treepath.yaml` walking up from a directory, with a user
//!   fallback at `~/.treepath/treepath.yaml`
//! - `TREEPATH_*` environment overrides
//!
//! # Examples
//!
//! ```
//! use treepath::config::LayoutLoader;
//! use treepath::{Params, RelativePathMode};
//!
//! let config = LayoutLoader::load_str(
//!     r#"
//! mode: url
//! root:
//!   path: "videos/{videoId}"
//!   children:
//!     manifest: { path: master.m3u8 }
//!     poster: { path: poster.jpg }
//! "#,
//! )
//! .unwrap();
//!
//! let layout = config.into_layout().unwrap();
//! assert_eq!(layout.mode(), RelativePathMode::Url);
//!
//! let params = Params::new().with("videoId", 3);
//! let rel = layout.relative(("manifest", &params), ("poster", &params)).unwrap();
//! assert_eq!(rel, "poster.jpg");
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::{EnvironmentConfig, LAYOUT_ENV, MODE_ENV};
pub use loader::{LayoutLoader, LAYOUT_FILE_NAME, USER_LAYOUT_DIR};
pub use schema::{LayoutConfig, NodeSpec};
