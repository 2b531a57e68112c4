//! Core library for `tempname`.
//!
//! Creates unique temporary files and directories from templates ending in
//! `XXXXXX`, the way `mkstemp(3)` and `mkdtemp(3)` do:
//!
//! ```no_run
//! let dir = tempname::mkdtemp("/tmp/build_XXXXXX")?;
//! let (path, file) = tempname::mkstemp("/tmp/log_XXXXXX")?;
//! # drop(file);
//! # let _ = (dir, path);
//! # Ok::<(), tempname::TempNameError>(())
//! ```
//!
//! `TempNameGenerator` exposes the same operations with an injectable
//! filesystem (`TempFs`) and randomness source (`SuffixSource`).

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod hints;
pub mod output;
pub mod platform;
pub mod suffix;
pub mod template;
pub mod tempfs;

pub use config::{Config, LogLevel, default_config_path, load_config, load_config_from_xml_path};
pub use errors::{TempNameError, TemplateDefect};
pub use generator::{DEFAULT_MAX_ATTEMPTS, TempNameGenerator, mkdtemp, mkstemp};
pub use suffix::{RandomSuffix, SuffixSource};
pub use template::{PLACEHOLDER, SUFFIX_LEN, Template, validate};
pub use tempfs::{OsFs, TempFs};
