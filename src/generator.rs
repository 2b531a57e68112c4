//! Unique temporary name generation.
//!
//! Algorithm (shared by the directory and file variants):
//! - Validate the template (no filesystem access on failure).
//! - Draw a six-character suffix; a draw equal to `XXXXXX` is discarded.
//! - Exclusively create the candidate. `AlreadyExists` means another entry owns
//!   the name: draw again. Any other error is returned immediately.
//! - Give up with `Exhausted` once the attempt budget is spent.
//!
//! Uniqueness relies on the atomic create alone; there is no prior existence
//! check, so concurrent callers (threads or processes) cannot both win a name.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::errors::TempNameError;
use crate::suffix::{RandomSuffix, SuffixSource};
use crate::template::{PLACEHOLDER, SUFFIX_LEN, Template};
use crate::tempfs::{OsFs, TempFs};

/// Default retry budget: 62^3, the C library's `TMP_MAX`.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 62 * 62 * 62;

/// Generates and creates unique names from `XXXXXX` templates.
#[derive(Debug)]
pub struct TempNameGenerator<F, S> {
    fs: F,
    suffixes: S,
    max_attempts: u32,
}

impl TempNameGenerator<OsFs, RandomSuffix<rand::rngs::ThreadRng>> {
    /// Generator over the real filesystem with a thread-local RNG.
    pub fn os() -> Self {
        Self::new(OsFs, RandomSuffix::thread_local())
    }
}

impl<F: TempFs, S: SuffixSource> TempNameGenerator<F, S> {
    pub fn new(fs: F, suffixes: S) -> Self {
        Self {
            fs,
            suffixes,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the retry budget. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Produce a candidate name without creating anything.
    ///
    /// The name may be taken by the time the caller uses it; prefer the
    /// creating variants whenever an entry is actually needed.
    pub fn generate_name(&mut self, template: &str) -> Result<String, TempNameError> {
        let template = Template::parse(template)?;
        for _ in 0..self.max_attempts {
            if let Some(name) = self.draw(&template) {
                return Ok(name);
            }
        }
        Err(self.exhausted(&template))
    }

    /// Create a fresh owner-only directory and return its path.
    pub fn generate_unique_directory(&mut self, template: &str) -> Result<PathBuf, TempNameError> {
        let template = Template::parse(template)?;
        let fs = &self.fs;
        let path = Self::create_with(
            &mut self.suffixes,
            self.max_attempts,
            &template,
            |p| fs.create_dir_exclusive(p),
        )?
        .0;
        debug!(path = %path.display(), "Created temporary directory");
        Ok(path)
    }

    /// Create a fresh owner-only file, open read/write, and return it with its path.
    pub fn generate_unique_file(
        &mut self,
        template: &str,
    ) -> Result<(PathBuf, F::Handle), TempNameError> {
        let template = Template::parse(template)?;
        let fs = &self.fs;
        let (path, handle) = Self::create_with(
            &mut self.suffixes,
            self.max_attempts,
            &template,
            |p| fs.create_file_exclusive(p),
        )?;
        debug!(path = %path.display(), "Created temporary file");
        Ok((path, handle))
    }

    fn create_with<T>(
        suffixes: &mut S,
        max_attempts: u32,
        template: &Template,
        mut create: impl FnMut(&Path) -> io::Result<T>,
    ) -> Result<(PathBuf, T), TempNameError> {
        for attempt in 1..=max_attempts {
            let Some(name) = draw_from(suffixes, template) else {
                trace!(attempt, "Discarded placeholder draw");
                continue;
            };
            let path = PathBuf::from(name);
            match create(&path) {
                Ok(out) => return Ok((path, out)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    trace!(attempt, path = %path.display(), "Name taken; retrying");
                }
                Err(source) => return Err(TempNameError::CreationFailed { path, source }),
            }
        }
        warn!(template = template.as_str(), attempts = max_attempts, "Gave up looking for an unused name");
        Err(TempNameError::Exhausted {
            template: template.as_str().to_owned(),
            attempts: max_attempts,
        })
    }

    fn draw(&mut self, template: &Template) -> Option<String> {
        draw_from(&mut self.suffixes, template)
    }

    fn exhausted(&self, template: &Template) -> TempNameError {
        TempNameError::Exhausted {
            template: template.as_str().to_owned(),
            attempts: self.max_attempts,
        }
    }
}

/// One suffix draw rendered into the template, or None if it reproduced the placeholder.
fn draw_from<S: SuffixSource>(suffixes: &mut S, template: &Template) -> Option<String> {
    let suffix: [u8; SUFFIX_LEN] = suffixes.next_suffix();
    if suffix.as_slice() == PLACEHOLDER.as_bytes() {
        return None;
    }
    Some(template.render(&suffix))
}

/// `mkdtemp(3)`: create a unique directory from `template`.
pub fn mkdtemp(template: &str) -> Result<PathBuf, TempNameError> {
    TempNameGenerator::os().generate_unique_directory(template)
}

/// `mkstemp(3)`: create and open a unique file from `template`.
pub fn mkstemp(template: &str) -> Result<(PathBuf, std::fs::File), TempNameError> {
    TempNameGenerator::os().generate_unique_file(template)
}
