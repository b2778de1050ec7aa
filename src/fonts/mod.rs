//! Font loading utilities for the `resume_pdf` crate.
//!
//! genpdf lays text out with TrueType files.  The families offered by the editor are mapped
//! onto their metric-compatible Liberation fonts; any other family name is looked up as
//! `{name}-Regular.ttf` (plus bold/italic variants).  Fonts are always embedded, since the
//! built-in PDF fonts only encode Windows-1252 and would reject names such as `Łukasz`.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

use crate::style::DEFAULT_FONT;

/// Environment variable that points at a directory containing the font files.
pub const FONTS_DIR_ENV: &str = "RESUME_PDF_FONTS_DIR";

const SYSTEM_FONT_DIRS: &[&str] = &["/usr/share/fonts/truetype/liberation"];

const STYLE_SUFFIXES: &[&str] = &["Regular", "Bold", "Italic", "BoldItalic"];

struct KnownFamily {
    name: &'static str,
    file_stem: &'static str,
}

const KNOWN_FAMILIES: &[KnownFamily] = &[
    KnownFamily {
        name: "Helvetica",
        file_stem: "LiberationSans",
    },
    KnownFamily {
        name: "Times-Roman",
        file_stem: "LiberationSerif",
    },
    KnownFamily {
        name: "Courier",
        file_stem: "LiberationMono",
    },
];

fn known_family(name: &str) -> Option<&'static KnownFamily> {
    KNOWN_FAMILIES.iter().find(|family| family.name == name)
}

fn font_file_names(file_stem: &str) -> Vec<String> {
    STYLE_SUFFIXES
        .iter()
        .map(|suffix| format!("{file_stem}-{suffix}.ttf"))
        .collect()
}

fn default_file_stem() -> &'static str {
    known_family(DEFAULT_FONT)
        .map(|family| family.file_stem)
        .unwrap_or(DEFAULT_FONT)
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            candidates.push(bin_dir.join("assets/fonts"));
        }
    }

    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));
    candidates.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));

    candidates.dedup();
    candidates
}

fn missing_font_files(path: &Path, file_stem: &str) -> Vec<String> {
    font_file_names(file_stem)
        .into_iter()
        .filter(|name| !path.join(name).is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        if !candidate.is_dir() {
            attempts.push(format!("{} (directory missing)", candidate.display()));
            continue;
        }

        let missing = missing_font_files(&candidate, default_file_stem());
        if missing.is_empty() {
            return Ok(candidate);
        }
        attempts.push(format!(
            "{} (missing files [{}])",
            candidate.display(),
            missing.join(", ")
        ));
    }

    Err(Error::new(
        format!(
            "Unable to locate a font directory. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
    ))
}

/// A directory of TrueType files from which document font families are loaded.
#[derive(Clone, Debug)]
pub struct FontLibrary {
    directory: PathBuf,
}

impl FontLibrary {
    /// Searches the usual locations for a directory holding at least the default family.
    ///
    /// The search order is the [`FONTS_DIR_ENV`] variable, `assets/fonts` next to the running
    /// executable, `assets/fonts` in this crate, then the system Liberation font directory.
    pub fn locate() -> Result<Self, Error> {
        let directory = resolve_font_directory()?;
        debug!("using font directory {}", directory.display());
        Ok(Self { directory })
    }

    /// Uses `directory` without checking its contents.
    pub fn from_dir(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Loads the family named `name`, falling back to the default family on failure.
    pub fn family(&self, name: &str) -> Result<FontFamily<FontData>, Error> {
        match self.load(name) {
            Ok(family) => Ok(family),
            Err(err) if name != DEFAULT_FONT => {
                warn!(
                    "Font family '{}' unavailable ({}); falling back to '{}'.",
                    name, err, DEFAULT_FONT
                );
                self.load(DEFAULT_FONT)
            }
            Err(err) => Err(err),
        }
    }

    fn load(&self, name: &str) -> Result<FontFamily<FontData>, Error> {
        let file_stem = known_family(name).map_or(name, |family| family.file_stem);

        fonts::from_files(&self.directory, file_stem, None).map_err(|err| {
            Error::new(
                format!(
                    "Failed to load font family '{}' from {}: {}",
                    name,
                    self.directory.display(),
                    err
                ),
                io::Error::new(io::ErrorKind::Other, err.to_string()),
            )
        })
    }
}

/// Indicates whether a font directory with the default family can be found.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
