//! Font package storage
//!
//! A font package is one directory under the fonts root, named after the
//! family, holding up to four style files told apart by their file name
//! suffix (`Inter-Regular.ttf`, `Inter-BoldItalic.ttf`, ...).

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

use super::FontError;

/// Font used when no package is applied
pub const DEFAULT_FONT: &str = "Roboto";

/// Extensions recognized as font files (lowercase)
pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Suffix appended to the scratch directory next to a package
pub const SCRATCH_SUFFIX: &str = "_tmp";

/// Style suffix right before the extension: `-Regular.ttf`, `_bold.otf`, ` Italic.ttf`
static STYLE_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[-_ ](regular|bold|italic|bolditalic)\.(?:ttf|otf)$")
        .expect("Invalid style suffix regex")
});

/// One rendering of a font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 4] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
    ];

    /// Lowercase suffix key as it appears in file names
    pub fn key(self) -> &'static str {
        match self {
            FontVariant::Regular => "regular",
            FontVariant::Bold => "bold",
            FontVariant::Italic => "italic",
            FontVariant::BoldItalic => "bolditalic",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

/// Whether `path` has a font file extension
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Folder name → name shown to the user
pub fn display_name(folder: &str) -> String {
    folder.replace('_', " ")
}

/// Name shown to the user → folder / registration name
pub fn storage_name(display: &str) -> String {
    display.replace(' ', "_")
}

/// Style named by the suffix right before the extension, if any
pub fn style_suffix(file_name: &str) -> Option<FontVariant> {
    let caps = STYLE_SUFFIX_REGEX.captures(file_name)?;
    FontVariant::from_key(&caps[1].to_ascii_lowercase())
}

/// First file below `dir` (recursive, sorted by name) whose suffix names
/// `variant`
pub fn find_file_by_style(dir: &Path, variant: FontVariant) -> Result<Option<PathBuf>, FontError> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .and_then(style_suffix)
            .is_some_and(|found| found == variant);
        if matches {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}

/// Locate the directory holding the font files of an extracted archive.
///
/// 1. the scratch root itself, when font files sit directly in it;
/// 2. an immediate subdirectory whose name contains `font_name`
///    (case-insensitive);
/// 3. the first directory of a recursive walk that holds a font file.
pub fn find_font_folder(scratch: &Path, font_name: &str) -> Result<Option<PathBuf>, FontError> {
    if has_font_files(scratch)? {
        return Ok(Some(scratch.to_path_buf()));
    }

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(scratch)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    subdirs.sort();

    let needle = font_name.to_lowercase();
    let named = subdirs.into_iter().find(|dir| {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    });
    if named.is_some() {
        return Ok(named);
    }

    for entry in WalkDir::new(scratch).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() && has_font_files(entry.path())? {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}

/// Whether `dir` directly contains at least one font file
fn has_font_files(dir: &Path) -> Result<bool, FontError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_font_file(&path) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Unpack a font archive into a package directory under `fonts_root`.
///
/// The archive's file stem names the package. Extraction goes through a
/// scratch directory that is removed on every exit path. Returns the package
/// name.
pub fn extract_package(fonts_root: &Path, zip_path: &Path) -> Result<String, FontError> {
    let file = File::open(zip_path).map_err(|_| FontError::InvalidArchive)?;
    let mut archive = ZipArchive::new(file).map_err(|_| FontError::InvalidArchive)?;

    let font_name = zip_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or(FontError::InvalidArchive)?
        .to_string();
    let target_dir = fonts_root.join(&font_name);
    let scratch = fonts_root.join(format!("{font_name}{SCRATCH_SUFFIX}"));

    if scratch.exists() {
        let _ = fs::remove_dir_all(&scratch);
    }
    fs::create_dir_all(&scratch)?;
    let scratch = scopeguard::guard(scratch, |dir| {
        if let Err(e) = fs::remove_dir_all(&dir) {
            warn!(path = %dir.display(), error = %e, "failed to remove scratch directory");
        }
    });

    archive.extract(&*scratch)?;
    debug!(archive = %zip_path.display(), entries = archive.len(), "archive extracted");

    let folder = find_font_folder(&scratch, &font_name)?.ok_or(FontError::NoFontFiles)?;
    if find_file_by_style(&folder, FontVariant::Regular)?.is_none() {
        return Err(FontError::MissingRegular);
    }

    let mut files = Vec::new();
    for variant in FontVariant::ALL {
        if let Some(path) = find_file_by_style(&folder, variant)? {
            files.push(path);
        }
    }

    if target_dir.exists() {
        fs::remove_dir_all(&target_dir)?;
    }
    fs::create_dir_all(&target_dir)?;
    for path in &files {
        if let Some(file_name) = path.file_name() {
            fs::copy(path, target_dir.join(file_name))?;
        }
    }

    Ok(font_name)
}

/// Result of deleting every package under the fonts root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The fonts root does not exist
    RootMissing,
    /// The fonts root holds no package directories
    Empty,
    Deleted {
        count: usize,
        /// Packages that could not be removed
        failed: Vec<String>,
    },
}

/// Remove every package directory under `fonts_root`, continuing past
/// failures.
pub fn delete_all_packages(fonts_root: &Path) -> Result<DeleteOutcome, FontError> {
    delete_all_packages_with(fonts_root, |dir| fs::remove_dir_all(dir))
}

/// [`delete_all_packages`] with a custom `remove` for each package directory
pub fn delete_all_packages_with<F>(
    fonts_root: &Path,
    mut remove: F,
) -> Result<DeleteOutcome, FontError>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    if !fonts_root.is_dir() {
        return Ok(DeleteOutcome::RootMissing);
    }

    let mut packages = Vec::new();
    for entry in fs::read_dir(fonts_root)? {
        let path = entry?.path();
        if path.is_dir() {
            packages.push(path);
        }
    }
    if packages.is_empty() {
        return Ok(DeleteOutcome::Empty);
    }
    packages.sort();

    let mut count = 0;
    let mut failed = Vec::new();
    for path in packages {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match remove(&path) {
            Ok(()) => count += 1,
            Err(e) => {
                warn!(package = %name, error = %e, "failed to delete font package");
                failed.push(name);
            }
        }
    }

    Ok(DeleteOutcome::Deleted { count, failed })
}

/// Display names of packages holding at least one font file, sorted
/// case-insensitively.
pub fn list_packages(fonts_root: &Path) -> Result<Vec<String>, FontError> {
    if !fonts_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(fonts_root)? {
        let path = entry?.path();
        if !path.is_dir() || !has_font_files(&path)? {
            continue;
        }
        if let Some(folder) = path.file_name().and_then(|n| n.to_str()) {
            names.push(display_name(folder));
        }
    }
    names.sort_by_key(|name| name.to_lowercase());
    Ok(names)
}
