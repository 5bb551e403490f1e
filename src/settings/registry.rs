//! Registered font families
//!
//! The registry is what the renderer consults to resolve a family name to
//! font files. It is rebuilt from the fonts root on every registration pass.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::fonts::{self, FontVariant};

/// Font files of one family, by variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontFamily {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
    pub italic: Option<PathBuf>,
    pub bold_italic: Option<PathBuf>,
}

impl FontFamily {
    pub fn get(&self, variant: FontVariant) -> Option<&Path> {
        match variant {
            FontVariant::Regular => self.regular.as_deref(),
            FontVariant::Bold => self.bold.as_deref(),
            FontVariant::Italic => self.italic.as_deref(),
            FontVariant::BoldItalic => self.bold_italic.as_deref(),
        }
    }

    pub fn set(&mut self, variant: FontVariant, path: PathBuf) {
        let slot = match variant {
            FontVariant::Regular => &mut self.regular,
            FontVariant::Bold => &mut self.bold,
            FontVariant::Italic => &mut self.italic,
            FontVariant::BoldItalic => &mut self.bold_italic,
        };
        *slot = Some(path);
    }

    pub fn variant_count(&self) -> usize {
        FontVariant::ALL
            .into_iter()
            .filter(|v| self.get(*v).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.variant_count() == 0
    }
}

/// Classify a font file by the hyphenated style marker in its name.
///
/// Bold-italic is checked before bold and italic so that `X-BoldItalic.ttf`
/// is not taken for either of them.
pub fn classify(file_name: &str) -> Option<FontVariant> {
    let lower = file_name.to_lowercase();
    if lower.contains("-bolditalic") {
        Some(FontVariant::BoldItalic)
    } else if lower.contains("-bold") {
        Some(FontVariant::Bold)
    } else if lower.contains("-italic") {
        Some(FontVariant::Italic)
    } else if lower.contains("-regular") {
        Some(FontVariant::Regular)
    } else {
        None
    }
}

/// Family name → registered files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontRegistry {
    families: BTreeMap<String, FontFamily>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a family; empty families are ignored
    pub fn register(&mut self, name: impl Into<String>, family: FontFamily) {
        if !family.is_empty() {
            self.families.insert(name.into(), family);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FontFamily> {
        self.families.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Build a registry from every package directory under `fonts_root`.
///
/// A missing root yields an empty registry. Within a package, the first file
/// (by name) of each variant wins.
pub fn scan_fonts_root(fonts_root: &Path) -> io::Result<FontRegistry> {
    let mut registry = FontRegistry::new();
    if !fonts_root.is_dir() {
        return Ok(registry);
    }

    let mut packages = Vec::new();
    for entry in fs::read_dir(fonts_root)? {
        let path = entry?.path();
        if path.is_dir() {
            packages.push(path);
        }
    }
    packages.sort();

    for package in packages {
        let Some(name) = package.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&package)? {
            let path = entry?.path();
            if path.is_file() && fonts::is_font_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        let mut family = FontFamily::default();
        for path in files {
            let variant = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(classify);
            if let Some(variant) = variant
                && family.get(variant).is_none()
            {
                family.set(variant, path);
            }
        }

        debug!(family = name, variants = family.variant_count(), "scanned font package");
        registry.register(name, family);
    }

    Ok(registry)
}
