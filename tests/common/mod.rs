//! Common test utilities for integration tests.
//!
//! This module provides a throwaway data directory and helpers for building
//! font archives.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use tdiary::config::AppPaths;

/// A temporary data directory laid out like the real one
pub struct TestData {
    dir: TempDir,
    pub paths: AppPaths,
}

impl TestData {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let paths = AppPaths::new(dir.path());
        Self { dir, paths }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_user_settings(&self, json: &str) {
        fs::write(&self.paths.user_settings, json).expect("Failed to write user settings");
    }

    pub fn write_default_settings(&self, json: &str) {
        fs::write(&self.paths.default_settings, json).expect("Failed to write default settings");
    }

    pub fn read_user_settings(&self) -> serde_json::Value {
        let text = fs::read_to_string(&self.paths.user_settings).expect("No user settings file");
        serde_json::from_str(&text).expect("User settings are not JSON")
    }

    /// Build `<root>/<file_name>` holding `entries` (path in archive, bytes)
    pub fn zip(&self, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = self.root().join(file_name);
        let file = File::create(&path).expect("Failed to create zip");
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, bytes) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).expect("Failed to add dir");
            } else {
                writer.start_file(*name, options).expect("Failed to start file");
                writer.write_all(bytes).expect("Failed to write entry");
            }
        }
        writer.finish().expect("Failed to finish zip");
        path
    }

    /// Build `<root>/<file_name>` with one stored entry whose bytes no longer
    /// match the recorded checksum
    pub fn corrupt_zip(&self, file_name: &str, entry: &str) -> PathBuf {
        const DATA: &[u8] = b"REGULARFONTDATA";
        let path = self.root().join(file_name);
        let file = File::create(&path).expect("Failed to create zip");
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer.start_file(entry, options).expect("Failed to start file");
        writer.write_all(DATA).expect("Failed to write entry");
        writer.finish().expect("Failed to finish zip");

        let mut bytes = fs::read(&path).expect("Failed to read zip");
        let at = bytes
            .windows(DATA.len())
            .position(|w| w == DATA)
            .expect("Entry data not stored verbatim");
        bytes[at..at + DATA.len()].fill(b'X');
        fs::write(&path, bytes).expect("Failed to rewrite zip");
        path
    }

    /// Install a package directly into the fonts root
    pub fn install_package(&self, name: &str, files: &[&str]) {
        let dir = self.paths.fonts_dir.join(name);
        fs::create_dir_all(&dir).expect("Failed to create package");
        for file in files {
            fs::write(dir.join(file), b"font").expect("Failed to write font file");
        }
    }

    /// Names of the entries directly under the fonts root, sorted
    pub fn fonts_root_entries(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.paths.fonts_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestData {
    fn default() -> Self {
        Self::new()
    }
}
