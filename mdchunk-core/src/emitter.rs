//! Chunk file emitter
//!
//! Writes one Markdown file per chunk into an output directory and records a
//! [`ManifestEntry`] for each, then writes the manifest as `index.json`.

use crate::error::{ChunkError, Result};
use crate::sanitize::sanitize_filename;
use crate::types::{Chunk, ManifestEntry};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the manifest file written next to the chunks
pub const MANIFEST_FILE: &str = "index.json";

/// Writes chunks to numbered files in a directory
#[derive(Debug)]
pub struct Emitter {
    out_dir: PathBuf,
    prefix: String,
    manifest: Vec<ManifestEntry>,
}

impl Emitter {
    /// Create the output directory (and parents) and prepare to write.
    ///
    /// Files already present in the directory are left untouched.
    pub fn create(out_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|e| ChunkError::io(&out_dir, e))?;

        Ok(Self {
            out_dir,
            prefix: prefix.into(),
            manifest: Vec::new(),
        })
    }

    /// Output directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// File name the next emitted chunk with `heading` will receive
    pub fn next_file_name(&self, heading: &str) -> String {
        let sequence = self.manifest.len() + 1;
        let name = if heading.is_empty() {
            sanitize_filename(&format!("part_{sequence}"))
        } else {
            sanitize_filename(heading)
        };
        format!("{sequence:03}_{}_{name}.md", self.prefix)
    }

    /// Write `chunk` to its own file and record it in the manifest
    pub fn emit(&mut self, chunk: &Chunk) -> Result<ManifestEntry> {
        let file = self.next_file_name(&chunk.heading);
        let path = self.out_dir.join(&file);

        let text = chunk.text.trim_end();
        let mut contents = String::with_capacity(text.len() + 1);
        contents.push_str(text);
        contents.push('\n');
        fs::write(&path, contents).map_err(|e| ChunkError::io(&path, e))?;
        log::trace!("wrote {}", path.display());

        let entry = ManifestEntry {
            file,
            heading: chunk.heading.clone(),
            chars: text.chars().count(),
        };
        self.manifest.push(entry.clone());
        Ok(entry)
    }

    /// Write `index.json` and return the manifest
    pub fn finish(self) -> Result<Vec<ManifestEntry>> {
        let path = self.out_dir.join(MANIFEST_FILE);
        let file = File::create(&path).map_err(|e| ChunkError::io(&path, e))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.manifest)?;
        writer.flush().map_err(|e| ChunkError::io(&path, e))?;

        log::debug!(
            "wrote manifest with {} entries to {}",
            self.manifest.len(),
            path.display()
        );
        Ok(self.manifest)
    }
}

/// Emit every chunk into `out_dir` and write the manifest
pub fn emit_all(chunks: &[Chunk], out_dir: &Path, prefix: &str) -> Result<Vec<ManifestEntry>> {
    let mut emitter = Emitter::create(out_dir, prefix)?;
    for chunk in chunks {
        emitter.emit(chunk)?;
    }
    emitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let mut emitter = Emitter::create(temp_dir.path(), "page").unwrap();

        assert_eq!(emitter.next_file_name("Intro"), "001_page_Intro.md");
        assert_eq!(emitter.next_file_name(""), "001_page_part_1.md");

        emitter.emit(&Chunk::new("Intro", "# Intro\n\nhi")).unwrap();
        assert_eq!(emitter.next_file_name(""), "002_page_part_2.md");
        assert_eq!(
            emitter.next_file_name("Intro: Getting Started? / Overview"),
            "002_page_Intro_Getting_Started_Overview.md"
        );
    }

    #[test]
    fn test_emit_writes_trimmed_text_with_newline() {
        let temp_dir = TempDir::new().unwrap();
        let mut emitter = Emitter::create(temp_dir.path(), "chunk").unwrap();

        let entry = emitter.emit(&Chunk::new("A", "# A\n\nbody")).unwrap();
        assert_eq!(entry.file, "001_chunk_A.md");
        assert_eq!(entry.heading, "A");
        assert_eq!(entry.chars, 9);

        let written = fs::read_to_string(temp_dir.path().join("001_chunk_A.md")).unwrap();
        assert_eq!(written, "# A\n\nbody\n");
    }

    #[test]
    fn test_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        let emitter = Emitter::create(&nested, "page").unwrap();
        assert!(nested.is_dir());
        assert_eq!(emitter.out_dir(), nested.as_path());
    }

    #[test]
    fn test_manifest_written_pretty_and_unescaped() {
        let temp_dir = TempDir::new().unwrap();
        let chunks = vec![Chunk::new("概要", "# 概要\n\n本文です")];

        let manifest = emit_all(&chunks, temp_dir.path(), "page").unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest[0].file, "001_page_概要.md");

        let json = fs::read_to_string(temp_dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(json.contains("\"heading\": \"概要\""));
        assert!(json.starts_with("[\n  {\n    \"file\""));

        let parsed: Vec<ManifestEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_existing_files_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let stale = temp_dir.path().join("009_page_old.md");
        fs::write(&stale, "stale").unwrap();

        emit_all(&[Chunk::new("", "fresh")], temp_dir.path(), "page").unwrap();
        assert!(stale.exists());
        assert!(temp_dir.path().join("001_page_part_1.md").exists());
    }

    #[test]
    fn test_empty_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = emit_all(&[], temp_dir.path(), "page").unwrap();
        assert!(manifest.is_empty());

        let json = fs::read_to_string(temp_dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(json, "[]");
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_directory_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

        let result = Emitter::create(&locked, "page")
            .and_then(|mut emitter| emitter.emit(&Chunk::new("A", "# A")).map(|_| ()));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root ignores permission bits, so only check the error shape when it fails.
        if let Err(err) = result {
            assert!(matches!(err, ChunkError::Io { .. }));
        }
    }
}
