//! Heading-aware Markdown chunking for retrieval pipelines
//!
//! A document flows through three stages:
//!
//! 1. **Heading splitter** ([`segment`]): partitions the text into
//!    `(heading, body)` [`Segment`]s at one configured heading level.
//! 2. **Size normalizer** ([`normalize`]): re-splits oversized segments on
//!    paragraph boundaries and folds undersized chunks into a neighbour.
//! 3. **Emitter** ([`emitter`]): writes each [`Chunk`] to a numbered file
//!    and records an `index.json` manifest.
//!
//! # Example
//!
//! ```rust
//! use mdchunk_core::{ChunkerConfig, MarkdownChunker};
//!
//! let config = ChunkerConfig::builder().min_chars(0).build().unwrap();
//! let chunker = MarkdownChunker::new(config).unwrap();
//!
//! let chunks = chunker.chunk_text("# A\n\nhello\n\n# B\n\nworld");
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].text, "# A\n\nhello");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod input;
pub mod normalize;
pub mod pipeline;
pub mod sanitize;
pub mod segment;
pub mod types;

// Re-export key types
pub use config::{ChunkerConfig, ChunkerConfigBuilder};
pub use emitter::{emit_all, Emitter, MANIFEST_FILE};
pub use error::{ChunkError, Result};
pub use input::Input;
pub use normalize::{merge_undersized, split_oversized, split_paragraphs};
pub use pipeline::{chunk_markdown_file, MarkdownChunker};
pub use sanitize::sanitize_filename;
pub use segment::HeadingSplitter;
pub use types::{Chunk, ManifestEntry, Segment};
