//! wikidiary - personal diary/wiki header engine
//!
//! One markdown file per day, week, quarter, year, or topic; this library
//! classifies a note filename, resolves where the note sits in the
//! calendar (ISO weeks, calendar quarters) or in its topic's timeline, and
//! renders the navigation header that belongs at the top of the file.
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs + src/core/**: pure logic, no terminal concerns
//! - **bin/wiki.rs**: thin CLI wrapper that calls the library
//!
//! Classification is a pure function from filename to a [`WikiFile`]
//! variant; header rendering is a pure function from that variant (plus,
//! for topic notes, the [`TopicIndex`] snapshot) to text. The only IO in
//! the library is the flat directory scan behind the index and the
//! checksum/merge glue in [`core::notebook`].

pub mod core;

pub use crate::core::error::{Result, WikiError};
pub use crate::core::header;
pub use crate::core::models::{WikiConfig, CONFIG_FILE};
pub use crate::core::notebook;
pub use crate::core::periods::{iter_dates, next_working_day, prev_working_day, Quarter, Week};
pub use crate::core::presenter;
pub use crate::core::topics::{DirNoteSource, NoteSource, TopicActivity, TopicIndex};
pub use crate::core::wikifile::{normalize_title, WikiFile, NOTE_EXTENSION};

/// Version of the wikidiary library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
