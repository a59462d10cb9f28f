//! Core module for wikidiary
//!
//! The calendar period model and the filename-classification/header
//! pipeline, kept free of terminal and process concerns.
//!
//! # Architecture
//!
//! - `periods`: Week and Quarter value types with ISO-8601 arithmetic
//! - `wikifile`: filename classification into the WikiFile sum type
//! - `topics`: NoteSource trait + TopicIndex directory snapshot
//! - `header`: pure navigation-header rendering per note kind
//! - `notebook`: checksum, header merge and filename glue
//! - `models`: configuration
//! - `presenter`: plain-text rendering of topic listings
//! - `error`: error types using thiserror

pub mod error;
pub mod header;
pub mod models;
pub mod notebook;
pub mod periods;
pub mod presenter;
pub mod topics;
pub mod wikifile;

// Re-export commonly used types
pub use error::{Result, WikiError};
pub use models::{WikiConfig, CONFIG_FILE};
pub use periods::{iter_dates, next_working_day, prev_working_day, Quarter, Week};
pub use topics::{DirNoteSource, NoteSource, TopicActivity, TopicIndex};
pub use wikifile::{normalize_title, WikiFile, NOTE_EXTENSION};
