//! Topic detection across the note directory
//!
//! A topic is any named subject with dated notes: `2020-03-01 Frankish.md`
//! and `2020-04-26 Frankish.md` are two occurrences of the topic
//! "Frankish". The [`TopicIndex`] is an immutable snapshot of which topics
//! exist and on which dates, built by one flat scan of the note directory.
//! It is rebuilt per operation and never cached across calls.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::{Result, WikiError};
use crate::core::wikifile::{WikiFile, NOTE_EXTENSION};

#[cfg(test)]
use mockall::automock;

/// Trait for enumerating note files
///
/// This trait allows for mocking in tests and alternative implementations
/// (e.g. in-memory fixtures).
#[cfg_attr(test, automock)]
pub trait NoteSource {
    /// List the note filenames directly inside `dir`, non-recursive,
    /// filtered to the note extension.
    fn list_notes(&self, dir: &Path) -> Result<Vec<String>>;
}

/// Default note source backed by the filesystem
pub struct DirNoteSource;

impl NoteSource for DirNoteSource {
    fn list_notes(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|source| WikiError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(NOTE_EXTENSION) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// A topic with its most recent occurrence, as returned by
/// [`TopicIndex::recent_topics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicActivity {
    pub title: String,
    pub last_seen: NaiveDate,
}

/// Immutable snapshot of all topics observed in the note directory
#[derive(Debug, Clone, Default)]
pub struct TopicIndex {
    topics: BTreeMap<String, BTreeSet<NaiveDate>>,
}

impl TopicIndex {
    /// Build the index by classifying every note in `dir`.
    ///
    /// Only `TopicNote` entries contribute; journals, period notes and
    /// generic notes are skipped, as are filenames that fail to classify.
    /// An unreadable directory is fatal.
    pub fn build(source: &dyn NoteSource, dir: &Path) -> Result<Self> {
        let mut topics: BTreeMap<String, BTreeSet<NaiveDate>> = BTreeMap::new();
        for name in source.list_notes(dir)? {
            if let Ok(WikiFile::TopicNote { date, title }) = WikiFile::classify(&name) {
                topics.entry(title).or_default().insert(date);
            }
        }
        Ok(Self { topics })
    }

    /// The ordered set of dates recorded for an exact normalized title.
    /// Unknown titles yield an empty set.
    pub fn lookup(&self, title: &str) -> BTreeSet<NaiveDate> {
        self.topics.get(title).cloned().unwrap_or_default()
    }

    /// Number of distinct topics in the snapshot.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Recurring topics (more than one occurrence), most recently touched
    /// first, ties broken by title. Topics whose latest occurrence is older
    /// than `max_age_days` before `today` are dropped unless `include_all`.
    pub fn recent_topics(
        &self,
        today: NaiveDate,
        max_age_days: i64,
        include_all: bool,
    ) -> Vec<TopicActivity> {
        let mut included: Vec<TopicActivity> = self
            .topics
            .iter()
            .filter(|(_, dates)| dates.len() > 1)
            .filter_map(|(title, dates)| {
                let last_seen = *dates.iter().next_back()?;
                if include_all || (today - last_seen).num_days() <= max_age_days {
                    Some(TopicActivity {
                        title: title.clone(),
                        last_seen,
                    })
                } else {
                    None
                }
            })
            .collect();

        included.sort_by(|a, b| b.last_seen.cmp(&a.last_seen).then(a.title.cmp(&b.title)));
        included
    }

    /// Dates for one topic, most recent first, truncated to `limit` unless
    /// `show_all`.
    pub fn topic_timeline(&self, title: &str, limit: usize, show_all: bool) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.lookup(title).into_iter().rev().collect();
        if !show_all {
            dates.truncate(limit);
        }
        dates
    }
}
