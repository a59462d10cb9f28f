//! Note filename classification
//!
//! Every file in the diary directory is named after what it is, and the
//! name alone decides which navigation header it gets:
//!
//! | Pattern                          | Example                  | Variant      |
//! |----------------------------------|--------------------------|--------------|
//! | `YYYY-MM-DD`                     | `2019-01-17.md`          | DailyJournal |
//! | `YYYY-MM-DD <t>` / `YYYYMMDD-<t>`| `2020-04-26 Frankish.md` | TopicNote    |
//! | `YYYY-W<n>`                      | `2020-W19.md`            | WeekNote     |
//! | `YYYY-Q<1-4>`                    | `2020-Q1.md`             | QuarterNote  |
//! | `YYYY`                           | `2020.md`                | YearNote     |
//! | anything else                    | `Sheep like that.md`     | GenericNote  |
//!
//! Classification is mutually exclusive and total: the candidates are tried
//! in the fixed priority order above and the first match wins, with
//! GenericNote as the catch-all. A date-like prefix that fails calendar
//! validation (month 13, day 32) falls through to the next candidate rather
//! than erroring; only a missing `.md` extension is a hard failure.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use crate::core::error::{Result, WikiError};
use crate::core::periods::{Quarter, Week};

/// The note file suffix; files without it are not notes at all.
pub const NOTE_EXTENSION: &str = ".md";

lazy_static! {
    // Prefix matches, not full matches: trailing characters after the
    // period token are tolerated.
    static ref WEEK_RE: Regex = Regex::new(r"^(20\d{2})-W(\d{1,2})").unwrap();
    static ref QUARTER_RE: Regex = Regex::new(r"^(20\d{2})-Q([1-4])").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"^(19|20)\d{2}$").unwrap();
}

/// What a note file is, decided purely from its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WikiFile {
    /// A plain dated journal entry with no trailing title
    DailyJournal(NaiveDate),
    /// A dated note about a named, recurring subject
    TopicNote { date: NaiveDate, title: String },
    /// A weekly summary note
    WeekNote(Week),
    /// A quarterly summary note
    QuarterNote(Quarter),
    /// A yearly summary note
    YearNote(i32),
    /// Anything else; degrades to a bare title heading
    GenericNote(String),
}

impl WikiFile {
    /// Classify a filename (directory components are ignored) into exactly
    /// one note kind.
    ///
    /// Fails with [`WikiError::NotANoteFile`] when the name lacks the note
    /// extension, and with [`WikiError::InvalidPeriod`] when a week token
    /// names a week that does not exist (e.g. `2020-W0.md`).
    pub fn classify(filename: &str) -> Result<WikiFile> {
        let name = Path::new(filename)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let stem = name
            .strip_suffix(NOTE_EXTENSION)
            .ok_or_else(|| WikiError::not_a_note_file(&name))?;

        if let Some((date, title)) = parse_date_prefix(stem) {
            if title.is_empty() {
                return Ok(WikiFile::DailyJournal(date));
            }
            return Ok(WikiFile::TopicNote { date, title });
        }

        if let Some(caps) = WEEK_RE.captures(stem) {
            let year = caps[1].parse().expect("two-digit-prefixed year");
            let week_no = caps[2].parse().expect("week digits");
            return Ok(WikiFile::WeekNote(Week::new(year, week_no)?));
        }

        if let Some(caps) = QUARTER_RE.captures(stem) {
            let year = caps[1].parse().expect("two-digit-prefixed year");
            let quarter = caps[2].parse().expect("single quarter digit");
            return Ok(WikiFile::QuarterNote(Quarter::new(year, quarter)?));
        }

        if YEAR_RE.is_match(stem) {
            return Ok(WikiFile::YearNote(stem.parse().expect("four digits")));
        }

        Ok(WikiFile::GenericNote(normalize_title(stem)))
    }
}

/// Try to read a calendar date off the front of a stem.
///
/// Both `YYYYMMDD` and `YYYY-MM-DD` prefixes are accepted; the dashed form
/// is normalized away first. Whatever follows the separator slot after the
/// date is the raw title. Returns `None` when the prefix is not a valid
/// calendar date, letting classification fall through.
fn parse_date_prefix(stem: &str) -> Option<(NaiveDate, String)> {
    let normalized: String = if stem.chars().take(8).any(|c| c == '-') {
        let cut = stem
            .char_indices()
            .nth(10)
            .map(|(i, _)| i)
            .unwrap_or(stem.len());
        let mut s = stem[..cut].replace('-', "");
        s.push_str(&stem[cut..]);
        s
    } else {
        stem.to_string()
    };

    let digits: String = normalized.chars().take(8).collect();
    if digits.len() < 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let year: i32 = digits[..4].parse().ok()?;
    let month: u32 = digits[4..6].parse().ok()?;
    let day: u32 = digits[6..8].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let title: String = normalized.chars().skip(9).collect();
    Some((date, normalize_title(&title)))
}

/// Normalize a topic or generic title: separators become spaces and each
/// word is capitalized, so `"sheep-like-that"` becomes `"Sheep Like That"`.
pub fn normalize_title(raw: &str) -> String {
    raw.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
