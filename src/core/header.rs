//! Navigation header rendering
//!
//! Pure functions from a classified note to the exact header text that
//! belongs at the top of it: a title line plus a prev/current/next link
//! line, and for period notes a bullet list of the contained periods.
//! Nothing here touches the filesystem; merging the text into a note is
//! the caller's job (see [`crate::core::notebook::merge_header`]).

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use crate::core::periods::{next_working_day, prev_working_day, Quarter, Week};
use crate::core::topics::TopicIndex;
use crate::core::wikifile::WikiFile;

/// Topic notes with this reserved title link up to their week instead of
/// to a topic page of their own.
const RESERVED_TODAY: &str = "Today";

/// Render the header for a classified note, consulting the topic index for
/// neighboring occurrences when the note is a topic note.
pub fn generate(file: &WikiFile, topics: &TopicIndex) -> String {
    match file {
        WikiFile::DailyJournal(date) => daily_header(*date),
        WikiFile::TopicNote { date, title } => topic_header(*date, title, &topics.lookup(title)),
        WikiFile::WeekNote(week) => week_header(*week),
        WikiFile::QuarterNote(quarter) => quarter_header(*quarter),
        WikiFile::YearNote(year) => year_header(*year),
        WikiFile::GenericNote(title) => generic_header(title),
    }
}

/// Header for a daily journal entry.
///
/// Neighbor links skip the weekend: Monday points back to Friday, Friday
/// points forward to Monday. The center link is the entry's ISO week.
pub fn daily_header(date: NaiveDate) -> String {
    let week = Week::from_date(date);
    format!(
        "# {date} W{week_no} {weekday}\n\n\
         [[{prev}]] | [[{week}]] | [[{next}]]\n\n\
         ## Agenda\n\n\n\n\
         ## Tasks",
        week_no = week.week_no(),
        weekday = date.format("%A"),
        prev = prev_working_day(date),
        next = next_working_day(date),
    )
}

/// Header for a topic note, linking the closest earlier and later
/// occurrences of the same topic when they exist.
pub fn topic_header(date: NaiveDate, title: &str, existing: &BTreeSet<NaiveDate>) -> String {
    let prev_link = existing
        .range(..date)
        .next_back()
        .map(|d| format!("[[{d} {title}]] | "))
        .unwrap_or_default();
    let next_link = existing
        .range((Excluded(date), Unbounded))
        .next()
        .map(|d| format!(" | [[{d} {title}]]"))
        .unwrap_or_default();

    let parent = if title == RESERVED_TODAY {
        Week::from_date(date).to_string()
    } else {
        title.to_string()
    };

    format!("# {date} {title}\n\n{prev_link}[[{date}]] | [[{parent}]]{next_link}\n")
}

/// Header for a weekly note: quarter above, adjacent weeks besides,
/// working days below.
pub fn week_header(week: Week) -> String {
    let mut parts = vec![
        format!("# {week}"),
        String::new(),
        format!(
            "[[{}]] | [[{}]] | [[{}]]",
            week.prev(),
            week.quarter(),
            week.next()
        ),
        String::new(),
        "## Days".to_string(),
        String::new(),
    ];
    for day in week.working_days() {
        parts.push(format!("- [[{day}]]"));
    }
    parts.join("\n")
}

/// Header for a quarterly note: year above, adjacent quarters besides,
/// overlapping ISO weeks below.
pub fn quarter_header(quarter: Quarter) -> String {
    let mut parts = vec![
        format!("# {quarter}"),
        String::new(),
        format!(
            "[[{}]] | [[{}]] | [[{}]]",
            quarter.prev(),
            quarter.year(),
            quarter.next()
        ),
        String::new(),
        "## Weeks".to_string(),
        String::new(),
    ];
    for week in quarter.weeks() {
        parts.push(format!("- [[{week}]]"));
    }
    parts.join("\n")
}

/// Header for a yearly note.
pub fn year_header(year: i32) -> String {
    format!(
        "# {year}\n\n[[{}]] | [[Home]] | [[{}]]\n\n## Major life events",
        year - 1,
        year + 1
    )
}

/// Fallback header: unrecognized names degrade to a bare heading.
pub fn generic_header(title: &str) -> String {
    format!("# {title}")
}
