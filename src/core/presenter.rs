//! Terminal presentation of topic listings
//!
//! Rendering is separated from the index queries so the commands stay
//! testable: these functions take query results and return the text to
//! print, nothing more.

use chrono::NaiveDate;

use crate::core::topics::TopicActivity;

/// One line per recurring topic, title column padded for alignment.
pub fn format_recent_topics(topics: &[TopicActivity]) -> String {
    let mut out = String::new();
    for topic in topics {
        out.push_str(&format!("{:<35} {}\n", topic.title, topic.last_seen));
    }
    out
}

/// A topic name followed by its indented dates, most recent first.
pub fn format_timeline(title: &str, dates: &[NaiveDate]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for date in dates {
        out.push_str(&format!("    {date}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_recent_topics() {
        let topics = vec![
            TopicActivity {
                title: "Frankish".into(),
                last_seen: date(2020, 5, 10),
            },
            TopicActivity {
                title: "Garden".into(),
                last_seen: date(2020, 5, 2),
            },
        ];
        let out = format_recent_topics(&topics);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Frankish"));
        assert!(lines[0].ends_with("2020-05-10"));
    }

    #[test]
    fn test_format_timeline() {
        let out = format_timeline("Frankish", &[date(2020, 5, 10), date(2020, 4, 26)]);
        assert_eq!(out, "Frankish\n    2020-05-10\n    2020-04-26\n");
    }
}
