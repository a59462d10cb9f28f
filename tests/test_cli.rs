//! CLI integration tests
//!
//! These tests execute the binary and verify correct behavior for:
//! - Header generation per note kind
//! - Topic and timeline listings
//! - Header merging into existing notes
//! - Error handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a note directory with sample files
fn create_diary() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in [
        "2020-03-01 Frankish.md",
        "2020-04-26 Frankish.md",
        "2020-05-10 Frankish.md",
        "2020-05-12 Garden.md",
        "2020-05-01.md",
        "2020-W19.md",
        "2020.md",
        "Sheep like that.md",
    ] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    dir
}

fn wiki() -> Command {
    Command::cargo_bin("wiki").unwrap()
}

// ============================================================================
// Header generation
// ============================================================================

#[test]
fn test_daily_header() {
    let expected = "# 2019-01-17 W3 Thursday\n\n\
                    [[2019-01-16]] | [[2019 W3]] | [[2019-01-18]]\n\n\
                    ## Agenda\n\n\n\n\
                    ## Tasks\n";
    wiki()
        .arg("2019-01-17.md")
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn test_topic_header_with_neighbors() {
    let diary = create_diary();
    wiki()
        .arg("--dir")
        .arg(diary.path())
        .arg("2020-04-26 Frankish.md")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[[2020-03-01 Frankish]] | [[2020-04-26]] | [[Frankish]] | [[2020-05-10 Frankish]]",
        ));
}

#[test]
fn test_week_header() {
    wiki()
        .arg("2020-W19.md")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[[2020 W18]] | [[2020 Q2]] | [[2020 W20]]",
        ))
        .stdout(predicate::str::contains("- [[2020-05-08]]"));
}

#[test]
fn test_generic_header_never_fails() {
    wiki()
        .arg("Sheep like that.md")
        .assert()
        .success()
        .stdout(predicate::eq("# Sheep Like That\n"));
}

#[test]
fn test_not_a_note_file() {
    wiki()
        .arg("sheep")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a note file"));
}

#[test]
fn test_invalid_week_token() {
    wiki()
        .arg("2020-W0.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid period"));
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_merge_replaces_existing_navigation_line() {
    let diary = create_diary();
    fs::write(
        diary.path().join("2020.md"),
        "[[1999]] | [[Home]] | [[2001]]\n\n## Major life events\nmoved house\n",
    )
    .unwrap();

    wiki()
        .arg("--dir")
        .arg(diary.path())
        .arg("2020.md")
        .arg("--merge")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[2019]] | [[Home]] | [[2021]]"))
        .stdout(predicate::str::contains("moved house"))
        .stdout(predicate::str::contains("[[1999]]").not());
}

#[test]
fn test_merge_prepends_to_plain_content() {
    let diary = create_diary();
    fs::write(diary.path().join("Sheep like that.md"), "wool notes\n").unwrap();

    wiki()
        .arg("--dir")
        .arg(diary.path())
        .arg("Sheep like that.md")
        .arg("--merge")
        .assert()
        .success()
        .stdout(predicate::eq("# Sheep Like That\nwool notes\n"));
}

// ============================================================================
// Listings
// ============================================================================

#[test]
fn test_topics_listing_recurring_only() {
    let diary = create_diary();
    wiki()
        .arg("--dir")
        .arg(diary.path())
        .arg("--topics")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frankish"))
        .stdout(predicate::str::contains("2020-05-10"))
        .stdout(predicate::str::contains("Garden").not());
}

#[test]
fn test_topics_listing_age_window() {
    // fixture dates are far in the past; without --all nothing is recent
    let diary = create_diary();
    wiki()
        .arg("--dir")
        .arg(diary.path())
        .arg("--topics")
        .assert()
        .success()
        .stdout(predicate::eq(""));
}

#[test]
fn test_timeline_normalizes_topic_name() {
    let diary = create_diary();
    wiki()
        .arg("--dir")
        .arg(diary.path())
        .arg("--timeline")
        .arg("frankish")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Frankish\n"))
        .stdout(predicate::str::contains("    2020-05-10"))
        .stdout(predicate::str::contains("    2020-03-01"));
}

#[test]
fn test_unreadable_directory_is_fatal() {
    wiki()
        .arg("--dir")
        .arg("/no/such/diary")
        .arg("--topics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read note directory"));
}

#[test]
fn test_no_arguments_is_an_error() {
    wiki()
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to do"));
}
