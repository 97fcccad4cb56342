//! Integration tests for the feed commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::amity_cmd;

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    amity_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_list_shows_starter_feed_newest_first() {
    let temp = setup();

    let output = amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("[Date Ideas] Go mini golfing!"));
    assert!(stdout.contains("+23 / -2"));
    assert!(stdout.contains("(you voted up)"));

    // The meme is one day old, the mini golf post two; newest sorts first
    let meme = stdout.find("[Memes]").unwrap();
    let golf = stdout.find("Go mini golfing").unwrap();
    assert!(meme < golf);
}

#[test]
fn test_list_filters_by_category() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("list")
        .arg("--category")
        .arg("dates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Go mini golfing"))
        .stdout(predicate::str::contains("cooking class"))
        .stdout(predicate::str::contains("[Memes]").not());
}

#[test]
fn test_vote_up_increments() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("vote")
        .arg("1")
        .arg("up")
        .assert()
        .success()
        .stdout(predicate::str::contains("+24 / -2 (your vote: up)"));
}

#[test]
fn test_same_vote_again_clears_it() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("vote")
        .arg("1")
        .arg("up")
        .assert()
        .success();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("vote")
        .arg("1")
        .arg("up")
        .assert()
        .success()
        .stdout(predicate::str::contains("+23 / -2 (your vote: none)"));
}

#[test]
fn test_opposite_vote_swaps() {
    let temp = setup();

    // Item 2 starts at +45 / -1 with an up vote held
    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("vote")
        .arg("2")
        .arg("down")
        .assert()
        .success()
        .stdout(predicate::str::contains("+44 / -2 (your vote: down)"));
}

#[test]
fn test_add_posts_item() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("add")
        .arg("tips")
        .arg("Meal prep on Sundays saves the whole week.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Posted to Life Tips"));

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal prep on Sundays"))
        .stdout(predicate::str::contains("+0 / -0"));
}

#[test]
fn test_add_anonymous_is_marked() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("add")
        .arg("spiritual")
        .arg("Fasting with a purpose changed my month.")
        .arg("--anonymous")
        .assert()
        .success();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("list")
        .arg("--category")
        .arg("spiritual")
        .assert()
        .success()
        .stdout(predicate::str::contains("anonymous"));
}

#[test]
fn test_invalid_vote_word_fails() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("vote")
        .arg("1")
        .arg("sideways")
        .assert()
        .failure();
}

#[test]
fn test_vote_unknown_id_hints_feed() {
    let temp = setup();

    amity_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("vote")
        .arg("999")
        .arg("up")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("amity feed list"));
}
