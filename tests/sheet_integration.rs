use assert_cmd::Command;
use predicates::prelude::*;

fn grind(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("grind").unwrap();
    cmd.env("GRIND_HOME", home);
    cmd
}

#[test]
fn test_list_shows_collapsed_topic_headers() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Arrays"))
        .stdout(predicates::str::contains("0/5 solved"))
        .stdout(predicates::str::contains("31 questions shown"))
        // Collapsed by default: no question rows.
        .stdout(predicates::str::contains("Two Sum").not());
}

#[test]
fn test_open_flag_expands_one_topic() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("list")
        .arg("--open")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Two Sum"))
        .stdout(predicates::str::contains("Trapping Rain Water"))
        // Topic 2 stays collapsed.
        .stdout(predicates::str::contains("Valid Anagram").not());
}

#[test]
fn test_solve_updates_the_header_count_and_persists() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("solve")
        .arg("1-1")
        .assert()
        .success()
        .stdout(predicates::str::contains("solved"))
        .stdout(predicates::str::contains("Two Sum"));

    assert!(temp_dir.path().join("progress.json").exists());

    grind(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("1/5 solved"));
}

#[test]
fn test_solve_twice_toggles_back() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path()).arg("solve").arg("1-1").assert().success();
    grind(temp_dir.path())
        .arg("solve")
        .arg("1-1")
        .assert()
        .success()
        .stdout(predicates::str::contains("unsolved"));

    grind(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("0/5 solved"));
}

#[test]
fn test_status_filter_drops_solved_questions() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path()).arg("solve").arg("1-1").assert().success();

    grind(temp_dir.path())
        .arg("list")
        .arg("--status")
        .arg("solved")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicates::str::contains("Two Sum"))
        .stdout(predicates::str::contains("1 questions shown"));
}

#[test]
fn test_impossible_filter_renders_the_empty_state() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("list")
        .arg("--status")
        .arg("solved")
        .assert()
        .success()
        .stdout(predicates::str::contains("No questions match your filters"))
        .stdout(predicates::str::contains("Try removing or changing some filters"))
        // Only the empty state, no topic sections.
        .stdout(predicates::str::contains("Arrays").not());
}

#[test]
fn test_search_filter_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("list")
        .arg("--search")
        .arg("TWO SUM")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicates::str::contains("Two Sum"))
        .stdout(predicates::str::contains("1 questions shown"));
}

#[test]
fn test_note_set_and_view_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("note")
        .arg("1-1")
        .arg("--text")
        .arg("hash map, one pass")
        .assert()
        .success()
        .stdout(predicates::str::contains("Note saved"));

    grind(temp_dir.path())
        .arg("view")
        .arg("1-1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Two Sum"))
        .stdout(predicates::str::contains("hash map, one pass"))
        .stdout(predicates::str::contains("leetcode.com"));
}

#[test]
fn test_revise_marks_without_solving() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("revise")
        .arg("2-1")
        .assert()
        .success()
        .stdout(predicates::str::contains("marked for revision"));

    grind(temp_dir.path())
        .arg("list")
        .arg("--revision")
        .arg("marked")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicates::str::contains("1 questions shown"));

    grind(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("0/4 solved"));
}

#[test]
fn test_malformed_progress_fails_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("progress.json"), "{ not json at all").unwrap();

    grind(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("0/5 solved"));
}

#[test]
fn test_unknown_key_is_a_hard_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("solve")
        .arg("99-99")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Question not found: 99-99"));

    grind(temp_dir.path())
        .arg("solve")
        .arg("banana")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid question key"));
}

#[test]
fn test_random_prints_a_spotlight_panel() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .arg("random")
        .assert()
        .success()
        .stdout(predicates::str::contains("Random question"))
        .stdout(predicates::str::contains("Difficulty:"));
}

#[test]
fn test_custom_sheet_via_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let sheet_path = temp_dir.path().join("tiny.json");
    std::fs::write(
        &sheet_path,
        r#"[{"id": 1, "name": "Warmups", "questions": [
            {"id": 1, "title": "FizzBuzz", "difficulty": "easy"}
        ]}]"#,
    )
    .unwrap();

    grind(temp_dir.path())
        .arg("--sheet")
        .arg(sheet_path.to_str().unwrap())
        .arg("list")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicates::str::contains("Warmups"))
        .stdout(predicates::str::contains("FizzBuzz"))
        .stdout(predicates::str::contains("1 questions shown"));
}

#[test]
fn test_config_sheet_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let sheet_path = temp_dir.path().join("tiny.json");
    std::fs::write(
        &sheet_path,
        r#"[{"id": 1, "name": "Warmups", "questions": [
            {"id": 1, "title": "FizzBuzz", "difficulty": "easy"}
        ]}]"#,
    )
    .unwrap();

    grind(temp_dir.path())
        .arg("config")
        .arg("sheet")
        .arg(sheet_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicates::str::contains("sheet = "));

    // The configured sheet now drives list with no flag.
    grind(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Warmups"));

    grind(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("tiny.json"));
}

#[test]
fn test_no_subcommand_defaults_to_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    grind(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("31 questions shown"));
}
