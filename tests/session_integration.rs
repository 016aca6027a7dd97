use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn pal(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pal").unwrap();
    cmd.env("PAL_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("PAL_LOG");
    cmd
}

#[test]
fn contact_survives_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    pal(temp_dir.path())
        .write_stdin("add\nOlga\n0671234567\nolga@example.com\nKyiv, Ukraine\n26.06.1990\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully."))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(temp_dir.path().join("contacts.json").exists());
    assert!(temp_dir.path().join("notes.json").exists());

    // Lookups from the prompt ignore case
    pal(temp_dir.path())
        .write_stdin("find\nolga\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: Olga, Phones: 0671234567, Email: olga@example.com, \
             Address: Kyiv, Ukraine, Birthday: 26.06.1990",
        ));
}

#[test]
fn delete_persists() {
    let temp_dir = tempfile::tempdir().unwrap();

    pal(temp_dir.path())
        .write_stdin("add\nIvan\n\n\n\n\ndelete\nivan\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Ivan' deleted successfully."));

    pal(temp_dir.path())
        .write_stdin("show all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address book is empty."));
}

#[test]
fn notes_survive_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    pal(temp_dir.path())
        .write_stdin("add note\nLearn Python\nstudy, code\nclose\n")
        .assert()
        .success();

    pal(temp_dir.path())
        .write_stdin("search notes\npython\nfind tag\ncode\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Learn Python | Tags: study, code"))
        .stdout(predicate::str::contains("No notes").not());
}

#[test]
fn help_lists_commands() {
    let temp_dir = tempfile::tempdir().unwrap();

    pal(temp_dir.path())
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("show all"))
        .stdout(predicate::str::contains("search notes"));
}

#[test]
fn config_renames_data_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"contacts_file": "people.json"}"#,
    )
    .unwrap();

    pal(temp_dir.path())
        .write_stdin("add\nOlga\n\n\n\n\nexit\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("people.json").exists());
    assert!(!temp_dir.path().join("contacts.json").exists());
}

#[test]
fn corrupt_data_fails_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("contacts.json"),
        r#"[{"kind": "note", "text": "misplaced"}]"#,
    )
    .unwrap();

    pal(temp_dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type mismatch"));
}
