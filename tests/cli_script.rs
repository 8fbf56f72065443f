use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir, data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").unwrap();
    cmd.env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env("EXPENSE_CORE_HOME", home.path())
        .env("EXPENSE_CORE_DATA_FILE", data_file);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");

    script_command(&home, &data_file)
        .write_stdin("food\n10\ngas\n5.5\nDONE\n")
        .assert()
        .success()
        .stdout(contains("Added expense: food - $10"))
        .stdout(contains("Total spending: $15.5"))
        .stdout(contains("Expenses saved to"));

    let contents = std::fs::read_to_string(&data_file).unwrap();
    assert_eq!(contents, "food 10\ngas 5.5\n");
}

#[test]
fn invalid_amount_aborts_without_saving() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");

    script_command(&home, &data_file)
        .write_stdin("food\nabc\nDONE\n")
        .assert()
        .failure()
        .stdout(contains("is not a numeric amount"));

    assert!(!data_file.exists());
}

#[test]
fn negative_amount_aborts_without_saving() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");

    script_command(&home, &data_file)
        .write_stdin("food\n-5\nDONE\n")
        .assert()
        .failure()
        .stdout(contains("cannot be negative"));

    assert!(!data_file.exists());
}

#[test]
fn search_lists_matching_entries_in_order() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");
    std::fs::write(&data_file, "food 10\ngas 5\nfood 2\n").unwrap();

    script_command(&home, &data_file)
        .write_stdin("SEARCH\nfood\nDONE\n")
        .assert()
        .success()
        .stdout(contains("Welcome back!"))
        .stdout(contains("- food: $10\n- food: $2"))
        .stdout(contains("Total spending: $17"));
}

#[test]
fn search_reports_missing_category() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");
    std::fs::write(&data_file, "food 10\n").unwrap();

    script_command(&home, &data_file)
        .write_stdin("SEARCH\nrent\nDONE\n")
        .assert()
        .success()
        .stdout(contains("No expenses found in category: rent"));
}

#[test]
fn done_with_no_records_reports_empty_state() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");

    script_command(&home, &data_file)
        .write_stdin("DONE\n")
        .assert()
        .failure()
        .stdout(contains("No existing expense file found"))
        .stdout(contains("No expenses recorded"));

    assert!(!data_file.exists());
}

#[test]
fn end_of_input_acts_like_done() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");

    script_command(&home, &data_file)
        .write_stdin("food\n10\n")
        .assert()
        .success()
        .stdout(contains("Total spending: $10"));

    assert!(data_file.exists());
}

#[test]
fn second_session_reloads_saved_records() {
    let home = TempDir::new().unwrap();
    let data_file = home.path().join("expenses.txt");

    script_command(&home, &data_file)
        .write_stdin("food\n10\ngas\n5\nDONE\n")
        .assert()
        .success();

    script_command(&home, &data_file)
        .write_stdin("DONE\n")
        .assert()
        .success()
        .stdout(contains("Loaded 2 expense(s)"))
        .stdout(contains("Total spending: $15"));
}
