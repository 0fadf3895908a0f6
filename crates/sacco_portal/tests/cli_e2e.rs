//! End-to-end tests for the sacco_portal CLI.
//!
//! These run the real binary against the JSON exports in `tests/fixtures`
//! and check what is printed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a Command for the portal binary with a clean environment.
#[allow(deprecated)]
fn portal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sacco_portal").unwrap();
    cmd.env_remove("PORTAL_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = portal_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "command failed: {args:?}");
    String::from_utf8(output.stdout).unwrap()
}

fn appears_in_order(haystack: &str, needles: &[&str]) -> bool {
    let positions: Vec<Option<usize>> = needles.iter().map(|n| haystack.find(n)).collect();
    positions.iter().all(Option::is_some) && positions.windows(2).all(|w| w[0] < w[1])
}

// =============================================================================
// Paging
// =============================================================================

mod paging {
    use super::*;

    #[test]
    fn test_first_page_of_members() {
        portal_cmd()
            .args(["members", "--data", "tests/fixtures/members.json"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Members"))
            .stdout(predicate::str::contains("Showing 1 to 10 of 12 entries"))
            .stdout(predicate::str::contains("Page 1 of 2"))
            .stdout(predicate::str::contains("Rows per page: 5 [10] 25 50 100"))
            .stdout(predicate::str::contains("Lucy").not());
    }

    #[test]
    fn test_second_page() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--page", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Kevin Ochieng"))
            .stdout(predicate::str::contains("Lucy Wambui"))
            .stdout(predicate::str::contains("Showing 11 to 12 of 12 entries"));
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "-p", "99"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Page 2 of 2"));
    }

    #[test]
    fn test_page_size_flag() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--page-size", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Page 1 of 3"))
            .stdout(predicate::str::contains("Showing 1 to 5 of 12 entries"));
    }

    #[test]
    fn test_no_pagination_shows_everything() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--no-pagination"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Lucy Wambui"))
            .stdout(predicate::str::contains("Rows per page").not());
    }
}

// =============================================================================
// Searching and sorting
// =============================================================================

mod search_and_sort {
    use super::*;

    #[test]
    fn test_search_by_surname() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--search", "MWANGI"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Search: MWANGI"))
            .stdout(predicate::str::contains("David Mwangi"))
            .stdout(predicate::str::contains("Showing 1 to 1 of 1 entries"));
    }

    #[test]
    fn test_search_without_matches() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "-s", "zzz"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No members found"))
            .stdout(predicate::str::contains("Showing 0 to 0 of 0 entries"))
            .stdout(predicate::str::contains("Page 1 of 1"));
    }

    #[test]
    fn test_sort_shares_descending() {
        let out = stdout_of(&[
            "members",
            "-d",
            "tests/fixtures/members.json",
            "--sort",
            "shares",
            "--sort",
            "Shares",
        ]);
        assert!(out.contains("Shares ▼"));
        assert!(appears_in_order(&out, &["David", "Jane", "Achieng"]));
    }

    #[test]
    fn test_third_click_restores_order() {
        let out = stdout_of(&[
            "members",
            "-d",
            "tests/fixtures/members.json",
            "--sort",
            "shares",
            "--sort",
            "shares",
            "--sort",
            "shares",
        ]);
        assert!(!out.contains('▲') && !out.contains('▼'));
        assert!(appears_in_order(&out, &["Achieng", "Brian", "Chebet"]));
    }

    #[test]
    fn test_search_then_sort_by_derived_name() {
        let out = stdout_of(&[
            "members",
            "-d",
            "tests/fixtures/members.json",
            "-s",
            "an",
            "--sort",
            "name",
        ]);
        assert!(out.contains("Name ▲"));
        assert!(appears_in_order(&out, &["Brian", "Esther", "Halima", "Jane"]));
    }

    #[test]
    fn test_unknown_sort_column() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--sort", "age"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown column 'age'"));
    }

    #[test]
    fn test_no_search_hides_the_search_line() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--no-search"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Search:").not());
    }
}

// =============================================================================
// Other listings
// =============================================================================

mod listings {
    use super::*;

    #[test]
    fn test_loans() {
        portal_cmd()
            .args(["loans", "-d", "tests/fixtures/loans.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("KES 145,000.50"))
            .stdout(predicate::str::contains("01 Mar 2023"))
            .stdout(predicate::str::contains("Defaulted"))
            .stdout(predicate::str::contains("—"));
    }

    #[test]
    fn test_payments_search_by_method() {
        portal_cmd()
            .args(["payments", "-d", "tests/fixtures/payments.json", "-s", "m-pesa"])
            .assert()
            .success()
            .stdout(predicate::str::contains("RCT-1001"))
            .stdout(predicate::str::contains("RCT-1004"))
            .stdout(predicate::str::contains("RCT-1002").not())
            .stdout(predicate::str::contains("Showing 1 to 2 of 2 entries"));
    }

    #[test]
    fn test_loan_products() {
        portal_cmd()
            .args(["loan-products", "-d", "tests/fixtures/loan_products.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("10.50%"))
            .stdout(predicate::str::contains("48 months"))
            .stdout(predicate::str::contains("KES 1,200,000.00"));
    }

    #[test]
    fn test_expense_categories() {
        portal_cmd()
            .args(["expense-categories", "-d", "tests/fixtures/expense_categories.json"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Expense Categories"))
            .stdout(predicate::str::contains("Transport"))
            .stdout(predicate::str::contains("Showing 1 to 4 of 4 entries"));
    }

    #[test]
    fn test_empty_export() {
        portal_cmd()
            .args(["payments", "-d", "tests/fixtures/empty.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No payments found"))
            .stdout(predicate::str::contains("Page 1 of 1"));
    }
}

// =============================================================================
// Row selection
// =============================================================================

mod selection {
    use super::*;

    #[test]
    fn test_select_prints_record() {
        portal_cmd()
            .args([
                "members",
                "-d",
                "tests/fixtures/members.json",
                "-s",
                "kiptoo",
                "--select",
                "1",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Selected record:"))
            .stdout(predicate::str::contains("\"member_no\": \"M-0002\""))
            .stdout(predicate::str::contains("\"status\": \"dormant\""));
    }

    #[test]
    fn test_select_follows_sort_and_page() {
        portal_cmd()
            .args([
                "members",
                "-d",
                "tests/fixtures/members.json",
                "--sort",
                "shares",
                "--page",
                "2",
                "--select",
                "2",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"first_name\": \"David\""));
    }

    #[test]
    fn test_select_past_visible_rows() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--select", "11"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no row 11 on this page (10 visible)"));
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_config_file() {
        portal_cmd()
            .args([
                "members",
                "-d",
                "tests/fixtures/members.json",
                "--config",
                "tests/fixtures/config.json",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Page 1 of 3"))
            .stdout(predicate::str::contains("Rows per page: [5] 10"));
    }

    #[test]
    fn test_config_from_env() {
        portal_cmd()
            .env("PORTAL_CONFIG", "tests/fixtures/config.json")
            .args(["members", "-d", "tests/fixtures/empty.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hakuna data"));
    }

    #[test]
    fn test_page_size_must_be_offered() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--page-size", "7"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("page size 7 is not one of the options"));
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "page_size: 5").unwrap();

        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "--config"])
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config file"));
    }
}

// =============================================================================
// Errors and logging
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_data_file() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/nope.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read data file"));
    }

    #[test]
    fn test_broken_json() {
        portal_cmd()
            .args(["expense-categories", "-d", "tests/fixtures/broken.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }

    #[test]
    fn test_wrong_entity_for_export() {
        portal_cmd()
            .args(["payments", "-d", "tests/fixtures/members.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }

    #[test]
    fn test_unknown_entity() {
        portal_cmd()
            .args(["dividends", "-d", "tests/fixtures/members.json"])
            .assert()
            .failure();
    }

    #[test]
    fn test_help_lists_entities() {
        portal_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("loan-products"))
            .stdout(predicate::str::contains("expense-categories"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        portal_cmd()
            .args(["members", "-d", "tests/fixtures/members.json", "-v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("loaded data"))
            .stdout(predicate::str::contains("loaded data").not());
    }
}
