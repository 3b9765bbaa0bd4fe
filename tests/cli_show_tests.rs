use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ONE_ENTRY, TWO_ENTRIES, dead_endpoint, lvw, stub_api};

#[test]
fn test_show_renders_one_card_and_counts_one_log() {
    let url = stub_api(200, ONE_ENTRY);

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .success()
        .stdout(contains("1 log"))
        .stdout(contains("Borehole B-1"))
        .stdout(contains("[B1]"))
        .stdout(contains("brown clay, moist"))
        .stdout(contains("/pdfs/Profile%201.pdf"));
}

#[test]
fn test_show_drops_the_blank_zero_depth_interval() {
    let url = stub_api(200, ONE_ENTRY);

    // The catalog has two sections but the blank zero-depth one is
    // filtered out, so no placeholder dash ever renders.
    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .success()
        .stdout(contains("Clay"))
        .stdout(contains("—").not());
}

#[test]
fn test_show_counts_plural_logs() {
    let url = stub_api(200, TWO_ENTRIES);

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .success()
        .stdout(contains("2 logs"))
        .stdout(contains("Borehole B-2"));
}

#[test]
fn test_show_empty_payload_reports_no_logs() {
    let url = stub_api(200, "[]");

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .success()
        .stdout(contains("No lithology logs available."))
        .stdout(contains("Borehole").not());
}

#[test]
fn test_show_non_array_payload_reports_no_logs() {
    let url = stub_api(200, r#"{"detail": "unexpected"}"#);

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .success()
        .stdout(contains("No lithology logs available."));
}

#[test]
fn test_show_all_blank_entries_report_no_interval_data() {
    let body = r#"[
      {"title": "Empty hole", "tab_name": "E1", "description": "", "pdf_filename": "",
       "sections": [{"from_depth": null, "to_depth": null, "description": "  "}]}
    ]"#;
    let url = stub_api(200, body);

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .success()
        .stdout(contains("No logs with interval data."))
        .stdout(contains("Empty hole").not());
}

#[test]
fn test_show_surfaces_http_status_in_error() {
    let url = stub_api(500, "boom");

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .failure()
        .stderr(contains("500"));
}

#[test]
fn test_show_surfaces_transport_failure() {
    let url = dead_endpoint();

    lvw()
        .args(["--url", &url, "show", "--plain"])
        .assert()
        .failure()
        .stderr(contains("Request failed"));
}

#[test]
fn test_show_strip_layout_renders_bands() {
    let url = stub_api(200, ONE_ENTRY);

    lvw()
        .args(["--url", &url, "show", "--plain", "--layout", "strip"])
        .assert()
        .success()
        .stdout(contains("█"))
        .stdout(contains("Clay"));
}

#[test]
fn test_show_entry_filter_narrows_to_one_log() {
    let url = stub_api(200, TWO_ENTRIES);

    lvw()
        .args(["--url", &url, "show", "--plain", "--entry", "B2"])
        .assert()
        .success()
        .stdout(contains("1 log"))
        .stdout(contains("Borehole B-2"))
        .stdout(contains("Borehole B-1").not());
}

#[test]
fn test_show_entry_filter_with_no_match_warns() {
    let url = stub_api(200, TWO_ENTRIES);

    lvw()
        .args(["--url", &url, "show", "--plain", "--entry", "B9"])
        .assert()
        .success()
        .stdout(contains("No log matches 'B9'."));
}
