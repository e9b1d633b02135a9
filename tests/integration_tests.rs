//! Integration tests for the Orgdex CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.
//! Every invocation points --favorites at a temp file so the suite never
//! touches the per-user data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to get an orgdex command with favorites isolated to `tmp`
fn orgdex(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("orgdex").unwrap();
    cmd.arg("--favorites");
    cmd.arg(tmp.path().join("favorites.json"));
    cmd.env_remove("ORGDEX_FAVORITES");
    cmd.env_remove("ORGDEX_FORMAT");
    cmd
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    Command::cargo_bin("orgdex")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("curated directory of companies"));
}

#[test]
fn test_version_displays() {
    Command::cargo_bin("orgdex")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("orgdex"));
}

// ============================================================================
// List: filter / sort / paginate pipeline
// ============================================================================

#[test]
fn test_list_counts_full_directory() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("18\n"));
}

#[test]
fn test_list_filters_by_industry() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list", "--industry", "Technology", "--format", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nova-labs"))
        .stdout(predicate::str::contains("quanta-systems"))
        .stdout(predicate::str::contains("vertex-dynamics"))
        .stdout(predicate::str::contains("harbor-health").not());
}

#[test]
fn test_list_unknown_industry_fails_open() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list", "--industry", "Blacksmithing", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("18\n"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list", "--search", "NOVA", "--format", "id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("nova-labs\n"));
}

#[test]
fn test_list_pagination_slices_by_nine() {
    let tmp = TempDir::new().unwrap();
    let output = orgdex(&tmp)
        .args(["list", "--format", "id", "--page", "1"])
        .output()
        .unwrap();
    let page1 = String::from_utf8_lossy(&output.stdout);
    assert_eq!(page1.lines().count(), 9);

    let output = orgdex(&tmp)
        .args(["list", "--format", "id", "--page", "2"])
        .output()
        .unwrap();
    let page2 = String::from_utf8_lossy(&output.stdout);
    assert_eq!(page2.lines().count(), 9);

    // Sorted by name ascending, the second page starts at Lumen Learning
    assert_eq!(page2.lines().next(), Some("lumen-learning"));

    // No id appears on both pages
    for id in page1.lines() {
        assert!(!page2.lines().any(|other| other == id));
    }
}

#[test]
fn test_list_out_of_range_page_is_clamped() {
    let tmp = TempDir::new().unwrap();
    let output = orgdex(&tmp)
        .args(["list", "--format", "id", "--page", "99"])
        .output()
        .unwrap();
    // Clamped to the last page (page 2 of 18 records)
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 9);
    assert_eq!(stdout.lines().next(), Some("lumen-learning"));
}

#[test]
fn test_list_sort_by_founded_descending() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args([
            "list", "--sort", "founded", "--order", "desc", "--format", "id",
        ])
        .assert()
        .success()
        // vertex-dynamics and fable-studios tie on 2016; the earlier record wins
        .stdout(predicate::str::starts_with("vertex-dynamics\nfable-studios\n"));
}

#[test]
fn test_list_empty_result_renders_empty_state() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list", "--search", "zzzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No companies match"))
        .stdout(predicate::str::contains("orgdex list"));
}

#[test]
fn test_list_human_output_shows_page_metadata() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 9 of"))
        .stdout(predicate::str::contains("page 1 of 2"));
}

#[test]
fn test_list_json_output_is_parseable() {
    let tmp = TempDir::new().unwrap();
    let output = orgdex(&tmp)
        .args(["list", "--format", "json", "--industry", "Healthcare"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let companies = parsed.as_array().unwrap();
    assert_eq!(companies.len(), 3);
    for company in companies {
        assert_eq!(company["industry"], "Healthcare");
    }
}

#[test]
fn test_list_csv_output_has_header() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,name,industry,location,employee_count,founded,revenue,rating,favorite",
        ));
}

// ============================================================================
// Show: detail view
// ============================================================================

#[test]
fn test_show_by_id() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["show", "nova-labs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nova Labs"))
        .stdout(predicate::str::contains("QUICK FACTS"))
        .stdout(predicate::str::contains("INDUSTRY INSIGHT"));
}

#[test]
fn test_show_by_name_prefix() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["show", "quanta", "--format", "id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("quanta-systems\n"));
}

#[test]
fn test_show_unknown_company_fails() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["show", "no-such-company"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No company matches"));
}

#[test]
fn test_show_yaml_roundtrips_the_record() {
    let tmp = TempDir::new().unwrap();
    let output = orgdex(&tmp)
        .args(["show", "harbor-health", "--format", "yaml"])
        .output()
        .unwrap();
    let yaml = String::from_utf8_lossy(&output.stdout);
    assert!(yaml.contains("id: harbor-health"));
    assert!(yaml.contains("employee_count: 1000-5000"));
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_fav_toggle_roundtrip() {
    let tmp = TempDir::new().unwrap();

    orgdex(&tmp)
        .args(["fav", "toggle", "nova-labs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Nova Labs"));

    orgdex(&tmp)
        .args(["fav", "list", "--format", "id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("nova-labs\n"));

    orgdex(&tmp)
        .args(["fav", "toggle", "nova-labs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Nova Labs"));

    orgdex(&tmp)
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn test_fav_persists_across_invocations() {
    let tmp = TempDir::new().unwrap();

    orgdex(&tmp)
        .args(["fav", "toggle", "helios-grid"])
        .assert()
        .success();
    orgdex(&tmp)
        .args(["fav", "toggle", "fable-studios"])
        .assert()
        .success();

    let output = orgdex(&tmp)
        .args(["fav", "list", "--format", "id"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Favorites list in dataset order, not toggle order
    assert_eq!(stdout, "helios-grid\nfable-studios\n");
}

#[test]
fn test_fav_toggle_unknown_company_fails() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["fav", "toggle", "ghost-corp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No company matches"));
}

#[test]
fn test_fav_clear_requires_confirmation_when_noninteractive() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["fav", "toggle", "nova-labs"])
        .assert()
        .success();

    orgdex(&tmp)
        .args(["fav", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    orgdex(&tmp)
        .args(["fav", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 favorite"));
}

#[test]
fn test_malformed_favorites_file_fails_open() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("favorites.json"), "{ not json [").unwrap();

    orgdex(&tmp)
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn test_list_marks_favorites() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["fav", "toggle", "nova-labs"])
        .assert()
        .success();

    orgdex(&tmp)
        .args(["list", "--search", "nova", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nova-labs,Nova Labs").and(predicate::str::contains(",yes")));
}

// ============================================================================
// Stats: analytics aggregation
// ============================================================================

#[test]
fn test_stats_json_overview() {
    let tmp = TempDir::new().unwrap();
    let output = orgdex(&tmp)
        .args(["stats", "--format", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(parsed["overview"]["total_companies"], 18);
    assert_eq!(parsed["overview"]["industries"], 8);
    assert!((parsed["overview"]["average_rating"].as_f64().unwrap() - 4.12).abs() < 1e-9);

    // Highest rated company leads the ranking
    assert_eq!(parsed["top_rated"][0]["id"], "quanta-systems");
    assert_eq!(parsed["top_rated"].as_array().unwrap().len(), 5);

    // Location ranking is truncated to ten even though more exist
    assert_eq!(parsed["top_locations"].as_array().unwrap().len(), 10);

    // Size buckets follow the canonical ordering
    let sizes = parsed["size_distribution"].as_array().unwrap();
    assert_eq!(sizes[0]["name"], "100-200");
    assert_eq!(sizes.last().unwrap()["name"], "5000+");
}

#[test]
fn test_stats_human_dashboard() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERVIEW"))
        .stdout(predicate::str::contains("TOP RATED COMPANIES"))
        .stdout(predicate::str::contains("Quanta Systems"));
}

#[test]
fn test_stats_markdown_section_filter() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["stats", "--format", "md", "--section", "top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Top Rated Companies"))
        .stdout(predicate::str::contains("## Overview").not());
}

// ============================================================================
// Vocab
// ============================================================================

#[test]
fn test_vocab_lists_all_vocabularies() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["vocab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INDUSTRIES"))
        .stdout(predicate::str::contains("Technology"))
        .stdout(predicate::str::contains("EMPLOYEE COUNTS"))
        .stdout(predicate::str::contains("$500M+"));
}

#[test]
fn test_vocab_kind_filter_json() {
    let tmp = TempDir::new().unwrap();
    let output = orgdex(&tmp)
        .args(["vocab", "--kind", "industries", "--format", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let industries = parsed["industries"].as_array().unwrap();
    assert_eq!(industries.len(), 8);
    assert!(parsed.get("locations").is_none());
}

// ============================================================================
// Browse
// ============================================================================

#[test]
fn test_browse_refuses_noninteractive_terminal() {
    let tmp = TempDir::new().unwrap();
    orgdex(&tmp)
        .args(["browse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
