//! Integration tests for ClaimSearcher against real workbooks

use std::path::PathBuf;

use claimsearch_core::{Cell, ClaimSearcher, DataError};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Create the claims workbook used by most tests
fn create_claims_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("claims.xlsx");
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Complaint").unwrap();
    sheet.write_string(0, 1, "ID").unwrap();
    sheet.write_string(1, 0, "Engine noise at startup").unwrap();
    sheet.write_number(1, 1, 1).unwrap();
    sheet.write_string(2, 0, "Brake squeal when hot").unwrap();
    sheet.write_number(2, 1, 2).unwrap();
    sheet.write_string(3, 0, "Engine stalls at idle").unwrap();
    sheet.write_number(3, 1, 3).unwrap();

    let archive = workbook.add_worksheet();
    archive.set_name("Archive").unwrap();
    archive.write_string(0, 0, "Issue").unwrap();
    archive.write_string(0, 1, "Year").unwrap();
    archive.write_string(0, 2, "Severity").unwrap();
    archive.write_string(1, 0, "Window will not close").unwrap();
    archive.write_number(1, 1, 2019).unwrap();
    archive.write_string(1, 2, "low").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[test]
fn test_load_headers_and_rows() {
    let dir = TempDir::new().unwrap();
    let path = create_claims_workbook(&dir);

    let searcher = ClaimSearcher::new(&path, None).expect("Failed to load claims");

    assert_eq!(searcher.headers(), ["Complaint", "ID"]);
    assert_eq!(searcher.len(), 3);
    assert_eq!(searcher.rows()[0][0], Cell::from("Engine noise at startup"));
    assert_eq!(searcher.rows()[2][1], Cell::Number(3.0));
}

#[test]
fn test_find_similar_finds_match() {
    let dir = TempDir::new().unwrap();
    let path = create_claims_workbook(&dir);
    let searcher = ClaimSearcher::new(&path, None).unwrap();

    let results = searcher.find_similar("engine noise when starting", 0.7);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["Complaint"], Cell::from("Engine noise at startup"));
    assert_eq!(results[0]["ID"], Cell::Number(1.0));
    assert_eq!(results[0].len(), 2);
}

#[test]
fn test_find_similar_respects_threshold() {
    let dir = TempDir::new().unwrap();
    let path = create_claims_workbook(&dir);
    let searcher = ClaimSearcher::new(&path, None).unwrap();

    let results = searcher.find_similar("engine noise when starting", 0.9);
    assert!(results.is_empty());
}

#[test]
fn test_results_in_sheet_order() {
    let dir = TempDir::new().unwrap();
    let path = create_claims_workbook(&dir);
    let searcher = ClaimSearcher::new(&path, None).unwrap();

    let results = searcher.find_similar("engine", 0.0);
    let ids: Vec<String> = results.iter().map(|r| r["ID"].to_string()).collect();

    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_named_sheet() {
    let dir = TempDir::new().unwrap();
    let path = create_claims_workbook(&dir);
    let searcher = ClaimSearcher::new(&path, Some("Archive")).unwrap();

    assert_eq!(searcher.headers(), ["Issue", "Year", "Severity"]);

    let results = searcher.find_similar("window won't close", 0.6);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["Year"], Cell::Number(2019.0));
    assert_eq!(results[0]["Severity"], Cell::from("low"));
}

// ==================== EDGE CASE TESTS ====================

#[test]
fn test_empty_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(&path).unwrap();

    let searcher = ClaimSearcher::new(&path, None).unwrap();

    assert!(searcher.headers().is_empty());
    assert!(searcher.rows().is_empty());
    assert!(searcher.find_similar("engine noise", 0.0).is_empty());
}

#[test]
fn test_header_only_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("headers.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Complaint").unwrap();
    sheet.write_string(0, 1, "ID").unwrap();
    workbook.save(&path).unwrap();

    let searcher = ClaimSearcher::new(&path, None).unwrap();

    assert_eq!(searcher.headers(), ["Complaint", "ID"]);
    assert!(searcher.rows().is_empty());
    assert!(searcher.find_similar("engine noise", 0.0).is_empty());
}

#[test]
fn test_blank_header_and_first_cell() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gaps.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Complaint").unwrap();
    sheet.write_string(0, 2, "Owner").unwrap();
    sheet.write_string(1, 1, "unlabeled").unwrap();
    sheet.write_string(1, 2, "fleet").unwrap();
    workbook.save(&path).unwrap();

    let searcher = ClaimSearcher::new(&path, None).unwrap();
    assert_eq!(searcher.headers(), ["Complaint", "", "Owner"]);

    // Missing first cell compares as the empty string
    let results = searcher.find_similar("", 1.0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["Complaint"], Cell::Null);
    assert_eq!(results[0][""], Cell::from("unlabeled"));
    assert_eq!(results[0]["Owner"], Cell::from("fleet"));
}

#[test]
fn test_missing_file() {
    let result = ClaimSearcher::new("/nonexistent/claims.xlsx", None);
    assert!(matches!(result, Err(DataError::FileNotFound(_))));
}

#[test]
fn test_missing_sheet() {
    let dir = TempDir::new().unwrap();
    let path = create_claims_workbook(&dir);

    let result = ClaimSearcher::new(&path, Some("Nope"));
    assert!(matches!(result, Err(DataError::SheetNotFound(_))));
}

#[test]
fn test_not_a_workbook() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("claims.xlsx");
    std::fs::write(&path, b"Complaint,ID\nEngine noise,1\n").unwrap();

    let result = ClaimSearcher::new(&path, None);
    assert!(matches!(result, Err(DataError::WorkbookOpen(_))));
}
