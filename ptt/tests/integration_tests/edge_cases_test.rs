// tests/integration_tests/edge_cases_test.rs
use super::common::write_status_file;
use anyhow::Result;
use ptt::scan_status_file;
use tempfile::TempDir;

#[test]
fn test_mixed_formats_in_one_file() -> Result<()> {
    let dir = TempDir::new()?;
    let status = write_status_file(
        &dir,
        &["a.pdf\t10\tdone", "legacy.pdf\t7", "6", "b.pdf\t9\tpending"],
    )?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 3, "All three formats count");
    assert_eq!(totals.skipped_incomplete, 1);
    assert_eq!(totals.total_pages, 23);
    Ok(())
}

#[test]
fn test_status_match_is_case_insensitive() -> Result<()> {
    let dir = TempDir::new()?;
    let status = write_status_file(
        &dir,
        &["a.pdf\t10\tDone", "b.pdf\t5\tSKIPPED_TOO_MANY_PAGES"],
    )?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 1);
    assert_eq!(totals.skipped_too_many_pages, 1);
    assert_eq!(totals.total_pages, 10);
    Ok(())
}

#[test]
fn test_extra_columns_are_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    let status = write_status_file(&dir, &["a.pdf\t10\tdone\tretried-twice"])?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 1);
    assert_eq!(totals.total_pages, 10);
    Ok(())
}

#[test]
fn test_trailing_separator_is_trimmed_with_the_line() -> Result<()> {
    // "x<TAB>9<TAB>" trims to the legacy two-column shape
    let dir = TempDir::new()?;
    let status = write_status_file(&dir, &["x\t9\t"])?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 1);
    assert_eq!(totals.total_pages, 9);
    Ok(())
}

#[test]
fn test_blank_lines_are_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    let status = write_status_file(&dir, &["", "   ", "a.pdf\t4\tdone", ""])?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 1);
    assert_eq!(totals.total_pages, 4);
    Ok(())
}

#[test]
fn test_whitespace_only_file_totals_zero() -> Result<()> {
    let dir = TempDir::new()?;
    let status = write_status_file(&dir, &["", "  ", "\t"])?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 0);
    assert_eq!(totals.skipped_incomplete, 0);
    assert_eq!(totals.skipped_too_many_pages, 0);
    assert_eq!(totals.total_pages, 0);
    Ok(())
}

#[test]
fn test_done_line_with_bad_pages_counts_nowhere() -> Result<()> {
    let dir = TempDir::new()?;
    let status = write_status_file(&dir, &["a.pdf\tmany\tdone", "b.pdf\t5\tdone"])?;

    let totals = scan_status_file(&status)?;
    assert_eq!(totals.completed_files, 1);
    assert_eq!(totals.skipped_incomplete, 0);
    assert_eq!(totals.skipped_too_many_pages, 0);
    assert_eq!(totals.total_pages, 5);
    Ok(())
}
