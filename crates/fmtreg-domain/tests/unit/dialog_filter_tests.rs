//! Tests for dialog filter rendering

use fmtreg_domain::{DialogFilter, FileFormat};

fn formats() -> Vec<FileFormat> {
    vec![
        FileFormat::new(1, "Comic Book Zip", ["cbz", "zip"]),
        FileFormat::new(2, "Comic Book RAR", ["cbr"]),
    ]
}

#[test]
fn test_filter_without_all_entry() {
    let filter = DialogFilter::from_formats(&formats(), None);
    assert_eq!(
        filter.to_string(),
        "Comic Book Zip (*.cbz;*.zip)|*.cbz;*.zip|Comic Book RAR (*.cbr)|*.cbr"
    );
}

#[test]
fn test_filter_with_all_entry_first() {
    let filter = DialogFilter::from_formats(&formats(), Some("All supported files"));
    let entries = filter.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].label, "All supported files");
    assert_eq!(entries[0].patterns, vec!["*.cbz", "*.zip", "*.cbr"]);
    assert!(
        filter
            .to_string()
            .starts_with("All supported files|*.cbz;*.zip;*.cbr|")
    );
}

#[test]
fn test_all_entry_deduplicates_patterns() {
    let formats = vec![
        FileFormat::new(1, "Comic Book Zip", ["cbz"]),
        FileFormat::new(9, "Other Zip", ["cbz", "zip"]),
    ];
    let filter = DialogFilter::from_formats(&formats, Some("All"));
    assert_eq!(filter.entries()[0].patterns, vec!["*.cbz", "*.zip"]);
}

#[test]
fn test_formats_without_extensions_are_skipped() {
    let formats = vec![
        FileFormat::new(5, "Folder", Vec::<String>::new()).with_matcher(|s| s.ends_with('/')),
        FileFormat::new(4, "PDF", ["pdf"]),
    ];
    let filter = DialogFilter::from_formats(&formats, None);
    assert_eq!(filter.entries().len(), 1);
    assert_eq!(filter.to_string(), "PDF (*.pdf)|*.pdf");
}

#[test]
fn test_empty_filter() {
    let filter = DialogFilter::from_formats(&[], Some("All supported files"));
    assert!(filter.is_empty());
    assert_eq!(filter.to_string(), "");
}
