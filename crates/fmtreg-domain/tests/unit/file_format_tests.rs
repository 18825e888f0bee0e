//! Tests for FileFormat

use fmtreg_domain::{FileFormat, FormatMatcher};

fn cbz() -> FileFormat {
    FileFormat::new(1, "Comic Book Zip", ["cbz", "zip"])
}

#[test]
fn test_extensions_are_normalized() {
    let format = FileFormat::new(7, "Mixed", [".CBZ", "cbz", " Zip ", "", "."]);
    assert_eq!(format.extensions(), &["cbz".to_string(), "zip".to_string()]);
}

#[test]
fn test_supports_matches_extension_case_insensitive() {
    let format = cbz();
    assert!(format.supports("foo.cbz"));
    assert!(format.supports("/comics/Foo.CBZ"));
    assert!(format.supports("C:\\Books\\issue 01.zip"));
    assert!(!format.supports("foo.cbr"));
    assert!(!format.supports("foocbz"));
    assert!(!format.supports(""));
}

#[test]
fn test_supports_multi_part_extension() {
    let format = FileFormat::new(9, "Tarball", ["tar.gz"]);
    assert!(format.supports("archive.tar.gz"));
    assert!(!format.supports("archive.gz"));
}

#[test]
fn test_glob_matcher() {
    let format = FileFormat::new(100, "ComicInfo", ["xml"])
        .with_globs(["**/ComicInfo.xml"])
        .expect("valid glob");

    assert!(matches!(format.matcher(), FormatMatcher::Glob(_)));
    assert!(format.supports("ComicInfo.xml"));
    assert!(format.supports("books/issue1/comicinfo.xml"));
    assert!(!format.supports("books/other.xml"));
}

#[test]
fn test_invalid_glob_is_rejected() {
    let result = FileFormat::new(1, "Broken", ["x"]).with_globs(["a[b"]);
    assert!(result.is_err());
}

#[test]
fn test_custom_matcher() {
    let format = FileFormat::new(5, "Folder", Vec::<String>::new())
        .with_matcher(|source| source.ends_with('/'));
    assert!(format.supports("comics/series/"));
    assert!(!format.supports("comics/series.cbz"));
    assert!(format.extensions().is_empty());
}

#[test]
fn test_dialog_patterns() {
    assert_eq!(
        cbz().dialog_patterns(),
        vec!["*.cbz".to_string(), "*.zip".to_string()]
    );
}

#[test]
fn test_ordering_by_name_then_id() {
    let mut formats = vec![
        FileFormat::new(3, "PDF", ["pdf"]),
        FileFormat::new(2, "Comic Book RAR", ["cbr"]),
        FileFormat::new(1, "Comic Book Zip", ["cbz"]),
        FileFormat::new(0, "Comic Book RAR", ["rar"]),
    ];
    formats.sort();

    let order: Vec<(i32, &str)> = formats.iter().map(|f| (f.id(), f.name())).collect();
    assert_eq!(
        order,
        vec![
            (0, "Comic Book RAR"),
            (2, "Comic Book RAR"),
            (1, "Comic Book Zip"),
            (3, "PDF"),
        ]
    );
}

#[test]
fn test_ordering_is_case_sensitive() {
    let upper = FileFormat::new(1, "Zip", ["zip"]);
    let lower = FileFormat::new(2, "archive", ["arc"]);
    assert!(upper < lower);
}

#[test]
fn test_equality_ignores_matcher() {
    let plain = cbz();
    let custom = cbz().with_matcher(|_| false);
    assert_eq!(plain, custom);
    assert_ne!(plain, FileFormat::new(1, "Comic Book Zip", ["cbz"]));
}

#[test]
fn test_serialize_skips_matcher() {
    let json = serde_json::to_value(cbz()).expect("serializable");
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Comic Book Zip");
    assert_eq!(json["extensions"], serde_json::json!(["cbz", "zip"]));
    assert!(json.get("matcher").is_none());
}
