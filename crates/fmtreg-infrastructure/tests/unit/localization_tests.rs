//! Text table lookups

use std::collections::BTreeMap;

use fmtreg_domain::ports::TextResolver;
use fmtreg_infrastructure::config::LocalizationConfig;
use fmtreg_infrastructure::localization::TextTable;

#[test]
fn test_text_table_falls_back_to_default() {
    let table = TextTable::default();
    assert!(table.is_empty());
    assert_eq!(table.text("Unknown", "Unknown"), "Unknown");
}

#[test]
fn test_text_table_overrides() {
    let mut strings = BTreeMap::new();
    strings.insert("Unknown".to_string(), "Desconocido".to_string());
    strings.insert("AllSupportedFiles".to_string(), String::new());
    let table = TextTable::from_config(&LocalizationConfig { strings });

    assert_eq!(table.len(), 2);
    assert_eq!(table.text("Unknown", "Unknown"), "Desconocido");
    assert_eq!(
        table.text("AllSupportedFiles", "All supported files"),
        "All supported files",
        "Blank entries keep the default"
    );
}

#[test]
fn test_text_table_from_iterator() {
    let table: TextTable = [("Unknown".to_string(), "Sconosciuto".to_string())]
        .into_iter()
        .collect();
    assert_eq!(table.text("Unknown", "Unknown"), "Sconosciuto");
    assert_eq!(table.text("Other", "fallback"), "fallback");
}
