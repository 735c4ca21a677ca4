use std::time::SystemTime;

use dirlist_core::{
    BLANK_ICON, DirectoryEntry, EntryKind, ListerConfig, Listing, MessageKind, MessageSink,
    SortClass, SortOrder, WEB_ROOT, round_to_kib,
};

#[test]
fn test_config_round_trips_through_json() {
    let config = ListerConfig::builder()
        .hide_dot_files(false)
        .hidden_paths(vec!["private".to_string(), "logs/archive".to_string()])
        .sort_order(SortOrder::AlphaDescending)
        .folders_first(false)
        .index_file("index.php")
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back: ListerConfig = serde_json::from_str(&json).unwrap();

    assert!(!back.hide_dot_files);
    assert_eq!(back.hidden_paths, config.hidden_paths);
    assert_eq!(back.sort_order, SortOrder::AlphaDescending);
    assert!(!back.folders_first);
    assert_eq!(back.index_file, "index.php");
    assert!(back.file_type_icons.contains_key(BLANK_ICON));
}

#[test]
fn test_config_deserializes_kebab_case_sort_order() {
    let config: ListerConfig =
        serde_json::from_str(r#"{"sort_order": "natural-case-sensitive"}"#).unwrap();
    assert_eq!(config.sort_order, SortOrder::NaturalCaseSensitive);

    // Omitted fields fall back to defaults.
    assert!(config.hide_dot_files);
    assert!(config.file_type_icons.contains_key(BLANK_ICON));
}

#[test]
fn test_entry_serializes_with_kind_and_class() {
    let entry = DirectoryEntry {
        name: "report.pdf".into(),
        path: "docs/report.pdf".to_string(),
        size_kib: Some(34),
        modified: SystemTime::UNIX_EPOCH,
        kind: EntryKind::File,
        icon: "pdf".into(),
    };

    assert_eq!(entry.sort_class(), SortClass::File);

    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"kind\":\"file\""));

    let back: DirectoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, "report.pdf");
    assert_eq!(back.size_kib, Some(34));
}

#[test]
fn test_listing_preserves_insertion_order() {
    let mut listing = Listing::new();
    for name in ["zeta", "alpha", "mid"] {
        listing.insert(
            name.into(),
            DirectoryEntry {
                name: name.into(),
                path: name.to_string(),
                size_kib: Some(1),
                modified: SystemTime::UNIX_EPOCH,
                kind: EntryKind::File,
                icon: BLANK_ICON.into(),
            },
        );
    }

    let keys: Vec<&str> = listing.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_message_sink_contract() {
    let mut sink = MessageSink::new();
    assert!(sink.all().is_none());

    sink.push(MessageKind::Error, "one");
    sink.push(MessageKind::Custom("warning".into()), "two");

    let all = sink.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].kind, MessageKind::Error);
    assert_eq!(all[1].kind.to_string(), "warning");
}

#[test]
fn test_root_sentinel_and_rounding() {
    assert_eq!(WEB_ROOT, ".");
    assert_eq!(round_to_kib(1024), 1);
    assert_eq!(round_to_kib(1535), 1);
    assert_eq!(round_to_kib(1536), 2);
}
