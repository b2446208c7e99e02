#![no_main]

use libfuzzer_sys::fuzz_target;
use standview_core::source::parse_snapshot;
use standview_core::{RecordStore, aggregate};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let Ok(records) = parse_snapshot(data, Path::new("fuzz")) else {
        return;
    };
    let counts = aggregate(&records);
    assert_eq!(counts.total, records.len());
    let store = RecordStore::from_records(records);
    for record in store.all() {
        assert!(store.find_by_id(&record.project_id).is_some());
    }
});
