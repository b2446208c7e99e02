#![no_main]

use libfuzzer_sys::fuzz_target;
use standview_core::{ProjectRecord, SearchSpec, paginate};

fuzz_target!(|input: (Vec<(String, String)>, String, u8, u8)| {
    let (rows, query, page_size, page) = input;
    let records: Vec<ProjectRecord> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (name, status))| ProjectRecord::new(i.to_string(), name, status))
        .collect();

    let hits = SearchSpec::listing().apply(&records, &query);
    assert!(hits.len() <= records.len());

    let page = paginate(&hits, usize::from(page_size), usize::from(page));
    assert!(page.items.len() <= page.page_size);
});
