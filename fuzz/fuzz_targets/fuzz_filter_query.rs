#![no_main]

use libfuzzer_sys::fuzz_target;

use arbor::{sample_dataset, StoreOptions, TreeStateStore};

fuzz_target!(|query: &str| {
    let Ok(roots) = sample_dataset() else {
        return;
    };
    let mut store = TreeStateStore::new(roots, StoreOptions::default());

    // Any query, including odd unicode case folding, filters without panicking
    let matches = store.set_filter(query);
    assert!(matches <= arbor::models::forest_count(store.source()));
});
