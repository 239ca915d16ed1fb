#![no_main]

use libfuzzer_sys::fuzz_target;

use arbor::parser::{parse_dataset, DatasetFormat};
use arbor::{NodeInspector, StoreOptions, TreeStateStore};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(roots) = parse_dataset(content, DatasetFormat::Json, std::path::Path::new("fuzz.json"))
    else {
        return;
    };

    // Whatever parses must load, toggle and inspect without panicking
    let mut store = TreeStateStore::new(roots, StoreOptions::default());
    let first = store.source()[0].id.clone().unwrap_or_default();
    store.toggle_flip(&first);
    let _ = store.inspect(&NodeInspector::default());
});
