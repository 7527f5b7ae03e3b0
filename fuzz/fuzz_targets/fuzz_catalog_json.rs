#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(catalog) = pujan::infrastructure::parse_catalog(content, Path::new("fuzz.json")) {
            // Whatever validates must also list without panicking
            let _ = pujan::filter_and_sort(&catalog, &pujan::CatalogQuery::new());
        }
    }
});
