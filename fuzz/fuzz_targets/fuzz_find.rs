#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

#[derive(Arbitrary, Debug)]
struct Input {
    doc: Vec<u8>,
    /// Picks which listed pointers go into the `find_many` batch.
    seed: u64,
    /// Pointers that may or may not be in the document.
    extra: Vec<String>,
}

fuzz_target!(|input: Input| {
    let Input { doc, seed, extra } = input;

    for pointer in &extra {
        let _ = rawpointer::find(&doc, pointer);
    }
    let _ = rawpointer::find_many(&doc, &extra);

    // Anything serde_json accepts must be fully addressable.
    let Ok(value) = serde_json::from_slice::<Value>(&doc) else {
        let _ = rawpointer::list_pointers(&doc);
        return;
    };
    let pointers = rawpointer::list_pointers(&doc).expect("valid document rejected");
    assert_eq!(pointers[0], "");

    for pointer in &pointers {
        let raw = rawpointer::find(&doc, pointer)
            .expect("find failed on valid document")
            .unwrap_or_else(|| panic!("listed pointer {pointer:?} not found"));
        let found: Value = serde_json::from_slice(raw.as_bytes()).expect("span is not JSON");
        // Duplicate keys resolve to the first occurrence here and to the last
        // in serde_json.
        if let Some(expected) = value.pointer(pointer) {
            if pointers.iter().filter(|p| *p == pointer).count() == 1 {
                assert_eq!(&found, expected, "{pointer:?}");
            }
        }
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut batch: Vec<&str> = pointers
        .iter()
        .map(String::as_str)
        .filter(|_| rng.random_bool(0.5))
        .collect();
    batch.extend(
        extra
            .iter()
            .map(String::as_str)
            .filter(|p| p.is_empty() || p.starts_with('/')),
    );

    let many = rawpointer::find_many(&doc, &batch).expect("find_many failed on valid document");
    for pointer in &batch {
        let one = rawpointer::find(&doc, pointer).ok().flatten();
        assert_eq!(many.get(*pointer).copied(), one, "{pointer:?}");
    }
});
