#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|texts: (String, String)| {
    let (old, new) = texts;
    let diffs = ediff::generate_diff(&old, &new);

    assert!(diffs.iter().all(|diff| !diff.text().is_empty()));
    assert_eq!(ediff::apply_diff(&diffs), new);
    assert_eq!(ediff::revert_diff(&diffs), old);

    let serialized = ediff::serialize(&diffs);
    assert_eq!(ediff::deserialize(&serialized).unwrap(), diffs);
});
