#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(patch) = data.parse::<ediff::Patch>() {
        // Whatever parses has to survive being written out and read back
        let reparsed: ediff::Patch = patch.to_string().parse().unwrap();
        assert_eq!(reparsed, patch);
    }
});
