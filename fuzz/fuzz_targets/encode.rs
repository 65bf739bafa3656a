#![no_main]
use libfuzzer_sys::fuzz_target;
use nysiis::Nysiis;

fuzz_target!(|data: &str| {
    let key = Nysiis::default().encode(data);

    // Keys hold nothing but letters.
    assert!(key.chars().all(|c| c.is_alphabetic()));

    let capped = Nysiis::traditional().encode(data);
    assert!(capped.chars().count() <= 6);
    assert!(key.starts_with(&capped));
});
