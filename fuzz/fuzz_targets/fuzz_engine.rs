#![no_main]

use libfuzzer_sys::fuzz_target;

use gradecalc_core::calculator::Calculator;
use gradecalc_core::entry::{Entry, Field};
use gradecalc_core::mode::Mode;
use gradecalc_core::store::EntryList;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Each line becomes a semester row "gpa credits".
    let mut list = EntryList::new();
    for line in text.lines().take(64) {
        let index = list.add(Entry::semester());
        let mut parts = line.split_whitespace();
        if let Some(gpa) = parts.next() {
            list.update(index, Field::Gpa, gpa).unwrap();
        }
        if let Some(credits) = parts.next() {
            list.update(index, Field::Credits, credits).unwrap();
        }
    }

    // Should not panic, and never reports a non-finite average.
    let result = Calculator::default().calculate(Mode::Cgpa, &list);
    if let Some(v) = result.result {
        assert!(v.is_finite());
    }
    assert_eq!(result.totals.entries, list.len());
});
