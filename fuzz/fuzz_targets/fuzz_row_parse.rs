#![no_main]

use libfuzzer_sys::fuzz_target;

use gradecalc_cli::input::{parse_course, parse_semester};
use gradecalc_core::scale::GradeScale;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let scale = GradeScale::standard();

    // Any accepted row must yield finite credits and points.
    for row in [parse_course(text), parse_semester(text)].into_iter().flatten() {
        let credits = row.credits();
        assert!(credits.is_finite());
        let points = row.points(&scale);
        assert!(points.is_finite());
    }
});
