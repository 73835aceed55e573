//! Property-based tests for the entry store and the weighted-average engine.

use proptest::prelude::*;

use gradecalc_core::entry::{CourseEntry, Entry, Field, SemesterEntry};
use gradecalc_core::grade::Grade;
use gradecalc_core::scale::{GradeScale, PointsResolver};
use gradecalc_core::store::EntryList;
use gradecalc_core::{accumulate, weighted_average};

fn arb_grade() -> impl Strategy<Value = Option<Grade>> {
    prop_oneof![
        1 => Just(None),
        10 => (0..Grade::ALL.len()).prop_map(|i| Some(Grade::ALL[i])),
    ]
}

fn arb_credits() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (0u32..=6).prop_map(|c| c.to_string()),
        1 => Just(String::new()),
        1 => "[g-z]{1,4}",
    ]
}

fn arb_course() -> impl Strategy<Value = Entry> {
    ("[A-Za-z ]{0,12}", arb_grade(), arb_credits()).prop_map(|(name, grade, credits)| {
        Entry::Course(CourseEntry {
            name,
            grade,
            credits,
        })
    })
}

fn arb_semester() -> impl Strategy<Value = Entry> {
    (0u32..=400, arb_credits()).prop_map(|(gpa, credits)| {
        Entry::Semester(SemesterEntry {
            gpa: format!("{:.2}", f64::from(gpa) / 100.0),
            credits,
        })
    })
}

fn arb_entry() -> impl Strategy<Value = Entry> {
    prop_oneof![arb_course(), arb_semester()]
}

/// Independent reference: parse by hand, sum by hand.
fn reference(entries: &[Entry], scale: &GradeScale) -> Option<f64> {
    let mut points = 0.0;
    let mut credits = 0.0;
    for entry in entries {
        let (c, p) = match entry {
            Entry::Course(c) => (
                c.credits.trim().parse::<f64>().unwrap_or(0.0),
                scale.points(c.grade),
            ),
            Entry::Semester(s) => (
                s.credits.trim().parse::<f64>().unwrap_or(0.0),
                s.gpa.trim().parse::<f64>().unwrap_or(0.0),
            ),
        };
        points += c * p;
        credits += c;
    }
    (credits > 0.0).then(|| points / credits)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The engine agrees with an independently computed weighted sum.
    #[test]
    fn engine_matches_reference(entries in prop::collection::vec(arb_entry(), 0..20)) {
        let scale = GradeScale::standard();
        let got = weighted_average(&entries, &scale);
        let want = reference(&entries, &scale);
        match (got, want) {
            (Some(g), Some(w)) => prop_assert!((g - w).abs() < 1e-9, "{} != {}", g, w),
            (None, None) => {}
            other => prop_assert!(false, "mismatch: {:?}", other),
        }
    }

    /// Every entry is folded in exactly once.
    #[test]
    fn accumulate_visits_each_entry(entries in prop::collection::vec(arb_entry(), 0..20)) {
        let totals = accumulate(&entries, &GradeScale::thirds());
        prop_assert_eq!(totals.entries, entries.len());
    }

    /// Results never leave the 0..=4 band when every input is on the scale.
    #[test]
    fn average_stays_on_scale(entries in prop::collection::vec(arb_entry(), 1..20)) {
        if let Some(avg) = weighted_average(&entries, &GradeScale::standard()) {
            prop_assert!(avg.is_finite());
            prop_assert!((-1e-9..=4.0 + 1e-9).contains(&avg));
        }
    }

    /// Reordering rows never changes the result.
    #[test]
    fn order_does_not_matter(entries in prop::collection::vec(arb_entry(), 0..12)) {
        let scale = GradeScale::standard();
        let forward = weighted_average(&entries, &scale);
        let reversed: Vec<Entry> = entries.iter().rev().cloned().collect();
        let backward = weighted_average(&reversed, &scale);
        match (forward, backward) {
            (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-9),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    /// Appending a row and removing it again restores the list.
    #[test]
    fn add_remove_inverse(
        entries in prop::collection::vec(arb_entry(), 0..10),
        extra in arb_entry(),
    ) {
        let mut list = EntryList::from(entries);
        let before = list.clone();
        let index = list.add(extra);
        prop_assert!(list.remove(index).is_ok());
        prop_assert_eq!(list, before);
    }

    /// Updating one field leaves every other row and field alone.
    #[test]
    fn update_is_isolated(
        entries in prop::collection::vec(arb_course(), 1..10),
        pick in any::<prop::sample::Index>(),
        value in "[0-9]{1,2}",
    ) {
        let mut list = EntryList::from(entries.clone());
        let i = pick.index(entries.len());
        list.update(i, Field::Credits, &value).unwrap();
        for (j, (row, original)) in list.iter().zip(&entries).enumerate() {
            if j == i {
                prop_assert_eq!(row.field_text(Field::Credits), Some(value.as_str()));
                prop_assert_eq!(row.field_text(Field::Name), original.field_text(Field::Name));
                prop_assert_eq!(row.field_text(Field::Grade), original.field_text(Field::Grade));
            } else {
                prop_assert_eq!(row, original);
            }
        }
    }

    /// Out-of-range edits are rejected and change nothing.
    #[test]
    fn out_of_range_edits_rejected(
        entries in prop::collection::vec(arb_entry(), 0..8),
        past_end in 0usize..5,
    ) {
        let mut list = EntryList::from(entries);
        let before = list.clone();
        let index = list.len() + past_end;
        prop_assert!(list.remove(index).is_err());
        prop_assert!(list.update(index, Field::Credits, "3").is_err());
        prop_assert_eq!(list, before);
    }
}

#[test]
fn end_to_end_gpa() {
    let mut list = EntryList::seeded(Entry::course());
    list.update(0, Field::Grade, "A").unwrap();
    list.update(0, Field::Credits, "3").unwrap();
    let i = list.add(Entry::course());
    list.update(i, Field::Grade, "B").unwrap();
    list.update(i, Field::Credits, "2").unwrap();

    let gpa = weighted_average(&list, &GradeScale::standard()).unwrap();
    assert_eq!(format!("{gpa:.2}"), "3.60");
}

#[test]
fn end_to_end_cgpa() {
    let mut list = EntryList::seeded(Entry::semester());
    list.update(0, Field::Gpa, "3.5").unwrap();
    list.update(0, Field::Credits, "15").unwrap();
    let i = list.add(Entry::semester());
    list.update(i, Field::Gpa, "3.8").unwrap();
    list.update(i, Field::Credits, "12").unwrap();

    let cgpa = weighted_average(&list, &GradeScale::standard()).unwrap();
    assert!((cgpa - 3.6333).abs() < 1e-4);
    assert_eq!(format!("{cgpa:.2}"), "3.63");
}

#[test]
fn end_to_end_zero_credits() {
    let mut list = EntryList::seeded(Entry::course());
    list.update(0, Field::Grade, "A").unwrap();
    list.update(0, Field::Credits, "0").unwrap();
    assert_eq!(weighted_average(&list, &GradeScale::standard()), None);
}
