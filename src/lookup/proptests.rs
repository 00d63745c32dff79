//! Property-based tests for the lookup table
//!
//! - Every seeded train resolves to its own record
//! - Surrounding whitespace never changes the result
//! - Unknown 5-digit numbers never resolve
//! - Repeated lookups are identical

use super::LookupTable;
use proptest::prelude::*;

fn arb_whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,4}"
}

fn arb_known_number() -> impl Strategy<Value = String> {
    let numbers: Vec<String> = LookupTable::seeded()
        .records()
        .map(|r| r.train_number.clone())
        .collect();
    proptest::sample::select(numbers)
}

proptest! {
    #[test]
    fn known_numbers_resolve_with_padding(
        number in arb_known_number(),
        left in arb_whitespace(),
        right in arb_whitespace(),
    ) {
        let table = LookupTable::seeded();
        let padded = format!("{left}{number}{right}");
        let record = table.get(&padded).expect("seeded number must resolve");
        prop_assert_eq!(&record.train_number, &number);
        prop_assert_eq!(table.get(&number), Some(record));
    }

    #[test]
    fn unknown_numbers_never_resolve(number in "[0-9]{5}") {
        let table = LookupTable::seeded();
        let known = table.records().any(|r| r.train_number == number);
        prop_assert_eq!(table.get(&number).is_some(), known);
    }

    #[test]
    fn lookups_are_idempotent(number in "[0-9 ]{0,8}") {
        let table = LookupTable::seeded();
        let first = table.get(&number).cloned();
        let second = table.get(&number).cloned();
        prop_assert_eq!(first, second);
    }
}
