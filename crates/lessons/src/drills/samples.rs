//! Fixed inputs the demo and report walk through.

use std::collections::HashMap;

use crate::value::Loose;

pub const SAMPLE_NAME: &str = "Rafael";

pub const SAMPLE_SEQUENCE: [i64; 3] = [10, 20, 30];

pub fn index_attempts() -> Vec<Loose> {
    vec![
        Loose::from("a"),
        Loose::from(-1),
        Loose::from(0),
        Loose::from(2),
        Loose::from(3),
    ]
}

pub const DIVIDE_CASES: [(&str, &str); 4] = [("10", "2"), ("x", "3"), ("4", "0"), ("5.5", "2.2")];

pub fn person_record() -> HashMap<String, Loose> {
    HashMap::from([
        ("name".to_string(), Loose::from("Isaac")),
        ("age".to_string(), Loose::from(25)),
        ("city".to_string(), Loose::from("São Paulo")),
    ])
}

pub const LOOKUP_KEYS: [&str; 4] = ["name", "age", "address", "city"];

pub fn age_attempt_batches() -> Vec<Vec<Loose>> {
    vec![
        vec![
            Loose::from(-5),
            Loose::from(130),
            Loose::from("x"),
            Loose::from(40),
        ],
        vec![Loose::from(25)],
    ]
}

/// Grades as they arrive: one of them is text.
pub fn raw_grades() -> Vec<Loose> {
    vec![
        Loose::from(8),
        Loose::from(9),
        Loose::from("10"),
        Loose::from(7),
    ]
}

pub const GRADE_INPUT: &str = "6.5, 7, 8, 9";
