//! Catalog queries
//!
//! Pure functions over a loaded [`Catalog`]. None of them allocate new
//! records; results borrow from the catalog.

use crate::catalog::types::{Catalog, CourseDetail, CourseRecord};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Program tag for the Information Systems track
pub const BSIS: &str = "BSIS";

/// Program tag for the Information Technology track
pub const BSIT: &str = "BSIT";

/// Categories that mark a course as backend-related
pub const BACKEND_TAGS: [&str; 6] = [
    "Database",
    "System",
    "Software",
    "Enterprise",
    "Web",
    "Information",
];

/// Records carrying `tag`, in input order
pub fn filter_by_tag<'a, I>(records: I, tag: &str) -> Vec<&'a CourseRecord>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    records.into_iter().filter(|c| c.has_tag(tag)).collect()
}

/// Catalog records carrying `tag`
pub fn courses_with_tag<'a>(catalog: &'a Catalog, tag: &str) -> Vec<&'a CourseRecord> {
    filter_by_tag(catalog.records(), tag)
}

/// True when any tag is one of [`BACKEND_TAGS`]
pub fn is_backend(record: &CourseRecord) -> bool {
    record
        .tags
        .iter()
        .any(|tag| BACKEND_TAGS.contains(&tag.as_str()))
}

/// Backend courses sorted by description
pub fn backend_courses(catalog: &Catalog) -> Vec<&CourseRecord> {
    let mut courses: Vec<&CourseRecord> = catalog.records().filter(|c| is_backend(c)).collect();
    // sort_by is stable: equal descriptions keep catalog order
    courses.sort_by(|a, b| collate(&a.description, &b.description));
    courses
}

/// Name/specialization pair for every record, in traversal order
pub fn course_details(catalog: &Catalog) -> Vec<CourseDetail> {
    catalog.records().map(CourseDetail::from).collect()
}

/// Locale-style string comparison
///
/// Strings are decomposed (NFD) and compared in levels:
/// 1. base letters, case-insensitively, with whitespace and punctuation
///    ordered before digits and digits before letters;
/// 2. accents, position by position, unaccented first;
/// 3. case, lowercase first at the first differing base letter;
/// 4. byte order.
pub fn collate(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (CollationKey::new(a), CollationKey::new(b));
    ka.primary()
        .cmp(kb.primary())
        .then_with(|| ka.accents.cmp(&kb.accents))
        .then_with(|| case_order(&ka.bases, &kb.bases))
        .then_with(|| a.cmp(b))
}

/// Decomposed form of a string: base characters and the marks on each
struct CollationKey {
    bases: Vec<char>,
    accents: Vec<Vec<char>>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut bases = Vec::new();
        let mut accents: Vec<Vec<char>> = Vec::new();
        for c in s.nfd() {
            if is_combining_mark(c) {
                if let Some(marks) = accents.last_mut() {
                    marks.push(c);
                }
            } else {
                bases.push(c);
                accents.push(Vec::new());
            }
        }
        Self { bases, accents }
    }

    fn primary(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        self.bases
            .iter()
            .flat_map(|c| c.to_lowercase())
            .map(|c| (char_class(c), c))
    }
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn case_order(a: &[char], b: &[char]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
