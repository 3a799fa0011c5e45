//! Natural ordering for collector numbers.
//!
//! Collector numbers are not pure integers: a set mixes plain numbers with
//! suffixed and prefixed forms ("1", "10", "123a", "T1", "★5"). Sorting them
//! as strings puts "10" before "2"; sorting them as integers fails outright.
//!
//! # Key layout
//!
//! A number is split into alternating runs, always starting with a text run
//! (possibly empty) so that equal positions hold equal kinds:
//!
//! - "10"   → `["", 10, ""]`
//! - "123a" → `["", 123, "a"]`
//! - "T1"   → `["T", 1, ""]`
//!
//! Digit runs compare numerically, text runs compare as strings, element by
//! element left to right. A leading text run therefore places every prefixed
//! number after all bare numbers ("999" < "T1").

use std::cmp::Ordering;

/// One run of a collector number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Decimal digits with leading zeros stripped ("0" stays "0").
    Number(String),
}

impl Segment {
    fn number(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Segment::Number("0".to_string())
        } else {
            Segment::Number(trimmed.to_string())
        }
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            // Digit strings without leading zeros: longer is larger.
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            // Positions always agree in kind; this arm only matters for
            // hand-built keys.
            (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
            (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for a collector number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollectorKey(Vec<Segment>);

impl CollectorKey {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

/// Split a collector number into its natural sort key.
///
/// Digit runs are ASCII digits only; any other character belongs to a text run.
pub fn collector_key(number: &str) -> CollectorKey {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for ch in number.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut text)));
                segments.push(Segment::number(&digits));
                digits.clear();
            }
            text.push(ch);
        }
    }
    if !digits.is_empty() {
        segments.push(Segment::Text(std::mem::take(&mut text)));
        segments.push(Segment::number(&digits));
    }
    segments.push(Segment::Text(text));

    CollectorKey(segments)
}
