//! Draft-ranking files: parse, reconcile set codes, render.
//!
//! Each entry line is `rank|name|rarity|setcode`. Blank lines and lines
//! starting with `//` are carried through untouched, as is every entry whose
//! set code does not change.

use tracing::warn;

use crate::card::CardSet;
use crate::error::CardError;

const COMMENT_MARKER: &str = "//";

const FIELD_SEPARATOR: char = '|';

/// One `rank|name|rarity|setcode` line. Only the set code can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    rank: String,
    name: String,
    rarity: String,
    set_code: String,
    /// The line exactly as read, terminator included.
    raw: String,
    rewritten: bool,
}

impl RankingEntry {
    pub fn rank(&self) -> &str {
        &self.rank
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rarity(&self) -> &str {
        &self.rarity
    }

    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    /// Replace the set code. Returns whether it actually changed.
    pub fn rewrite_set_code(&mut self, set_code: &str) -> bool {
        if self.set_code == set_code {
            return false;
        }
        self.set_code = set_code.to_string();
        self.rewritten = true;
        true
    }

    fn line_terminator(&self) -> &str {
        if self.raw.ends_with("\r\n") {
            "\r\n"
        } else if self.raw.ends_with('\n') {
            "\n"
        } else {
            ""
        }
    }

    fn render_into(&self, out: &mut String) {
        if !self.rewritten {
            out.push_str(&self.raw);
            return;
        }
        out.push_str(&format!(
            "{}|{}|{}|{}{}",
            self.rank,
            self.name,
            self.rarity,
            self.set_code,
            self.line_terminator()
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingLine {
    /// Blank or comment line, kept byte for byte.
    Verbatim(String),
    Entry(RankingEntry),
}

/// Parse a ranking file. Line terminators are preserved.
pub fn parse_rankings(text: &str) -> Result<Vec<RankingLine>, CardError> {
    text.split_inclusive('\n')
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<RankingLine, CardError> {
    if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
        return Ok(RankingLine::Verbatim(line.to_string()));
    }

    let content = line.trim();
    let fields: Vec<&str> = content.split(FIELD_SEPARATOR).collect();
    let [rank, name, rarity, set_code] = fields.as_slice() else {
        return Err(CardError::MalformedEntry {
            line: line_no,
            fields: fields.len(),
            content: content.to_string(),
        });
    };

    Ok(RankingLine::Entry(RankingEntry {
        rank: rank.to_string(),
        name: name.to_string(),
        rarity: rarity.to_string(),
        set_code: set_code.to_string(),
        raw: line.to_string(),
        rewritten: false,
    }))
}

/// Write lines back out. Unchanged lines come out exactly as they were read.
pub fn render_rankings(lines: &[RankingLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            RankingLine::Verbatim(raw) => out.push_str(raw),
            RankingLine::Entry(entry) => entry.render_into(&mut out),
        }
    }
    out
}

/// An alternate card pool an entry may be moved to.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub set_code: &'a str,
    pub cards: &'a CardSet,
}

/// An entry whose card is in none of the sets searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub rank: String,
    pub name: String,
    pub set_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub lines: Vec<RankingLine>,
    pub rewritten: usize,
    pub not_found: Vec<NotFound>,
}

impl Reconciliation {
    pub fn entries(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, RankingLine::Entry(_)))
            .count()
    }
}

/// Move each entry to the first candidate set (in the order given) that
/// contains its card by exact name. Entries found only in `main` stay as they
/// are. Entries found nowhere stay as they are and are reported.
pub fn reconcile(lines: Vec<RankingLine>, main: &CardSet, candidates: &[Candidate<'_>]) -> Reconciliation {
    let mut result = Reconciliation::default();

    for line in lines {
        let RankingLine::Entry(mut entry) = line else {
            result.lines.push(line);
            continue;
        };

        match candidates.iter().find(|c| c.cards.contains_name(&entry.name)) {
            Some(candidate) => {
                if entry.rewrite_set_code(candidate.set_code) {
                    result.rewritten += 1;
                }
            }
            None if main.contains_name(&entry.name) => {}
            None => {
                warn!(
                    rank = %entry.rank,
                    name = %entry.name,
                    set_code = %entry.set_code,
                    "card not found in main or candidate sets"
                );
                result.not_found.push(NotFound {
                    rank: entry.rank.clone(),
                    name: entry.name.clone(),
                    set_code: entry.set_code.clone(),
                });
            }
        }

        result.lines.push(RankingLine::Entry(entry));
    }

    result
}
