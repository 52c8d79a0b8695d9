//! Groups transcription lines into grave records.
//!
//! Transcriptions come in two shapes:
//!
//! ```text
//! A01 line 1        12
//! line 2            line 1
//!                   line 2
//! A02 line 1        13
//! line 2            line 1
//! ```
//!
//! On the left, records are separated by blank lines and the id is a fixed
//! number of leading characters of the first line. On the right, an id line
//! is recognized by its shape alone (see [`is_id_line`]).

use crate::GraveRecord;

/// Longest line (in characters, terminator excluded) that can still be read
/// as a grave id. Five with the newline counted.
pub const MAX_ID_LINE_LEN: usize = 4;

/// How record boundaries are detected in a transcription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Blank lines separate records; the first `id_width` characters of a
    /// record's first line are its id and the rest starts the inscription.
    /// Inscription lines are joined with newlines.
    BlankLine { id_width: usize },
    /// Every line accepted by [`is_id_line`] opens a new record. Inscription
    /// lines are concatenated without a separator.
    IdLine,
}

impl BoundaryRule {
    fn separator(&self) -> &'static str {
        match self {
            BoundaryRule::BlankLine { .. } => "\n",
            BoundaryRule::IdLine => "",
        }
    }
}

/// A line is a grave id when it starts with a digit and is at most
/// [`MAX_ID_LINE_LEN`] characters long.
///
/// Short inscription lines such as `1850` match too; transcribers escape
/// them with a leading space.
pub fn is_id_line(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
        && line.chars().count() <= MAX_ID_LINE_LEN
}

#[derive(Debug)]
struct Pending {
    id: String,
    inscription: String,
}

impl Pending {
    fn append(&mut self, text: &str, separator: &str) {
        if !self.inscription.is_empty() {
            self.inscription.push_str(separator);
        }
        self.inscription.push_str(text);
    }
}

/// Single-pass line grouper holding the record currently being assembled
pub struct RecordGrouper<'a> {
    rule: BoundaryRule,
    section: &'a str,
    pending: Option<Pending>,
    records: Vec<GraveRecord>,
}

impl<'a> RecordGrouper<'a> {
    pub fn new(rule: BoundaryRule, section: &'a str) -> Self {
        Self {
            rule,
            section,
            pending: None,
            records: Vec::new(),
        }
    }

    /// Feed one line, without its line terminator
    pub fn push_line(&mut self, line: &str) {
        match self.rule {
            BoundaryRule::BlankLine { id_width } => self.push_delimited(line, id_width),
            BoundaryRule::IdLine => self.push_heuristic(line),
        }
    }

    /// Flush the last record and return everything in input order
    pub fn finish(mut self) -> Vec<GraveRecord> {
        self.flush();
        self.records
    }

    fn push_delimited(&mut self, line: &str, id_width: usize) {
        if line.trim().is_empty() {
            self.flush();
            return;
        }

        let separator = self.rule.separator();
        match self.pending.as_mut() {
            Some(pending) => pending.append(line.trim_start(), separator),
            None => {
                let split = line
                    .char_indices()
                    .nth(id_width)
                    .map_or(line.len(), |(idx, _)| idx);
                let (id, rest) = line.split_at(split);
                self.pending = Some(Pending {
                    id: id.trim_end().to_string(),
                    inscription: rest.trim_start().to_string(),
                });
            }
        }
    }

    fn push_heuristic(&mut self, line: &str) {
        if is_id_line(line) {
            self.flush();
            self.pending = Some(Pending {
                id: line.to_string(),
                inscription: String::new(),
            });
            return;
        }

        let separator = self.rule.separator();
        match self.pending.as_mut() {
            Some(pending) => pending.append(line.trim_start_matches(' '), separator),
            None => log::warn!("Dropping line before the first grave id: {line:?}"),
        }
    }

    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Grave {}-{} complete", self.section, pending.id);
            self.records.push(GraveRecord::new(
                self.section,
                pending.id,
                pending.inscription,
            ));
        }
    }
}

/// Group a sequence of lines into grave records, preserving input order
pub fn group_lines<'l>(
    lines: impl IntoIterator<Item = &'l str>,
    rule: BoundaryRule,
    section: &str,
) -> Vec<GraveRecord> {
    let mut grouper = RecordGrouper::new(rule, section);
    for line in lines {
        grouper.push_line(line);
    }
    grouper.finish()
}
