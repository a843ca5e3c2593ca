use std::fmt::{self, Display};

use crate::consts::{FIVE_PRIME_LABEL, THREE_PRIME_LABEL};

///
/// Which end of a read a position count was observed at.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndLabel {
    FivePrime,
    ThreePrime,
}

///
/// How end labels other than `5p` and `3p` are treated.
///
/// `Permissive` folds every token that is not exactly `5p` into the 3' bucket.
/// `Strict` rejects anything that is not `5p` or `3p`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    #[default]
    Permissive,
    Strict,
}

impl EndLabel {
    ///
    /// Classify a raw end label token.
    ///
    /// Returns `None` only under [LabelPolicy::Strict] for an unrecognized token.
    ///
    pub fn classify(token: &str, policy: LabelPolicy) -> Option<EndLabel> {
        match (token, policy) {
            (FIVE_PRIME_LABEL, _) => Some(EndLabel::FivePrime),
            (THREE_PRIME_LABEL, _) => Some(EndLabel::ThreePrime),
            (_, LabelPolicy::Permissive) => Some(EndLabel::ThreePrime),
            (_, LabelPolicy::Strict) => None,
        }
    }

    /// `true` for the two canonical tokens, `5p` and `3p`.
    pub fn is_canonical(token: &str) -> bool {
        token == FIVE_PRIME_LABEL || token == THREE_PRIME_LABEL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndLabel::FivePrime => FIVE_PRIME_LABEL,
            EndLabel::ThreePrime => THREE_PRIME_LABEL,
        }
    }
}

impl Display for EndLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// A single parsed input line: `name`, `end label`, `count`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusRecord {
    pub name: String,
    pub end: EndLabel,
    pub count: u64,
}

///
/// All position counts seen for one locus, split by read end.
/// Counts keep the order in which they were read.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocusAggregate {
    pub name: String,
    pub counts5p: Vec<u64>,
    pub counts3p: Vec<u64>,
}

impl LocusAggregate {
    pub fn new(name: &str) -> Self {
        LocusAggregate {
            name: name.to_string(),
            counts5p: Vec::new(),
            counts3p: Vec::new(),
        }
    }

    /// Append a count to the sequence for the given end.
    pub fn push(&mut self, end: EndLabel, count: u64) {
        match end {
            EndLabel::FivePrime => self.counts5p.push(count),
            EndLabel::ThreePrime => self.counts3p.push(count),
        }
    }

    pub fn counts(&self, end: EndLabel) -> &[u64] {
        match end {
            EndLabel::FivePrime => &self.counts5p,
            EndLabel::ThreePrime => &self.counts3p,
        }
    }

    /// Number of records folded into this locus.
    pub fn len(&self) -> usize {
        self.counts5p.len() + self.counts3p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// Entropy of the 5' and 3' position distributions of one locus.
///
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyResult {
    pub name: String,
    pub entropy5p: f64,
    pub entropy3p: f64,
}
