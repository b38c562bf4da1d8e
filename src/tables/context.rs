//! Context matching rules shared by substitution and positioning.
//!
//! Backtrack sequences are listed closest glyph first, i.e. in reverse
//! logical order. Input sequences never include the first glyph, which is
//! matched by the rule's coverage or class.

use super::{ClassDef, Coverage};
use crate::digest::SetDigest;

/// Applies a nested lookup at a position of the matched input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SequenceLookupRecord {
    /// Index into the matched input, 0 being the first glyph.
    pub sequence_index: u16,
    /// The nested lookup, in the same table.
    pub lookup_index: u16,
}

impl SequenceLookupRecord {
    /// Creates a new record.
    pub fn new(sequence_index: u16, lookup_index: u16) -> Self {
        SequenceLookupRecord { sequence_index, lookup_index }
    }
}

/// An input sequence of glyph ids or classes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SequenceRule {
    /// Values of the second and following input glyphs.
    pub input: Vec<u16>,
    /// Nested lookups to apply on a match.
    pub lookups: Vec<SequenceLookupRecord>,
}

/// An input sequence with backtrack and lookahead, of glyph ids or classes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ChainedSequenceRule {
    /// Values preceding the input, closest first.
    pub backtrack: Vec<u16>,
    /// Values of the second and following input glyphs.
    pub input: Vec<u16>,
    /// Values following the input.
    pub lookahead: Vec<u16>,
    /// Nested lookups to apply on a match.
    pub lookups: Vec<SequenceLookupRecord>,
}

/// A contextual lookup subtable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ContextLookup {
    /// Rules over glyph ids, grouped by the coverage index of the first glyph.
    Glyphs {
        /// First glyphs.
        coverage: Coverage,
        /// Rule sets by coverage index, tried in order.
        sets: Vec<Vec<SequenceRule>>,
    },
    /// Rules over classes, grouped by the class of the first glyph.
    Classes {
        /// First glyphs.
        coverage: Coverage,
        /// Classes of every input glyph.
        classes: ClassDef,
        /// Rule sets by class.
        sets: Vec<Vec<SequenceRule>>,
    },
    /// A single rule with one coverage per input glyph, first glyph included.
    Coverages {
        /// Input coverages.
        coverages: Vec<Coverage>,
        /// Nested lookups to apply on a match.
        lookups: Vec<SequenceLookupRecord>,
    },
}

impl ContextLookup {
    /// The coverage of the first input glyph.
    pub fn coverage(&self) -> Option<&Coverage> {
        match self {
            Self::Glyphs { coverage, .. } | Self::Classes { coverage, .. } => Some(coverage),
            Self::Coverages { coverages, .. } => coverages.first(),
        }
    }

    pub(crate) fn collect(&self, digest: &mut SetDigest) {
        match self.coverage() {
            Some(coverage) => coverage.collect(digest),
            None => *digest = SetDigest::full(),
        }
    }
}

/// A chained contextual lookup subtable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ChainedContextLookup {
    /// Rules over glyph ids, grouped by the coverage index of the first glyph.
    Glyphs {
        /// First glyphs.
        coverage: Coverage,
        /// Rule sets by coverage index, tried in order.
        sets: Vec<Vec<ChainedSequenceRule>>,
    },
    /// Rules over classes, grouped by the input class of the first glyph.
    Classes {
        /// First glyphs.
        coverage: Coverage,
        /// Classes of backtrack glyphs.
        backtrack_classes: ClassDef,
        /// Classes of input glyphs.
        input_classes: ClassDef,
        /// Classes of lookahead glyphs.
        lookahead_classes: ClassDef,
        /// Rule sets by input class.
        sets: Vec<Vec<ChainedSequenceRule>>,
    },
    /// A single rule with one coverage per glyph.
    Coverages {
        /// Closest first.
        backtrack: Vec<Coverage>,
        /// First glyph included.
        input: Vec<Coverage>,
        /// Glyphs following the input.
        lookahead: Vec<Coverage>,
        /// Nested lookups to apply on a match.
        lookups: Vec<SequenceLookupRecord>,
    },
}

impl ChainedContextLookup {
    /// The coverage of the first input glyph.
    pub fn coverage(&self) -> Option<&Coverage> {
        match self {
            Self::Glyphs { coverage, .. } | Self::Classes { coverage, .. } => Some(coverage),
            Self::Coverages { input, .. } => input.first(),
        }
    }

    pub(crate) fn collect(&self, digest: &mut SetDigest) {
        match self.coverage() {
            Some(coverage) => coverage.collect(digest),
            None => *digest = SetDigest::full(),
        }
    }
}
