//! Positioning subtables.

use ttf_parser::GlyphId;

use super::{ChainedContextLookup, ClassDef, ContextLookup, Coverage, Subtable};
use crate::buffer::GlyphPosition;
use crate::digest::SetDigest;

/// Adjustments to a glyph's placement and advance.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ValueRecord {
    /// Horizontal adjustment for placement.
    pub x_placement: i16,
    /// Vertical adjustment for placement.
    pub y_placement: i16,
    /// Horizontal adjustment for advance.
    pub x_advance: i16,
    /// Vertical adjustment for advance.
    pub y_advance: i16,
}

impl ValueRecord {
    /// A record that only changes the horizontal advance.
    pub fn x_advance(x_advance: i16) -> Self {
        ValueRecord { x_advance, ..ValueRecord::default() }
    }

    /// Checks that the record changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == ValueRecord::default()
    }

    pub(crate) fn apply_to(&self, pos: &mut GlyphPosition, horizontal: bool) -> bool {
        pos.x_offset += i32::from(self.x_placement);
        pos.y_offset += i32::from(self.y_placement);

        if horizontal {
            pos.x_advance += i32::from(self.x_advance);
        } else {
            // y_advance values grow downward but font-space grows upward.
            pos.y_advance -= i32::from(self.y_advance);
        }

        !self.is_empty()
    }
}

/// An attachment point in font units.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Anchor {
    /// Horizontal position.
    pub x: i16,
    /// Vertical position.
    pub y: i16,
}

impl Anchor {
    /// Creates a new anchor.
    pub fn new(x: i16, y: i16) -> Self {
        Anchor { x, y }
    }
}

/// Adjusts a single glyph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SinglePos {
    /// One record for all covered glyphs.
    Shared {
        /// Adjusted glyphs.
        coverage: Coverage,
        /// The adjustment.
        value: ValueRecord,
    },
    /// A record per coverage index.
    PerGlyph {
        /// Adjusted glyphs.
        coverage: Coverage,
        /// Adjustments by coverage index.
        values: Vec<ValueRecord>,
    },
}

impl SinglePos {
    /// Returns the adjusted glyphs.
    pub fn coverage(&self) -> &Coverage {
        match self {
            Self::Shared { coverage, .. } | Self::PerGlyph { coverage, .. } => coverage,
        }
    }
}

/// Adjustments of a glyph pair.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct PairValues {
    /// Applied to the first glyph.
    pub first: ValueRecord,
    /// When set, the second glyph is consumed along with the first.
    pub second: Option<ValueRecord>,
}

/// A second glyph and the pair adjustments.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PairValueRecord {
    /// The glyph following the covered one.
    pub second_glyph: GlyphId,
    /// Adjustments of both glyphs.
    pub values: PairValues,
}

/// Adjusts a pair of glyphs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PairPos {
    /// Per first glyph, records sorted by the second glyph.
    Glyphs {
        /// First glyphs.
        coverage: Coverage,
        /// Pair sets by coverage index.
        sets: Vec<Vec<PairValueRecord>>,
    },
    /// A matrix indexed by `class1 * class2_count + class2`.
    Classes {
        /// First glyphs.
        coverage: Coverage,
        /// Classes of the first glyph.
        classes1: ClassDef,
        /// Classes of the second glyph.
        classes2: ClassDef,
        /// Number of first glyph classes.
        class1_count: u16,
        /// Number of second glyph classes.
        class2_count: u16,
        /// Adjustments, `class1_count * class2_count` of them.
        matrix: Vec<PairValues>,
    },
}

impl PairPos {
    /// Creates a glyph-pair subtable from `(first, second, values)` triples.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u16, u16, PairValues)>) -> Self {
        let mut pairs: Vec<(u16, u16, PairValues)> = pairs.into_iter().collect();
        pairs.sort_by_key(|p| (p.0, p.1));
        pairs.dedup_by_key(|p| (p.0, p.1));

        let mut firsts: Vec<u16> = Vec::new();
        let mut sets: Vec<Vec<PairValueRecord>> = Vec::new();
        for (first, second, values) in pairs {
            if firsts.last() != Some(&first) {
                firsts.push(first);
                sets.push(Vec::new());
            }

            if let Some(set) = sets.last_mut() {
                set.push(PairValueRecord { second_glyph: GlyphId(second), values });
            }
        }

        PairPos::Glyphs { coverage: Coverage::Glyphs(firsts.into_iter().map(GlyphId).collect()), sets }
    }

    /// Returns the first glyphs of the pairs.
    pub fn coverage(&self) -> &Coverage {
        match self {
            Self::Glyphs { coverage, .. } | Self::Classes { coverage, .. } => coverage,
        }
    }
}

/// Cursive anchors of one glyph.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct EntryExit {
    /// Where the previous glyph connects.
    pub entry: Option<Anchor>,
    /// Where the next glyph connects.
    pub exit: Option<Anchor>,
}

/// Connects the exit anchor of a glyph to the entry anchor of the next.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CursivePos {
    /// Glyphs with cursive anchors.
    pub coverage: Coverage,
    /// Anchors by coverage index.
    pub records: Vec<EntryExit>,
}

/// A mark's class and anchor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MarkRecord {
    /// Selects the anchor column of the base.
    pub class: u16,
    /// The mark's own attachment point.
    pub anchor: Anchor,
}

/// Anchors of a base-like glyph, indexed by mark class.
pub type AnchorRow = Vec<Option<Anchor>>;

/// Attaches marks to base glyphs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MarkBasePos {
    /// Attached marks.
    pub mark_coverage: Coverage,
    /// Base glyphs.
    pub base_coverage: Coverage,
    /// Mark records by mark coverage index.
    pub marks: Vec<MarkRecord>,
    /// Anchor rows by base coverage index.
    pub bases: Vec<AnchorRow>,
}

/// Attaches marks to ligature components.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MarkLigPos {
    /// Attached marks.
    pub mark_coverage: Coverage,
    /// Ligature glyphs.
    pub ligature_coverage: Coverage,
    /// Mark records by mark coverage index.
    pub marks: Vec<MarkRecord>,
    /// Per ligature, per component.
    pub ligatures: Vec<Vec<AnchorRow>>,
}

/// Attaches marks to preceding marks.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MarkMarkPos {
    /// Attached marks.
    pub mark1_coverage: Coverage,
    /// Marks being attached to.
    pub mark2_coverage: Coverage,
    /// Records of the attached marks.
    pub marks: Vec<MarkRecord>,
    /// Anchor rows by `mark2_coverage` index.
    pub mark2s: Vec<AnchorRow>,
}

/// A positioning rule.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PositioningSubtable {
    /// Adjusts one glyph.
    Single(SinglePos),
    /// Adjusts a glyph pair, like kerning.
    Pair(PairPos),
    /// Connects consecutive glyphs.
    Cursive(CursivePos),
    /// Attaches a mark to a base.
    MarkBase(MarkBasePos),
    /// Attaches a mark to a ligature component.
    MarkLig(MarkLigPos),
    /// Attaches a mark to a mark.
    MarkMark(MarkMarkPos),
    /// Runs nested lookups on an input sequence.
    Context(ContextLookup),
    /// Like `Context`, with backtrack and lookahead.
    ChainContext(ChainedContextLookup),
}

impl Subtable for PositioningSubtable {
    fn collect_coverage(&self, digest: &mut SetDigest) {
        match self {
            Self::Single(t) => t.coverage().collect(digest),
            Self::Pair(t) => t.coverage().collect(digest),
            Self::Cursive(t) => t.coverage.collect(digest),
            Self::MarkBase(t) => t.mark_coverage.collect(digest),
            Self::MarkLig(t) => t.mark_coverage.collect(digest),
            Self::MarkMark(t) => t.mark1_coverage.collect(digest),
            Self::Context(t) => t.collect(digest),
            Self::ChainContext(t) => t.collect(digest),
        }
    }

    fn is_reverse(&self) -> bool {
        false
    }
}
