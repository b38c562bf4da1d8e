use core::cmp::Ordering;

use ttf_parser::GlyphId;

use crate::digest::SetDigest;

/// A record that maps a range of glyph ids to a value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RangeRecord {
    /// First glyph id in the range.
    pub start: GlyphId,
    /// Last glyph id in the range, inclusive.
    pub end: GlyphId,
    /// The value of `start`. For coverages, the values of the following
    /// glyphs increase by one.
    pub value: u16,
}

impl RangeRecord {
    /// Creates a new record.
    pub fn new(start: u16, end: u16, value: u16) -> Self {
        RangeRecord { start: GlyphId(start), end: GlyphId(end), value }
    }

    fn binary_search(records: &[RangeRecord], glyph: GlyphId) -> Option<&RangeRecord> {
        records
            .binary_search_by(|record| {
                if glyph < record.start {
                    Ordering::Greater
                } else if glyph <= record.end {
                    Ordering::Equal
                } else {
                    Ordering::Less
                }
            })
            .ok()
            .map(|i| &records[i])
    }
}

/// A set of glyphs, each with an index.
///
/// A glyph's coverage index selects the per-glyph data of a subtable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Coverage {
    /// Sorted glyph list. The index is the position in the list.
    Glyphs(Vec<GlyphId>),
    /// Sorted, non-overlapping ranges.
    Ranges(Vec<RangeRecord>),
}

impl Coverage {
    /// Creates a coverage from glyphs, sorting them.
    pub fn from_glyphs(glyphs: impl IntoIterator<Item = u16>) -> Self {
        let mut glyphs: Vec<GlyphId> = glyphs.into_iter().map(GlyphId).collect();
        glyphs.sort();
        glyphs.dedup();
        Coverage::Glyphs(glyphs)
    }

    /// Returns the coverage index of the glyph or `None` if it is not covered.
    pub fn get(&self, glyph: GlyphId) -> Option<u16> {
        match self {
            Self::Glyphs(glyphs) => glyphs.binary_search(&glyph).ok().map(|i| i as u16),
            Self::Ranges(records) => {
                let record = RangeRecord::binary_search(records, glyph)?;
                let offset = glyph.0 - record.start.0;
                record.value.checked_add(offset)
            }
        }
    }

    /// Checks that the glyph is covered.
    #[inline]
    pub fn contains(&self, glyph: GlyphId) -> bool {
        self.get(glyph).is_some()
    }

    pub(crate) fn collect(&self, digest: &mut SetDigest) {
        match self {
            Self::Glyphs(glyphs) => {
                for &glyph in glyphs {
                    digest.add(glyph);
                }
            }
            Self::Ranges(records) => {
                for record in records {
                    digest.add_range(record.start, record.end);
                }
            }
        }
    }
}

/// A mapping of glyphs to classes. Unlisted glyphs are in class 0.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ClassDef {
    /// Classes of consecutive glyphs starting at `start`.
    Array {
        /// The first classified glyph.
        start: GlyphId,
        /// Classes, one per glyph.
        classes: Vec<u16>,
    },
    /// Sorted, non-overlapping ranges sharing one class each.
    Ranges(Vec<RangeRecord>),
}

impl ClassDef {
    /// Creates a class definition from `(glyph, class)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u16, u16)>) -> Self {
        let mut pairs: Vec<(u16, u16)> = pairs.into_iter().collect();
        pairs.sort_unstable();
        ClassDef::Ranges(
            pairs
                .into_iter()
                .map(|(glyph, class)| RangeRecord::new(glyph, glyph, class))
                .collect(),
        )
    }

    /// Returns the glyph class of the glyph (zero if it is not defined).
    pub fn get(&self, glyph: GlyphId) -> u16 {
        let class = match self {
            Self::Array { start, classes } => glyph
                .0
                .checked_sub(start.0)
                .and_then(|index| classes.get(usize::from(index)).copied()),
            Self::Ranges(records) => {
                RangeRecord::binary_search(records, glyph).map(|record| record.value)
            }
        };

        class.unwrap_or(0)
    }
}

impl Default for ClassDef {
    fn default() -> Self {
        ClassDef::Ranges(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_indices() {
        let glyphs = Coverage::from_glyphs([30, 10, 20, 10]);
        assert_eq!(glyphs.get(GlyphId(10)), Some(0));
        assert_eq!(glyphs.get(GlyphId(30)), Some(2));
        assert_eq!(glyphs.get(GlyphId(15)), None);

        let ranges = Coverage::Ranges(vec![RangeRecord::new(5, 9, 0), RangeRecord::new(20, 21, 5)]);
        assert_eq!(ranges.get(GlyphId(7)), Some(2));
        assert_eq!(ranges.get(GlyphId(21)), Some(6));
        assert_eq!(ranges.get(GlyphId(10)), None);
    }

    #[test]
    fn class_lookup() {
        let array = ClassDef::Array { start: GlyphId(4), classes: vec![1, 2, 0, 3] };
        assert_eq!(array.get(GlyphId(3)), 0);
        assert_eq!(array.get(GlyphId(5)), 2);
        assert_eq!(array.get(GlyphId(7)), 3);
        assert_eq!(array.get(GlyphId(8)), 0);

        let pairs = ClassDef::from_pairs([(9, 2), (1, 1)]);
        assert_eq!(pairs.get(GlyphId(1)), 1);
        assert_eq!(pairs.get(GlyphId(9)), 2);
        assert_eq!(pairs.get(GlyphId(5)), 0);
    }

    #[test]
    fn digest_covers_ranges() {
        let mut digest = SetDigest::new();
        Coverage::Ranges(vec![RangeRecord::new(100, 140, 0)]).collect(&mut digest);
        assert!(digest.may_have_glyph(GlyphId(120)));
    }
}
