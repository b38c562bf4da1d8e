//! Substitution subtables.

use ttf_parser::GlyphId;

use super::{ChainedContextLookup, ContextLookup, Coverage, Subtable};
use crate::digest::SetDigest;

/// Replaces one glyph with another.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SingleSubst {
    /// Adds a delta to the glyph id, modulo 65536.
    Delta {
        /// Replaced glyphs.
        coverage: Coverage,
        /// Added to each glyph id.
        delta: i16,
    },
    /// Substitutes per coverage index.
    Glyphs {
        /// Replaced glyphs.
        coverage: Coverage,
        /// Substitutes by coverage index.
        substitutes: Vec<GlyphId>,
    },
}

impl SingleSubst {
    /// Creates a subtable from `(glyph, substitute)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u16, u16)>) -> Self {
        let mut pairs: Vec<(u16, u16)> = pairs.into_iter().collect();
        pairs.sort_unstable();
        pairs.dedup_by_key(|p| p.0);
        SingleSubst::Glyphs {
            coverage: Coverage::from_glyphs(pairs.iter().map(|p| p.0)),
            substitutes: pairs.iter().map(|p| GlyphId(p.1)).collect(),
        }
    }

    /// Returns the replaced glyphs.
    pub fn coverage(&self) -> &Coverage {
        match self {
            Self::Delta { coverage, .. } | Self::Glyphs { coverage, .. } => coverage,
        }
    }
}

/// Replaces one glyph with a sequence of glyphs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MultipleSubst {
    /// Replaced glyphs.
    pub coverage: Coverage,
    /// Replacement sequences by coverage index. An empty one deletes the glyph.
    pub sequences: Vec<Vec<GlyphId>>,
}

impl MultipleSubst {
    /// Creates a subtable from `(glyph, sequence)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (u16, &'a [u16])>) -> Self {
        let mut pairs: Vec<(u16, Vec<GlyphId>)> = pairs
            .into_iter()
            .map(|(g, seq)| (g, seq.iter().copied().map(GlyphId).collect()))
            .collect();
        pairs.sort_by_key(|p| p.0);
        pairs.dedup_by_key(|p| p.0);
        MultipleSubst {
            coverage: Coverage::from_glyphs(pairs.iter().map(|p| p.0)),
            sequences: pairs.into_iter().map(|p| p.1).collect(),
        }
    }
}

/// Replaces one glyph with one of its alternates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlternateSubst {
    /// Replaced glyphs.
    pub coverage: Coverage,
    /// Alternate sets by coverage index. A feature value of `n` picks the
    /// `n`th alternate, counting from one.
    pub alternates: Vec<Vec<GlyphId>>,
}

impl AlternateSubst {
    /// Creates a subtable from `(glyph, alternates)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (u16, &'a [u16])>) -> Self {
        let MultipleSubst { coverage, sequences } = MultipleSubst::from_pairs(pairs);
        AlternateSubst { coverage, alternates: sequences }
    }
}

/// A ligature glyph and the components it replaces.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ligature {
    /// The ligature glyph.
    pub glyph: GlyphId,
    /// The second and following components.
    pub components: Vec<GlyphId>,
}

/// Replaces a sequence of glyphs with one glyph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LigatureSubst {
    /// First components.
    pub coverage: Coverage,
    /// Per first component. Earlier ligatures take precedence.
    pub sets: Vec<Vec<Ligature>>,
}

impl LigatureSubst {
    /// Creates a subtable from `(components, ligature)` pairs.
    ///
    /// Pairs sharing a first component keep their relative order.
    pub fn from_ligatures<'a>(ligatures: impl IntoIterator<Item = (&'a [u16], u16)>) -> Self {
        let mut firsts: Vec<u16> = Vec::new();
        let mut sets: Vec<Vec<Ligature>> = Vec::new();
        for (components, glyph) in ligatures {
            let Some((&first, rest)) = components.split_first() else {
                continue;
            };

            let ligature = Ligature {
                glyph: GlyphId(glyph),
                components: rest.iter().copied().map(GlyphId).collect(),
            };

            match firsts.binary_search(&first) {
                Ok(i) => sets[i].push(ligature),
                Err(i) => {
                    firsts.insert(i, first);
                    sets.insert(i, vec![ligature]);
                }
            }
        }

        LigatureSubst { coverage: Coverage::Glyphs(firsts.into_iter().map(GlyphId).collect()), sets }
    }
}

/// A single substitution applied from the end of the buffer, with context.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReverseChainSingleSubst {
    /// Replaced glyphs.
    pub coverage: Coverage,
    /// Glyphs before the replaced one, closest first.
    pub backtrack: Vec<Coverage>,
    /// Glyphs after the replaced one.
    pub lookahead: Vec<Coverage>,
    /// Substitutes by coverage index.
    pub substitutes: Vec<GlyphId>,
}

/// A substitution rule.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubstitutionSubtable {
    /// One glyph for one glyph.
    Single(SingleSubst),
    /// A sequence for one glyph.
    Multiple(MultipleSubst),
    /// One of several alternates for one glyph.
    Alternate(AlternateSubst),
    /// One glyph for a sequence.
    Ligature(LigatureSubst),
    /// Runs nested lookups on an input sequence.
    Context(ContextLookup),
    /// Like `Context`, with backtrack and lookahead.
    ChainContext(ChainedContextLookup),
    /// Single substitution with context, swept from the end.
    ReverseChainSingle(ReverseChainSingleSubst),
}

impl Subtable for SubstitutionSubtable {
    fn collect_coverage(&self, digest: &mut SetDigest) {
        match self {
            Self::Single(t) => t.coverage().collect(digest),
            Self::Multiple(t) => t.coverage.collect(digest),
            Self::Alternate(t) => t.coverage.collect(digest),
            Self::Ligature(t) => t.coverage.collect(digest),
            Self::Context(t) => t.collect(digest),
            Self::ChainContext(t) => t.collect(digest),
            Self::ReverseChainSingle(t) => t.coverage.collect(digest),
        }
    }

    fn is_reverse(&self) -> bool {
        matches!(self, Self::ReverseChainSingle(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ligatures_group_by_first_component() {
        let subst = LigatureSubst::from_ligatures([
            (&[5, 6, 7][..], 100),
            (&[2, 3][..], 101),
            (&[5, 6][..], 102),
        ]);

        assert_eq!(subst.coverage, Coverage::Glyphs(vec![GlyphId(2), GlyphId(5)]));
        assert_eq!(subst.sets[1].len(), 2);
        assert_eq!(subst.sets[1][0].glyph, GlyphId(100));
        assert_eq!(subst.sets[1][1].components, vec![GlyphId(6)]);
    }

    #[test]
    fn single_pairs_are_sorted() {
        let SingleSubst::Glyphs { coverage, substitutes } = SingleSubst::from_pairs([(9, 1), (3, 2)]) else {
            panic!("expected a glyph list");
        };

        assert_eq!(coverage.get(GlyphId(3)), Some(0));
        assert_eq!(substitutes, vec![GlyphId(2), GlyphId(1)]);
    }
}
