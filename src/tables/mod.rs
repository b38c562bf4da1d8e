//! In-memory substitution and positioning tables.
//!
//! The engine never parses font bytes. A provider builds these tables once
//! and hands them to a [`Face`](crate::Face), which shares them read-only
//! between shaping calls.

mod context;
mod coverage;
mod gpos;
mod gsub;

use ttf_parser::Tag;

use crate::digest::SetDigest;

pub use context::*;
pub use coverage::*;
pub use gpos::*;
pub use gsub::*;

bitflags::bitflags! {
    /// Lookup flags.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
    pub struct LookupFlags: u16 {
        /// Cursive attachments run from right to left.
        const RIGHT_TO_LEFT             = 0x0001;
        /// Skips base glyphs.
        const IGNORE_BASE_GLYPHS        = 0x0002;
        /// Skips ligatures.
        const IGNORE_LIGATURES          = 0x0004;
        /// Skips marks.
        const IGNORE_MARKS              = 0x0008;
        /// All the glyph class skipping flags.
        const IGNORE_FLAGS              = 0x000E;
        /// Skips marks outside of the lookup's mark filtering set.
        const USE_MARK_FILTERING_SET    = 0x0010;
        /// Skips marks of a different attachment class.
        const MARK_ATTACHMENT_TYPE      = 0xFF00;
    }
}

/// A subtable kind of a lookup.
pub trait Subtable {
    /// Adds every glyph that may start a match to the digest.
    fn collect_coverage(&self, digest: &mut SetDigest);

    /// Checks that the subtable is applied from the end of the buffer.
    fn is_reverse(&self) -> bool;
}

/// An ordered list of subtables sharing lookup flags.
#[derive(Clone, Debug)]
pub struct Lookup<T> {
    flags: LookupFlags,
    mark_filtering_set: Option<u16>,
    subtables: Vec<T>,
    digest: SetDigest,
    reverse: bool,
}

impl<T: Subtable> Lookup<T> {
    /// Creates a lookup.
    pub fn new(flags: LookupFlags, subtables: Vec<T>) -> Self {
        let mut digest = SetDigest::new();
        let mut reverse = !subtables.is_empty();
        for subtable in &subtables {
            subtable.collect_coverage(&mut digest);
            reverse &= subtable.is_reverse();
        }

        Lookup {
            flags,
            mark_filtering_set: None,
            subtables,
            digest,
            reverse,
        }
    }

    /// Restricts skipped marks to the given set of the face.
    ///
    /// Also sets `USE_MARK_FILTERING_SET`.
    pub fn with_mark_filtering_set(mut self, set: u16) -> Self {
        self.flags |= LookupFlags::USE_MARK_FILTERING_SET;
        self.mark_filtering_set = Some(set);
        self
    }
}

impl<T> Lookup<T> {
    /// Returns the lookup flags.
    #[inline]
    pub fn flags(&self) -> LookupFlags {
        self.flags
    }

    /// Returns the subtables.
    #[inline]
    pub fn subtables(&self) -> &[T] {
        &self.subtables
    }

    /// Lookup flags in the low 16 bits, the mark filtering set in the high ones.
    pub(crate) fn props(&self) -> u32 {
        let mut props = u32::from(self.flags.bits());
        if let Some(set) = self.mark_filtering_set {
            if self.flags.contains(LookupFlags::USE_MARK_FILTERING_SET) {
                props |= u32::from(set) << 16;
            }
        }

        props
    }

    #[inline]
    pub(crate) fn is_reverse(&self) -> bool {
        self.reverse
    }

    #[inline]
    pub(crate) fn digest(&self) -> &SetDigest {
        &self.digest
    }
}

/// Features of a language system, as indices into the feature list.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct LangSys {
    /// A feature applied regardless of what is requested.
    pub required_feature: Option<u16>,
    /// Features applied when requested or on by default.
    pub features: Vec<u16>,
}

/// Language systems of one script.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScriptRecord {
    /// An OpenType script tag, like `arab`.
    pub tag: Tag,
    /// Used when the language has no system of its own.
    pub default_lang_sys: LangSys,
    /// Per OpenType language tag, like `URD `.
    pub languages: Vec<(Tag, LangSys)>,
}

/// A feature and the lookups implementing it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeatureRecord {
    /// A feature tag, like `liga`.
    pub tag: Tag,
    /// Indices into the lookup list.
    pub lookups: Vec<u16>,
}

/// A substitution or positioning table: scripts, features and lookups.
#[derive(Clone, Debug)]
pub struct LayoutTable<T> {
    /// Script records, searched by tag.
    pub scripts: Vec<ScriptRecord>,
    /// Feature records, referenced by language systems.
    pub features: Vec<FeatureRecord>,
    /// Lookups, referenced by features.
    pub lookups: Vec<Lookup<T>>,
}

/// A table of substitution lookups.
pub type SubstitutionTable = LayoutTable<SubstitutionSubtable>;

/// A table of positioning lookups.
pub type PositioningTable = LayoutTable<PositioningSubtable>;

impl<T> Default for LayoutTable<T> {
    fn default() -> Self {
        LayoutTable {
            scripts: Vec::new(),
            features: Vec::new(),
            lookups: Vec::new(),
        }
    }
}

impl<T> LayoutTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lookup and returns its index.
    pub fn push_lookup(&mut self, lookup: Lookup<T>) -> u16 {
        self.lookups.push(lookup);
        (self.lookups.len() - 1) as u16
    }

    /// Registers a feature for a script and, optionally, a language.
    ///
    /// `None` adds it to the script's default language system. Returns the
    /// index of the new feature record.
    pub fn add_feature(
        &mut self,
        script: Tag,
        language: Option<Tag>,
        feature: Tag,
        lookups: &[u16],
    ) -> u16 {
        self.features.push(FeatureRecord { tag: feature, lookups: lookups.to_vec() });
        let index = (self.features.len() - 1) as u16;
        self.lang_sys_mut(script, language).features.push(index);
        index
    }

    /// Makes a feature record required for a script and, optionally, a language.
    pub fn set_required_feature(&mut self, script: Tag, language: Option<Tag>, feature: u16) {
        self.lang_sys_mut(script, language).required_feature = Some(feature);
    }

    fn lang_sys_mut(&mut self, script: Tag, language: Option<Tag>) -> &mut LangSys {
        let index = match self.scripts.iter().position(|s| s.tag == script) {
            Some(index) => index,
            None => {
                self.scripts.push(ScriptRecord {
                    tag: script,
                    default_lang_sys: LangSys::default(),
                    languages: Vec::new(),
                });
                self.scripts.len() - 1
            }
        };

        let record = &mut self.scripts[index];
        let Some(language) = language else {
            return &mut record.default_lang_sys;
        };

        match record.languages.iter().position(|(tag, _)| *tag == language) {
            Some(i) => &mut record.languages[i].1,
            None => {
                record.languages.push((language, LangSys::default()));
                let last = record.languages.len() - 1;
                &mut record.languages[last].1
            }
        }
    }

    /// Returns a lookup by index.
    #[inline]
    pub fn lookup(&self, index: u16) -> Option<&Lookup<T>> {
        self.lookups.get(usize::from(index))
    }

    /// Returns a feature record by index.
    #[inline]
    pub fn feature(&self, index: u16) -> Option<&FeatureRecord> {
        self.features.get(usize::from(index))
    }

    /// Returns the first script record matching one of the tags, in order.
    pub fn find_script(&self, tags: &[Tag]) -> Option<&ScriptRecord> {
        tags.iter()
            .find_map(|tag| self.scripts.iter().find(|s| s.tag == *tag))
    }

    /// Returns the language system of a script record for the first matching
    /// language tag, or the default one.
    pub fn find_lang_sys<'a>(&self, script: &'a ScriptRecord, languages: &[Tag]) -> &'a LangSys {
        languages
            .iter()
            .find_map(|tag| {
                script
                    .languages
                    .iter()
                    .find(|(t, _)| t == tag)
                    .map(|(_, lang_sys)| lang_sys)
            })
            .unwrap_or(&script.default_lang_sys)
    }

    /// Returns the index of the first feature of a language system with the tag.
    pub fn find_feature(&self, lang_sys: &LangSys, feature: Tag) -> Option<u16> {
        lang_sys
            .features
            .iter()
            .copied()
            .find(|&index| self.feature(index).map_or(false, |f| f.tag == feature))
    }
}

#[cfg(test)]
mod tests {
    use ttf_parser::GlyphId;

    use super::*;

    #[test]
    fn lookup_props_carry_filtering_set() {
        let lookup: Lookup<SubstitutionSubtable> =
            Lookup::new(LookupFlags::IGNORE_LIGATURES, Vec::new()).with_mark_filtering_set(3);
        assert_eq!(lookup.props(), 0x0003_0014);
        assert!(!lookup.is_reverse());
    }

    #[test]
    fn lookup_digest_covers_first_glyphs() {
        let lookup = Lookup::new(
            LookupFlags::empty(),
            vec![SubstitutionSubtable::Single(SingleSubst::from_pairs([(40, 41)]))],
        );
        assert!(lookup.digest().may_have_glyph(GlyphId(40)));
    }

    #[test]
    fn reverse_only_when_every_subtable_is() {
        let reverse = SubstitutionSubtable::ReverseChainSingle(ReverseChainSingleSubst {
            coverage: Coverage::from_glyphs([1]),
            backtrack: Vec::new(),
            lookahead: Vec::new(),
            substitutes: vec![GlyphId(2)],
        });
        let single = SubstitutionSubtable::Single(SingleSubst::from_pairs([(1, 2)]));

        assert!(Lookup::new(LookupFlags::empty(), vec![reverse.clone()]).is_reverse());
        assert!(!Lookup::new(LookupFlags::empty(), vec![reverse, single]).is_reverse());
    }

    #[test]
    fn feature_registration() {
        let mut table = SubstitutionTable::new();
        let latn = Tag::from_bytes(b"latn");
        let trk = Tag::from_bytes(b"TRK ");
        let liga = Tag::from_bytes(b"liga");

        table.add_feature(latn, None, liga, &[0]);
        let turkish = table.add_feature(latn, Some(trk), liga, &[1]);

        let script = table.find_script(&[Tag::from_bytes(b"arab"), latn]).unwrap();
        let lang_sys = table.find_lang_sys(script, &[trk]);
        assert_eq!(table.find_feature(lang_sys, liga), Some(turkish));

        let default = table.find_lang_sys(script, &[Tag::from_bytes(b"DEU ")]);
        assert_eq!(table.find_feature(default, liga), Some(0));
    }
}
