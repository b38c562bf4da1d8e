use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use ttf_parser::GlyphId;

use crate::buffer::GlyphFlags;
use crate::tables::*;
use crate::{FeatureSchedule, Language, Script, ShapingError};

type ScheduleKey = (Script, Option<Language>);

/// A font face: lookup tables plus the glyph data shaping needs.
///
/// Tables are shared behind `Arc`, so cloning a face is cheap. Feature
/// schedules are built on first use and cached per script and language.
pub struct Face {
    units_per_em: i32,
    notdef: GlyphId,
    cmap: HashMap<u32, GlyphId>,
    h_advances: HashMap<u16, i32>,
    v_advances: HashMap<u16, i32>,
    glyph_classes: Option<Arc<ClassDef>>,
    mark_attach_classes: Arc<ClassDef>,
    mark_filtering_sets: Arc<[Coverage]>,
    gsub: Arc<SubstitutionTable>,
    gpos: Arc<PositioningTable>,
    schedules: RwLock<HashMap<ScheduleKey, Arc<FeatureSchedule>>>,
}

impl Clone for Face {
    fn clone(&self) -> Self {
        Face {
            units_per_em: self.units_per_em,
            notdef: self.notdef,
            cmap: self.cmap.clone(),
            h_advances: self.h_advances.clone(),
            v_advances: self.v_advances.clone(),
            glyph_classes: self.glyph_classes.clone(),
            mark_attach_classes: self.mark_attach_classes.clone(),
            mark_filtering_sets: self.mark_filtering_sets.clone(),
            gsub: self.gsub.clone(),
            gpos: self.gpos.clone(),
            // Schedules depend only on the tables, which are shared.
            schedules: RwLock::new(
                self.schedules
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone(),
            ),
        }
    }
}

impl core::fmt::Debug for Face {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Face")
            .field("units_per_em", &self.units_per_em)
            .field("glyphs", &self.cmap.len())
            .finish()
    }
}

impl Face {
    /// Returns the number of font units per EM.
    #[inline]
    pub fn units_per_em(&self) -> i32 {
        self.units_per_em
    }

    /// Returns the glyph used for unmapped codepoints.
    #[inline]
    pub fn notdef(&self) -> GlyphId {
        self.notdef
    }

    /// Maps a codepoint to its glyph.
    pub fn glyph_index(&self, codepoint: u32) -> Result<GlyphId, ShapingError> {
        self.cmap
            .get(&codepoint)
            .copied()
            .ok_or(ShapingError::UnmappedCodepoint(codepoint))
    }

    /// Checks that the face maps a codepoint.
    #[inline]
    pub fn has_glyph(&self, codepoint: u32) -> bool {
        self.cmap.contains_key(&codepoint)
    }

    /// Returns the horizontal advance of a glyph.
    ///
    /// Glyphs without metrics advance by one EM.
    pub fn glyph_h_advance(&self, glyph: GlyphId) -> i32 {
        self.h_advances.get(&glyph.0).copied().unwrap_or(self.units_per_em)
    }

    /// Returns the vertical advance of a glyph.
    ///
    /// Vertical advances point down, so they are negative.
    pub fn glyph_v_advance(&self, glyph: GlyphId) -> i32 {
        -self.v_advances.get(&glyph.0).copied().unwrap_or(self.units_per_em)
    }

    /// Returns the substitution table.
    #[inline]
    pub fn gsub(&self) -> &SubstitutionTable {
        &self.gsub
    }

    /// Returns the positioning table.
    #[inline]
    pub fn gpos(&self) -> &PositioningTable {
        &self.gpos
    }

    /// Returns a substitution lookup.
    #[inline]
    pub fn gsub_lookup(&self, index: u16) -> Option<&Lookup<SubstitutionSubtable>> {
        self.gsub.lookup(index)
    }

    /// Returns a positioning lookup.
    #[inline]
    pub fn gpos_lookup(&self, index: u16) -> Option<&Lookup<PositioningSubtable>> {
        self.gpos.lookup(index)
    }

    /// Checks that the face classifies its glyphs.
    #[inline]
    pub fn has_glyph_classes(&self) -> bool {
        self.glyph_classes.is_some()
    }

    pub(crate) fn glyph_props(&self, glyph: GlyphId) -> u16 {
        let Some(classes) = &self.glyph_classes else {
            return 0;
        };

        match classes.get(glyph) {
            1 => GlyphFlags::BASE_GLYPH.bits(),
            2 => GlyphFlags::LIGATURE.bits(),
            3 => {
                let class = self.mark_attach_classes.get(glyph);
                (class << 8) | GlyphFlags::MARK.bits()
            }
            _ => 0,
        }
    }

    pub(crate) fn is_mark_glyph(&self, glyph: GlyphId, set_index: u16) -> bool {
        self.mark_filtering_sets
            .get(usize::from(set_index))
            .map_or(false, |set| set.contains(glyph))
    }

    /// Returns the feature schedule of a script and language.
    ///
    /// Built on first use and cached for the lifetime of the face.
    pub fn feature_schedule(
        &self,
        script: Script,
        language: Option<&Language>,
    ) -> Result<Arc<FeatureSchedule>, ShapingError> {
        let key = (script, language.cloned());
        if let Some(schedule) = self
            .schedules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(schedule.clone());
        }

        let schedule = Arc::new(FeatureSchedule::new(self, script, language, &[])?);
        debug!(
            "cached a schedule for {} ({})",
            script.tag(),
            language.map_or("default", Language::as_str)
        );

        // Another thread may have won the race. Either schedule is identical.
        let mut schedules = self.schedules.write().unwrap_or_else(PoisonError::into_inner);
        Ok(schedules.entry(key).or_insert(schedule).clone())
    }
}

/// Builds a [`Face`].
#[derive(Clone, Debug)]
pub struct FaceBuilder {
    units_per_em: i32,
    notdef: GlyphId,
    cmap: HashMap<u32, GlyphId>,
    h_advances: HashMap<u16, i32>,
    v_advances: HashMap<u16, i32>,
    glyph_classes: Option<ClassDef>,
    mark_attach_classes: ClassDef,
    mark_filtering_sets: Vec<Coverage>,
    gsub: SubstitutionTable,
    gpos: PositioningTable,
}

impl FaceBuilder {
    /// Creates an empty face with the given EM size.
    pub fn new(units_per_em: i32) -> Self {
        FaceBuilder {
            units_per_em,
            notdef: GlyphId(0),
            cmap: HashMap::new(),
            h_advances: HashMap::new(),
            v_advances: HashMap::new(),
            glyph_classes: None,
            mark_attach_classes: ClassDef::default(),
            mark_filtering_sets: Vec::new(),
            gsub: SubstitutionTable::new(),
            gpos: PositioningTable::new(),
        }
    }

    /// Imports the character map and metrics of an OpenType font.
    ///
    /// Layout tables are not imported.
    pub fn from_font(font: &ttf_parser::Face) -> Self {
        let mut builder = FaceBuilder::new(i32::from(font.units_per_em()));

        if let Some(cmap) = font.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }

                subtable.codepoints(|c| {
                    if let Some(glyph) = subtable.glyph_index(c) {
                        builder.cmap.entry(c).or_insert(glyph);
                    }
                });
            }
        }

        for id in 0..font.number_of_glyphs() {
            let glyph = GlyphId(id);
            if let Some(advance) = font.glyph_hor_advance(glyph) {
                builder.h_advances.insert(id, i32::from(advance));
            }
            if let Some(advance) = font.glyph_ver_advance(glyph) {
                builder.v_advances.insert(id, i32::from(advance));
            }
        }

        debug!(
            "imported {} codepoints and {} glyph metrics",
            builder.cmap.len(),
            builder.h_advances.len()
        );

        builder
    }

    /// Maps a character to a glyph.
    pub fn map(mut self, c: char, glyph: u16) -> Self {
        self.cmap.insert(u32::from(c), GlyphId(glyph));
        self
    }

    /// Sets the glyph used for unmapped codepoints.
    pub fn notdef(mut self, glyph: u16) -> Self {
        self.notdef = GlyphId(glyph);
        self
    }

    /// Sets horizontal advances.
    pub fn advances(mut self, advances: impl IntoIterator<Item = (u16, i32)>) -> Self {
        self.h_advances.extend(advances);
        self
    }

    /// Sets vertical advances.
    pub fn vertical_advances(mut self, advances: impl IntoIterator<Item = (u16, i32)>) -> Self {
        self.v_advances.extend(advances);
        self
    }

    /// Sets glyph classes: 1 base, 2 ligature, 3 mark.
    ///
    /// Without classes, they are guessed from the Unicode general category
    /// while shaping.
    pub fn glyph_classes(mut self, classes: ClassDef) -> Self {
        self.glyph_classes = Some(classes);
        self
    }

    /// Sets mark attachment classes.
    pub fn mark_attach_classes(mut self, classes: ClassDef) -> Self {
        self.mark_attach_classes = classes;
        self
    }

    /// Adds a mark filtering set.
    ///
    /// Sets are numbered in the order they are added.
    pub fn mark_filtering_set(mut self, set: Coverage) -> Self {
        self.mark_filtering_sets.push(set);
        self
    }

    /// Sets the substitution table.
    pub fn gsub(mut self, table: SubstitutionTable) -> Self {
        self.gsub = table;
        self
    }

    /// Sets the positioning table.
    pub fn gpos(mut self, table: PositioningTable) -> Self {
        self.gpos = table;
        self
    }

    /// Creates the face.
    pub fn build(self) -> Face {
        Face {
            units_per_em: self.units_per_em,
            notdef: self.notdef,
            cmap: self.cmap,
            h_advances: self.h_advances,
            v_advances: self.v_advances,
            glyph_classes: self.glyph_classes.map(Arc::new),
            mark_attach_classes: Arc::new(self.mark_attach_classes),
            mark_filtering_sets: self.mark_filtering_sets.into(),
            gsub: Arc::new(self.gsub),
            gpos: Arc::new(self.gpos),
            schedules: RwLock::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::{script, Tag};

    fn face() -> Face {
        let mut gsub = SubstitutionTable::new();
        let lookup = gsub.push_lookup(Lookup::new(
            LookupFlags::empty(),
            vec![SubstitutionSubtable::Single(SingleSubst::from_pairs([(1, 2)]))],
        ));
        gsub.add_feature(Tag::from_bytes(b"latn"), None, Tag::from_bytes(b"liga"), &[lookup]);

        FaceBuilder::new(1000)
            .map('a', 1)
            .map('\u{0301}', 3)
            .notdef(9)
            .advances([(1, 500)])
            .glyph_classes(ClassDef::from_pairs([(1, 1), (2, 2), (3, 3)]))
            .mark_attach_classes(ClassDef::from_pairs([(3, 2)]))
            .mark_filtering_set(Coverage::from_glyphs([3]))
            .gsub(gsub)
            .build()
    }

    #[test]
    fn glyph_mapping() {
        let face = face();
        assert_eq!(face.glyph_index(u32::from('a')), Ok(GlyphId(1)));
        assert_eq!(face.glyph_index(0x62), Err(ShapingError::UnmappedCodepoint(0x62)));
        assert!(face.has_glyph(0x301));
        assert_eq!(face.notdef(), GlyphId(9));
    }

    #[test]
    fn metrics() {
        let face = face();
        assert_eq!(face.glyph_h_advance(GlyphId(1)), 500);
        assert_eq!(face.glyph_h_advance(GlyphId(2)), 1000);
        assert_eq!(face.glyph_v_advance(GlyphId(1)), -1000);
    }

    #[test]
    fn glyph_props() {
        let face = face();
        assert_eq!(face.glyph_props(GlyphId(1)), GlyphFlags::BASE_GLYPH.bits());
        assert_eq!(face.glyph_props(GlyphId(2)), GlyphFlags::LIGATURE.bits());
        assert_eq!(face.glyph_props(GlyphId(3)), 0x0200 | GlyphFlags::MARK.bits());
        assert_eq!(face.glyph_props(GlyphId(4)), 0);
        assert!(face.is_mark_glyph(GlyphId(3), 0));
        assert!(!face.is_mark_glyph(GlyphId(3), 1));

        let bare = FaceBuilder::new(1000).build();
        assert!(!bare.has_glyph_classes());
        assert_eq!(bare.glyph_props(GlyphId(1)), 0);
    }

    #[test]
    fn schedules_are_cached() {
        let face = face();
        let a = face.feature_schedule(script::LATIN, None).unwrap();
        let b = face.feature_schedule(script::LATIN, None).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let lang = Language::from_str("en").unwrap();
        let c = face.feature_schedule(script::LATIN, Some(&lang)).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));

        let cloned = face.clone();
        let d = cloned.feature_schedule(script::LATIN, None).unwrap();
        assert!(Arc::ptr_eq(&a, &d));
    }

    #[test]
    fn thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Face>();
        assert_send_sync::<FeatureSchedule>();
    }
}
