use log::warn;
use ttf_parser::GlyphId;

use super::{TableIndex, MAX_NESTING_LEVEL};
use crate::buffer::{Buffer, GlyphFlags, GlyphInfo, MARK_ATTACHMENT_CLASS_MASK};
use crate::digest::SetDigest;
use crate::tables::{Lookup, LookupFlags};
use crate::{Face, Mask, ShapingError};

/// Apply a lookup.
pub(crate) trait Apply {
    /// Apply the lookup at the current glyph.
    ///
    /// Returns `None` when nothing was applied, leaving the buffer untouched.
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()>;
}

/// The state shared by all lookups of one table.
pub(crate) struct ApplyContext<'a> {
    pub table_index: TableIndex,
    pub face: &'a Face,
    pub buffer: &'a mut Buffer,
    pub lookup_mask: Mask,
    pub lookup_index: u16,
    pub lookup_props: u32,
    pub nesting_level_left: usize,
    pub auto_zwnj: bool,
    pub auto_zwj: bool,
    /// Glyphs that may be in the buffer.
    pub digest: SetDigest,
}

impl<'a> ApplyContext<'a> {
    pub fn new(table_index: TableIndex, face: &'a Face, buffer: &'a mut Buffer, digest: SetDigest) -> Self {
        ApplyContext {
            table_index,
            face,
            buffer,
            lookup_mask: 1,
            lookup_index: 0,
            lookup_props: 0,
            nesting_level_left: MAX_NESTING_LEVEL,
            auto_zwnj: true,
            auto_zwj: true,
            digest,
        }
    }

    /// Applies a nested lookup at the current glyph.
    pub fn recurse(&mut self, sub_lookup_index: u16) -> Option<()> {
        if self.nesting_level_left == 0 {
            let lookup = self.buffer.ops_lookup;
            self.buffer.fail(ShapingError::RuleLoopDetected { lookup });
            return None;
        }

        if !self.buffer.consume_op() {
            return None;
        }

        self.nesting_level_left -= 1;
        let saved_props = self.lookup_props;
        let saved_index = self.lookup_index;

        self.lookup_index = sub_lookup_index;
        let face = self.face;
        let applied = match self.table_index {
            TableIndex::GSUB => self.apply_nested(face.gsub_lookup(sub_lookup_index)),
            TableIndex::GPOS => self.apply_nested(face.gpos_lookup(sub_lookup_index)),
        };

        self.lookup_props = saved_props;
        self.lookup_index = saved_index;
        self.nesting_level_left += 1;
        applied
    }

    fn apply_nested<T>(&mut self, lookup: Option<&Lookup<T>>) -> Option<()>
    where
        Lookup<T>: Apply,
    {
        let Some(lookup) = lookup else {
            warn!("nested lookup {} is out of range", self.lookup_index);
            return None;
        };

        self.lookup_props = lookup.props();
        lookup.apply(self)
    }

    pub fn check_glyph_property(&self, info: &GlyphInfo, match_props: u32) -> bool {
        let glyph_props = info.glyph_props;

        // Lookup flags are lower 16-bit of match props.
        let lookup_flags = match_props as u16;

        // Not covered, if, for example, glyph class is ligature and
        // match_props includes LookupFlags::IGNORE_LIGATURES
        if glyph_props & lookup_flags & LookupFlags::IGNORE_FLAGS.bits() != 0 {
            return false;
        }

        if glyph_props & GlyphFlags::MARK.bits() != 0 {
            // If using mark filtering sets, the high short of
            // match_props has the set index.
            if lookup_flags & LookupFlags::USE_MARK_FILTERING_SET.bits() != 0 {
                let set_index = (match_props >> 16) as u16;
                return self.face.is_mark_glyph(info.as_glyph(), set_index);
            }

            // The second byte of match_props has the meaning
            // "ignore marks of attachment type different than
            // the attachment type specified."
            let attach_type = lookup_flags & LookupFlags::MARK_ATTACHMENT_TYPE.bits();
            if attach_type != 0 {
                return attach_type == glyph_props & MARK_ATTACHMENT_CLASS_MASK;
            }
        }

        true
    }

    fn set_glyph_class(
        &mut self,
        glyph_id: GlyphId,
        class_guess: GlyphFlags,
        ligature: bool,
        component: bool,
    ) {
        self.digest.add(glyph_id);

        let has_glyph_classes = self.face.has_glyph_classes();
        let face_props = self.face.glyph_props(glyph_id);

        let cur = self.buffer.cur_mut(0);
        let mut props = cur.glyph_props | GlyphFlags::SUBSTITUTED.bits();

        if ligature {
            props |= GlyphFlags::LIGATED.bits();
            // Only the last of a ligature and a multiple substitution counts.
            props &= !GlyphFlags::MULTIPLIED.bits();
        }

        if component {
            props |= GlyphFlags::MULTIPLIED.bits();
        }

        cur.glyph_props = if has_glyph_classes {
            (props & GlyphFlags::PRESERVE.bits()) | face_props
        } else if !class_guess.is_empty() {
            (props & GlyphFlags::PRESERVE.bits()) | class_guess.bits()
        } else {
            props
        };
    }

    pub fn replace_glyph(&mut self, glyph_id: GlyphId) {
        self.set_glyph_class(glyph_id, GlyphFlags::empty(), false, false);
        self.buffer.replace_glyph(u32::from(glyph_id.0));
    }

    pub fn replace_glyph_inplace(&mut self, glyph_id: GlyphId) {
        self.set_glyph_class(glyph_id, GlyphFlags::empty(), false, false);
        self.buffer.cur_mut(0).glyph_id = u32::from(glyph_id.0);
    }

    pub fn replace_glyph_with_ligature(&mut self, glyph_id: GlyphId, class_guess: GlyphFlags) {
        self.set_glyph_class(glyph_id, class_guess, true, false);
        self.buffer.replace_glyph(u32::from(glyph_id.0));
    }

    pub fn output_glyph_for_component(&mut self, glyph_id: GlyphId, class_guess: GlyphFlags) {
        self.set_glyph_class(glyph_id, class_guess, false, true);
        self.buffer.output_glyph(u32::from(glyph_id.0));
    }
}
