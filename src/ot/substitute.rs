use ttf_parser::GlyphId;

use crate::buffer::{Buffer, GlyphFlags};
use crate::tables::*;
use crate::{Face, FeatureSchedule};

use super::apply::{Apply, ApplyContext};
use super::matching::{match_backtrack, match_coverage, match_input, match_lookahead, InputMatch};
use super::{TableIndex, MAX_NESTING_LEVEL};

/// Called before substitution lookups are performed, to ensure that glyph
/// class and other properties are set on the glyphs in the buffer.
pub(crate) fn substitute_start(face: &Face, buffer: &mut Buffer) {
    let len = buffer.len;
    for info in &mut buffer.info[..len] {
        info.glyph_props = face.glyph_props(info.as_glyph());
        info.lig_props = 0;
    }
}

pub(crate) fn substitute(schedule: &FeatureSchedule, face: &Face, buffer: &mut Buffer) {
    super::apply_layout_table(schedule, face, buffer, TableIndex::GSUB);
}

impl Apply for SubstitutionSubtable {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        match self {
            Self::Single(t) => t.apply(ctx),
            Self::Multiple(t) => t.apply(ctx),
            Self::Alternate(t) => t.apply(ctx),
            Self::Ligature(t) => t.apply(ctx),
            Self::Context(t) => t.apply(ctx),
            Self::ChainContext(t) => t.apply(ctx),
            Self::ReverseChainSingle(t) => t.apply(ctx),
        }
    }
}

impl Apply for SingleSubst {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        let subst = match self {
            Self::Delta { coverage, delta } => {
                coverage.get(glyph)?;
                // The result is limited to 16 bits, so we explicitly want to truncate.
                GlyphId((i32::from(glyph.0) + i32::from(*delta)) as u16)
            }
            Self::Glyphs { coverage, substitutes } => {
                let index = coverage.get(glyph)?;
                *substitutes.get(usize::from(index))?
            }
        };

        ctx.replace_glyph(subst);
        Some(())
    }
}

impl Apply for MultipleSubst {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        let index = self.coverage.get(glyph)?;
        let sequence = self.sequences.get(usize::from(index))?;

        match sequence.as_slice() {
            [] => ctx.buffer.delete_glyph(),

            // In-place, and not considered a "multiplied" substitution.
            [subst] => ctx.replace_glyph(*subst),

            substitutes => {
                let class = if ctx.buffer.cur(0).is_ligature() {
                    GlyphFlags::BASE_GLYPH
                } else {
                    GlyphFlags::empty()
                };
                let lig_id = ctx.buffer.cur(0).lig_id();

                for (i, subst) in substitutes.iter().enumerate() {
                    // Marks attached to a ligature keep their component.
                    if lig_id == 0 {
                        // The component is truncated to 4 bits anyway.
                        ctx.buffer.cur_mut(0).set_lig_props_for_component(i as u8);
                    }
                    ctx.output_glyph_for_component(*subst, class);
                }

                ctx.buffer.skip_glyph();
            }
        }

        Some(())
    }
}

impl Apply for AlternateSubst {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        let index = self.coverage.get(glyph)?;
        let alternates = self.alternates.get(usize::from(index))?;
        if alternates.is_empty() {
            return None;
        }

        let glyph_mask = ctx.buffer.cur(0).mask;

        // Note: This breaks badly if two features enabled this lookup together.
        let shift = ctx.lookup_mask.trailing_zeros();
        let alt_index = (ctx.lookup_mask & glyph_mask) >> shift;

        let idx = usize::try_from(alt_index).ok()?.checked_sub(1)?;
        ctx.replace_glyph(*alternates.get(idx)?);

        Some(())
    }
}

impl Apply for LigatureSubst {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        let index = self.coverage.get(glyph)?;
        let set = self.sets.get(usize::from(index))?;
        set.iter().find_map(|ligature| ligature.apply(ctx))
    }
}

impl Apply for Ligature {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        // In-place, and not considered a "ligated" substitution.
        if self.components.is_empty() {
            ctx.replace_glyph(self.glyph);
            return Some(());
        }

        let f = |glyph, index: u16| {
            self.components
                .get(usize::from(index))
                .map_or(false, |component| *component == glyph)
        };

        let input = match_input(ctx, self.components.len(), &f)?;
        ligate(ctx, &input, self.glyph);
        Some(())
    }
}

fn ligate(ctx: &mut ApplyContext, input: &InputMatch, lig_glyph: GlyphId) {
    // - A base followed by marks only ligates into a base, so that following
    //   marks can still attach to it.
    //
    // - A ligature of marks only keeps the ligature id and component of its
    //   first mark, so that it can still attach to the component of a base
    //   ligature it belonged to.
    //
    // - When components are ligatures themselves, marks attached to their
    //   components are renumbered to the components of the new ligature. Such
    //   marks may follow the last component, so we also loop forward over them.

    let count = input.positions.len();
    let positions = &input.positions;

    let buffer = &mut *ctx.buffer;
    buffer.merge_clusters(buffer.idx, input.end);

    let mut is_base_ligature = buffer.info[positions[0]].is_base_glyph();
    let mut is_mark_ligature = buffer.info[positions[0]].is_mark();
    for &position in &positions[1..] {
        if !buffer.info[position].is_mark() {
            is_base_ligature = false;
            is_mark_ligature = false;
        }
    }

    let is_ligature = !is_base_ligature && !is_mark_ligature;
    let class = if is_ligature {
        GlyphFlags::LIGATURE
    } else {
        GlyphFlags::empty()
    };
    let lig_id = if is_ligature {
        buffer.allocate_lig_id()
    } else {
        0
    };

    let first = buffer.cur_mut(0);
    let mut last_lig_id = first.lig_id();
    let mut last_num_comps = first.lig_num_comps();
    let mut comps_so_far = last_num_comps;

    if is_ligature {
        first.set_lig_props_for_ligature(lig_id, input.total_component_count);
    }

    ctx.replace_glyph_with_ligature(lig_glyph, class);
    let buffer = &mut *ctx.buffer;

    for &position in &positions[1..count] {
        while buffer.idx < position && buffer.successful {
            if is_ligature {
                let cur = buffer.cur_mut(0);
                let mut this_comp = cur.lig_comp();
                if this_comp == 0 {
                    this_comp = last_num_comps;
                }
                let new_lig_comp = comps_so_far - last_num_comps + this_comp.min(last_num_comps);
                cur.set_lig_props_for_mark(lig_id, new_lig_comp);
            }
            buffer.next_glyph();
        }

        if !buffer.successful {
            return;
        }

        let cur = buffer.cur(0);
        last_lig_id = cur.lig_id();
        last_num_comps = cur.lig_num_comps();
        comps_so_far += last_num_comps;

        // Skip the base glyph.
        buffer.idx += 1;
    }

    if !is_mark_ligature && last_lig_id != 0 {
        // Re-adjust components for any marks following.
        for info in &mut buffer.info[buffer.idx..buffer.len] {
            if last_lig_id != info.lig_id() {
                break;
            }

            let this_comp = info.lig_comp();
            if this_comp == 0 {
                break;
            }

            let new_lig_comp = comps_so_far - last_num_comps + this_comp.min(last_num_comps);
            info.set_lig_props_for_mark(lig_id, new_lig_comp);
        }
    }
}

impl Apply for ReverseChainSingleSubst {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        // No chaining to this type.
        if ctx.nesting_level_left != MAX_NESTING_LEVEL {
            return None;
        }

        let glyph = ctx.buffer.cur(0).as_glyph();
        let index = self.coverage.get(glyph)?;
        let subst = *self.substitutes.get(usize::from(index))?;

        let f1 = match_coverage(&self.backtrack);
        let f2 = match_coverage(&self.lookahead);

        match_backtrack(ctx, self.backtrack.len(), &f1)?;
        match_lookahead(ctx, self.lookahead.len(), &f2, ctx.buffer.idx + 1)?;

        // The sweep moves `idx` for us.
        ctx.replace_glyph_inplace(subst);
        Some(())
    }
}
