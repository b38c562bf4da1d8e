use crate::buffer::{Buffer, GlyphPosition};
use crate::tables::*;
use crate::{Direction, FeatureSchedule, Face};

use super::apply::{Apply, ApplyContext};
use super::matching::SkippyIter;
use super::TableIndex;

pub(crate) mod attach_type {
    pub const MARK: u8 = 1;
    pub const CURSIVE: u8 = 2;
}

pub(crate) fn position_start(buffer: &mut Buffer) {
    let len = buffer.len;
    for pos in &mut buffer.pos[..len] {
        pos.attach_chain = 0;
        pos.attach_type = 0;
    }
}

pub(crate) fn position(schedule: &FeatureSchedule, face: &Face, buffer: &mut Buffer) {
    super::apply_layout_table(schedule, face, buffer, TableIndex::GPOS);
}

/// Resolves recorded attachments into offsets.
pub(crate) fn position_finish(buffer: &mut Buffer) {
    let len = buffer.len;
    let direction = buffer.direction;

    if buffer.pos[..len].iter().any(|pos| pos.attach_chain != 0) {
        for i in 0..len {
            propagate_attachment_offsets(&mut buffer.pos, len, i, direction);
        }
    }
}

fn propagate_attachment_offsets(
    pos: &mut [GlyphPosition],
    len: usize,
    i: usize,
    direction: Direction,
) {
    // Adjusts offsets of attached glyphs (both cursive and mark) to accumulate
    // offset of glyph they are attached to.
    let chain = pos[i].attach_chain;
    let kind = pos[i].attach_type;
    if chain == 0 {
        return;
    }

    pos[i].attach_chain = 0;

    let Some(j) = i.checked_add_signed(isize::from(chain)).filter(|j| *j < len) else {
        return;
    };

    propagate_attachment_offsets(pos, len, j, direction);

    match kind {
        attach_type::MARK => {
            pos[i].x_offset += pos[j].x_offset;
            pos[i].y_offset += pos[j].y_offset;

            debug_assert!(j < i);
            if direction.is_forward() {
                for k in j..i {
                    pos[i].x_offset -= pos[k].x_advance;
                    pos[i].y_offset -= pos[k].y_advance;
                }
            } else {
                for k in j + 1..i + 1 {
                    pos[i].x_offset += pos[k].x_advance;
                    pos[i].y_offset += pos[k].y_advance;
                }
            }
        }
        attach_type::CURSIVE => {
            if direction.is_horizontal() {
                pos[i].y_offset += pos[j].y_offset;
            } else {
                pos[i].x_offset += pos[j].x_offset;
            }
        }
        _ => {}
    }
}

impl Apply for PositioningSubtable {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        match self {
            Self::Single(t) => t.apply(ctx),
            Self::Pair(t) => t.apply(ctx),
            Self::Cursive(t) => t.apply(ctx),
            Self::MarkBase(t) => t.apply(ctx),
            Self::MarkLig(t) => t.apply(ctx),
            Self::MarkMark(t) => t.apply(ctx),
            Self::Context(t) => t.apply(ctx),
            Self::ChainContext(t) => t.apply(ctx),
        }
    }
}

impl Apply for SinglePos {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        let value = match self {
            Self::Shared { coverage, value } => {
                coverage.get(glyph)?;
                *value
            }
            Self::PerGlyph { coverage, values } => {
                let index = coverage.get(glyph)?;
                *values.get(usize::from(index))?
            }
        };

        let horizontal = ctx.buffer.direction.is_horizontal();
        value.apply_to(ctx.buffer.cur_pos_mut(), horizontal);
        ctx.buffer.idx += 1;

        Some(())
    }
}

impl Apply for PairPos {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let first = ctx.buffer.cur(0).as_glyph();
        let index = self.coverage().get(first)?;

        let mut iter = SkippyIter::new(ctx, ctx.buffer.idx, false);
        if !iter.next() {
            return None;
        }

        let pos = iter.index();
        let second = ctx.buffer.info[pos].as_glyph();

        let values = match self {
            Self::Glyphs { sets, .. } => {
                let set = sets.get(usize::from(index))?;
                let i = set
                    .binary_search_by(|record| record.second_glyph.cmp(&second))
                    .ok()?;
                set[i].values
            }
            Self::Classes { classes1, classes2, class1_count, class2_count, matrix, .. } => {
                let class1 = classes1.get(first);
                let class2 = classes2.get(second);
                if class1 >= *class1_count || class2 >= *class2_count {
                    return None;
                }

                let i = usize::from(class1) * usize::from(*class2_count) + usize::from(class2);
                *matrix.get(i)?
            }
        };

        let horizontal = ctx.buffer.direction.is_horizontal();
        let idx = ctx.buffer.idx;
        values.first.apply_to(&mut ctx.buffer.pos[idx], horizontal);
        if let Some(second) = values.second {
            second.apply_to(&mut ctx.buffer.pos[pos], horizontal);
        }

        ctx.buffer.idx = pos + usize::from(values.second.is_some());
        Some(())
    }
}

impl Apply for CursivePos {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let this = ctx.buffer.cur(0).as_glyph();
        let index = self.coverage.get(this)?;
        let entry = self.records.get(usize::from(index))?.entry?;

        let mut iter = SkippyIter::new(ctx, ctx.buffer.idx, false);
        if !iter.prev() {
            return None;
        }

        let i = iter.index();
        let prev = ctx.buffer.info[i].as_glyph();
        let prev_index = self.coverage.get(prev)?;
        let exit = self.records.get(usize::from(prev_index))?.exit?;

        let (exit_x, exit_y) = (i32::from(exit.x), i32::from(exit.y));
        let (entry_x, entry_y) = (i32::from(entry.x), i32::from(entry.y));

        let direction = ctx.buffer.direction;
        let j = ctx.buffer.idx;

        let pos = &mut ctx.buffer.pos;
        match direction {
            Direction::LeftToRight => {
                pos[i].x_advance = exit_x + pos[i].x_offset;
                let d = entry_x + pos[j].x_offset;
                pos[j].x_advance -= d;
                pos[j].x_offset -= d;
            }
            Direction::RightToLeft => {
                let d = exit_x + pos[i].x_offset;
                pos[i].x_advance -= d;
                pos[i].x_offset -= d;
                pos[j].x_advance = entry_x + pos[j].x_offset;
            }
            Direction::TopToBottom => {
                pos[i].y_advance = exit_y + pos[i].y_offset;
                let d = entry_y + pos[j].y_offset;
                pos[j].y_advance -= d;
                pos[j].y_offset -= d;
            }
            Direction::BottomToTop => {
                let d = exit_y + pos[i].y_offset;
                pos[i].y_advance -= d;
                pos[i].y_offset -= d;
                pos[j].y_advance = entry_y;
            }
            Direction::Invalid => {}
        }

        // Cross-direction adjustment.
        //
        // The child aligns itself against its parent, the root of the chain
        // stays on the baseline. Right-to-left chains are rooted at the end.
        let mut child = i;
        let mut parent = j;
        let mut x_offset = entry_x - exit_x;
        let mut y_offset = entry_y - exit_y;

        // Low bits are lookup flags, so we want to truncate.
        if ctx.lookup_props as u16 & LookupFlags::RIGHT_TO_LEFT.bits() == 0 {
            core::mem::swap(&mut child, &mut parent);
            x_offset = -x_offset;
            y_offset = -y_offset;
        }

        // A child already attached elsewhere has its old chain reversed, so
        // that the whole old tree now hangs off the new parent.
        reverse_cursive_minor_offset(pos, child, direction, parent);

        pos[child].attach_type = attach_type::CURSIVE;
        pos[child].attach_chain = (parent as isize - child as isize) as i16;

        if direction.is_horizontal() {
            pos[child].y_offset = y_offset;
        } else {
            pos[child].x_offset = x_offset;
        }

        // A parent attached to its own child is set free.
        if pos[parent].attach_chain == -pos[child].attach_chain {
            pos[parent].attach_chain = 0;
        }

        ctx.buffer.idx += 1;
        Some(())
    }
}

fn reverse_cursive_minor_offset(
    pos: &mut [GlyphPosition],
    i: usize,
    direction: Direction,
    new_parent: usize,
) {
    let chain = pos[i].attach_chain;
    let attach_type = pos[i].attach_type;
    if chain == 0 || attach_type & attach_type::CURSIVE == 0 {
        return;
    }

    pos[i].attach_chain = 0;

    // Stop if we see new parent in the chain.
    let Some(j) = i.checked_add_signed(isize::from(chain)) else {
        return;
    };
    if j == new_parent || j >= pos.len() {
        return;
    }

    reverse_cursive_minor_offset(pos, j, direction, new_parent);

    if direction.is_horizontal() {
        pos[j].y_offset = -pos[i].y_offset;
    } else {
        pos[j].x_offset = -pos[i].x_offset;
    }

    pos[j].attach_chain = -chain;
    pos[j].attach_type = attach_type;
}

impl Apply for MarkBasePos {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let mark_glyph = ctx.buffer.cur(0).as_glyph();
        let mark_index = self.mark_coverage.get(mark_glyph)?;

        // Now we search backwards for a non-mark glyph.
        let mut iter = SkippyIter::new(ctx, ctx.buffer.idx, false);
        iter.set_lookup_props(u32::from(LookupFlags::IGNORE_MARKS.bits()));

        let info = &ctx.buffer.info;
        loop {
            if !iter.prev() {
                return None;
            }

            // Only the first glyph of a multiple substitution takes marks,
            // unless a mark sits inside the sequence.
            let idx = iter.index();
            if !info[idx].is_multiplied()
                || info[idx].lig_comp() == 0
                || idx == 0
                || info[idx - 1].is_mark()
                || info[idx].lig_id() != info[idx - 1].lig_id()
                || info[idx].lig_comp() != info[idx - 1].lig_comp() + 1
            {
                break;
            }
        }

        let idx = iter.index();
        let base_glyph = info[idx].as_glyph();
        let base_index = self.base_coverage.get(base_glyph)?;
        let row = self.bases.get(usize::from(base_index))?;

        apply_mark_array(ctx, &self.marks, row, mark_index, idx)
    }
}

impl Apply for MarkLigPos {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let mark_glyph = ctx.buffer.cur(0).as_glyph();
        let mark_index = self.mark_coverage.get(mark_glyph)?;

        // Now we search backwards for a non-mark glyph.
        let mut iter = SkippyIter::new(ctx, ctx.buffer.idx, false);
        iter.set_lookup_props(u32::from(LookupFlags::IGNORE_MARKS.bits()));
        if !iter.prev() {
            return None;
        }

        let idx = iter.index();
        let buffer = &ctx.buffer;
        let lig_glyph = buffer.info[idx].as_glyph();
        let lig_index = self.ligature_coverage.get(lig_glyph)?;
        let components = self.ligatures.get(usize::from(lig_index))?;

        let comp_count = components.len();
        if comp_count == 0 {
            return None;
        }

        // A mark with the ligature's id attaches to its own component,
        // others go to the last one.
        let lig_id = buffer.info[idx].lig_id();
        let mark_id = buffer.cur(0).lig_id();
        let mark_comp = usize::from(buffer.cur(0).lig_comp());
        let matches = lig_id != 0 && lig_id == mark_id && mark_comp > 0;
        let comp_index = if matches { mark_comp.min(comp_count) } else { comp_count } - 1;

        apply_mark_array(ctx, &self.marks, &components[comp_index], mark_index, idx)
    }
}

impl Apply for MarkMarkPos {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let mark1_glyph = ctx.buffer.cur(0).as_glyph();
        let mark1_index = self.mark1_coverage.get(mark1_glyph)?;

        // Now we search backwards for a suitable mark glyph until a non-mark glyph.
        let mut iter = SkippyIter::new(ctx, ctx.buffer.idx, false);
        iter.set_lookup_props(ctx.lookup_props & !u32::from(LookupFlags::IGNORE_FLAGS.bits()));
        if !iter.prev() {
            return None;
        }

        let idx = iter.index();
        let buffer = &ctx.buffer;
        if !buffer.info[idx].is_mark() {
            return None;
        }

        let id1 = buffer.cur(0).lig_id();
        let id2 = buffer.info[idx].lig_id();
        let comp1 = buffer.cur(0).lig_comp();
        let comp2 = buffer.info[idx].lig_comp();

        let matches = if id1 == id2 {
            // Marks belonging to the same base
            // or marks belonging to the same ligature component.
            id1 == 0 || comp1 == comp2
        } else {
            // If ligature ids don't match, it may be the case that one of the marks
            // itself is a ligature. In which case match.
            (id1 > 0 && comp1 == 0) || (id2 > 0 && comp2 == 0)
        };

        if !matches {
            return None;
        }

        let mark2_glyph = buffer.info[idx].as_glyph();
        let mark2_index = self.mark2_coverage.get(mark2_glyph)?;
        let row = self.mark2s.get(usize::from(mark2_index))?;

        apply_mark_array(ctx, &self.marks, row, mark1_index, idx)
    }
}

/// Attaches the current mark to the glyph at `glyph_pos`.
///
/// Fails when the glyph has no anchor for the mark's class, so that the
/// following subtables get a chance at it.
fn apply_mark_array(
    ctx: &mut ApplyContext,
    marks: &[MarkRecord],
    anchors: &AnchorRow,
    mark_index: u16,
    glyph_pos: usize,
) -> Option<()> {
    let record = marks.get(usize::from(mark_index))?;
    let base_anchor = (*anchors.get(usize::from(record.class))?)?;
    let mark_anchor = record.anchor;

    let idx = ctx.buffer.idx;
    let pos = ctx.buffer.cur_pos_mut();
    pos.x_offset = i32::from(base_anchor.x) - i32::from(mark_anchor.x);
    pos.y_offset = i32::from(base_anchor.y) - i32::from(mark_anchor.y);
    pos.attach_type = attach_type::MARK;
    pos.attach_chain = (glyph_pos as isize - idx as isize) as i16;

    ctx.buffer.idx += 1;
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(advances: &[i32]) -> Vec<GlyphPosition> {
        advances
            .iter()
            .map(|&x_advance| GlyphPosition { x_advance, ..GlyphPosition::default() })
            .collect()
    }

    #[test]
    fn mark_offsets_subtract_intervening_advances() {
        let mut pos = positions(&[500, 0, 0]);
        pos[1].x_offset = 100;
        pos[1].attach_type = attach_type::MARK;
        pos[1].attach_chain = -1;
        pos[2].x_offset = 10;
        pos[2].attach_type = attach_type::MARK;
        pos[2].attach_chain = -1;

        for i in 0..3 {
            propagate_attachment_offsets(&mut pos, 3, i, Direction::LeftToRight);
        }

        assert_eq!(pos[1].x_offset, 100 - 500);
        assert_eq!(pos[2].x_offset, 10 + 100 - 500);
        assert!(pos.iter().all(|p| p.attach_chain == 0));
    }

    #[test]
    fn backward_marks_add_advances() {
        let mut pos = positions(&[500, 20]);
        pos[1].attach_type = attach_type::MARK;
        pos[1].attach_chain = -1;

        propagate_attachment_offsets(&mut pos, 2, 1, Direction::RightToLeft);
        assert_eq!(pos[1].x_offset, 20);
    }

    #[test]
    fn cursive_takes_cross_axis_only() {
        let mut pos = positions(&[300, 300]);
        pos[0].x_offset = 40;
        pos[0].y_offset = 7;
        pos[1].attach_type = attach_type::CURSIVE;
        pos[1].attach_chain = -1;

        propagate_attachment_offsets(&mut pos, 2, 1, Direction::LeftToRight);
        assert_eq!(pos[1].x_offset, 0);
        assert_eq!(pos[1].y_offset, 7);
    }

    #[test]
    fn chain_out_of_range_is_dropped() {
        let mut pos = positions(&[300]);
        pos[0].attach_type = attach_type::MARK;
        pos[0].attach_chain = -4;

        propagate_attachment_offsets(&mut pos, 1, 0, Direction::LeftToRight);
        assert_eq!(pos[0].attach_chain, 0);
        assert_eq!((pos[0].x_offset, pos[0].y_offset), (0, 0));
    }
}
