//! The lookup engine.

mod apply;
pub(crate) mod arabic;
mod contextual;
mod matching;
pub(crate) mod position;
pub(crate) mod schedule;
pub(crate) mod substitute;

use log::{trace, warn};

use crate::buffer::Buffer;
use crate::tables::Lookup;
use crate::{config, Face, FeatureSchedule};

use apply::{Apply, ApplyContext};
use schedule::LookupMap;

/// Nested lookups deeper than this are considered a recursion cycle.
pub(crate) const MAX_NESTING_LEVEL: usize = 64;
/// The longest input sequence a rule may match.
pub(crate) const MAX_CONTEXT_LENGTH: usize = 64;

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum TableIndex {
    GSUB = 0,
    GPOS = 1,
}

impl<T: Apply> Apply for Lookup<T> {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        if !self.digest().may_have_glyph(ctx.buffer.cur(0).as_glyph()) {
            return None;
        }

        self.subtables().iter().find_map(|subtable| subtable.apply(ctx))
    }
}

/// Applies the scheduled lookups of one table.
pub(crate) fn apply_layout_table(
    schedule: &FeatureSchedule,
    face: &Face,
    buffer: &mut Buffer,
    table_index: TableIndex,
) {
    let setup = config::current();
    let digest = buffer.digest(setup.dispatch);
    let max_ops = i64::try_from(setup.limits.max_ops(buffer.len)).unwrap_or(i64::MAX);

    let mut ctx = ApplyContext::new(table_index, face, buffer, digest);
    for (tag, lookups) in schedule.stages(table_index) {
        trace!("applying '{}' with {} lookups", tag, lookups.len());

        for map in lookups {
            if !ctx.buffer.successful {
                return;
            }

            match table_index {
                TableIndex::GSUB => apply_mapped(&mut ctx, map, face.gsub_lookup(map.index), max_ops),
                TableIndex::GPOS => apply_mapped(&mut ctx, map, face.gpos_lookup(map.index), max_ops),
            }
        }
    }
}

fn apply_mapped<T>(
    ctx: &mut ApplyContext,
    map: &LookupMap,
    lookup: Option<&Lookup<T>>,
    max_ops: i64,
) where
    Lookup<T>: Apply,
{
    let Some(lookup) = lookup else {
        warn!("{:?} lookup {} is out of range", ctx.table_index, map.index);
        return;
    };

    if !lookup.digest().may_have(&ctx.digest) {
        return;
    }

    ctx.lookup_index = map.index;
    ctx.lookup_mask = map.mask;
    ctx.auto_zwj = map.auto_zwj;
    ctx.auto_zwnj = map.auto_zwnj;
    ctx.buffer.max_ops = max_ops;
    ctx.buffer.ops_lookup = map.index;

    trace!(
        "{:?} lookup {} with mask {:#x} over {} glyphs",
        ctx.table_index,
        map.index,
        map.mask,
        ctx.buffer.len
    );

    apply_string(ctx, lookup);
}

fn apply_string<T>(ctx: &mut ApplyContext, lookup: &Lookup<T>)
where
    Lookup<T>: Apply,
{
    if ctx.buffer.len == 0 || ctx.lookup_mask == 0 {
        return;
    }

    ctx.lookup_props = lookup.props();
    let in_place = ctx.table_index == TableIndex::GPOS;

    if !lookup.is_reverse() {
        // in/out forward substitution/positioning
        if !in_place {
            ctx.buffer.clear_output();
        }
        ctx.buffer.idx = 0;
        apply_forward(ctx, lookup);

        if !in_place {
            ctx.buffer.sync();
        }
    } else {
        // in-place backward substitution/positioning
        debug_assert!(!ctx.buffer.have_output);

        ctx.buffer.idx = ctx.buffer.len - 1;
        apply_backward(ctx, lookup);
    }
}

fn apply_forward(ctx: &mut ApplyContext, lookup: &impl Apply) {
    while ctx.buffer.idx < ctx.buffer.len && ctx.buffer.successful {
        if !ctx.buffer.consume_op() {
            break;
        }

        let cur = ctx.buffer.cur(0);
        if (cur.mask & ctx.lookup_mask) != 0
            && ctx.check_glyph_property(cur, ctx.lookup_props)
            && lookup.apply(ctx).is_some()
        {
            continue;
        }

        ctx.buffer.next_glyph();
    }
}

fn apply_backward(ctx: &mut ApplyContext, lookup: &impl Apply) {
    loop {
        if !ctx.buffer.consume_op() {
            break;
        }

        let cur = ctx.buffer.cur(0);
        if (cur.mask & ctx.lookup_mask) != 0 && ctx.check_glyph_property(cur, ctx.lookup_props) {
            lookup.apply(ctx);
        }

        if ctx.buffer.idx == 0 {
            break;
        }

        ctx.buffer.idx -= 1;
    }
}
