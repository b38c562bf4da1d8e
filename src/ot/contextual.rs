use smallvec::SmallVec;

use crate::tables::*;

use super::apply::{Apply, ApplyContext};
use super::matching::{
    match_backtrack, match_class, match_coverage, match_glyph, match_input, match_lookahead,
    MatchFunc,
};
use super::MAX_CONTEXT_LENGTH;

impl Apply for ContextLookup {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        match self {
            Self::Glyphs { coverage, sets } => {
                let index = coverage.get(glyph)?;
                let set = sets.get(usize::from(index))?;
                apply_rule_set(ctx, set, &match_glyph)
            }
            Self::Classes { coverage, classes, sets } => {
                coverage.get(glyph)?;
                let set = sets.get(usize::from(classes.get(glyph)))?;
                apply_rule_set(ctx, set, &match_class(classes))
            }
            Self::Coverages { coverages, lookups } => {
                let (first, input) = coverages.split_first()?;
                first.get(glyph)?;
                apply_context(ctx, input.len(), &match_coverage(input), lookups)
            }
        }
    }
}

fn apply_rule_set(
    ctx: &mut ApplyContext,
    rules: &[SequenceRule],
    match_func: &MatchFunc,
) -> Option<()> {
    rules.iter().find_map(|rule| {
        let input = |glyph, index: u16| {
            rule.input
                .get(usize::from(index))
                .map_or(false, |&value| match_func(glyph, value))
        };

        apply_context(ctx, rule.input.len(), &input, &rule.lookups)
    })
}

impl Apply for ChainedContextLookup {
    fn apply(&self, ctx: &mut ApplyContext) -> Option<()> {
        let glyph = ctx.buffer.cur(0).as_glyph();
        match self {
            Self::Glyphs { coverage, sets } => {
                let index = coverage.get(glyph)?;
                let set = sets.get(usize::from(index))?;
                apply_chain_rule_set(ctx, set, [&match_glyph, &match_glyph, &match_glyph])
            }
            Self::Classes {
                coverage,
                backtrack_classes,
                input_classes,
                lookahead_classes,
                sets,
            } => {
                coverage.get(glyph)?;
                let set = sets.get(usize::from(input_classes.get(glyph)))?;
                apply_chain_rule_set(
                    ctx,
                    set,
                    [
                        &match_class(backtrack_classes),
                        &match_class(input_classes),
                        &match_class(lookahead_classes),
                    ],
                )
            }
            Self::Coverages { backtrack, input, lookahead, lookups } => {
                let (first, input) = input.split_first()?;
                first.get(glyph)?;
                apply_chain_context(
                    ctx,
                    [backtrack.len(), input.len(), lookahead.len()],
                    [
                        &match_coverage(backtrack),
                        &match_coverage(input),
                        &match_coverage(lookahead),
                    ],
                    lookups,
                )
            }
        }
    }
}

fn apply_chain_rule_set(
    ctx: &mut ApplyContext,
    rules: &[ChainedSequenceRule],
    match_funcs: [&MatchFunc; 3],
) -> Option<()> {
    let [backtrack_func, input_func, lookahead_func] = match_funcs;
    rules.iter().find_map(|rule| {
        let backtrack = |glyph, index: u16| {
            rule.backtrack
                .get(usize::from(index))
                .map_or(false, |&value| backtrack_func(glyph, value))
        };
        let input = |glyph, index: u16| {
            rule.input
                .get(usize::from(index))
                .map_or(false, |&value| input_func(glyph, value))
        };
        let lookahead = |glyph, index: u16| {
            rule.lookahead
                .get(usize::from(index))
                .map_or(false, |&value| lookahead_func(glyph, value))
        };

        apply_chain_context(
            ctx,
            [rule.backtrack.len(), rule.input.len(), rule.lookahead.len()],
            [&backtrack, &input, &lookahead],
            &rule.lookups,
        )
    })
}

fn apply_context(
    ctx: &mut ApplyContext,
    input_len: usize,
    match_func: &MatchFunc,
    lookups: &[SequenceLookupRecord],
) -> Option<()> {
    let matched = match_input(ctx, input_len, match_func)?;
    apply_lookup(ctx, input_len, matched.positions, matched.end, lookups);
    Some(())
}

fn apply_chain_context(
    ctx: &mut ApplyContext,
    [backtrack_len, input_len, lookahead_len]: [usize; 3],
    [backtrack_func, input_func, lookahead_func]: [&MatchFunc; 3],
    lookups: &[SequenceLookupRecord],
) -> Option<()> {
    let matched = match_input(ctx, input_len, input_func)?;
    match_lookahead(ctx, lookahead_len, lookahead_func, matched.end)?;
    match_backtrack(ctx, backtrack_len, backtrack_func)?;

    apply_lookup(ctx, input_len, matched.positions, matched.end, lookups);
    Some(())
}

/// Runs the nested lookups of a matched rule.
///
/// Nested lookups may change the buffer length, in which case the recorded
/// positions following the current one are shifted.
fn apply_lookup(
    ctx: &mut ApplyContext,
    input_len: usize,
    mut positions: SmallVec<[usize; 4]>,
    match_end: usize,
    lookups: &[SequenceLookupRecord],
) {
    let mut count = input_len + 1;

    // All positions are distance from beginning of *output* buffer.
    // Adjust.
    let mut end = {
        let backtrack_len = ctx.buffer.backtrack_len();
        let delta = backtrack_len as isize - ctx.buffer.idx as isize;

        // Convert positions to new indexing.
        for position in &mut positions[..count] {
            *position = (*position as isize + delta) as usize;
        }

        backtrack_len + match_end - ctx.buffer.idx
    };

    for record in lookups {
        if !ctx.buffer.successful {
            break;
        }

        let idx = usize::from(record.sequence_index);
        if idx >= count {
            continue;
        }

        let orig_len = ctx.buffer.backtrack_len() + ctx.buffer.lookahead_len();

        // Earlier nested lookups may have deleted this position.
        if positions[idx] >= orig_len {
            continue;
        }

        if !ctx.buffer.move_to(positions[idx]) {
            break;
        }

        if ctx.buffer.max_ops <= 0 {
            break;
        }

        if ctx.recurse(record.lookup_index).is_none() {
            continue;
        }

        let new_len = ctx.buffer.backtrack_len() + ctx.buffer.lookahead_len();
        let mut delta = new_len as isize - orig_len as isize;
        if delta == 0 {
            continue;
        }

        // When the buffer grew by n, the n new glyphs are assumed to follow
        // the current position. When it shrank by n, the n positions after
        // the current one are assumed to be gone.

        end = (end as isize + delta) as usize;
        if end < positions[idx] {
            // The nested lookup cannot remove anything before its position.
            delta += positions[idx] as isize - end as isize;
            end = positions[idx];
        }

        // next now is the position after the recursed lookup.
        let mut next = idx + 1;

        if delta > 0 {
            if delta as usize + count > MAX_CONTEXT_LENGTH {
                break;
            }

            if delta as usize + count > positions.len() {
                positions.resize(delta as usize + count, 0);
            }
        } else {
            // NOTE: delta is non-positive.
            delta = delta.max(next as isize - count as isize);
            next = (next as isize - delta) as usize;
        }

        // Shift!
        positions.copy_within(next..count, (next as isize + delta) as usize);
        next = (next as isize + delta) as usize;
        count = (count as isize + delta) as usize;

        // Fill in new entries.
        for j in idx + 1..next {
            positions[j] = positions[j - 1] + 1;
        }

        // And fixup the rest.
        for position in &mut positions[next..count] {
            *position = (*position as isize + delta) as usize;
        }
    }

    ctx.buffer.move_to(end);
}
