//! Matching of glyph patterns.

use smallvec::SmallVec;
use ttf_parser::GlyphId;

use super::apply::ApplyContext;
use super::{TableIndex, MAX_CONTEXT_LENGTH};
use crate::buffer::GlyphInfo;
use crate::tables::{ClassDef, Coverage};
use crate::Mask;

/// Checks a glyph against the value at an index of a rule's sequence.
pub(crate) type MatchFunc<'a> = dyn Fn(GlyphId, u16) -> bool + 'a;

/// Value represents glyph id.
pub(crate) fn match_glyph(glyph: GlyphId, value: u16) -> bool {
    glyph == GlyphId(value)
}

/// Value represents glyph class.
pub(crate) fn match_class(class_def: &ClassDef) -> impl Fn(GlyphId, u16) -> bool + '_ {
    move |glyph, value| class_def.get(glyph) == value
}

/// Value represents an index into the coverage list.
pub(crate) fn match_coverage(coverages: &[Coverage]) -> impl Fn(GlyphId, u16) -> bool + '_ {
    move |glyph, value| {
        coverages
            .get(usize::from(value))
            .map_or(false, |coverage| coverage.contains(glyph))
    }
}

/// A matched input sequence.
pub(crate) struct InputMatch {
    /// Buffer indices of the matched glyphs, the first one included.
    pub positions: SmallVec<[usize; 4]>,
    /// One past the last matched glyph.
    pub end: usize,
    /// The number of ligature components over all matched glyphs.
    pub total_component_count: u8,
}

/// Matches `input_len` glyphs following the current one.
pub(crate) fn match_input(
    ctx: &ApplyContext,
    input_len: usize,
    match_func: &MatchFunc,
) -> Option<InputMatch> {
    // Ligatures cannot be formed across marks attached to different
    // components of a previous ligature, except when the marks belong to the
    // first glyph itself or the ligature they belong to is skipped by the
    // lookup flags anyway.

    #[derive(PartialEq)]
    enum Ligbase {
        NotChecked,
        MayNotSkip,
        MaySkip,
    }

    let count = input_len + 1;
    if count > MAX_CONTEXT_LENGTH {
        return None;
    }

    let mut positions: SmallVec<[usize; 4]> = SmallVec::from_elem(0, count);

    let mut iter = SkippyIter::new(ctx, ctx.buffer.idx, false);
    iter.enable_matching(match_func);

    let first = ctx.buffer.cur(0);
    let first_lig_id = first.lig_id();
    let first_lig_comp = first.lig_comp();
    let mut total_component_count = first.lig_num_comps();
    let mut ligbase = Ligbase::NotChecked;

    for position in &mut positions[1..count] {
        if !iter.next() {
            return None;
        }

        *position = iter.index();

        let this = &ctx.buffer.info[iter.index()];
        let this_lig_id = this.lig_id();
        let this_lig_comp = this.lig_comp();

        if first_lig_id != 0 && first_lig_comp != 0 {
            // A first glyph attached to a ligature component
            // may only ligate with glyphs attached to that component...
            if first_lig_id != this_lig_id || first_lig_comp != this_lig_comp {
                // ...unless the ligature itself is skipped.
                if ligbase == Ligbase::NotChecked {
                    let out = ctx.buffer.out_info();
                    let mut j = ctx.buffer.out_len;
                    let mut found = false;
                    while j > 0 && out[j - 1].lig_id() == first_lig_id {
                        j -= 1;
                        if out[j].lig_comp() == 0 {
                            found = true;
                            break;
                        }
                    }

                    ligbase = if found && iter.may_skip(&out[j]) == MaySkip::Yes {
                        Ligbase::MaySkip
                    } else {
                        Ligbase::MayNotSkip
                    };
                }

                if ligbase == Ligbase::MayNotSkip {
                    return None;
                }
            }
        } else if this_lig_id != 0 && this_lig_comp != 0 && this_lig_id != first_lig_id {
            // Otherwise, no component may be attached to a foreign ligature.
            return None;
        }

        total_component_count = total_component_count.saturating_add(this.lig_num_comps());
    }

    positions[0] = ctx.buffer.idx;

    Some(InputMatch {
        end: iter.index() + 1,
        positions,
        total_component_count,
    })
}

/// Matches glyphs preceding the current one, in the output.
///
/// Returns the index of the earliest matched glyph.
pub(crate) fn match_backtrack(
    ctx: &ApplyContext,
    backtrack_len: usize,
    match_func: &MatchFunc,
) -> Option<usize> {
    let mut iter = SkippyIter::new(ctx, ctx.buffer.backtrack_len(), true);
    iter.enable_matching(match_func);

    for _ in 0..backtrack_len {
        if !iter.prev() {
            return None;
        }
    }

    Some(iter.index())
}

/// Matches glyphs starting at `start_index`.
///
/// Returns one past the last matched glyph.
pub(crate) fn match_lookahead(
    ctx: &ApplyContext,
    lookahead_len: usize,
    match_func: &MatchFunc,
    start_index: usize,
) -> Option<usize> {
    let mut iter = SkippyIter::new(ctx, start_index - 1, true);
    iter.enable_matching(match_func);

    for _ in 0..lookahead_len {
        if !iter.next() {
            return None;
        }
    }

    Some(iter.index() + 1)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Match {
    Match,
    NotMatch,
    Skip,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MayMatch {
    No,
    Yes,
    Maybe,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MaySkip {
    No,
    Yes,
    Maybe,
}

/// Walks the buffer over glyphs the current lookup does not ignore.
///
/// Holds a shared borrow of the context, so a new iterator is created
/// for every match attempt.
pub(crate) struct SkippyIter<'a, 'b> {
    ctx: &'a ApplyContext<'b>,
    lookup_props: u32,
    ignore_zwnj: bool,
    ignore_zwj: bool,
    ignore_hidden: bool,
    mask: Mask,
    matching: Option<&'a MatchFunc<'a>>,
    buf_len: usize,
    glyph_data: u16,
    buf_idx: usize,
}

impl<'a, 'b> SkippyIter<'a, 'b> {
    pub fn new(ctx: &'a ApplyContext<'b>, start_buf_index: usize, context_match: bool) -> Self {
        let is_gpos = ctx.table_index == TableIndex::GPOS;
        SkippyIter {
            ctx,
            lookup_props: ctx.lookup_props,
            // Ignore ZWNJ when positioning, or when matching context and asked to.
            ignore_zwnj: is_gpos || (context_match && ctx.auto_zwnj),
            // Ignore ZWJ when matching context, or when asked to.
            ignore_zwj: context_match || ctx.auto_zwj,
            // Hidden glyphs, like CGJ, are skipped only when positioning.
            ignore_hidden: is_gpos,
            mask: if context_match { u32::MAX } else { ctx.lookup_mask },
            matching: None,
            buf_len: ctx.buffer.len,
            glyph_data: 0,
            buf_idx: start_buf_index,
        }
    }

    pub fn set_lookup_props(&mut self, lookup_props: u32) {
        self.lookup_props = lookup_props;
    }

    pub fn enable_matching(&mut self, func: &'a MatchFunc<'a>) {
        self.matching = Some(func);
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.buf_idx
    }

    /// Moves to the next matching glyph in the input.
    pub fn next(&mut self) -> bool {
        while self.buf_idx + 1 < self.buf_len {
            self.buf_idx += 1;
            let info = &self.ctx.buffer.info[self.buf_idx];

            match self.match_(info) {
                Match::Match => {
                    self.glyph_data += 1;
                    return true;
                }
                Match::NotMatch => return false,
                Match::Skip => continue,
            }
        }

        false
    }

    /// Moves to the previous matching glyph in the output.
    pub fn prev(&mut self) -> bool {
        while self.buf_idx > 0 {
            self.buf_idx -= 1;
            let info = &self.ctx.buffer.out_info()[self.buf_idx];

            match self.match_(info) {
                Match::Match => {
                    self.glyph_data += 1;
                    return true;
                }
                Match::NotMatch => return false,
                Match::Skip => continue,
            }
        }

        false
    }

    fn match_(&self, info: &GlyphInfo) -> Match {
        let skip = self.may_skip(info);
        if skip == MaySkip::Yes {
            return Match::Skip;
        }

        let matched = self.may_match(info);
        if matched == MayMatch::Yes || (matched == MayMatch::Maybe && skip == MaySkip::No) {
            return Match::Match;
        }

        if skip == MaySkip::No {
            return Match::NotMatch;
        }

        Match::Skip
    }

    fn may_match(&self, info: &GlyphInfo) -> MayMatch {
        if info.mask & self.mask == 0 {
            return MayMatch::No;
        }

        match self.matching {
            Some(func) if func(info.as_glyph(), self.glyph_data) => MayMatch::Yes,
            Some(_) => MayMatch::No,
            None => MayMatch::Maybe,
        }
    }

    fn may_skip(&self, info: &GlyphInfo) -> MaySkip {
        if !self.ctx.check_glyph_property(info, self.lookup_props) {
            return MaySkip::Yes;
        }

        if info.is_default_ignorable()
            && (self.ignore_zwnj || !info.is_zwnj())
            && (self.ignore_zwj || !info.is_zwj())
            && (self.ignore_hidden || !info.is_hidden())
        {
            return MaySkip::Maybe;
        }

        MaySkip::No
    }
}
