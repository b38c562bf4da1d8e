use std::fmt::Write as _;

use ttf_parser::GlyphId;

use crate::unicode::UnicodeProps;
use crate::{Direction, Mask, ShapingError};

bitflags::bitflags! {
    /// Glyph class and substitution provenance.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
    pub struct GlyphFlags: u16 {
        /// A base glyph.
        const BASE_GLYPH    = 0x02;
        /// A ligature glyph, with components.
        const LIGATURE      = 0x04;
        /// A combining mark.
        const MARK          = 0x08;

        /// Was replaced by a substitution.
        const SUBSTITUTED   = 0x10;
        /// Was produced by a ligature substitution.
        const LIGATED       = 0x20;
        /// Is one of the outputs of a multiple substitution.
        const MULTIPLIED    = 0x40;

        /// Glyph class bits.
        const CLASS_MASK    = Self::BASE_GLYPH.bits() | Self::LIGATURE.bits() | Self::MARK.bits();
        /// Bits that survive a change of glyph class.
        const PRESERVE      = Self::SUBSTITUTED.bits() | Self::LIGATED.bits() | Self::MULTIPLIED.bits();
    }
}

/// The high byte of `glyph_props` holds the mark attachment class.
pub(crate) const MARK_ATTACHMENT_CLASS_MASK: u16 = 0xFF00;

const IS_LIG_BASE: u8 = 0x10;

/// Holds the positions of the glyph in both horizontal and vertical directions.
///
/// All positions are relative to the current point.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct GlyphPosition {
    /// How much the line advances after drawing this glyph when setting
    /// text in horizontal direction.
    pub x_advance: i32,
    /// How much the line advances after drawing this glyph when setting
    /// text in vertical direction.
    pub y_advance: i32,
    /// How much the glyph moves on the X-axis before drawing it, this
    /// should not affect how much the line advances.
    pub x_offset: i32,
    /// How much the glyph moves on the Y-axis before drawing it, this
    /// should not affect how much the line advances.
    pub y_offset: i32,
    /// Relative index of the glyph this one is attached to. Zero when unattached.
    pub(crate) attach_chain: i16,
    pub(crate) attach_type: u8,
}

/// A glyph info.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct GlyphInfo {
    /// A selected glyph.
    ///
    /// Holds the input codepoint until the glyph is mapped.
    pub glyph_id: u32,
    /// An index to the start of the grapheme cluster in the original text.
    pub cluster: u32,
    pub(crate) mask: Mask,
    pub(crate) codepoint: u32,
    pub(crate) glyph_props: u16,
    pub(crate) lig_props: u8,
    pub(crate) unicode_props: u16,
}

impl GlyphInfo {
    /// Returns the glyph class and provenance flags.
    #[inline]
    pub fn flags(&self) -> GlyphFlags {
        GlyphFlags::from_bits_truncate(self.glyph_props)
    }

    /// Returns the codepoint this glyph was mapped from.
    #[inline]
    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    #[inline]
    pub(crate) fn as_glyph(&self) -> GlyphId {
        debug_assert!(self.glyph_id <= u32::from(u16::MAX));
        GlyphId(self.glyph_id as u16)
    }

    #[inline]
    pub(crate) fn unicode_props(&self) -> UnicodeProps {
        UnicodeProps::from_bits_truncate(self.unicode_props)
    }

    #[inline]
    pub(crate) fn is_default_ignorable(&self) -> bool {
        self.unicode_props().contains(UnicodeProps::IGNORABLE) && !self.is_substituted()
    }

    #[inline]
    pub(crate) fn is_hidden(&self) -> bool {
        self.unicode_props().contains(UnicodeProps::HIDDEN)
    }

    #[inline]
    pub(crate) fn is_zwj(&self) -> bool {
        self.unicode_props().contains(UnicodeProps::ZWJ)
    }

    #[inline]
    pub(crate) fn is_zwnj(&self) -> bool {
        self.unicode_props().contains(UnicodeProps::ZWNJ)
    }

    #[inline]
    pub(crate) fn is_unicode_mark(&self) -> bool {
        self.unicode_props().contains(UnicodeProps::MARK)
    }

    #[inline]
    pub(crate) fn is_base_glyph(&self) -> bool {
        self.glyph_props & GlyphFlags::BASE_GLYPH.bits() != 0
    }

    #[inline]
    pub(crate) fn is_ligature(&self) -> bool {
        self.glyph_props & GlyphFlags::LIGATURE.bits() != 0
    }

    #[inline]
    pub(crate) fn is_mark(&self) -> bool {
        self.glyph_props & GlyphFlags::MARK.bits() != 0
    }

    #[inline]
    pub(crate) fn is_substituted(&self) -> bool {
        self.glyph_props & GlyphFlags::SUBSTITUTED.bits() != 0
    }

    #[inline]
    pub(crate) fn is_multiplied(&self) -> bool {
        self.glyph_props & GlyphFlags::MULTIPLIED.bits() != 0
    }

    // Ligature props:
    //
    // When a ligature is formed, the ligature glyph gets a 3-bit id and the
    // number of its components. Marks skipped over while forming it get the
    // same id and the component they belong to. Both live in one byte:
    // the id in the top three bits, then an "is ligature base" bit, then a
    // 4-bit component number or count.

    #[inline]
    pub(crate) fn set_lig_props_for_ligature(&mut self, lig_id: u8, lig_num_comps: u8) {
        self.lig_props = (lig_id << 5) | IS_LIG_BASE | (lig_num_comps & 0x0F);
    }

    #[inline]
    pub(crate) fn set_lig_props_for_mark(&mut self, lig_id: u8, lig_comp: u8) {
        self.lig_props = (lig_id << 5) | (lig_comp & 0x0F);
    }

    #[inline]
    pub(crate) fn set_lig_props_for_component(&mut self, comp: u8) {
        self.set_lig_props_for_mark(0, comp);
    }

    #[inline]
    pub(crate) fn lig_id(&self) -> u8 {
        self.lig_props >> 5
    }

    #[inline]
    fn is_ligated_internal(&self) -> bool {
        self.lig_props & IS_LIG_BASE != 0
    }

    #[inline]
    pub(crate) fn lig_comp(&self) -> u8 {
        if self.is_ligated_internal() {
            0
        } else {
            self.lig_props & 0x0F
        }
    }

    #[inline]
    pub(crate) fn lig_num_comps(&self) -> u8 {
        if self.is_ligature() && self.is_ligated_internal() {
            self.lig_props & 0x0F
        } else {
            1
        }
    }
}

/// The working buffer of one shaping call.
///
/// Substitutions read from `info[idx..]` and write to a separate output
/// vector, which `sync` swaps in once a sweep is done. Positioning works in
/// place.
pub(crate) struct Buffer {
    pub info: Vec<GlyphInfo>,
    pub pos: Vec<GlyphPosition>,
    out_info: Vec<GlyphInfo>,

    /// Read position in `info`.
    pub idx: usize,
    /// Number of live glyphs in `info`, which may hold spare capacity.
    pub len: usize,
    /// Number of glyphs written to the output.
    pub out_len: usize,

    /// Set while a substitution sweep writes to the output.
    pub have_output: bool,
    pub have_positions: bool,
    /// Cleared by `fail`, which ends the running sweep early.
    pub successful: bool,
    /// The first failure, reported once the phase ends.
    pub error: Option<ShapingError>,

    pub direction: Direction,
    /// Growth limit of the glyph count.
    pub max_len: usize,
    /// Remaining operations of the current lookup.
    pub max_ops: i64,
    /// The lookup whose operation budget is being spent.
    pub ops_lookup: u16,
    serial: u8,
}

impl Buffer {
    /// Creates a buffer over unshaped glyphs.
    pub fn new(info: Vec<GlyphInfo>, direction: Direction, max_len: usize) -> Self {
        Buffer {
            len: info.len(),
            info,
            pos: Vec::new(),
            out_info: Vec::new(),
            idx: 0,
            out_len: 0,
            have_output: false,
            have_positions: false,
            successful: true,
            error: None,
            direction,
            max_len,
            max_ops: i64::MAX,
            ops_lookup: 0,
            serial: 0,
        }
    }

    #[inline]
    pub fn cur(&self, i: usize) -> &GlyphInfo {
        &self.info[self.idx + i]
    }

    #[inline]
    pub fn cur_mut(&mut self, i: usize) -> &mut GlyphInfo {
        let idx = self.idx + i;
        &mut self.info[idx]
    }

    #[inline]
    pub fn cur_pos_mut(&mut self) -> &mut GlyphPosition {
        let i = self.idx;
        &mut self.pos[i]
    }

    #[inline]
    pub fn out_info(&self) -> &[GlyphInfo] {
        if self.have_output {
            &self.out_info
        } else {
            &self.info
        }
    }

    #[inline]
    pub fn backtrack_len(&self) -> usize {
        if self.have_output {
            self.out_len
        } else {
            self.idx
        }
    }

    #[inline]
    pub fn lookahead_len(&self) -> usize {
        self.len - self.idx
    }

    /// Records the first error and stops the current sweep.
    pub fn fail(&mut self, error: ShapingError) {
        self.successful = false;
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Spends one operation of the current lookup's budget.
    #[inline]
    pub fn consume_op(&mut self) -> bool {
        self.max_ops -= 1;
        if self.max_ops < 0 {
            let lookup = self.ops_lookup;
            self.fail(ShapingError::RuleLoopDetected { lookup });
            return false;
        }

        true
    }

    fn ensure(&mut self, size: usize) -> bool {
        if size > self.max_len {
            self.fail(ShapingError::BufferOverflow { len: size, max: self.max_len });
            return false;
        }

        if size > self.out_info.capacity() {
            let additional = size - self.out_info.len();
            if self.out_info.try_reserve(additional).is_err() {
                self.fail(ShapingError::AllocationFailure);
                return false;
            }
        }

        true
    }

    fn push_out(&mut self, info: GlyphInfo) -> bool {
        if !self.ensure(self.out_len + 1) {
            return false;
        }

        self.out_info.push(info);
        self.out_len += 1;
        true
    }

    pub fn allocate_lig_id(&mut self) -> u8 {
        let lig_id = self.serial & 0x07;
        self.serial = self.serial.wrapping_add(1);
        // Zero means "not a ligature component".
        if lig_id == 0 {
            return self.allocate_lig_id();
        }

        lig_id
    }

    pub fn clear_output(&mut self) {
        self.have_output = true;
        self.have_positions = false;
        self.out_info.clear();
        self.out_len = 0;
    }

    pub fn clear_positions(&mut self) {
        self.have_output = false;
        self.have_positions = true;
        self.out_info.clear();
        self.out_len = 0;
        self.pos.clear();
        self.pos.resize(self.len, GlyphPosition::default());
    }

    /// Finishes a substitution sweep.
    pub fn sync(&mut self) {
        debug_assert!(self.have_output);
        debug_assert!(self.idx <= self.len);

        if self.successful {
            let rest = self.len - self.idx;
            if self.ensure(self.out_len + rest) {
                self.out_info.extend_from_slice(&self.info[self.idx..]);
                self.out_len += rest;
                core::mem::swap(&mut self.info, &mut self.out_info);
                self.len = self.out_len;
            }
        }

        self.have_output = false;
        self.out_info.clear();
        self.out_len = 0;
        self.idx = 0;
    }

    pub fn next_glyph(&mut self) {
        if self.have_output {
            let info = self.info[self.idx];
            if !self.push_out(info) {
                return;
            }
        }

        self.idx += 1;
    }

    pub fn skip_glyph(&mut self) {
        self.idx += 1;
    }

    /// Replaces the current glyph and advances.
    pub fn replace_glyph(&mut self, glyph_id: u32) {
        if self.have_output {
            let mut info = self.info[self.idx];
            info.glyph_id = glyph_id;
            if !self.push_out(info) {
                return;
            }
        } else {
            self.info[self.idx].glyph_id = glyph_id;
        }

        self.idx += 1;
    }

    /// Replaces `num_in` glyphs starting at `idx` with `glyphs`.
    ///
    /// The replacement shares the smallest cluster of the consumed span.
    pub fn replace_range(&mut self, num_in: usize, glyphs: &[u32]) {
        if !self.ensure(self.out_len + glyphs.len()) {
            return;
        }

        debug_assert!(self.idx + num_in <= self.len);
        self.merge_clusters(self.idx, self.idx + num_in);

        let orig = if self.idx < self.len {
            self.info[self.idx]
        } else {
            self.out_info[self.out_len - 1]
        };

        for &glyph_id in glyphs {
            let mut info = orig;
            info.glyph_id = glyph_id;
            self.out_info.push(info);
        }

        self.out_len += glyphs.len();
        self.idx += num_in;
    }

    /// Emits a copy of the current glyph with a new id, without advancing.
    pub fn output_glyph(&mut self, glyph_id: u32) {
        self.replace_range(0, &[glyph_id]);
    }

    /// Removes the current glyph, handing its cluster to a neighbour.
    pub fn delete_glyph(&mut self) {
        let cluster = self.info[self.idx].cluster;

        let survives = (self.idx + 1 < self.len && cluster == self.info[self.idx + 1].cluster)
            || (self.out_len != 0 && cluster == self.out_info[self.out_len - 1].cluster);

        if !survives {
            if self.out_len != 0 {
                // Merge backward.
                let prev = self.out_info[self.out_len - 1].cluster;
                if cluster < prev {
                    for info in self.out_info[..self.out_len].iter_mut().rev() {
                        if info.cluster != prev {
                            break;
                        }
                        info.cluster = cluster;
                    }
                }
            } else if self.idx + 1 < self.len {
                // Merge forward.
                self.merge_clusters(self.idx, self.idx + 2);
            }
        }

        self.skip_glyph();
    }

    /// Gives all glyphs in `start..end` the smallest cluster among them.
    ///
    /// The span grows over neighbours sharing a cluster with its ends, into
    /// the output when it starts at `idx`.
    pub fn merge_clusters(&mut self, mut start: usize, mut end: usize) {
        if end - start < 2 {
            return;
        }

        let mut cluster = self.info[start].cluster;
        for info in &self.info[start + 1..end] {
            cluster = cluster.min(info.cluster);
        }

        // Extend end.
        while end < self.len && self.info[end - 1].cluster == self.info[end].cluster {
            end += 1;
        }

        // Extend start.
        while self.idx < start && self.info[start - 1].cluster == self.info[start].cluster {
            start -= 1;
        }

        // If we hit the start of the buffer, continue in the output.
        if self.have_output && self.idx == start {
            let start_cluster = self.info[start].cluster;
            for info in self.out_info[..self.out_len].iter_mut().rev() {
                if info.cluster != start_cluster {
                    break;
                }
                info.cluster = cluster;
            }
        }

        for info in &mut self.info[start..end] {
            info.cluster = cluster;
        }
    }

    /// Moves the read position so that `i` glyphs precede it in the output.
    pub fn move_to(&mut self, i: usize) -> bool {
        if !self.have_output {
            debug_assert!(i <= self.len);
            self.idx = i;
            return true;
        }

        if !self.successful {
            return false;
        }

        debug_assert!(i <= self.out_len + (self.len - self.idx));

        if self.out_len < i {
            let count = i - self.out_len;
            if self.idx + count > self.len || !self.ensure(i) {
                return false;
            }

            self.out_info.extend_from_slice(&self.info[self.idx..self.idx + count]);
            self.idx += count;
            self.out_len += count;
        } else if self.out_len > i {
            // Tricky part: rewinding.
            let count = self.out_len - i;
            if self.idx < count && !self.shift_forward(count - self.idx) {
                return false;
            }

            self.idx -= count;
            self.out_len -= count;
            let (idx, out_len) = (self.idx, self.out_len);
            self.info[idx..idx + count].copy_from_slice(&self.out_info[out_len..out_len + count]);
            self.out_info.truncate(out_len);
        }

        true
    }

    fn shift_forward(&mut self, count: usize) -> bool {
        let new_len = self.len + count;
        if new_len > self.max_len {
            self.fail(ShapingError::BufferOverflow { len: new_len, max: self.max_len });
            return false;
        }

        if self.info.try_reserve(count).is_err() {
            self.fail(ShapingError::AllocationFailure);
            return false;
        }

        let idx = self.idx;
        self.info.splice(idx..idx, core::iter::repeat(GlyphInfo::default()).take(count));
        self.len = new_len;
        self.idx += count;
        true
    }

    pub fn reverse_range(&mut self, start: usize, end: usize) {
        if end - start < 2 {
            return;
        }

        self.info[start..end].reverse();
        if self.have_positions {
            self.pos[start..end].reverse();
        }
    }

    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        self.reverse_range(0, self.len);
    }

    /// Removes every glyph matching the predicate after positioning,
    /// handing its cluster to the previous kept glyph.
    pub fn retain(&mut self, mut keep: impl FnMut(&GlyphInfo) -> bool) {
        let mut j = 0;
        for i in 0..self.len {
            if keep(&self.info[i]) {
                self.info[j] = self.info[i];
                if self.have_positions {
                    self.pos[j] = self.pos[i];
                }
                j += 1;
            } else if j > 0 {
                let cluster = self.info[i].cluster;
                let prev = &mut self.info[j - 1];
                prev.cluster = prev.cluster.min(cluster);
            } else if i + 1 < self.len {
                let cluster = self.info[i].cluster;
                let next = &mut self.info[i + 1];
                next.cluster = next.cluster.min(cluster);
            }
        }

        self.info.truncate(j);
        if self.have_positions {
            self.pos.truncate(j);
        }
        self.len = j;
    }

    /// Computes the digest of the current glyphs.
    pub fn digest(&self, dispatch: crate::config::Dispatch) -> crate::digest::SetDigest {
        crate::digest::SetDigest::from_infos(&self.info[..self.len], dispatch)
    }
}

bitflags::bitflags! {
    /// Flags used for serialization with a `BufferSerializer`.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
    pub struct SerializeFlags: u8 {
        /// Do not serialize glyph cluster.
        const NO_CLUSTERS       = 0b0000_0001;
        /// Do not serialize glyph position information.
        const NO_POSITIONS      = 0b0000_0010;
        /// Do not serialize glyph advances.
        const NO_ADVANCES       = 0b0000_0100;
        /// Serialize glyph flags.
        const GLYPH_FLAGS       = 0b0000_1000;
    }
}

/// A buffer that contains the results of the shaping process.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GlyphBuffer {
    infos: Vec<GlyphInfo>,
    positions: Vec<GlyphPosition>,
    direction: Direction,
}

impl GlyphBuffer {
    pub(crate) fn from_buffer(mut buffer: Buffer) -> Self {
        buffer.info.truncate(buffer.len);
        buffer.pos.truncate(buffer.len);
        GlyphBuffer {
            infos: buffer.info,
            positions: buffer.pos,
            direction: buffer.direction,
        }
    }

    /// Returns the length of the data of the buffer.
    ///
    /// When called before shaping this is the number of unicode codepoints contained in the
    /// buffer. When called after shaping it returns the number of glyphs stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Get the glyph infos.
    #[inline]
    pub fn glyph_infos(&self) -> &[GlyphInfo] {
        &self.infos
    }

    /// Get the glyph positions.
    #[inline]
    pub fn glyph_positions(&self) -> &[GlyphPosition] {
        &self.positions
    }

    /// Returns the direction the glyphs were laid out in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Converts the glyph buffer content into a string.
    ///
    /// Each glyph is written as `gid=cluster@x_offset,y_offset+x_advance,y_advance`,
    /// glyphs are separated by `|`. Zero offsets and a zero vertical advance
    /// are omitted.
    pub fn serialize(&self, flags: SerializeFlags) -> String {
        let mut s = String::with_capacity(64);

        let mut x = 0;
        let mut y = 0;
        for (info, pos) in self.infos.iter().zip(&self.positions) {
            if !s.is_empty() {
                s.push('|');
            }

            let _ = write!(&mut s, "{}", info.glyph_id);

            if !flags.contains(SerializeFlags::NO_CLUSTERS) {
                let _ = write!(&mut s, "={}", info.cluster);
            }

            if !flags.contains(SerializeFlags::NO_POSITIONS) {
                let x_offset = x + pos.x_offset;
                let y_offset = y + pos.y_offset;
                if x_offset != 0 || y_offset != 0 {
                    let _ = write!(&mut s, "@{},{}", x_offset, y_offset);
                }

                if !flags.contains(SerializeFlags::NO_ADVANCES) {
                    let _ = write!(&mut s, "+{}", pos.x_advance);
                    if pos.y_advance != 0 {
                        let _ = write!(&mut s, ",{}", pos.y_advance);
                    }
                }
            }

            if flags.contains(SerializeFlags::GLYPH_FLAGS) {
                let provenance = info.flags() & GlyphFlags::PRESERVE;
                if !provenance.is_empty() {
                    let _ = write!(&mut s, "#{:X}", provenance.bits());
                }
            }

            if flags.contains(SerializeFlags::NO_ADVANCES) {
                x += pos.x_advance;
                y += pos.y_advance;
            }
        }

        s
    }
}

impl core::fmt::Display for GlyphBuffer {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.write_str(&self.serialize(SerializeFlags::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(clusters: &[u32]) -> Buffer {
        let info = clusters
            .iter()
            .enumerate()
            .map(|(i, &cluster)| GlyphInfo {
                glyph_id: i as u32 + 1,
                cluster,
                ..GlyphInfo::default()
            })
            .collect();
        Buffer::new(info, Direction::LeftToRight, 1024)
    }

    fn clusters(b: &Buffer) -> Vec<u32> {
        b.info[..b.len].iter().map(|i| i.cluster).collect()
    }

    fn glyphs(b: &Buffer) -> Vec<u32> {
        b.info[..b.len].iter().map(|i| i.glyph_id).collect()
    }

    #[test]
    fn replace_range_takes_min_cluster() {
        let mut b = buffer(&[0, 1, 2, 3]);
        b.clear_output();
        b.next_glyph();
        b.replace_range(2, &[10, 11, 12]);
        b.sync();

        assert_eq!(glyphs(&b), vec![1, 10, 11, 12, 4]);
        assert_eq!(clusters(&b), vec![0, 1, 1, 1, 3]);
    }

    #[test]
    fn replace_range_overflow() {
        let mut b = buffer(&[0]);
        b.max_len = 2;
        b.clear_output();
        b.replace_range(1, &[1, 2, 3]);
        assert!(!b.successful);
        assert_eq!(b.error, Some(ShapingError::BufferOverflow { len: 3, max: 2 }));
    }

    #[test]
    fn delete_merges_backward() {
        let mut b = buffer(&[0, 1, 2]);
        b.clear_output();
        b.next_glyph();
        b.delete_glyph();
        b.next_glyph();
        b.sync();

        assert_eq!(glyphs(&b), vec![1, 3]);
        assert_eq!(clusters(&b), vec![0, 2]);
    }

    #[test]
    fn delete_first_merges_forward() {
        let mut b = buffer(&[0, 1, 2]);
        b.clear_output();
        b.delete_glyph();
        for _ in 0..2 {
            b.next_glyph();
        }
        b.sync();

        assert_eq!(glyphs(&b), vec![2, 3]);
        assert_eq!(clusters(&b), vec![0, 2]);
    }

    #[test]
    fn merge_clusters_extends_into_output() {
        let mut b = buffer(&[0, 1, 1, 2, 3]);
        b.clear_output();
        b.next_glyph();
        b.next_glyph();
        // `idx` sits on the second glyph of cluster 1.
        b.merge_clusters(2, 4);
        for _ in 0..3 {
            b.next_glyph();
        }
        b.sync();

        assert_eq!(clusters(&b), vec![0, 1, 1, 1, 3]);
    }

    #[test]
    fn move_to_rewinds() {
        let mut b = buffer(&[0, 1, 2, 3]);
        b.clear_output();
        for _ in 0..3 {
            b.next_glyph();
        }
        assert!(b.move_to(1));
        assert_eq!(b.idx, 1);
        assert_eq!(b.out_len, 1);
        assert!(b.move_to(4));
        b.sync();
        assert_eq!(glyphs(&b), vec![1, 2, 3, 4]);
    }

    #[test]
    fn move_to_shifts_forward() {
        let mut b = buffer(&[0, 1, 2]);
        b.clear_output();
        b.next_glyph();
        b.output_glyph(7);
        b.output_glyph(8);
        // Output holds three glyphs while only one was consumed.
        assert!(b.move_to(0));
        assert_eq!(b.idx, 0);
        assert!(b.move_to(b.len));
        b.sync();
        assert_eq!(glyphs(&b), vec![1, 7, 8, 2, 3]);
    }

    #[test]
    fn reverse_keeps_positions_paired() {
        let mut b = buffer(&[0, 1, 2]);
        b.clear_positions();
        for (i, pos) in b.pos.iter_mut().enumerate() {
            pos.x_advance = i as i32 * 100;
        }

        b.reverse();
        assert_eq!(glyphs(&b), vec![3, 2, 1]);
        assert_eq!(b.pos.iter().map(|p| p.x_advance).collect::<Vec<_>>(), vec![200, 100, 0]);
    }

    #[test]
    fn lig_ids_skip_zero() {
        let mut b = buffer(&[]);
        let ids: Vec<u8> = (0..9).map(|_| b.allocate_lig_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 1, 2]);
    }

    #[test]
    fn lig_props() {
        let mut info = GlyphInfo::default();
        info.glyph_props = GlyphFlags::LIGATURE.bits();
        info.set_lig_props_for_ligature(3, 2);
        assert_eq!(info.lig_id(), 3);
        assert_eq!(info.lig_comp(), 0);
        assert_eq!(info.lig_num_comps(), 2);

        info.set_lig_props_for_mark(5, 2);
        assert_eq!(info.lig_id(), 5);
        assert_eq!(info.lig_comp(), 2);
        assert_eq!(info.lig_num_comps(), 1);
    }

    #[test]
    fn serialize() {
        let buffer = GlyphBuffer {
            infos: vec![
                GlyphInfo { glyph_id: 5, cluster: 0, glyph_props: GlyphFlags::LIGATED.bits(), ..GlyphInfo::default() },
                GlyphInfo { glyph_id: 9, cluster: 2, ..GlyphInfo::default() },
            ],
            positions: vec![
                GlyphPosition { x_advance: 500, ..GlyphPosition::default() },
                GlyphPosition { x_offset: -20, y_offset: 30, ..GlyphPosition::default() },
            ],
            direction: Direction::LeftToRight,
        };

        assert_eq!(buffer.to_string(), "5=0+500|9=2@-20,30+0");
        assert_eq!(buffer.serialize(SerializeFlags::NO_CLUSTERS | SerializeFlags::NO_POSITIONS), "5|9");
        assert_eq!(buffer.serialize(SerializeFlags::GLYPH_FLAGS), "5=0+500#20|9=2@-20,30+0");
        assert_eq!(buffer.serialize(SerializeFlags::NO_ADVANCES), "5=0|9=2@480,30");
    }
}
