//! A Bloom-style summary of a glyph set.
//!
//! Each of the three masks records one bit per glyph, taken from a different
//! window of the glyph id. A digest never reports a false negative.

use ttf_parser::GlyphId;

use crate::buffer::GlyphInfo;
use crate::config::Dispatch;

const SHIFTS: [u32; 3] = [4, 0, 9];
const MASK_BITS: u32 = u32::BITS;

/// A summary of a glyph set that may report false positives.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct SetDigest {
    masks: [u32; 3],
}

#[inline]
fn mask_for(glyph: u32, shift: u32) -> u32 {
    1 << ((glyph >> shift) & (MASK_BITS - 1))
}

impl SetDigest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        SetDigest { masks: [u32::MAX; 3] }
    }

    pub fn union(&mut self, other: &SetDigest) {
        for (a, b) in self.masks.iter_mut().zip(other.masks.iter()) {
            *a |= *b;
        }
    }

    #[inline]
    pub fn add(&mut self, glyph: GlyphId) {
        self.add_raw(u32::from(glyph.0));
    }

    #[inline]
    fn add_raw(&mut self, glyph: u32) {
        for (mask, &shift) in self.masks.iter_mut().zip(SHIFTS.iter()) {
            *mask |= mask_for(glyph, shift);
        }
    }

    pub fn add_range(&mut self, first: GlyphId, last: GlyphId) {
        let (a, b) = (u32::from(first.0), u32::from(last.0));
        for (mask, &shift) in self.masks.iter_mut().zip(SHIFTS.iter()) {
            if *mask == u32::MAX {
                continue;
            }

            if (b >> shift) - (a >> shift) >= MASK_BITS - 1 {
                *mask = u32::MAX;
            } else {
                let ma = mask_for(a, shift);
                let mb = mask_for(b, shift);
                // Sets every bit from `ma` up to `mb`, wrapping around.
                *mask |= mb.wrapping_add(mb.wrapping_sub(ma)).wrapping_sub(u32::from(mb < ma));
            }
        }
    }

    /// Checks that two digests may share a glyph.
    pub fn may_have(&self, other: &SetDigest) -> bool {
        self.masks
            .iter()
            .zip(other.masks.iter())
            .all(|(a, b)| a & b != 0)
    }

    pub fn may_have_glyph(&self, glyph: GlyphId) -> bool {
        let glyph = u32::from(glyph.0);
        self.masks
            .iter()
            .zip(SHIFTS.iter())
            .all(|(mask, &shift)| mask & mask_for(glyph, shift) != 0)
    }

    /// Computes the digest of the glyphs in a buffer.
    pub fn from_infos(infos: &[GlyphInfo], dispatch: Dispatch) -> Self {
        match dispatch {
            Dispatch::Scalar => digest_scalar(infos),
            Dispatch::Wide => digest_wide(infos),
        }
    }
}

fn digest_scalar(infos: &[GlyphInfo]) -> SetDigest {
    let mut digest = SetDigest::new();
    for info in infos {
        digest.add_raw(info.glyph_id);
    }

    digest
}

// Folds eight glyphs per step into independent lanes, which the compiler
// lowers to vector ORs and shifts.
fn digest_wide(infos: &[GlyphInfo]) -> SetDigest {
    const LANES: usize = 8;

    let mut lanes = [[0u32; LANES]; 3];
    let mut chunks = infos.chunks_exact(LANES);
    for chunk in &mut chunks {
        let mut glyphs = [0u32; LANES];
        for (g, info) in glyphs.iter_mut().zip(chunk) {
            *g = info.glyph_id;
        }

        for (lane, &shift) in lanes.iter_mut().zip(SHIFTS.iter()) {
            for i in 0..LANES {
                lane[i] |= mask_for(glyphs[i], shift);
            }
        }
    }

    let mut digest = digest_scalar(chunks.remainder());
    for (mask, lane) in digest.masks.iter_mut().zip(lanes.iter()) {
        *mask |= lane.iter().fold(0, |acc, m| acc | m);
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infos(glyphs: impl IntoIterator<Item = u32>) -> Vec<GlyphInfo> {
        glyphs
            .into_iter()
            .map(|glyph_id| GlyphInfo { glyph_id, ..GlyphInfo::default() })
            .collect()
    }

    #[test]
    fn no_false_negatives() {
        let mut digest = SetDigest::new();
        for g in [3, 70, 500, 4096, 65535] {
            digest.add(GlyphId(g));
        }

        for g in [3, 70, 500, 4096, 65535] {
            assert!(digest.may_have_glyph(GlyphId(g)));
        }
    }

    #[test]
    fn empty_has_nothing() {
        let digest = SetDigest::new();
        assert!(!digest.may_have_glyph(GlyphId(0)));
        assert!(!digest.may_have(&SetDigest::full()));
    }

    #[test]
    fn range() {
        let mut digest = SetDigest::new();
        digest.add_range(GlyphId(100), GlyphId(120));
        for g in 100..=120 {
            assert!(digest.may_have_glyph(GlyphId(g)));
        }

        let mut wide = SetDigest::new();
        wide.add_range(GlyphId(0), GlyphId(60000));
        assert!(wide.may_have_glyph(GlyphId(31337)));
    }

    #[test]
    fn dispatch_identity() {
        for len in [0, 1, 7, 8, 9, 31, 100] {
            let buf = infos((0..len).map(|i| i * 37 + 5));
            assert_eq!(
                SetDigest::from_infos(&buf, Dispatch::Scalar),
                SetDigest::from_infos(&buf, Dispatch::Wide),
            );
        }
    }
}
