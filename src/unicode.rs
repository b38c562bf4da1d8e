use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::{script, Script};

bitflags::bitflags! {
    /// Per-character Unicode properties cached on a glyph.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
    pub(crate) struct UnicodeProps: u16 {
        const MARK          = 1 << 0;
        const NONSPACING    = 1 << 1;
        const IGNORABLE     = 1 << 2;
        const ZWJ           = 1 << 3;
        const ZWNJ          = 1 << 4;
        /// Default ignorables that are still matched during GSUB, like CGJ.
        const HIDDEN        = 1 << 5;
    }
}

pub(crate) const ZWNJ: u32 = 0x200C;
pub(crate) const ZWJ: u32 = 0x200D;
pub(crate) const CGJ: u32 = 0x034F;

impl UnicodeProps {
    pub fn of(c: char) -> Self {
        let mut props = UnicodeProps::empty();
        match c.general_category() {
            GeneralCategory::NonspacingMark => {
                props |= UnicodeProps::MARK | UnicodeProps::NONSPACING;
            }
            GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark => {
                props |= UnicodeProps::MARK;
            }
            _ => {}
        }

        let cp = u32::from(c);
        if is_default_ignorable(cp) {
            props |= UnicodeProps::IGNORABLE;
            match cp {
                ZWJ => props |= UnicodeProps::ZWJ,
                ZWNJ => props |= UnicodeProps::ZWNJ,
                CGJ => props |= UnicodeProps::HIDDEN,
                _ => {}
            }
        }

        props
    }
}

// Default_Ignorable codepoints, except for the Hangul fillers
// (U+115F, U+1160, U+3164, U+FFA0), which fonts render as spacing glyphs,
// and U+1BCA0..1BCA3.
pub(crate) fn is_default_ignorable(cp: u32) -> bool {
    let plane = cp >> 16;
    if plane == 0 {
        match cp >> 8 {
            0x00 => cp == 0x00AD,
            0x03 => cp == 0x034F,
            0x06 => cp == 0x061C,
            0x17 => (0x17B4..=0x17B5).contains(&cp),
            0x18 => (0x180B..=0x180F).contains(&cp),
            0x20 => {
                (0x200B..=0x200F).contains(&cp)
                    || (0x202A..=0x202E).contains(&cp)
                    || (0x2060..=0x206F).contains(&cp)
            }
            0xFE => (0xFE00..=0xFE0F).contains(&cp) || cp == 0xFEFF,
            0xFF => (0xFFF0..=0xFFF8).contains(&cp),
            _ => false,
        }
    } else {
        match plane {
            0x01 => (0x1D173..=0x1D17A).contains(&cp),
            0x0E => (0xE0000..=0xE0FFF).contains(&cp),
            _ => false,
        }
    }
}

pub(crate) fn script_from_char(c: char) -> Script {
    use core::str::FromStr;
    use unicode_script::UnicodeScript;

    match c.script() {
        unicode_script::Script::Common => script::COMMON,
        unicode_script::Script::Inherited => script::INHERITED,
        unicode_script::Script::Unknown => script::UNKNOWN,
        s => Script::from_str(s.short_name()).unwrap_or(script::UNKNOWN),
    }
}

/// Returns the mirrored form of a character, if any.
#[inline]
pub(crate) fn mirrored(c: char) -> Option<char> {
    unicode_bidi_mirroring::get_mirrored(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props() {
        assert_eq!(UnicodeProps::of('a'), UnicodeProps::empty());
        assert_eq!(UnicodeProps::of('\u{0301}'), UnicodeProps::MARK | UnicodeProps::NONSPACING);
        assert_eq!(UnicodeProps::of('\u{200D}'), UnicodeProps::IGNORABLE | UnicodeProps::ZWJ);
        assert_eq!(UnicodeProps::of('\u{200C}'), UnicodeProps::IGNORABLE | UnicodeProps::ZWNJ);
        assert!(UnicodeProps::of('\u{034F}').contains(UnicodeProps::HIDDEN));
        assert!(!UnicodeProps::of('\u{115F}').contains(UnicodeProps::IGNORABLE));
    }

    #[test]
    fn scripts() {
        assert_eq!(script_from_char('a'), script::LATIN);
        assert_eq!(script_from_char('\u{0628}'), script::ARABIC);
        assert_eq!(script_from_char('\u{05D0}'), script::HEBREW);
        assert_eq!(script_from_char('1'), script::COMMON);
        assert_eq!(script_from_char('\u{0301}'), script::INHERITED);
    }

    #[test]
    fn mirroring() {
        assert_eq!(mirrored('('), Some(')'));
        assert_eq!(mirrored('a'), None);
    }
}
