use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::buffer::Buffer;
use crate::{FeatureSchedule, Mask, Tag};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum JoiningType {
    /// Non-joining.
    U,
    /// Right-joining. Joins to the preceding letter only.
    R,
    /// Dual-joining.
    D,
    /// Join-causing, like ZWJ and TATWEEL.
    C,
    /// Transparent, skipped when looking for neighbours.
    T,
}

impl JoiningType {
    #[inline]
    fn joins_next(self) -> bool {
        matches!(self, JoiningType::D | JoiningType::C)
    }

    #[inline]
    fn joins_prev(self) -> bool {
        matches!(self, JoiningType::R | JoiningType::D | JoiningType::C)
    }
}

pub(crate) fn joining_type(c: char) -> JoiningType {
    match u32::from(c) {
        0x200C => JoiningType::U, // ZWNJ
        0x200D => JoiningType::C, // ZWJ
        0x0640 => JoiningType::C, // TATWEEL
        0x07FA => JoiningType::C, // NKO LAJANYALAN

        0x0622..=0x0625 |
        0x0627 |
        0x0629 |
        0x062F..=0x0632 |
        0x0648 |
        0x0671..=0x0673 |
        0x0675..=0x0677 |
        0x0688..=0x0699 |
        0x06C0 |
        0x06C3..=0x06CB |
        0x06CD |
        0x06CF |
        0x06D2..=0x06D3 |
        0x06D5 |
        0x06EE..=0x06EF |
        0x0710 |
        0x0715..=0x0719 |
        0x071E |
        0x0728 |
        0x072A |
        0x072C |
        0x072F |
        0x074D |
        0x0759..=0x075B |
        0x076B..=0x076C |
        0x0771 |
        0x0773..=0x0774 |
        0x0778..=0x0779 |
        0x08AA..=0x08AC |
        0x08AE |
        0x08B1..=0x08B2 |
        0x08B9 => JoiningType::R,

        0x0620 |
        0x0626 |
        0x0628 |
        0x062A..=0x062E |
        0x0633..=0x063F |
        0x0641..=0x0647 |
        0x0649..=0x064A |
        0x066E..=0x066F |
        0x0678..=0x0687 |
        0x069A..=0x06BF |
        0x06C1..=0x06C2 |
        0x06CC |
        0x06CE |
        0x06D0..=0x06D1 |
        0x06FA..=0x06FC |
        0x06FF |
        0x0712..=0x0714 |
        0x071A..=0x071D |
        0x071F..=0x0727 |
        0x0729 |
        0x072B |
        0x072D..=0x072E |
        0x074E..=0x074F |
        0x0750..=0x077F |
        0x07CA..=0x07EA |
        0x08A0..=0x08A9 |
        0x08AF..=0x08B0 |
        0x08B3..=0x08B8 |
        0x08BA..=0x08C8 => JoiningType::D,

        _ => match c.general_category() {
            GeneralCategory::NonspacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::Format => JoiningType::T,
            _ => JoiningType::U,
        },
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Form {
    Isol,
    Fina,
    Medi,
    Init,
}

fn form(prev: JoiningType, cur: JoiningType, next: JoiningType) -> Option<Form> {
    if !matches!(cur, JoiningType::R | JoiningType::D) {
        return None;
    }

    let joins_prev = cur.joins_prev() && prev.joins_next();
    let joins_next = cur.joins_next() && next.joins_prev();
    Some(match (joins_prev, joins_next) {
        (true, true) => Form::Medi,
        (true, false) => Form::Fina,
        (false, true) => Form::Init,
        (false, false) => Form::Isol,
    })
}

/// Sets the joining form masks of the glyphs in the buffer.
///
/// Must run before glyph mapping, while `codepoint` still holds characters
/// in logical order.
pub(crate) fn setup_masks(schedule: &FeatureSchedule, buffer: &mut Buffer) {
    let masks: [Mask; 4] = [
        schedule.one_mask(Tag::from_bytes(b"isol")),
        schedule.one_mask(Tag::from_bytes(b"fina")),
        schedule.one_mask(Tag::from_bytes(b"medi")),
        schedule.one_mask(Tag::from_bytes(b"init")),
    ];
    if masks.iter().all(|&mask| mask == 0) {
        return;
    }

    let len = buffer.len;
    let types: Vec<JoiningType> = buffer.info[..len]
        .iter()
        .map(|info| char::from_u32(info.codepoint).map_or(JoiningType::U, joining_type))
        .collect();

    let mut prev = JoiningType::U;
    for i in 0..len {
        let cur = types[i];
        if cur == JoiningType::T {
            continue;
        }

        let next = types[i + 1..]
            .iter()
            .copied()
            .find(|&t| t != JoiningType::T)
            .unwrap_or(JoiningType::U);

        if let Some(form) = form(prev, cur, next) {
            buffer.info[i].mask |= masks[form as usize];
        }

        prev = cur;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use JoiningType::*;

    #[test]
    fn joining_types() {
        assert_eq!(joining_type('\u{0628}'), D); // BEH
        assert_eq!(joining_type('\u{0627}'), R); // ALEF
        assert_eq!(joining_type('\u{0621}'), U); // HAMZA
        assert_eq!(joining_type('\u{0640}'), C); // TATWEEL
        assert_eq!(joining_type('\u{064E}'), T); // FATHA
        assert_eq!(joining_type('\u{200D}'), C);
        assert_eq!(joining_type('\u{200C}'), U);
        assert_eq!(joining_type('a'), U);
    }

    #[test]
    fn forms() {
        assert_eq!(form(U, D, D), Some(Form::Init));
        assert_eq!(form(D, D, D), Some(Form::Medi));
        assert_eq!(form(D, D, U), Some(Form::Fina));
        assert_eq!(form(U, D, U), Some(Form::Isol));
        // ALEF never joins forward.
        assert_eq!(form(D, R, D), Some(Form::Fina));
        assert_eq!(form(U, R, D), Some(Form::Isol));
        assert_eq!(form(C, D, C), Some(Form::Medi));
        assert_eq!(form(D, U, D), None);
        assert_eq!(form(D, C, D), None);
    }
}
