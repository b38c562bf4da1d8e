//! Per-script feature lists and the fixed feature classification.

use crate::{script, Script, Tag};

/// How a registered feature takes part in shaping.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FeatureState {
    /// Needed for the script to render correctly. Applied unless
    /// explicitly turned off, like every enabled feature.
    Required,
    /// Applied unless explicitly turned off.
    AlwaysApplied,
    /// Applied unless explicitly turned off.
    OnByDefault,
    /// Applied only when requested.
    OffByDefault,
}

impl FeatureState {
    /// Checks that the feature runs when nothing is requested.
    #[inline]
    pub fn is_enabled(self) -> bool {
        !matches!(self, FeatureState::OffByDefault)
    }
}

/// The table a feature's lookups come from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    /// Glyph substitution, run first.
    Substitution,
    /// Glyph positioning, run on the substituted glyphs.
    Positioning,
}

impl Phase {
    pub(crate) const ALL: [Phase; 2] = [Phase::Substitution, Phase::Positioning];

    /// Returns the phase a feature tag belongs to.
    pub fn of(tag: Tag) -> Self {
        if POSITIONING_TAGS.iter().any(|t| *t == tag) {
            Phase::Positioning
        } else {
            Phase::Substitution
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Phase::Substitution => 0,
            Phase::Positioning => 1,
        }
    }
}

const POSITIONING_TAGS: &[Tag] = &[
    Tag::from_bytes(b"kern"),
    Tag::from_bytes(b"mark"),
    Tag::from_bytes(b"mkmk"),
    Tag::from_bytes(b"curs"),
    Tag::from_bytes(b"dist"),
    Tag::from_bytes(b"abvm"),
    Tag::from_bytes(b"blwm"),
    Tag::from_bytes(b"cpsp"),
    Tag::from_bytes(b"opbd"),
    Tag::from_bytes(b"lfbd"),
    Tag::from_bytes(b"rtbd"),
    Tag::from_bytes(b"palt"),
    Tag::from_bytes(b"halt"),
    Tag::from_bytes(b"vkrn"),
    Tag::from_bytes(b"vpal"),
    Tag::from_bytes(b"vhal"),
    Tag::from_bytes(b"size"),
];

bitflags::bitflags! {
    /// Options of a scheduled feature.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
    pub struct FeatureFlags: u8 {
        /// Feature applies to all glyphs.
        const GLOBAL                    = 0x01;
        /// Feature applies to the glyphs a script pass selects.
        const PER_GLYPH                 = 0x02;
        /// Don't skip over ZWNJ when matching **context**.
        const MANUAL_ZWNJ               = 0x04;
        /// Don't skip over ZWJ when matching **input**.
        const MANUAL_ZWJ                = 0x08;

        /// Don't skip over any joiner.
        const MANUAL_JOINERS            = Self::MANUAL_ZWNJ.bits() | Self::MANUAL_ZWJ.bits();
    }
}

/// A feature registered for a script.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeatureEntry {
    /// The feature tag.
    pub tag: Tag,
    /// Whether it runs without a request.
    pub state: FeatureState,
    /// Per-feature scheduling options.
    pub flags: FeatureFlags,
}

const fn entry(tag: &[u8; 4], state: FeatureState) -> FeatureEntry {
    FeatureEntry { tag: Tag::from_bytes(tag), state, flags: FeatureFlags::empty() }
}

const fn entry_with(tag: &[u8; 4], state: FeatureState, flags: FeatureFlags) -> FeatureEntry {
    FeatureEntry { tag: Tag::from_bytes(tag), state, flags }
}

use FeatureState::*;

const ARABIC_FEATURES: &[FeatureEntry] = &[
    entry(b"ccmp", AlwaysApplied),
    entry_with(b"isol", AlwaysApplied, FeatureFlags::PER_GLYPH.union(FeatureFlags::MANUAL_ZWJ)),
    entry_with(b"fina", AlwaysApplied, FeatureFlags::PER_GLYPH.union(FeatureFlags::MANUAL_ZWJ)),
    entry_with(b"medi", AlwaysApplied, FeatureFlags::PER_GLYPH.union(FeatureFlags::MANUAL_ZWJ)),
    entry_with(b"init", AlwaysApplied, FeatureFlags::PER_GLYPH.union(FeatureFlags::MANUAL_ZWJ)),
    entry_with(b"rlig", AlwaysApplied, FeatureFlags::MANUAL_ZWJ),
    entry(b"rclt", AlwaysApplied),
    entry(b"calt", AlwaysApplied),
    entry(b"liga", OnByDefault),
    entry(b"dlig", OffByDefault),
    entry(b"cswh", OffByDefault),
    entry(b"mset", AlwaysApplied),
    entry(b"curs", AlwaysApplied),
    entry(b"kern", AlwaysApplied),
    entry_with(b"mark", AlwaysApplied, FeatureFlags::MANUAL_JOINERS),
    entry_with(b"mkmk", AlwaysApplied, FeatureFlags::MANUAL_JOINERS),
];

const BUGINESE_FEATURES: &[FeatureEntry] = &[
    entry(b"locl", OnByDefault),
    entry(b"ccmp", Required),
    entry(b"rlig", Required),
    entry(b"liga", OnByDefault),
    entry(b"clig", OnByDefault),
    entry(b"kern", OnByDefault),
    entry(b"dist", Required),
    entry_with(b"mark", Required, FeatureFlags::MANUAL_JOINERS),
    entry_with(b"mkmk", Required, FeatureFlags::MANUAL_JOINERS),
];

const HANGUL_FEATURES: &[FeatureEntry] = &[
    entry(b"ccmp", OnByDefault),
    entry(b"ljmo", Required),
    entry(b"vjmo", Required),
    entry(b"tjmo", Required),
];

const HEBREW_FEATURES: &[FeatureEntry] = &[
    entry(b"ccmp", OnByDefault),
    entry(b"dlig", OffByDefault),
    entry(b"kern", OnByDefault),
    entry_with(b"mark", Required, FeatureFlags::MANUAL_JOINERS),
];

const SIMPLE_FEATURES: &[FeatureEntry] = &[
    entry(b"ccmp", OnByDefault),
    entry(b"liga", OnByDefault),
    entry(b"clig", OnByDefault),
    entry(b"dist", Required),
    entry(b"kern", Required),
    entry_with(b"mark", OnByDefault, FeatureFlags::MANUAL_JOINERS),
    entry_with(b"mkmk", Required, FeatureFlags::MANUAL_JOINERS),
];

/// Scripts sharing a feature list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum ScriptClass {
    Arabic,
    Buginese,
    Hangul,
    Hebrew,
    Simple,
}

impl ScriptClass {
    /// Returns the class of a script with a registered feature list.
    pub fn of(script: Script) -> Option<Self> {
        match script {
            script::ARABIC => Some(ScriptClass::Arabic),
            script::BUGINESE => Some(ScriptClass::Buginese),
            script::HANGUL => Some(ScriptClass::Hangul),
            script::HEBREW => Some(ScriptClass::Hebrew),

            script::LATIN |
            script::CYRILLIC |
            script::GREEK |
            script::ARMENIAN |
            script::GEORGIAN |
            script::CHEROKEE |
            script::OGHAM |
            script::RUNIC |
            script::HAN |
            script::HIRAGANA |
            script::KATAKANA |
            script::BOPOMOFO |
            script::COMMON |
            script::INHERITED |
            script::UNKNOWN => Some(ScriptClass::Simple),

            _ => None,
        }
    }

    /// Features in registration order.
    pub fn features(self) -> &'static [FeatureEntry] {
        match self {
            ScriptClass::Arabic => ARABIC_FEATURES,
            ScriptClass::Buginese => BUGINESE_FEATURES,
            ScriptClass::Hangul => HANGUL_FEATURES,
            ScriptClass::Hebrew => HEBREW_FEATURES,
            ScriptClass::Simple => SIMPLE_FEATURES,
        }
    }

    /// Checks that glyphs get joining forms before substitution.
    #[inline]
    pub fn has_joining(self) -> bool {
        self == ScriptClass::Arabic
    }
}

// Registered feature tags in registration order. `cv01..cv99` follow the
// first group and `ss01..ss20` the second.
const REGISTERED_BEFORE_CV: &[&[u8; 4]] = &[
    b"aalt", b"abvf", b"abvm", b"abvs", b"afrc", b"akhn", b"blwf", b"blwm",
    b"blws", b"calt", b"case", b"ccmp", b"cfar", b"cjct", b"clig", b"cpct",
    b"cpsp", b"cswh", b"curs",
];

const REGISTERED_BEFORE_SS: &[&[u8; 4]] = &[
    b"c2pc", b"c2sc", b"dist", b"dlig", b"dnom", b"dtls", b"expt", b"falt",
    b"fin2", b"fin3", b"fina", b"flac", b"frac", b"fwid", b"half", b"haln",
    b"halt", b"hist", b"hkna", b"hlig", b"hngl", b"hojo", b"hwid", b"init",
    b"isol", b"ital", b"jalt", b"jp78", b"jp83", b"jp90", b"jp04", b"kern",
    b"lfbd", b"liga", b"ljmo", b"lnum", b"locl", b"ltra", b"ltrm", b"mark",
    b"med2", b"medi", b"mgrk", b"mkmk", b"mset", b"nalt", b"nlck", b"nukt",
    b"numr", b"onum", b"opbd", b"ordn", b"ornm", b"palt", b"pcap", b"pkna",
    b"pnum", b"pref", b"pres", b"pstf", b"psts", b"pwid", b"qwid", b"rand",
    b"rclt", b"rkrf", b"rlig", b"rphf", b"rtbd", b"rtla", b"rtlm", b"ruby",
    b"rvrn", b"salt", b"sinf", b"size", b"smcp", b"smpl",
];

const REGISTERED_AFTER_SS: &[&[u8; 4]] = &[
    b"ssty", b"stch", b"subs", b"sups", b"swsh", b"titl", b"tjmo", b"tnam",
    b"tnum", b"trad", b"twid", b"unic", b"valt", b"vatu", b"vert", b"vhal",
    b"vjmo", b"vkna", b"vkrn", b"vpal", b"vrt2", b"vrtr", b"zero",
];

/// Returns the registration rank of a tag, if it is a registered feature.
pub(crate) fn registration_rank(tag: Tag) -> Option<u32> {
    if let Some(i) = rank_in(REGISTERED_BEFORE_CV, tag) {
        return Some(i);
    }
    let mut base = REGISTERED_BEFORE_CV.len() as u32;

    if let Some(n) = numbered(tag, b"cv", 99) {
        return Some(base + n);
    }
    base += 99;

    if let Some(i) = rank_in(REGISTERED_BEFORE_SS, tag) {
        return Some(base + i);
    }
    base += REGISTERED_BEFORE_SS.len() as u32;

    if let Some(n) = numbered(tag, b"ss", 20) {
        return Some(base + n);
    }
    base += 20;

    rank_in(REGISTERED_AFTER_SS, tag).map(|i| base + i)
}

fn rank_in(tags: &[&[u8; 4]], tag: Tag) -> Option<u32> {
    tags.iter().position(|t| Tag::from_bytes(t) == tag).map(|i| i as u32)
}

/// Parses `xx01..xxNN` into `0..NN`.
fn numbered(tag: Tag, prefix: &[u8; 2], last: u32) -> Option<u32> {
    let bytes = tag.to_bytes();
    if bytes[..2] != prefix[..] || !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
        return None;
    }

    let n = u32::from(bytes[2] - b'0') * 10 + u32::from(bytes[3] - b'0');
    (1..=last).contains(&n).then(|| n - 1)
}

/// Sort key of a feature tag within a schedule.
///
/// Tags of the script's own list come first, in list order, then the
/// registered tags, then everything else by tag value.
pub(crate) fn order_key(class: Option<ScriptClass>, tag: Tag) -> (u8, u32) {
    if let Some(i) = class.and_then(|c| c.features().iter().position(|e| e.tag == tag)) {
        return (0, i as u32);
    }

    match registration_rank(tag) {
        Some(i) => (1, i),
        None => (2, tag.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases() {
        assert_eq!(Phase::of(Tag::from_bytes(b"kern")), Phase::Positioning);
        assert_eq!(Phase::of(Tag::from_bytes(b"size")), Phase::Positioning);
        assert_eq!(Phase::of(Tag::from_bytes(b"liga")), Phase::Substitution);
        assert_eq!(Phase::of(Tag::from_bytes(b"zzzz")), Phase::Substitution);
    }

    #[test]
    fn script_classes() {
        assert_eq!(ScriptClass::of(script::CYRILLIC), Some(ScriptClass::Simple));
        assert_eq!(ScriptClass::of(script::ARABIC), Some(ScriptClass::Arabic));
        assert_eq!(ScriptClass::of(script::DEVANAGARI), None);
    }

    #[test]
    fn ordering() {
        let arabic = Some(ScriptClass::Arabic);
        let key = |tag: &[u8; 4]| order_key(arabic, Tag::from_bytes(tag));
        assert!(key(b"ccmp") < key(b"isol"));
        assert!(key(b"mkmk") < key(b"abvs"));
        assert!(key(b"ss20") < key(b"aaaa"));
        assert!(key(b"aaaa") < key(b"zzzz"));
        // The registration rank is independent of the script list.
        assert!(order_key(None, Tag::from_bytes(b"calt")) < order_key(None, Tag::from_bytes(b"ccmp")));
    }

    #[test]
    fn registration_ranks() {
        let rank = |tag: &[u8; 4]| registration_rank(Tag::from_bytes(tag));
        assert_eq!(rank(b"aalt"), Some(0));
        assert_eq!(rank(b"cv01"), Some(19));
        assert_eq!(rank(b"c2pc"), Some(19 + 99));
        assert!(rank(b"curs") < rank(b"cv42"));
        assert!(rank(b"cv99") < rank(b"c2sc"));
        assert!(rank(b"salt") < rank(b"ss01"));
        assert!(rank(b"smpl") < rank(b"ss01"));
        assert!(rank(b"ss20") < rank(b"ssty"));
        assert!(rank(b"vrtr") < rank(b"zero"));
        assert_eq!(rank(b"zero"), Some(19 + 99 + 78 + 20 + 22));
        assert_eq!(rank(b"cv00"), None);
        assert_eq!(rank(b"ss21"), None);
        assert_eq!(rank(b"abcd"), None);
    }
}
