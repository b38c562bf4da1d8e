use core::ops::{Bound, RangeBounds};
use core::str::FromStr;

use crate::Tag;

/// Defines the direction in which text is to be read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Initial, unset direction.
    #[default]
    Invalid,
    /// Text is set horizontally from left to right.
    LeftToRight,
    /// Text is set horizontally from right to left.
    RightToLeft,
    /// Text is set vertically from top to bottom.
    TopToBottom,
    /// Text is set vertically from bottom to top.
    BottomToTop,
}

impl Direction {
    #[inline]
    pub(crate) fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::RightToLeft)
    }

    #[inline]
    pub(crate) fn is_vertical(self) -> bool {
        matches!(self, Direction::TopToBottom | Direction::BottomToTop)
    }

    #[inline]
    pub(crate) fn is_forward(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::TopToBottom)
    }

    #[inline]
    pub(crate) fn is_backward(self) -> bool {
        matches!(self, Direction::RightToLeft | Direction::BottomToTop)
    }

    /// Returns the opposite direction on the same axis.
    pub fn reverse(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
            Direction::TopToBottom => Direction::BottomToTop,
            Direction::BottomToTop => Direction::TopToBottom,
            Direction::Invalid => Direction::Invalid,
        }
    }

    /// Returns the horizontal direction a script is natively written in.
    ///
    /// Returns `None` for scripts whose direction depends on context
    /// (Common, Inherited, Unknown).
    pub fn from_script(script: Script) -> Option<Self> {
        match script {
            script::COMMON | script::INHERITED | script::UNKNOWN => None,

            // Unicode-1.1 additions
            script::ARABIC |
            script::HEBREW |

            // Unicode-3.0 additions
            script::SYRIAC |
            script::THAANA |

            // Unicode-4.0 additions
            script::CYPRIOT |

            // Unicode-4.1 additions
            script::KHAROSHTHI |

            // Unicode-5.0 additions
            script::PHOENICIAN |
            script::NKO |

            // Unicode-5.1 additions
            script::LYDIAN |

            // Unicode-5.2 additions
            script::AVESTAN |
            script::IMPERIAL_ARAMAIC |
            script::INSCRIPTIONAL_PAHLAVI |
            script::INSCRIPTIONAL_PARTHIAN |
            script::OLD_SOUTH_ARABIAN |
            script::OLD_TURKIC |
            script::SAMARITAN |

            // Unicode-6.0 additions
            script::MANDAIC |

            // Unicode-6.1 additions
            script::MEROITIC_CURSIVE |
            script::MEROITIC_HIEROGLYPHS |

            // Unicode-7.0 additions
            script::MANICHAEAN |
            script::MENDE_KIKAKUI |
            script::NABATAEAN |
            script::OLD_NORTH_ARABIAN |
            script::PALMYRENE |
            script::PSALTER_PAHLAVI |

            // Unicode-8.0 additions
            script::HATRAN |
            script::OLD_HUNGARIAN |

            // Unicode-9.0 additions
            script::ADLAM |

            // Unicode-11.0 additions
            script::HANIFI_ROHINGYA |
            script::OLD_SOGDIAN |
            script::SOGDIAN |

            // Unicode-12.0 additions
            script::ELYMAIC => Some(Direction::RightToLeft),

            _ => Some(Direction::LeftToRight),
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("invalid direction");
        }

        // Only the first letter matters, so "ltr", "LTR" and "left" all work.
        match s.as_bytes()[0].to_ascii_lowercase() {
            b'l' => Ok(Direction::LeftToRight),
            b'r' => Ok(Direction::RightToLeft),
            b't' => Ok(Direction::TopToBottom),
            b'b' => Ok(Direction::BottomToTop),
            _ => Err("invalid direction"),
        }
    }
}

/// A text language, stored as a lowercase BCP 47 / ISO 639 string.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Language(String);

impl Language {
    /// Returns the language as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the primary subtag, e.g. `"ur"` for `"ur-PK"`.
    pub(crate) fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or("")
    }
}

impl FromStr for Language {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("invalid language");
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            return Err("invalid language");
        }

        Ok(Language(s.to_ascii_lowercase().replace('_', "-")))
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A text script.
///
/// Any ISO 15924 tag is accepted, not only the predefined ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script(pub(crate) Tag);

impl Script {
    #[inline]
    pub(crate) const fn from_bytes(bytes: &[u8; 4]) -> Self {
        Script(Tag::from_bytes(bytes))
    }

    /// Converts an ISO 15924 script tag to a corresponding `Script`.
    pub fn from_iso15924_tag(tag: Tag) -> Option<Script> {
        if tag.0 == 0 {
            return None;
        }

        // Be lenient, adjust case (one capital letter followed by three small letters).
        let tag = Tag((tag.0 & 0xDFDFDFDF) | 0x00202020);

        match &tag.to_bytes() {
            // Graduated 'Q' private-use codes still in use.
            b"Qaai" => return Some(script::INHERITED),
            b"Qaac" => return Some(script::COPTIC),

            // Script variants.
            b"Cyrs" => return Some(script::CYRILLIC),
            b"Latf" | b"Latg" => return Some(script::LATIN),
            b"Syre" | b"Syrj" | b"Syrn" => return Some(script::SYRIAC),

            _ => {}
        }

        if tag.0 & 0xE0E0E0E0 == 0x40606060 {
            Some(Script(tag))
        } else {
            Some(script::UNKNOWN)
        }
    }

    /// Returns script's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.0
    }
}

impl FromStr for Script {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = Tag::from_bytes_lossy(s.as_bytes());
        Script::from_iso15924_tag(tag).ok_or("invalid script")
    }
}

/// Predefined scripts.
pub mod script {
    #![allow(missing_docs)]

    use crate::Script;

    pub const COMMON: Script                    = Script::from_bytes(b"Zyyy");
    pub const INHERITED: Script                 = Script::from_bytes(b"Zinh");
    pub const UNKNOWN: Script                   = Script::from_bytes(b"Zzzz");

    pub const ADLAM: Script                     = Script::from_bytes(b"Adlm");
    pub const ARABIC: Script                    = Script::from_bytes(b"Arab");
    pub const ARMENIAN: Script                  = Script::from_bytes(b"Armn");
    pub const AVESTAN: Script                   = Script::from_bytes(b"Avst");
    pub const BENGALI: Script                   = Script::from_bytes(b"Beng");
    pub const BOPOMOFO: Script                  = Script::from_bytes(b"Bopo");
    pub const BUGINESE: Script                  = Script::from_bytes(b"Bugi");
    pub const CHEROKEE: Script                  = Script::from_bytes(b"Cher");
    pub const COPTIC: Script                    = Script::from_bytes(b"Copt");
    pub const CYPRIOT: Script                   = Script::from_bytes(b"Cprt");
    pub const CYRILLIC: Script                  = Script::from_bytes(b"Cyrl");
    pub const DEVANAGARI: Script                = Script::from_bytes(b"Deva");
    pub const ELYMAIC: Script                   = Script::from_bytes(b"Elym");
    pub const GEORGIAN: Script                  = Script::from_bytes(b"Geor");
    pub const GREEK: Script                     = Script::from_bytes(b"Grek");
    pub const HAN: Script                       = Script::from_bytes(b"Hani");
    pub const HANGUL: Script                    = Script::from_bytes(b"Hang");
    pub const HANIFI_ROHINGYA: Script           = Script::from_bytes(b"Rohg");
    pub const HATRAN: Script                    = Script::from_bytes(b"Hatr");
    pub const HEBREW: Script                    = Script::from_bytes(b"Hebr");
    pub const HIRAGANA: Script                  = Script::from_bytes(b"Hira");
    pub const IMPERIAL_ARAMAIC: Script          = Script::from_bytes(b"Armi");
    pub const INSCRIPTIONAL_PAHLAVI: Script     = Script::from_bytes(b"Phli");
    pub const INSCRIPTIONAL_PARTHIAN: Script    = Script::from_bytes(b"Prti");
    pub const KATAKANA: Script                  = Script::from_bytes(b"Kana");
    pub const KHAROSHTHI: Script                = Script::from_bytes(b"Khar");
    pub const LATIN: Script                     = Script::from_bytes(b"Latn");
    pub const LYDIAN: Script                    = Script::from_bytes(b"Lydi");
    pub const MANDAIC: Script                   = Script::from_bytes(b"Mand");
    pub const MANICHAEAN: Script                = Script::from_bytes(b"Mani");
    pub const MENDE_KIKAKUI: Script             = Script::from_bytes(b"Mend");
    pub const MEROITIC_CURSIVE: Script          = Script::from_bytes(b"Merc");
    pub const MEROITIC_HIEROGLYPHS: Script      = Script::from_bytes(b"Mero");
    pub const MONGOLIAN: Script                 = Script::from_bytes(b"Mong");
    pub const NABATAEAN: Script                 = Script::from_bytes(b"Nbat");
    pub const NKO: Script                       = Script::from_bytes(b"Nkoo");
    pub const OGHAM: Script                     = Script::from_bytes(b"Ogam");
    pub const OLD_HUNGARIAN: Script             = Script::from_bytes(b"Hung");
    pub const OLD_NORTH_ARABIAN: Script         = Script::from_bytes(b"Narb");
    pub const OLD_SOGDIAN: Script               = Script::from_bytes(b"Sogo");
    pub const OLD_SOUTH_ARABIAN: Script         = Script::from_bytes(b"Sarb");
    pub const OLD_TURKIC: Script                = Script::from_bytes(b"Orkh");
    pub const PALMYRENE: Script                 = Script::from_bytes(b"Palm");
    pub const PHOENICIAN: Script                = Script::from_bytes(b"Phnx");
    pub const PSALTER_PAHLAVI: Script           = Script::from_bytes(b"Phlp");
    pub const RUNIC: Script                     = Script::from_bytes(b"Runr");
    pub const SAMARITAN: Script                 = Script::from_bytes(b"Samr");
    pub const SOGDIAN: Script                   = Script::from_bytes(b"Sogd");
    pub const SYRIAC: Script                    = Script::from_bytes(b"Syrc");
    pub const THAANA: Script                    = Script::from_bytes(b"Thaa");
    pub const THAI: Script                      = Script::from_bytes(b"Thai");
}

/// A feature tag with an accompanying range specifying on which subslice of
/// `shape`s input it should be applied.
///
/// `start` and `end` are cluster values, i.e. character offsets into the
/// segment text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Feature {
    /// The feature tag.
    pub tag: Tag,
    /// The value. `0` disables the feature, `1` enables it, larger values
    /// select an alternate.
    pub value: u32,
    /// The first cluster the feature applies to.
    pub start: u32,
    /// One past the last cluster the feature applies to.
    pub end: u32,
}

impl Feature {
    /// Create a new `Feature` struct.
    pub fn new(tag: Tag, value: u32, range: impl RangeBounds<usize>) -> Feature {
        let max = u32::MAX as usize;
        let start = match range.start_bound() {
            Bound::Included(&included) => included.min(max) as u32,
            Bound::Excluded(&excluded) => excluded.min(max - 1) as u32 + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&included) => included.min(max - 1) as u32 + 1,
            Bound::Excluded(&excluded) => excluded.min(max) as u32,
            Bound::Unbounded => u32::MAX,
        };

        Feature { tag, value, start, end }
    }

    /// Checks that the feature applies to the whole segment.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.start == 0 && self.end == u32::MAX
    }
}

impl FromStr for Feature {
    type Err = &'static str;

    /// Parses a `Feature` form a string.
    ///
    /// Possible values:
    ///
    /// - `kern` -> kern .. 1
    /// - `+kern` -> kern .. 1
    /// - `-kern` -> kern .. 0
    /// - `kern=0` -> kern .. 0
    /// - `kern=1` -> kern .. 1
    /// - `aalt=2` -> aalt .. 2
    /// - `ss01=off` -> ss01 .. 0
    /// - `kern[]` -> kern .. 1
    /// - `kern[:]` -> kern .. 1
    /// - `kern[5:]` -> kern 5.. 1
    /// - `kern[:5]` -> kern ..5 1
    /// - `kern[3:5]` -> kern 3..5 1
    /// - `kern[3]` -> kern 3..4 1
    /// - `aalt[3:5]=2` -> aalt 3..5 2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn parse(s: &str) -> Option<Feature> {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }

            let (mut value, s) = match s.as_bytes()[0] {
                b'-' => (0, &s[1..]),
                b'+' => (1, &s[1..]),
                _ => (1, s),
            };

            let s = s.trim_start();
            let (tag, rest) = if s.starts_with('"') || s.starts_with('\'') {
                let quote = s.as_bytes()[0] as char;
                let close = s[1..].find(quote)? + 1;
                (&s[1..close], &s[close + 1..])
            } else {
                let end = s.find(|c: char| c == '[' || c == '=' || c.is_whitespace()).unwrap_or(s.len());
                (&s[..end], &s[end..])
            };

            if tag.is_empty() || tag.len() > 4 || !tag.is_ascii() {
                return None;
            }

            let tag = Tag::from_bytes_lossy(tag.as_bytes());
            let mut rest = rest.trim_start();

            let mut start: u32 = 0;
            let mut end = u32::MAX;
            if let Some(range) = rest.strip_prefix('[') {
                let close = range.find(']')?;
                let inner = range[..close].trim();
                rest = range[close + 1..].trim_start();

                if !inner.is_empty() {
                    match inner.split_once(':') {
                        Some((a, b)) => {
                            let (a, b) = (a.trim(), b.trim());
                            if !a.is_empty() {
                                start = a.parse().ok()?;
                            }
                            if !b.is_empty() {
                                end = b.parse().ok()?;
                            }
                        }
                        None => {
                            start = inner.parse().ok()?;
                            end = start.checked_add(1)?;
                        }
                    }
                }
            }

            if let Some(v) = rest.strip_prefix('=') {
                value = match v.trim() {
                    "on" | "true" => 1,
                    "off" | "false" => 0,
                    v => v.parse().ok()?,
                };
            } else if !rest.is_empty() {
                return None;
            }

            Some(Feature { tag, value, start, end })
        }

        parse(s).ok_or("invalid feature")
    }
}

#[cfg(test)]
mod tests_features {
    use super::*;

    macro_rules! test {
        ($name:ident, $text:expr, $tag:expr, $value:expr, $range:expr) => {
            #[test]
            fn $name() {
                assert_eq!(
                    Feature::from_str($text).unwrap(),
                    Feature::new(Tag::from_bytes($tag), $value, $range)
                );
            }
        };
    }

    test!(parse_01, "kern", b"kern", 1, ..);
    test!(parse_02, "+kern", b"kern", 1, ..);
    test!(parse_03, "-kern", b"kern", 0, ..);
    test!(parse_04, "kern=0", b"kern", 0, ..);
    test!(parse_05, "kern=1", b"kern", 1, ..);
    test!(parse_06, "aalt=2", b"aalt", 2, ..);
    test!(parse_07, "kern[]", b"kern", 1, ..);
    test!(parse_08, "kern[:]", b"kern", 1, ..);
    test!(parse_09, "kern[5:]", b"kern", 1, 5..);
    test!(parse_10, "kern[:5]", b"kern", 1, ..=4);
    test!(parse_11, "kern[3:5]", b"kern", 1, 3..=4);
    test!(parse_12, "kern[3]", b"kern", 1, 3..=3);
    test!(parse_13, "aalt[3:5]=2", b"aalt", 2, 3..=4);
    test!(parse_14, "ss01=off", b"ss01", 0, ..);
    test!(parse_15, "\"liga\"", b"liga", 1, ..);
    test!(parse_16, "cv1", b"cv1 ", 1, ..);

    #[test]
    fn parse_errors() {
        assert!(Feature::from_str("").is_err());
        assert!(Feature::from_str("kernel").is_err());
        assert!(Feature::from_str("kern[3").is_err());
        assert!(Feature::from_str("kern=x").is_err());
        // A single index has no room for its exclusive end.
        assert!(Feature::from_str("kern[4294967295]").is_err());
    }
}

#[cfg(test)]
mod tests_common {
    use super::*;

    #[test]
    fn direction_from_str() {
        assert_eq!("ltr".parse(), Ok(Direction::LeftToRight));
        assert_eq!("RTL".parse(), Ok(Direction::RightToLeft));
        assert_eq!("ttb".parse(), Ok(Direction::TopToBottom));
        assert_eq!("b".parse(), Ok(Direction::BottomToTop));
        assert!("x".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_from_script() {
        assert_eq!(Direction::from_script(script::ARABIC), Some(Direction::RightToLeft));
        assert_eq!(Direction::from_script(script::LATIN), Some(Direction::LeftToRight));
        assert_eq!(Direction::from_script(script::COMMON), None);
    }

    #[test]
    fn script_is_case_insensitive() {
        assert_eq!("latn".parse(), Ok(script::LATIN));
        assert_eq!("ARAB".parse(), Ok(script::ARABIC));
        assert_eq!("Latf".parse(), Ok(script::LATIN));
        assert_eq!("1234".parse(), Ok(script::UNKNOWN));
    }

    #[test]
    fn language_normalizes() {
        let lang: Language = "ur_PK".parse().unwrap();
        assert_eq!(lang.as_str(), "ur-pk");
        assert_eq!(lang.primary(), "ur");
        assert!("".parse::<Language>().is_err());
        assert!("en us".parse::<Language>().is_err());
    }
}
