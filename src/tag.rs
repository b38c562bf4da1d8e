//! Mapping of scripts and languages to OpenType tags.

use crate::tag_table::LANGUAGE_TABLE;
use crate::{script, Language, Script, Tag};

const DEFAULT_SCRIPT: Tag = Tag::from_bytes(b"DFLT");
const DEFAULT_SCRIPT_LOWER: Tag = Tag::from_bytes(b"dflt");
const LATIN_SCRIPT: Tag = Tag::from_bytes(b"latn");

/// Returns the script record candidates of a script, in preference order.
pub(crate) fn script_tags(script: Script) -> [Tag; 4] {
    [ot_script_tag(script), DEFAULT_SCRIPT, DEFAULT_SCRIPT_LOWER, LATIN_SCRIPT]
}

fn ot_script_tag(script: Script) -> Tag {
    match script {
        // Hiragana and Katakana share one OpenType tag.
        script::HIRAGANA => Tag::from_bytes(b"kana"),
        script::NKO => Tag::from_bytes(b"nko "),
        // Lowercase the first letter, the others already are.
        _ => Tag(script.tag().0 | 0x2000_0000),
    }
}

// Sorted by the ISO 639 code.
const LANGUAGES: &[(&str, Tag)] = &[
    ("ar", Tag::from_bytes(b"ARA ")),
    ("az", Tag::from_bytes(b"AZE ")),
    ("bg", Tag::from_bytes(b"BGR ")),
    ("ca", Tag::from_bytes(b"CAT ")),
    ("cs", Tag::from_bytes(b"CSY ")),
    ("cy", Tag::from_bytes(b"WEL ")),
    ("da", Tag::from_bytes(b"DAN ")),
    ("de", Tag::from_bytes(b"DEU ")),
    ("el", Tag::from_bytes(b"ELL ")),
    ("en", Tag::from_bytes(b"ENG ")),
    ("es", Tag::from_bytes(b"ESP ")),
    ("et", Tag::from_bytes(b"ETI ")),
    ("eu", Tag::from_bytes(b"EUQ ")),
    ("fa", Tag::from_bytes(b"FAR ")),
    ("fi", Tag::from_bytes(b"FIN ")),
    ("fr", Tag::from_bytes(b"FRA ")),
    ("ga", Tag::from_bytes(b"IRI ")),
    ("gl", Tag::from_bytes(b"GAL ")),
    ("he", Tag::from_bytes(b"IWR ")),
    ("hi", Tag::from_bytes(b"HIN ")),
    ("hr", Tag::from_bytes(b"HRV ")),
    ("hu", Tag::from_bytes(b"HUN ")),
    ("hy", Tag::from_bytes(b"HYE ")),
    ("id", Tag::from_bytes(b"IND ")),
    ("is", Tag::from_bytes(b"ISL ")),
    ("it", Tag::from_bytes(b"ITA ")),
    ("ja", Tag::from_bytes(b"JAN ")),
    ("ka", Tag::from_bytes(b"KAT ")),
    ("kk", Tag::from_bytes(b"KAZ ")),
    ("ko", Tag::from_bytes(b"KOR ")),
    ("ku", Tag::from_bytes(b"KUR ")),
    ("ky", Tag::from_bytes(b"KIR ")),
    ("lt", Tag::from_bytes(b"LTH ")),
    ("lv", Tag::from_bytes(b"LVI ")),
    ("mk", Tag::from_bytes(b"MKD ")),
    ("mn", Tag::from_bytes(b"MNG ")),
    ("ms", Tag::from_bytes(b"MLY ")),
    ("nb", Tag::from_bytes(b"NOR ")),
    ("nl", Tag::from_bytes(b"NLD ")),
    ("no", Tag::from_bytes(b"NOR ")),
    ("pl", Tag::from_bytes(b"PLK ")),
    ("ps", Tag::from_bytes(b"PAS ")),
    ("pt", Tag::from_bytes(b"PTG ")),
    ("ro", Tag::from_bytes(b"ROM ")),
    ("ru", Tag::from_bytes(b"RUS ")),
    ("sd", Tag::from_bytes(b"SND ")),
    ("sk", Tag::from_bytes(b"SKY ")),
    ("sl", Tag::from_bytes(b"SLV ")),
    ("sq", Tag::from_bytes(b"SQI ")),
    ("sr", Tag::from_bytes(b"SRB ")),
    ("sv", Tag::from_bytes(b"SVE ")),
    ("th", Tag::from_bytes(b"THA ")),
    ("tr", Tag::from_bytes(b"TRK ")),
    ("tt", Tag::from_bytes(b"TAT ")),
    ("ug", Tag::from_bytes(b"UYG ")),
    ("uk", Tag::from_bytes(b"UKR ")),
    ("ur", Tag::from_bytes(b"URD ")),
    ("vi", Tag::from_bytes(b"VIT ")),
    ("zh", Tag::from_bytes(b"ZHS ")),
];

/// Returns the language system candidates of a language, in preference order.
///
/// Two-letter codes use the table above, longer ones the ISO 639-2 and 639-3
/// table. Unknown languages have no candidates and use the default system.
pub(crate) fn language_tags(language: &Language) -> Vec<Tag> {
    let mut tags = Vec::with_capacity(2);

    match language.as_str() {
        "zh-hk" => tags.push(Tag::from_bytes(b"ZHH ")),
        "zh-mo" => tags.push(Tag::from_bytes(b"ZHTM")),
        "zh-tw" | "zh-hant" => tags.push(Tag::from_bytes(b"ZHT ")),
        _ => {}
    }

    let primary = language.primary();
    if let Ok(i) = LANGUAGES.binary_search_by(|(code, _)| (*code).cmp(primary)) {
        tags.push(LANGUAGES[i].1);
    } else {
        let start = LANGUAGE_TABLE.partition_point(|(code, _)| *code < primary);
        let found = LANGUAGE_TABLE[start..]
            .iter()
            .take_while(|(code, _)| *code == primary)
            .map(|(_, tag)| *tag);

        for tag in found {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(s: &str) -> Language {
        s.parse().unwrap()
    }

    #[test]
    fn scripts() {
        assert_eq!(script_tags(script::ARABIC)[0], Tag::from_bytes(b"arab"));
        assert_eq!(script_tags(script::HIRAGANA)[0], Tag::from_bytes(b"kana"));
        assert_eq!(script_tags(script::LATIN)[3], Tag::from_bytes(b"latn"));
        assert_eq!(script_tags(script::COMMON)[1], Tag::from_bytes(b"DFLT"));
    }

    #[test]
    fn languages() {
        assert_eq!(language_tags(&lang("ur-PK")), vec![Tag::from_bytes(b"URD ")]);
        assert_eq!(language_tags(&lang("tr")), vec![Tag::from_bytes(b"TRK ")]);
        assert_eq!(
            language_tags(&lang("zh_TW")),
            vec![Tag::from_bytes(b"ZHT "), Tag::from_bytes(b"ZHS ")]
        );
        assert_eq!(language_tags(&lang("haw")), vec![Tag::from_bytes(b"HAW ")]);
        assert!(language_tags(&lang("x1")).is_empty());
        assert!(language_tags(&lang("qqq")).is_empty());
    }

    #[test]
    fn three_letter_codes() {
        assert_eq!(language_tags(&lang("jpn")), vec![Tag::from_bytes(b"JAN ")]);
        assert_eq!(language_tags(&lang("deu-CH")), vec![Tag::from_bytes(b"DEU ")]);
        assert_eq!(language_tags(&lang("tur")), vec![Tag::from_bytes(b"TRK ")]);
        assert_eq!(
            language_tags(&lang("twi")),
            vec![Tag::from_bytes(b"AKA "), Tag::from_bytes(b"TWI ")]
        );

        let chinese = language_tags(&lang("zho"));
        assert_eq!(chinese[0], Tag::from_bytes(b"ZHS "));
        assert!(chinese.contains(&Tag::from_bytes(b"ZHT ")));
    }

    #[test]
    fn language_tables_are_sorted() {
        assert!(LANGUAGES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(LANGUAGE_TABLE.windows(2).all(|w| w[0].0 <= w[1].0));
        assert!(LANGUAGE_TABLE.iter().all(|(code, _)| code.len() == 3));
    }
}
