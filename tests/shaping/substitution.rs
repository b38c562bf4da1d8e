use crate::fonts::{self, ALEF, BEH, FATHA};
use crate::shape;

#[test]
fn ffi_ligature() {
    assert_eq!(shape(&fonts::latin(), "ffi", ""), "100=0+1000");
}

#[test]
fn ligature_flags() {
    assert_eq!(shape(&fonts::latin(), "ffi", "--show-flags"), "100=0+1000#30");
}

#[test]
fn earlier_ligatures_win() {
    assert_eq!(shape(&fonts::latin(), "fi", ""), "101=0+800");
    assert_eq!(
        shape(&fonts::latin(), "ffffi", ""),
        "102=0+900|\
         100=2+1000"
    );
}

#[test]
fn ligatures_can_be_disabled() {
    assert_eq!(
        shape(&fonts::latin(), "ffi", "--features=-liga"),
        "6=0+500|\
         6=1+500|\
         9=2+500"
    );
}

#[test]
fn ligatures_can_be_disabled_for_a_range() {
    assert_eq!(
        shape(&fonts::latin(), "ffiffi", "--features=-liga[3:]"),
        "100=0+1000|\
         6=3+500|\
         6=4+500|\
         9=5+500"
    );
}

#[test]
fn alternates_by_value() {
    let face = fonts::latin();
    assert_eq!(shape(&face, "a", ""), "1=0+500");
    assert_eq!(shape(&face, "a", "--features=salt"), "200=0+550");
    assert_eq!(shape(&face, "a", "--features=salt=2"), "201=0+550");
    assert_eq!(shape(&face, "a", "--features=salt=3"), "202=0+550");
    // No such alternate.
    assert_eq!(shape(&face, "a", "--features=salt=4"), "1=0+500");
}

#[test]
fn language_system() {
    let face = fonts::latin();
    assert_eq!(shape(&face, "i", ""), "9=0+500");
    assert_eq!(shape(&face, "i", "--language=tr"), "30=0+500");
}

#[test]
fn unmapped_codepoints_use_notdef() {
    assert_eq!(
        shape(&fonts::latin(), "a1", ""),
        "1=0+500|\
         0=1+1000"
    );
}

#[test]
fn arabic_joining() {
    let face = fonts::arabic();
    let text = |chars: &[char]| chars.iter().collect::<String>();

    assert_eq!(shape(&face, &text(&[BEH]), "--no-positions"), "10=0");
    assert_eq!(shape(&face, &text(&[BEH, BEH]), "--no-positions"), "13=1|11=0");
    assert_eq!(shape(&face, &text(&[BEH, BEH, BEH]), "--no-positions"), "13=2|12=1|11=0");
    assert_eq!(shape(&face, &text(&[BEH, ALEF]), "--no-positions"), "21=1|11=0");
    // ALEF does not join the following letter.
    assert_eq!(shape(&face, &text(&[ALEF, BEH]), "--no-positions"), "10=1|20=0");
}

#[test]
fn arabic_joining_skips_marks() {
    let face = fonts::arabic();
    let text: String = [BEH, FATHA, BEH].iter().collect();
    assert_eq!(shape(&face, &text, "--no-positions"), "13=2|3=0|11=0");
}

#[test]
fn remove_marks() {
    assert_eq!(
        shape(&fonts::latin(), "a\u{0301}b", "--remove-marks"),
        "1=0+500|\
         2=2+500"
    );
}

#[test]
fn remove_bases() {
    assert_eq!(shape(&fonts::latin(), "a\u{0301}", "--remove-bases --no-positions"), "27=0");
}
