use crate::fonts;
use crate::shape;

#[test]
fn kerning() {
    let face = fonts::latin();
    assert_eq!(
        shape(&face, "av", ""),
        "1=0+460|\
         22=1+500"
    );
    assert_eq!(
        shape(&face, "va", ""),
        "22=0+470|\
         1=1+500"
    );
    assert_eq!(
        shape(&face, "ab", ""),
        "1=0+500|\
         2=1+500"
    );
}

#[test]
fn kerning_can_be_disabled() {
    assert_eq!(
        shape(&fonts::latin(), "av", "--features=-kern"),
        "1=0+500|\
         22=1+500"
    );
}

#[test]
fn mark_to_base() {
    assert_eq!(
        shape(&fonts::latin(), "a\u{0301}", ""),
        "1=0+500|\
         27=0@-400,600+0"
    );
}

#[test]
fn marks_block_kerning() {
    // The kern lookup does not skip marks.
    assert_eq!(
        shape(&fonts::latin(), "a\u{0301}v", ""),
        "1=0+500|\
         27=0@-400,600+0|\
         22=2+500"
    );
}

#[test]
fn cursive_pair() {
    assert_eq!(
        shape(&fonts::cursive(), "aa", "--features=curs"),
        "1=0+550|\
         1=1@-50,100+550"
    );
}

#[test]
fn cursive_chain() {
    assert_eq!(
        shape(&fonts::cursive(), "aaa", "--features=curs"),
        "1=0+550|\
         1=1@-50,100+500|\
         1=2@-50,200+550"
    );
}

#[test]
fn cursive_is_not_on_by_default() {
    assert_eq!(
        shape(&fonts::cursive(), "aa", ""),
        "1=0+600|\
         1=1+600"
    );
}

#[test]
fn positioning_is_repeatable() {
    let face = fonts::latin();
    let first = shape(&face, "a\u{0301}va\u{0301}", "");
    let second = shape(&face, "a\u{0301}va\u{0301}", "");
    assert_eq!(first, second);
}

#[test]
fn vertical_advances() {
    assert_eq!(
        shape(&fonts::latin(), "ab", "--direction=ttb --no-clusters"),
        "1+0,-1000|\
         2+0,-1000"
    );
}
