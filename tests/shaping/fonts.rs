//! In-memory faces used by the shaping tests.
//!
//! Latin letters map to glyphs 1..=26 in alphabetical order and advance by
//! 500 units unless noted otherwise.

use shaperune::tables::*;
use shaperune::{Face, FaceBuilder, Tag};

pub const A: u16 = 1;
pub const F: u16 = 6;
pub const I: u16 = 9;
pub const V: u16 = 22;
pub const ACUTE: u16 = 27;
pub const DOTTED_I: u16 = 30;
pub const FFI: u16 = 100;
pub const FI: u16 = 101;
pub const FF: u16 = 102;

fn latn() -> Tag {
    Tag::from_bytes(b"latn")
}

fn letters(builder: FaceBuilder) -> FaceBuilder {
    ('a'..='z')
        .zip(1..)
        .fold(builder, |builder, (c, glyph)| builder.map(c, glyph))
        .advances((1..=26).map(|glyph| (glyph, 500)))
}

fn subst(subtable: SubstitutionSubtable) -> Lookup<SubstitutionSubtable> {
    Lookup::new(LookupFlags::empty(), vec![subtable])
}

/// Ligatures, alternates, kerning and marks.
pub fn latin() -> Face {
    let mut gsub = SubstitutionTable::new();
    let liga = gsub.push_lookup(subst(SubstitutionSubtable::Ligature(
        LigatureSubst::from_ligatures([
            (&[F, F, I][..], FFI),
            (&[F, I][..], FI),
            (&[F, F][..], FF),
        ]),
    )));
    let salt = gsub.push_lookup(subst(SubstitutionSubtable::Alternate(
        AlternateSubst::from_pairs([(A, &[200, 201, 202][..])]),
    )));
    let locl = gsub.push_lookup(subst(SubstitutionSubtable::Single(
        SingleSubst::from_pairs([(I, DOTTED_I)]),
    )));
    gsub.add_feature(latn(), None, Tag::from_bytes(b"liga"), &[liga]);
    gsub.add_feature(latn(), None, Tag::from_bytes(b"salt"), &[salt]);
    gsub.add_feature(latn(), Some(Tag::from_bytes(b"TRK ")), Tag::from_bytes(b"ccmp"), &[locl]);

    let mut gpos = PositioningTable::new();
    let kern = gpos.push_lookup(Lookup::new(
        LookupFlags::empty(),
        vec![PositioningSubtable::Pair(PairPos::from_pairs([
            (A, V, PairValues { first: ValueRecord::x_advance(-40), second: None }),
            (V, A, PairValues { first: ValueRecord::x_advance(-30), second: None }),
        ]))],
    ));
    let mark = gpos.push_lookup(Lookup::new(
        LookupFlags::empty(),
        vec![PositioningSubtable::MarkBase(MarkBasePos {
            mark_coverage: Coverage::from_glyphs([ACUTE]),
            base_coverage: Coverage::from_glyphs(1..=26),
            marks: vec![MarkRecord { class: 0, anchor: Anchor::new(150, 0) }],
            bases: vec![vec![Some(Anchor::new(250, 600))]; 26],
        })],
    ));
    gpos.add_feature(latn(), None, Tag::from_bytes(b"kern"), &[kern]);
    gpos.add_feature(latn(), None, Tag::from_bytes(b"mark"), &[mark]);

    letters(FaceBuilder::new(1000))
        .map('\u{0301}', ACUTE)
        .advances([
            (ACUTE, 300),
            (DOTTED_I, 500),
            (FFI, 1000),
            (FI, 800),
            (FF, 900),
            (200, 550),
            (201, 550),
            (202, 550),
        ])
        .glyph_classes(ClassDef::from_pairs(
            (1..=26)
                .map(|glyph| (glyph, 1))
                .chain([(ACUTE, 3), (FFI, 2), (FI, 2), (FF, 2)]),
        ))
        .gsub(gsub)
        .gpos(gpos)
        .build()
}

/// `a` joins cursively: entry at (50, 0), exit at (550, 100).
pub fn cursive() -> Face {
    let mut gpos = PositioningTable::new();
    let curs = gpos.push_lookup(Lookup::new(
        LookupFlags::empty(),
        vec![PositioningSubtable::Cursive(CursivePos {
            coverage: Coverage::from_glyphs([A]),
            records: vec![EntryExit {
                entry: Some(Anchor::new(50, 0)),
                exit: Some(Anchor::new(550, 100)),
            }],
        })],
    ));
    gpos.add_feature(latn(), None, Tag::from_bytes(b"curs"), &[curs]);

    FaceBuilder::new(1000).map('a', A).advances([(A, 600)]).gpos(gpos).build()
}

/// `a` expands into a hundred copies of itself.
pub fn expanding() -> Face {
    let copies = [A; 100];
    let mut gsub = SubstitutionTable::new();
    let ccmp = gsub.push_lookup(subst(SubstitutionSubtable::Multiple(
        MultipleSubst::from_pairs([(A, &copies[..])]),
    )));
    gsub.add_feature(latn(), None, Tag::from_bytes(b"ccmp"), &[ccmp]);

    letters(FaceBuilder::new(1000)).gsub(gsub).build()
}

/// A contextual lookup on `a` that applies itself.
pub fn cyclic() -> Face {
    let mut gsub = SubstitutionTable::new();
    let calt = gsub.push_lookup(subst(SubstitutionSubtable::Context(ContextLookup::Coverages {
        coverages: vec![Coverage::from_glyphs([A])],
        lookups: vec![SequenceLookupRecord::new(0, 0)],
    })));
    gsub.add_feature(latn(), None, Tag::from_bytes(b"ccmp"), &[calt]);

    letters(FaceBuilder::new(1000)).gsub(gsub).build()
}

/// Two features over disjoint glyphs: `a -> b` and `c -> d`.
///
/// `swapped` registers them in the opposite order.
pub fn disjoint(swapped: bool) -> Face {
    let mut gsub = SubstitutionTable::new();
    let mut first = gsub.push_lookup(subst(SubstitutionSubtable::Single(
        SingleSubst::from_pairs([(1, 2)]),
    )));
    let mut second = gsub.push_lookup(subst(SubstitutionSubtable::Single(
        SingleSubst::from_pairs([(3, 4)]),
    )));
    if swapped {
        core::mem::swap(&mut first, &mut second);
    }

    gsub.add_feature(latn(), None, Tag::from_bytes(b"ccmp"), &[first]);
    gsub.add_feature(latn(), None, Tag::from_bytes(b"liga"), &[second]);

    letters(FaceBuilder::new(1000)).gsub(gsub).build()
}

pub const BEH: char = '\u{0628}';
pub const ALEF: char = '\u{0627}';
pub const FATHA: char = '\u{064E}';

/// Arabic BEH (1) and ALEF (2) with their joining forms.
///
/// BEH: isol 10, init 11, medi 12, fina 13. ALEF: isol 20, fina 21.
/// FATHA (3) is a mark.
pub fn arabic() -> Face {
    let arab = Tag::from_bytes(b"arab");
    let forms: [(&[u8; 4], &[(u16, u16)]); 4] = [
        (b"isol", &[(1, 10), (2, 20)]),
        (b"fina", &[(1, 13), (2, 21)]),
        (b"medi", &[(1, 12)]),
        (b"init", &[(1, 11)]),
    ];

    let mut gsub = SubstitutionTable::new();
    for (tag, pairs) in forms {
        let lookup = gsub.push_lookup(subst(SubstitutionSubtable::Single(
            SingleSubst::from_pairs(pairs.iter().copied()),
        )));
        gsub.add_feature(arab, None, Tag::from_bytes(tag), &[lookup]);
    }

    FaceBuilder::new(1000)
        .map(BEH, 1)
        .map(ALEF, 2)
        .map(FATHA, 3)
        .gsub(gsub)
        .build()
}
