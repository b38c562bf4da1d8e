// Library setup is process-wide, so everything runs in a single test.

use shaperune::tables::*;
use shaperune::{setup, FaceBuilder, Segment, SetupError, ShaperConfig, ShapingError, Tag};

#[test]
fn setup_once() {
    assert_eq!(
        setup(ShaperConfig::new().max_len(0, 16)),
        Err(SetupError::InvalidLimit("max_len_factor must be positive"))
    );
    assert_eq!(
        setup(ShaperConfig::new().max_ops(8, 0)),
        Err(SetupError::InvalidLimit("max_ops_min must be positive"))
    );

    // Rejected configs leave the library unconfigured.
    assert_eq!(setup(ShaperConfig::new().max_len(2, 8)), Ok(()));
    assert_eq!(setup(ShaperConfig::new()), Err(SetupError::AlreadyConfigured));

    let mut gsub = SubstitutionTable::new();
    let ccmp = gsub.push_lookup(Lookup::new(
        LookupFlags::empty(),
        vec![SubstitutionSubtable::Multiple(MultipleSubst::from_pairs([(
            1,
            &[1, 1, 1][..],
        )]))],
    ));
    gsub.add_feature(Tag::from_bytes(b"latn"), None, Tag::from_bytes(b"ccmp"), &[ccmp]);
    let face = FaceBuilder::new(1000).map('a', 1).gsub(gsub).build();

    // 2 * 3 glyphs fit.
    let glyphs = shaperune::shape(&face, &Segment::new("aa")).unwrap();
    assert_eq!(glyphs.len(), 6);

    // 3 * 3 glyphs do not fit into max(3 * 2, 8).
    assert_eq!(
        shaperune::shape(&face, &Segment::new("aaa")),
        Err(ShapingError::BufferOverflow { len: 9, max: 8 })
    );
}
