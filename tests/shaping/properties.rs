use shaperune::{
    script, shape_with_schedule, Direction, Face, FeatureSchedule, GlyphBuffer, Segment,
    ShapingError,
};

use crate::fonts::{self, BEH};
use crate::{shape, try_shape};

fn shape_segment(face: &Face, segment: Segment) -> GlyphBuffer {
    shaperune::shape(face, &segment).unwrap()
}

#[test]
fn clusters_are_conserved() {
    let face = fonts::latin();
    for text in ["ffi", "ffffi", "fifi", "a\u{0301}\u{0301}v", "avaffi", "x"] {
        let glyphs = shape_segment(&face, Segment::new(text));
        let clusters: Vec<u32> = glyphs.glyph_infos().iter().map(|info| info.cluster).collect();
        let len = text.chars().count() as u32;

        assert_eq!(clusters.first(), Some(&0), "{:?}", text);
        assert!(clusters.windows(2).all(|w| w[0] <= w[1]), "{:?}: {:?}", text, clusters);
        assert!(clusters.iter().all(|&c| c < len), "{:?}: {:?}", text, clusters);
    }
}

#[test]
fn backward_output_mirrors_forward_output() {
    let face = fonts::latin();
    let text = "avfiva";

    let forward = shape_segment(&face, Segment::new(text));
    let backward =
        shape_segment(&face, Segment::new(text).with_direction(Direction::RightToLeft));

    let summarize = |glyphs: &GlyphBuffer| -> Vec<(u32, u32, i32)> {
        glyphs
            .glyph_infos()
            .iter()
            .zip(glyphs.glyph_positions())
            .map(|(info, pos)| (info.glyph_id, info.cluster, pos.x_advance))
            .collect()
    };

    let mut expected = summarize(&forward);
    expected.reverse();
    assert_eq!(summarize(&backward), expected);
    assert_eq!(backward.direction(), Direction::RightToLeft);
}

#[test]
fn disjoint_features_commute() {
    let options = "";
    let a = shape(&fonts::disjoint(false), "abcd", options);
    let b = shape(&fonts::disjoint(true), "abcd", options);
    assert_eq!(a, b);
    assert_eq!(
        a,
        "2=0+500|\
         2=1+500|\
         4=2+500|\
         4=3+500"
    );
}

#[test]
fn explicit_schedule_matches_cached_one() {
    let face = fonts::latin();
    let schedule = FeatureSchedule::new(&face, script::LATIN, None, &[]).unwrap();
    for text in ["ffi", "a\u{0301}v", "fiav"] {
        let segment = Segment::new(text);
        assert_eq!(
            shape_with_schedule(&face, &schedule, &segment).unwrap(),
            shaperune::shape(&face, &segment).unwrap(),
        );
    }
}

#[test]
fn empty_text() {
    assert_eq!(
        shaperune::shape(&fonts::latin(), &Segment::new("")),
        Err(ShapingError::InvalidSegment("empty text"))
    );
}

#[test]
fn invalid_codepoint() {
    let segment = Segment::from_utf32(&[0x61, 0xD800]);
    assert_eq!(
        shaperune::shape(&fonts::latin(), &segment),
        Err(ShapingError::InvalidSegment("invalid codepoint"))
    );
}

#[test]
fn vertical_arabic() {
    let text: String = [BEH, BEH].iter().collect();
    assert!(matches!(
        try_shape(&fonts::arabic(), &text, "--direction=ttb"),
        Err(ShapingError::InvalidSegment(_))
    ));
}

#[test]
fn unsupported_script() {
    assert_eq!(
        try_shape(&fonts::latin(), "a", "--script=Deva"),
        Err(ShapingError::UnsupportedScript(script::DEVANAGARI))
    );

    // Requesting a feature is enough. The face has no `deva` script,
    // so lookups come from `latn`.
    assert_eq!(
        try_shape(&fonts::latin(), "ffi", "--script=Deva --features=liga"),
        Ok("100=0+1000".to_string())
    );
}

#[test]
fn buffer_overflow() {
    let text = "a".repeat(200);
    assert!(matches!(
        try_shape(&fonts::expanding(), &text, ""),
        Err(ShapingError::BufferOverflow { max: 16384, .. })
    ));

    // A short run stays within the limit.
    assert_eq!(
        try_shape(&fonts::expanding(), "a", "--no-positions --no-clusters"),
        Ok(vec!["1"; 100].join("|"))
    );
}

#[test]
fn recursive_lookup() {
    assert_eq!(
        try_shape(&fonts::cyclic(), "a", ""),
        Err(ShapingError::RuleLoopDetected { lookup: 0 })
    );
}

#[test]
fn shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Face>();
    assert_send_sync::<FeatureSchedule>();
    assert_send_sync::<GlyphBuffer>();

    let face = std::sync::Arc::new(fonts::latin());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let face = face.clone();
            std::thread::spawn(move || shape(&face, "ffiav\u{0301}", ""))
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
#[should_panic(expected = "unused arguments")]
fn unknown_options_are_rejected() {
    shape(&fonts::latin(), "a", "--bogus");
}
