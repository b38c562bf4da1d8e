mod fonts;
mod positioning;
mod properties;
mod substitution;

use std::str::FromStr;

use shaperune::{Face, Segment, SegmentFlags, SerializeFlags, ShapingError};

struct Args {
    direction: Option<shaperune::Direction>,
    language: Option<shaperune::Language>,
    script: Option<shaperune::Script>,
    features: Vec<String>,
    remove_marks: bool,
    remove_bases: bool,
    no_positions: bool,
    no_advances: bool,
    no_clusters: bool,
    show_flags: bool,
    ned: bool,
}

fn parse_args(args: Vec<std::ffi::OsString>) -> Result<Args, pico_args::Error> {
    let mut parser = pico_args::Arguments::from_vec(args);
    let args = Args {
        direction: parser.opt_value_from_str("--direction")?,
        language: parser.opt_value_from_str("--language")?,
        script: parser.opt_value_from_str("--script")?,
        features: parser
            .opt_value_from_fn("--features", parse_string_list)?
            .unwrap_or_default(),
        remove_marks: parser.contains("--remove-marks"),
        remove_bases: parser.contains("--remove-bases"),
        no_positions: parser.contains("--no-positions"),
        no_advances: parser.contains("--no-advances"),
        no_clusters: parser.contains("--no-clusters"),
        show_flags: parser.contains("--show-flags"),
        ned: parser.contains("--ned"),
    };

    let free = parser.finish();
    assert!(free.is_empty(), "unused arguments: {:?}", free);

    Ok(args)
}

fn parse_string_list(s: &str) -> Result<Vec<String>, String> {
    Ok(s.split(',').map(|s| s.to_string()).collect())
}

pub fn try_shape(face: &Face, text: &str, options: &str) -> Result<String, ShapingError> {
    let args = options
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(std::ffi::OsString::from)
        .collect();
    let args = parse_args(args).unwrap();

    let mut segment = Segment::new(text);

    if let Some(d) = args.direction {
        segment = segment.with_direction(d);
    }

    if let Some(lang) = args.language {
        segment = segment.with_language(lang);
    }

    if let Some(script) = args.script {
        segment = segment.with_script(script);
    }

    let mut features = Vec::new();
    for feature_str in args.features {
        let feature = shaperune::Feature::from_str(&feature_str).unwrap();
        features.push(feature);
    }
    segment = segment.with_features(&features);

    let mut segment_flags = SegmentFlags::default();
    segment_flags.set(SegmentFlags::REMOVE_MARKS, args.remove_marks);
    segment_flags.set(SegmentFlags::REMOVE_BASES, args.remove_bases);
    segment = segment.with_flags(segment_flags);

    let glyph_buffer = shaperune::shape(face, &segment)?;

    let mut format_flags = SerializeFlags::default();
    if args.no_clusters || args.ned {
        format_flags |= SerializeFlags::NO_CLUSTERS;
    }

    if args.no_positions {
        format_flags |= SerializeFlags::NO_POSITIONS;
    }

    if args.no_advances || args.ned {
        format_flags |= SerializeFlags::NO_ADVANCES;
    }

    if args.show_flags {
        format_flags |= SerializeFlags::GLYPH_FLAGS;
    }

    Ok(glyph_buffer.serialize(format_flags))
}

pub fn shape(face: &Face, text: &str, options: &str) -> String {
    try_shape(face, text, options).unwrap_or_else(|e| panic!("shaping {:?} failed: {}", text, e))
}
