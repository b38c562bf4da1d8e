use std::sync::Arc;

use log::{debug, trace};

use crate::buffer::{Buffer, GlyphBuffer, GlyphFlags, GlyphInfo};
use crate::ot::{arabic, position, substitute};
use crate::segment::{Segment, SegmentFlags, SegmentProperties};
use crate::unicode::{self, UnicodeProps};
use crate::{config, Face, FeatureSchedule, ShapingError};

/// Shapes a segment.
///
/// Segments without requested features use the schedule cached by the face.
/// Requested features build a fresh schedule for the call.
pub fn shape(face: &Face, segment: &Segment) -> Result<GlyphBuffer, ShapingError> {
    let props = segment.validate()?;
    let schedule = if segment.features().is_empty() {
        face.feature_schedule(props.script, props.language.as_ref())?
    } else {
        Arc::new(FeatureSchedule::new(
            face,
            props.script,
            props.language.as_ref(),
            segment.features(),
        )?)
    };

    shape_impl(face, &schedule, segment, props)
}

/// Shapes a segment with a prebuilt schedule.
///
/// The schedule decides which features run. Requested features of the
/// segment only restrict the glyph ranges of features the schedule knows.
pub fn shape_with_schedule(
    face: &Face,
    schedule: &FeatureSchedule,
    segment: &Segment,
) -> Result<GlyphBuffer, ShapingError> {
    let props = segment.validate()?;
    shape_impl(face, schedule, segment, props)
}

fn shape_impl(
    face: &Face,
    schedule: &FeatureSchedule,
    segment: &Segment,
    props: SegmentProperties,
) -> Result<GlyphBuffer, ShapingError> {
    let setup = config::current();
    let infos = segment
        .chars()
        .enumerate()
        .map(|(i, c)| GlyphInfo {
            glyph_id: u32::from(c),
            cluster: i as u32,
            codepoint: u32::from(c),
            unicode_props: UnicodeProps::of(c).bits(),
            ..GlyphInfo::default()
        })
        .collect::<Vec<_>>();

    let max_len = setup.limits.max_len(infos.len());
    let mut buffer = Buffer::new(infos, props.direction, max_len);
    trace!(
        "shaping {} codepoints as {} {:?}",
        buffer.len,
        props.script.tag(),
        props.direction
    );

    setup_masks(schedule, segment, &mut buffer);
    form_clusters(&mut buffer);
    mirror_chars(face, &mut buffer);
    map_glyphs(face, &mut buffer);

    substitute::substitute_start(face, &mut buffer);
    if !face.has_glyph_classes() {
        synthesize_glyph_classes(&mut buffer);
    }
    substitute::substitute(schedule, face, &mut buffer);
    check(&mut buffer)?;

    position_glyphs(schedule, face, &mut buffer);
    check(&mut buffer)?;

    if props.direction.is_backward() {
        buffer.reverse();
    }

    remove_glyphs(segment.flags(), &mut buffer);

    Ok(GlyphBuffer::from_buffer(buffer))
}

fn check(buffer: &mut Buffer) -> Result<(), ShapingError> {
    match buffer.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn setup_masks(schedule: &FeatureSchedule, segment: &Segment, buffer: &mut Buffer) {
    let global_mask = schedule.global_mask();
    let len = buffer.len;
    for info in &mut buffer.info[..len] {
        info.mask = global_mask;
    }

    if schedule.has_joining() {
        arabic::setup_masks(schedule, buffer);
    }

    for feature in segment.features().iter().filter(|f| !f.is_global()) {
        let Some(map) = schedule.feature(feature.tag) else {
            continue;
        };

        let bits = (feature.value << map.shift) & map.mask;
        for info in &mut buffer.info[..len] {
            if (feature.start..feature.end).contains(&info.cluster) {
                info.mask = (info.mask & !map.mask) | bits;
            }
        }
    }
}

// Marks continue the cluster of the character before them.
fn form_clusters(buffer: &mut Buffer) {
    let len = buffer.len;
    let mut start = 0;
    for i in 1..=len {
        if i == len || !buffer.info[i].is_unicode_mark() {
            if i - start > 1 {
                buffer.merge_clusters(start, i);
            }
            start = i;
        }
    }
}

fn mirror_chars(face: &Face, buffer: &mut Buffer) {
    if !buffer.direction.is_backward() || !buffer.direction.is_horizontal() {
        return;
    }

    let len = buffer.len;
    for info in &mut buffer.info[..len] {
        let mirrored = char::from_u32(info.glyph_id).and_then(unicode::mirrored);
        if let Some(c) = mirrored {
            if face.has_glyph(u32::from(c)) {
                info.glyph_id = u32::from(c);
            }
        }
    }
}

fn map_glyphs(face: &Face, buffer: &mut Buffer) {
    let len = buffer.len;
    for info in &mut buffer.info[..len] {
        info.glyph_id = match face.glyph_index(info.glyph_id) {
            Ok(glyph) => u32::from(glyph.0),
            Err(error) => {
                debug!("{}, using notdef", error);
                u32::from(face.notdef().0)
            }
        };
    }
}

fn synthesize_glyph_classes(buffer: &mut Buffer) {
    let len = buffer.len;
    for info in &mut buffer.info[..len] {
        // Default ignorables, like CGJ, are never marks, so that lookups
        // ignoring marks do not skip them.
        let props = info.unicode_props();
        let class = if props.contains(UnicodeProps::NONSPACING)
            && !props.contains(UnicodeProps::IGNORABLE)
        {
            GlyphFlags::MARK
        } else {
            GlyphFlags::BASE_GLYPH
        };

        info.glyph_props = class.bits();
    }
}

fn position_glyphs(schedule: &FeatureSchedule, face: &Face, buffer: &mut Buffer) {
    buffer.clear_positions();

    let len = buffer.len;
    let horizontal = buffer.direction.is_horizontal();
    for (info, pos) in buffer.info[..len].iter().zip(&mut buffer.pos[..len]) {
        if horizontal {
            pos.x_advance = face.glyph_h_advance(info.as_glyph());
        } else {
            pos.y_advance = face.glyph_v_advance(info.as_glyph());
        }
    }

    position::position_start(buffer);
    position::position(schedule, face, buffer);
    if !buffer.successful {
        return;
    }

    zero_mark_advances(buffer);
    zero_width_default_ignorables(buffer);
    position::position_finish(buffer);
}

fn zero_mark_advances(buffer: &mut Buffer) {
    let len = buffer.len;
    for (info, pos) in buffer.info[..len].iter().zip(&mut buffer.pos[..len]) {
        if info.is_mark() {
            pos.x_advance = 0;
            pos.y_advance = 0;
        }
    }
}

fn zero_width_default_ignorables(buffer: &mut Buffer) {
    let len = buffer.len;
    for (info, pos) in buffer.info[..len].iter().zip(&mut buffer.pos[..len]) {
        if info.is_default_ignorable() {
            pos.x_advance = 0;
            pos.y_advance = 0;
            pos.x_offset = 0;
            pos.y_offset = 0;
        }
    }
}

fn remove_glyphs(flags: SegmentFlags, buffer: &mut Buffer) {
    if flags.contains(SegmentFlags::REMOVE_MARKS) {
        buffer.retain(|info| !info.is_mark());
    }

    if flags.contains(SegmentFlags::REMOVE_BASES) {
        buffer.retain(|info| !info.is_base_glyph());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::*;
    use crate::{script, Direction, Feature, FaceBuilder, GlyphId, Tag};

    fn latn() -> Tag {
        Tag::from_bytes(b"latn")
    }

    fn ligature_face() -> Face {
        let mut gsub = SubstitutionTable::new();
        let lookup = gsub.push_lookup(Lookup::new(
            LookupFlags::empty(),
            vec![SubstitutionSubtable::Ligature(LigatureSubst::from_ligatures([
                (&[1, 1, 2][..], 10),
            ]))],
        ));
        gsub.add_feature(latn(), None, Tag::from_bytes(b"liga"), &[lookup]);

        FaceBuilder::new(1000)
            .map('f', 1)
            .map('i', 2)
            .map('\u{0301}', 3)
            .advances([(1, 300), (2, 250), (10, 600)])
            .gsub(gsub)
            .build()
    }

    #[test]
    fn ligates() {
        let face = ligature_face();
        let glyphs = shape(&face, &Segment::new("ffi")).unwrap();
        assert_eq!(glyphs.len(), 1);

        let info = glyphs.glyph_infos()[0];
        assert_eq!(info.glyph_id, 10);
        assert_eq!(info.cluster, 0);
        assert!(info.flags().contains(GlyphFlags::LIGATED));
        assert_eq!(glyphs.glyph_positions()[0].x_advance, 600);
    }

    #[test]
    fn ranged_feature_disables_ligature() {
        let face = ligature_face();
        let segment = Segment::new("ffiffi")
            .with_features(&[Feature::new(Tag::from_bytes(b"liga"), 0, 3..)]);
        let glyphs = shape(&face, &segment).unwrap();

        let ids: Vec<u32> = glyphs.glyph_infos().iter().map(|i| i.glyph_id).collect();
        assert_eq!(ids, vec![10, 1, 1, 2]);
    }

    #[test]
    fn unmapped_uses_notdef() {
        let face = ligature_face();
        let glyphs = shape(&face, &Segment::new("fx")).unwrap();
        let ids: Vec<u32> = glyphs.glyph_infos().iter().map(|i| i.glyph_id).collect();
        assert_eq!(ids, vec![1, 0]);
    }

    #[test]
    fn marks_join_clusters() {
        let face = ligature_face();
        let glyphs = shape(&face, &Segment::new("i\u{0301}f")).unwrap();
        let clusters: Vec<u32> = glyphs.glyph_infos().iter().map(|i| i.cluster).collect();
        assert_eq!(clusters, vec![0, 0, 2]);

        // Synthesized as a mark, so it has no advance.
        assert!(glyphs.glyph_infos()[1].flags().contains(GlyphFlags::MARK));
        assert_eq!(glyphs.glyph_positions()[1].x_advance, 0);
    }

    #[test]
    fn remove_marks() {
        let face = ligature_face();
        let segment = Segment::new("i\u{0301}f").with_flags(SegmentFlags::REMOVE_MARKS);
        let glyphs = shape(&face, &segment).unwrap();
        let ids: Vec<u32> = glyphs.glyph_infos().iter().map(|i| i.glyph_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn backward_output_is_reversed() {
        let face = ligature_face();
        let segment = Segment::new("fi")
            .with_script(script::LATIN)
            .with_direction(Direction::RightToLeft);
        let glyphs = shape(&face, &segment).unwrap();
        let ids: Vec<u32> = glyphs.glyph_infos().iter().map(|i| i.glyph_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(glyphs.direction(), Direction::RightToLeft);
    }

    #[test]
    fn mirrors_backward_text() {
        let face = FaceBuilder::new(1000).map('(', 1).map(')', 2).build();
        let segment = Segment::new("(")
            .with_script(script::LATIN)
            .with_direction(Direction::RightToLeft);
        let glyphs = shape(&face, &segment).unwrap();
        assert_eq!(glyphs.glyph_infos()[0].glyph_id, 2);
        assert_eq!(glyphs.glyph_infos()[0].codepoint(), u32::from('('));
    }

    #[test]
    fn vertical_advances() {
        let face = ligature_face();
        let segment = Segment::new("i").with_direction(Direction::TopToBottom);
        let glyphs = shape(&face, &segment).unwrap();
        let pos = glyphs.glyph_positions()[0];
        assert_eq!((pos.x_advance, pos.y_advance), (0, -1000));
    }

    // `a` (1) joins cursively and carries an acute (3) above.
    fn attaching_face() -> Face {
        let mut gpos = PositioningTable::new();
        let curs = gpos.push_lookup(Lookup::new(
            LookupFlags::IGNORE_MARKS,
            vec![PositioningSubtable::Cursive(CursivePos {
                coverage: Coverage::from_glyphs([1]),
                records: vec![EntryExit {
                    entry: Some(Anchor::new(50, 0)),
                    exit: Some(Anchor::new(550, 100)),
                }],
            })],
        ));
        let mark = gpos.push_lookup(Lookup::new(
            LookupFlags::empty(),
            vec![PositioningSubtable::MarkBase(MarkBasePos {
                mark_coverage: Coverage::from_glyphs([3]),
                base_coverage: Coverage::from_glyphs([1]),
                marks: vec![MarkRecord { class: 0, anchor: Anchor::new(150, 0) }],
                bases: vec![vec![Some(Anchor::new(250, 600))]],
            })],
        ));
        gpos.add_feature(latn(), None, Tag::from_bytes(b"curs"), &[curs]);
        gpos.add_feature(latn(), None, Tag::from_bytes(b"mark"), &[mark]);

        FaceBuilder::new(1000)
            .map('a', 1)
            .map('\u{0301}', 3)
            .advances([(1, 600), (3, 300)])
            .glyph_classes(ClassDef::from_pairs([(1, 1), (3, 3)]))
            .gpos(gpos)
            .build()
    }

    fn offsets(buffer: &Buffer) -> Vec<(i32, i32)> {
        buffer.pos[..buffer.len].iter().map(|pos| (pos.x_offset, pos.y_offset)).collect()
    }

    #[test]
    fn positioning_can_run_again() {
        let face = attaching_face();
        let curs = Feature::new(Tag::from_bytes(b"curs"), 1, ..);
        let schedule = FeatureSchedule::new(&face, script::LATIN, None, &[curs]).unwrap();
        let segment = Segment::new("aa\u{0301}a");

        let infos = segment
            .chars()
            .enumerate()
            .map(|(i, c)| GlyphInfo {
                glyph_id: u32::from(c),
                cluster: i as u32,
                codepoint: u32::from(c),
                unicode_props: UnicodeProps::of(c).bits(),
                ..GlyphInfo::default()
            })
            .collect::<Vec<_>>();
        let mut buffer = Buffer::new(infos, Direction::LeftToRight, 1024);
        setup_masks(&schedule, &segment, &mut buffer);
        form_clusters(&mut buffer);
        map_glyphs(&face, &mut buffer);
        substitute::substitute_start(&face, &mut buffer);
        substitute::substitute(&schedule, &face, &mut buffer);
        position_glyphs(&schedule, &face, &mut buffer);
        assert!(buffer.error.is_none());

        let first = offsets(&buffer);
        // The cursive child and the mark both moved.
        assert_ne!(first[1], (0, 0));
        assert_ne!(first[2], (0, 0));

        // Attachment records of the first pass stay in place.
        let len = buffer.len;
        for (info, pos) in buffer.info[..len].iter().zip(&mut buffer.pos[..len]) {
            pos.x_offset = 0;
            pos.y_offset = 0;
            pos.x_advance = face.glyph_h_advance(info.as_glyph());
            pos.y_advance = 0;
        }

        position::position_start(&mut buffer);
        position::position(&schedule, &face, &mut buffer);
        zero_mark_advances(&mut buffer);
        position::position_finish(&mut buffer);

        assert_eq!(offsets(&buffer), first);
    }

    #[test]
    fn reuses_schedules() {
        let face = ligature_face();
        let schedule = face.feature_schedule(script::LATIN, None).unwrap();
        let a = shape_with_schedule(&face, &schedule, &Segment::new("ffi")).unwrap();
        let b = shape(&face, &Segment::new("ffi")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.glyph_infos()[0].glyph_id, u32::from(GlyphId(10).0));
    }
}
