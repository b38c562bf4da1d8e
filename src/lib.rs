/*!
`shaperune` turns a run of text into positioned glyphs by applying
OpenType-style substitution and positioning lookups.

Lookups live in in-memory tables owned by a [`Face`]. A [`FeatureSchedule`]
decides which of them run for a script and language, and in which order.

```
use shaperune::tables::*;
use shaperune::{shape, FaceBuilder, Segment, Tag};

let mut gsub = SubstitutionTable::new();
let liga = gsub.push_lookup(Lookup::new(
    LookupFlags::empty(),
    vec![SubstitutionSubtable::Ligature(LigatureSubst::from_ligatures([
        (&[1, 1, 2][..], 10),
    ]))],
));
gsub.add_feature(Tag::from_bytes(b"latn"), None, Tag::from_bytes(b"liga"), &[liga]);

let face = FaceBuilder::new(1000).map('f', 1).map('i', 2).gsub(gsub).build();
let glyphs = shape(&face, &Segment::new("ffi")).unwrap();
assert_eq!(glyphs.len(), 1);
assert_eq!(glyphs.glyph_infos()[0].glyph_id, 10);
```
*/

#![warn(missing_docs)]

mod buffer;
mod common;
mod config;
mod digest;
mod error;
mod face;
mod feature;
mod ot;
mod segment;
mod shape;
mod tag;
mod tag_table;
mod unicode;

pub mod tables;

pub use ttf_parser::{GlyphId, Tag};

pub use crate::buffer::{GlyphBuffer, GlyphFlags, GlyphInfo, GlyphPosition, SerializeFlags};
pub use crate::common::{script, Direction, Feature, Language, Script};
pub use crate::config::{setup, CpuDetection, ShaperConfig};
pub use crate::error::{SetupError, ShapingError};
pub use crate::face::{Face, FaceBuilder};
pub use crate::feature::Phase;
pub use crate::ot::schedule::FeatureSchedule;
pub use crate::segment::{Segment, SegmentFlags};
pub use crate::shape::{shape, shape_with_schedule};

/// A per-glyph bit set selecting the features that apply to it.
pub type Mask = u32;
