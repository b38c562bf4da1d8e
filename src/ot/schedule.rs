use log::{debug, warn};

use crate::feature::{order_key, FeatureFlags, Phase, ScriptClass};
use crate::tables::{FeatureRecord, LayoutTable};
use crate::{tag, Face, Feature, Language, Mask, Script, ShapingError, Tag};

use super::TableIndex;

/// The mask bit shared by all features applied to every glyph.
pub(crate) const GLOBAL_MASK: Mask = 1;
const GLOBAL_SHIFT: u32 = 0;
/// Bits a single feature value may take.
const MAX_BITS: u32 = 8;

/// The ordered lookups of one script and language.
///
/// A schedule splits features into a substitution and a positioning phase.
/// Each feature is a stage of its phase, and the lookups of a stage run in
/// index order. Features applied to only some glyphs get their own mask bits.
#[derive(Clone, Debug)]
pub struct FeatureSchedule {
    script: Script,
    language: Option<Language>,
    class: Option<ScriptClass>,
    global_mask: Mask,
    features: Vec<FeatureMap>,
    lookups: [Vec<LookupMap>; 2],
    stages: [Vec<StageMap>; 2],
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FeatureMap {
    pub tag: Tag,
    pub shift: u32,
    pub mask: Mask,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct LookupMap {
    pub index: u16,
    pub mask: Mask,
    pub auto_zwnj: bool,
    pub auto_zwj: bool,
}

#[derive(Clone, Copy, Debug)]
struct StageMap {
    tag: Tag,
    // Cumulative
    last_lookup: usize,
}

#[derive(Clone, Copy, Debug)]
struct FeatureInfo {
    tag: Tag,
    flags: FeatureFlags,
    max_value: u32,
    default_value: u32,
}

/// Features of the language system picked in one table.
#[derive(Default)]
struct Selection<'a> {
    features: Vec<&'a FeatureRecord>,
    required: Option<&'a FeatureRecord>,
}

impl<'a> Selection<'a> {
    fn new<T>(table: &'a LayoutTable<T>, scripts: &[Tag], languages: &[Tag]) -> Self {
        let Some(script) = table.find_script(scripts) else {
            return Selection::default();
        };

        let lang_sys = table.find_lang_sys(script, languages);
        Selection {
            features: lang_sys.features.iter().filter_map(|&i| table.feature(i)).collect(),
            required: lang_sys.required_feature.and_then(|i| table.feature(i)),
        }
    }

    fn lookups(&self, tag: Tag) -> Option<&'a [u16]> {
        self.features
            .iter()
            .find(|record| record.tag == tag)
            .map(|record| record.lookups.as_slice())
    }
}

impl FeatureSchedule {
    /// Builds the schedule of a script and language.
    ///
    /// Requested features override the script's defaults. Features with a
    /// cluster range only apply to glyphs of that range.
    ///
    /// Fails with [`ShapingError::UnsupportedScript`] when the script has no
    /// feature list and nothing was requested.
    pub fn new(
        face: &Face,
        script: Script,
        language: Option<&Language>,
        features: &[Feature],
    ) -> Result<Self, ShapingError> {
        let class = ScriptClass::of(script);
        if class.is_none() && features.is_empty() {
            return Err(ShapingError::UnsupportedScript(script));
        }

        let mut infos: Vec<FeatureInfo> = Vec::new();

        for entry in class.map_or(&[][..], ScriptClass::features) {
            let global = !entry.flags.contains(FeatureFlags::PER_GLYPH);
            let enabled = entry.state.is_enabled();
            add_feature(&mut infos, FeatureInfo {
                tag: entry.tag,
                flags: if global { entry.flags | FeatureFlags::GLOBAL } else { entry.flags },
                max_value: u32::from(enabled),
                default_value: u32::from(enabled && global),
            });
        }

        for feature in features {
            let global = feature.is_global();
            add_feature(&mut infos, FeatureInfo {
                tag: feature.tag,
                flags: if global { FeatureFlags::GLOBAL } else { FeatureFlags::empty() },
                max_value: feature.value,
                default_value: if global { feature.value } else { 0 },
            });
        }

        // Script features first, in list order.
        infos.sort_by_key(|info| order_key(class, info.tag));

        let script_tags = tag::script_tags(script);
        let language_tags = language.map(tag::language_tags).unwrap_or_default();
        let selections = [
            Selection::new(face.gsub(), &script_tags, &language_tags),
            Selection::new(face.gpos(), &script_tags, &language_tags),
        ];

        let mut schedule = FeatureSchedule {
            script,
            language: language.cloned(),
            class,
            global_mask: GLOBAL_MASK,
            features: Vec::new(),
            lookups: [Vec::new(), Vec::new()],
            stages: [Vec::new(), Vec::new()],
        };

        // Stage lookups per phase, in feature order.
        let mut staged: [Vec<(Tag, &[u16], Mask, FeatureFlags)>; 2] = [Vec::new(), Vec::new()];

        // Allocate bits now.
        let mut next_bit = GLOBAL_SHIFT + 1;

        for info in &infos {
            if info.max_value == 0 {
                // Disabled.
                continue;
            }

            let phase = Phase::of(info.tag);
            let Some(lookups) = selections[phase.index()].lookups(info.tag) else {
                debug!("feature '{}' is not in the face", info.tag);
                continue;
            };

            let uses_global_bit = info.flags.contains(FeatureFlags::GLOBAL) && info.max_value == 1;
            let bits_needed = if uses_global_bit {
                0
            } else {
                MAX_BITS.min(Mask::BITS - info.max_value.leading_zeros())
            };

            if next_bit + bits_needed > Mask::BITS {
                warn!("no mask bits left for feature '{}'", info.tag);
                continue;
            }

            let (shift, mask) = if uses_global_bit {
                (GLOBAL_SHIFT, GLOBAL_MASK)
            } else {
                let shift = next_bit;
                let mask = (Mask::MAX >> (Mask::BITS - bits_needed)) << shift;
                next_bit += bits_needed;
                schedule.global_mask |= (info.default_value << shift) & mask;
                (shift, mask)
            };

            schedule.features.push(FeatureMap { tag: info.tag, shift, mask });
            staged[phase.index()].push((info.tag, lookups, mask, info.flags));
        }

        for phase in Phase::ALL {
            let i = phase.index();
            let required = selections[i].required;
            let mut required_pending = required.is_some();

            // A required feature with an unscheduled tag runs first.
            if let Some(record) = required {
                if !staged[i].iter().any(|(tag, ..)| *tag == record.tag) {
                    let lookups = record.lookups.as_slice();
                    schedule.add_stage(i, record.tag, &[(lookups, GLOBAL_MASK, FeatureFlags::empty())]);
                    required_pending = false;
                }
            }

            for &(tag, lookups, mask, flags) in &staged[i] {
                match required {
                    Some(record) if required_pending && record.tag == tag => {
                        required_pending = false;
                        schedule.add_stage(
                            i,
                            tag,
                            &[
                                (record.lookups.as_slice(), GLOBAL_MASK, FeatureFlags::empty()),
                                (lookups, mask, flags),
                            ],
                        );
                    }
                    _ => schedule.add_stage(i, tag, &[(lookups, mask, flags)]),
                }
            }
        }

        debug!(
            "scheduled {} substitution and {} positioning lookups for {:?}",
            schedule.lookups[0].len(),
            schedule.lookups[1].len(),
            script,
        );

        Ok(schedule)
    }

    fn add_stage(&mut self, table: usize, tag: Tag, features: &[(&[u16], Mask, FeatureFlags)]) {
        let lookups = &mut self.lookups[table];
        let start = lookups.len();

        for &(indices, mask, flags) in features {
            lookups.extend(indices.iter().map(|&index| LookupMap {
                index,
                mask,
                auto_zwnj: !flags.contains(FeatureFlags::MANUAL_ZWNJ),
                auto_zwj: !flags.contains(FeatureFlags::MANUAL_ZWJ),
            }));
        }

        // Sort lookups and merge duplicates.
        lookups[start..].sort_by_key(|lookup| lookup.index);
        let mut merged: Vec<LookupMap> = Vec::with_capacity(lookups.len() - start);
        for lookup in lookups.drain(start..) {
            match merged.last_mut() {
                Some(last) if last.index == lookup.index => {
                    last.mask |= lookup.mask;
                    last.auto_zwnj &= lookup.auto_zwnj;
                    last.auto_zwj &= lookup.auto_zwj;
                }
                _ => merged.push(lookup),
            }
        }
        lookups.extend(merged);

        self.stages[table].push(StageMap { tag, last_lookup: lookups.len() });
    }

    /// Returns the script.
    #[inline]
    pub fn script(&self) -> Script {
        self.script
    }

    /// Returns the language.
    #[inline]
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// Returns the mask every glyph starts with.
    #[inline]
    pub fn global_mask(&self) -> Mask {
        self.global_mask
    }

    /// Returns the mask bits of a feature.
    ///
    /// Zero when the feature is not scheduled.
    pub fn mask(&self, tag: Tag) -> Mask {
        self.feature(tag).map_or(0, |feature| feature.mask)
    }

    /// Returns the feature tags of a phase, in the order they are applied.
    pub fn feature_tags(&self, phase: Phase) -> impl Iterator<Item = Tag> + '_ {
        self.stages[phase.index()].iter().map(|stage| stage.tag)
    }

    /// Returns the lookup indices of a phase, in the order they are applied.
    pub fn lookup_indices(&self, phase: Phase) -> impl Iterator<Item = u16> + '_ {
        self.lookups[phase.index()].iter().map(|lookup| lookup.index)
    }

    pub(crate) fn feature(&self, tag: Tag) -> Option<&FeatureMap> {
        self.features.iter().find(|feature| feature.tag == tag)
    }

    /// Returns the mask of value `1` of a feature.
    pub(crate) fn one_mask(&self, tag: Tag) -> Mask {
        self.feature(tag).map_or(0, |feature| (1 << feature.shift) & feature.mask)
    }

    /// Returns the lookups of each stage of a table.
    pub(crate) fn stages(&self, table_index: TableIndex) -> impl Iterator<Item = (Tag, &[LookupMap])> + '_ {
        let lookups = &self.lookups[table_index as usize];
        let mut start = 0;
        self.stages[table_index as usize].iter().map(move |stage| {
            let range = start..stage.last_lookup;
            start = stage.last_lookup;
            (stage.tag, &lookups[range])
        })
    }

    /// Checks that glyphs get joining forms before substitution.
    pub(crate) fn has_joining(&self) -> bool {
        self.class.map_or(false, ScriptClass::has_joining)
    }
}

/// Adds a feature or merges it into a previous one with the same tag.
fn add_feature(infos: &mut Vec<FeatureInfo>, info: FeatureInfo) {
    let Some(existing) = infos.iter_mut().find(|existing| existing.tag == info.tag) else {
        infos.push(info);
        return;
    };

    if info.flags.contains(FeatureFlags::GLOBAL) {
        existing.flags |= FeatureFlags::GLOBAL;
        existing.max_value = info.max_value;
        existing.default_value = info.default_value;
    } else {
        existing.flags.remove(FeatureFlags::GLOBAL);
        existing.max_value = existing.max_value.max(info.max_value);
        // Inherit the default value.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::*;
    use crate::{script, FaceBuilder, GlyphId};

    fn single(from: u16, to: u16) -> Lookup<SubstitutionSubtable> {
        Lookup::new(
            LookupFlags::empty(),
            vec![SubstitutionSubtable::Single(SingleSubst::Glyphs {
                coverage: Coverage::from_glyphs([from]),
                substitutes: vec![GlyphId(to)],
            })],
        )
    }

    fn kern() -> Lookup<PositioningSubtable> {
        Lookup::new(
            LookupFlags::empty(),
            vec![PositioningSubtable::Single(SinglePos::Shared {
                coverage: Coverage::from_glyphs([1]),
                value: ValueRecord::x_advance(-10),
            })],
        )
    }

    fn face() -> Face {
        let latn = Tag::from_bytes(b"latn");
        let mut gsub = SubstitutionTable::new();
        let l0 = gsub.push_lookup(single(1, 2));
        let l1 = gsub.push_lookup(single(2, 3));
        let l2 = gsub.push_lookup(single(3, 4));
        gsub.add_feature(latn, None, Tag::from_bytes(b"liga"), &[l1, l0]);
        gsub.add_feature(latn, None, Tag::from_bytes(b"ccmp"), &[l2]);
        gsub.add_feature(latn, None, Tag::from_bytes(b"salt"), &[l0]);
        gsub.add_feature(latn, None, Tag::from_bytes(b"dlig"), &[l2]);

        let mut gpos = PositioningTable::new();
        let k = gpos.push_lookup(kern());
        gpos.add_feature(latn, None, Tag::from_bytes(b"kern"), &[k]);

        FaceBuilder::new(1000).gsub(gsub).gpos(gpos).build()
    }

    fn tags(schedule: &FeatureSchedule, phase: Phase) -> Vec<Tag> {
        schedule.feature_tags(phase).collect()
    }

    #[test]
    fn registration_order() {
        let schedule = FeatureSchedule::new(&face(), script::LATIN, None, &[]).unwrap();
        assert_eq!(
            tags(&schedule, Phase::Substitution),
            vec![Tag::from_bytes(b"ccmp"), Tag::from_bytes(b"liga")]
        );
        assert_eq!(tags(&schedule, Phase::Positioning), vec![Tag::from_bytes(b"kern")]);
        // Sorted within the stage.
        assert_eq!(schedule.lookup_indices(Phase::Substitution).collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn global_features_share_a_bit() {
        let schedule = FeatureSchedule::new(&face(), script::LATIN, None, &[]).unwrap();
        assert_eq!(schedule.global_mask(), GLOBAL_MASK);
        assert_eq!(schedule.mask(Tag::from_bytes(b"liga")), GLOBAL_MASK);
        assert_eq!(schedule.mask(Tag::from_bytes(b"dlig")), 0);
    }

    #[test]
    fn requested_features() {
        let features = [
            "-liga".parse().unwrap(),
            "dlig".parse().unwrap(),
            "salt=3".parse().unwrap(),
        ];
        let schedule = FeatureSchedule::new(&face(), script::LATIN, None, &features).unwrap();
        assert_eq!(
            tags(&schedule, Phase::Substitution),
            vec![Tag::from_bytes(b"ccmp"), Tag::from_bytes(b"dlig"), Tag::from_bytes(b"salt")]
        );

        // Two bits for the value 3, right after the global bit.
        let salt = schedule.mask(Tag::from_bytes(b"salt"));
        assert_eq!(salt, 0b110);
        assert_eq!(schedule.global_mask(), 0b111);
        assert_eq!(schedule.one_mask(Tag::from_bytes(b"salt")), 0b010);
    }

    #[test]
    fn ranged_features_get_own_bits() {
        let features = ["liga[2:4]=0".parse().unwrap()];
        let schedule = FeatureSchedule::new(&face(), script::LATIN, None, &features).unwrap();
        let liga = schedule.mask(Tag::from_bytes(b"liga"));
        assert_eq!(liga, 0b10);
        // Still on by default outside of the range.
        assert_eq!(schedule.global_mask() & liga, liga);
    }

    #[test]
    fn required_features_can_be_disabled() {
        let features = ["-kern".parse().unwrap()];
        let schedule = FeatureSchedule::new(&face(), script::LATIN, None, &features).unwrap();
        assert!(tags(&schedule, Phase::Positioning).is_empty());
        assert_eq!(schedule.mask(Tag::from_bytes(b"kern")), 0);

        // Only for the requested range.
        let features = ["-kern[1:3]".parse().unwrap()];
        let schedule = FeatureSchedule::new(&face(), script::LATIN, None, &features).unwrap();
        let kern = schedule.mask(Tag::from_bytes(b"kern"));
        assert_ne!(kern, 0);
        assert_eq!(schedule.global_mask() & kern, kern);
    }

    #[test]
    fn lang_sys_required_feature() {
        let latn = Tag::from_bytes(b"latn");
        let mut gsub = SubstitutionTable::new();
        let l0 = gsub.push_lookup(single(1, 2));
        let l1 = gsub.push_lookup(single(5, 6));
        gsub.add_feature(latn, None, Tag::from_bytes(b"liga"), &[l0]);
        let rqd = gsub.add_feature(latn, None, Tag::from_bytes(b"rqd "), &[l1]);
        gsub.set_required_feature(latn, None, rqd);
        let face = FaceBuilder::new(1000).gsub(gsub).build();

        let schedule = FeatureSchedule::new(&face, script::LATIN, None, &["-liga".parse().unwrap()]).unwrap();
        assert_eq!(tags(&schedule, Phase::Substitution), vec![Tag::from_bytes(b"rqd ")]);
        let (tag, lookups) = schedule.stages(TableIndex::GSUB).next().unwrap();
        assert_eq!(tag, Tag::from_bytes(b"rqd "));
        assert_eq!(lookups[0].mask, GLOBAL_MASK);
    }

    #[test]
    fn unsupported_script() {
        let face = face();
        assert_eq!(
            FeatureSchedule::new(&face, script::DEVANAGARI, None, &[]).unwrap_err(),
            ShapingError::UnsupportedScript(script::DEVANAGARI)
        );

        // Requested features are enough.
        let schedule = FeatureSchedule::new(&face, script::DEVANAGARI, None, &["liga".parse().unwrap()]);
        assert!(schedule.is_ok());
    }

    #[test]
    fn bits_run_out() {
        let latn = Tag::from_bytes(b"latn");
        let mut gsub = SubstitutionTable::new();
        let l0 = gsub.push_lookup(single(1, 2));
        let mut features = Vec::new();
        for i in 1..=5u8 {
            let tag = Tag::from_bytes(&[b's', b's', b'0', b'0' + i]);
            gsub.add_feature(latn, None, tag, &[l0]);
            features.push(Feature::new(tag, 255, ..));
        }
        let face = FaceBuilder::new(1000).gsub(gsub).build();

        // 1 + 8 * 3 bits fit, a fourth 8-bit feature does not.
        let schedule = FeatureSchedule::new(&face, script::LATIN, None, &features).unwrap();
        assert_eq!(tags(&schedule, Phase::Substitution).len(), 3);
    }
}
