use crate::unicode::script_from_char;
use crate::{script, Direction, Feature, Language, Script, ShapingError};

bitflags::bitflags! {
    /// Post-processing applied to the shaped glyphs.
    #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
    pub struct SegmentFlags: u8 {
        /// Removes glyphs classified as marks from the output.
        const REMOVE_MARKS = 0b0000_0001;
        /// Removes glyphs classified as bases from the output.
        const REMOVE_BASES = 0b0000_0010;
    }
}

/// One shaping request: text plus the context it is shaped in.
///
/// Unset script, direction and language are guessed from the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    codepoints: Vec<u32>,
    script: Option<Script>,
    language: Option<Language>,
    direction: Direction,
    features: Vec<Feature>,
    flags: SegmentFlags,
}

/// The resolved properties of a segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SegmentProperties {
    pub script: Script,
    pub language: Option<Language>,
    pub direction: Direction,
}

impl Segment {
    /// Creates a segment from a string.
    pub fn new(text: &str) -> Self {
        Segment {
            codepoints: text.chars().map(u32::from).collect(),
            ..Segment::default()
        }
    }

    /// Creates a segment from raw codepoints.
    ///
    /// Invalid codepoints are reported when shaping.
    pub fn from_utf32(codepoints: &[u32]) -> Self {
        Segment {
            codepoints: codepoints.to_vec(),
            ..Segment::default()
        }
    }

    /// Creates a segment from Latin-1 bytes.
    pub fn from_latin1(bytes: &[u8]) -> Self {
        Segment {
            codepoints: bytes.iter().map(|&b| u32::from(b)).collect(),
            ..Segment::default()
        }
    }

    /// Creates a segment from UTF-16 code units.
    ///
    /// Lone surrogates become U+FFFD.
    pub fn from_utf16(units: &[u16]) -> Self {
        Segment {
            codepoints: char::decode_utf16(units.iter().copied())
                .map(|r| u32::from(r.unwrap_or(char::REPLACEMENT_CHARACTER)))
                .collect(),
            ..Segment::default()
        }
    }

    /// Sets the script.
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    /// Sets the language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the requested features, in priority order.
    pub fn with_features(mut self, features: &[Feature]) -> Self {
        self.features = features.to_vec();
        self
    }

    /// Sets the post-processing flags.
    pub fn with_flags(mut self, flags: SegmentFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the codepoints.
    pub fn codepoints(&self) -> &[u32] {
        &self.codepoints
    }

    /// Returns the number of codepoints.
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    /// Checks that the segment has no text.
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Returns the requested features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Returns the post-processing flags.
    pub fn flags(&self) -> SegmentFlags {
        self.flags
    }

    /// Returns the explicitly set script.
    pub fn script(&self) -> Option<Script> {
        self.script
    }

    /// Returns the explicitly set language.
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// Returns the explicitly set direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.codepoints
            .iter()
            .map(|&cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Fills in whatever the caller left unset.
    pub(crate) fn properties(&self) -> SegmentProperties {
        let script = self.script.unwrap_or_else(|| {
            self.chars()
                .map(script_from_char)
                .find(|s| !matches!(*s, script::COMMON | script::INHERITED | script::UNKNOWN))
                .unwrap_or(script::COMMON)
        });

        let direction = match self.direction {
            Direction::Invalid => Direction::from_script(script).unwrap_or(Direction::LeftToRight),
            d => d,
        };

        SegmentProperties {
            script,
            language: self.language.clone(),
            direction,
        }
    }

    /// Checks that the segment can be shaped at all.
    pub(crate) fn validate(&self) -> Result<SegmentProperties, ShapingError> {
        if self.codepoints.is_empty() {
            return Err(ShapingError::InvalidSegment("empty text"));
        }

        if self.codepoints.iter().any(|&cp| char::from_u32(cp).is_none()) {
            return Err(ShapingError::InvalidSegment("invalid codepoint"));
        }

        if self.features.iter().any(|f| f.start >= f.end) {
            return Err(ShapingError::InvalidSegment("invalid feature range"));
        }

        let props = self.properties();
        if props.direction.is_vertical()
            && Direction::from_script(props.script) == Some(Direction::RightToLeft)
        {
            return Err(ShapingError::InvalidSegment(
                "vertical direction with a right-to-left script",
            ));
        }

        Ok(props)
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    #[test]
    fn guesses_properties() {
        let props = Segment::new("123 \u{0628}\u{064E}").properties();
        assert_eq!(props.script, script::ARABIC);
        assert_eq!(props.direction, Direction::RightToLeft);
        assert_eq!(props.language, None);

        let props = Segment::new("...").properties();
        assert_eq!(props.script, script::COMMON);
        assert_eq!(props.direction, Direction::LeftToRight);
    }

    #[test]
    fn explicit_properties_win() {
        let props = Segment::new("abc")
            .with_script(script::HEBREW)
            .with_direction(Direction::LeftToRight)
            .properties();
        assert_eq!(props.script, script::HEBREW);
        assert_eq!(props.direction, Direction::LeftToRight);
    }

    #[test]
    fn invalid_segments() {
        assert_eq!(
            Segment::new("").validate(),
            Err(ShapingError::InvalidSegment("empty text"))
        );
        assert_eq!(
            Segment::from_utf32(&[0x61, 0xD800]).validate(),
            Err(ShapingError::InvalidSegment("invalid codepoint"))
        );
        assert_eq!(
            Segment::new("\u{0628}").with_direction(Direction::TopToBottom).validate(),
            Err(ShapingError::InvalidSegment("vertical direction with a right-to-left script"))
        );

        let feature = Feature { tag: Tag::from_bytes(b"liga"), value: 1, start: 3, end: 3 };
        assert_eq!(
            Segment::new("abc").with_features(&[feature]).validate(),
            Err(ShapingError::InvalidSegment("invalid feature range"))
        );

        assert!(Segment::new("abc").with_direction(Direction::TopToBottom).validate().is_ok());
    }

    #[test]
    fn encodings() {
        assert_eq!(Segment::from_latin1(b"\xE9a").codepoints(), &[0xE9, 0x61]);
        assert_eq!(Segment::from_utf16(&[0xD83D, 0xDE00]).codepoints(), &[0x1F600]);
        assert_eq!(Segment::from_utf16(&[0xD83D]).codepoints(), &[0xFFFD]);
    }
}
