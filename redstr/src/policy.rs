//! Replacement strategies for matched spans.
//!
//! A replacement is a pure string transformation: it sees only the matched
//! text and knows nothing about where it came from.

use std::borrow::Cow;

/// Default placeholder used for full redaction.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Default symbol for partial masking.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Keeps leading and/or trailing characters visible and masks the middle.
///
/// Counts are in Unicode scalar values. If the visible spans cover the whole
/// value, it is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeepConfig {
    visible_prefix: usize,
    visible_suffix: usize,
    mask_char: char,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` characters.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self::both(visible_prefix, 0)
    }

    /// Keeps only the last `visible_suffix` characters.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self::both(0, visible_suffix)
    }

    /// Keeps both leading and trailing characters.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// The masking character.
    pub const fn mask_char(self) -> char {
        self.mask_char
    }

    fn write(&self, value: &str, out: &mut String) {
        let total = value.chars().count();
        if self.visible_prefix + self.visible_suffix >= total {
            out.push_str(value);
            return;
        }
        let masked_end = total - self.visible_suffix;
        for (idx, ch) in value.chars().enumerate() {
            if idx < self.visible_prefix || idx >= masked_end {
                out.push(ch);
            } else {
                out.push(self.mask_char);
            }
        }
    }
}

/// Masks leading and/or trailing characters and leaves the middle visible.
///
/// Counts are in Unicode scalar values. If the masked spans cover the whole
/// value, everything is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_field_names)]
pub struct MaskConfig {
    mask_prefix: usize,
    mask_suffix: usize,
    mask_char: char,
}

impl MaskConfig {
    /// Masks only the first `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self::both(mask_prefix, 0)
    }

    /// Masks only the last `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self::both(0, mask_suffix)
    }

    /// Masks both leading and trailing characters.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// The masking character.
    pub const fn mask_char(self) -> char {
        self.mask_char
    }

    fn write(&self, value: &str, out: &mut String) {
        let total = value.chars().count();
        let visible_end = total.saturating_sub(self.mask_suffix);
        for (idx, ch) in value.chars().enumerate() {
            if idx < self.mask_prefix || idx >= visible_end {
                out.push(self.mask_char);
            } else {
                out.push(ch);
            }
        }
    }
}

/// How a matched span is rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// Replace the whole span with a fixed placeholder.
    Full {
        /// The placeholder text.
        placeholder: Cow<'static, str>,
    },
    /// Keep configured segments visible, mask the rest.
    Keep(KeepConfig),
    /// Mask configured segments, keep the rest.
    Mask(MaskConfig),
}

impl Replacement {
    /// [`Replacement::Full`] with [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn default_full() -> Self {
        Self::Full {
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
        }
    }

    /// [`Replacement::Full`] with a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    /// Keeps the first `visible_prefix` characters in clear text.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    /// Keeps the last `visible_suffix` characters in clear text.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::last(visible_suffix))
    }

    /// Masks the first `mask_prefix` characters.
    #[must_use]
    pub fn mask_first(mask_prefix: usize) -> Self {
        Self::Mask(MaskConfig::first(mask_prefix))
    }

    /// Masks the last `mask_suffix` characters.
    #[must_use]
    pub fn mask_last(mask_suffix: usize) -> Self {
        Self::Mask(MaskConfig::last(mask_suffix))
    }

    /// Overrides the masking character. No effect on [`Replacement::Full`].
    #[must_use]
    pub fn with_mask_char(self, mask_char: char) -> Self {
        match self {
            Self::Full { .. } => self,
            Self::Keep(config) => Self::Keep(config.with_mask_char(mask_char)),
            Self::Mask(config) => Self::Mask(config.with_mask_char(mask_char)),
        }
    }

    /// The fixed placeholder, if this is a full replacement.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Full { placeholder } => Some(placeholder),
            Self::Keep(_) | Self::Mask(_) => None,
        }
    }

    /// Appends the replacement for `value` to `out`.
    pub fn write_to(&self, value: &str, out: &mut String) {
        match self {
            Self::Full { placeholder } => out.push_str(placeholder),
            Self::Keep(config) => config.write(value, out),
            Self::Mask(config) => config.write(value, out),
        }
    }

    /// Returns the replacement for `value`.
    ///
    /// Keep and mask strategies return empty input unchanged; full
    /// replacement always yields the placeholder.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        self.write_to(value, &mut out);
        out
    }
}

impl Default for Replacement {
    fn default() -> Self {
        Self::default_full()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeepConfig, MaskConfig, Replacement, REDACTED_PLACEHOLDER};

    #[test]
    fn full_uses_default_and_custom_placeholders() {
        assert_eq!(Replacement::default_full().apply_to("secret"), REDACTED_PLACEHOLDER);
        assert_eq!(Replacement::full_with("***").apply_to("secret"), "***");
        assert_eq!(Replacement::full_with("***").placeholder(), Some("***"));
        assert_eq!(Replacement::keep_last(4).placeholder(), None);
    }

    #[test]
    fn keep_masks_the_middle() {
        let replacement = Replacement::Keep(KeepConfig::both(2, 2));
        assert_eq!(replacement.apply_to("abcdef"), "ab**ef");
    }

    #[test]
    fn keep_leaves_short_values_visible() {
        let replacement = Replacement::Keep(KeepConfig::both(2, 2));
        assert_eq!(replacement.apply_to("abcd"), "abcd");
        assert_eq!(Replacement::keep_first(3).apply_to("ab"), "ab");
    }

    #[test]
    fn mask_hides_the_ends() {
        assert_eq!(Replacement::mask_first(2).apply_to("abcdef"), "**cdef");
        assert_eq!(Replacement::mask_last(3).apply_to("abcdef"), "abc***");
        let replacement = Replacement::Mask(MaskConfig::both(2, 2));
        assert_eq!(replacement.apply_to("abcdef"), "**cd**");
    }

    #[test]
    fn mask_covers_short_values_completely() {
        let replacement = Replacement::Mask(MaskConfig::both(3, 3));
        assert_eq!(replacement.apply_to("abcd"), "****");
    }

    #[test]
    fn mask_char_applies_to_partial_strategies_only() {
        assert_eq!(
            Replacement::keep_first(2).with_mask_char('#').apply_to("abcdef"),
            "ab####"
        );
        assert_eq!(
            Replacement::mask_last(2).with_mask_char('x').apply_to("abcd"),
            "abxx"
        );
        assert_eq!(
            Replacement::default_full().with_mask_char('#').apply_to("abcd"),
            REDACTED_PLACEHOLDER
        );
    }

    #[test]
    fn empty_values() {
        assert_eq!(Replacement::keep_first(4).apply_to(""), "");
        assert_eq!(Replacement::mask_first(4).apply_to(""), "");
        assert_eq!(Replacement::default_full().apply_to(""), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn counts_scalar_values_not_bytes() {
        assert_eq!(Replacement::keep_first(2).apply_to("秘密数据"), "秘密**");
        assert_eq!(Replacement::keep_last(4).apply_to("secret🔒data"), "*******data");
    }

    #[test]
    fn write_to_appends() {
        let mut out = String::from("key=");
        Replacement::keep_last(2).write_to("abcdef", &mut out);
        assert_eq!(out, "key=****ef");
    }
}
