//! # Input Masks
//!
//! Progressive display masks for CPF and Brazilian phone numbers.
//!
//! A mask is recomputed from scratch on every keystroke: the digits are extracted from
//! whatever the widget currently holds, truncated to 11, and re-punctuated. Partial
//! input is formatted as far as it goes, so `"5299"` displays as `"529.9"` while the
//! user is still typing.
//!
//! [`remask`] bundles that recomputation with caret placement. The caret is tracked by
//! *digit index* (how many digits sit to its left) instead of raw offset, so inserted
//! punctuation never pushes it away from the digit being edited.
//!
//! Every function here is total and never panics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Digits kept by both masks.
const MAX_DIGITS: usize = 11;

/// The masks an input can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// `XXX.XXX.XXX-XX`
    Cpf,
    /// `(DD) PPPP-SSSS` or `(DD) PPPPP-SSSS`
    Phone,
}

impl MaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskKind::Cpf => "cpf",
            MaskKind::Phone => "phone",
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mask tag is neither `cpf` nor `phone`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mask: {0}")]
pub struct UnknownMask(pub String);

impl FromStr for MaskKind {
    type Err = UnknownMask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(MaskKind::Cpf),
            "phone" => Ok(MaskKind::Phone),
            other => Err(UnknownMask(other.to_string())),
        }
    }
}

/// Strips every character that is not an ASCII digit.
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// The first [`MAX_DIGITS`] digits of `raw`.
fn leading_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

/// Splits at `at`, or at the end when `s` is shorter. `s` is ASCII.
fn split(s: &str, at: usize) -> (&str, &str) {
    s.split_at(at.min(s.len()))
}

/// Formats up to 11 digits as `XXX.XXX.XXX-XX`, punctuating only what has been typed.
///
/// ```
/// use pet_manager::mask::format_cpf;
///
/// assert_eq!(format_cpf("5299"), "529.9");
/// assert_eq!(format_cpf("52998224725000"), "529.982.247-25");
/// ```
pub fn format_cpf(raw: &str) -> String {
    let digits = leading_digits(raw);
    if digits.len() <= 3 {
        return digits;
    }

    let (first, rest) = split(&digits, 3);
    let (second, rest) = split(rest, 3);
    let (third, check) = split(rest, 3);

    match digits.len() {
        4..=6 => format!("{first}.{second}"),
        7..=9 => format!("{first}.{second}.{third}"),
        _ => format!("{first}.{second}.{third}-{check}"),
    }
}

/// Formats up to 11 digits as a Brazilian phone number.
///
/// The split point depends on how many digits there are: up to 10 digits group as
/// `(DD) PPPP-SSSS` (landline), exactly 11 as `(DD) PPPPP-SSSS` (mobile).
///
/// ```
/// use pet_manager::mask::format_phone_br;
///
/// assert_eq!(format_phone_br("119"), "(11) 9");
/// assert_eq!(format_phone_br("1199999999"), "(11) 9999-9999");
/// assert_eq!(format_phone_br("11999999999"), "(11) 99999-9999");
/// ```
pub fn format_phone_br(raw: &str) -> String {
    let digits = leading_digits(raw);

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        len => {
            let (area, rest) = split(&digits, 2);
            if len <= 6 {
                return format!("({area}) {rest}");
            }

            let prefix_len = if len <= 10 { 4 } else { 5 };
            let (prefix, suffix) = split(rest, prefix_len);
            if suffix.is_empty() {
                format!("({area}) {prefix}")
            } else {
                format!("({area}) {prefix}-{suffix}")
            }
        }
    }
}

/// Applies the mask of `kind` to `raw`.
pub fn apply_mask(raw: &str, kind: MaskKind) -> String {
    match kind {
        MaskKind::Cpf => format_cpf(raw),
        MaskKind::Phone => format_phone_br(raw),
    }
}

/// Applies the mask named `kind`; an unknown name leaves `raw` unchanged.
pub fn apply_mask_by_name(raw: &str, kind: &str) -> String {
    match kind.parse::<MaskKind>() {
        Ok(kind) => apply_mask(raw, kind),
        Err(_) => raw.to_string(),
    }
}

/// Character offset just after the `digit_index`-th digit of `masked`.
///
/// `0` when `digit_index` is zero; the full length (in characters) when `masked` holds
/// fewer digits than that.
pub fn caret_position_for_digit_index(masked: &str, digit_index: usize) -> usize {
    if digit_index == 0 {
        return 0;
    }

    let mut seen = 0;
    let mut length = 0;
    for (position, c) in masked.chars().enumerate() {
        length = position + 1;
        if c.is_ascii_digit() {
            seen += 1;
            if seen >= digit_index {
                return position + 1;
            }
        }
    }
    length
}

/// A re-masked widget value with its caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedEdit {
    pub value: String,
    /// Character offset into `value`.
    pub caret: usize,
}

/// Recomputes the widget after a keystroke.
///
/// `raw` is what the widget holds right after the edit and `caret` where its cursor
/// sits, in characters; a caret past the end counts as the end.
///
/// ```
/// use pet_manager::mask::{remask, MaskKind};
///
/// // A digit typed right after "529." in "529.982".
/// let edit = remask("529.1982", 5, MaskKind::Cpf);
/// assert_eq!(edit.value, "529.198.2");
/// assert_eq!(edit.caret, 5);
/// ```
pub fn remask(raw: &str, caret: usize, kind: MaskKind) -> MaskedEdit {
    let digit_index = raw
        .chars()
        .take(caret)
        .filter(char::is_ascii_digit)
        .count();
    let value = apply_mask(raw, kind);
    let caret = caret_position_for_digit_index(&value, digit_index);
    MaskedEdit { value, caret }
}

/// Masks a stored value for display; a missing value shows as empty.
pub fn mask_for_display(stored: Option<&str>, kind: MaskKind) -> String {
    apply_mask(stored.unwrap_or_default(), kind)
}
