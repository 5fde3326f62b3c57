//! Bluetooth base UUID expansion

use once_cell::sync::Lazy;
use regex::Regex;

/// Suffix shared by every SIG-assigned 16 and 32 bit UUID
pub const BASE_UUID_SUFFIX: &str = "-0000-1000-8000-00805f9b34fb";

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

/// Expand a short-form assigned number into the full 128-bit form.
///
/// 4 digit (16-bit) values get a `0000` prefix and the base suffix, 8 digit
/// (32-bit) values get the base suffix. Anything else is taken to already be
/// a full UUID and is only lower-cased.
pub fn expand_uuid(raw: &str) -> String {
    let lower = raw.to_lowercase();
    match lower.chars().count() {
        4 => format!("0000{}{}", lower, BASE_UUID_SUFFIX),
        8 => format!("{}{}", lower, BASE_UUID_SUFFIX),
        _ => lower,
    }
}

/// Whether `uuid` is in the lower-case hyphenated 36 character form
pub fn is_canonical(uuid: &str) -> bool {
    UUID_REGEX.is_match(uuid)
}
