pub struct RegionCode {}

impl RegionCode {
    /// Canonicalizes a user supplied default region.
    ///
    /// Absent, empty and whitespace-only input yields `None` (no default
    /// region). Anything else is trimmed and its ASCII letters uppercased.
    /// Other characters are left alone, so `"ß"` stays `"ß"`. The result is
    /// not checked against the list of known regions, so `"xx"` becomes
    /// `Some("XX")` and the engine decides what to do with it.
    pub fn normalize(region_code: Option<&str>) -> Option<String> {
        let trimmed = region_code?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_ascii_uppercase())
    }
}
