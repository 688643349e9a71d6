//! Business type catalog - maps host company presets to display names

/// Display name used when no catalog row matches a preset
pub const UNKNOWN_BUSINESS_TYPE: &str = "Unknown";

/// Preset fragment to display name, scanned top to bottom.
///
/// A preset matches a row when the preset name contains the fragment. The
/// first matching row wins, so a fragment that is a substring of another
/// ("Bar" inside "Barber") must come after the longer one.
pub const BUSINESS_TYPE_CATALOG: &[(&str, &str)] = &[
    ("AmericanDiner", "Diner"),
    ("ChineseEatery", "Eatery"),
    ("FastFood", "Fast Food"),
    ("Barber", "Barber Shop"),
    ("Bar", "Bar"),
    ("NightClub", "Nightclub"),
    ("Supermarket", "Supermarket"),
    ("GeneralStore", "General Store"),
    ("HardwareStore", "Hardware Store"),
    ("Chemist", "Pharmacy"),
    ("Pawn", "Pawn Shop"),
    ("Launderette", "Launderette"),
    ("Gym", "Gym"),
    ("Hotel", "Hotel"),
    ("Office", "Office"),
    ("Factory", "Factory"),
];

/// Resolve the display name for a host preset.
///
/// Returns [`UNKNOWN_BUSINESS_TYPE`] when the preset is missing or matches no
/// row.
pub fn resolve_business_type(preset: Option<&str>) -> &'static str {
    let Some(preset) = preset else {
        return UNKNOWN_BUSINESS_TYPE;
    };
    BUSINESS_TYPE_CATALOG
        .iter()
        .find(|(fragment, _)| preset.contains(fragment))
        .map(|(_, display)| *display)
        .unwrap_or(UNKNOWN_BUSINESS_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_preset_resolves() {
        assert_eq!(resolve_business_type(Some("AmericanDiner")), "Diner");
        assert_eq!(resolve_business_type(Some("ChemistShop_Large")), "Pharmacy");
    }

    #[test]
    fn test_first_match_wins() {
        // "Barber" must be found before the shorter "Bar" fragment
        assert_eq!(resolve_business_type(Some("BarberShop")), "Barber Shop");
        assert_eq!(resolve_business_type(Some("BarDive")), "Bar");
    }

    #[test]
    fn test_unmatched_or_missing_preset_is_unknown() {
        assert_eq!(resolve_business_type(Some("Apartment")), UNKNOWN_BUSINESS_TYPE);
        assert_eq!(resolve_business_type(None), UNKNOWN_BUSINESS_TYPE);
    }

    #[test]
    fn test_no_row_is_shadowed_by_an_earlier_row() {
        for (i, (fragment, display)) in BUSINESS_TYPE_CATALOG.iter().enumerate() {
            assert_eq!(
                resolve_business_type(Some(*fragment)),
                *display,
                "row {} ({}) is unreachable",
                i,
                fragment
            );
        }
    }
}
