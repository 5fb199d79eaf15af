//! Canonical band ordering and source-name derivation.

use std::path::Path;

/// Ordered band-substring table, first match wins.
///
/// Radio survey identifiers rank first, then infrared/sub-mm bands in
/// increasing wavelength. Files with no recognized band keep rank 0.
const BAND_RANKS: &[(&str, i32)] = &[
    ("meerkat_gps", 0),
    ("askap", 0),
    ("first", 0),
    ("wise_12", 1),
    ("wise_22", 2),
    ("wise_3_4", 3),
    ("wise_4_6", 4),
    ("irac_8", 5),
    ("higal_70", 6),
];

/// Ordering rank of a file within a multi-band image set.
///
/// Matching is a case-sensitive substring check against the full path.
pub fn band_rank(filename: &str) -> i32 {
    BAND_RANKS
        .iter()
        .find(|(needle, _)| filename.contains(needle))
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Derive the source name of a file: the base filename without its final
/// extension, with every non-empty strip pattern removed in the order given.
///
/// Removal is literal substring replacement, not regex.
pub fn source_name(path: &Path, strip_patterns: &[String]) -> String {
    let base = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    strip_patterns
        .iter()
        .filter(|pattern| !pattern.is_empty())
        .fold(base, |name, pattern| name.replace(pattern.as_str(), ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_radio_bands_rank_first() {
        assert_eq!(band_rank("/data/meerkat_gps_G001.fits"), 0);
        assert_eq!(band_rank("/data/askap_G001.fits"), 0);
        assert_eq!(band_rank("/data/first_G001.fits"), 0);
    }

    #[test]
    fn test_infrared_bands_rank_by_wavelength() {
        assert_eq!(band_rank("wise_12_G001.fits"), 1);
        assert_eq!(band_rank("wise_22_G001.fits"), 2);
        assert_eq!(band_rank("wise_3_4_G001.fits"), 3);
        assert_eq!(band_rank("wise_4_6_G001.fits"), 4);
        assert_eq!(band_rank("irac_8_G001.fits"), 5);
        assert_eq!(band_rank("higal_70_G001.fits"), 6);
    }

    #[test]
    fn test_unrecognized_band_defaults_to_zero() {
        assert_eq!(band_rank("unknown_band.fits"), 0);
    }

    #[test]
    fn test_first_matching_band_wins() {
        // Both substrings present: the earlier table entry decides.
        assert_eq!(band_rank("askap_cutout_of_higal_70_field.fits"), 0);
    }

    #[test]
    fn test_source_name_strips_patterns_in_order() {
        let path = PathBuf::from("/data/src_v2.fits");
        let patterns = vec!["_v2".to_string()];
        assert_eq!(source_name(&path, &patterns), "src");
    }

    #[test]
    fn test_source_name_ignores_empty_patterns() {
        let path = PathBuf::from("askap_G254_cutout.fits");
        let patterns = vec![
            String::new(),
            "askap_".to_string(),
            "_cutout".to_string(),
        ];
        assert_eq!(source_name(&path, &patterns), "G254");
    }

    #[test]
    fn test_source_name_without_patterns_is_base_stem() {
        let path = PathBuf::from("/a/b/G010.62-0.38.fits");
        assert_eq!(source_name(&path, &[]), "G010.62-0.38");
    }
}
