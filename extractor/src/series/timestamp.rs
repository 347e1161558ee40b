use chrono::NaiveDateTime;
use std::path::Path;

/// Pulls the scan timestamp out of a NEXRAD-style file name such as
/// `KFTG20110712_000223_V03.nc`: an 8-digit date, an underscore, then a
/// 6-digit time. The station prefix and product suffix can vary, so the
/// digits are located relative to each underscore rather than by position.
pub fn scan_timestamp(path: &Path) -> Option<NaiveDateTime> {
    let stem = path.file_stem()?.to_str()?;
    if !stem.is_ascii() {
        return None;
    }
    for (idx, _) in stem.match_indices('_') {
        if idx < 8 || idx + 7 > stem.len() {
            continue;
        }
        let date = &stem[idx - 8..idx];
        let time = &stem[idx + 1..idx + 7];
        if !date.bytes().all(|b| b.is_ascii_digit())
            || !time.bytes().all(|b| b.is_ascii_digit())
        {
            continue;
        }
        let candidate = format!("{}{}", date, time);
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&candidate, "%Y%m%d%H%M%S") {
            return Some(parsed);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::path::PathBuf;

    #[test]
    fn parses_nexrad_style_names() {
        let path = PathBuf::from("/media/nexrad/KFTG20110712_000223_V03.nc");
        let parsed = scan_timestamp(&path).unwrap();
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day()),
            (2011, 7, 12)
        );
        assert_eq!(
            (parsed.hour(), parsed.minute(), parsed.second()),
            (0, 2, 23)
        );
    }

    #[test]
    fn parses_names_without_product_suffix() {
        let path = PathBuf::from("KABC20230101_235959.nc");
        assert!(scan_timestamp(&path).is_some());
    }

    #[test]
    fn rejects_names_without_a_timestamp() {
        assert!(scan_timestamp(Path::new("radar_summary.nc")).is_none());
        assert!(scan_timestamp(Path::new("KFTG2011_0712.nc")).is_none());
        assert!(scan_timestamp(Path::new("KFTG20111312_000223.nc")).is_none());
    }
}
