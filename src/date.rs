// src/date.rs
//
// Date text as shown on the profile page: `"<noise> <month>. <year>"`,
// e.g. `"Expedición: nov. 2023"`. Months are Spanish abbreviations; the day
// is always the 1st. Splitting an issued/expiry pair is the extractor's job,
// this module only ever sees one fragment.

use crate::error::DateError;
use crate::record::CanonicalDate;

/// Abbreviation → zero-based month index.
const MONTHS: [(&str, u32); 12] = [
    ("ene.", 0),
    ("feb.", 1),
    ("mar.", 2),
    ("abr.", 3),
    ("may.", 4),
    ("jun.", 5),
    ("jul.", 6),
    ("ago.", 7),
    ("sept.", 8),
    ("oct.", 9),
    ("nov.", 10),
    ("dic.", 11),
];

/// Zero-based month index for a Spanish abbreviation (case-insensitive).
pub fn month_index(abbrev: &str) -> Result<u32, DateError> {
    let key = abbrev.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, ix)| *ix)
        .ok_or_else(|| DateError::UnrecognizedMonth { month: s!(abbrev) })
}

/// Day 1 of the given month/year.
pub fn from_month_year(month: &str, year: &str) -> Result<CanonicalDate, DateError> {
    let ix = month_index(month)?;
    let y: i32 = year
        .trim()
        .parse()
        .map_err(|_| DateError::InvalidYear { raw: s!(year) })?;
    CanonicalDate::from_ymd(y, ix + 1, 1).ok_or_else(|| DateError::InvalidYear { raw: s!(year) })
}

/// Normalize one fragment. The first whitespace token is discarded, the next
/// two are month and year; anything after the year is ignored.
pub fn normalize_fragment(raw: &str) -> Result<CanonicalDate, DateError> {
    let malformed = || DateError::MalformedFragment { raw: s!(raw) };

    let mut tokens = raw.split_whitespace().skip(1);
    let month = tokens.next().ok_or_else(malformed)?;
    let year = tokens.next().ok_or_else(malformed)?;

    from_month_year(month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_to_first_of_month() {
        assert_eq!(from_month_year("nov.", "2023").unwrap().to_string(), "2023/11/01");
        assert_eq!(from_month_year("ene.", "2020").unwrap().to_string(), "2020/01/01");
        assert_eq!(from_month_year("sept.", "2019").unwrap().to_string(), "2019/09/01");
    }

    #[test]
    fn abbreviations_are_case_insensitive() {
        assert_eq!(month_index("DIC.").unwrap(), 11);
        assert_eq!(month_index("Abr.").unwrap(), 3);
    }

    #[test]
    fn unknown_month_is_an_error() {
        assert_eq!(
            from_month_year("sep.", "2023"),
            Err(DateError::UnrecognizedMonth { month: s!("sep.") })
        );
        assert!(matches!(
            normalize_fragment("Issued Nov 2023"),
            Err(DateError::UnrecognizedMonth { .. })
        ));
    }

    #[test]
    fn leading_token_is_noise() {
        assert_eq!(normalize_fragment("Expedición: nov. 2023").unwrap().to_string(), "2023/11/01");
        assert_eq!(normalize_fragment("x  feb.   2021").unwrap().to_string(), "2021/02/01");
    }

    #[test]
    fn short_or_bad_fragments() {
        assert!(matches!(normalize_fragment("nov. 2023"), Err(DateError::MalformedFragment { .. })));
        assert!(matches!(normalize_fragment(""), Err(DateError::MalformedFragment { .. })));
        assert!(matches!(normalize_fragment("x nov. 20x3"), Err(DateError::InvalidYear { .. })));
    }
}
