//! Country name to country code table for the headlines endpoint

/// Supported country names and their two-letter codes, in listing order
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("台灣", "tw"),
    ("美國", "us"),
    ("日本", "jp"),
    ("英國", "gb"),
    ("加拿大", "ca"),
    ("德國", "de"),
    ("法國", "fr"),
    ("義大利", "it"),
    ("韓國", "kr"),
    ("澳洲", "au"),
];

/// Look up the code for a country name.
///
/// The name is lower-cased before the lookup. Table keys are matched
/// verbatim, so CJK names pass through case folding unchanged.
pub fn country_code(name: &str) -> Option<&'static str> {
    let normalized = name.to_lowercase();
    COUNTRY_CODES
        .iter()
        .find(|(country, _)| *country == normalized)
        .map(|(_, code)| *code)
}

pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_CODES.iter().map(|(country, _)| *country)
}

/// Supported names joined for user-facing messages
pub fn supported_countries_list() -> String {
    supported_countries().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries_map_to_codes() {
        assert_eq!(country_code("台灣"), Some("tw"));
        assert_eq!(country_code("日本"), Some("jp"));
        assert_eq!(country_code("澳洲"), Some("au"));
    }

    #[test]
    fn test_names_are_not_trimmed() {
        assert_eq!(country_code(" 美國"), None);
    }

    #[test]
    fn test_unknown_country_is_none() {
        assert_eq!(country_code("火星"), None);
        assert_eq!(country_code("Japan"), None);
        assert_eq!(country_code(""), None);
    }

    #[test]
    fn test_codes_are_two_lowercase_letters() {
        for (_, code) in COUNTRY_CODES {
            assert_eq!(code.len(), 2);
            assert!(code.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_supported_list_keeps_table_order() {
        let list = supported_countries_list();
        assert!(list.starts_with("台灣, 美國, 日本"));
        assert!(list.ends_with("韓國, 澳洲"));
        assert_eq!(supported_countries().count(), 10);
    }
}
