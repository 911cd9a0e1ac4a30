//! Static city news lookup
//!
//! Answers for one hard-coded city, in English or in its local name, and
//! rejects everything else. No I/O.

use crate::error::{NewsError, NewsResult};
use serde::{Deserialize, Serialize};

/// Names accepted for the one city we carry news for, already lower-cased
pub const KNOWN_CITY_NAMES: &[&str] = &["taipei", "台北"];

const TAIPEI_HEADLINE: &str = "北捷博愛座事件";
const TAIPEI_CONTENT: &str = "一位白髮婦人在捷運上因讓座問題，不僅涉嫌竊盜遭通緝，還因用雨傘毆打博愛座女童而被檢方起訴。";

/// Headline and body for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityNews {
    pub headline: String,
    pub content: String,
}

/// Return the news for `city`, matched case-insensitively
pub fn lookup_city_news(city: &str) -> NewsResult<CityNews> {
    let normalized = city.to_lowercase();

    if KNOWN_CITY_NAMES.contains(&normalized.as_str()) {
        Ok(CityNews {
            headline: TAIPEI_HEADLINE.to_string(),
            content: TAIPEI_CONTENT.to_string(),
        })
    } else {
        Err(NewsError::unsupported_input(
            city,
            format!("News for '{city}' is not available."),
        ))
    }
}
