//! Partner reference pre-fill from landing-page links (`?pc=` or `?partner=`).

use reqwest::Url;

const PRIMARY_PARAM: &str = "pc";
const FALLBACK_PARAM: &str = "partner";

/// Value of the first non-blank `pc`, else `partner`, trimmed and upper-cased.
pub fn partner_ref_from_pairs<I, K, V>(pairs: I) -> Option<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut primary = None;
    let mut fallback = None;

    for (key, value) in pairs {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            PRIMARY_PARAM if primary.is_none() => primary = Some(value.to_uppercase()),
            FALLBACK_PARAM if fallback.is_none() => fallback = Some(value.to_uppercase()),
            _ => {},
        }
    }

    primary.or(fallback)
}

/// Partner reference carried by a landing-page URL, if any.
#[must_use]
pub fn partner_ref_from_url(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    partner_ref_from_pairs(url.query_pairs())
}
