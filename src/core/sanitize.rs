// src/core/sanitize.rs
//! Display-name cleanup. Extractors keep raw cell text; these run when a
//! listing is merged into the catalog.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered (pattern, replacement) rules for area names. Order matters: the
/// bracket rules must run before the newline rule so footnotes split over
/// lines are left alone, and the tail rules assume the brackets are gone.
const AREA_RULES: &[(&str, &str)] = &[
    (r"[\[].+[\]]", ""),                // [1], [a], [citation needed]
    (r"[(].+[)]", ""),                  // (established 1962)
    ("\u{a0}", " "),
    ("\n", ""),
    ("established.+", ""),
    ("gazetted.+", ""),
    (" (—|-|–) .+", ""),                // "Park – a short description"
    (", .+", ""),
    ("  .+", ""),
    ("‡|†", ""),
    (r"\*", ""),
    ("^Source [0-9]: ", ""),
    ("Εθνικός.+", ""),                  // Greek native names
    ("Εθνικό.+", ""),
    ("[가-힣].+", ""),                   // Korean native names
    (r"\.\s[0-9].+", " "),              // ". 1995, 320 km²"
    (" in .+", ""),                     // regional context
    (r"\. Lagoon .+", ""),
    (r"\. Semi-freshwater .+", ""),
    (r"\. Includes .+", ""),
];

static AREA_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    AREA_RULES
        .iter()
        .map(|(pat, rep)| (Regex::new(pat).expect("literal regex"), *rep))
        .collect()
});

pub fn clean_area_name(raw: &str) -> String {
    let mut name = s!(raw);
    for (re, rep) in AREA_REGEXES.iter() {
        name = re.replace_all(&name, *rep).into_owned();
    }
    s!(name.trim())
}

pub fn clean_country_name(raw: &str) -> String {
    let re = regex!(r"[\[].+[\]]");
    s!(re.replace_all(raw, "").trim())
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    s!(out.trim())
}
