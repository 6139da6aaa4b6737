// src/report.rs
//! Completion report, derived read-only from a finished catalog.

use std::fmt;

use crate::catalog::{is_usable_link, Catalog};
use crate::config::options::ReportOptions;

/// How a country's located areas compare to the count the index declared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Completion {
    /// Exactly as many located areas as declared.
    Complete,
    /// Short of (or past) the declared count, within the thresholds.
    Incomplete { pct: f64 },
    /// Past the high threshold: probably read an unrelated table or list.
    TooMany { pct: f64 },
    /// Under the low threshold.
    NotEnough { pct: f64 },
    /// Declared count unknown or zero; nothing to measure against.
    Unmeasured,
}

impl Completion {
    pub fn classify(located: usize, declared: Option<u32>, opts: &ReportOptions) -> Self {
        let declared = match declared {
            Some(d) if d > 0 => d,
            _ => return Completion::Unmeasured,
        };
        let pct = round2(located as f64 / f64::from(declared) * 100.0);
        if pct > opts.high_pct {
            Completion::TooMany { pct }
        } else if pct < opts.low_pct {
            Completion::NotEnough { pct }
        } else if pct == 100.0 {
            Completion::Complete
        } else {
            Completion::Incomplete { pct }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Completion::Complete => "complete",
            Completion::Incomplete { .. } => "incomplete",
            Completion::TooMany { .. } => "too_many",
            Completion::NotEnough { .. } => "not_enough",
            Completion::Unmeasured => "unmeasured",
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountryCompletion {
    pub country: String,
    pub declared: Option<u32>,
    pub extracted: usize,
    pub located: usize,
    pub completion: Completion,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Sum of the counts the index declared.
    pub declared_total: u64,
    pub extracted_total: usize,
    pub located_total: usize,
    /// Countries without a usable link, and the areas they declared.
    pub countries_without_link: Vec<String>,
    pub declared_behind_missing_links: u64,
    /// Areas (with no coordinates) that could not be followed to their own page.
    pub areas_without_link: usize,
    pub countries: Vec<CountryCompletion>,
}

impl Report {
    pub fn build(catalog: &Catalog, opts: &ReportOptions) -> Self {
        let mut report = Report {
            declared_total: 0,
            extracted_total: 0,
            located_total: 0,
            countries_without_link: Vec::new(),
            declared_behind_missing_links: 0,
            areas_without_link: 0,
            countries: Vec::with_capacity(catalog.len()),
        };

        for country in catalog.countries.values() {
            let declared = u64::from(country.declared_areas.unwrap_or(0));
            let located = country.located();

            report.declared_total += declared;
            report.extracted_total += country.areas.len();
            report.located_total += located;

            if !country.has_usable_link() {
                report.countries_without_link.push(country.name.clone());
                report.declared_behind_missing_links += declared;
            }
            report.areas_without_link += country
                .areas
                .values()
                .filter(|a| a.coordinates.is_none() && !is_usable_link(a.link.as_deref()))
                .count();

            report.countries.push(CountryCompletion {
                country: country.name.clone(),
                declared: country.declared_areas,
                extracted: country.areas.len(),
                located,
                completion: Completion::classify(located, country.declared_areas, opts),
            });
        }

        report
    }

    /// Share of declared areas located, in percent. `None` when nothing was declared.
    pub fn located_pct(&self) -> Option<f64> {
        (self.declared_total > 0).then(|| round2(self.located_total as f64 / self.declared_total as f64 * 100.0))
    }

    pub fn with(&self, label: &str) -> impl Iterator<Item = &CountryCompletion> {
        let label = s!(label);
        self.countries.iter().filter(move |c| c.completion.label() == label)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.located_pct() {
            Some(pct) => writeln!(f, "{pct}% ({}/{}) of declared parks located", self.located_total, self.declared_total)?,
            None => writeln!(f, "{} parks located (none declared)", self.located_total)?,
        }
        writeln!(f, "{} parks extracted across {} countries", self.extracted_total, self.countries.len())?;
        writeln!(
            f,
            "{} countries without a usable link ({} declared parks)",
            self.countries_without_link.len(),
            self.declared_behind_missing_links
        )?;
        writeln!(f, "{} parks without coordinates or a usable link", self.areas_without_link)?;

        for label in ["complete", "incomplete", "too_many", "not_enough", "unmeasured"] {
            let names: Vec<&str> = self.with(label).map(|c| c.country.as_str()).collect();
            writeln!(f, "{label}: {}", names.len())?;
            if !names.is_empty() && label != "complete" {
                writeln!(f, "  {}", names.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AreaRecord, Coordinates, CountryRecord};

    fn located(n: usize, unlocated: usize) -> Vec<(String, AreaRecord)> {
        let c = Coordinates { lat_dms: s!("1°N"), long_dms: s!("1°E"), lat: 1.0, long: 1.0 };
        let mut v = Vec::new();
        for i in 0..n {
            v.push((format!("L{i}"), AreaRecord { link: Some(format!("/wiki/L{i}")), coordinates: Some(c.clone()) }));
        }
        for i in 0..unlocated {
            v.push((format!("U{i}"), AreaRecord { link: None, coordinates: None }));
        }
        v
    }

    fn country(name: &str, link: Option<&str>, declared: Option<u32>, located_n: usize, unlocated: usize) -> CountryRecord {
        let mut c = CountryRecord::new(name, link.map(String::from), declared);
        c.areas.extend(located(located_n, unlocated));
        c
    }

    #[test]
    fn classify_thresholds() {
        let o = ReportOptions::default();
        assert_eq!(Completion::classify(4, Some(4), &o), Completion::Complete);
        assert_eq!(Completion::classify(3, Some(4), &o), Completion::Incomplete { pct: 75.0 });
        assert_eq!(Completion::classify(21, Some(20), &o), Completion::Incomplete { pct: 105.0 });
        assert_eq!(Completion::classify(22, Some(20), &o), Completion::TooMany { pct: 110.0 });
        assert_eq!(Completion::classify(1, Some(3), &o), Completion::NotEnough { pct: 33.33 });
        assert_eq!(Completion::classify(2, Some(0), &o), Completion::Unmeasured);
        assert_eq!(Completion::classify(2, None, &o), Completion::Unmeasured);
    }

    #[test]
    fn totals_and_missing_links() {
        let mut cat = Catalog::new();
        cat.insert(country("Kenya", Some("/wiki/Kenya"), Some(4), 3, 1));
        cat.insert(country("Lost", None, Some(6), 0, 0));
        cat.insert(country("Odd", Some("/wiki/Odd"), None, 1, 0));

        let r = Report::build(&cat, &ReportOptions::default());
        assert_eq!(r.declared_total, 10);
        assert_eq!(r.located_total, 4);
        assert_eq!(r.extracted_total, 5);
        assert_eq!(r.countries_without_link, vec![s!("Lost")]);
        assert_eq!(r.declared_behind_missing_links, 6);
        assert_eq!(r.areas_without_link, 1);
        assert_eq!(r.located_pct(), Some(40.0));

        assert_eq!(r.with("incomplete").count(), 1);
        assert_eq!(r.with("not_enough").map(|c| c.country.as_str()).collect::<Vec<_>>(), vec!["Lost"]);
        assert_eq!(r.with("unmeasured").count(), 1);

        let text = r.to_string();
        assert!(text.starts_with("40% (4/10) of declared parks located"));
        assert!(text.contains("not_enough: 1\n  Lost\n"));
    }
}
