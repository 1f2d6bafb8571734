//! Years-of-experience heuristic
//!
//! Pattern-based only: any number followed by "year(s)" or "yr(s)" counts, so
//! phrases such as "founded 12 years ago" are picked up as well. The largest
//! value found wins.

use log::debug;
use regex::Regex;

pub struct ExperienceExtractor {
    patterns: Vec<Regex>,
    digit_regex: Regex,
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        let patterns = vec![
            Regex::new(r"(\d+\.?\d*)\s*\+?\s*ye?a?rs?").expect("Invalid years regex"),
            Regex::new(r"(\d+\.?\d*)\s*\+?\s*yrs?").expect("Invalid yrs regex"),
        ];

        Self {
            patterns,
            digit_regex: Regex::new(r"^\d$").expect("Invalid digit regex"),
        }
    }

    /// Maximum number of years mentioned in `text`, or 0.0 when there is none.
    pub fn extract_years(&self, text: &str) -> f64 {
        let mut max_years = 0.0f64;

        for pattern in &self.patterns {
            for cap in pattern.captures_iter(text) {
                let Some(number) = cap.get(1) else {
                    continue;
                };
                match self.ascii_digits(number.as_str()).parse::<f64>() {
                    Ok(years) => max_years = max_years.max(years),
                    Err(_) => debug!("Skipping malformed year capture: {:?}", number.as_str()),
                }
            }
        }

        max_years
    }

    /// Map any Unicode decimal digit (`\d`) to its ASCII form.
    ///
    /// Decimal digit sets are contiguous runs of ten starting at zero, so a
    /// digit's value is its distance from the start of its run, modulo 10.
    fn ascii_digits(&self, number: &str) -> String {
        number
            .chars()
            .map(|c| {
                if c.is_ascii() {
                    return c;
                }

                let mut run_start = c as u32;
                while let Some(prev) = char::from_u32(run_start - 1) {
                    if !self.digit_regex.is_match(prev.encode_utf8(&mut [0; 4])) {
                        break;
                    }
                    run_start -= 1;
                }
                char::from_digit((c as u32 - run_start) % 10, 10).unwrap_or(c)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_maximum_across_patterns() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract_years("5+ years, also 3 yrs"), 5.0);
    }

    #[test]
    fn test_no_mentions_is_zero() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract_years("seasoned engineer, team player"), 0.0);
        assert_eq!(extractor.extract_years(""), 0.0);
    }

    #[test]
    fn test_decimal_and_abbreviated_forms() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract_years("3.5 yrs of go"), 3.5);
        assert_eq!(extractor.extract_years("1 yr internship"), 1.0);
        assert_eq!(extractor.extract_years("10+years building apis"), 10.0);
    }

    #[test]
    fn test_trailing_dot_capture_is_accepted() {
        // "7." is captured before the space and still parses.
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract_years("over 7. years"), 7.0);
    }

    #[test]
    fn test_unicode_digits() {
        let extractor = ExperienceExtractor::new();
        assert_eq!(extractor.extract_years("٥ years"), 5.0);
        assert_eq!(extractor.extract_years("５+ yrs of rust"), 5.0);
        assert_eq!(extractor.extract_years("١٠ years"), 10.0);
        assert_eq!(extractor.extract_years("३.५ years"), 3.5);
    }

    #[test]
    fn test_unrelated_numbers_are_counted() {
        // Known limitation of the heuristic.
        let extractor = ExperienceExtractor::new();
        assert_eq!(
            extractor.extract_years("2 years at a company founded 40 years ago"),
            40.0
        );
    }
}
