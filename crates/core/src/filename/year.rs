//! Bounded enumeration of plausible release years.
//!
//! Filenames embed the year without a reliable delimiter, so instead of
//! looking for "some 4-digit number" the window is walked in ascending order
//! and the first year that occurs in the text wins. Walking upwards keeps
//! numbers like `2160` (a resolution) from being taken as the year of an
//! older film.

use chrono::Datelike;
use std::ops::Range;

/// Year of the first recorded film.
pub const FIRST_FILM_YEAR: u16 = 1888;

/// A year located inside a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMatch {
    pub year: u16,
    /// Byte range of the matched token, parentheses included when present.
    pub span: Range<usize>,
}

/// Inclusive range of candidate years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    first: u16,
    last: u16,
}

impl YearWindow {
    /// Window `[first, last]`. An inverted range yields an empty window.
    pub fn new(first: u16, last: u16) -> Self {
        Self { first, last }
    }

    /// Window from `earliest` through the current calendar year plus
    /// `future_years`.
    pub fn ending_after_current_year(earliest: u16, future_years: u16) -> Self {
        let current = chrono::Local::now().year().clamp(0, u16::MAX as i32) as u16;
        Self::new(earliest, current.saturating_add(future_years))
    }

    pub fn first(&self) -> u16 {
        self.first
    }

    pub fn last(&self) -> u16 {
        self.last
    }

    /// Candidate years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = u16> {
        self.first..=self.last
    }

    /// Find the lowest year in the window that occurs in `text`.
    ///
    /// For each year `(YYYY)` is tried before the bare `YYYY`.
    pub fn find_in(&self, text: &str) -> Option<YearMatch> {
        for year in self.years() {
            let parenthesized = format!("({})", year);
            if let Some(start) = text.find(&parenthesized) {
                return Some(YearMatch {
                    year,
                    span: start..start + parenthesized.len(),
                });
            }

            let bare = year.to_string();
            if let Some(start) = text.find(&bare) {
                return Some(YearMatch {
                    year,
                    span: start..start + bare.len(),
                });
            }
        }

        None
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::ending_after_current_year(FIRST_FILM_YEAR, 1)
    }
}
