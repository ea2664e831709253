use chrono::NaiveDate;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Number of days left to yield.
    pub fn days(&self) -> usize {
        if self.0 <= self.1 {
            (self.1 - self.0).num_days() as usize + 1
        } else {
            0
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0 <= *date && *date <= self.1
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        let current = self.0;
        match current.succ_opt() {
            Some(next) => self.0 = next,
            // end of the calendar, nothing follows
            None => self.1 = NaiveDate::MIN,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let days = self.days();
        (days, Some(days))
    }
}

impl ExactSizeIterator for DateRange {}
