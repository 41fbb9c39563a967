// src/engine/types.rs
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::InvalidDateRangeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Date,
    Name,
}

impl SortField {
    /// Order a field starts in when it becomes the active sort.
    pub fn default_order(self) -> SortOrder {
        match self {
            SortField::Date => SortOrder::Desc,
            SortField::Name => SortOrder::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Date => "Date",
            SortField::Name => "Name",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "name" | "title" => Ok(SortField::Name),
            other => Err(format!("unknown sort field '{other}' (expected date|name)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Apply this direction to an ascending comparison.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{other}' (expected asc|desc)")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Everything the user can change about the list. The engine output is a
/// pure function of this plus the record set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: s!(),
            start_date: None,
            end_date: None,
            sort_field: SortField::Date,
            sort_order: SortField::Date.default_order(),
        }
    }
}

impl QueryState {
    /// Clicking the active field flips the order; clicking the other field
    /// switches to it with that field's default order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flip();
        } else {
            self.sort_field = field;
            self.sort_order = field.default_order();
        }
    }

    pub fn validate_range(&self) -> Result<(), InvalidDateRangeError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start > end => Err(InvalidDateRangeError { start, end }),
            _ => Ok(()),
        }
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_is_date_desc() {
        let q = QueryState::default();
        assert_eq!((q.sort_field, q.sort_order), (SortField::Date, SortOrder::Desc));
    }

    #[test]
    fn toggle_same_field_flips_other_field_resets() {
        let mut q = QueryState::default();
        q.toggle_sort(SortField::Date);
        assert_eq!(q.sort_order, SortOrder::Asc);

        q.toggle_sort(SortField::Name);
        assert_eq!((q.sort_field, q.sort_order), (SortField::Name, SortOrder::Asc));
        q.toggle_sort(SortField::Name);
        assert_eq!(q.sort_order, SortOrder::Desc);

        q.toggle_sort(SortField::Date);
        assert_eq!((q.sort_field, q.sort_order), (SortField::Date, SortOrder::Desc));
    }

    #[test]
    fn range_validation() {
        let mut q = QueryState::default();
        assert!(q.validate_range().is_ok());
        q.start_date = Some(day(2023, 6, 1));
        assert!(q.validate_range().is_ok());
        q.end_date = Some(day(2023, 1, 1));
        assert_eq!(
            q.validate_range(),
            Err(InvalidDateRangeError { start: day(2023, 6, 1), end: day(2023, 1, 1) })
        );
        q.end_date = Some(day(2023, 6, 1));
        assert!(q.validate_range().is_ok());
    }

    #[test]
    fn parse_sort_args() {
        assert_eq!("NAME".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("size".parse::<SortField>().is_err());
    }
}
