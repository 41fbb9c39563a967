// src/data.rs
//
// Ordered view over the loaded record set.
//
// The view holds positions into the `RecordSet`, never copies of records.
// It is rebuilt from scratch on every query change.

use crate::record::{CertificateRecord, RecordSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedView {
    /// Positions of kept records in the record set, in display order.
    pub row_ix: Vec<usize>,
}

impl OrderedView {
    pub fn new(row_ix: Vec<usize>) -> Self {
        Self { row_ix }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by projected index (no cloning).
    pub fn get<'a>(&self, set: &'a RecordSet, i: usize) -> Option<&'a CertificateRecord> {
        self.row_ix.get(i).and_then(|&ix| set.get(ix))
    }

    /// Records in view order.
    pub fn iter<'a>(&'a self, set: &'a RecordSet) -> impl Iterator<Item = &'a CertificateRecord> + 'a {
        self.row_ix.iter().filter_map(move |&ix| set.get(ix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CanonicalDate;

    fn set() -> RecordSet {
        let d = CanonicalDate::parse("2020/01/01").unwrap();
        RecordSet::new(vec![
            CertificateRecord::new("A", "E", d),
            CertificateRecord::new("B", "E", d),
            CertificateRecord::new("C", "E", d),
        ])
    }

    #[test]
    fn projection_follows_row_ix() {
        let set = set();
        let view = OrderedView::new(vec![2, 0]);
        let titles: Vec<&str> = view.iter(&set).map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A"]);
        assert_eq!(view.get(&set, 1).map(|r| r.title.as_str()), Some("A"));
        assert!(view.get(&set, 2).is_none());
    }

    #[test]
    fn empty_view_yields_nothing() {
        let set = set();
        let view = OrderedView::default();
        assert!(view.is_empty());
        assert_eq!(view.iter(&set).count(), 0);
    }
}
