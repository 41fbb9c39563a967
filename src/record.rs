// src/record.rs
//
// Canonical certificate record and the in-memory record set.
//
// Dates travel as `YYYY/MM/DD` strings but are held as `NaiveDate` so that
// comparisons are plain calendar comparisons (no clock, no timezone). The
// string is split into its three numbers by hand; it is never handed to a
// generic date parser.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::consts::NO_LINK_SENTINEL;
use crate::error::DateError;

/// A calendar day rendered as zero-padded `YYYY/MM/DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse `YYYY/MM/DD` by splitting on `/`.
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidCanonical { raw: s!(raw) };

        let mut parts = raw.trim().split('/');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        let day: u32 = d.parse().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// e.g. `Nov 2023`
    pub fn display_month_year(&self) -> String {
        self.0.format("%b %Y").to_string()
    }

    /// e.g. `November 1, 2023`
    pub fn display_long(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.0.year(), self.0.month(), self.0.day())
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One certification as stored and queried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub title: String,
    pub enterprise: String,
    /// Issuer credential id, empty when the page shows none.
    #[serde(default)]
    pub id: String,
    /// Credential URL, empty when unavailable.
    #[serde(default)]
    pub link: String,
    pub expedition_date: CanonicalDate,
    #[serde(default, alias = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<CanonicalDate>,
    /// Pin flag set by an annotation step, never by extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

impl CertificateRecord {
    pub fn new(
        title: impl Into<String>,
        enterprise: impl Into<String>,
        expedition_date: CanonicalDate,
    ) -> Self {
        Self {
            title: title.into(),
            enterprise: enterprise.into(),
            id: s!(),
            link: s!(),
            expedition_date,
            expire_date: None,
            highlight: None,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.highlight == Some(true)
    }

    /// Older exports wrote the literal `undefined` for a missing link.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != NO_LINK_SENTINEL
    }

    /// Expired strictly before `today`. Records without an expiry never expire.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expire_date.is_some_and(|d| d.date() < today)
    }

    /// Columns in export order; an absent expiry is an empty cell.
    pub fn tsv_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.enterprise.clone(),
            self.id.clone(),
            self.link.clone(),
            self.expedition_date.to_string(),
            self.expire_date.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

/// The loaded record set. Order is load order; duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<CertificateRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<CertificateRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CertificateRecord] {
        &self.records
    }

    pub fn get(&self, i: usize) -> Option<&CertificateRecord> {
        self.records.get(i)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CertificateRecord> {
        self.records.iter()
    }

    /// Mark the records at `positions` as highlighted. Out-of-range positions
    /// are ignored. Returns how many records were marked.
    pub fn pin_positions(&mut self, positions: &[usize]) -> usize {
        let mut marked = 0;
        for &pos in positions {
            if let Some(rec) = self.records.get_mut(pos) {
                rec.highlight = Some(true);
                marked += 1;
            }
        }
        marked
    }
}

impl From<Vec<CertificateRecord>> for RecordSet {
    fn from(records: Vec<CertificateRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a CertificateRecord;
    type IntoIter = std::slice::Iter<'a, CertificateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
