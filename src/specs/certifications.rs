// src/specs/certifications.rs
//
// Certifications section of a rendered profile page.
//
// Per entry node:
// - title, enterprise, date: first match of their field predicate (required)
// - id: the date predicate is reused; with one match there is no id, with two
//   or more the id is the last token of the second match's text
// - link: second anchor's href, URL-decoded, everything after the last `url=`
// - date text may hold `"<issued> · <expiry>"`
//
// A broken entry is dropped and reported; the rest of the page still yields
// records, in document order.

use scraper::{ElementRef, Html};

use crate::{
    config::consts::{EXPIRY_SEPARATOR, LINK_ANCHOR_INDEX, LINK_MARKER},
    config::options::{SelectorConfig, SelectorMode},
    core::{
        html::{inner_text, nth_anchor_href, parse_document},
        sanitize::last_token,
        select::{CssPredicate, SelectionPredicate},
    },
    date,
    error::{ExtractError, Field},
    progress::Progress,
    record::CertificateRecord,
};

/// Compiled predicates for one page layout.
pub struct CertificationSelectors {
    pub entry: Box<dyn SelectionPredicate>,
    pub title: Box<dyn SelectionPredicate>,
    pub date: Box<dyn SelectionPredicate>,
    pub id: Box<dyn SelectionPredicate>,
    pub enterprise: Box<dyn SelectionPredicate>,
}

impl CertificationSelectors {
    pub fn from_config(cfg: &SelectorConfig) -> Result<Self, ExtractError> {
        let compile = |value: &str| -> Result<Box<dyn SelectionPredicate>, ExtractError> {
            let pred = match cfg.mode {
                SelectorMode::ClassTokens => CssPredicate::from_class_tokens(value)?,
                SelectorMode::Css => CssPredicate::from_css(value)?,
            };
            Ok(Box::new(pred))
        };

        Ok(Self {
            entry: compile(&cfg.certifications)?,
            title: compile(&cfg.title)?,
            date: compile(&cfg.expedition_date)?,
            id: compile(&cfg.certification_id)?,
            enterprise: compile(&cfg.expedition_enterprise)?,
        })
    }
}

/// Field text as found on the page, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub enterprise: String,
    pub date_text: String,
    /// Texts of every node matching the id predicate.
    pub id_matches: Vec<String>,
    pub href: Option<String>,
}

/// Result of one pass over a page.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    /// Document order.
    pub records: Vec<CertificateRecord>,
    pub skipped: Vec<ExtractError>,
    pub entries_seen: usize,
}

impl Extraction {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parse `html` and extract every certification entry.
pub fn extract_html(
    html: &str,
    sel: &CertificationSelectors,
    progress: Option<&mut dyn Progress>,
) -> Extraction {
    let doc = parse_document(html);
    extract(&doc, sel, progress)
}

pub fn extract(
    doc: &Html,
    sel: &CertificationSelectors,
    mut progress: Option<&mut dyn Progress>,
) -> Extraction {
    let entries = sel.entry.select_all(doc);
    logd!("Extract: {} entries via '{}'", entries.len(), sel.entry.describe());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(entries.len());
    }

    let mut out = Extraction { entries_seen: entries.len(), ..Extraction::default() };

    for (idx, entry) in entries.into_iter().enumerate() {
        match read_entry(idx, entry, sel).and_then(|raw| normalize_entry(idx, raw)) {
            Ok(rec) => {
                out.records.push(rec);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(idx);
                }
            }
            Err(e) => {
                loge!("Extract: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(idx, &e);
                }
                out.skipped.push(e);
            }
        }
    }

    logf!(
        "Extract: {} records, {} skipped",
        out.records.len(),
        out.skipped_count()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

/// Pull the raw field texts out of one entry node.
pub fn read_entry(
    idx: usize,
    entry: ElementRef<'_>,
    sel: &CertificationSelectors,
) -> Result<RawEntry, ExtractError> {
    let required = |pred: &dyn SelectionPredicate, field: Field| {
        pred.first_within(entry)
            .map(inner_text)
            .ok_or(ExtractError::MissingField { entry: idx, field })
    };

    let title = required(sel.title.as_ref(), Field::Title)?;
    if title.is_empty() {
        return Err(ExtractError::MissingField { entry: idx, field: Field::Title });
    }
    let date_text = required(sel.date.as_ref(), Field::ExpeditionDate)?;
    let enterprise = required(sel.enterprise.as_ref(), Field::Enterprise)?;

    let id_matches = sel.id.select_within(entry).into_iter().map(inner_text).collect();
    let href = nth_anchor_href(entry, LINK_ANCHOR_INDEX).map(str::to_owned);

    Ok(RawEntry { title, enterprise, date_text, id_matches, href })
}

/// Turn raw field texts into a canonical record.
pub fn normalize_entry(idx: usize, raw: RawEntry) -> Result<CertificateRecord, ExtractError> {
    let as_entry_err = |source| ExtractError::Date { entry: idx, source };

    let (issued, expiry) = split_issued_expiry(&raw.date_text);
    let expedition_date = date::normalize_fragment(issued).map_err(as_entry_err)?;
    let expire_date = expiry
        .map(date::normalize_fragment)
        .transpose()
        .map_err(as_entry_err)?;

    Ok(CertificateRecord {
        title: raw.title,
        enterprise: raw.enterprise,
        id: identifier_from(&raw.id_matches),
        link: link_from_href(raw.href.as_deref()),
        expedition_date,
        expire_date,
        highlight: None,
    })
}

/// `"<issued> · <expiry>"` → (issued, Some(expiry)); otherwise (text, None).
pub fn split_issued_expiry(text: &str) -> (&str, Option<&str>) {
    match text.split_once(EXPIRY_SEPARATOR) {
        Some((issued, expiry)) => (issued, Some(expiry)),
        None => (text, None),
    }
}

/// The first id-predicate match is the date line itself, so a single match
/// means no id. Otherwise the second match holds "<label> <id>".
pub fn identifier_from(matches: &[String]) -> String {
    match matches.get(1) {
        Some(text) => s!(last_token(text)),
        None => s!(),
    }
}

/// Target URL embedded in a redirect href. No href, or one that does not
/// decode to UTF-8, yields "".
pub fn link_from_href(href: Option<&str>) -> String {
    let Some(href) = href else { return s!() };
    match urlencoding::decode(href) {
        Ok(decoded) => decoded.rsplit(LINK_MARKER).next().unwrap_or("").to_string(),
        Err(e) => {
            logd!("Extract: undecodable href '{href}': {e}");
            s!()
        }
    }
}
