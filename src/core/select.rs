// src/core/select.rs
//
// Node selection behind a trait so the matching strategy (obfuscated class
// tokens today, test ids or roles tomorrow) can change without touching the
// extractor.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

pub trait SelectionPredicate {
    /// Every matching node in the document, in document order.
    fn select_all<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>>;

    /// Matching descendants of `scope`, in document order.
    fn select_within<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>>;

    fn first_within<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.select_within(scope).into_iter().next()
    }

    /// Human-readable source, for logs.
    fn describe(&self) -> &str;
}

/// A compiled CSS selector. Built once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct CssPredicate {
    source: String,
    selector: Selector,
}

impl CssPredicate {
    pub fn from_css(css: &str) -> Result<Self, ExtractError> {
        let selector = Selector::parse(css).map_err(|e| ExtractError::Selector {
            selector: s!(css),
            reason: e.to_string(),
        })?;
        Ok(Self { source: s!(css), selector })
    }

    /// `"a b c"` → nodes carrying all of the classes `a`, `b` and `c`.
    pub fn from_class_tokens(tokens: &str) -> Result<Self, ExtractError> {
        if tokens.split_whitespace().next().is_none() {
            return Err(ExtractError::Selector {
                selector: s!(tokens),
                reason: s!("empty class token list"),
            });
        }
        Self::from_css(&class_tokens_to_css(tokens))
    }
}

impl SelectionPredicate for CssPredicate {
    fn select_all<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&self.selector).collect()
    }

    fn select_within<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope.select(&self.selector).collect()
    }

    fn describe(&self) -> &str {
        &self.source
    }
}

/// Compound class selector from a space-separated token list.
pub fn class_tokens_to_css(tokens: &str) -> String {
    tokens
        .split_whitespace()
        .map(|t| join!(".", &escape_ident(t)))
        .collect()
}

/// Escape a class token so it is a valid CSS identifier
/// (leading digits become code-point escapes).
fn escape_ident(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    for (i, ch) in token.chars().enumerate() {
        let leading_digit = ch.is_ascii_digit()
            && (i == 0 || (i == 1 && token.starts_with('-')));
        if leading_digit {
            out.push_str(&format!("\\{:x} ", ch as u32));
        } else if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || !ch.is_ascii() {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}
