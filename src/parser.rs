//! Extraction of structured values from free-text LLM replies.
//!
//! The model's output is untrusted input: a strict pattern either matches
//! or it does not, and "nothing matched" is an ordinary outcome reported as
//! `None`, never a panic or an error. These functions have no knowledge of
//! the LLM transport and are tested against canned text.

use crate::schema::{CuttingQuote, CuttingRequest, Prospect};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// One prospect per line, shaped `- (NAME; DESCRIPTION; LAT; LON)`. Name
/// and description may not contain `;` or `)`; coordinates are decimal
/// numbers with an optional sign and optional fractional part.
static PROSPECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"-\s*\(\s*([^;)]*?)\s*;\s*([^;)]*?)\s*;\s*(-?\d+(?:\.\d+)?)\s*;\s*(-?\d+(?:\.\d+)?)\s*\)",
    )
    .expect("prospect pattern compiles")
});

/// A monetary amount after `R$`, Brazilian locale: optional `.` thousands
/// separators and a `,` decimal part, e.g. `1.234,56` or `12,50`.
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"R\$\s*(\d+\.?\d*,\d+|\d+,\d+|\d+\.?\d*)").expect("price pattern compiles"));

/// The final line the cutting prompt asks for. When present, its amount
/// wins over any intermediate cost-breakdown figure.
static LABELED_PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)PREÇO\s+UNITÁRIO\s+ESTIMADO[:\s]*R\$\s*(\d+\.?\d*,\d+|\d+,\d+|\d+\.?\d*)")
        .expect("labeled price pattern compiles")
});

/// Extracts all prospect tuples from a reply, in the order they occur.
///
/// Returns `None` when no line matches the expected shape ("no data
/// extracted"), which callers must distinguish from a transport failure. A
/// match whose coordinates fail to parse is dropped on its own; it does not
/// abort the remaining matches.
pub fn parse_prospects(text: &str) -> Option<Vec<Prospect>> {
    let prospects: Vec<Prospect> = PROSPECT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let latitude: f64 = caps[3].parse().ok()?;
            let longitude: f64 = caps[4].parse().ok()?;
            Some(Prospect {
                name: caps[1].trim().to_string(),
                description: caps[2].trim().to_string(),
                latitude,
                longitude,
            })
        })
        .collect();

    if prospects.is_empty() {
        debug!("No prospect lines matched in LLM reply");
        None
    } else {
        Some(prospects)
    }
}

/// Extracts the estimated unit price from a cutting-quote reply.
///
/// Prefers the amount on the requested `PREÇO UNITÁRIO ESTIMADO` line; when
/// that label is absent it falls back to the first `R$` amount anywhere in
/// the text. Returns `None` when no amount is found, in which case no order
/// total may be computed.
pub fn parse_unit_price(text: &str) -> Option<f64> {
    let caps = LABELED_PRICE_RE
        .captures(text)
        .or_else(|| PRICE_RE.captures(text))?;
    parse_brl(&caps[1])
}

/// Builds a quote from a reply, multiplying the extracted unit price by the
/// requested quantity. `None` when no price could be extracted.
pub fn quote_from_response(request: CuttingRequest, response: &str) -> Option<CuttingQuote> {
    parse_unit_price(response).map(|unit_price| CuttingQuote::from_unit_price(request, unit_price))
}

/// Normalizes a Brazilian-locale amount: `.` thousands separators are
/// removed, the `,` decimal separator becomes `.`.
fn parse_brl(raw: &str) -> Option<f64> {
    raw.replace('.', "").replace(',', ".").parse().ok()
}
