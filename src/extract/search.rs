use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{classify_label, immediate_text, parse_time, similarity_score, TimeKind};
use crate::config::CatalogConfig;
use crate::entry::GameEntry;
use crate::error::{HltbError, Result};

static RESULTS_HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static RESULT_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());
static TITLE_ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static THUMBNAIL: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());
static DETAILS_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".search_list_details_block").unwrap());

static ID_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]id=([^&]+)").unwrap());

/// Build [`GameEntry`] values from a parsed search-results page, in the order
/// the results appear on it. No sorting happens here; `similarity` is the
/// caller's handle for ranking.
///
/// A page without the results heading yields an empty vec: that covers both
/// "no results" and a page shape we do not recognize, and neither is an
/// error. A missing or broken time block on one result only zeroes that
/// result's hours; a result without its title anchor or id link is a
/// structural failure for the whole call.
pub fn extract_search(document: &Html, query: &str, config: &CatalogConfig) -> Result<Vec<GameEntry>> {
    if document.select(&RESULTS_HEADING).next().is_none() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for item in document.select(&RESULT_ITEM) {
        let anchor = item.select(&TITLE_ANCHOR).next().ok_or_else(|| {
            HltbError::Structure("search result: missing title anchor".to_string())
        })?;
        let name = anchor.value().attr("title").map(str::trim).ok_or_else(|| {
            HltbError::Structure("search result: anchor has no title attribute".to_string())
        })?;
        let href = anchor.value().attr("href").ok_or_else(|| {
            HltbError::Structure("search result: anchor has no href".to_string())
        })?;
        let id = ID_PARAM
            .captures(href)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                HltbError::Structure(format!("search result: no id parameter in {href:?}"))
            })?;
        let image_src = anchor
            .select(&THUMBNAIL)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or_else(|| {
                HltbError::Structure("search result: missing thumbnail image".to_string())
            })?;

        let (main_hours, completionist_hours) = item_times(&item);

        entries.push(GameEntry {
            id: id.to_string(),
            name: name.to_string(),
            image_url: config.image_url(image_src),
            main_hours,
            completionist_hours,
            similarity: similarity_score(name, query),
        });
    }

    Ok(entries)
}

/// Best-effort walk of one result's time block.
///
/// The block's inner wrapper alternates label and value nodes separated by
/// whitespace text, so a label at child index i pairs with the value at
/// i + 2. The catalog is inconsistent here; any miss (absent block, odd node
/// layout, unparsable value) stops the walk and keeps whatever was already
/// assigned, without failing the surrounding extraction.
fn item_times(item: &ElementRef) -> (f64, f64) {
    let mut main_hours = 0.0;
    let mut completionist_hours = 0.0;

    let inner = item
        .select(&DETAILS_BLOCK)
        .next()
        .and_then(|block| block.children().find_map(ElementRef::wrap));
    let Some(inner) = inner else {
        return (main_hours, completionist_hours);
    };

    let nodes: Vec<_> = inner.children().collect();
    let mut i = 0;
    while i < nodes.len() {
        let Some(label_element) = ElementRef::wrap(nodes[i]) else {
            i += 1;
            continue;
        };
        let label = immediate_text(&label_element).unwrap_or("").trim();
        if let Some(kind) = classify_label(label) {
            let value = nodes
                .get(i + 2)
                .copied()
                .and_then(ElementRef::wrap)
                .and_then(|element| immediate_text(&element));
            let Some(value) = value else {
                break;
            };
            let Ok(hours) = parse_time(value.trim()) else {
                break;
            };
            match kind {
                TimeKind::Main => main_hours = hours,
                TimeKind::Completionist => completionist_hours = hours,
            }
        }
        i += 2;
    }

    (main_hours, completionist_hours)
}
