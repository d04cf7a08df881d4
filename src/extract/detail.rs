use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{classify_label, immediate_text, parse_time, TimeKind};
use crate::config::CatalogConfig;
use crate::entry::GameEntry;
use crate::error::{HltbError, Result};

static PROFILE_HEADER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".profile_header").unwrap());
static GAME_IMAGE: Lazy<Selector> = Lazy::new(|| Selector::parse(".game_image img").unwrap());
static TIME_ENTRIES: Lazy<Selector> = Lazy::new(|| Selector::parse(".game_times li").unwrap());
static ENTRY_LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("h5").unwrap());
static ENTRY_VALUE: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());

/// Build a [`GameEntry`] from a parsed detail page.
///
/// The header and cover image are required; their absence means the page is
/// not the expected shape and the call fails. A missing time list is normal
/// (unreleased or obscure games) and leaves both hour fields at zero. When a
/// game lists several labels feeding the same field, the last one in document
/// order wins.
pub fn extract_detail(document: &Html, game_id: &str, config: &CatalogConfig) -> Result<GameEntry> {
    let header = document
        .select(&PROFILE_HEADER)
        .next()
        .ok_or_else(|| HltbError::Structure("detail page: missing profile header".to_string()))?;
    let name = immediate_text(&header)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| HltbError::Structure("detail page: profile header has no text".to_string()))?;

    let image_src = document
        .select(&GAME_IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .ok_or_else(|| HltbError::Structure("detail page: missing cover image".to_string()))?;

    let mut main_hours = 0.0;
    let mut completionist_hours = 0.0;
    for item in document.select(&TIME_ENTRIES) {
        let label_element = item.select(&ENTRY_LABEL).next().ok_or_else(|| {
            HltbError::Structure("detail page: time entry without a label".to_string())
        })?;
        let label = immediate_text(&label_element).unwrap_or("").trim();
        let Some(kind) = classify_label(label) else {
            continue;
        };

        let value = item
            .select(&ENTRY_VALUE)
            .next()
            .and_then(|div| immediate_text(&div))
            .ok_or_else(|| {
                HltbError::Structure(format!("detail page: time entry {label:?} has no value"))
            })?;
        let hours = parse_time(value.trim())?;
        match kind {
            TimeKind::Main => main_hours = hours,
            TimeKind::Completionist => completionist_hours = hours,
        }
    }

    Ok(GameEntry {
        id: game_id.to_string(),
        name: name.to_string(),
        image_url: config.image_url(image_src),
        main_hours,
        completionist_hours,
        similarity: 1.0,
    })
}
