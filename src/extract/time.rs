use crate::error::{HltbError, Result};

// The catalog renders half hours as the &#189; entity; the HTML parser
// decodes it to '½', but the raw reference is accepted too in case a value
// arrives undecoded.
const HALF_MARKERS: [&str; 2] = ["½", "&#189;"];

/// Parse a play-time token as it appears on the catalog pages.
///
/// Accepted shapes: the unknown marker `"--"` (maps to `0`), a single
/// quantity like `"12 Hours"` or `"65½ Hours"`, or a range like
/// `"5 Hours - 12 Hours"` which yields the mean of its endpoints. Anything
/// else is a hard error so a source-format change surfaces instead of being
/// masked as zero.
pub fn parse_time(text: &str) -> Result<f64> {
    if text == "--" {
        return Ok(0.0);
    }
    if let Some((low, high)) = text.split_once(" - ") {
        return Ok((single_quantity(low)? + single_quantity(high)?) / 2.0);
    }
    single_quantity(text)
}

/// One quantity, e.g. `"12 Hours"` or `"5½ Hours"`: the integer before the
/// unit word, plus a half when the half marker follows it.
fn single_quantity(text: &str) -> Result<f64> {
    let (token, _unit) = text
        .split_once(' ')
        .ok_or_else(|| HltbError::Parse(format!("duration {text:?} has no unit word")))?;

    if let Some(idx) = HALF_MARKERS.iter().find_map(|m| token.find(m)) {
        let hours = parse_whole(&token[..idx], text)?;
        Ok(hours + 0.5)
    } else {
        parse_whole(token, text)
    }
}

fn parse_whole(digits: &str, original: &str) -> Result<f64> {
    digits
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| HltbError::Parse(format!("duration {original:?} has no leading integer")))
}
