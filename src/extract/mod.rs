//! Pure extraction over already-parsed catalog pages.

use scraper::ElementRef;

mod detail;
mod search;
mod similarity;
mod time;

pub use detail::extract_detail;
pub use search::extract_search;
pub use similarity::similarity_score;
pub use time::parse_time;

/// Which hour field a time label feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeKind {
    Main,
    Completionist,
}

/// Classify a time-entry label by prefix. The catalog varies the wording per
/// game ("Main Story", "Single-Player", "Solo"); labels outside the known set
/// (e.g. "Co-Op", "Vs.") are ignored.
pub(crate) fn classify_label(label: &str) -> Option<TimeKind> {
    if label.starts_with("Main Story")
        || label.starts_with("Single-Player")
        || label.starts_with("Solo")
    {
        Some(TimeKind::Main)
    } else if label.starts_with("Completionist") {
        Some(TimeKind::Completionist)
    } else {
        None
    }
}

/// First text node directly under an element, skipping nested markup.
pub(crate) fn immediate_text<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element
        .children()
        .find_map(|child| child.value().as_text().map(|text| &**text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_label_prefixes() {
        assert_eq!(classify_label("Main Story"), Some(TimeKind::Main));
        assert_eq!(classify_label("Main Story (DLC)"), Some(TimeKind::Main));
        assert_eq!(classify_label("Single-Player"), Some(TimeKind::Main));
        assert_eq!(classify_label("Solo"), Some(TimeKind::Main));
        assert_eq!(
            classify_label("Completionist"),
            Some(TimeKind::Completionist)
        );
    }

    #[test]
    fn ignores_other_labels() {
        assert_eq!(classify_label("Co-Op"), None);
        assert_eq!(classify_label("Vs."), None);
        // Prefix match is case-sensitive, as on the source pages.
        assert_eq!(classify_label("main story"), None);
    }
}
