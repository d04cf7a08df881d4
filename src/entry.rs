use serde::{Deserialize, Serialize};

/// One game's play-time data as scraped from the catalog.
///
/// `main_hours` and `completionist_hours` are always finite and non-negative;
/// a value the page does not carry is exactly `0`. `similarity` is in [0, 1]
/// rounded to two decimals, and fixed at `1.0` for detail-page lookups where
/// there is no query to compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Catalog-internal id. Digits in practice, but treated as opaque text.
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub main_hours: f64,
    pub completionist_hours: f64,
    pub similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_fields() {
        let entry = GameEntry {
            id: "6974".to_string(),
            name: "Celeste".to_string(),
            image_url: "https://howlongtobeat.com/gamefiles/celeste.jpg".to_string(),
            main_hours: 8.0,
            completionist_hours: 20.5,
            similarity: 1.0,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "6974");
        assert_eq!(value["main_hours"], 8.0);
        assert_eq!(value["completionist_hours"], 20.5);
        assert_eq!(value["similarity"], 1.0);
    }
}
