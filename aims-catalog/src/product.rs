use serde::{Deserialize, Serialize};

/// Kinds of media the store sells
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Book,
    Cd,
    Dvd,
    Lp,
}

/// A catalog entry that can be put in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    pub id: i32,
    pub title: String,
    pub category: MediaType,
    /// Unit price in the smallest currency unit
    pub price: i64,
}

impl Media {
    pub fn new(id: i32, title: impl Into<String>, category: MediaType, price: i64) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_serialization() {
        let media = Media::new(38, "Abbey Road", MediaType::Lp, 450_000);
        let json = serde_json::to_value(&media).unwrap();

        assert_eq!(json["id"], 38);
        assert_eq!(json["category"], "LP");
        assert_eq!(json["price"], 450_000);
    }
}
