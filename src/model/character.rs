//! Character records as delivered by the remote API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life status reported for a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl CharacterStatus {
    pub fn all() -> Vec<CharacterStatus> {
        vec![
            CharacterStatus::Alive,
            CharacterStatus::Dead,
            CharacterStatus::Unknown,
        ]
    }

    /// Wire spelling, also used as the status select value
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }

    /// Case-insensitive comparison against a status select value
    pub fn matches(&self, value: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(value)
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named place reference (only the name is kept)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocationRef {
    pub name: String,
}

/// One character entry from the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub location: LocationRef,
    #[serde(default)]
    pub image: String,
}

impl CharacterRecord {
    pub fn location_name(&self) -> &str {
        &self.location.name
    }
}

/// One fetched page: its items plus the total page count reported by the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub items: Vec<CharacterRecord>,
    pub total_pages: u32,
}

/// Pagination block of an API response
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    pub pages: u32,
}

/// Raw response body of `GET {base}?page={n}`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<CharacterRecord>,
}

impl From<CharacterPage> for PageResult {
    fn from(page: CharacterPage) -> Self {
        PageResult {
            items: page.results,
            // The source never reports zero pages for a valid response
            total_pages: page.info.pages.max(1),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: u64, name: &str, status: CharacterStatus) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        status,
        species: "Human".to_string(),
        gender: "Male".to_string(),
        location: LocationRef {
            name: "Earth (C-137)".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_page() {
        let body = r#"{
            "info": {"count": 826, "pages": 42, "next": "x", "prev": null},
            "results": [
                {"id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human",
                 "type": "", "gender": "Male",
                 "origin": {"name": "Earth (C-137)", "url": ""},
                 "location": {"name": "Citadel of Ricks", "url": ""},
                 "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                 "episode": [], "url": "", "created": ""},
                {"id": 8, "name": "Adjudicator Rick", "status": "Dead", "species": "Human",
                 "gender": "Male", "location": {"name": "Citadel of Ricks", "url": ""},
                 "image": ""},
                {"id": 6, "name": "Abadango Cluster Princess", "status": "unknown",
                 "species": "Alien", "gender": "Female",
                 "location": {"name": "Abadango", "url": ""}, "image": ""}
            ]
        }"#;

        let page: CharacterPage = serde_json::from_str(body).unwrap();
        let result = PageResult::from(page);

        assert_eq!(result.total_pages, 42);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.items[0].name, "Rick Sanchez");
        assert_eq!(result.items[0].location_name(), "Citadel of Ricks");
        assert_eq!(result.items[1].status, CharacterStatus::Dead);
        assert_eq!(result.items[2].status, CharacterStatus::Unknown);
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let body = r#"{"id": 3, "name": "Summer", "status": "Missing"}"#;
        let record: CharacterRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.status, CharacterStatus::Unknown);
        assert_eq!(record.location_name(), "");
    }

    #[test]
    fn test_status_matches_case_insensitively() {
        assert!(CharacterStatus::Alive.matches("alive"));
        assert!(CharacterStatus::Alive.matches("ALIVE"));
        assert!(CharacterStatus::Unknown.matches("Unknown"));
        assert!(!CharacterStatus::Dead.matches("Alive"));
    }

    #[test]
    fn test_zero_pages_clamped_to_one() {
        let page = CharacterPage {
            info: PageInfo { pages: 0 },
            results: Vec::new(),
        };
        assert_eq!(PageResult::from(page).total_pages, 1);
    }
}
