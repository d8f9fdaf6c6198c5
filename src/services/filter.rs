//! Status filter over the currently loaded page

use crate::model::character::CharacterRecord;

/// Keep the records whose status equals `status`, ignoring case.
///
/// An absent or empty status keeps everything. Order is preserved and the
/// input is left untouched.
pub fn filter_by_status(items: &[CharacterRecord], status: Option<&str>) -> Vec<CharacterRecord> {
    match status.map(str::trim).filter(|s| !s.is_empty()) {
        None => items.to_vec(),
        Some(status) => items
            .iter()
            .filter(|character| character.status.matches(status))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::character::{sample, CharacterStatus};

    fn page() -> Vec<CharacterRecord> {
        vec![
            sample(1, "Rick", CharacterStatus::Alive),
            sample(2, "Morty", CharacterStatus::Alive),
            sample(3, "Birdperson", CharacterStatus::Dead),
            sample(4, "Mr. Poopybutthole", CharacterStatus::Unknown),
            sample(5, "Summer", CharacterStatus::Alive),
        ]
    }

    #[test]
    fn test_empty_status_is_identity() {
        let items = page();
        assert_eq!(filter_by_status(&items, None), items);
        assert_eq!(filter_by_status(&items, Some("")), items);
    }

    #[test]
    fn test_filter_alive_preserves_order() {
        let items = page();
        let names: Vec<String> = filter_by_status(&items, Some("Alive"))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Rick", "Morty", "Summer"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = page();
        assert_eq!(
            filter_by_status(&items, Some("alive")),
            filter_by_status(&items, Some("ALIVE"))
        );
        let unknown = filter_by_status(&items, Some("Unknown"));
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].id, 4);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = page();
        let once = filter_by_status(&items, Some("Alive"));
        let twice = filter_by_status(&once, Some("Alive"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let items = vec![sample(1, "Rick", CharacterStatus::Alive)];
        assert!(filter_by_status(&items, Some("Dead")).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let items = page();
        let before = items.clone();
        let _ = filter_by_status(&items, Some("Dead"));
        assert_eq!(items, before);
    }
}
