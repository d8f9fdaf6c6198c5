//! Result rendering: turns character records into visual nodes and keeps
//! the pagination indicator in step with the page counters.

use crate::model::character::CharacterRecord;
use crate::model::surface::{CharacterCard, ResultNode, UiSurface};

/// Shown when there is nothing to render
pub const EMPTY_RESULTS_MESSAGE: &str = "Nenhum personagem encontrado com os filtros selecionados.";

/// Build the card for one character
pub fn build_card(character: &CharacterRecord) -> CharacterCard {
    CharacterCard {
        image_url: character.image.clone(),
        name: character.name.clone(),
        status: character.status,
        status_text: format!("{} - {}", character.status, character.gender),
        species_text: format!("Espécie: {}", character.species),
        location_text: format!("Localização: {}", character.location_name()),
    }
}

/// Visual nodes for `characters`, in input order
pub fn build_nodes(characters: &[CharacterRecord]) -> Vec<ResultNode> {
    if characters.is_empty() {
        return vec![ResultNode::Placeholder(EMPTY_RESULTS_MESSAGE.to_string())];
    }
    characters
        .iter()
        .map(|c| ResultNode::Card(build_card(c)))
        .collect()
}

/// Replace the results container with cards for `characters`
pub fn render_characters(surface: &mut dyn UiSurface, characters: &[CharacterRecord]) {
    let nodes = build_nodes(characters);
    tracing::debug!(cards = characters.len(), "results rendered");
    surface.replace_results(nodes);
}

pub fn page_info_text(current_page: u32, total_pages: u32) -> String {
    format!("Página {} de {}", current_page, total_pages)
}

/// Write the page indicator and the prev/next disabled flags
pub fn update_pagination(surface: &mut dyn UiSurface, current_page: u32, total_pages: u32) {
    surface.set_page_info(page_info_text(current_page, total_pages));
    surface.set_prev_disabled(current_page == 1);
    surface.set_next_disabled(current_page == total_pages);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::character::{sample, CharacterStatus};
    use crate::model::surface::Surface;

    #[test]
    fn test_card_fields() {
        let card = build_card(&sample(1, "Rick", CharacterStatus::Alive));
        assert_eq!(card.name, "Rick");
        assert_eq!(card.status_text, "Alive - Male");
        assert_eq!(card.species_text, "Espécie: Human");
        assert_eq!(card.location_text, "Localização: Earth (C-137)");
        assert!(card.image_url.ends_with("/1.jpeg"));
    }

    #[test]
    fn test_render_replaces_previous_output() {
        let mut surface = Surface::new();
        render_characters(
            &mut surface,
            &[
                sample(1, "Rick", CharacterStatus::Alive),
                sample(2, "Morty", CharacterStatus::Alive),
                sample(3, "Jerry", CharacterStatus::Alive),
            ],
        );
        assert_eq!(surface.card_count(), 3);

        render_characters(&mut surface, &[sample(4, "Beth", CharacterStatus::Alive)]);
        assert_eq!(surface.results.len(), 1);
        match &surface.results[0] {
            ResultNode::Card(card) => assert_eq!(card.name, "Beth"),
            other => panic!("expected card, got {:?}", other),
        }
    }

    #[test]
    fn test_render_empty_shows_placeholder_only() {
        let mut surface = Surface::new();
        render_characters(&mut surface, &[]);
        assert_eq!(
            surface.results,
            vec![ResultNode::Placeholder(EMPTY_RESULTS_MESSAGE.to_string())]
        );
        assert_eq!(surface.card_count(), 0);
    }

    #[test]
    fn test_pagination_boundaries() {
        let mut surface = Surface::new();

        update_pagination(&mut surface, 1, 42);
        assert_eq!(surface.page_info, "Página 1 de 42");
        assert!(surface.prev_disabled);
        assert!(!surface.next_disabled);

        update_pagination(&mut surface, 42, 42);
        assert!(!surface.prev_disabled);
        assert!(surface.next_disabled);

        update_pagination(&mut surface, 1, 1);
        assert!(surface.prev_disabled);
        assert!(surface.next_disabled);
    }
}
