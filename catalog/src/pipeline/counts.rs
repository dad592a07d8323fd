//! Card counts keyed by faction or set.

use std::collections::BTreeMap;

use crate::domain::{Card, Faction, FactionId, GameSet, SetId};

/// Cards per loaded faction; neutral cards are not counted.
pub fn count_cards_by_faction(factions: &[Faction], cards: &[Card]) -> BTreeMap<FactionId, usize> {
    factions
        .iter()
        .map(|faction| {
            let total = cards
                .iter()
                .filter(|card| card.faction() == Some(faction.id()))
                .count();
            (faction.id(), total)
        })
        .collect()
}

/// Cards per loaded set.
pub fn count_cards_by_set(sets: &[GameSet], cards: &[Card]) -> BTreeMap<SetId, usize> {
    sets.iter()
        .map(|set| {
            let total = cards.iter().filter(|card| card.set_id() == set.id()).count();
            (set.id(), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::{FactionDraft, GameSetDraft};
    use crate::test_support::{neutral_card, sample_cards};

    fn faction(id: FactionId) -> Faction {
        Faction::new(FactionDraft {
            id,
            name: id.to_string(),
            color: "#c08a3e".to_owned(),
            description: String::new(),
            strengths: vec![],
            weaknesses: vec![],
        })
        .expect("valid faction")
    }

    fn game_set(id: SetId) -> GameSet {
        GameSet::new(GameSetDraft {
            id,
            name: id.to_string(),
            release_year: 2020,
            official: true,
            card_count: 0,
            description: String::new(),
        })
        .expect("valid set")
    }

    #[rstest]
    fn counts_only_loaded_factions() {
        let mut cards = sample_cards();
        cards.push(neutral_card());
        let factions = vec![faction(FactionId::Emperor), faction(FactionId::BeneGesserit)];

        let counts = count_cards_by_faction(&factions, &cards);

        assert_eq!(
            counts,
            BTreeMap::from([(FactionId::Emperor, 1), (FactionId::BeneGesserit, 0)])
        );
    }

    #[rstest]
    fn counts_cards_per_set() {
        let mut cards = sample_cards();
        cards.push(neutral_card());
        let sets = vec![game_set(SetId::Imperium), game_set(SetId::Uprising)];

        let counts = count_cards_by_set(&sets, &cards);

        assert_eq!(
            counts,
            BTreeMap::from([(SetId::Imperium, 1), (SetId::Uprising, 0)])
        );
    }
}
