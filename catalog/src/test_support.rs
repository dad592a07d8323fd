//! Sample records shared by unit tests (in `src/`) and integration tests
//! (in `tests/`).
//!
//! Only compiled for tests or with the `test-support` feature.

use crate::domain::{
    Article, ArticleDraft, Card, CardCell, CardDraft, CardProperty, FactionId, Leader,
    LeaderComplexity, LeaderDraft, Player, PlayerDraft, SetId,
};

/// Build an official-or-fan card depending on its set.
#[expect(clippy::too_many_arguments, reason = "flat fixture rows read best inline")]
pub fn card(
    id: u32,
    slug: &str,
    name: &str,
    cost: u32,
    set_id: SetId,
    faction: Option<FactionId>,
    cell: CardCell,
    properties: &[CardProperty],
) -> Card {
    Card::new(CardDraft {
        id,
        slug: slug.to_owned(),
        name: name.to_owned(),
        name_en: name.to_owned(),
        cost,
        set_id,
        faction,
        cell,
        properties: properties.to_vec(),
        image_url: format!("https://placehold.co/432x600?text={id}"),
        is_official: !matches!(set_id, SetId::FanSietch | SetId::FanChoam),
        text: String::new(),
    })
    .expect("sample card is valid")
}

/// Three cards covering three sets, factions and cells.
pub fn sample_cards() -> Vec<Card> {
    vec![
        card(
            1,
            "imperial-spy",
            "Imperial Spy",
            3,
            SetId::RiseOfIx,
            Some(FactionId::Emperor),
            CardCell::Spy,
            &[CardProperty::PurchaseBonus],
        ),
        card(
            2,
            "guild-embassy",
            "Guild Embassy",
            5,
            SetId::Immortality,
            Some(FactionId::SpacingGuild),
            CardCell::City,
            &[CardProperty::Teamwork, CardProperty::Choam],
        ),
        card(
            3,
            "sietch-mentor",
            "Sietch Mentor",
            2,
            SetId::FanSietch,
            Some(FactionId::Fremen),
            CardCell::Desert,
            &[CardProperty::PurchaseBonus],
        ),
    ]
}

/// A neutral card with no faction.
pub fn neutral_card() -> Card {
    card(
        4,
        "convincing-argument",
        "Convincing Argument",
        0,
        SetId::Imperium,
        None,
        CardCell::Other,
        &[],
    )
}

fn leader(
    id: u32,
    slug: &str,
    name: &str,
    house: &str,
    faction: FactionId,
    ability: &str,
    set_id: SetId,
) -> Leader {
    Leader::new(LeaderDraft {
        id,
        slug: slug.to_owned(),
        name: name.to_owned(),
        house: house.to_owned(),
        faction,
        ability: ability.to_owned(),
        complexity: LeaderComplexity::Medium,
        set_id,
        image_url: format!("https://placehold.co/480x640?text={id}"),
    })
    .expect("sample leader is valid")
}

/// Four leaders, one per faction.
pub fn sample_leaders() -> Vec<Leader> {
    vec![
        leader(
            1,
            "baron-harkonnen",
            "Baron Harkonnen",
            "House Harkonnen",
            FactionId::Emperor,
            "Intrigue pressure and conflict spikes.",
            SetId::Imperium,
        ),
        leader(
            2,
            "stilgar",
            "Stilgar",
            "Fremen",
            FactionId::Fremen,
            "Desert tempo with combat efficiency.",
            SetId::Bloodlines,
        ),
        leader(
            3,
            "mohiam",
            "Reverend Mother Mohiam",
            "Bene Gesserit",
            FactionId::BeneGesserit,
            "Punishes inefficient deck building.",
            SetId::Uprising,
        ),
        leader(
            4,
            "thufir-hawat",
            "Thufir Hawat",
            "Atreides",
            FactionId::SpacingGuild,
            "Efficient intel conversion into economy.",
            SetId::Uprising,
        ),
    ]
}

/// Build a player with losses derived from games and wins.
pub fn player(
    id: u32,
    nickname: &str,
    rating: i32,
    games_played: u32,
    wins: u32,
    season: &str,
) -> Player {
    Player::new(PlayerDraft {
        id,
        nickname: nickname.to_owned(),
        rating,
        games_played,
        wins,
        losses: games_played.saturating_sub(wins),
        favorite_faction: FactionId::Fremen,
        season: season.to_owned(),
    })
    .expect("sample player is valid")
}

/// Three players across two seasons; two qualify for tournament seeding.
pub fn sample_players() -> Vec<Player> {
    vec![
        player(1, "ArrakisWolf", 1880, 120, 75, "2025-S2"),
        player(2, "GuildDesk", 1710, 84, 48, "2025-S2"),
        player(3, "NeedleVoice", 1580, 42, 21, "2025-S1"),
    ]
}

/// Build an article with the given publish date, tags and related slugs.
pub fn article(
    id: u32,
    slug: &str,
    title: &str,
    published_at: &str,
    tags: &[&str],
    related_slugs: &[&str],
) -> Article {
    Article::new(ArticleDraft {
        id,
        slug: slug.to_owned(),
        title: title.to_owned(),
        excerpt: format!("{title} in brief."),
        content: String::new(),
        image_url: String::new(),
        published_at: published_at.to_owned(),
        author: "Irulan".to_owned(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        related_slugs: related_slugs.iter().map(|slug| (*slug).to_owned()).collect(),
    })
    .expect("sample article is valid")
}

/// Three articles; the recap links to one live and one missing article.
pub fn sample_articles() -> Vec<Article> {
    vec![
        article(
            1,
            "season-two-opens",
            "Season two opens",
            "2025-06-01",
            &["rating"],
            &[],
        ),
        article(
            2,
            "tournament-recap",
            "Tournament recap",
            "2025-07-15",
            &["tournament", "rating"],
            &["season-two-opens", "removed-article"],
        ),
        article(
            3,
            "bloodlines-preview",
            "Bloodlines preview",
            "2025-03-20",
            &["preview"],
            &[],
        ),
    ]
}
