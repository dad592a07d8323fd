//! Unit tests for catalog record construction.

use rstest::rstest;

use super::*;

fn card_draft(slug: &str, name: &str) -> CardDraft {
    CardDraft {
        id: 1,
        slug: slug.to_owned(),
        name: name.to_owned(),
        name_en: "Guild Embassy".to_owned(),
        cost: 5,
        set_id: SetId::Immortality,
        faction: Some(FactionId::SpacingGuild),
        cell: CardCell::City,
        properties: vec![CardProperty::Teamwork, CardProperty::Choam],
        image_url: "https://placehold.co/432x600".to_owned(),
        is_official: true,
        text: String::new(),
    }
}

fn player_draft(nickname: &str, season: &str) -> PlayerDraft {
    PlayerDraft {
        id: 7,
        nickname: nickname.to_owned(),
        rating: 1500,
        games_played: 10,
        wins: 6,
        losses: 4,
        favorite_faction: FactionId::Fremen,
        season: season.to_owned(),
    }
}

#[rstest]
fn card_new_accepts_valid_payload() {
    let card = Card::new(card_draft("guild-embassy", "Guild Embassy")).expect("valid card");

    assert_eq!(card.slug(), "guild-embassy");
    assert_eq!(card.faction(), Some(FactionId::SpacingGuild));
    assert!(card.has_all_properties(&[CardProperty::Choam]));
    assert!(card.has_all_properties(&[]));
}

#[rstest]
#[case::uppercase("Guild-Embassy")]
#[case::spaces("guild embassy")]
#[case::empty("")]
fn card_rejects_invalid_slug(#[case] slug: &str) {
    let result = Card::new(card_draft(slug, "Guild Embassy"));

    assert!(matches!(
        result,
        Err(CatalogValidationError::InvalidSlug {
            field: "card.slug",
            ..
        })
    ));
}

#[rstest]
fn card_rejects_blank_name() {
    let result = Card::new(card_draft("guild-embassy", "   "));

    assert_eq!(
        result,
        Err(CatalogValidationError::EmptyField { field: "card.name" })
    );
}

#[rstest]
#[case::nickname("", "2025-S1", "player.nickname")]
#[case::season("Feyd", " ", "player.season")]
fn player_rejects_empty_fields(
    #[case] nickname: &str,
    #[case] season: &str,
    #[case] field: &'static str,
) {
    let result = Player::new(player_draft(nickname, season));

    assert_eq!(result, Err(CatalogValidationError::EmptyField { field }));
}

#[rstest]
fn player_does_not_check_game_totals() {
    let mut draft = player_draft("Feyd", "2025-S1");
    draft.wins = 40;
    draft.losses = 40;

    assert!(Player::new(draft).is_ok());
}

#[rstest]
fn card_deserialises_null_faction_as_neutral() {
    let json = r#"{
        "id": 16,
        "slug": "convincing-argument",
        "name": "Convincing Argument",
        "nameEn": "Convincing Argument",
        "cost": 0,
        "setId": "imperium",
        "faction": null,
        "cell": "other",
        "properties": [],
        "imageUrl": "https://placehold.co/432x600",
        "isOfficial": true,
        "text": "Starter card."
    }"#;

    let card: Card = serde_json::from_str(json).expect("valid card JSON");

    assert_eq!(card.faction(), None);
    assert_eq!(card.cell(), CardCell::Other);
}

#[rstest]
fn deserialisation_runs_validation() {
    let json = r#"{
        "id": 1,
        "slug": "Not A Slug",
        "title": "Title",
        "excerpt": "",
        "content": "",
        "imageUrl": "",
        "publishedAt": "2025-01-01",
        "author": "Irulan"
    }"#;

    let result = serde_json::from_str::<Article>(json);

    assert!(result.is_err());
}

#[rstest]
fn unknown_enum_tokens_fail_deserialisation() {
    let json = r##"{
        "id": "harkonnen",
        "name": "House Harkonnen",
        "color": "#000",
        "description": ""
    }"##;

    assert!(serde_json::from_str::<Faction>(json).is_err());
}

#[rstest]
fn records_serialise_with_camel_case_fields() {
    let card = Card::new(card_draft("guild-embassy", "Guild Embassy")).expect("valid card");

    let value = serde_json::to_value(&card).expect("serialize");

    assert_eq!(value["nameEn"], "Guild Embassy");
    assert_eq!(value["setId"], "immortality");
    assert_eq!(value["faction"], "spacing_guild");
}

#[rstest]
fn article_matches_exact_tags_only() {
    let article = Article::new(ArticleDraft {
        id: 1,
        slug: "bloodlines-preview".to_owned(),
        title: "Bloodlines preview".to_owned(),
        excerpt: String::new(),
        content: String::new(),
        image_url: String::new(),
        published_at: "2025-08-02".to_owned(),
        author: "Alia".to_owned(),
        tags: vec!["preview".to_owned()],
        related_slugs: vec![],
    })
    .expect("valid article");

    assert!(article.has_tag("preview"));
    assert!(!article.has_tag("prev"));
}
