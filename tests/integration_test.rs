use async_trait::async_trait;
use chess_cards::{
    api::PlayerSource,
    cards::{load_all, CardController, CardOutcome, Dashboard},
    config::Settings,
    models::{
        CardSpec, ChessCardsError, GameMode, ModeStats, PlayerProfile, PlayerStats, Result, Tier,
        DEFAULT_RATING,
    },
    styling,
};
use mockall::{mock, predicate::eq, Sequence};
use tokio::sync::Mutex;

mock! {
    pub Source {}

    #[async_trait]
    impl PlayerSource for Source {
        async fn fetch_profile(&self, username: &str) -> Result<PlayerProfile>;
        async fn fetch_stats(&self, username: &str) -> Result<PlayerStats>;
    }
}

fn magnus_profile() -> PlayerProfile {
    PlayerProfile {
        username: "realMagnusCarlsen".to_string(),
        avatar: Some("avatar".to_string()),
        title: Some("GM".to_string()),
        ..Default::default()
    }
}

fn blitz_stats(rating: i64) -> PlayerStats {
    let mut stats = PlayerStats::default();
    stats.set_mode(GameMode::Blitz, ModeStats::with_last(rating));
    stats
}

#[test]
fn test_classifier_examples() {
    assert_eq!(Tier::from_rating(2800).label(), "Legendary");
    assert_eq!(Tier::from_rating(1500).label(), "Class C");
    assert_eq!(Tier::from_rating(999).label(), "Novice");
}

#[test]
fn test_style_resolver_agrees_at_every_boundary() {
    for tier in Tier::DESCENDING {
        if let Some(floor) = tier.floor() {
            for rating in [floor - 1, floor, floor + 1] {
                assert_eq!(
                    styling::resolve(rating).label,
                    Tier::from_rating(rating).label(),
                    "rating {}",
                    rating
                );
            }
        }
    }
}

#[tokio::test]
async fn test_controller_fetches_profile_before_stats() {
    let mut source = MockSource::new();
    let mut seq = Sequence::new();
    source
        .expect_fetch_profile()
        .with(eq("magnus335"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(magnus_profile()));
    source
        .expect_fetch_stats()
        .with(eq("magnus335"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(blitz_stats(1500)));

    let settings = Settings::default();
    let spec = CardSpec::new("magnus335", GameMode::Blitz);
    let board = Mutex::new(Dashboard::new(std::slice::from_ref(&spec)));

    let outcome = CardController::new(0, spec, &settings.card).run(&source, &board).await;
    assert_eq!(outcome, CardOutcome { profile_loaded: true, rating_loaded: true });

    let board = board.into_inner();
    let card = board.card(0).unwrap();
    assert_eq!(card.username, "realMagnusCarlsen");
    assert_eq!(card.title, "gm");
    assert_eq!(card.rating, 1500);
    assert_eq!(card.tier_label(), "Class C");
    assert!(board.aggregator().all_ready());
}

#[tokio::test]
async fn test_profile_failure_keeps_card_unready() {
    let mut source = MockSource::new();
    source
        .expect_fetch_profile()
        .returning(|name| Err(ChessCardsError::PlayerNotFound(name.to_string())));
    source
        .expect_fetch_stats()
        .returning(|_| Ok(blitz_stats(2600)));

    let settings = Settings::default();
    let spec = CardSpec::new("Hikaru", GameMode::Blitz);
    let board = Mutex::new(Dashboard::new(std::slice::from_ref(&spec)));

    let outcome = CardController::new(0, spec, &settings.card).run(&source, &board).await;
    assert!(!outcome.profile_loaded);
    assert!(outcome.rating_loaded);

    let board = board.into_inner();
    let card = board.card(0).unwrap();
    assert_eq!(card.username, "");
    assert_eq!(card.plus, 0);
    assert_eq!(card.rating, 2600);
    assert!(!board.aggregator().all_ready());
}

#[tokio::test]
async fn test_stats_failure_keeps_default_rating() {
    let mut source = MockSource::new();
    source.expect_fetch_profile().returning(|_| Ok(magnus_profile()));
    source.expect_fetch_stats().returning(|_| {
        Err(ChessCardsError::ApiStatus {
            url: "https://api.chess.com/pub/player/magnus335/stats".to_string(),
            status: 503,
        })
    });

    let settings = Settings::default();
    let spec = CardSpec::new("magnus335", GameMode::Blitz);
    let board = Mutex::new(Dashboard::new(std::slice::from_ref(&spec)));

    let outcome = CardController::new(0, spec, &settings.card).run(&source, &board).await;
    assert!(outcome.profile_loaded);
    assert!(!outcome.rating_loaded);

    let board = board.into_inner();
    assert_eq!(board.card(0).unwrap().rating, DEFAULT_RATING);
    assert!(board.aggregator().all_ready());
}

#[tokio::test]
async fn test_all_ready_only_after_every_card() {
    let mut source = MockSource::new();
    source.expect_fetch_profile().returning(|name| {
        if name == "Bookfair" {
            Err(ChessCardsError::PlayerNotFound(name.to_string()))
        } else {
            Ok(PlayerProfile {
                username: name.to_string(),
                ..Default::default()
            })
        }
    });
    source.expect_fetch_stats().returning(|_| Ok(blitz_stats(1900)));

    let settings = Settings::default();
    let board = Mutex::new(Dashboard::new(&settings.cards));

    let outcomes = load_all(&source, &settings.cards, &settings.card, &board).await;
    assert_eq!(outcomes.iter().filter(|o| o.profile_loaded).count(), 5);

    let mut board = board.into_inner();
    assert_eq!(board.aggregator().ready_count(), 5);
    assert!(!board.aggregator().all_ready());
    assert!(!board.toggle_reveal());
}

#[tokio::test]
async fn test_repeated_load_counts_each_card_once() {
    let mut source = MockSource::new();
    source.expect_fetch_profile().returning(|name| {
        Ok(PlayerProfile {
            username: name.to_string(),
            ..Default::default()
        })
    });
    source.expect_fetch_stats().returning(|_| Ok(blitz_stats(2100)));

    let settings = Settings::default();
    let board = Mutex::new(Dashboard::new(&settings.cards));

    load_all(&source, &settings.cards, &settings.card, &board).await;
    load_all(&source, &settings.cards, &settings.card, &board).await;

    let mut board = board.into_inner();
    assert_eq!(board.aggregator().ready_count(), settings.cards.len());
    assert!(board.aggregator().all_ready());
    assert!(board.toggle_reveal());
    assert!(board.cards().iter().all(|card| card.tier_label() == "Rare"));
}
