use super::*;

#[test]
fn photo_by_id_finds_known_record() {
    let photo = photo_by_id(3).expect("photo 3 exists");
    assert_eq!(photo.description, "Lighthouse at golden hour");
}

#[test]
fn photo_by_id_is_none_for_unknown_id() {
    assert!(photo_by_id(999).is_none());
}

#[test]
fn game_by_id_finds_known_record() {
    let game = game_by_id(1).expect("game 1 exists");
    assert_eq!(game.name, "Nebula Drift");
}

#[test]
fn games_by_name_matches_case_insensitively() {
    let hits = games_by_name("NEBULA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn games_by_name_empty_query_returns_all() {
    assert_eq!(games_by_name("").len(), GAMES.len());
    assert_eq!(games_by_name("   ").len(), GAMES.len());
}

#[test]
fn games_by_name_no_match_is_empty() {
    assert!(games_by_name("zzzz").is_empty());
}

#[test]
fn record_ids_are_unique() {
    for (i, photo) in PHOTOS.iter().enumerate() {
        assert!(PHOTOS.iter().skip(i + 1).all(|p| p.id != photo.id));
    }
    for (i, game) in GAMES.iter().enumerate() {
        assert!(GAMES.iter().skip(i + 1).all(|g| g.id != game.id));
    }
}
