//! Static demo catalogue behind the library pages.
//!
//! Read-only fixture records; they carry no state and no invariants.

#[cfg(test)]
#[path = "db_test.rs"]
mod db_test;

/// A photo in the demo library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub description: &'static str,
    pub image_url: &'static str,
}

/// A game in the demo library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub name: &'static str,
    pub image_url: &'static str,
}

pub const PHOTOS: &[Photo] = &[
    Photo {
        id: 1,
        description: "Morning fog over the old harbor",
        image_url: "https://picsum.photos/seed/harbor/600/400",
    },
    Photo {
        id: 2,
        description: "Street market in the rain",
        image_url: "https://picsum.photos/seed/market/600/400",
    },
    Photo {
        id: 3,
        description: "Lighthouse at golden hour",
        image_url: "https://picsum.photos/seed/lighthouse/600/400",
    },
    Photo {
        id: 4,
        description: "Rooftops after the first snow",
        image_url: "https://picsum.photos/seed/rooftops/600/400",
    },
    Photo {
        id: 5,
        description: "Cat asleep on a bookshop counter",
        image_url: "https://picsum.photos/seed/bookshop/600/400",
    },
    Photo {
        id: 6,
        description: "Ferris wheel against a storm front",
        image_url: "https://picsum.photos/seed/ferris/600/400",
    },
];

pub const GAMES: &[Game] = &[
    Game {
        id: 1,
        name: "Nebula Drift",
        image_url: "https://picsum.photos/seed/nebula/600/400",
    },
    Game {
        id: 2,
        name: "Harbor Tycoon",
        image_url: "https://picsum.photos/seed/tycoon/600/400",
    },
    Game {
        id: 3,
        name: "Cavern Sprint",
        image_url: "https://picsum.photos/seed/cavern/600/400",
    },
    Game {
        id: 4,
        name: "Aurora Chess",
        image_url: "https://picsum.photos/seed/aurora/600/400",
    },
    Game {
        id: 5,
        name: "Patchwork Rally",
        image_url: "https://picsum.photos/seed/rally/600/400",
    },
    Game {
        id: 6,
        name: "Tidepool",
        image_url: "https://picsum.photos/seed/tidepool/600/400",
    },
];

#[must_use]
pub fn photo_by_id(id: u32) -> Option<&'static Photo> {
    PHOTOS.iter().find(|p| p.id == id)
}

#[must_use]
pub fn game_by_id(id: u32) -> Option<&'static Game> {
    GAMES.iter().find(|g| g.id == id)
}

/// Case-insensitive substring match on the game name. An empty query
/// returns the whole catalogue.
#[must_use]
pub fn games_by_name(query: &str) -> Vec<&'static Game> {
    let needle = query.trim().to_lowercase();
    GAMES
        .iter()
        .filter(|g| needle.is_empty() || g.name.to_lowercase().contains(&needle))
        .collect()
}
