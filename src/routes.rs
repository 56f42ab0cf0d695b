//! Route path constants shared by the router, the guards, and navigation.
//!
//! The table is static; guard redirect targets always point at one of
//! these, so a redirect can never land on an unknown route.

pub const MAIN_PAGE: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGN_UP: &str = "/signup";
pub const PHOTO_LIBRARY: &str = "/photos";
pub const ADD_PHOTO: &str = "/photos/add";
pub const GAME_LIBRARY: &str = "/games";

/// Detail route for a single photo.
#[must_use]
pub fn photo(id: u32) -> String {
    format!("/photos/{id}")
}
