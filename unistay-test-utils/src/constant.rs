//! Store keys the catalog reads its collections from, without the namespace prefix.

pub static AFFILIATIONS_KEY: &str = "affiliations";
pub static LISTINGS_KEY: &str = "listings";
pub static POSTS_KEY: &str = "posts";
pub static PROFILES_KEY: &str = "profiles";
