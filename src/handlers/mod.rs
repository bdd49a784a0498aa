//! HTTP handlers, one per route.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;
pub use favorites::*;
pub use people::*;
pub use planets::*;
pub use sitemap::*;
pub use users::*;
