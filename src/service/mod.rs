//! Query layer: one associated function per read or write the handlers need.

mod crud;
mod favorites;
pub use crud::CrudService;
pub use favorites::FavoriteService;
