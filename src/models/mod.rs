//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`QueryKey`], [`Category`], [`TimeWindow`] - Dashboard query dimensions
//! - [`TopItem`], [`ResultList`] and the API response schema
//! - [`Theme`] - Light/dark color scheme

mod query;
mod spotify;
mod theme;

pub use query::{Category, QueryKey, TimeWindow};
pub use spotify::{
    Album, Artist, ArtistRef, Image, Paging, ResultList, TopItem, Track, UserProfile,
};
pub use theme::Theme;
