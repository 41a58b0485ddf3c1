//! Like/dislike preferences and their persistence.

pub mod preference;
pub mod preference_set;
pub mod preference_store;
