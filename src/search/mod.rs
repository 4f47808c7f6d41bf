mod filter;

pub use filter::{
    available_genres, available_keys, filter_projects, query_terms, searchable_content,
    FilterState, ALL_GENRES, ALL_KEYS,
};
