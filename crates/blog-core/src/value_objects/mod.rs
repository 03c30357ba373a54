//! Value objects - immutable types that represent domain concepts

mod page;
mod search;

pub use page::{PageInfo, PageRequest};
pub use search::{normalize_tag, SearchQuery, TAG_PREFIX};
