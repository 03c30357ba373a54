//! Tag entity - a shared, canonicalized post label

/// Tag entity
///
/// Names are stored in canonical form (trimmed, lowercased), so plain equality
/// on `name` is case-insensitive equality on the raw input. Tags are shared
/// across posts and have no owner; a tag with zero associations is an orphan
/// and eligible for removal by the maintenance sweep.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
