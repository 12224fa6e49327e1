use crate::domain::author::value_objects::{AuthorId, PersonName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: PersonName,
    pub last_name: PersonName,
}

impl Author {
    /// Name used in "not found" reports.
    pub const ENTITY: &'static str = "Author";
}

/// Write model for an author. With an `id` the row with that key is updated,
/// or created under that key when it does not exist yet.
#[derive(Debug, Clone)]
pub struct AuthorUpsert {
    pub id: Option<AuthorId>,
    pub first_name: PersonName,
    pub last_name: PersonName,
}
