/// Store failures surfaced through every repository port.
///
/// Messages are code-style identifiers so the REST layer can pass them through
/// unchanged. Neither variant is a "not found": absence is modelled with
/// `Option`/`bool` return values and turned into domain errors by use cases.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A stored row could not be mapped back into a domain record.
    #[error("repository.persistence")]
    Persistence,
    /// The store itself failed (connection, constraint, query).
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
