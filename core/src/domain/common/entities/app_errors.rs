use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The nutrition table holds no food at all, so no label can ever be selected.
    #[error("Food catalog is empty")]
    EmptyCatalog,

    #[error("Invalid food catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to parse food catalog: {0}")]
    CatalogParse(String),

    #[error("Internal server error")]
    InternalServerError,
}
