//! Error types shared across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HoodbaseError`] via `#[from]`. Messages of the user-facing variants are
//! returned verbatim by the HTTP adapter, so they are part of the API.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum HoodbaseError {
    /// A candidate record breaks a field rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A query parameter is missing or out of range.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A record with the same name is already stored.
    #[error(transparent)]
    Duplicate(#[from] DuplicateNameError),

    /// The backing store failed to read or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field rule violations, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("O bairro não pode ficar vazio!")]
    EmptyName,

    #[error("O comprimento do bairro não pode exceder 45 caracteres!")]
    NameTooLong,

    #[error("O valor do metro quadrado do bairro não pode ficar vazio!")]
    MissingValue,

    #[error("O valor do metro quadrado do bairro não pode ser menor ou igual a zero!")]
    NonPositiveValue,

    #[error("O valor do metro quadrado não pode exceder 13 digitos!")]
    ValueTooLong,
}

/// Invalid request parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameterError {
    /// `page` or `limit` is missing or negative.
    #[error("Limite ou página inválida")]
    PageOrLimit,

    /// A path identifier is not a valid UUID.
    #[error("Identificador inválido: {0}")]
    Id(String),
}

/// Lookup miss. The message does not echo the key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Bairro não encontrado")]
pub struct NotFoundError {
    /// The key that was looked up (id or name), kept for logging.
    pub key: String,
}

/// A neighborhood with the same name already exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name} já está cadastrado na base de dados")]
pub struct DuplicateNameError {
    pub name: String,
}
