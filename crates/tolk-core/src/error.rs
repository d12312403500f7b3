#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Language catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate language code: {0}")]
    DuplicateCode(String),

    #[error("Example key must not be empty")]
    EmptyExampleKey,

    #[error("Duplicate example key: {0}")]
    DuplicateExample(String),
}
