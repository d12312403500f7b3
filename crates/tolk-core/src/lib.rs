pub mod catalog;
pub mod error;
pub mod examples;
pub mod session;

pub use catalog::LanguageCatalog;
pub use error::CatalogError;
pub use examples::{Example, ExampleSet};
pub use session::{SessionContext, SessionEffect};

#[cfg(test)]
mod tests;
