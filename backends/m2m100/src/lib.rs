pub mod translator;
pub mod wire;

pub use translator::M2m100Translator;
