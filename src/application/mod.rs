pub mod errors;
pub mod result;
pub mod usecases;

pub use errors::{ApplicationError, classify};
pub use result::ApplicationResult;
