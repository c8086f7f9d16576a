pub mod enums;
pub mod risk;
pub mod trend;
pub mod values;

pub use enums::*;
pub use risk::*;
pub use trend::*;
pub use values::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
