pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{SynthesisResponse, Token};
pub use error::SynthesisError;
pub use model::SynthesisResult;
pub use service::{SynthesisService, SynthesisServiceApi};
