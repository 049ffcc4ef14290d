pub mod dto;

pub use dto::TreeDocument;
