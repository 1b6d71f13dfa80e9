pub mod aggregate;

pub use aggregate::{NewsType, NewsTypeDraft, DESCRIPTOR};
