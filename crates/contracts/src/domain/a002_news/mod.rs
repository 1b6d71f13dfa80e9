pub mod aggregate;

pub use aggregate::{News, NewsDraft, DESCRIPTOR};
