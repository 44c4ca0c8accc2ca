pub mod json;

pub use json::{load_utilities, parse_utilities};
