pub mod policy;
pub mod scripture;

pub use policy::{ContentPolicy, ValidationResult};
pub use scripture::ScriptureReference;
