pub mod naming;
pub mod reserved;

pub use naming::{validate_ident, validate_table};
pub use reserved::is_reserved_word;
