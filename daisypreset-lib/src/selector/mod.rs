pub mod classify;
pub mod prefix;
pub mod tokens;

pub use classify::{classify, classify_rule};
pub use prefix::apply_prefix;
pub use tokens::{stringify, tokenize, SelectorToken};
