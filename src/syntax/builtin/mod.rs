//! Built-in rule-sets
//!
//! The tokenizer supports a fixed set of languages; each one is a static
//! [`RuleSet`](super::rules::RuleSet).

mod c;
mod cpp;

pub use c::C_RULES;
pub use cpp::CPP_RULES;
