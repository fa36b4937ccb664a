//! Rule table: which move beats which.
//!
//! The match engine asks one question of the rules, `beats(x, y)`. Ties are
//! detected by equality before the table is consulted.

pub mod table;

pub use table::{RuleTable, RuleTableBuilder};
