//! Point rules: card weights and special action scaling, loadable from TOML

pub mod table;
mod loader;

pub use table::{RuleField, RuleTable, DEFAULT_RULES};
pub use loader::{
    load_or_default, load_rule_table, parse_rule_table, reset_rule_file, save_rule_table,
    set_rule_in_file,
};
