//! Load and save rule tables as TOML files

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::rules::table::{RuleField, RuleTable};

/// Parse a rule table from TOML text
///
/// Keys are the snake_case field names. Omitted keys keep their default.
pub fn parse_rule_table(content: &str) -> Result<RuleTable> {
    let rules: RuleTable = toml::from_str(content)?;
    Ok(rules)
}

/// Load a rule table from a TOML file
pub fn load_rule_table(path: &Path) -> Result<RuleTable> {
    let content = fs::read_to_string(path)?;
    let rules = parse_rule_table(&content)?;
    tracing::info!(path = %path.display(), default = rules.is_default(), "loaded rule table");
    Ok(rules)
}

/// Load a rule table, or the defaults when no file is configured
pub fn load_or_default(path: Option<&Path>) -> Result<RuleTable> {
    match path {
        Some(p) => load_rule_table(p),
        None => Ok(RuleTable::default()),
    }
}

/// Write a rule table to a TOML file, replacing any existing content
pub fn save_rule_table(path: &Path, rules: &RuleTable) -> Result<()> {
    let content = toml::to_string_pretty(rules)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "saved rule table");
    Ok(())
}

/// Overwrite one field of the rule table stored at `path`
///
/// Starts from the file's current contents, or the defaults when it does
/// not exist yet. Returns the table as written.
pub fn set_rule_in_file(path: &Path, field: RuleField, value: u32) -> Result<RuleTable> {
    let mut rules = if path.exists() {
        load_rule_table(path)?
    } else {
        RuleTable::default()
    };
    rules.set(field, value);
    save_rule_table(path, &rules)?;
    Ok(rules)
}

/// Replace the rule table stored at `path` with the defaults
pub fn reset_rule_file(path: &Path) -> Result<RuleTable> {
    let mut rules = RuleTable::default();
    rules.reset();
    save_rule_table(path, &rules)?;
    Ok(rules)
}
