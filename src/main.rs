//! Faint Memory - Entry Point
//!
//! Command-line front end for the save data tracker. Scores a combatant,
//! prints scaling and tier tables, edits rule files and evaluates whole
//! sessions.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use faint_memory::core::error::Result;
use faint_memory::rules::{load_or_default, load_rule_table, reset_rule_file, set_rule_in_file};
use faint_memory::scoring::{scaled_points, tier_limit};
use faint_memory::{CounterSet, Evaluation, RuleField, RuleTable, Session, Tier, TrackerConfig};

/// Faint Memory save data tracker
#[derive(Parser, Debug)]
#[command(name = "faint-memory")]
#[command(about = "Track Faint Memory points against save data tier limits")]
struct Cli {
    /// Tracker config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rule table (TOML); overrides the config's rules_path, and a
    /// session's stored rules for `session evaluate`
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a single combatant
    Score(ScoreArgs),
    /// Points for a number of card removals/duplications
    Scale {
        count: u32,
        /// Override the rule table's initial increment
        #[arg(long)]
        initial: Option<u32>,
        /// Override the rule table's increment step
        #[arg(long)]
        step: Option<u32>,
    },
    /// Capacity limit for a tier
    Limit { tier: i64 },
    /// Capacity limit for every tier
    Tiers,
    /// Show or edit the rule table
    #[command(subcommand)]
    Rules(RulesCommand),
    /// Work with saved sessions
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[arg(long, default_value = "Combatant 1")]
    name: String,
    #[arg(long, default_value_t = 1)]
    tier: i64,
    #[arg(long, default_value_t = 0)]
    neutral_card: u32,
    #[arg(long, default_value_t = 0)]
    monster_card: u32,
    #[arg(long, default_value_t = 0)]
    card_conversion: u32,
    #[arg(long, default_value_t = 0)]
    normal_epiphany: u32,
    #[arg(long, default_value_t = 0)]
    divine_epiphany: u32,
    #[arg(long, default_value_t = 0)]
    forbidden_card: u32,
    #[arg(long, default_value_t = 0)]
    character_card: u32,
    #[arg(long, default_value_t = 0)]
    card_removed: u32,
    #[arg(long, default_value_t = 0)]
    card_duplication: u32,
}

impl ScoreArgs {
    fn counters(&self) -> Result<CounterSet> {
        Ok(CounterSet {
            name: self.name.clone(),
            tier: Tier::new(self.tier)?,
            neutral_card: self.neutral_card,
            monster_card: self.monster_card,
            card_conversion: self.card_conversion,
            normal_epiphany: self.normal_epiphany,
            divine_epiphany: self.divine_epiphany,
            forbidden_card: self.forbidden_card,
            character_card: self.character_card,
            card_removed: self.card_removed,
            card_duplication: self.card_duplication,
        })
    }
}

#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Print the active rule table
    Show,
    /// Write the default rule table to a file
    Reset {
        #[arg(long)]
        file: PathBuf,
    },
    /// Overwrite one field (e.g. NEUTRAL_CARD 100) and save
    Set {
        key: String,
        value: u32,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Evaluate every combatant in a session file
    ///
    /// Uses the session's stored rules unless --rules is given.
    Evaluate { file: PathBuf },
    /// Write a fresh session with one combatant
    New { file: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faint_memory=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };

    match &cli.command {
        Command::Score(args) => {
            let counters = args.counters()?;
            let rules = active_rules(cli.rules.as_deref(), &config)?;
            print_evaluations(&[Evaluation::of(&counters, &rules)], cli.json)?;
        }
        Command::Scale {
            count,
            initial,
            step,
        } => {
            let rules = active_rules(cli.rules.as_deref(), &config)?;
            let count = *count;
            let initial = initial.unwrap_or(rules.special_action_initial_increment);
            let step = step.unwrap_or(rules.special_action_increment_step);
            let points = scaled_points(count, initial, step);
            if cli.json {
                let out = serde_json::json!({
                    "count": count,
                    "initial_increment": initial,
                    "increment_step": step,
                    "points": points,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} x special action ({} / {}): {} points", count, initial, step, points);
            }
        }
        Command::Limit { tier } => {
            let tier = Tier::new(*tier)?;
            if cli.json {
                let out = serde_json::json!({ "tier": tier, "limit": tier.limit() });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}: limit {}", tier, tier.limit());
            }
        }
        Command::Tiers => {
            if cli.json {
                let out: Vec<_> = Tier::all()
                    .map(|t| serde_json::json!({ "tier": t, "limit": t.limit() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for tier in Tier::all() {
                    println!("{:>8}  {:>4}", tier.to_string(), tier_limit(tier.get()));
                }
            }
        }
        Command::Rules(cmd) => run_rules(cmd, &cli, &config)?,
        Command::Session(cmd) => run_session(cmd, &cli, &config)?,
    }

    Ok(())
}

/// Rules for commands that score against a table: --rules, then the
/// config's rules_path, then the defaults
fn active_rules(cli_rules: Option<&Path>, config: &TrackerConfig) -> Result<RuleTable> {
    load_or_default(cli_rules.or(config.rules_path.as_deref()))
}

fn run_rules(cmd: &RulesCommand, cli: &Cli, config: &TrackerConfig) -> Result<()> {
    match cmd {
        RulesCommand::Show => {
            let rules = active_rules(cli.rules.as_deref(), config)?;
            print_rules(&rules, cli.json)?;
        }
        RulesCommand::Reset { file } => {
            let rules = reset_rule_file(file)?;
            print_rules(&rules, cli.json)?;
        }
        RulesCommand::Set { key, value, file } => {
            let field: RuleField = key.parse()?;
            let rules = set_rule_in_file(file, field, *value)?;
            print_rules(&rules, cli.json)?;
        }
    }
    Ok(())
}

fn run_session(cmd: &SessionCommand, cli: &Cli, config: &TrackerConfig) -> Result<()> {
    match cmd {
        SessionCommand::Evaluate { file } => {
            let session = Session::load(file)?;
            // Enforces the combatant cap
            session.roster(config)?;
            let evaluations = match &cli.rules {
                Some(path) => session.evaluate_with(&load_rule_table(path)?),
                None => session.evaluate(),
            };
            print_evaluations(&evaluations, cli.json)?;
        }
        SessionCommand::New { file } => {
            Session::create(file, config)?;
            println!("Created {}", file.display());
        }
    }
    Ok(())
}

fn print_rules(rules: &RuleTable, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rules)?);
        return Ok(());
    }

    println!("Card Points");
    for (field, value) in rules.entries().filter(|(f, _)| !f.is_special()) {
        println!("  {:<26} {:>5}", field.label(), value);
    }
    println!("Card Removal/Duplicate Scaling");
    for (field, value) in rules.entries().filter(|(f, _)| f.is_special()) {
        println!("  {:<26} {:>5}", field.label(), value);
    }
    Ok(())
}

fn print_evaluations(evaluations: &[Evaluation], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(evaluations)?);
        return Ok(());
    }

    for eval in evaluations {
        println!();
        println!("=== {} ({}) ===", eval.name, eval.tier);
        for (field, points) in eval.breakdown.entries.iter().filter(|(_, p)| *p > 0) {
            println!("  {:<26} {:>5}", field.label(), points);
        }
        println!(
            "  Faint Memory: {} / {} points ({:.0}%)",
            eval.total,
            eval.limit,
            eval.progress * 100.0
        );
        match eval.overflow() {
            None => println!("  OK"),
            Some(over) => {
                println!("  Save data limit exceeded by {} points", over);
                println!("  Your deck might not be fully saved");
            }
        }
    }
    Ok(())
}
