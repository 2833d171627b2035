use std::collections::HashMap;

use clap::Parser;
use color_eyre::eyre::eyre;

use logic_eval::truth_table::{TruthTable, TruthTableConfig};
use logic_eval::types::Variable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expression, e.g. "(A | B) & !C".
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Evaluate under a single assignment instead, e.g. "A:1;B:0;C:1".
    #[clap(long, value_name = "ASSIGNMENT")]
    assign: Option<String>,

    /// Maximum number of free variables to enumerate.
    #[clap(long, value_name = "INT", default_value = "30")]
    max_vars: usize,
}

/// Parses the compressed `name:bit;name:bit` form.
fn parse_assignment(s: &str) -> color_eyre::Result<HashMap<Variable, bool>> {
    let mut map = HashMap::new();
    for pair in s.split(';').filter(|p| !p.trim().is_empty()) {
        let (name, bit) = pair
            .split_once(':')
            .ok_or_else(|| eyre!("expected name:bit, got {:?}", pair))?;
        let var = Variable::try_new(name.trim())
            .ok_or_else(|| eyre!("invalid variable name {:?}", name))?;
        let value = match bit.trim() {
            "1" => true,
            "0" => false,
            other => return Err(eyre!("invalid bit {:?} for {}, expected 0 or 1", other, var)),
        };
        map.insert(var, value);
    }
    Ok(map)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    log::info!("args = {:?}", args);

    let expr = logic_eval::parse(&args.expr)?;
    println!("expr = {}", expr);

    if let Some(assign) = &args.assign {
        let assignment = parse_assignment(assign)?;
        let value = logic_eval::evaluate(&expr, &assignment)?;
        println!("value = {}", value);
        return Ok(());
    }

    let config = TruthTableConfig {
        max_variables: args.max_vars,
        ..TruthTableConfig::default()
    };
    let table = TruthTable::build_with_config(&expr, &config)?;
    print!("{}", table);
    let ones = table.values().as_slice().iter().filter(|&&b| b).count();
    println!("{} of {} rows are true", ones, table.len());

    Ok(())
}
