use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use transportation::report::{PlanReport, UNBALANCED_NOTICE};
use transportation::{input, plan, Config, Error, Method, Problem};

/// Initial shipment plans for a balanced transportation problem.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Problem file (`.json`, otherwise plain tokens); reads stdin when omitted
    path: Option<PathBuf>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run only these methods, in this order
    #[arg(short, long = "method", value_enum)]
    methods: Vec<Method>,
    /// Print the plan as JSON instead of tables
    #[arg(long)]
    json: bool,
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load(path: Option<&PathBuf>) -> anyhow::Result<Problem<i64>> {
    match path {
        Some(path) => input::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            let problem = if text.trim_start().starts_with('{') {
                input::parse_json(&text)?
            } else {
                input::parse_plain(&text)?
            };
            Ok(problem)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    if !args.methods.is_empty() {
        config.methods = args.methods.clone();
    }

    let problem = load(args.path.as_ref())?;
    info!(
        "loaded {} sources and {} destinations",
        problem.sources(),
        problem.destinations()
    );

    let plan = match plan::solve(&problem, &config) {
        Ok(plan) => plan,
        Err(Error::Unbalanced { .. }) => {
            println!("{UNBALANCED_NOTICE}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(plan.solutions())?);
    } else {
        print!("{}", PlanReport(&problem, &plan));
    }
    Ok(())
}
