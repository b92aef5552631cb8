use anyhow::Context;
use clap::Parser;
use moment_calc::calculator;
use moment_calc::logger;
use moment_calc::map_dist::Die64;
use moment_calc::NumDistribution;

#[derive(Debug, Parser)]
#[command(about = "Expected value, variance and higher moments of a discrete distribution")]
struct Args {
    /// sides of the fair die
    #[arg(short, long, default_value_t = 6)]
    sides: isize,

    /// number of dice summed together
    #[arg(short, long, default_value_t = 1)]
    dice: usize,

    /// decimal places in the report
    #[arg(short, long, default_value_t = 4)]
    precision: usize,

    /// also print the statistics as json
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let die = Die64::new_dice(args.sides)
        .with_context(|| format!("cannot build a die with {} sides", args.sides))?;
    let dist = die.sum_of(args.dice)
        .with_context(|| format!("cannot sum {} dice", args.dice))?;

    let summary = dist.summary()?;
    print!("{}", calculator::report(&dist, &summary, args.precision));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
