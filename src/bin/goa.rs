use clap::Parser;

use goalib::{ExhaustionPolicy, GreedyTripleSelector, Mode, Problem};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    verbose: bool,
    #[clap(short, long, value_enum, default_value_t = Mode::OwnField)]
    mode: Mode,
    #[clap(short = 'e', long, value_enum, default_value_t = ExhaustionPolicy::Accumulate)]
    on_exhausted: ExhaustionPolicy,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    log::debug!("parsing input");
    let problem = Problem::parse(&input)?;
    let start = std::time::Instant::now();
    let mut selector = GreedyTripleSelector::new(problem, args.mode, args.on_exhausted);
    let total = selector.run()?;
    log::debug!("succeeded in {:?}", start.elapsed());
    println!("{}", total);
    Ok(())
}
