use {
    anyhow::Context,
    std::io::Write,
    stones::{
        config::{self, Config},
        input,
    },
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", config::HELP);
        return Ok(());
    }

    let config = Config::from_args(args).context("Error parsing arguments")?;
    log::info!(
        "depths {:?}, cache capacity {}, strategy {:?}",
        config.depths,
        config.capacity,
        config.strategy
    );

    let stones = input::read_stones(std::io::stdin().lock()).context("Error reading stones")?;
    log::info!("read {} stones", stones.len());

    let totals = stones::totals(&config, &stones);

    let mut stdout = std::io::stdout().lock();
    for total in totals {
        writeln!(stdout, "{total}")?;
    }
    stdout.flush()?;

    Ok(())
}
