use clap::Parser;
use easy21lib::Args;
use easy21lib::Config;
use easy21lib::Experiment;
use easy21lib::Result;

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    easy21lib::logs()?;
    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(episodes) = args.episodes_mc {
        config.episodes_mc = episodes;
        config.checkpoints.retain(|c| *c <= episodes);
    }
    if let Some(episodes) = args.episodes_td {
        config.episodes_sarsa = episodes;
        config.episodes_lfa = episodes;
    }
    if let Some(output) = args.output {
        config.output = Some(output);
    }
    config.validate()?;

    // no flags means everything
    let all = !(args.montecarlo || args.sarsa || args.lfa);
    let experiment = Experiment::from(config);
    easy21lib::interrupts();

    let (mc, _) = experiment.monte_carlo()?;
    if all || args.sarsa {
        experiment.sarsa(mc.table())?;
    }
    if all || args.lfa {
        experiment.lfa(mc.table())?;
    }
    log::info!("training complete");
    Ok(())
}
