pub mod cards;
pub mod control;
pub mod error;
pub mod gameplay;
pub mod save;
pub mod training;

pub use cards::*;
pub use control::*;
pub use error::Error;
pub use error::Result;
pub use gameplay::*;
pub use training::*;

static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// dimensional analysis types
pub type Utility = f32;
pub type Probability = f32;
pub type Count = u32;

// game rule parameters
pub const DEALER_MIN: i32 = 1;
pub const DEALER_MAX: i32 = 10;
pub const PLAYER_MIN: i32 = 1;
pub const PLAYER_MAX: i32 = 21;
pub const DEALER_STICK: i32 = 17;
pub const CARD_MIN: i32 = 1;
pub const CARD_MAX: i32 = 10;
pub const BLACK_PROBABILITY: f64 = 2. / 3.;

// table dimensions
pub const N_DEALER: usize = (DEALER_MAX - DEALER_MIN + 1) as usize;
pub const N_PLAYER: usize = (PLAYER_MAX - PLAYER_MIN + 1) as usize;
pub const N_ACTIONS: usize = 2;
pub const N_STATE_ACTIONS: usize = N_DEALER * N_PLAYER * N_ACTIONS;

/// epsilon-greedy exploration parameters
const EXPLORATION_N0: Probability = 100.0;
const LFA_EPSILON: Probability = 0.05;
const LFA_STEP_SIZE: Probability = 0.01;

// coarse coding parameters
const DEALER_BRACKETS: [(i32, i32); 3] = [(1, 4), (4, 7), (7, 10)];
const PLAYER_BRACKETS: [(i32, i32); 6] = [(1, 6), (4, 9), (7, 12), (10, 15), (13, 18), (16, 21)];
pub const N_FEATURES: usize = DEALER_BRACKETS.len() * PLAYER_BRACKETS.len() * N_ACTIONS;

// experiment parameters
const MC_EPISODES: usize = 1_000_000;
const SARSA_EPISODES: usize = 10_000;
const LFA_EPISODES: usize = 10_000;
const MC_CHECKPOINTS: [usize; 5] = [1_000, 10_000, 100_000, 500_000, 1_000_000];
const LAMBDA_STEPS: usize = 10;
const DEFAULT_SEED: u64 = 0x21;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "native")]
/// Train Easy21 controllers and export their value functions
pub struct Args {
    /// Run the Monte Carlo control reference run
    #[arg(long)]
    pub montecarlo: bool,
    /// Run the tabular SARSA(λ) sweep
    #[arg(long)]
    pub sarsa: bool,
    /// Run the linear function approximation SARSA(λ) sweep
    #[arg(long)]
    pub lfa: bool,
    /// Seed for every random source
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of Monte Carlo episodes
    #[arg(long)]
    pub episodes_mc: Option<usize>,
    /// Number of episodes per λ in the SARSA and LFA sweeps
    #[arg(long)]
    pub episodes_td: Option<usize>,
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
    /// Directory for exported results
    #[arg(long)]
    pub output: Option<std::path::PathBuf>,
}

/// progress bar
#[cfg(feature = "native")]
pub fn progress(n: usize) -> indicatif::ProgressBar {
    let tick = std::time::Duration::from_secs(1);
    let style =
        "{spinner:.cyan} [{pos}/{len}] {elapsed} @ {per_sec:>12} ~ {percent:>3}% {wide_bar:.cyan}";
    let style = indicatif::ProgressStyle::with_template(style)
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar());
    let progress = indicatif::ProgressBar::new(n as u64);
    progress.set_style(style);
    progress.enable_steady_tick(tick);
    progress
}

/// initialize logging to terminal and to a timestamped file
#[cfg(feature = "native")]
pub fn logs() -> Result<()> {
    std::fs::create_dir_all("logs").map_err(|source| Error::Io {
        operation: "create logs directory".to_string(),
        source,
    })?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::File::create(format!("logs/{}.log", time)).map_err(|source| Error::Io {
        operation: "create log file".to_string(),
        source,
    })?;
    let file = simplelog::WriteLogger::new(log::LevelFilter::Debug, config.clone(), file);
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).map_err(|e| Error::InvalidConfiguration {
        message: format!("logger already initialized: {}", e),
    })
}

/// spawn a thread to listen for 'q' input to gracefully interrupt training
#[cfg(feature = "native")]
pub fn interrupts() {
    std::thread::spawn(|| {
        log::info!("training started. type 'Q + Enter' to gracefully interrupt.");
        let ref mut buffer = String::new();
        loop {
            buffer.clear();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current episode...");
                    interrupt();
                }
                Ok(_) => continue,
            }
        }
    });
}

/// whether a graceful interrupt has been requested
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}

/// request that the running phase stop after its current episode
pub fn interrupt() {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}

/// clear a pending interrupt; every training phase starts with this
pub fn resume() {
    INTERRUPTED.store(false, std::sync::atomic::Ordering::Relaxed);
}
