//! CODEVS client runner (default binary).
//!
//! Plays a game over stdin/stdout against the judge, or with `bench`,
//! decides a single recorded turn and writes the decision as JSON.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use codevs_client::adapter::{decide_once, ClientOptions, RandomPolicy, TurnLoop};
use codevs_client::types::{GameConfig, DEFAULT_AI_NAME};

#[derive(Parser)]
#[command(about = "A random-move client for CODEVS Reborn", version)]
struct Args {
    /// Name announced to the judge
    #[arg(long, default_value = DEFAULT_AI_NAME)]
    name: String,
    /// Seed of the move RNG
    #[arg(long, env = "CODEVS_SEED", default_value_t = 123456)]
    seed: u32,
    /// Suppress per-turn diagnostics on stderr
    #[arg(short, long, env = "CODEVS_QUIET")]
    quiet: bool,
    /// JSON file with game dimensions (CODEVS_* variables still override it)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Decide one recorded turn
    Bench {
        /// File with every announced pack
        #[arg(short, long, value_name = "PACK")]
        pack: PathBuf,
        /// File with a single turn
        #[arg(short, long, value_name = "INFORMATION")]
        info: PathBuf,
        /// Where to write the JSON decision
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let base = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    let config = base.with_env_overrides();
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let options = ClientOptions {
        name: args.name,
        diagnostics: !args.quiet,
    };
    let mut driver = TurnLoop::new(config, RandomPolicy::with_seed(args.seed), options);

    match args.command {
        Some(Command::Bench { pack, info, output }) => {
            let decision = decide_once(&mut driver, open(&pack)?, open(&info)?)?;
            eprintln!("[Client] {:?}", decision);
            let out = File::create(&output)
                .with_context(|| format!("creating {}", output.display()))?;
            let mut out = BufWriter::new(out);
            serde_json::to_writer_pretty(&mut out, &decision).context("writing decision")?;
            out.flush().context("writing decision")?;
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            let mut stderr = io::stderr().lock();
            let summary = driver
                .run(stdin.lock(), &mut stdout, &mut stderr)
                .context("protocol failure")?;
            if !args.quiet {
                eprintln!(
                    "[Client] finished: {} turns, {} moves did not fit",
                    summary.turns_played, summary.misfits
                );
            }
        }
    }
    Ok(())
}
