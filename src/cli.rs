use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use log::{info, warn};
use rcurator::clients::errors::{Error, Result};
use rcurator::clients::{MAX_SEEDS, SpotifyClient};
use rcurator::render;
use rcurator::session::{CurationMode, CuratorSession, SessionConfig};

#[derive(Parser)]
#[command(name = "rcurator")]
#[command(version, about = "Seed-based track curation from the Spotify catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for seed tracks and request similar recommendations
    Curate {
        /// Search query for one seed slot; repeat up to three times
        #[arg(short, long = "query", value_name = "QUERY")]
        queries: Vec<String>,

        /// How many recommendations to request
        #[arg(short = 'n', long, default_value_t = 15,
              value_parser = clap::value_parser!(u32).range(5..=50))]
        count: u32,

        /// Keep only tracks with popularity below 50
        #[arg(long)]
        less_popular: bool,

        /// Result cap for each search
        #[arg(long, default_value_t = 10,
              value_parser = clap::value_parser!(u32).range(1..=50))]
        search_limit: u32,

        /// Print recommendations as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Curate {
            queries,
            count,
            less_popular,
            search_limit,
            json,
        } => {
            let config = SessionConfig {
                search_limit,
                curation: if less_popular {
                    CurationMode::LessPopular
                } else {
                    CurationMode::Standard
                },
            };
            curate(&queries, count, config, json).await
        }
    }
}

async fn curate(queries: &[String], count: u32, config: SessionConfig, json: bool) -> Result<()> {
    if queries.len() > MAX_SEEDS {
        return Err(Error::TooManySeeds(queries.len()));
    }

    info!("Authorizing Spotify client ...");
    let spotify = SpotifyClient::try_default()?;
    spotify.authorize_client().await?;

    let mut session = CuratorSession::new(spotify, config);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    // Each slot is searched and picked sequentially, blocking on its call
    for (slot, query) in queries.iter().enumerate() {
        let results = session.search_slot(slot, query).await?;
        if results.is_empty() {
            info!("No tracks found for {query:?}, skipping slot {}", slot + 1);
            continue;
        }
        println!("\nResults for {query:?}:");
        println!("{}", render::numbered_results(results));

        let len = results.len();
        if let Some(choice) = prompt_pick(&mut input, slot, len)? {
            let picked = session.pick_seed(slot, choice)?;
            info!(
                "Seed {}: {} – {}",
                slot + 1,
                picked.title,
                picked.artist.name
            );
        }
    }

    match session.recommend(count).await {
        Ok(tracks) if tracks.is_empty() => {
            info!("Recommendation returned no tracks (after curation); try other seeds");
        }
        Ok(tracks) => {
            if json {
                println!("{}", render::to_json(&tracks)?);
            } else {
                println!("\n{}", render::summary_table(&tracks));
                println!("\n{}", render::link_lines(&tracks));
            }
        }
        Err(Error::NoSeedsSelected) => {
            warn!("Select at least one seed track before requesting recommendations");
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

// Ask until the answer is a valid 1-based result index or an empty line (skip).
fn prompt_pick(input: &mut impl BufRead, slot: usize, len: usize) -> Result<Option<usize>> {
    loop {
        print!("Pick a seed for slot {} (1-{len}, empty to skip): ", slot + 1);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed, treat like a skip
            return Ok(None);
        }
        match parse_pick(&line, len) {
            PickAnswer::Skip => return Ok(None),
            PickAnswer::Choice(idx) => return Ok(Some(idx)),
            PickAnswer::Invalid => println!("Enter a number between 1 and {len}, or nothing."),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum PickAnswer {
    Skip,
    Choice(usize),
    Invalid,
}

fn parse_pick(line: &str, len: usize) -> PickAnswer {
    let line = line.trim();
    if line.is_empty() {
        return PickAnswer::Skip;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => PickAnswer::Choice(n - 1),
        _ => PickAnswer::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_whitespace_answer_skips_the_slot() {
        assert_eq!(parse_pick("\n", 5), PickAnswer::Skip);
        assert_eq!(parse_pick("   \n", 5), PickAnswer::Skip);
    }

    #[test]
    fn valid_answers_map_to_zero_based_indices() {
        assert_eq!(parse_pick("1\n", 10), PickAnswer::Choice(0));
        assert_eq!(parse_pick("10\n", 10), PickAnswer::Choice(9));
    }

    #[test]
    fn out_of_range_or_garbage_answers_are_invalid() {
        assert_eq!(parse_pick("0\n", 10), PickAnswer::Invalid);
        assert_eq!(parse_pick("11\n", 10), PickAnswer::Invalid);
        assert_eq!(parse_pick("abc\n", 10), PickAnswer::Invalid);
    }
}
