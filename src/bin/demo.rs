//! Walks a [`Tree`] through the basic operations on random values, then times how long it takes
//! to fill fresh trees of increasing sizes.
//!
//! Run `demo --help` for the options.

use std::env;
use std::fmt::Display;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use getopts::{Matches, Options};
use log::{debug, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plain_bst::Tree;

const DEFAULT_BATCHES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Everything the walkthrough can be told from the command line.
#[derive(Debug)]
struct Config {
    count: usize,
    range: i32,
    seed: Option<u64>,
    find: i32,
    removes: Vec<i32>,
    batches: Vec<usize>,
    perf_range: i32,
    verbosity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 10,
            range: 100,
            seed: None,
            find: 50,
            removes: vec![50, 30],
            batches: DEFAULT_BATCHES.to_vec(),
            perf_range: 100_000,
            verbosity: 0,
        }
    }
}

impl Config {
    fn from_matches(matches: &Matches) -> Result<Self> {
        let defaults = Self::default();

        let removes = matches
            .opt_strs("d")
            .iter()
            .map(|s| parse("--remove", s))
            .collect::<Result<Vec<_>>>()?;
        let batches = match matches.opt_str("b") {
            Some(list) => list
                .split(',')
                .map(|s| parse("--batches", s.trim()))
                .collect::<Result<Vec<_>>>()?,
            None => defaults.batches,
        };

        let config = Self {
            count: parse_opt(matches, "n", "--count")?.unwrap_or(defaults.count),
            range: parse_opt(matches, "r", "--range")?.unwrap_or(defaults.range),
            seed: parse_opt(matches, "s", "--seed")?,
            find: parse_opt(matches, "f", "--find")?.unwrap_or(defaults.find),
            removes: if removes.is_empty() {
                defaults.removes
            } else {
                removes
            },
            batches,
            perf_range: parse_opt(matches, "p", "--perf-range")?.unwrap_or(defaults.perf_range),
            verbosity: matches.opt_count("v"),
        };

        if config.range <= 0 {
            bail!("--range must be positive, got {}", config.range);
        }
        if config.perf_range <= 0 {
            bail!("--perf-range must be positive, got {}", config.perf_range);
        }
        Ok(config)
    }
}

fn parse<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("invalid value {:?} for {}", raw, name))
}

fn parse_opt<T>(matches: &Matches, short: &str, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .opt_str(short)
        .map(|raw| parse(name, &raw))
        .transpose()
}

/// `-v` turns on debug output and `-vv` everything. `RUST_LOG` still wins when it is set.
fn log_level(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbosity: usize) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .try_init()
        .context("a logger was already installed")
}

fn joined<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_inorder(tree: &Tree<i32>) {
    println!("Inorder traversal: {}", joined(tree.iter()));
}

fn walkthrough(config: &Config, rng: &mut StdRng) {
    let mut tree = Tree::new();

    for _ in 0..config.count {
        let value = rng.gen_range(0..config.range);
        println!("Inserting: {}", value);
        tree.insert(value);
    }
    print_inorder(&tree);

    match tree.find(&config.find) {
        Some(_) => println!("Node {} found.", config.find),
        None => println!("Node {} not found.", config.find),
    }

    for value in &config.removes {
        println!("Removing node {}", value);
        if tree.remove(value).is_none() {
            debug!("{} was not in the tree", value);
        }
        print_inorder(&tree);
    }

    match tree.maximum() {
        Some(max) => println!("Maximum value: {}", max),
        None => println!("Maximum value: none (empty tree)"),
    }
}

fn time_inserts(config: &Config, rng: &mut StdRng) {
    for &num_nodes in &config.batches {
        // A fresh tree each round so earlier batches don't skew later ones.
        let mut tree = Tree::new();

        let start = Instant::now();
        for _ in 0..num_nodes {
            tree.insert(rng.gen_range(0..config.perf_range));
        }
        let elapsed = start.elapsed();

        println!(
            "Time taken to insert {} nodes: {} ms",
            num_nodes,
            elapsed.as_millis()
        );
        info!(
            "batch of {} left {} distinct values, height {}",
            num_nodes,
            tree.len(),
            tree.height()
        );
    }
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("n", "count", "how many random values to insert (default 10)", "N");
    opts.optopt("r", "range", "random values are drawn from 0..N (default 100)", "N");
    opts.optopt("s", "seed", "seed the random number generator", "SEED");
    opts.optopt("f", "find", "value to look up (default 50)", "VALUE");
    opts.optmulti("d", "remove", "value to remove, repeatable (default 50 then 30)", "VALUE");
    opts.optopt(
        "b",
        "batches",
        "comma separated sizes of the timed insert batches (default 100,1000,10000,100000)",
        "LIST",
    );
    opts.optopt("p", "perf-range", "random range for timed batches (default 100000)", "N");
    opts.optflagmulti("v", "verbose", "log more, repeat for even more");
    opts.optflag("h", "help", "print this help menu");
    opts
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("demo");

    let opts = options();
    let matches = opts
        .parse(args.get(1..).unwrap_or_default())
        .context("failed to parse command line")?;
    if matches.opt_present("h") {
        print!("{}", opts.usage(&format!("Usage: {} [options]", program)));
        process::exit(0);
    }

    let config = Config::from_matches(&matches)?;
    init_logging(config.verbosity)?;
    debug!("running with {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    walkthrough(&config, &mut rng);
    time_inserts(&config, &mut rng);
    Ok(())
}
