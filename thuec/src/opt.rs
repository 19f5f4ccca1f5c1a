use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
/// Complete relations between words and compute normal forms
pub struct Opt {
    /// Give up completion after the given number of rounds
    ///
    /// Completion examines all pairs of rules in every round.
    /// If a round adds no new rule, the rules are confluent.
    /// Some presentations have no finite confluent set of rules,
    /// in which case completion stops with an error after this many rounds.
    #[arg(long, default_value_t = 100)]
    pub max_rounds: usize,

    /// Log completion steps
    ///
    /// Every round, overlap, and added or removed rule is logged on stderr.
    /// This overrides the log level of the `thue` library set via `LOG`.
    #[arg(long)]
    pub trace: bool,

    /// Print the rules obtained by completion
    #[arg(long)]
    pub rules: bool,

    /// Normalise queried words concurrently
    ///
    /// If this option is given with a number n, then
    /// maximally n words are normalised at the same time.
    /// If this option is given without an extra argument, then
    /// the number of concurrently normalised words is
    /// determined automatically from the number of CPUs.
    #[arg(long, short = 'j')]
    pub jobs: Option<Option<usize>>,

    /// Files to process (cumulative)
    ///
    /// Processing multiple files is equivalent to processing their concatenation.
    /// To read from standard input, use "-" as file name.
    /// If no file is given, standard input is read.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    pub fn config(&self) -> thue::Config {
        thue::Config {
            max_rounds: self.max_rounds,
            log: self.trace,
        }
    }

    /// Logger configured via `LOG`,
    /// showing the completion steps of `thue` if `--trace` is given.
    pub fn logger(&self) -> env_logger::Builder {
        let mut logger = env_logger::Builder::from_env("LOG");
        if self.trace {
            // a bare `thue` would also match `thuec`
            logger.filter_module("thue::", log::LevelFilter::Debug);
        }
        logger
    }
}

#[test]
fn parse_args() {
    let opt = Opt::parse_from(["thuec", "--max-rounds", "5", "-j", "--rules", "a.thue"]);
    assert_eq!(opt.max_rounds, 5);
    assert_eq!(opt.jobs, Some(None));
    assert!(opt.rules && !opt.trace);
    assert_eq!(opt.files, [PathBuf::from("a.thue")]);

    let opt = Opt::parse_from(["thuec", "-j", "4"]);
    assert_eq!(opt.jobs, Some(Some(4)));
    assert_eq!(opt.config(), thue::Config::default());
}

#[test]
fn trace() {
    use log::{Level, Log, Metadata};
    let debug = |target: &'static str| Metadata::builder().level(Level::Debug).target(target).build();
    let logger = Opt::parse_from(["thuec", "--trace"]).logger().build();
    assert!(logger.enabled(&debug("thue::event")));
    assert!(!logger.enabled(&debug("thuec::process")));
}
