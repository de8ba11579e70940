use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which solver a run dispatches to. The names double as output file
/// tags, so they are matched verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    #[value(name = "BnB")]
    BnB,
    #[value(name = "Approx")]
    Approx,
    #[value(name = "LS1")]
    Ls1,
    #[value(name = "LS2")]
    Ls2,
}

#[derive(Parser)]
#[command(
    name = "minvc",
    about = "Exact and heuristic minimum vertex cover solvers",
    version,
    after_help = "\
Examples:
  minvc --inst data/power.graph --alg BnB --time 600
  minvc --inst data/power.graph --alg LS1 --time 60 --seed 42

Each run writes <stem>_<alg>[_<time>[_<seed>]].trace and .sol under the
output directory; the trace has one '<elapsed>,<best>' line per
improvement and the solution file lists the cover as 1-based ids."
)]
pub struct Cli {
    /// Instance file: 'N M W' header, then one 1-based adjacency line per vertex
    #[arg(long, default_value = "input.txt")]
    pub inst: PathBuf,

    /// Solver to run
    #[arg(long, value_enum, default_value = "BnB")]
    pub alg: Algorithm,

    /// Wall-clock cutoff in seconds
    #[arg(long, default_value_t = 600)]
    pub time: u64,

    /// RNG seed (used by LS1 and LS2 only)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Directory for trace and solution files
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Output file stem: instance stem, algorithm tag, and the cutoff
    /// and seed where the algorithm uses them.
    pub fn output_stem(&self, instance_stem: &str) -> String {
        match self.alg {
            Algorithm::BnB => format!("{}_BnB_{}", instance_stem, self.time),
            Algorithm::Approx => format!("{}_Approx", instance_stem),
            Algorithm::Ls1 => format!("{}_LS1_{}_{}", instance_stem, self.time, self.seed),
            Algorithm::Ls2 => format!("{}_LS2_{}_{}", instance_stem, self.time, self.seed),
        }
    }
}
