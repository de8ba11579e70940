mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Algorithm, Cli};
use log::warn;
use minvc::io;
use minvc::solvers::{Approx, BranchAndBound, CoverSearch, MisSearch, Solver};
use minvc::trace::Trace;
use simple_logger::SimpleLogger;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .ok();

    let cli = Cli::parse();

    let mut graph = io::read_instance(&cli.inst)
        .with_context(|| format!("failed to load {}", cli.inst.display()))?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;
    let stem = cli.output_stem(&io::instance_stem(&cli.inst));
    let trace_path = cli.output_dir.join(format!("{stem}.trace"));
    let sol_path = cli.output_dir.join(format!("{stem}.sol"));

    let cutoff = Duration::from_secs(cli.time);
    let mut trace = Trace::create(&trace_path)
        .with_context(|| format!("failed to open {}", trace_path.display()))?;
    let cover = match cli.alg {
        Algorithm::BnB => BranchAndBound::new(cutoff).solve(&mut graph, &mut trace),
        Algorithm::Approx => Approx.solve(&mut graph, &mut trace),
        Algorithm::Ls1 => CoverSearch::new(cutoff, cli.seed).solve(&mut graph, &mut trace),
        Algorithm::Ls2 => MisSearch::new(cutoff, cli.seed).solve(&mut graph, &mut trace),
    }?;
    trace.flush()?;
    drop(trace);

    io::write_solution(&sol_path, &cover)
        .with_context(|| format!("failed to write {}", sol_path.display()))?;

    // Self-audit: every edge must be marked by some cover member.
    let coverage = graph.check_coverage(&cover);
    println!("cover size: {}", coverage.size);
    println!("covered: {}", coverage.covered);
    if coverage.covered != graph.num_edges() {
        warn!(
            "cover misses {} of {} edges",
            graph.num_edges() - coverage.covered,
            graph.num_edges()
        );
    }

    Ok(())
}
