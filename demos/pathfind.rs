//! Terminal pathfinding demo: A* and Dijkstra on a random weighted map.
//!
//! Run: cargo run --bin pathfind -- --help

use std::io;
use std::time::Duration;

use clap::Parser;
use gridwalk_demos::{DemoConfig, random_map, render, run_search};
use gridwalk_paths::{PathFinder, SearchConfig};

const FRAME: Duration = Duration::from_millis(25);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = DemoConfig::parse();
    let grid = random_map(&cfg);
    let start = grid.start().ok_or("map has no start")?;
    let target = grid.target().ok_or("map has no target")?;
    let mut finder = PathFinder::for_grid(&grid);
    let frame = cfg.animate.then_some(FRAME);
    let mut out = io::stdout();

    for (name, search_cfg) in [
        ("A*", SearchConfig::astar(cfg.diagonals)),
        ("Dijkstra", SearchConfig::dijkstra(cfg.diagonals)),
    ] {
        let run = run_search(&mut out, &mut finder, &grid, (start, target), search_cfg, frame)?;
        println!("{name} (seed {}, diagonals {}):", cfg.seed, cfg.diagonals);
        print!("{}", render(&grid, &finder, &run.path));
        println!("{} nodes expanded", run.expanded);
        if run.path.is_empty() {
            println!("no path\n");
        } else {
            println!(
                "path length {}, cost {}\n",
                run.path.len(),
                finder.cost_at(target)
            );
        }
    }
    Ok(())
}
