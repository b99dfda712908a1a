//! Shared pieces of the terminal demos: random map generation, command-line
//! options and ASCII rendering of searches and Sudoku boards.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use gridwalk_core::{NodeGrid, NodeKind, Point};
use gridwalk_paths::{NodeState, ObserveFn, PathFinder, SearchConfig, SearchEvent};
use gridwalk_sudoku::{Board, SIZE, Solution, SudokuError, solve_sudoku};
use log::debug;
use rand::{RngExt, SeedableRng};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Pathfinding demo: A* and Dijkstra on a random weighted map.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pathfind", long_about = None)]
pub struct DemoConfig {
    /// Map width in cells
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(i32).range(2..=256))]
    pub width: i32,

    /// Map height in cells
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(i32).range(1..=256))]
    pub height: i32,

    /// Probability that a cell becomes a wall
    #[arg(long = "walls", default_value_t = 0.25, value_parser = parse_density)]
    pub wall_density: f64,

    /// Probability that an open cell gets a traversal weight
    #[arg(long = "weights", default_value_t = 0.1, value_parser = parse_density)]
    pub weight_density: f64,

    /// Largest weight handed out to a weighted cell
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(0..=9))]
    pub max_weight: i32,

    /// Seed for the map generator
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Allow diagonal moves
    #[arg(short, long)]
    pub diagonals: bool,

    /// Redraw the grid while the search runs
    #[arg(short, long)]
    pub animate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 16,
            wall_density: 0.25,
            weight_density: 0.1,
            max_weight: 5,
            seed: 42,
            diagonals: false,
            animate: false,
        }
    }
}

fn parse_density(raw: &str) -> Result<f64, String> {
    let d: f64 = raw.parse().map_err(|_| format!("{raw:?} is not a number"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is outside 0.0-1.0"))
    }
}

// ---------------------------------------------------------------------------
// Map generation
// ---------------------------------------------------------------------------

/// Build a random map with the start in the top-left corner and the target
/// in the bottom-right one. Both endpoints are always open and unweighted.
pub fn random_map(cfg: &DemoConfig) -> NodeGrid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(cfg.seed);
    let mut grid = NodeGrid::new(cfg.width, cfg.height);
    for p in grid.bounds() {
        if rng.random_bool(cfg.wall_density) {
            grid.set_passable(p, false);
        } else if cfg.max_weight > 0 && rng.random_bool(cfg.weight_density) {
            grid.set_weight(p, rng.random_range(1..=cfg.max_weight));
        }
    }
    let start = Point::new(0, 0);
    let target = Point::new(grid.max_x(), grid.max_y());
    for p in [start, target] {
        grid.set_passable(p, true);
        grid.set_weight(p, 0);
    }
    grid.set_start(start);
    grid.set_target(target);
    grid
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Result of one demo search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub path: Vec<Point>,
    pub expanded: usize,
}

/// Step a search to completion. With `frame` set, the grid is redrawn to
/// `out` after every step and the thread sleeps for `frame` between steps.
pub fn run_search<W: Write>(
    out: &mut W,
    finder: &mut PathFinder,
    grid: &NodeGrid,
    (start, target): (Point, Point),
    config: SearchConfig,
    frame: Option<Duration>,
) -> io::Result<RunOutcome> {
    let mut expanded = 0usize;
    let observer = ObserveFn(|ev: SearchEvent| {
        if let SearchEvent::Expanded { .. } = ev {
            expanded += 1;
        }
    });
    let mut search = finder.search_with(grid, start, target, config, observer);
    while !search.step().is_done() {
        if let Some(delay) = frame {
            write!(out, "\x1b[H\x1b[2J{}", render(grid, search.finder(), search.path()))?;
            out.flush()?;
            thread::sleep(delay);
        }
    }
    let path = search.path().to_vec();
    drop(search);
    debug!(
        "{:?}: {} nodes expanded, path of {} nodes",
        config.algorithm,
        expanded,
        path.len()
    );
    Ok(RunOutcome { path, expanded })
}

/// Solve `board` and draw the puzzle followed by its solution.
pub fn sudoku_report(board: &Board) -> Result<String, SudokuError> {
    let solution = solve_sudoku(board)?;
    Ok(format!(
        "Puzzle ({} givens):\n{}\nSolution ([d] found by the solver):\n{}",
        board.filled_count(),
        render_board(board, None),
        render_board(&solution.board, Some(&solution)),
    ))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw `grid` as text, one line per row.
///
/// `S`/`T` are the endpoints, `#` walls, `*` the path, `:` closed and `o`
/// open nodes of the finder's last run, digits are weights.
pub fn render(grid: &NodeGrid, finder: &PathFinder, path: &[Point]) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let Some(node) = grid.node(p) else {
                continue;
            };
            let ch = match node.kind() {
                NodeKind::Start => 'S',
                NodeKind::Target => 'T',
                NodeKind::Normal if !node.passable() => '#',
                NodeKind::Normal if path.contains(&p) => '*',
                NodeKind::Normal => match finder.node_state(p) {
                    NodeState::Closed => ':',
                    NodeState::Open => 'o',
                    NodeState::Unvisited => weight_char(node.weight()),
                },
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn weight_char(weight: i32) -> char {
    match weight {
        0 => '.',
        w => char::from_digit(w.min(9) as u32, 10).unwrap_or('9'),
    }
}

/// Draw a board with box separators. Cells in `highlight` are wrapped as
/// `[d]`, others padded as ` d `.
pub fn render_board(board: &Board, highlight: Option<&Solution>) -> String {
    let mut out = String::new();
    for row in 0..SIZE {
        if row > 0 && row % 3 == 0 {
            out.push_str("---------+---------+---------\n");
        }
        for col in 0..SIZE {
            if col > 0 && col % 3 == 0 {
                out.push('|');
            }
            let d = board
                .get(row, col)
                .map_or('.', |d| char::from(b'0' + d));
            if highlight.is_some_and(|s| s.is_filled_by_solver(row, col)) {
                out.push_str(&format!("[{d}]"));
            } else {
                out.push_str(&format!(" {d} "));
            }
        }
        out.push('\n');
    }
    out
}
