//! Runs breadth-first queries on a graph or grid read from a file (or stdin).
//!
//! Usage:
//!   cargo run --example bfs_demo -- graph edges.txt --start 0 --target 3
//!   cargo run --example bfs_demo -- graph --directed edges.txt --start 0 --distance 2
//!   cargo run --example bfs_demo -- grid maze.txt --start 0,0 --target 4,4
//!
//! Set `GRAPHWALK_LOG=info` (or `debug`) to log each query span to stderr.

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::{Parser, Subcommand};
use graphwalk::{
    display::{DisplayPath, DisplayTraversal},
    edge_list::parse_edge_list,
    prelude::*,
    tracing_support::init_tracing,
};

/// Breadth-first search over an edge list or a grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query a graph given as an edge list (`u v` per line).
    Graph {
        /// Input file path (use '-' or omit to read from stdin)
        input: Option<String>,

        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,

        /// Vertex to start from; defaults to the first vertex in the file
        #[arg(long)]
        start: Option<i32>,

        /// Vertex to find a shortest path to
        #[arg(long)]
        target: Option<i32>,

        /// List the vertices at this many hops from the start
        #[arg(long)]
        distance: Option<usize>,
    },
    /// Find a shortest path on a grid of `.`/`0` (open) and `#`/`1` (obstacle).
    Grid {
        /// Input file path (use '-' or omit to read from stdin)
        input: Option<String>,

        /// Start cell as `row,col`
        #[arg(long, value_parser = parse_cell)]
        start: Cell,

        /// Target cell as `row,col`
        #[arg(long, value_parser = parse_cell)]
        target: Cell,
    },
}

fn parse_cell(value: &str) -> Result<Cell, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got {value:?}"))?;
    let row = row.trim().parse::<usize>().map_err(|err| format!("bad row: {err}"))?;
    let col = col.trim().parse::<usize>().map_err(|err| format!("bad column: {err}"))?;
    Ok(Cell::new(row, col))
}

fn main() {
    init_tracing();
    let args = Args::parse();
    match args.command {
        Command::Graph {
            input,
            directed,
            start,
            target,
            distance,
        } => {
            let directedness = if directed {
                Directedness::Directed
            } else {
                Directedness::Undirected
            };
            let text = read_input_or_exit(input.as_deref());
            let graph: AdjacencyList = match parse_edge_list(&text, directedness) {
                Ok(graph) => graph,
                Err(err) => {
                    eprintln!("Failed to parse edge list: {err}");
                    process::exit(1);
                }
            };
            run_graph_queries(&graph, start, target, distance);
        }
        Command::Grid {
            input,
            start,
            target,
        } => {
            let text = read_input_or_exit(input.as_deref());
            let grid: Grid = match text.parse() {
                Ok(grid) => grid,
                Err(err) => {
                    eprintln!("Failed to parse grid: {err}");
                    process::exit(1);
                }
            };
            print!("{grid}");
            let path = grid_shortest_path(&grid, start, target);
            println!("{}", DisplayPath::new(&path).with_title("Grid path"));
            if !path.is_empty() {
                println!("Path length: {}", path.len());
            }
        }
    }
}

fn run_graph_queries(
    graph: &AdjacencyList,
    start: Option<i32>,
    target: Option<i32>,
    distance: Option<usize>,
) {
    print!("{graph}");
    println!("Vertices: {}", graph.num_vertices());
    println!("Connected: {}", is_connected(graph));

    let components = find_connected_components(graph);
    println!("Components: {}", components.len());
    for (i, component) in components.iter().enumerate() {
        let title = format!("  #{i}");
        println!("{}", DisplayTraversal::new(component).with_title(&title));
    }

    let Some(start) = start.or_else(|| graph.vertex_ids().next()) else {
        return;
    };
    println!("{}", DisplayTraversal::new(&traverse(graph, start)));

    if let Some(target) = target {
        let path = shortest_path(graph, start, target);
        let title = format!("Shortest path {start} to {target}");
        println!("{}", DisplayPath::new(&path).with_title(&title));
        match shortest_distance(graph, start, target) {
            Some(hops) => println!("Shortest distance: {hops}"),
            None => println!("Shortest distance: unreachable"),
        }
    }

    if let Some(distance) = distance {
        let vertices = vertices_at_distance(graph, start, distance);
        let title = format!("At distance {distance}");
        println!("{}", DisplayTraversal::new(&vertices).with_title(&title));
    }
}

fn read_input_or_exit(input: Option<&str>) -> String {
    match input {
        Some("-") | None => {
            let mut buffer = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Failed to read stdin: {err}");
                process::exit(1);
            }
            buffer
        }
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("Failed to read {path}: {err}");
                process::exit(1);
            }
        },
    }
}
