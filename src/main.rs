use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

// 导入库模块
use graphalgo::config::Config;
use graphalgo::core::types::{VertexId, Weight, INFINITY};
use graphalgo::graph::{Graph, GraphBackend, GraphDefinition};
use graphalgo::services::algorithm::{
    BellmanFord, Bfs, ConnectedComponents, CycleDetection, Dfs, Dijkstra, FloydWarshall, Kruskal,
    MstResult, Prim, ShortestPathResult, TopologicalSort,
};
use graphalgo::utils::logging;

#[derive(Parser)]
#[clap(version, author = "GraphAlgo Contributors")]
struct Cli {
    /// Log level used when no config file is given
    #[clap(long, global = true, default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one algorithm against a graph definition file (.toml or .json)
    Run {
        #[clap(value_enum)]
        algorithm: Algorithm,
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(short, long, default_value_t = 0)]
        source: VertexId,
        #[clap(short, long)]
        target: Option<VertexId>,
        /// Print the result as JSON
        #[clap(long)]
        json: bool,
        /// Config file; enables file logging as configured there
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the classic scenarios on built-in graphs
    Demo {
        #[clap(long, value_enum, default_value_t = GraphBackend::List)]
        backend: GraphBackend,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Topo,
    Cycle,
    Components,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Kruskal,
    Prim,
    PrimPq,
}

/// 一次算法调用的输出：文本行与 JSON 两种形式
struct Report {
    lines: Vec<String>,
    value: Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            algorithm,
            graph,
            source,
            target,
            json,
            config,
        } => {
            let config = match config {
                Some(path) => {
                    let config = Config::load(&path)?;
                    config.validate()?;
                    logging::init(&config)?;
                    config
                }
                None => {
                    logging::init_stderr(&cli.log_level)?;
                    Config::default()
                }
            };

            let definition = GraphDefinition::load(&graph)?;
            let graph = definition.build(&config.graph)?;
            let report = execute(graph.as_ref(), algorithm, source, target)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.value)?);
            } else {
                for line in &report.lines {
                    println!("{}", line);
                }
            }
        }
        Command::Demo { backend } => {
            logging::init_stderr(&cli.log_level)?;
            demo(backend)?;
        }
    }

    logging::shutdown();
    Ok(())
}

fn execute(
    graph: &dyn Graph,
    algorithm: Algorithm,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<Report> {
    let report = match algorithm {
        Algorithm::Dfs => {
            let result = Dfs::traverse(graph, source)?;
            let mut lines = vec![format!("DFS order from {}: {:?}", source, result.order)];
            if let Some(target) = target {
                match result.path_to(target) {
                    Some(path) => lines.push(format!("DFS tree path to {}: {:?}", target, path)),
                    None => lines.push(format!("{} is not reachable", target)),
                }
            }
            Report {
                lines,
                value: serde_json::to_value(&result)?,
            }
        }
        Algorithm::Bfs => {
            let result = Bfs::traverse(graph, source)?;
            let mut lines = vec![format!("BFS order from {}: {:?}", source, result.order)];
            let mut value = json!({ "traversal": result });
            if let Some(target) = target {
                let path = Bfs::shortest_path(graph, source, target)?;
                lines.push(format!("Fewest-hop path to {}: {:?}", target, path));
                value["path"] = json!(path);
            }
            Report { lines, value }
        }
        Algorithm::Topo => {
            let order = TopologicalSort::sort_checked(graph)?;
            Report {
                lines: vec![format!("Topological order: {:?}", order)],
                value: json!({ "order": order }),
            }
        }
        Algorithm::Cycle => {
            let has_cycle = CycleDetection::has_cycle(graph);
            Report {
                lines: vec![format!("Has cycle: {}", has_cycle)],
                value: json!({ "has_cycle": has_cycle }),
            }
        }
        Algorithm::Components => {
            if graph.is_directed() {
                log::warn!("连通分量只对无向图有意义");
            }
            let components = ConnectedComponents::find(graph);
            let mut lines = vec![format!("{} component(s)", components.len())];
            lines.extend(components.iter().map(|component| format!("  {:?}", component)));
            Report {
                lines,
                value: json!({ "components": components }),
            }
        }
        Algorithm::Dijkstra => {
            shortest_path_report("Dijkstra", Dijkstra::shortest_paths(graph, source)?, target)?
        }
        Algorithm::BellmanFord => shortest_path_report(
            "Bellman-Ford",
            BellmanFord::shortest_paths(graph, source)?,
            target,
        )?,
        Algorithm::FloydWarshall => {
            let result = FloydWarshall::all_pairs(graph);
            let mut lines = Vec::new();
            for (i, from) in result.vertices.iter().enumerate() {
                let row: Vec<String> = result.distances[i]
                    .iter()
                    .map(|&distance| format_distance(distance))
                    .collect();
                lines.push(format!("{:>4}: {}", from, row.join(" ")));
            }
            if result.has_negative_cycle() {
                lines.push("Negative cycle detected".to_string());
            }

            let mut value = serde_json::to_value(&result)?;
            if let Some(target) = target {
                let path = result.path(source, target)?;
                lines.push(format!("Path {} -> {}: {:?}", source, target, path));
                value["path"] = json!(path);
            }
            Report { lines, value }
        }
        Algorithm::Kruskal => mst_report("Kruskal", Kruskal::minimum_spanning_tree(graph)?)?,
        Algorithm::Prim => mst_report("Prim", Prim::minimum_spanning_tree(graph, source)?)?,
        Algorithm::PrimPq => mst_report(
            "Prim (priority queue)",
            Prim::with_priority_queue(graph, source)?,
        )?,
    };

    Ok(report)
}

fn shortest_path_report(
    name: &str,
    result: ShortestPathResult,
    target: Option<VertexId>,
) -> Result<Report> {
    let mut lines = vec![format!("{} distances from {}:", name, result.source)];
    let ordered: BTreeMap<VertexId, Weight> = result
        .distances
        .iter()
        .map(|(&vertex, &distance)| (vertex, distance))
        .collect();
    lines.extend(
        ordered
            .iter()
            .map(|(vertex, &distance)| format!("  {}: {}", vertex, format_distance(distance))),
    );

    let mut value = serde_json::to_value(&result)?;
    if let Some(target) = target {
        let path = result.path_to(target)?;
        lines.push(format!("Path to {}: {:?}", target, path));
        value["path"] = json!(path);
    }

    Ok(Report { lines, value })
}

fn mst_report(name: &str, result: MstResult) -> Result<Report> {
    let mut lines = vec![format!(
        "{} MST: total weight {}, {} edge(s)",
        name,
        result.total_weight,
        result.edge_count()
    )];
    lines.extend(result.edges.iter().map(|edge| format!("  {}", edge)));

    Ok(Report {
        lines,
        value: serde_json::to_value(&result)?,
    })
}

fn format_distance(distance: Weight) -> String {
    if distance == INFINITY {
        "inf".to_string()
    } else {
        distance.to_string()
    }
}

fn demo(backend: GraphBackend) -> Result<()> {
    let config = Config::default();
    println!("Backend: {}", backend);

    let mut mst_graph = backend.create(false, &config.graph);
    for (from, to, weight) in [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)] {
        mst_graph.add_edge(from, to, weight);
    }
    for report in [
        mst_report("Kruskal", Kruskal::minimum_spanning_tree(mst_graph.as_ref())?)?,
        mst_report("Prim", Prim::minimum_spanning_tree(mst_graph.as_ref(), 0)?)?,
    ] {
        report.lines.iter().for_each(|line| println!("{}", line));
    }

    let edges = [(0, 1, 5), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8)];
    for directed in [true, false] {
        let mut graph = backend.create(directed, &config.graph);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        println!("{}:", graph.kind());
        let report =
            shortest_path_report("Dijkstra", Dijkstra::shortest_paths(graph.as_ref(), 0)?, Some(3))?;
        report.lines.iter().for_each(|line| println!("{}", line));
    }

    let mut cyclic = backend.create(true, &config.graph);
    for (from, to) in [(1, 2), (2, 3), (3, 1)] {
        cyclic.add_edge(from, to, 1);
    }
    println!(
        "Cycle 1 -> 2 -> 3 -> 1 detected: {}",
        CycleDetection::has_cycle(cyclic.as_ref())
    );
    match TopologicalSort::sort_checked(cyclic.as_ref()) {
        Ok(order) => println!("Topological order: {:?}", order),
        Err(err) => println!("Topological sort refused: {}", err),
    }

    Ok(())
}
