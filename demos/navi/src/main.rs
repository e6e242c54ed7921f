//! navi: answer one route query from a CSV road-network feed.
//!
//! ```text
//! navi [NODES_CSV EDGES_CSV] [ORIGIN_LAT ORIGIN_LNG DEST_LAT DEST_LNG]
//! ```
//!
//! Without arguments it loads the small Navi Mumbai sample under `data/` and
//! routes across it.  The response is printed as the JSON array a client
//! would receive: `[{"lat": .., "lng": ..}, ...]`, or `[]` when there is no
//! route.  Set `RUST_LOG=debug` to see ingestion and query logging.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use sr_core::GeoPoint;
use sr_engine::{RouteEngine, RouteRequest};

const SAMPLE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Default query: just off node 1001 to just off node 1004.
const DEFAULT_REQUEST: [f64; 4] = [19.0329, 73.0295, 19.0366, 73.0352];

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (nodes_path, edges_path, coords) = match args.len() {
        0 => (sample("nodes.csv"), sample("edges.csv"), DEFAULT_REQUEST.to_vec()),
        2 => (PathBuf::from(&args[0]), PathBuf::from(&args[1]), DEFAULT_REQUEST.to_vec()),
        4 => (sample("nodes.csv"), sample("edges.csv"), parse_coords(&args)?),
        6 => (PathBuf::from(&args[0]), PathBuf::from(&args[1]), parse_coords(&args[2..])?),
        n => bail!("expected 0, 2, 4 or 6 arguments, got {n}"),
    };

    let engine = RouteEngine::with_defaults();

    let t_load = Instant::now();
    let snapshot = engine
        .ingest_csv(&nodes_path, &edges_path)
        .with_context(|| format!("loading {} and {}", nodes_path.display(), edges_path.display()))?;
    log::info!(
        "loaded {} nodes / {} edges in {:.3} s",
        snapshot.store().node_count(),
        snapshot.store().edge_count(),
        t_load.elapsed().as_secs_f64(),
    );

    let request = RouteRequest::new(
        GeoPoint::new(coords[0], coords[1]),
        GeoPoint::new(coords[2], coords[3]),
    );
    let route = engine.route(&request)?;

    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}

fn sample(file: &str) -> PathBuf {
    PathBuf::from(SAMPLE_DIR).join(file)
}

fn parse_coords(args: &[String]) -> Result<Vec<f64>> {
    args.iter()
        .map(|a| a.parse::<f64>().with_context(|| format!("not a coordinate: {a:?}")))
        .collect()
}
