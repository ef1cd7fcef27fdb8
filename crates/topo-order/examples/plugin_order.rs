//! Load a handful of plugins in dependency order.
//!
//! Run with `RUST_LOG=topo_order=trace` to see every resolution scan.

use topo_order::{OrderingConfig, StaticDependencies, TopologicalCursor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("topo_order=debug")),
        )
        .init();

    let plugins = ["web", "auth", "db", "cache", "metrics"];
    let deps = StaticDependencies::new()
        .with_dependencies(0, [1, 3])
        .with_dependencies(1, [2])
        .with_dependencies(3, [2, 4]);

    let config = OrderingConfig::default().with_verify_invariants(true);
    let mut cursor = TopologicalCursor::with_config(&plugins, &deps, config)?;

    println!("\n=== Load order ===");
    while cursor.has_next() {
        let position = cursor.next_index();
        let plugin = cursor.try_next()?;
        println!("  {} (declared at position {})", plugin, position);
    }

    // A cycle is reported instead of producing a partial order
    let cyclic = deps.with_dependencies(2, [0]);
    match TopologicalCursor::new(&plugins, &cyclic) {
        Ok(_) => println!("\nunexpected: cyclic declarations resolved"),
        Err(err) => println!("\nRejected: {}", err),
    }

    Ok(())
}
