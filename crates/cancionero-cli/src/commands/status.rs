use anyhow::Result;
use cancionero_engine::QueryEngine;

pub fn show_status(engine: &QueryEngine, json: bool) -> Result<()> {
    let summary = engine.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\n📊 Cancionero Status\n");
    match &summary.source {
        Some(path) => println!("  Catalog: {}", path.display()),
        None => println!("  Catalog: <memory>"),
    }
    println!("  Songs: {}", summary.songs);
    println!("  Clusters: {}", summary.clusters);
    println!("  Neighbor indices built: {}", summary.indices_built);
    println!("  Reference year: {}", engine.reference_year());

    Ok(())
}
