//! # Conduit CLI Application
//!
//! Interactive terminal demo: evaluate one link's cross-section geometry.
//!
//! Set `RUST_LOG=debug` to see link resolution messages.

use std::io::{self, BufRead, Write};

use log::debug;

use geom_core::network::{GeometryTable, LinkSpec};
use geom_core::registry::{GeometryKind, ALL_KINDS};
use geom_core::{CrossSection, CrossSectionState, DepthPair, GeomResult, Shape};

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    match read_line(prompt) {
        Some(input) => input.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_kind() -> GeomResult<GeometryKind> {
    println!("Available shapes:");
    for kind in ALL_KINDS {
        let code = kind.code().map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
        println!("  {:>2}  {:<12} {}", code, kind.name(), kind.metadata().description);
    }
    println!();

    let input = read_line("Shape name or code [circular]: ").unwrap_or_default();
    if input.is_empty() {
        return Ok(GeometryKind::Circular);
    }
    match input.parse::<i64>() {
        Ok(code) => GeometryKind::from_code(code),
        Err(_) => GeometryKind::from_name(&input),
    }
}

/// Prompt for each parameter slot, then resolve through a one-link table so
/// the dimensions are validated the same way a network file would be.
fn prompt_shape(kind: GeometryKind) -> GeomResult<Shape> {
    let meta = kind.metadata();
    let mut params = Vec::with_capacity(meta.parameters.len());
    for (i, p) in meta.parameters.iter().enumerate() {
        let prompt = format!("g{} {} - {} ({}) [{}]: ", i + 1, p.symbol, p.description, p.units, p.example);
        params.push(prompt_f64(&prompt, p.example));
    }

    let mut table = GeometryTable::new("CLI");
    table.add_link(LinkSpec::legacy("CLI-Demo", kind, &params));
    let shape = table.shapes()?.remove(0);
    debug!("Evaluating {:?}", shape);
    Ok(shape)
}

fn print_state(kind: GeometryKind, depths: DepthPair, y_m: f64, state: &CrossSectionState) {
    println!("═══════════════════════════════════════");
    println!("  CROSS-SECTION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Shape:       {}", kind);
    println!("  Depths:      {:.4} m upstream, {:.4} m downstream", depths.upstream_m, depths.downstream_m);
    println!("  Link depth:  {:.4} m", y_m);
    println!();
    println!("Geometry:");
    println!("  A  = {:.6} m²", state.area_m2);
    println!("  Pe = {:.6} m", state.perimeter_m);
    println!("  R  = {:.6} m", state.hydraulic_radius_m);
    println!("  B  = {:.6} m", state.top_width_m);
    println!("═══════════════════════════════════════");
}

/// Closed conduits flowing full report the slot width as B.
fn print_slot_note(kind: GeometryKind, shape: &Shape, y_m: f64) {
    if kind.has_slot() && y_m >= shape.max_depth_m() {
        println!();
        println!("Note: {} is surcharged; B is the Preissman slot width.", kind);
    }
}

fn run() -> GeomResult<()> {
    let kind = prompt_kind()?;
    println!();
    println!("{} parameters:", kind);
    let shape = prompt_shape(kind)?;

    println!();
    let default_depth = shape.max_depth_m() / 2.0;
    let h_up = prompt_f64(&format!("Upstream depth (m) [{}]: ", default_depth), default_depth);
    let h_dn = prompt_f64(&format!("Downstream depth (m) [{}]: ", default_depth), default_depth);
    let depths = DepthPair::new(h_up, h_dn);

    let state = shape.evaluate(depths);
    println!();
    let y_m = shape.reduce_depth(depths);
    print_state(kind, depths, y_m, &state);
    print_slot_note(kind, &shape, y_m);

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&state) {
        println!("{}", json);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Conduit CLI - Cross-Section Geometry");
    println!("====================================");
    println!();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
