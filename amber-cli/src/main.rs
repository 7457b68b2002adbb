//! amber CLI
//!
//! Loads a JSON scene (a live page and its structural clone), bakes the live
//! CSSOM into the clone and prints the result.

use std::fs;
use std::path::PathBuf;

use amber_common::{RandomUids, Resource, Resources, SequentialUids, UidGenerator, Warnings};
use amber_dom::{NodeId, to_html};
use amber_snapshot::{Scene, SerializePass};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "amber", version, about = "Bake live CSSOM state into a DOM snapshot")]
struct Args {
    /// Scene file describing the live page and its clone
    scene: PathBuf,

    /// Stable identifier attribute shared by live and clone nodes
    #[arg(long)]
    id_attribute: Option<String>,

    /// Attribute marking shadow hosts in the live page
    #[arg(long)]
    shadow_host_attribute: Option<String>,

    /// Attribute set on synthesized style elements
    #[arg(long)]
    serialized_marker: Option<String>,

    /// Number resource addresses 0, 1, 2... instead of random ids
    #[arg(long)]
    sequential_ids: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    html: String,
    resources: &'a Resources,
    warnings: Vec<&'a str>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = fs::read_to_string(&args.scene)
        .with_context(|| format!("failed to read {}", args.scene.display()))?;
    let mut scene = Scene::from_json(&source)
        .with_context(|| format!("failed to parse {}", args.scene.display()))?;
    if let Some(name) = args.id_attribute {
        scene.options.id_attribute = name;
    }
    if let Some(name) = args.shadow_host_attribute {
        scene.options.shadow_host_attribute = name;
    }
    if let Some(name) = args.serialized_marker {
        scene.options.serialized_marker = name;
    }

    let (live, mut clone) = scene.build()?;
    let mut resources = Resources::new();
    let mut warnings = Warnings::new();
    let mut sequential = SequentialUids::default();
    let mut random = RandomUids;
    let uids: &mut dyn UidGenerator = if args.sequential_ids {
        &mut sequential
    } else {
        &mut random
    };

    SerializePass::new(&live, &mut clone, &mut resources, &mut warnings, uids, &scene.options)
        .run();
    info!(
        "baked {} with {} resources and {} warnings",
        args.scene.display(),
        resources.len(),
        warnings.len()
    );

    let html = to_html(&clone.tree, NodeId::ROOT);

    if args.json {
        let report = Report {
            html,
            resources: &resources,
            warnings: warnings.iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Snapshot ===");
    println!("{html}");

    println!("\n=== Resources ===");
    println!("{} resources", resources.len());
    for Resource { url, mimetype, content } in &resources {
        println!("{} ({mimetype})", url.cyan());
        println!("{content}");
    }

    warnings.report("CSSOM");

    Ok(())
}
