use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rs_link_kinematics::kinematic_traits::{Kinematics, LinkId};
use rs_link_kinematics::manipulator::Manipulator;
use rs_link_kinematics::utils::{dump_chain, dump_position, dump_structure};

/// Reads the manipulator from YAML file and prints positions of its links.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with the manipulator description
    file: PathBuf,

    /// Only compute the position of this link (all links if omitted)
    #[arg(short, long)]
    link: Option<LinkId>,

    /// Print the structure of the manipulator first
    #[arg(short, long)]
    structure: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr. RUST_LOG overrides the default "warn" level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let manipulator = Manipulator::from_yaml_file(&args.file)
        .with_context(|| format!("Failed to load manipulator from {}", args.file.display()))?;

    if args.structure {
        dump_structure(&manipulator);
    }

    if let Some(id) = args.link {
        // Whole chain from the base up to the requested link
        let positions = manipulator.forward_with_link_positions(id)
            .with_context(|| format!("Position of link {} cannot be computed", id))?;
        dump_chain(&positions);
        return Ok(());
    }

    for link in manipulator.links() {
        match manipulator.forward(link.id()) {
            Ok(position) => dump_position(link.id(), &position),
            Err(err) => println!("link {}: {}", link.id(), err),
        }
    }
    Ok(())
}
