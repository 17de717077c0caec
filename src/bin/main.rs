use airfoil_flow::airfoil::catalog::AirfoilCatalog;
use airfoil_flow::airfoil::reference::CgPosition;
use airfoil_flow::config::{AirfoilSelection, SceneConfig};
use airfoil_flow::geometry::PointSequence;
use airfoil_flow::scene::Scene;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "airfoil-flow")]
#[command(about = "Generate an airfoil outline and synthetic flow field for plotting")]
struct Cli {
    /// JSON scene configuration; defaults are used for anything it leaves out
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for outline.txt and scene.json
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Directory holding coordinate tables for tabulated catalog sections
    #[arg(long, default_value = "airfoils")]
    data_dir: PathBuf,

    /// 4-digit NACA designator, e.g. 2412
    #[arg(long, conflicts_with = "name")]
    code: Option<String>,

    /// Catalog name, e.g. "Clark Y"
    #[arg(long)]
    name: Option<String>,

    /// Angle of attack in degrees
    #[arg(long, allow_hyphen_values = true)]
    aoa: Option<f64>,

    /// Freestream speed
    #[arg(long)]
    speed: Option<f64>,

    /// Center of gravity position: front, middle or back
    #[arg(long)]
    cg: Option<CgPosition>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let scene = Scene::build(&config, &cli.data_dir).context("Failed to build scene")?;
    info!(
        points = scene.outline.len(),
        marker_x = scene.marker.point.x,
        marker_y = scene.marker.point.y,
        "built scene"
    );

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("Failed creating directory {}", cli.out.display()))?;
    write_points(&scene.outline, &config.airfoil, &cli.out.join("outline.txt"))?;

    let scene_path = cli.out.join("scene.json");
    let file = File::create(&scene_path)
        .with_context(|| format!("Failed creating file {}", scene_path.display()))?;
    serde_json::to_writer(BufWriter::new(file), &scene).context("Failed writing scene")?;
    info!(path = %scene_path.display(), "wrote scene");

    Ok(())
}

fn build_config(cli: &Cli) -> Result<SceneConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed reading config {}", path.display()))?;
            SceneConfig::from_json(&text)?
        }
        None => SceneConfig::default(),
    };

    if let Some(code) = &cli.code {
        config.airfoil = AirfoilSelection::Code(code.clone());
    }
    if let Some(name) = &cli.name {
        config.airfoil = AirfoilSelection::Catalog(name.parse::<AirfoilCatalog>()?);
    }
    if let Some(aoa) = cli.aoa {
        config.angle_of_attack = aoa;
    }
    if let Some(speed) = cli.speed {
        config.freestream = speed;
    }
    if let Some(cg) = cli.cg {
        config.cg_position = cg;
    }

    config.validate()?;
    Ok(config)
}

/// Writes the outline in the coordinate table format, so it can be read back as a tabulated
/// section.
fn write_points(
    points: &PointSequence,
    airfoil: &AirfoilSelection,
    file_name: &Path,
) -> Result<()> {
    let mut file = BufWriter::new(
        File::create(file_name)
            .with_context(|| format!("Failed creating file {}", file_name.display()))?,
    );
    writeln!(file, "{}", header(airfoil))?;
    for p in points.iter() {
        writeln!(file, "{} {}", &p.x, &p.y)?;
    }

    Ok(())
}

fn header(airfoil: &AirfoilSelection) -> String {
    match airfoil {
        AirfoilSelection::Code(code) => format!("NACA {}", code.trim_start_matches("NACA").trim()),
        AirfoilSelection::Catalog(entry) => entry.to_string(),
        AirfoilSelection::Table(path) => path.display().to_string(),
    }
}
