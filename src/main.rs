use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use sealkit::designer::font_manager::list_font_families;
use sealkit::settings::FONT_LABELS;
use sealkit::{
    default_config_path, export_stamp, init_logging, StampConfig, StampShape, BUILD_DATE, VERSION,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "sealkit")]
#[command(about = "Render official seals to PNG or SVG", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one stamp to a .png, .svg or .json file
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List selectable fonts and whether they are installed
    Fonts {
        /// Also print every installed font family
        #[arg(long)]
        all: bool,
    },

    /// Write a config file with default values
    InitConfig {
        /// Target path (defaults to the user config directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Config file (.toml or .json); the user config is used when omitted
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output file; format follows the extension
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Legend along the top arc
    #[arg(long)]
    top: Option<String>,

    /// Code on the bottom arc (circle) or caption (oval)
    #[arg(long)]
    bottom: Option<String>,

    /// circle or oval; resets the size to the shape's preset
    #[arg(long)]
    shape: Option<StampShape>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Ink color, e.g. "#ff0000" or "red"
    #[arg(long)]
    color: Option<String>,

    /// Font label (宋体) or family name (SimSun)
    #[arg(long)]
    font: Option<String>,

    /// Font size in points
    #[arg(long, value_name = "PT")]
    font_size: Option<u32>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<StampConfig> {
    if let Some(path) = path {
        return StampConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match default_config_path().filter(|p| p.exists()) {
        Some(path) => {
            debug!("Using config {}", path.display());
            StampConfig::load_from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(StampConfig::default()),
    }
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;

    if let Some(shape) = args.shape {
        config.apply_preset(shape);
    }
    if let Some(top) = args.top {
        config.top_text = top;
    }
    if let Some(bottom) = args.bottom {
        config.bottom_text = bottom;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(color) = args.color {
        config.color = color;
    }
    if let Some(font) = args.font {
        config.font = font;
    }
    if let Some(size) = args.font_size {
        config.font_size = size;
    }

    let params = config.to_parameters()?;
    export_stamp(&params, &args.output)
}

fn fonts(all: bool) {
    let installed = list_font_families();
    for (label, family) in FONT_LABELS {
        let mark = if installed.iter().any(|f| f == family.family_name()) {
            "installed"
        } else {
            "missing"
        };
        println!("{}\t{}\t{}", label, family, mark);
    }
    if all {
        println!();
        for family in installed {
            println!("{}", family);
        }
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path().context("No user config directory on this platform")?,
    };
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    StampConfig::default().save_to_file(&path)?;
    info!("Wrote default config to {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    debug!("sealkit {} built {}", VERSION, BUILD_DATE);

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => render(args),
        Commands::Fonts { all } => {
            fonts(all);
            Ok(())
        }
        Commands::InitConfig { path, force } => init_config(path, force),
    }
}
