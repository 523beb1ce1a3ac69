use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use design_guardian::Config;
use design_guardian::backend::HttpBackendFactory;
use design_guardian::canvas::{self, CanvasSettings, PatternCanvas};
use design_guardian::design::load_model_file;
use design_guardian::gallery::{FsAssetLoader, GalleryRecord, ModelRef, SceneSettings, compose_scene};
use design_guardian::session::{Session, SessionSettings};
use design_guardian::views::GalleryView;

#[derive(Parser, Debug)]
#[command(name = "design-guardian")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DESIGN_GUARDIAN_GIT_HASH"), ")"),
    about = "Textile pattern canvas and gallery tools for Design Guardian"
)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Config file to use instead of ~/.config/design-guardian/config.toml
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a canvas script and export the pattern as PNG
    Render {
        /// JSON command script ("-" reads stdin)
        #[arg(long, short = 's', value_name = "FILE")]
        script: PathBuf,

        /// Output file (defaults to the configured export directory)
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print a data URI to stdout instead of writing a file
        #[arg(long, conflicts_with = "out")]
        data_uri: bool,

        /// Hide the grid and ruler regardless of config
        #[arg(long)]
        no_overlays: bool,
    },

    /// Compose the gallery scene and print it as JSON
    Scene {
        /// GLB models to place, in island order
        #[arg(long = "model", value_name = "FILE")]
        models: Vec<PathBuf>,

        /// Fetch the public feed from the backend instead of using local models
        #[arg(long, conflicts_with = "models")]
        feed: bool,

        /// Print garment poses at this time (seconds) instead of the full scene
        #[arg(long, value_name = "SECONDS")]
        at: Option<f64>,
    },

    /// Validate a GLB model the way the import dialog does
    CheckAsset {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Render {
            script,
            out,
            data_uri,
            no_overlays,
        } => render(&config, &script, out.as_deref(), data_uri, no_overlays),
        Command::Scene { models, feed, at } => scene(&config, models, feed, at).await,
        Command::CheckAsset { file } => check_asset(&config, &file),
    }
}

fn render(
    config: &Config,
    script: &Path,
    out: Option<&Path>,
    data_uri: bool,
    no_overlays: bool,
) -> anyhow::Result<()> {
    let text = if script == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        text
    } else {
        std::fs::read_to_string(script)
            .with_context(|| format!("Failed to read script {}", script.display()))?
    };
    let commands = canvas::parse_script(&text).context("Invalid canvas script")?;

    let mut settings = CanvasSettings::from_config(config);
    if no_overlays {
        settings = settings.without_overlays();
    }
    let mut pattern = PatternCanvas::new(settings)?;
    canvas::replay(&mut pattern, &commands)?;
    log::info!("Replayed {} canvas commands", commands.len());

    if data_uri {
        println!("{}", pattern.export_data_uri()?);
        return Ok(());
    }

    let png = pattern.export_png()?;
    let path = match out {
        Some(path) => {
            canvas::write_png(&png, path)?;
            path.to_path_buf()
        }
        None => canvas::save_png(&png, &config.export)?,
    };
    println!("{}", path.display());
    Ok(())
}

async fn scene(config: &Config, models: Vec<PathBuf>, feed: bool, at: Option<f64>) -> anyhow::Result<()> {
    let loader = FsAssetLoader::from_config(config);
    let settings = SceneSettings::from_config(config);

    let scene = if feed {
        let factory = Arc::new(HttpBackendFactory::new(config.backend.clone()));
        let session = Session::anonymous(factory, SessionSettings::from_config(config))?;
        GalleryView::load(session.client(), &loader, &settings).await.scene
    } else {
        let records: Vec<GalleryRecord> = models
            .into_iter()
            .map(|path| GalleryRecord {
                id: None,
                name: path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                model: Some(ModelRef::Path(path)),
            })
            .collect();
        compose_scene(&records, &loader, &settings)
    };

    if scene.placeholder_count() > 0 {
        log::warn!("{} garment(s) shown as placeholders", scene.placeholder_count());
    }

    let json = match at {
        Some(seconds) => serde_json::to_string_pretty(&scene.at(seconds))?,
        None => serde_json::to_string_pretty(&scene)?,
    };
    println!("{}", json);
    Ok(())
}

fn check_asset(config: &Config, file: &Path) -> anyhow::Result<()> {
    let model = load_model_file(file, config.import.max_asset_bytes)?;
    println!(
        "{}: glTF binary v{}, {} bytes",
        model.file.name,
        model.version,
        model.size()
    );
    Ok(())
}
