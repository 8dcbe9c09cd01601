use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

const DEFAULT_OUT: &str = "../public/austin-panorama.jpg";

#[derive(Parser, Debug)]
#[command(name = "panogen", version, about = "Generate a placeholder equirectangular panorama")]
struct Cli {
    /// Output JPEG path.
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,

    /// JSON config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Seed for building colors and window lighting.
    #[arg(long)]
    seed: Option<u64>,

    /// Preferred caption font file (falls back to a system sans-serif).
    #[arg(long)]
    font: Option<PathBuf>,

    /// JPEG quality (1-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Caption title.
    #[arg(long)]
    title: Option<String>,

    /// Caption subtitle.
    #[arg(long)]
    subtitle: Option<String>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> anyhow::Result<panogen::PlaceholderConfig> {
        let mut config = match &self.config {
            Some(path) => panogen::PlaceholderConfig::from_json_file(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => panogen::PlaceholderConfig::default(),
        };

        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(q) = self.quality {
            config.jpeg_quality = q;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            config.subtitle = subtitle.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.to_config()?;

    println!("Generating placeholder panorama image...");
    let pano = panogen::generate_placeholder_panorama(&config)?;
    if let Some(font) = &pano.font {
        tracing::debug!(family = %font.family, origin = ?font.origin, "caption font");
    }

    panogen::write_jpeg(&pano.image, &cli.out, config.jpeg_quality)
        .with_context(|| format!("write jpeg '{}'", cli.out.display()))?;

    println!("Placeholder panorama saved to: {}", cli.out.display());
    println!("   Size: {}x{} pixels", pano.image.width(), pano.image.height());
    println!("\nReplace this with a real 360° panorama photo for production!");
    Ok(())
}
