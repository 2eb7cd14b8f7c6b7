mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Args;
use objwire::obj::ObjParser;
use objwire::output::save_image;
use objwire::Renderer;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut parser = ObjParser::with_sink(args.parser_config(), objwire::diagnostics::TracingSink);
    let mesh = parser
        .parse_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let renderer = Renderer::new(args.render_config());
    let (buffer, stats) = renderer.render(&mesh).context("failed to rasterize mesh")?;
    if stats.edges_skipped > 0 {
        tracing::warn!(
            skipped = stats.edges_skipped,
            "some edges fell outside the image and were not drawn"
        );
    }

    save_image(&buffer, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
