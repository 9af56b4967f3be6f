use anyhow::Result;
use orthogrid::generator::LayoutGenerator;
use orthogrid::render::LayoutRenderer;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Setup tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let (graph, root) = LayoutGenerator::generate()?;
    println!("{}", LayoutRenderer::render(&graph, root));

    Ok(())
}
