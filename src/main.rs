use anyhow::{bail, Result};
use clap::Parser;
use cloud_snake::app::GameApp;
use cloud_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "cloud-snake")]
#[command(version, about = "Snake under a drifting cloud layer, in the terminal")]
struct Cli {
    /// Playfield width in pixels
    #[arg(long, default_value = "800")]
    width: i32,

    /// Playfield height in pixels
    #[arg(long, default_value = "800")]
    height: i32,

    /// Grid cell size in pixels
    #[arg(long, default_value = "20")]
    block_size: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.block_size <= 0 {
        bail!("block size must be positive");
    }
    if cli.width <= 0 || cli.width % cli.block_size != 0 {
        bail!("width must be a positive multiple of the block size");
    }
    if cli.height <= 0 || cli.height % cli.block_size != 0 {
        bail!("height must be a positive multiple of the block size");
    }

    let config = GameConfig::new(cli.width, cli.height, cli.block_size);

    let mut app = GameApp::new(config);
    app.run().await?;

    Ok(())
}
