use anyhow::Context;

// Entry point for `cargo run -p web-server`. The `foda serve` subcommand
// in the root binary does the same with a CLI-selected address.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = configuration::load_settings(None)?;
    let _guard = configuration::init_tracing(&settings.logging)?;
    let addr = settings
        .server
        .address()
        .parse()
        .with_context(|| format!("invalid listen address '{}'", settings.server.address()))?;

    web_server::run_server(&settings, addr).await
}
