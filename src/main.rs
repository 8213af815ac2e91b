#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod navigation;
mod pages;
mod theme;

use clap::Parser;
use cropshield_core::{ApiClient, ClientConfig, WalletConnector};
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::Services;

/// CropShield - crop-insurance claims desktop client
#[derive(Parser, Debug)]
#[command(name = "cropshield-desktop")]
#[command(about = "CropShield - register land and file crop-insurance claims")]
struct Args {
    /// Claim service base URL (overrides CROPSHIELD_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Wallet provider JSON-RPC endpoint (overrides CROPSHIELD_WALLET_RPC)
    #[arg(long)]
    wallet_rpc: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cropshield_core::logging::init(args.verbose);

    let mut cfg = ClientConfig::from_env()?;
    if let Some(url) = args.api_url {
        cfg = cfg.with_base_url(url);
    }
    if let Some(rpc) = args.wallet_rpc {
        cfg.wallet_rpc_url = rpc;
    }

    let services = Services {
        api: ApiClient::new(cfg.clone())?,
        wallet: WalletConnector::new(cfg.wallet_rpc_url.clone())?,
    };
    tracing::info!("Starting CropShield against {}", cfg.base_url);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CropShield")
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(services)
        .launch(app::App);

    Ok(())
}
