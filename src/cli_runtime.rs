use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use shotlift::model::{AscConfig, DEFAULT_CONFIG_PATH, Device};
use shotlift::upload::{self, UploadPlan, screenshot_dir};

#[derive(Parser)]
#[command(name = "shotlift")]
#[command(about = "Upload screenshots to App Store Connect", long_about = None)]
pub(crate) struct Cli {
    /// Device type
    #[arg(long, value_enum, default_value_t = Device::Ipad13)]
    device: Device,

    /// Screenshot directory (defaults to app/screenshots/<device>)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Project root; relative paths resolve against it (defaults to current directory)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Config file (defaults to .appstoreconnect/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// API issuer id
    #[arg(long, env = "ASC_ISSUER_ID")]
    issuer_id: Option<String>,

    /// API key id
    #[arg(long, env = "ASC_KEY_ID")]
    key_id: Option<String>,

    /// App id
    #[arg(long, env = "ASC_APP_ID")]
    app_id: Option<String>,

    /// Private key (.p8); defaults to .appstoreconnect/private_keys/AuthKey_<KEY_ID>.p8
    #[arg(long = "private-key", env = "ASC_PRIVATE_KEY_PATH")]
    private_key_path: Option<PathBuf>,

    /// Preferred localization (defaults to ja)
    #[arg(long, env = "ASC_LOCALE")]
    locale: Option<String>,

    /// API base URL
    #[arg(long, env = "ASC_API_BASE_URL")]
    api_base_url: Option<String>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let project_root = match cli.project_root {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };

    let config_path = match cli.config {
        Some(p) if p.is_absolute() => p,
        Some(p) => project_root.join(p),
        None => project_root.join(DEFAULT_CONFIG_PATH),
    };
    let overrides = AscConfig {
        issuer_id: cli.issuer_id,
        key_id: cli.key_id,
        app_id: cli.app_id,
        private_key_path: cli.private_key_path,
        locale: cli.locale,
        api_base_url: cli.api_base_url,
    };
    let settings = AscConfig::load(&config_path)?
        .merge(overrides)
        .resolve(&project_root)?;

    let plan = UploadPlan {
        settings,
        device: cli.device,
        screenshot_dir: screenshot_dir(&project_root, cli.device, cli.dir.as_deref()),
    };
    tracing::debug!(?plan, "resolved upload plan");

    upload::run(&plan)?;
    Ok(())
}
