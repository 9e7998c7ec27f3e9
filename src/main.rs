use anyhow::{Context, Result};
use clap::Parser;
use dwmbar::{CommandSpawner, RootWindow, StatusBar, StdoutPublisher};
use dwmbar_core::{InputWatcher, PressSource, Publisher, Spawner};
use dwmbar_sources::SamplerSet;
use dwmbar_types::{BarConfig, ClickRegion, Color, OverflowPolicy};
use log::{error, info, warn};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal::unix::{signal, SignalKind};

/// dwmbar - status text for dwm's root window
///
/// Unset options keep the built-in deployment defaults.
#[derive(Parser, Debug, Clone)]
#[command(name = "dwmbar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Print status lines to stdout instead of setting the root window name
    #[arg(short = 's', long = "stdout")]
    stdout: bool,

    /// Publish a single status line and exit
    #[arg(short = '1', long = "once")]
    once: bool,

    /// X display to connect to [default: $DISPLAY]
    #[arg(long = "display", value_name = "NAME")]
    display: Option<String>,

    /// Sampling interval in milliseconds [default: 1000]
    #[arg(short = 'i', long = "interval", value_name = "MS",
          value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// Input polling interval in milliseconds [default: 200]
    #[arg(long = "nap", value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    nap: Option<u64>,

    /// Screen rectangle that launches the click command [default: 2960,3630,0,20]
    #[arg(long = "click-region", value_name = "X_MIN,X_MAX,Y_MIN,Y_MAX")]
    click_region: Option<ClickRegion>,

    /// Shell command run on a click inside the region [default: "st -e htop"]
    #[arg(long = "click-command", value_name = "CMD")]
    click_command: Option<String>,

    /// Don't watch pointer clicks
    #[arg(long = "no-click")]
    no_click: bool,

    /// Power supply directory [default: /sys/class/power_supply/BAT0]
    #[arg(long = "battery", value_name = "DIR")]
    battery: Option<PathBuf>,

    /// First disk usage path [default: /]
    #[arg(long = "disk-root", value_name = "PATH")]
    disk_root: Option<PathBuf>,

    /// Second disk usage path [default: /home]
    #[arg(long = "disk-home", value_name = "PATH")]
    disk_home: Option<PathBuf>,

    /// Memory color above the alert threshold [default: #ff3024]
    #[arg(long = "alert-color", value_name = "#RRGGBB")]
    alert_color: Option<Color>,

    /// Skip publishing oversized status lines instead of truncating them
    #[arg(long = "reject-overflow")]
    reject_overflow: bool,
}

impl Cli {
    fn bar_config(&self) -> BarConfig {
        let mut config = BarConfig::default();

        if let Some(ms) = self.interval {
            config.cadence = Duration::from_millis(ms);
        }
        if let Some(ms) = self.nap {
            config.nap = Duration::from_millis(ms);
        }
        if let Some(region) = self.click_region {
            config.click.region = region;
        }
        if let Some(command) = &self.click_command {
            config.click.command = command.clone();
        }
        if self.no_click || self.stdout || self.once {
            config.click.enabled = false;
        }
        if let Some(dir) = &self.battery {
            config.battery_dir = dir.clone();
        }
        if let Some(path) = &self.disk_root {
            config.disk_root = path.clone();
        }
        if let Some(path) = &self.disk_home {
            config.disk_home = path.clone();
        }
        if let Some(color) = self.alert_color {
            config.palette.alert = color;
        }
        if self.reject_overflow {
            config.overflow = OverflowPolicy::Reject;
        }

        config
    }
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting dwmbar v{}", env!("CARGO_PKG_VERSION"));

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli)) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.bar_config();
    let samplers = SamplerSet::from_config(&config);

    if cli.stdout {
        let bar: StatusBar<_, CommandSpawner> =
            StatusBar::new(&config, samplers, StdoutPublisher::new());
        return drive(bar, cli.once).await;
    }

    let mut root = RootWindow::connect(cli.display.as_deref())?;
    let watch_clicks = config.click.enabled
        && match root.select_raw_button_presses() {
            Ok(selected) => selected,
            Err(e) => {
                warn!("Click watching disabled: {:#}", e);
                false
            }
        };

    let mut bar = StatusBar::new(&config, samplers, root);
    if watch_clicks {
        info!(
            "Clicks in {} launch '{}'",
            config.click.region, config.click.command
        );
        bar = bar.with_watcher(InputWatcher::new(
            config.click.region,
            config.click.command.clone(),
            CommandSpawner,
        ));
    }

    drive(bar, cli.once).await
}

async fn drive<D, S>(mut bar: StatusBar<D, S>, once: bool) -> Result<()>
where
    D: Publisher + PressSource,
    S: Spawner,
{
    if once {
        return bar.cycle();
    }
    let shutdown = shutdown_signal()?;
    bar.run(shutdown).await
}

/// Resolves on SIGINT or SIGTERM
fn shutdown_signal() -> Result<impl Future<Output = ()>> {
    let mut interrupt =
        signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;
    let mut terminate =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("Received SIGINT"),
            _ = terminate.recv() => info!("Received SIGTERM"),
        }
    })
}
