#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use gearwork_tab::constants::{clock::TICK_INTERVAL_MS, config::DIR_ENV, gear};
use gearwork_tab::geometry::gear::DECORATIVE_GEARS;
use gearwork_tab::geometry::{GearSpec, HubVariant, ToothProfile, compute_clock_angles};
use gearwork_tab::links::{normalize_url, search_url};
use gearwork_tab::svg::{ClockSvg, GearSvg};
use gearwork_tab::{ConfigStore, Dashboard, LinkSlotModel, ThemeModel, TitleModel};

#[derive(Debug, Parser)]
#[command(name = "gearwork-tab", version, about = "Steampunk new-tab page core")]
struct Cli {
    /// Directory holding the persisted records
    #[arg(long, global = true, env = DIR_ENV)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a gear outline
    Gear {
        #[arg(long, default_value_t = 80.0)]
        size: f64,
        #[arg(long, default_value_t = gear::DEFAULT_TOOTH_COUNT)]
        teeth: u32,
        /// Tooth depth relative to size, in (0, 1)
        #[arg(long, default_value_t = gear::DEFAULT_TOOTH_DEPTH_RATIO)]
        depth: f64,
        #[arg(long, default_value_t = ToothProfile::Trapezoidal)]
        profile: ToothProfile,
        #[arg(long, default_value_t = HubVariant::Compact)]
        hub: HubVariant,
        #[arg(long)]
        reverse: bool,
        /// Emit SVG instead of JSON
        #[arg(long)]
        svg: bool,
    },
    /// Decorative gear placements with their shapes
    Layout,
    /// Clock hand angles for now (or a given time)
    Clock {
        /// Time of day as HH:MM:SS
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,
        #[arg(long)]
        svg: bool,
        /// Recompute once per second until interrupted
        #[arg(long, conflicts_with = "at")]
        watch: bool,
    },
    /// Show or change the page title
    Title {
        new_title: Option<String>,
        #[arg(long, conflicts_with = "new_title")]
        reset: bool,
    },
    /// Shortcut link slots
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },
    /// Theme colors and background
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Search URL for a query
    Search { query: String },
    /// Whole dashboard state
    Show,
}

#[derive(Debug, Subcommand)]
enum LinksAction {
    List,
    Set {
        index: usize,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        icon: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    Clear { index: usize },
    /// Print the URL a slot opens (bare domains get https://)
    Open { index: usize },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    Show,
    Main { color: String },
    Accent { color: String },
    /// Background image URL (empty keeps an embedded image)
    Bg { url: String },
    /// Embed an image file as the background
    BgFile { path: PathBuf },
    ClearBg,
    Reset,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("expected HH:MM:SS: {e}"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // stdout carries command output, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

fn run_clock(at: Option<NaiveTime>, svg: bool, watch: bool, store: &ConfigStore) -> Result<()> {
    let theme = ThemeModel::hydrate(store.clone());
    let render = |time: NaiveTime| -> Result<()> {
        let angles = compute_clock_angles(&time);
        if svg {
            print!("{}", ClockSvg { angles: &angles, theme: theme.get() });
            Ok(())
        } else {
            print_json(&serde_json::json!({
                "time": time.format("%H:%M:%S").to_string(),
                "angles": angles,
                "hands": angles.hand_endpoints(),
            }))
        }
    };

    if !watch {
        return render(at.unwrap_or_else(|| Local::now().time()));
    }

    info!(interval_ms = TICK_INTERVAL_MS, "Watching clock");
    loop {
        // Each tick recomputes from the wall clock, so late ticks self-correct
        render(Local::now().time())?;
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let store = match cli.config_dir {
        Some(dir) => ConfigStore::open(dir),
        None => ConfigStore::open_default(),
    };

    match cli.command {
        Command::Gear { size, teeth, depth, profile, hub, reverse, svg } => {
            let shape = GearSpec::new(size)
                .with_teeth(teeth)
                .with_depth(depth)
                .with_profile(profile)
                .with_hub(hub)
                .reversed(reverse)
                .build()
                .context("Failed to compute gear")?;
            if svg {
                print!("{}", GearSvg(&shape));
            } else {
                print_json(&shape)?;
            }
        }
        Command::Layout => {
            let gears = DECORATIVE_GEARS
                .iter()
                .map(|placement| -> gearwork_tab::Result<serde_json::Value> {
                    let shape = placement.spec().build()?;
                    Ok(serde_json::json!({ "placement": placement, "shape": shape }))
                })
                .collect::<gearwork_tab::Result<Vec<_>>>()
                .context("Failed to compute decorative gears")?;
            print_json(&gears)?;
        }
        Command::Clock { at, svg, watch } => run_clock(at, svg, watch, &store)?,
        Command::Title { new_title, reset } => {
            let mut title = TitleModel::hydrate(store);
            if reset {
                title.reset().context("Failed to reset title")?;
            } else if let Some(new_title) = new_title {
                title.set(new_title).context("Failed to save title")?;
            }
            println!("{}", title.get());
        }
        Command::Links { action } => {
            let mut links = LinkSlotModel::hydrate(store);
            match action {
                LinksAction::List => print_json(links.get_all())?,
                LinksAction::Set { index, url, icon, name } => {
                    let slot = links
                        .update(index, url, icon, name)
                        .with_context(|| format!("Failed to update link slot {index}"))?;
                    print_json(slot)?;
                }
                LinksAction::Clear { index } => {
                    links
                        .clear(index)
                        .with_context(|| format!("Failed to clear link slot {index}"))?;
                    print_json(links.get_all())?;
                }
                LinksAction::Open { index } => {
                    let slot = links.get(index)?;
                    if slot.url.is_empty() {
                        anyhow::bail!("Link slot {index} has no URL");
                    }
                    println!("{}", normalize_url(&slot.url));
                }
            }
        }
        Command::Theme { action } => {
            let mut theme = ThemeModel::hydrate(store);
            let updated = match action {
                ThemeAction::Show => Ok(theme.get()),
                ThemeAction::Main { color } => theme.set_main_color(color),
                ThemeAction::Accent { color } => theme.set_accent_color(color),
                ThemeAction::Bg { url } => theme.set_background_image(url),
                ThemeAction::BgFile { path } => theme.set_background_from_file(&path),
                ThemeAction::ClearBg => theme.clear_background_image(),
                ThemeAction::Reset => theme.reset_to_default(),
            }
            .context("Failed to update theme")?;
            print_json(updated)?;
        }
        Command::Search { query } => match search_url(&query) {
            Some(url) => println!("{url}"),
            None => anyhow::bail!("Empty search query"),
        },
        Command::Show => {
            let dashboard = Dashboard::load(store);
            print_json(&dashboard.snapshot())?;
        }
    }

    Ok(())
}
