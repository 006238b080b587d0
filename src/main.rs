//! LED wall quote - command line entry point
//!
//! Sizes an LED video wall from a module and a target size, then prints
//! the bill of materials and the suggested sale price.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use ledwall_quote_lib::catalog::Catalog;
use ledwall_quote_lib::core::{Config, Environment, ScreenRequest};
use ledwall_quote_lib::i18n::I18n;
use ledwall_quote_lib::pricing::PricingEngine;
use ledwall_quote_lib::quote::QuoteEngine;
use ledwall_quote_lib::report::{ModuleListing, QuoteReport};

#[derive(Parser)]
#[command(name = "ledwall-quote")]
#[command(about = "LED video wall sizing and quotation calculator", version)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Product catalog file (.toml or .json); overrides the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Report language: auto, en, tr
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size and price a wall
    Quote {
        /// Module name from the catalog (e.g. "Qiangli Q2.5")
        #[arg(short, long)]
        module: String,

        /// Target width in millimetres
        #[arg(short = 'W', long)]
        width: f64,

        /// Target height in millimetres
        #[arg(short = 'H', long)]
        height: f64,

        /// Number of video input sources (HDMI/SDI/DP)
        #[arg(short, long, default_value_t = 1)]
        inputs: u32,

        /// Only accept the module if it matches this environment
        #[arg(long)]
        environment: Option<Environment>,

        /// Only accept the module if it carries this technology tag
        #[arg(long)]
        technology: Option<String>,

        /// PSU rated current in amps (defaults to the catalog supply)
        #[arg(long)]
        psu_amps: Option<f64>,

        /// Installation and labor cost
        #[arg(long)]
        labor: Option<f64>,

        /// Shipping and logistics cost
        #[arg(long)]
        shipping: Option<f64>,

        /// Other fixed costs
        #[arg(long)]
        overhead: Option<f64>,

        /// Target profit margin in percent (0-100)
        #[arg(long)]
        margin: Option<f64>,

        /// Service fee in percent of materials
        #[arg(long)]
        service_fee: Option<f64>,

        /// Price an enclosure by wall area
        #[arg(long)]
        enclosure: bool,

        /// Print the quote as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List catalog modules
    Modules {
        #[arg(long)]
        environment: Option<Environment>,

        #[arg(long)]
        technology: Option<String>,
    },

    /// Write the default configuration file
    InitConfig,
}

/// Loaded configuration, catalog and presentation helpers for one run
struct Session {
    config: Config,
    catalog: Catalog,
    i18n: I18n,
    pricing: PricingEngine,
}

impl Session {
    fn load(config_path: Option<&Path>, catalog_path: Option<&Path>, lang: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::load().unwrap_or_else(|e| {
                log::warn!("Failed to load config, using defaults: {}", e);
                Config::default()
            }),
        };

        let catalog = match catalog_path.or(config.catalog.path.as_deref()) {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin(),
        };

        let i18n = I18n::new(lang.unwrap_or(&config.general.language));
        let pricing = PricingEngine::new(&config.pricing);

        Ok(Self {
            config,
            catalog,
            i18n,
            pricing,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("Starting ledwall-quote v{}", env!("CARGO_PKG_VERSION"));

    let load = || Session::load(cli.config.as_deref(), cli.catalog.as_deref(), cli.lang.as_deref());

    match &cli.command {
        Commands::Quote {
            module,
            width,
            height,
            inputs,
            environment,
            technology,
            psu_amps,
            labor,
            shipping,
            overhead,
            margin,
            service_fee,
            enclosure,
            json,
        } => {
            let session = load()?;

            let mut request = ScreenRequest::new(module, *width, *height).with_inputs(*inputs);
            if let Some(env) = environment {
                request = request.with_environment(*env);
            }
            if let Some(tag) = technology.as_deref() {
                request = request.with_technology(tag);
            }
            if let Some(amps) = psu_amps {
                request = request.with_psu_amperage(*amps);
            }

            let mut pricing_inputs = session.pricing.default_inputs();
            if let Some(v) = labor {
                pricing_inputs.costs.labor = *v;
            }
            if let Some(v) = shipping {
                pricing_inputs.costs.shipping = *v;
            }
            if let Some(v) = overhead {
                pricing_inputs.costs.overhead = *v;
            }
            if let Some(v) = margin {
                pricing_inputs.margin_pct = *v;
            }
            if let Some(v) = service_fee {
                pricing_inputs.service_fee_pct = *v;
            }
            pricing_inputs.include_enclosure |= *enclosure;

            if !(0.0..=100.0).contains(&pricing_inputs.margin_pct) {
                bail!("margin must be between 0 and 100, got {}", pricing_inputs.margin_pct);
            }
            for (name, value) in [
                ("labor", pricing_inputs.costs.labor),
                ("shipping", pricing_inputs.costs.shipping),
                ("overhead", pricing_inputs.costs.overhead),
                ("service fee", pricing_inputs.service_fee_pct),
            ] {
                if !value.is_finite() || value < 0.0 {
                    bail!("{} must be non-negative, got {}", name, value);
                }
            }

            let engine = QuoteEngine::new(&session.catalog, session.config.engine.clone());
            let quote = engine.quote(&request, &pricing_inputs)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print!("{}", QuoteReport::new(&quote, &session.i18n, &session.pricing));
            }
        }

        Commands::Modules {
            environment,
            technology,
        } => {
            let session = load()?;
            let modules = session.catalog.modules.filter(*environment, technology.as_deref());
            print!("{}", ModuleListing::new(modules, &session.i18n, &session.pricing));
        }

        Commands::InitConfig => init_config(cli.config.as_deref())?,
    }

    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    Config::default().save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
