use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use print_pricing::{
    MemoConfiguration, VisitingCardConfiguration, compute_offset_memo, compute_visiting_card,
};
use std::path::PathBuf;

mod summary;

#[derive(Parser)]
#[command(name = "pquote", about = "Print shop price quotes", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a visiting card job
    VisitingCard(VisitingCardArgs),

    /// Quote an offset memo job
    OffsetMemo(OffsetMemoArgs),

    /// List the products on the shop menu
    Products,
}

/// Options shared by every calculator
#[derive(Args, Default)]
struct JobArgs {
    /// Load job parameters from a JSON file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective job parameters to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,

    /// Refuse jobs that fail validation instead of warning
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct VisitingCardArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Printed sides
    #[arg(long, value_enum)]
    sides: Option<SidesArg>,

    /// Design fee in BDT
    #[arg(long)]
    design_fee: Option<f64>,

    /// Paper type (informational)
    #[arg(long)]
    paper_type: Option<String>,

    /// Sheet width in inches (informational)
    #[arg(long)]
    sheet_width: Option<f64>,

    /// Sheet height in inches (informational)
    #[arg(long)]
    sheet_height: Option<f64>,

    /// Card width in inches (informational)
    #[arg(long)]
    card_width: Option<f64>,

    /// Card height in inches (informational)
    #[arg(long)]
    card_height: Option<f64>,

    /// Number of cards
    #[arg(short, long)]
    quantity: Option<u32>,

    /// Number of ink colors (1-4)
    #[arg(short, long)]
    colors: Option<u8>,

    /// Matt lamination (`--matt-lamination` or `--matt-lamination=false`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    matt_lamination: Option<bool>,

    /// Spot UV (`--spot-uv` or `--spot-uv=false`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    spot_uv: Option<bool>,

    /// Cutting type
    #[arg(long, value_enum)]
    cutting: Option<CuttingArg>,

    /// Profit margin in percent
    #[arg(short, long)]
    margin: Option<f64>,
}

impl VisitingCardArgs {
    /// Overlay the flags that were given onto a job
    fn apply(self, config: &mut VisitingCardConfiguration) {
        if let Some(sides) = self.sides {
            config.side_selection = sides.into();
        }
        if let Some(fee) = self.design_fee {
            config.design_fee = fee;
        }
        if let Some(paper_type) = self.paper_type {
            config.paper_type = paper_type;
        }
        if let Some(w) = self.sheet_width {
            config.sheet_width = w;
        }
        if let Some(h) = self.sheet_height {
            config.sheet_height = h;
        }
        if let Some(w) = self.card_width {
            config.card_width = w;
        }
        if let Some(h) = self.card_height {
            config.card_height = h;
        }
        if let Some(q) = self.quantity {
            config.total_quantity = q;
        }
        if let Some(c) = self.colors {
            config.colors = c;
        }
        if let Some(matt) = self.matt_lamination {
            config.matt_lamination = matt;
        }
        if let Some(spot) = self.spot_uv {
            config.spot_uv = spot;
        }
        if let Some(cutting) = self.cutting {
            config.cutting_type = cutting.into();
        }
        if let Some(m) = self.margin {
            config.profit_margin = m;
        }
    }
}

#[derive(Args)]
struct OffsetMemoArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Design price in TK
    #[arg(long)]
    design_price: Option<f64>,

    /// Paper GSM (informational)
    #[arg(long)]
    paper_gsm: Option<String>,

    /// Memo size
    #[arg(long, value_enum)]
    size: Option<MemoSizeArg>,

    /// Price per parent sheet in TK
    #[arg(long)]
    sheet_price: Option<f64>,

    /// Number of memos
    #[arg(short, long)]
    quantity: Option<u32>,

    /// Number of ink colors (1-4)
    #[arg(short, long)]
    colors: Option<u8>,

    /// Binding type
    #[arg(long, value_enum)]
    binding: Option<BindingArg>,

    /// Pad binding rate per 100 memos
    #[arg(long)]
    pad_rate: Option<f64>,

    /// Memo binding rate per 100 memos
    #[arg(long)]
    memo_rate: Option<f64>,

    /// Profit margin in percent
    #[arg(short, long)]
    margin: Option<f64>,
}

impl OffsetMemoArgs {
    /// Overlay the flags that were given onto a job
    fn apply(self, config: &mut MemoConfiguration) {
        if let Some(price) = self.design_price {
            config.design_price = price;
        }
        if let Some(gsm) = self.paper_gsm {
            config.paper_gsm = gsm;
        }
        if let Some(size) = self.size {
            config.memo_size = size.into();
        }
        if let Some(price) = self.sheet_price {
            config.per_sheet_price = price;
        }
        if let Some(q) = self.quantity {
            config.total_order = q;
        }
        if let Some(c) = self.colors {
            config.total_colors = c;
        }
        if let Some(binding) = self.binding {
            config.binding_type = binding.into();
        }
        if let Some(rate) = self.pad_rate {
            config.pad_binding_rate = rate;
        }
        if let Some(rate) = self.memo_rate {
            config.memo_binding_rate = rate;
        }
        if let Some(m) = self.margin {
            config.profit_margin = m;
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SidesArg {
    Single,
    Both,
}

#[derive(Clone, Copy, ValueEnum)]
enum CuttingArg {
    Regular,
    Dye,
}

#[derive(Clone, Copy, ValueEnum)]
enum MemoSizeArg {
    #[value(name = "9x11.5")]
    Large,
    #[value(name = "5.75x9")]
    Small,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    Pad,
    Memo,
}

impl From<SidesArg> for print_pricing::SideSelection {
    fn from(arg: SidesArg) -> Self {
        match arg {
            SidesArg::Single => Self::Single,
            SidesArg::Both => Self::Both,
        }
    }
}

impl From<CuttingArg> for print_pricing::CuttingType {
    fn from(arg: CuttingArg) -> Self {
        match arg {
            CuttingArg::Regular => Self::Regular,
            CuttingArg::Dye => Self::Dye,
        }
    }
}

impl From<MemoSizeArg> for print_pricing::MemoSize {
    fn from(arg: MemoSizeArg) -> Self {
        match arg {
            MemoSizeArg::Large => Self::Large,
            MemoSizeArg::Small => Self::Small,
        }
    }
}

impl From<BindingArg> for print_pricing::BindingType {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Pad => Self::Pad,
            BindingArg::Memo => Self::Memo,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::VisitingCard(mut args) => {
            let job = std::mem::take(&mut args.job);
            let mut config = match &job.config {
                Some(path) => VisitingCardConfiguration::load(path)
                    .await
                    .with_context(|| format!("Failed to load job file {}", path.display()))?,
                None => VisitingCardConfiguration::default(),
            };
            args.apply(&mut config);

            check(config.validate(), job.strict)?;

            if let Some(path) = &job.save_config {
                config.save(path).await?;
            }

            let breakdown = compute_visiting_card(&config);
            if job.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print!("{}", summary::VisitingCardQuote::new(&config, &breakdown));
            }
        }

        Commands::OffsetMemo(mut args) => {
            let job = std::mem::take(&mut args.job);
            let mut config = match &job.config {
                Some(path) => MemoConfiguration::load(path)
                    .await
                    .with_context(|| format!("Failed to load job file {}", path.display()))?,
                None => MemoConfiguration::default(),
            };
            args.apply(&mut config);

            check(config.validate(), job.strict)?;

            if let Some(path) = &job.save_config {
                config.save(path).await?;
            }

            let breakdown = compute_offset_memo(&config);
            if job.json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print!("{}", summary::MemoQuote::new(&config, &breakdown));
            }
        }

        Commands::Products => {
            print!("{}", summary::Catalog);
        }
    }

    Ok(())
}

fn check(validation: print_pricing::Result<()>, strict: bool) -> Result<()> {
    match validation {
        Ok(()) => Ok(()),
        Err(e) if strict => Err(e.into()),
        Err(e) => {
            log::warn!("{}; quoting anyway", e);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use print_pricing::{CuttingType, MemoSize, PricingError, Product};

    fn visiting_card_args(args: &[&str]) -> VisitingCardArgs {
        let argv = ["pquote", "visiting-card"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::VisitingCard(args) => args,
            _ => panic!("Expected visiting-card command"),
        }
    }

    fn offset_memo_args(args: &[&str]) -> OffsetMemoArgs {
        let argv = ["pquote", "offset-memo"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::OffsetMemo(args) => args,
            _ => panic!("Expected offset-memo command"),
        }
    }

    fn loaded_card_job() -> VisitingCardConfiguration {
        VisitingCardConfiguration {
            total_quantity: 500,
            matt_lamination: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_override_loaded_job() {
        let mut config = loaded_card_job();
        visiting_card_args(&["-c", "7", "--cutting", "dye"]).apply(&mut config);

        assert_eq!(config.colors, 7);
        assert_eq!(config.cutting_type, CuttingType::Dye);
        // Flags that weren't given keep the loaded values
        assert_eq!(config.total_quantity, 500);
        assert!(config.matt_lamination);

        let b = compute_visiting_card(&config);
        assert_eq!(b.wastage_sheets, 0);
        assert_eq!(b.plate_cost, 840.0);
        assert_eq!(b.matt_cost, 300.0);
    }

    #[test]
    fn test_no_flags_leave_loaded_job() {
        let mut config = loaded_card_job();
        visiting_card_args(&[]).apply(&mut config);
        assert_eq!(config, loaded_card_job());
    }

    #[test]
    fn test_finishing_flags_switch_both_ways() {
        let mut config = VisitingCardConfiguration::default();
        visiting_card_args(&["--matt-lamination", "--spot-uv"]).apply(&mut config);
        assert!(config.matt_lamination);
        assert!(config.spot_uv);

        let mut config = loaded_card_job();
        visiting_card_args(&["--matt-lamination=false", "-q", "900"]).apply(&mut config);
        assert!(!config.matt_lamination);
        assert_eq!(config.total_quantity, 900);
    }

    #[test]
    fn test_memo_flags_override_loaded_job() {
        let mut config = MemoConfiguration {
            total_order: 400,
            pad_binding_rate: 20.0,
            ..Default::default()
        };
        offset_memo_args(&["--size", "5.75x9", "--memo-rate", "40", "--binding", "memo"])
            .apply(&mut config);

        assert_eq!(config.memo_size, MemoSize::Small);
        assert_eq!(config.binding_rate(), 40.0);
        assert_eq!(config.total_order, 400);
        assert_eq!(config.pad_binding_rate, 20.0);
    }

    #[test]
    fn test_job_args_are_shared() {
        let args = offset_memo_args(&["--config", "job.json", "--strict", "--json"]);
        assert_eq!(args.job.config, Some(PathBuf::from("job.json")));
        assert!(args.job.strict);
        assert!(args.job.json);
        assert!(args.job.save_config.is_none());
    }

    #[test]
    fn test_check_strict_policy() {
        let invalid = || -> print_pricing::Result<()> {
            Err(PricingError::InvalidConfiguration(
                "Total order must be at least 1".to_string(),
            ))
        };

        assert!(check(invalid(), true).is_err());
        assert!(check(invalid(), false).is_ok());
        assert!(check(Ok(()), true).is_ok());
    }

    #[test]
    fn test_subcommands_match_catalog_ids() {
        let cmd = Cli::command();
        for product in Product::ALL {
            assert_eq!(
                cmd.find_subcommand(product.id()).is_some(),
                product.is_available(),
                "{}",
                product.id()
            );
        }
    }
}
