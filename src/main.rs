use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;
use utility_iou::error::{IouError, OutputError, Result, SourceError};
use utility_iou::output::{self, OutputFormat};
use utility_iou::{load_utilities, AppConfig, SettlementCalculator};

#[derive(Parser, Debug)]
#[command(name = "utility-iou", version, about = "Split this month's utilities and work out who owes whom")]
struct Cli {
    /// JSON config for the month: people as keys, each mapping utilities to the amount they paid
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// 报告格式 (覆盖配置)
    #[arg(long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// 付款指令导出为 CSV
    #[arg(long = "csv")]
    csv: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(IouError::Source(SourceError::ConfigNotFound(path))) => {
            eprintln!(
                "Config file {} could not be loaded, check the provided path.",
                path.display()
            );
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 加载配置，命令行参数优先
    let mut settings = AppConfig::load()?;
    if let Some(format) = cli.format {
        settings.output.format = format;
    }
    if let Some(csv) = cli.csv {
        settings.output.csv_path = Some(csv);
    }

    // 初始化日志 - 输出到 stderr，stdout 只留报告
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("Settings: {:?}", settings);

    let utilities = load_utilities(&cli.config)?;
    let report = SettlementCalculator::new(&utilities).settle()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::render(&report, settings.output.format, &mut out)?;
    out.flush().map_err(OutputError::from)?;

    if let Some(path) = &settings.output.csv_path {
        let file = File::create(path).map_err(OutputError::from)?;
        output::csv::write_instructions(BufWriter::new(file), &report.instructions)?;
        info!("Wrote {} instructions to {}", report.instructions.len(), path.display());
    }

    Ok(())
}
