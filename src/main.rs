use clap::{Parser, Subcommand};
use siphon::ExtractSpec;

type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "siphon")]
#[command(about = "Declarative JSON extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a spec against a local JSON document.
    Run {
        #[arg(long)]
        spec: String,

        #[arg(long)]
        data: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Fetch the document from an API, then evaluate the spec.
    Fetch {
        #[arg(long)]
        spec: String,

        #[arg(long)]
        base_url: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run { spec, data, out } => {
            let spec: ExtractSpec = serde_json::from_str(&std::fs::read_to_string(&spec)?)?;
            let document: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(&data)?)?;

            let result = spec.process(&document)?;
            emit(&result, out.as_deref())?;
        }
        Commands::Fetch { spec, base_url, out } => {
            let spec: ExtractSpec = serde_json::from_str(&std::fs::read_to_string(&spec)?)?;

            let result = siphon::fetch_and_process(&spec, &base_url)?;
            emit(&result, out.as_deref())?;
        }
    }

    Ok(())
}

fn emit(result: &serde_json::Value, out: Option<&str>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(result)?;
    match out {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Wrote {}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
