use clap::{Parser, Subcommand};

mod run;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "trecrun")]
#[command(about = "trec_eval run file parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a run file and dump the structured result as JSON.
    Report {
        #[arg(long)]
        run: String,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report { run, out } => {
            // 1) Parse the run file (validates lines while running).
            let run_file = run::parse_run_file(&run)?;

            // 2) Serialize the structured result.
            let json = serde_json::to_string_pretty(&run_file)?;
            std::fs::write(&out, json)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
