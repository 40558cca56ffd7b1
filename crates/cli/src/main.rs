use clap::{Parser, Subcommand};
use knife_cli::commands::finder::{self, FinderArgs};
use knife_cli::commands::subdigest;
use knife_cli::telemetry::init_telemetry;

#[derive(Parser)]
#[command(name = "knife")]
#[command(about = "Multisig wallet diagnostics: subdigest computation and search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a subdigest for given chainId, address and digest
    Subdigest {
        /// Chain ID
        #[arg(long)]
        chain_id: String,

        /// Address
        #[arg(long)]
        address: String,

        /// Digest (32 bytes)
        #[arg(long)]
        digest: String,
    },
    /// Find combinations of parameters that match a known subdigest
    SubdigestFinder(FinderArgs),
}

fn main() -> anyhow::Result<()> {
    init_telemetry();

    let cli = Cli::parse();

    match cli.command {
        Commands::Subdigest {
            chain_id,
            address,
            digest,
        } => subdigest::run(&chain_id, &address, &digest).map(|_| ()),
        Commands::SubdigestFinder(args) => finder::run(&args).map(|_| ()),
    }
}
