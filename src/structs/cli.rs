use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "invoflow")]
#[clap(about = "Administrative console for the invoice approval workflow", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
