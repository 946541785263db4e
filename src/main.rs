mod cli;
mod domain;
mod error;
mod workflow;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();
    workflow::run(args)?;
    Ok(())
}
