use anyhow::Result;
use configure::cli;

fn main() -> Result<()> {
    cli::run()
}
