use anyhow::Result;
use relative_time_card::{cli, utils};

fn main() -> Result<()> {
    utils::logging::init();
    cli::run()
}
