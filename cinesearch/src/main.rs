mod api;
mod cli_args;
mod config;
mod dom;
mod error;
mod page;
mod search;
mod storage;
mod terminal;
#[cfg(test)]
mod test_utils;
mod utils;

use crate::{cli_args::CliArgs, error::Error, utils::any::Any};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    CliArgs::parse().run().await?.ok()
}
