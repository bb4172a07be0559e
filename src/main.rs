use crate::cli::run;

mod browser;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod library;
pub mod storage;

fn main() -> anyhow::Result<()> {
    run()
}
