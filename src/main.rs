//! Thimble - turns a folder of wiki-linked text files into static HTML pages
//! with backlinks.

mod build;
mod cli;
mod config;
mod logger;
mod site;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    build_site(&config).map(|_| ())
}
