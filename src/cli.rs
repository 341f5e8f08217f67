use std::path::PathBuf;

use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable detailed debug logging (global)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging (global)
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Audit security headers on one or more target URLs
    Headers {
        /// Target URLs (e.g. https://example.com)
        #[arg(
            value_name = "TARGET",
            required_unless_present = "input_file",
            conflicts_with = "input_file"
        )]
        targets: Vec<String>,

        /// Input file with one target URL per line
        #[arg(short = 'i', long)]
        input_file: Option<PathBuf>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10_u64)]
        timeout: u64,

        /// Also flag weak HSTS and X-Frame-Options configurations
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Filter targets to public IPv4 space and resolve ownership via RDAP
    Scope {
        /// Target IPv4 addresses or CIDR networks
        #[arg(
            value_name = "TARGET",
            required_unless_present = "input_file",
            conflicts_with = "input_file"
        )]
        targets: Vec<String>,

        /// Input file with one address or network per line
        #[arg(short = 'i', long)]
        input_file: Option<PathBuf>,

        /// RDAP registry base URL
        #[arg(long, default_value = webrecon::scope::rdap::DEFAULT_RDAP_URL)]
        rdap_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10_u64)]
        timeout: u64,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
