use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use oxen_wallet_core::VERSION;

/// Oxen Wallet - command-line front-end for the Oxen wallet engine
#[derive(Parser, Debug)]
#[command(name = "oxen-wallet")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network to use (mainnet, testnet, devnet, fakechain)
    #[arg(long, global = true, env = "OXEN_NETWORK")]
    pub network: Option<String>,

    /// oxend RPC endpoint (defaults to the network's local daemon)
    #[arg(long, global = true, env = "OXEN_OXEND_URL")]
    pub oxend_url: Option<String>,

    /// Directory holding wallet files
    #[arg(long, global = true, env = "OXEN_WALLET_DIR")]
    pub datadir: Option<PathBuf>,

    /// Config file path (defaults to $XDG_CONFIG_HOME/oxen-wallet/config.toml)
    #[arg(long, global = true, env = "OXEN_WALLET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Extra session option (repeatable)
    #[arg(long = "option", short = 'o', global = true, value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn", env = "OXEN_WALLET_LOG")]
    pub log_level: String,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new wallet and open it
    Create(WalletArgs),

    /// Open a wallet and show its address
    Open(WalletArgs),

    /// Show session state
    Status,

    /// Show resolved session options
    Options,

    /// Remove a stored wallet password from the OS keychain
    Forget {
        /// Wallet name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Arguments shared by `create` and `open`
#[derive(Args, Debug)]
pub struct WalletArgs {
    /// Wallet name (file stem under the data directory)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Store the password in the OS keychain after a successful login
    #[arg(long)]
    pub remember: bool,
}
