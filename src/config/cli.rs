use crate::domain::model::{Arg, Params};
use crate::domain::ports::ConfigProvider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pesto")]
#[command(about = "Query the PestoAI cryptocurrency market-data API")]
#[command(version)]
pub struct CliConfig {
    /// API host, e.g. https://api.pestoai.fun
    #[arg(long, env = "PESTO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// API version path segment, e.g. v2
    #[arg(long, env = "PESTO_API_VERSION", global = true)]
    pub api_version: Option<String>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, global = true, help = "Print results on a single line")]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check API server status
    Ping,
    /// Current price of coins in the given currencies
    Price {
        /// Coin ids, comma-separated
        ids: String,
        /// Target currencies, comma-separated
        vs_currencies: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Current price of tokens by contract address on a platform
    TokenPrice {
        platform: String,
        /// Contract addresses, comma-separated
        contract_addresses: String,
        /// Target currencies, comma-separated
        vs_currencies: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Supported target currencies
    Supported,
    /// Market data for all coins
    Markets {
        vs_currency: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Full data for one coin
    Coin {
        id: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Exchange tickers for one coin
    Tickers {
        id: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Coin snapshot on a date (dd-mm-yyyy)
    History {
        id: String,
        date: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Price, market cap and volume history
    Chart {
        id: String,
        vs_currency: String,
        days: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Candle data
    Ohlc {
        id: String,
        vs_currency: String,
        days: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// All exchanges
    Exchanges {
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// One exchange
    Exchange {
        id: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// BTC exchange rates
    Rates {
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Search coins, categories and markets
    Search {
        query: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Trending searches
    Trending {
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Global market statistics
    Global {
        #[command(flatten)]
        extra: ExtraParams,
    },
    /// Any endpoint path, e.g. /coins/categories
    Get {
        path: String,
        #[command(flatten)]
        extra: ExtraParams,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExtraParams {
    /// Optional query parameter as key=value (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl ExtraParams {
    pub fn to_params(&self) -> Params {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), Arg::from(v)))
            .collect()
    }
}

/// Splits a comma-separated command-line value into a list argument.
pub fn list_arg(value: &str) -> Arg {
    Arg::from(
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>(),
    )
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", s)),
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_command() {
        let cli = CliConfig::try_parse_from([
            "pesto",
            "price",
            "bitcoin,ethereum",
            "usd",
            "-p",
            "include_market_cap=true",
        ])
        .unwrap();

        match cli.command {
            Command::Price {
                ids,
                vs_currencies,
                extra,
            } => {
                assert_eq!(list_arg(&ids), Arg::from(vec!["bitcoin", "ethereum"]));
                assert_eq!(list_arg(&vs_currencies).normalize(), "usd");
                assert_eq!(
                    extra.to_params().get("include_market_cap"),
                    Some(&Arg::from("true"))
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_feed_config_provider() {
        let cli = CliConfig::try_parse_from([
            "pesto",
            "ping",
            "--base-url",
            "http://localhost:8080",
            "--api-version",
            "v3",
        ])
        .unwrap();

        assert_eq!(
            ConfigProvider::base_url(&cli),
            Some("http://localhost:8080")
        );
        assert_eq!(ConfigProvider::api_version(&cli), Some("v3"));
        assert_eq!(cli.user_agent(), None);
    }

    #[test]
    fn test_commands_without_positionals_take_params() {
        for name in ["rates", "trending", "global"] {
            let cli = CliConfig::try_parse_from(["pesto", name, "-p", "k=v"]).unwrap();
            let extra = match cli.command {
                Command::Rates { extra }
                | Command::Trending { extra }
                | Command::Global { extra } => extra,
                other => panic!("unexpected command: {:?}", other),
            };
            assert_eq!(
                extra.to_params().to_pairs(),
                vec![("k".to_string(), "v".to_string())]
            );
        }
    }

    #[test]
    fn test_list_arg_skips_blank_items() {
        assert_eq!(
            list_arg("bitcoin, ethereum,").normalize(),
            "bitcoin,ethereum"
        );
    }

    #[test]
    fn test_rejects_malformed_param() {
        let args = ["pesto", "get", "/coins", "-p", "novalue"];
        assert!(CliConfig::try_parse_from(args).is_err());
        assert!(parse_key_val("=x").is_err());
        assert_eq!(
            parse_key_val("order=a=b").unwrap(),
            ("order".to_string(), "a=b".to_string())
        );
    }
}
