use anyhow::Context;
use clap::Parser;
use pestoai::config::cli::{list_arg, Command};
use pestoai::utils::logger;
use pestoai::{CliConfig, ClientConfig, PestoClient, PestoError, TomlConfig};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?,
        ),
        None => None,
    };

    let log_level = file_config.as_ref().and_then(TomlConfig::log_level);
    if cli.log_json {
        logger::init_json_logger(cli.verbose, log_level);
    } else {
        logger::init_cli_logger(cli.verbose, log_level);
    }

    let mut config = ClientConfig::default();
    if let Some(file_config) = &file_config {
        config = config.layered(file_config);
    }
    let config = config.layered(&cli);
    tracing::debug!("Client config: {:?}", config);

    match run(&cli, config).await {
        Ok(value) => {
            let output = if cli.compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: &CliConfig, config: ClientConfig) -> Result<Value, PestoError> {
    let client = PestoClient::with_config(config)?;

    match &cli.command {
        Command::Ping => client.ping().await,
        Command::Price {
            ids,
            vs_currencies,
            extra,
        } => {
            client
                .get_price(list_arg(ids), list_arg(vs_currencies), extra.to_params())
                .await
        }
        Command::TokenPrice {
            platform,
            contract_addresses,
            vs_currencies,
            extra,
        } => {
            client
                .get_token_price(
                    platform.as_str(),
                    list_arg(contract_addresses),
                    list_arg(vs_currencies),
                    extra.to_params(),
                )
                .await
        }
        Command::Supported => client.get_supported_vs_currencies().await,
        Command::Markets { vs_currency, extra } => {
            client
                .get_coins_markets(vs_currency.as_str(), extra.to_params())
                .await
        }
        Command::Coin { id, extra } => client.get_coin_by_id(id.as_str(), extra.to_params()).await,
        Command::Tickers { id, extra } => {
            client
                .get_coin_ticker_by_id(id.as_str(), extra.to_params())
                .await
        }
        Command::History { id, date, extra } => {
            client
                .get_coin_history_by_id(id.as_str(), date.as_str(), extra.to_params())
                .await
        }
        Command::Chart {
            id,
            vs_currency,
            days,
            extra,
        } => {
            client
                .get_coin_market_chart_by_id(
                    id.as_str(),
                    vs_currency.as_str(),
                    days.as_str(),
                    extra.to_params(),
                )
                .await
        }
        Command::Ohlc {
            id,
            vs_currency,
            days,
            extra,
        } => {
            client
                .get_coin_ohlc_by_id(
                    id.as_str(),
                    vs_currency.as_str(),
                    days.as_str(),
                    extra.to_params(),
                )
                .await
        }
        Command::Exchanges { extra } => client.get_exchanges_list(extra.to_params()).await,
        Command::Exchange { id, extra } => {
            client
                .get_exchanges_by_id(id.as_str(), extra.to_params())
                .await
        }
        Command::Rates { extra } => client.get_exchange_rates(extra.to_params()).await,
        Command::Search { query, extra } => client.search(query.as_str(), extra.to_params()).await,
        Command::Trending { extra } => client.get_search_trending(extra.to_params()).await,
        Command::Global { extra } => client.get_global(extra.to_params()).await,
        Command::Get { path, extra } => client.get(path, extra.to_params()).await,
    }
}
