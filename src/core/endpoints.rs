//! One method per upstream endpoint.
//!
//! Every method takes the endpoint's required arguments followed by a
//! [`Params`] of optional query parameters (pass `Params::new()` for none).
//! Required arguments accept anything convertible into [`Arg`]: a string,
//! number, bool or a list of those.

use crate::core::client::PestoClient;
use crate::domain::model::{Arg, Params};
use crate::domain::request::{path_param, Request};
use crate::utils::error::Result;
use serde_json::Value;

impl PestoClient {
    // ---------- PING ----------

    /// Check API server status.
    pub async fn ping(&self) -> Result<Value> {
        self.send(&Request::new("/ping")).await
    }

    // ---------- SIMPLE ----------

    /// Current price of coins in the given target currencies.
    pub async fn get_price(
        &self,
        ids: impl Into<Arg>,
        vs_currencies: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new("/simple/price")
            .param("ids", ids)
            .param("vs_currencies", vs_currencies)
            .extend(params);
        self.send(&request).await
    }

    /// Current price of tokens on an asset platform, by contract address.
    pub async fn get_token_price(
        &self,
        id: impl Into<Arg>,
        contract_addresses: impl Into<Arg>,
        vs_currencies: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/simple/token_price/{}", path_param(id)))
            .param("contract_addresses", contract_addresses)
            .param("vs_currencies", vs_currencies)
            .extend(params);
        self.send(&request).await
    }

    pub async fn get_supported_vs_currencies(&self) -> Result<Value> {
        self.send(&Request::new("/simple/supported_vs_currencies")).await
    }

    // ---------- COINS ----------

    pub async fn get_coins(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/coins").extend(params)).await
    }

    /// All supported coins as id/name/symbol.
    pub async fn get_coins_list(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/coins/list").extend(params)).await
    }

    /// Price, market cap, volume and market data for coins.
    pub async fn get_coins_markets(
        &self,
        vs_currency: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new("/coins/markets")
            .param("vs_currency", vs_currency)
            .extend(params);
        self.send(&request).await
    }

    /// Current data for a coin. The trailing slash is part of the upstream route.
    pub async fn get_coin_by_id(&self, id: impl Into<Arg>, params: Params) -> Result<Value> {
        let request = Request::new(format!("/coins/{}/", path_param(id))).extend(params);
        self.send(&request).await
    }

    pub async fn get_coin_ticker_by_id(&self, id: impl Into<Arg>, params: Params) -> Result<Value> {
        let request = Request::new(format!("/coins/{}/tickers", path_param(id))).extend(params);
        self.send(&request).await
    }

    /// Coin snapshot at a date. `date` is `dd-mm-yyyy`, or a `chrono::NaiveDate`.
    pub async fn get_coin_history_by_id(
        &self,
        id: impl Into<Arg>,
        date: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/coins/{}/history", path_param(id)))
            .param("date", date)
            .extend(params);
        self.send(&request).await
    }

    /// Historical prices, market caps and volumes over the last `days`.
    pub async fn get_coin_market_chart_by_id(
        &self,
        id: impl Into<Arg>,
        vs_currency: impl Into<Arg>,
        days: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/coins/{}/market_chart", path_param(id)))
            .param("vs_currency", vs_currency)
            .param("days", days)
            .extend(params);
        self.send(&request).await
    }

    /// Market chart between two UNIX timestamps.
    pub async fn get_coin_market_chart_range_by_id(
        &self,
        id: impl Into<Arg>,
        vs_currency: impl Into<Arg>,
        from_timestamp: impl Into<Arg>,
        to_timestamp: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/coins/{}/market_chart/range", path_param(id)))
            .param("vs_currency", vs_currency)
            .param("from", from_timestamp)
            .param("to", to_timestamp)
            .extend(params);
        self.send(&request).await
    }

    pub async fn get_coin_ohlc_by_id(
        &self,
        id: impl Into<Arg>,
        vs_currency: impl Into<Arg>,
        days: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/coins/{}/ohlc", path_param(id)))
            .param("vs_currency", vs_currency)
            .param("days", days)
            .extend(params);
        self.send(&request).await
    }

    // ---------- CONTRACT ----------

    /// Coin info looked up by token contract address on a platform.
    pub async fn get_coin_info_from_contract_address_by_id(
        &self,
        id: impl Into<Arg>,
        contract_address: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!(
            "/coins/{}/contract/{}",
            path_param(id),
            path_param(contract_address)
        ))
        .extend(params);
        self.send(&request).await
    }

    pub async fn get_coin_market_chart_from_contract_address_by_id(
        &self,
        id: impl Into<Arg>,
        contract_address: impl Into<Arg>,
        vs_currency: impl Into<Arg>,
        days: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!(
            "/coins/{}/contract/{}/market_chart",
            path_param(id),
            path_param(contract_address)
        ))
        .param("vs_currency", vs_currency)
        .param("days", days)
        .extend(params);
        self.send(&request).await
    }

    // ---------- CATEGORIES ----------

    pub async fn get_coins_categories_list(&self) -> Result<Value> {
        self.send(&Request::new("/coins/categories/list")).await
    }

    pub async fn get_coins_categories(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/coins/categories").extend(params)).await
    }

    // ---------- ASSET PLATFORMS ----------

    pub async fn get_asset_platforms(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/asset_platforms").extend(params)).await
    }

    // ---------- EXCHANGES ----------

    pub async fn get_exchanges_list(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/exchanges").extend(params)).await
    }

    /// All exchanges as id/name pairs.
    pub async fn get_exchanges_id_name_list(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/exchanges/list").extend(params)).await
    }

    pub async fn get_exchanges_by_id(&self, id: impl Into<Arg>, params: Params) -> Result<Value> {
        let request = Request::new(format!("/exchanges/{}", path_param(id))).extend(params);
        self.send(&request).await
    }

    pub async fn get_exchanges_tickers_by_id(
        &self,
        id: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/exchanges/{}/tickers", path_param(id))).extend(params);
        self.send(&request).await
    }

    /// BTC-denominated volume history for an exchange.
    pub async fn get_exchanges_volume_chart_by_id(
        &self,
        id: impl Into<Arg>,
        days: impl Into<Arg>,
        params: Params,
    ) -> Result<Value> {
        let request = Request::new(format!("/exchanges/{}/volume_chart", path_param(id)))
            .param("days", days)
            .extend(params);
        self.send(&request).await
    }

    // ---------- EXCHANGE RATES ----------

    /// BTC-to-currency exchange rates.
    pub async fn get_exchange_rates(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/exchange_rates").extend(params)).await
    }

    // ---------- SEARCH ----------

    /// Search coins, categories and markets by name or symbol.
    pub async fn search(&self, query: impl Into<Arg>, params: Params) -> Result<Value> {
        let request = Request::new("/search").param("query", query).extend(params);
        self.send(&request).await
    }

    pub async fn get_search_trending(&self, params: Params) -> Result<Value> {
        self.send(&Request::new("/search/trending").extend(params)).await
    }

    // ---------- GLOBAL ----------

    /// Global market statistics, unwrapped from the `data` envelope.
    pub async fn get_global(&self, params: Params) -> Result<Value> {
        self.send_enveloped(&Request::new("/global").extend(params)).await
    }

    /// Global DeFi statistics, unwrapped from the `data` envelope.
    pub async fn get_global_decentralized_finance_defi(&self, params: Params) -> Result<Value> {
        self.send_enveloped(&Request::new("/global/decentralized_finance_defi").extend(params))
            .await
    }
}
