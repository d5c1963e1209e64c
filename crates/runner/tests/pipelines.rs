use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use folio_cache::MemoryCache;
use folio_clock::FixedClock;
use folio_core::{
    Account, Candle, CandleInterval, Figi, InstrumentType, LastPrice, Position, PricePoint, Share,
    Timestamp,
};
use folio_gateway::GatewayConfig;
use folio_ports::{ApiError, ApiResult, InvestApi};
use folio_runner::report::{RATIOS_CSV, RATIOS_HTML, SHARES_CSV, VALUE_HTML, write_charts};
use folio_runner::{
    AppConfig, ConfigError, Folio, RunnerError, Visualization, print_shares,
    visualize_or_error_with,
};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap()
}

fn share(figi: &str, ticker: &str, sector: &str, lot: u32) -> Share {
    let mut share = Share::new(figi, ticker, lot);
    share.name = ticker.to_string();
    share.currency = "rub".into();
    share.class_code = "TQBR".into();
    share.country_of_risk = "RU".into();
    share.sector = sector.into();
    share.exchange = "MOEX".into();
    share
}

/// Broker with three shares, two of them held
struct FakeBroker {
    reject_token: bool,
}

#[async_trait]
impl InvestApi for FakeBroker {
    async fn shares(&self) -> ApiResult<Vec<Share>> {
        Ok(vec![
            share("F1", "SBER", "financial", 10),
            share("F2", "GAZP", "energy", 10),
            share("F3", "LKOH", "energy", 1),
        ])
    }

    async fn positions(&self, _account_id: &str) -> ApiResult<Vec<Position>> {
        Ok(vec![
            Position::new("F1", 100, InstrumentType::Share),
            Position::new("F2", 200, InstrumentType::Share),
            Position::new("RUB000UTSTOM", 1000, InstrumentType::Currency),
        ])
    }

    async fn last_prices(&self, figis: &[Figi]) -> ApiResult<Vec<LastPrice>> {
        Ok(figis
            .iter()
            .map(|figi| {
                let units = match figi.as_str() {
                    "F1" => 303,
                    "F2" => 99,
                    _ => 4000,
                };
                LastPrice::new(figi.clone(), PricePoint::new(units, 0), now())
            })
            .collect())
    }

    async fn candles(
        &self,
        figi: &Figi,
        from: Timestamp,
        to: Timestamp,
        _interval: CandleInterval,
    ) -> ApiResult<Vec<Candle>> {
        if to - from > Duration::days(30) {
            return Err(ApiError::RangeExceeded("30014".into()));
        }
        let close = if figi.as_str() == "F1" { 300 } else { 100 };
        let days = (to - from).num_days();
        Ok((1..=days)
            .map(|d| {
                let time = to - Duration::days(d) + Duration::hours(1);
                Candle::close_only(figi.clone(), time, PricePoint::new(close, 0))
            })
            .rev()
            .collect())
    }

    async fn accounts(&self) -> ApiResult<Vec<Account>> {
        if self.reject_token {
            return Err(ApiError::Authentication("40003".into()));
        }
        Ok(vec![Account {
            id: "2000000001".into(),
            name: "Broker".into(),
            kind: "ACCOUNT_TYPE_TINKOFF".into(),
            status: "ACCOUNT_STATUS_OPEN".into(),
        }])
    }
}

fn folio(reject_token: bool) -> Folio {
    Folio::new(
        AppConfig::default(),
        Arc::new(FakeBroker { reject_token }),
        Arc::new(FixedClock::new(now())),
    )
    .with_store(Arc::new(MemoryCache::new()))
}

#[tokio::test]
async fn test_visualize_builds_both_charts() {
    let _ = env_logger::try_init();

    let charts = folio(false).visualize("2000000001", 10).await.unwrap();

    let tickers: Vec<&str> = charts.ratios.rows.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["GAZP", "SBER"]);
    assert!((charts.ratios.rows[0].return_pct + 1.0).abs() < 1e-9);
    assert!((charts.ratios.rows[1].return_pct - 1.0).abs() < 1e-9);
    assert_eq!(charts.range, Some(1.0));

    assert_eq!(charts.values.points.len(), 10);
    assert_eq!(charts.values.last().unwrap().value, 100.0 * 300.0 + 200.0 * 100.0);

    assert!(charts.ratios_html.contains("treemap"));
    assert!(charts.value_html.contains("scatter"));
}

#[tokio::test]
async fn test_long_history_is_narrowed() {
    let _ = env_logger::try_init();

    // The broker rejects windows over 30 days
    let charts = folio(false).visualize("2000000001", 90).await.unwrap();
    assert!(!charts.values.is_empty());
    assert!(charts.values.points.len() <= 30);
}

#[tokio::test]
async fn test_out_of_range_history_is_rejected() {
    let _ = env_logger::try_init();

    for n_days in [0, 36_501, u32::MAX] {
        let err = folio(false).visualize("2000000001", n_days).await.unwrap_err();
        assert!(
            matches!(err, RunnerError::Config(ConfigError::Invalid(_))),
            "n_days {}: {}",
            n_days,
            err
        );
    }
}

#[tokio::test]
async fn test_underrepresented_shares_skip_held() {
    let _ = env_logger::try_init();

    let rows = folio(false)
        .underrepresented_shares("2000000001", true)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].ticker, "LKOH");
    assert_eq!(rows[0].price, dec!(4000));
}

#[tokio::test]
async fn test_rejected_token_lists_no_accounts() {
    let _ = env_logger::try_init();

    assert_eq!(folio(true).accounts().await.unwrap(), None);

    let accounts = folio(false).accounts().await.unwrap().unwrap();
    assert_eq!(accounts.len(), 1);
    assert!(accounts[0].is_open());
}

#[tokio::test]
async fn test_reports_are_written() {
    let _ = env_logger::try_init();
    let dir = tempfile::tempdir().unwrap();

    let folio = folio(false);
    let charts = folio.visualize("2000000001", 10).await.unwrap();
    write_charts(dir.path(), &charts).unwrap();
    for name in [RATIOS_HTML, VALUE_HTML, RATIOS_CSV] {
        assert!(dir.path().join(name).exists(), "{} missing", name);
    }
    let ratios = std::fs::read_to_string(dir.path().join(RATIOS_CSV)).unwrap();
    assert!(ratios.starts_with("ticker,sector,return,position,color"));

    let rows = folio.underrepresented_shares("2000000001", false).await.unwrap();
    print_shares(&rows, dir.path()).unwrap();
    let csv = std::fs::read_to_string(dir.path().join(SHARES_CSV)).unwrap();
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn test_unreachable_gateway_becomes_a_message() {
    let _ = env_logger::try_init();
    let dir = tempfile::tempdir().unwrap();

    let config = AppConfig {
        cache_dir: dir.path().join("cache"),
        api: GatewayConfig::default().with_base_url("http://127.0.0.1:1"),
        ..AppConfig::default()
    };

    match visualize_or_error_with(&config, "t.token", "2000000001", 10) {
        Visualization::Failed(message) => assert!(message.contains("error"), "{}", message),
        Visualization::Charts { .. } => panic!("charts from an unreachable gateway"),
    }
}
