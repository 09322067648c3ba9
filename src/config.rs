// region:    --- Imports
use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::bidding::validate::BidPolicy;

// endregion: --- Imports

// region:    --- Config
/// 서비스 설정 (환경 변수에서 로드)
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_connections: u32,
    pub min_bid_increment: i64,
    pub min_auction_window_hours: i64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("AUCTION_PORT", "3000"),
            max_connections: try_load("DATABASE_MAX_CONNECTIONS", "5"),
            min_bid_increment: try_load("MIN_BID_INCREMENT", "100"),
            min_auction_window_hours: try_load("MIN_AUCTION_WINDOW_HOURS", "1"),
        }
    }

    /// 입찰 정책
    pub fn bid_policy(&self) -> BidPolicy {
        BidPolicy {
            min_increment: self.min_bid_increment,
        }
    }

    /// 최소 경매 기간
    pub fn min_auction_window(&self) -> chrono::Duration {
        chrono::Duration::hours(self.min_auction_window_hours)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
// endregion: --- Config
