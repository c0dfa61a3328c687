//! Fixed ticker universe used by every generator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub symbol: &'static str,
    pub name: &'static str,
}

const LISTINGS: [Listing; 10] = [
    Listing { symbol: "AAPL", name: "Apple Inc." },
    Listing { symbol: "GOOGL", name: "Alphabet Inc." },
    Listing { symbol: "MSFT", name: "Microsoft Corporation" },
    Listing { symbol: "AMZN", name: "Amazon.com Inc." },
    Listing { symbol: "TSLA", name: "Tesla Inc." },
    Listing { symbol: "META", name: "Meta Platforms Inc." },
    Listing { symbol: "NVDA", name: "NVIDIA Corporation" },
    Listing { symbol: "NFLX", name: "Netflix Inc." },
    Listing { symbol: "AMD", name: "Advanced Micro Devices" },
    Listing { symbol: "PYPL", name: "PayPal Holdings Inc." },
];

/// Symbol used when a caller asks for predictions without naming one.
pub const DEFAULT_SYMBOL: &str = "AAPL";

pub fn all() -> &'static [Listing] {
    &LISTINGS
}

/// Case-insensitive lookup by ticker.
pub fn find(symbol: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.symbol.eq_ignore_ascii_case(symbol))
}
