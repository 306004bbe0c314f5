//! The literal dependency map: categories, flows, template, guide, packages.
//!
//! Everything here is `'static` and never mutated. Declaration order is the
//! display order.

use crate::model::{
    Accent, Category, CategoryKey, FlowEdge, GuideStep, Item, ItemType, Package, StepBody,
    SummaryPoint,
};

pub const PAGE_TITLE: &str = "Forex AI Bot - Dependency Map";
pub const PAGE_SUBTITLE: &str = "Multi-pair trading dengan Telegram news integration & Demo account";

/// Feature badges under the page title.
pub const FEATURE_BADGES: [&str; 4] = [
    "Multi-pair Support",
    "Telegram News",
    "Auto Trading",
    "Demo Account",
];

pub const COMPONENTS_HEADING: &str = "System Components";
pub const FLOW_HEADING: &str = "Data Flow Architecture";
pub const GUIDE_HEADING: &str = "Cara Memasukkan Akun MT5 ke Bot";
pub const ENV_HEADING: &str = ".env File Structure";
pub const PACKAGES_HEADING: &str = "Required Python Packages";
pub const SUMMARY_HEADING: &str = "⚠️ Upgrade Summary";

static CATEGORIES: [Category; 6] = [
    Category {
        key: CategoryKey::Core,
        title: "🤖 Core System",
        color: Accent::Blue,
        items: &[
            Item {
                name: "forex_ai_bot.py",
                item_type: ItemType::Main,
                deps: &["NewsAnalyzer", "ForexAIBot", "MT5 Connection"],
            },
            Item {
                name: "Python 3.8+",
                item_type: ItemType::Runtime,
                deps: &[],
            },
            Item {
                name: "requirements.txt",
                item_type: ItemType::Config,
                deps: &["All Python packages"],
            },
        ],
    },
    Category {
        key: CategoryKey::Mt5,
        title: "📊 MetaTrader 5 Integration",
        color: Accent::Green,
        items: &[
            Item {
                name: "MetaTrader5 >= 5.0.45",
                item_type: ItemType::Package,
                deps: &[],
            },
            Item {
                name: "MT5 Terminal",
                item_type: ItemType::External,
                deps: &["Must be running"],
            },
            Item {
                name: ".env Configuration",
                item_type: ItemType::Config,
                deps: &["MT5_LOGIN", "MT5_PASSWORD", "MT5_SERVER"],
            },
            Item {
                name: "Demo Account",
                item_type: ItemType::Account,
                deps: &["Broker credentials"],
            },
        ],
    },
    Category {
        key: CategoryKey::News,
        title: "📰 News Sources",
        color: Accent::Purple,
        items: &[
            Item {
                name: "Telegram: @marketfeed",
                item_type: ItemType::External,
                deps: &["Telegram Bot API"],
            },
            Item {
                name: "Telegram: @wfwitness",
                item_type: ItemType::External,
                deps: &["Telegram Bot API"],
            },
            Item {
                name: "NewsAnalyzer Class",
                item_type: ItemType::Module,
                deps: &["Sentiment keywords", "AI analysis"],
            },
            Item {
                name: "Real-time News Fetcher",
                item_type: ItemType::Service,
                deps: &["API credentials"],
            },
        ],
    },
    Category {
        key: CategoryKey::Trading,
        title: "💹 Trading Logic",
        color: Accent::Orange,
        items: &[
            Item {
                name: "Multi-pair Support",
                item_type: ItemType::Feature,
                deps: &["All forex pairs"],
            },
            Item {
                name: "Auto Position Opening",
                item_type: ItemType::Feature,
                deps: &["News sentiment"],
            },
            Item {
                name: "Risk Management",
                item_type: ItemType::Module,
                deps: &["SL: 1%", "TP: 10%"],
            },
            Item {
                name: "Position Monitor",
                item_type: ItemType::Service,
                deps: &["Real-time tracking"],
            },
        ],
    },
    Category {
        key: CategoryKey::Config,
        title: "⚙️ Configuration",
        color: Accent::Yellow,
        items: &[
            Item {
                name: "advanced_config.py",
                item_type: ItemType::File,
                deps: &["Trading strategies"],
            },
            Item {
                name: ".env file",
                item_type: ItemType::File,
                deps: &["Secrets & credentials"],
            },
            Item {
                name: "Broker Settings",
                item_type: ItemType::Config,
                deps: &["Broker-specific params"],
            },
            Item {
                name: "Daily Limits",
                item_type: ItemType::Config,
                deps: &["Circuit breaker rules"],
            },
        ],
    },
    Category {
        key: CategoryKey::Monitoring,
        title: "📈 Monitoring & Backtest",
        color: Accent::Red,
        items: &[
            Item {
                name: "backtest_monitor.py",
                item_type: ItemType::File,
                deps: &["TradingMonitor", "BacktestEngine"],
            },
            Item {
                name: "Performance Stats",
                item_type: ItemType::Feature,
                deps: &["Win rate", "Profit factor"],
            },
            Item {
                name: "Trading Log",
                item_type: ItemType::Storage,
                deps: &["trading_log.json"],
            },
            Item {
                name: "Daily Summary",
                item_type: ItemType::Report,
                deps: &["Trade history"],
            },
        ],
    },
];

static FLOWS: [FlowEdge; 6] = [
    FlowEdge {
        from: "Telegram News",
        to: "NewsAnalyzer",
        label: "Raw news",
    },
    FlowEdge {
        from: "NewsAnalyzer",
        to: "Sentiment Score",
        label: "Analysis",
    },
    FlowEdge {
        from: "Sentiment Score",
        to: "Trading Signal",
        label: "BUY/SELL",
    },
    FlowEdge {
        from: "Trading Signal",
        to: "MT5",
        label: "Execute order",
    },
    FlowEdge {
        from: "MT5",
        to: "Monitor",
        label: "Position data",
    },
    FlowEdge {
        from: ".env",
        to: "MT5 Connection",
        label: "Credentials",
    },
];

/// Credential file template. Display text only; reproduced verbatim.
pub const ENV_TEMPLATE: &str = r#"# MetaTrader 5 Account Configuration
MT5_LOGIN=12345678
MT5_PASSWORD=YourPassword123
MT5_SERVER=BrokerName-Demo
MT5_PATH=C:\Program Files\MetaTrader 5\terminal64.exe

# Telegram Bot Configuration
TELEGRAM_BOT_TOKEN=your_telegram_bot_token_here
TELEGRAM_CHAT_ID=your_chat_id_here

# News API Keys (Optional)
NEWS_API_KEY=your_newsapi_key_here
ALPHA_VANTAGE_KEY=your_alphavantage_key_here

# Trading Configuration
DEFAULT_LOT_SIZE=0.01
STOP_LOSS_PERCENT=1.0
TAKE_PROFIT_PERCENT=10.0
CHECK_INTERVAL=60

# Risk Management
MAX_DAILY_LOSS=50.0
MAX_DAILY_PROFIT=200.0
MAX_TRADES_PER_DAY=10
MAX_CONSECUTIVE_LOSSES=3

# Environment
ENVIRONMENT=demo  # demo or live"#;

static GUIDE: [GuideStep; 4] = [
    GuideStep {
        title: "Buka MT5 Terminal",
        body: StepBody::Bullets(&[
            "Login ke akun demo MT5 Anda",
            "Catat: Login ID, Password, dan Server name",
        ]),
    },
    GuideStep {
        title: "Buat File .env",
        body: StepBody::Bullets(&[
            "Buat file bernama `.env` di folder project",
            "Copy template di bawah dan isi dengan data MT5 Anda",
        ]),
    },
    GuideStep {
        title: "Install python-dotenv",
        body: StepBody::Command("pip install python-dotenv"),
    },
    GuideStep {
        title: "Update Bot Code",
        body: StepBody::Bullets(&[
            "Import dotenv di awal file",
            "Load credentials dari .env",
            "Pass ke MT5 login function",
        ]),
    },
];

static PACKAGES: [Package; 6] = [
    Package {
        name: "MetaTrader5>=5.0.45",
        purpose: "MT5 integration",
    },
    Package {
        name: "pandas>=2.0.0",
        purpose: "Data manipulation",
    },
    Package {
        name: "numpy>=1.24.0",
        purpose: "Numerical computing",
    },
    Package {
        name: "requests>=2.31.0",
        purpose: "HTTP requests",
    },
    Package {
        name: "python-dotenv>=1.0.0",
        purpose: "Environment variables",
    },
    Package {
        name: "python-telegram-bot>=20.0",
        purpose: "Telegram integration",
    },
];

static SUMMARY: [SummaryPoint; 6] = [
    SummaryPoint {
        label: "Multi-pair",
        text: "Bot akan trade SEMUA pairs yang tersedia di broker",
    },
    SummaryPoint {
        label: "Telegram News",
        text: "Ambil news dari @marketfeed dan @wfwitness",
    },
    SummaryPoint {
        label: "Auto Open",
        text: "Bad news = SHORT, Good news = LONG",
    },
    SummaryPoint {
        label: "Multi Position",
        text: "Bot bisa buka multiple positions secara bersamaan",
    },
    SummaryPoint {
        label: "Demo Account",
        text: "Testing aman dengan akun demo dulu",
    },
    SummaryPoint {
        label: ".env Config",
        text: "Credentials tersimpan aman di .env file",
    },
];

/// Categories in declaration order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category. Total over the closed key set.
pub fn category(key: CategoryKey) -> &'static Category {
    &CATEGORIES[key.index()]
}

/// Flow edges in declaration order.
pub fn flows() -> &'static [FlowEdge] {
    &FLOWS
}

pub fn guide() -> &'static [GuideStep] {
    &GUIDE
}

pub fn packages() -> &'static [Package] {
    &PACKAGES
}

pub fn summary() -> &'static [SummaryPoint] {
    &SUMMARY
}
