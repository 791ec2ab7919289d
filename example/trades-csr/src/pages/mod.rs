mod balance;
mod dialogs;
mod trade_history;

pub use balance::BalanceCard;
pub use dialogs::DialogHost;
pub use trade_history::TradeHistory;
