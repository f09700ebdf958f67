pub mod analyze;
pub mod dispatch;
pub mod health;
pub mod history;
pub mod search;
pub mod shared;
pub mod synthesize;
