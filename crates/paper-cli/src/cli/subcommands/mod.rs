mod history;

pub use history::HistoryCommands;
