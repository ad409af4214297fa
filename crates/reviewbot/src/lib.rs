// Process wiring for the homework review notifier: configuration, the two
// HTTP clients and the poll cycle. Pure domain logic lives in reviewbot-core.

pub mod api;
pub mod cycle;
pub mod settings;
pub mod telegram;

pub use api::HomeworkApi;
pub use cycle::{run_cycle, RETRY_PERIOD};
pub use settings::Settings;
pub use telegram::TelegramBot;
