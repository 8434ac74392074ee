pub mod accounts;
pub mod prediction_logs;
