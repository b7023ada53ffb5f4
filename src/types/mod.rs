pub mod current_weather;
pub mod daily_summary;
pub mod sample;
pub mod timestamp;
pub mod units;
