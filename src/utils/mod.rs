pub mod date_time_provider;
