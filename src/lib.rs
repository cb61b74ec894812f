pub mod access;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod config;
pub mod db_utils;
pub mod entities;
pub mod expenses;
pub mod extract;
pub mod response;
pub mod server;
pub mod state;
pub mod store;
pub mod users;
pub mod utils;
pub mod validations;
pub mod wallets;

#[cfg(test)]
pub(crate) mod fixtures;
