//! sea-orm entities for the relational schema.
//!
//! Ownership is anchored on `users.username`: wallets and private
//! categories reference it directly, expenses and budgets reach it
//! through their wallet.

pub mod prelude;

pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod users;
pub mod wallets;
