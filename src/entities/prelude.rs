pub use super::budgets::Entity as Budgets;
pub use super::categories::Entity as Categories;
pub use super::expenses::Entity as Expenses;
pub use super::users::Entity as Users;
pub use super::wallets::Entity as Wallets;
