use sea_orm::{
    prelude::Expr, sea_query::TableCreateStatement, ConnectionTrait, DbConn, DbErr, EntityTrait,
    Schema,
};

use crate::entities::{budgets, expenses, prelude::*};

///
/// Creates every table the service needs, skipping the ones that already exist.
/// Parents are created before children so foreign keys resolve.
///
pub async fn create_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut expense_stmt = table_stmt(&schema, Expenses);
    expense_stmt.check(Expr::col(expenses::Column::Amount).gt(0));

    let mut budget_stmt = table_stmt(&schema, Budgets);
    budget_stmt.check(Expr::col(budgets::Column::Amount).gt(0));

    let stmts = [
        table_stmt(&schema, Users),
        table_stmt(&schema, Wallets),
        table_stmt(&schema, Categories),
        expense_stmt,
        budget_stmt,
    ];

    for stmt in stmts.iter() {
        db.execute(backend.build(stmt)).await?;
    }

    Ok(())
}

fn table_stmt<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    stmt
}
