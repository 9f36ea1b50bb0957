use sea_orm::{ConnectionTrait, DbBackend, Statement};
use sea_orm_migration::{SchemaManagerConnection, prelude::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum OperationTypes {
    Table,
    Id,
    Description,
}

// The catalog is closed: these four codes are the only valid operation types.
const CATALOG: [(i16, &str); 4] = [
    (1, "Normal Purchase"),
    (2, "Purchase with Installments"),
    (3, "Withdrawal"),
    (4, "Payment"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OperationTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OperationTypes::Id)
                            .small_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OperationTypes::Description)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        let backend = db.get_database_backend();
        for (id, description) in CATALOG {
            insert_operation_type(db, backend, id, description).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OperationTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}

async fn insert_operation_type(
    db: &SchemaManagerConnection<'_>,
    backend: DbBackend,
    id: i16,
    description: &str,
) -> Result<(), DbErr> {
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO operation_types (id, description) VALUES (?, ?);",
        vec![id.into(), description.to_string().into()],
    ))
    .await?;
    Ok(())
}
