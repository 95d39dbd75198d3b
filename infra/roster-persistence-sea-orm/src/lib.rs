use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

pub mod entity;
pub mod players;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(max_connections);
    Database::connect(opt).await
}

/// Opens the pool described by `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
/// Panics if the configuration is missing or the store is unreachable.
pub async fn create_db_pool() -> DatabaseConnection {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .map(|value| {
            value
                .parse::<u32>()
                .expect("DATABASE_MAX_CONNECTIONS must be a valid u32")
        })
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    connect(&database_url, max_connections)
        .await
        .expect("Failed to connect to database")
}

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    let mut players_table = schema.create_table_from_entity(entity::player::Entity);
    players_table.if_not_exists();
    db.execute(&players_table).await?;
    log::debug!("Ensured players table exists");
    Ok(())
}
