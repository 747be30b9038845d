use shop_online::{
    config::AppConfig,
    db::{create_pool, create_session_store, orm_from_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url).await?;
    run_migrations(&orm_from_pool(pool.clone())).await?;
    create_session_store(pool).await?;
    println!("Migrations applied");
    Ok(())
}
