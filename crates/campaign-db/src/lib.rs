//! # campaign-db
//!
//! Database layer implementing the `campaign-core` ports with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations and the transactional unit of work
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campaign_db::{create_pool, run_migrations, PgUnitOfWorkFactory, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let uow = PgUnitOfWorkFactory::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgCampaignRepository, PgReactionRepository, PgUnitOfWork, PgUnitOfWorkFactory,
};
