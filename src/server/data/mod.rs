//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return domain models at the boundary. A missed single-row lookup is
//! `Ok(None)`, never an error.

pub mod admin_user;
pub mod event;
pub mod news_post;
pub mod payment_request;
pub mod rule;
pub mod store_item;

#[cfg(test)]
mod test;
