pub mod health;
pub mod relay;
pub mod routes;
