pub mod error;
pub mod expense;
pub mod health;
pub mod income;
pub mod security;
pub mod tags;
pub mod user;
