pub mod chat;
pub mod health;
pub mod novelty;
pub mod vitals;
