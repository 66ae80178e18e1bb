pub mod athletes;
pub mod championships;
pub mod games;
pub mod health;
pub mod performance;
pub mod teams;
