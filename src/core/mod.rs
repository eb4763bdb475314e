pub mod add;
pub mod backup;
pub mod bijstand;
pub mod edit;
pub mod log;
pub mod search;
