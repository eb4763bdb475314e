pub mod add;
pub mod backup;
pub mod bijstand;
pub mod config;
pub mod db;
pub mod edit;
pub mod init;
pub mod log;
pub mod options;
pub mod search;
pub mod show;
