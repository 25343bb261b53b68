//! propsearch - HTTP search API over a PostgreSQL property listings table

pub mod cli;
pub mod db;
pub mod http_server;
