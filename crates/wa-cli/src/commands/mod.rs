mod answer;
mod config;
mod dispatch;
mod query;
mod recognize;
mod simple;

pub use dispatch::dispatch;
