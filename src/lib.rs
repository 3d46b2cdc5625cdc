// Library for tests to access modules

pub mod aggregation;
pub mod chart;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod tsdb_repo;
pub mod version;
pub mod writer;
