pub mod add;
pub mod backup;
pub mod charts;
pub mod columns;
pub mod config;
pub mod del;
pub mod log;
pub mod presentation;
pub mod reference;
pub mod validate;
