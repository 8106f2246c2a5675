pub mod convert;
pub mod products;
pub mod setup;
pub mod ui;
