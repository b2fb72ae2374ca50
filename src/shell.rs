pub mod config;
pub mod controller;
pub mod menu;
pub mod messages;
