//! Domain layer: configuration types shared by every subsystem.

pub mod models;
