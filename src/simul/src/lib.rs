pub mod config;
pub mod controller_message;
pub mod entity;
pub mod error;
pub mod model;
pub mod physics;
pub mod picker;
pub mod runner;
pub mod vec;
pub mod world;

pub type V2 = nalgebra::Vector2<f64>;
