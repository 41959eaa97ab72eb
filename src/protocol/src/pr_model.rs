// pr_model: world snapshot published to frontends

use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct PrMass {
	pub pos: [f64; 2],
}

#[derive(Clone, Debug)]
pub struct PrSpring {
	pub id: u64,
	pub ends: [[f64; 2]; 2],
	pub muscle: bool,
}

#[derive(Clone, Debug)]
pub struct PrModel {
	pub masses: HashMap<u64, PrMass>,
	pub springs: Vec<PrSpring>,
}
