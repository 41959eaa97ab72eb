use crate::V2;

#[derive(Clone, Debug)]
pub struct Config {
	/// linear drag coefficient
	pub f: f64,
	pub g: V2,
	pub slip: f64,
	pub bounce: f64,
	pub dt: f64,
	pub width: f64,
	pub height: f64,
	pub wave_step: f64,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			f: 0.0005,
			g: V2::zeros(),
			slip: 0.2,
			bounce: 0.998,
			dt: 1.0,
			width: 1024.,
			height: 520.,
			wave_step: 0.05,
		}
	}
}

impl Config {
	pub fn with_gravity(mut self, g: V2) -> Self {
		self.g = g;
		self
	}

	pub fn with_drag(mut self, f: f64) -> Self {
		self.f = f;
		self
	}

	pub fn with_dt(mut self, dt: f64) -> Self {
		self.dt = dt;
		self
	}
}
