use std::time::SystemTime;

use simul::config::Config;
use simul::model::Model;
use simul::physics;
use simul::world::World;
use simul::V2;

fn main() {
	env_logger::init();
	let config = Config::default().with_gravity(V2::new(0., -0.2));
	let mut world = World::new(config);
	let model = Model::new_ring(1., 16, 60., 0.05, 0.3);
	model.instantiate(&mut world, V2::new(512., 260.)).unwrap();
	let rframes = 100000;
	let start = SystemTime::now();
	let dt = world.config.dt;
	for _ in 0..rframes {
		physics::step(&mut world, dt);
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}us/frame", duration as f64 / rframes as f64);
}
