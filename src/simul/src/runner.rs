use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use log::warn;
use protocol::user_event::{UpdateInfo, UserEvent};

use crate::controller_message::ControllerMessage;
use crate::entity::Handle;
use crate::physics;
use crate::world::World;
use crate::V2;

/// Owns the world on its own thread, paces frames to `config.dt` and
/// drains controller messages between them. The world itself stays
/// single-threaded; this is the only scheduler that touches it.
pub struct Runner {
	pub time_scale: f64,
	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	control: Option<(Handle, V2)>,
	world: World,
}

impl Runner {
	pub fn new(world: World) -> Self {
		Self {
			time_scale: 1.0,
			forward_frames: -1,
			control: None,
			world,
		}
	}

	pub fn with_paused(mut self) -> Self {
		// provide first frame
		self.forward_frames = 1;
		self
	}

	pub fn with_time_scale(mut self, time_scale: f64) -> Self {
		self.time_scale = time_scale;
		self
	}

	pub fn world(&self) -> &World {
		&self.world
	}

	pub fn paused(&self) -> bool {
		self.forward_frames == 0
	}

	fn apply_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::ControlMass(h, p) => {
				let pos = V2::new(p[0], p[1]);
				match self.world.pin_mass(h, pos) {
					Ok(()) => self.control = Some((h, pos)),
					Err(e) => warn!("control: {}", e),
				}
			}
			ControllerMessage::UncontrolMass(h) => {
				if self.control.map(|(c, _)| c) == Some(h) {
					self.control = None;
				}
			}
		}
	}

	fn frame(&mut self) {
		let dt = self.world.config.dt;
		physics::step(&mut self.world, dt);
		// a held mass stays at the pointer even between pointer moves
		if let Some((h, pos)) = self.control {
			let _ = self.world.pin_mass(h, pos);
		}
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut start_time = SystemTime::now();
		let rtime = (self.world.config.dt * 1e6 * self.time_scale) as u64;
		loop {
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				let frame_start = SystemTime::now();
				self.frame();
				let spent = SystemTime::now()
					.duration_since(frame_start)
					.unwrap_or_default()
					.as_micros() as f64;
				let model = self.world.pr_model();
				let info = UpdateInfo {
					load: spent / rtime.max(1) as f64,
					mass_len: model.masses.len(),
					spring_len: model.springs.len(),
				};
				if tx.send(UserEvent::Update(model, info)).is_err() {
					// viewer went away
					return;
				}
			}

			let next_time = SystemTime::now();
			let elapsed = next_time
				.duration_since(start_time)
				.unwrap_or_default()
				.as_micros() as u64;
			while let Ok(msg) = rx.try_recv() {
				self.apply_message(msg);
			}
			if elapsed < rtime {
				std::thread::sleep(Duration::from_micros(rtime - elapsed));
			}
			start_time = next_time;
		}
	}
}
