use crate::entity::Handle;

#[derive(Clone, Copy, Debug)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	ControlMass(Handle, [f64; 2]),
	UncontrolMass(Handle),
}
