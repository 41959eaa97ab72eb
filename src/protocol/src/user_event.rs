use crate::pr_model::PrModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, UpdateInfo),
}

#[derive(Clone, Debug)]
pub struct UpdateInfo {
	pub load: f64,
	pub mass_len: usize,
	pub spring_len: usize,
}
