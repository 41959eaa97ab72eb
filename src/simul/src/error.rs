use thiserror::Error;

use crate::entity::Handle;

#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SimError {
	#[error("invalid reference {0:?}")]
	InvalidReference(Handle),
	#[error("no such entity {0:?}")]
	NotFound(Handle),
}
