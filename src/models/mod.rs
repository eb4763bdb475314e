pub mod object;
pub mod object_type;
pub mod participant;

pub use object::{NewObject, ObjectRecord, ObjectUpdate, SearchRow};
pub use object_type::ObjectType;
pub use participant::Participant;
