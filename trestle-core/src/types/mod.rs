mod item;
mod record;
mod selection;

pub use item::{value_to_text, Item};
pub use record::{ErrorCause, ErrorKind, ResultRecord};
pub use selection::{Operation, Resource, Selection};
