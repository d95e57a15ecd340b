pub mod error;
pub mod mapping;
pub mod model;
pub mod status;
pub mod value;

pub use error::{MappingError, ModelError, StatusError};
pub use mapping::{mapping_for, PropertyEntry, PropertyMapping};
pub use model::{DeviceModel, Features};
pub use status::{SwitchState, SwitchStatus, SystemStatus};
pub use value::PropertyValue;
