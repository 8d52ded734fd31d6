/// Marker trait for intents: lifecycle steps and host events fed to a reducer.
pub trait Intent: Send + 'static {}
