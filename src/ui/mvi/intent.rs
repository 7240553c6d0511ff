//! Intent marker trait.

/// Something that happened: a key mapped to an action, or a signal from
/// the container such as "open for this expert".
pub trait Intent: Send + 'static {}
