//! PortProbe port - asks whether a local TCP port can be bound right now

/// Bind-availability check for host ports
///
/// The answer is only valid at the moment of the call; nothing is reserved.
pub trait PortProbe {
    fn is_free(&self, port: u16) -> bool;
}
