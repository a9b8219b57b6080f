//! Host port allocation

use crate::domain::ports::PortProbe;
use crate::error::{DvError, DvResult};

/// First port at or above `start` that the probe reports free. Port 0 is
/// never returned; binding it asks the OS for an ephemeral port.
///
/// Best effort: another process may take the port before the runtime binds
/// it.
pub fn find_free_port<P: PortProbe + ?Sized>(probe: &P, start: u16) -> DvResult<u16> {
    (start.max(1)..=u16::MAX)
        .find(|&port| probe.is_free(port))
        .inspect(|port| tracing::debug!(start, port, "allocated host port"))
        .ok_or(DvError::PortsExhausted { start })
}
