//! Local TCP port probing

use std::net::{Ipv4Addr, TcpListener};

use crate::domain::ports::PortProbe;

/// Probes ports by binding a listener on all interfaces and dropping it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpPortProbe;

impl PortProbe for TcpPortProbe {
    fn is_free(&self, port: u16) -> bool {
        TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).is_ok()
    }
}
