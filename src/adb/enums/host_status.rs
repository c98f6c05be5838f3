use std::fmt;

use crate::adb::errors::adb_client_error::ProtocolViolation;
use crate::constants::{B_FAIL, B_OKAY, FAIL, OKAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    Okay,
    Fail,
}

impl HostStatus {
    pub fn from_wire(tag: [u8; 4]) -> Result<Self, ProtocolViolation> {
        match &tag[..] {
            B_OKAY => Ok(HostStatus::Okay),
            B_FAIL => Ok(HostStatus::Fail),
            _ => Err(ProtocolViolation::InvalidStatus(tag)),
        }
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::Okay => write!(f, "{}", OKAY),
            HostStatus::Fail => write!(f, "{}", FAIL),
        }
    }
}
