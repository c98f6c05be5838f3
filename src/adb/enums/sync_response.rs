use std::fmt;

use crate::adb::errors::adb_client_error::ProtocolViolation;
use crate::constants::{
    B_FAIL, B_OKAY, SYNC_DATA_COMMAND, SYNC_DENT_COMMAND, SYNC_DONE_COMMAND, SYNC_STAT_COMMAND,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncResponse {
    Okay,
    Fail,
    Done,
    Dent,
    Stat,
    Data,
}

impl SyncResponse {
    pub fn from_wire(tag: [u8; 4]) -> Result<Self, ProtocolViolation> {
        match &tag[..] {
            B_OKAY => Ok(SyncResponse::Okay),
            B_FAIL => Ok(SyncResponse::Fail),
            SYNC_DONE_COMMAND => Ok(SyncResponse::Done),
            SYNC_DENT_COMMAND => Ok(SyncResponse::Dent),
            SYNC_STAT_COMMAND => Ok(SyncResponse::Stat),
            SYNC_DATA_COMMAND => Ok(SyncResponse::Data),
            _ => Err(ProtocolViolation::InvalidStatus(tag)),
        }
    }
}

impl fmt::Display for SyncResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncResponse::Okay => write!(f, "OKAY"),
            SyncResponse::Fail => write!(f, "FAIL"),
            SyncResponse::Done => write!(f, "DONE"),
            SyncResponse::Dent => write!(f, "DENT"),
            SyncResponse::Stat => write!(f, "STAT"),
            SyncResponse::Data => write!(f, "DATA"),
        }
    }
}
