use byteorder::{ByteOrder, LittleEndian};

use crate::adb::errors::adb_client_error::ProtocolViolation;
use crate::constants::{
    DENT_RECORD_SIZE, MAX_DENT_NAME_LENGTH, STAT_RECORD_SIZE, SYNC_DATA_COMMAND, SYNC_DONE_COMMAND,
};

// Requests carry a binary little-endian length, unlike the hex-framed
// host protocol.
pub fn encode_sync_request(tag: &[u8], argument: &str) -> Vec<u8> {
    let mut request = Vec::with_capacity(tag.len() + 4 + argument.len());
    request.extend_from_slice(tag);
    request.extend_from_slice(&(argument.len() as u32).to_le_bytes());
    request.extend_from_slice(argument.as_bytes());
    request
}

pub fn encode_data_header(size: u32) -> Vec<u8> {
    let mut header = SYNC_DATA_COMMAND.to_vec();
    header.extend_from_slice(&size.to_le_bytes());
    header
}

pub fn encode_done(trailer: u32) -> Vec<u8> {
    let mut message = SYNC_DONE_COMMAND.to_vec();
    message.extend_from_slice(&trailer.to_le_bytes());
    message
}

#[derive(Debug, Clone, Copy)]
pub struct DentRecord {
    pub mode: u32,
    pub size: u32,
    pub mtime: u32,
    pub namelen: u32,
}

pub fn decode_dent_record(buf: &[u8]) -> Result<DentRecord, ProtocolViolation> {
    if buf.len() < DENT_RECORD_SIZE {
        return Err(ProtocolViolation::TruncatedPayload { expected: DENT_RECORD_SIZE });
    }

    let record = DentRecord {
        mode: LittleEndian::read_u32(&buf[0..4]),
        size: LittleEndian::read_u32(&buf[4..8]),
        mtime: LittleEndian::read_u32(&buf[8..12]),
        namelen: LittleEndian::read_u32(&buf[12..16]),
    };

    if record.namelen > MAX_DENT_NAME_LENGTH {
        return Err(ProtocolViolation::InvalidLength(record.namelen));
    }

    Ok(record)
}

#[derive(Debug, Clone, Copy)]
pub struct StatRecord {
    pub mode: u32,
    pub size: u32,
    pub mtime: u32,
}

pub fn decode_stat_record(buf: &[u8]) -> Result<StatRecord, ProtocolViolation> {
    if buf.len() < STAT_RECORD_SIZE {
        return Err(ProtocolViolation::TruncatedPayload { expected: STAT_RECORD_SIZE });
    }

    Ok(StatRecord {
        mode: LittleEndian::read_u32(&buf[0..4]),
        size: LittleEndian::read_u32(&buf[4..8]),
        mtime: LittleEndian::read_u32(&buf[8..12]),
    })
}
