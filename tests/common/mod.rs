#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use adbf_client::ClientConfig;

pub async fn bind_server() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

pub fn test_config(port: u16) -> ClientConfig {
    ClientConfig {
        server_address: "127.0.0.1".to_string(),
        server_port: port,
        ..ClientConfig::default()
    }
}

pub async fn read_host_request(socket: &mut TcpStream) -> String {
    let mut length_prefix = [0u8; 4];
    socket.read_exact(&mut length_prefix).await.unwrap();
    let length = usize::from_str_radix(std::str::from_utf8(&length_prefix).unwrap(), 16).unwrap();
    let mut payload = vec![0u8; length];
    socket.read_exact(&mut payload).await.unwrap();
    String::from_utf8(payload).unwrap()
}

pub async fn write_okay_with_payload(socket: &mut TcpStream, payload: &str) {
    let response = format!("OKAY{:04x}{}", payload.len(), payload);
    socket.write_all(response.as_bytes()).await.unwrap();
}

/// Accepts one connection and performs the transport-any + sync: mode
/// handshake the way the real server does: bare OKAY, no length field.
pub async fn accept_sync_session(listener: &TcpListener) -> TcpStream {
    let (mut socket, _) = listener.accept().await.unwrap();
    assert_eq!(read_host_request(&mut socket).await, "host:transport-any");
    socket.write_all(b"OKAY").await.unwrap();
    assert_eq!(read_host_request(&mut socket).await, "sync:");
    socket.write_all(b"OKAY").await.unwrap();
    socket
}

pub async fn read_sync_request(socket: &mut TcpStream) -> (String, String) {
    let mut tag = [0u8; 4];
    socket.read_exact(&mut tag).await.unwrap();
    let mut length = [0u8; 4];
    socket.read_exact(&mut length).await.unwrap();
    let length = u32::from_le_bytes(length) as usize;
    let mut argument = vec![0u8; length];
    socket.read_exact(&mut argument).await.unwrap();
    (
        String::from_utf8(tag.to_vec()).unwrap(),
        String::from_utf8(argument).unwrap(),
    )
}

pub fn dent(mode: u32, size: u32, mtime: u32, name: &str) -> Vec<u8> {
    let mut record = b"DENT".to_vec();
    record.extend_from_slice(&mode.to_le_bytes());
    record.extend_from_slice(&size.to_le_bytes());
    record.extend_from_slice(&mtime.to_le_bytes());
    record.extend_from_slice(&(name.len() as u32).to_le_bytes());
    record.extend_from_slice(name.as_bytes());
    record
}

pub fn list_done() -> Vec<u8> {
    let mut message = b"DONE".to_vec();
    message.extend_from_slice(&[0u8; 16]);
    message
}

pub fn recv_done() -> Vec<u8> {
    let mut message = b"DONE".to_vec();
    message.extend_from_slice(&[0u8; 4]);
    message
}

pub fn stat_record(mode: u32, size: u32, mtime: u32) -> Vec<u8> {
    let mut record = b"STAT".to_vec();
    record.extend_from_slice(&mode.to_le_bytes());
    record.extend_from_slice(&size.to_le_bytes());
    record.extend_from_slice(&mtime.to_le_bytes());
    record
}

pub fn data_chunk(payload: &[u8]) -> Vec<u8> {
    let mut message = b"DATA".to_vec();
    message.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    message.extend_from_slice(payload);
    message
}

pub fn fail_message(message: &str) -> Vec<u8> {
    let mut response = b"FAIL".to_vec();
    response.extend_from_slice(&(message.len() as u32).to_le_bytes());
    response.extend_from_slice(message.as_bytes());
    response
}
