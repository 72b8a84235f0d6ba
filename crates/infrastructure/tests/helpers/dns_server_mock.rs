#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server answers each query.
#[derive(Debug, Clone, Copy)]
pub enum MockReply {
    /// One A record (93.184.216.34) with the given TTL.
    Answer { ttl: u32 },
    /// Valid answer carrying a different transaction ID.
    WrongId,
    /// Read the query, never answer.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_mock_response(&buf[..len], reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn build_mock_response(query: &[u8], reply: MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let ttl = match reply {
            MockReply::Silent => return None,
            MockReply::Answer { ttl } => ttl,
            MockReply::WrongId => 60,
        };

        let mut response = Vec::with_capacity(512);

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = match reply {
            MockReply::WrongId => id.wrapping_add(1),
            _ => id,
        };
        response.extend_from_slice(&id.to_be_bytes());

        response.push(0x81);
        response.push(0x80);

        response.extend_from_slice(&query[4..6]);

        response.extend_from_slice(&[0x00, 0x01]);

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04, 93, 184, 216, 34]);

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
