#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

type Responder = Box<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

/// Localhost UDP nameserver answering every datagram through a responder
/// closure. `None` from the responder means stay silent.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(responder: F) -> Result<(Self, SocketAddr), std::io::Error>
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let responder: Responder = Box::new(responder);
        let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await?;
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
                            if let Some(response) = responder(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    /// Answers A queries with `addrs`, echoing the ID and question.
    pub async fn answering(addrs: Vec<Ipv4Addr>) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(move |query| {
            let answers: Vec<Vec<u8>> = addrs.iter().map(|a| a.octets().to_vec()).collect();
            Some(Self::build_response(query, 0, 1, &answers))
        })
        .await
    }

    /// Answers every query with an empty response carrying `rcode`.
    pub async fn failing(rcode: u8) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(move |query| Some(Self::build_response(query, rcode, 1, &[]))).await
    }

    pub async fn silent() -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start(|_| None).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Echoes header ID and question, then appends one `C0 0C` record of
    /// `rtype` per rdata.
    pub fn build_response(query: &[u8], rcode: u8, rtype: u16, rdatas: &[Vec<u8>]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0F));
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(rdatas.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        response.extend_from_slice(&query[12..]);

        for rdata in rdatas {
            response.extend_from_slice(&[0xC0, 0x0C]);
            response.extend_from_slice(&rtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x3C]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(rdata);
        }

        response
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
