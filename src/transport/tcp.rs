use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};

use crate::transport::Transport;

/// Line-delimited transport over a TCP stream.
pub struct LineTransport {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    closed: bool,
}

impl LineTransport {
    pub fn new(stream: TcpStream) -> Self {
        let (read, write) = stream.into_split();
        Self {
            reader: BufReader::new(read),
            writer: write,
            closed: false,
        }
    }

    /// Initiator side: bind the port and wait for exactly one peer. The
    /// listening endpoint is released as soon as the session stream is up.
    pub async fn listen(port: u16) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        log::info!("listening on port {}", port);
        let (stream, addr) = listener.accept().await?;
        log::info!("peer connected from {}", addr);
        Ok(Self::new(stream))
    }

    /// Responder side: dial the initiator.
    pub async fn connect(address: &str, port: u16) -> anyhow::Result<Self> {
        let stream = TcpStream::connect((address, port)).await?;
        log::info!("connected to {}:{}", address, port);
        Ok(Self::new(stream))
    }
}

#[async_trait::async_trait]
impl Transport for LineTransport {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        if self.closed {
            return Err(anyhow::anyhow!("transport is closed"));
        }
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn recv_line(&mut self) -> anyhow::Result<String> {
        if self.closed {
            return Err(anyhow::anyhow!("transport is closed"));
        }
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(anyhow::anyhow!("connection closed by peer"));
        }
        Ok(line)
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // the peer may already be gone; shutdown failure is not an error
        let _ = self.writer.shutdown().await;
        Ok(())
    }
}
