use std::string::String;

/// A duplex, line-oriented byte stream to the peer. Any failure here is
/// fatal to the session and treated like an explicit quit.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()>;
    /// Blocking read of the next newline-delimited token.
    async fn recv_line(&mut self) -> anyhow::Result<String>;
    /// Release the stream. Idempotent: teardown can be triggered from
    /// several paths and a second close must not fail.
    async fn close(&mut self) -> anyhow::Result<()>;
}

pub mod in_memory;
pub mod tcp;
