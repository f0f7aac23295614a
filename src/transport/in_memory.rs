use std::collections::VecDeque;
use std::string::String;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::transport::Transport;

/// In-process line transport for tests: two endpoints sharing a pair of
/// queues. Dropping or closing one endpoint shows up on the other as a
/// closed channel.
pub struct InMemoryTransport {
    recv_queue: Arc<Mutex<VecDeque<String>>>,
    send_queue: Arc<Mutex<VecDeque<String>>>,
    closed: bool,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
                closed: false,
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
                closed: false,
            },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        if self.closed {
            return Err(anyhow::anyhow!("transport is closed"));
        }
        let mut queue = self.send_queue.lock().unwrap();
        queue.push_back(String::from(line));
        Ok(())
    }

    async fn recv_line(&mut self) -> anyhow::Result<String> {
        loop {
            if self.closed {
                return Err(anyhow::anyhow!("transport is closed"));
            }
            if let Some(line) = {
                let mut queue = self.recv_queue.lock().unwrap();
                queue.pop_front()
            } {
                return Ok(line);
            }
            if Arc::strong_count(&self.recv_queue) == 1 {
                return Err(anyhow::anyhow!("channel closed"));
            }
            yield_now().await;
        }
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        self.closed = true;
        Ok(())
    }
}
