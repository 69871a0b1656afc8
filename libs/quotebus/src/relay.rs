//! The relay that bus clients connect to.
//!
//! Producers and consumers share one connection type; a connection becomes a
//! group member when it sends a [`Frame::Subscribe`]. Each record is
//! delivered once per subscribed group on its topic, round-robin across the
//! group's members. Closed members are dropped at delivery time.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{Mutex, mpsc};

use crate::error::BusError;
use crate::frame::{Frame, read_frame, write_frame};

/// Group membership: live senders plus the round-robin cursor.
struct Group {
    members: Vec<mpsc::UnboundedSender<Frame>>,
    next: usize,
}

impl Group {
    /// Deliver `frame` to one live member, dropping closed ones.
    fn deliver(&mut self, frame: &Frame) -> bool {
        while !self.members.is_empty() {
            let index = self.next % self.members.len();
            if self.members[index].send(frame.clone()).is_ok() {
                self.next = index + 1;
                return true;
            }
            self.members.remove(index);
        }
        false
    }
}

/// topic -> group name -> membership
type Subscriptions = Arc<Mutex<HashMap<String, HashMap<String, Group>>>>;

/// A topic relay serving bus producers and consumers.
pub struct Relay {
    listener: TcpListener,
    subscriptions: Subscriptions,
}

impl Relay {
    /// Bind the relay to `addr` (`host:port`; port 0 picks an ephemeral one).
    pub async fn bind(addr: &str) -> Result<Self, BusError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            subscriptions: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Address the relay is listening on.
    pub fn local_addr(&self) -> Result<SocketAddr, BusError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve connections until the task is dropped.
    pub async fn run(self) -> Result<(), BusError> {
        tracing::info!(addr = %self.local_addr()?, "Relay listening");
        loop {
            let (stream, peer) = self.listener.accept().await?;
            let subscriptions = Arc::clone(&self.subscriptions);
            tokio::spawn(async move {
                tracing::debug!(%peer, "Bus connection opened");
                handle_connection(stream, subscriptions).await;
                tracing::debug!(%peer, "Bus connection closed");
            });
        }
    }
}

/// Read frames from one connection until EOF or error.
///
/// The write half is handed to a forwarding task on the first subscribe; a
/// connection that never subscribes (a producer) never gets one.
async fn handle_connection(stream: TcpStream, subscriptions: Subscriptions) {
    let (mut reader, write_half) = stream.into_split();
    let mut write_half = Some(write_half);
    let mut outbound: Option<mpsc::UnboundedSender<Frame>> = None;

    loop {
        match read_frame(&mut reader).await {
            Ok(Some(Frame::Subscribe { topic, group })) => {
                let sender = outbound.get_or_insert_with(|| {
                    let (sender, mut receiver) = mpsc::unbounded_channel::<Frame>();
                    if let Some(mut writer) = write_half.take() {
                        tokio::spawn(async move {
                            while let Some(frame) = receiver.recv().await {
                                if write_frame(&mut writer, &frame).await.is_err() {
                                    break;
                                }
                            }
                        });
                    }
                    sender
                });
                tracing::info!(%topic, %group, "Consumer subscribed");
                let mut subscriptions = subscriptions.lock().await;
                subscriptions
                    .entry(topic)
                    .or_default()
                    .entry(group)
                    .or_insert_with(|| Group {
                        members: Vec::new(),
                        next: 0,
                    })
                    .members
                    .push(sender.clone());
            }
            Ok(Some(Frame::Record {
                topic,
                key,
                payload,
            })) => {
                tracing::debug!(%topic, %key, "Record received");
                let mut subscriptions = subscriptions.lock().await;
                if let Some(groups) = subscriptions.get_mut(&topic) {
                    let frame = Frame::Record {
                        topic: topic.clone(),
                        key,
                        payload,
                    };
                    for group in groups.values_mut() {
                        // A group with no live members just misses the record.
                        group.deliver(&frame);
                    }
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(error = %err, "Dropping bus connection");
                break;
            }
        }
    }
}
