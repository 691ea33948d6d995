use tokio::sync::watch;

/// Creates a connected stop handle / signal pair
pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (sender, receiver) = watch::channel(false);
    (StopHandle { sender }, StopSignal { receiver })
}

/// Sending side, owned by the interrupt listener
#[derive(Debug)]
pub struct StopHandle {
    sender: watch::Sender<bool>,
}

impl StopHandle {
    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }
}

/// Receiving side, polled by the run loop between steps and raced against fetches
#[derive(Debug, Clone)]
pub struct StopSignal {
    receiver: watch::Receiver<bool>,
}

impl StopSignal {
    /// A signal that can never fire
    pub fn never() -> Self {
        let (_, signal) = stop_channel();
        signal
    }

    pub fn is_triggered(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once a stop has been requested; pends forever if the handle is gone
    pub async fn triggered(&mut self) {
        loop {
            if *self.receiver.borrow_and_update() {
                return;
            }
            if self.receiver.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
