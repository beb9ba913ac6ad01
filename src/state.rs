use crate::errors::AppError;
use crate::export::DocumentRenderer;
use crate::mailer::Transmitter;
use crate::relay::MailRelay;
use crate::session::Session;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub transmitter: Arc<dyn Transmitter>,
    pub relay: Arc<MailRelay>,
    sending: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(
        session: Session,
        renderer: Arc<dyn DocumentRenderer>,
        transmitter: Arc<dyn Transmitter>,
        relay: MailRelay,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            renderer,
            transmitter,
            relay: Arc::new(relay),
            sending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    /// Claims the single outbound send slot. The slot is released when the
    /// guard drops, including when the request future is cancelled.
    pub fn begin_send(&self) -> Result<SendGuard, AppError> {
        self.sending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| AppError::conflict("an email is already being sent"))?;
        Ok(SendGuard {
            flag: Arc::clone(&self.sending),
        })
    }
}

pub struct SendGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for SendGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
