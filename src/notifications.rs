// Notification events for the presentation layer
//
// The wizard core never touches a global snackbar or process-wide mutable
// state: everything a UI might want to surface is sent down an explicit
// channel and consumed at the renderer's own pace.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::wizard::types::{AccountId, Coordinates, ValidationErrorMap, WizardPage};

/// Events the wizard emits as the user moves through it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notice {
    PageAdvanced {
        from: WizardPage,
        to: WizardPage,
    },
    PageBlocked {
        page: WizardPage,
        errors: ValidationErrorMap,
    },
    PageRetreated {
        from: WizardPage,
        to: WizardPage,
    },
    LocationResolved {
        coordinates: Coordinates,
    },
    LocationFailed {
        reason: String,
    },
    SubmissionAccepted {
        account_id: AccountId,
    },
    SubmissionRejected {
        reason: String,
    },
}

/// Sending half handed to the wizard and the submission gate. Cloneable;
/// sends never block and are silently dropped once the receiver is gone,
/// so headless users of the core can ignore notifications entirely.
#[derive(Debug, Clone)]
pub struct NoticeSender(mpsc::UnboundedSender<Notice>);

impl NoticeSender {
    pub fn send(&self, notice: Notice) {
        if self.0.send(notice).is_err() {
            tracing::debug!("notice receiver dropped, discarding notification");
        }
    }
}

/// Receiving half owned by the presentation layer.
#[derive(Debug)]
pub struct NoticeReceiver(mpsc::UnboundedReceiver<Notice>);

impl NoticeReceiver {
    /// Await the next notification; `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<Notice> {
        self.0.recv().await
    }

    /// Non-blocking variant for synchronous render loops.
    pub fn try_recv(&mut self) -> Option<Notice> {
        self.0.try_recv().ok()
    }

    /// Drain everything currently queued.
    pub fn drain(&mut self) -> Vec<Notice> {
        let mut drained = Vec::new();
        while let Some(notice) = self.try_recv() {
            drained.push(notice);
        }
        drained
    }
}

/// Create a connected notification channel.
pub fn channel() -> (NoticeSender, NoticeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NoticeSender(tx), NoticeReceiver(rx))
}
