use tokio::sync::watch;

/// Receiving side of the auth identity feed: the current shop uid, or
/// `None` when signed out.
pub type IdentityReceiver = watch::Receiver<Option<String>>;

/// Sending side of the auth identity feed.
///
/// The auth collaborator (or the binary, for a fixed identity) holds
/// this handle; the sync engine reacts to every change by dropping its
/// state and re-subscribing for the new identity.
pub struct IdentityHandle {
    sender: watch::Sender<Option<String>>,
}

impl IdentityHandle {
    pub fn new(initial: Option<String>) -> (Self, IdentityReceiver) {
        let (sender, receiver) = watch::channel(initial);
        (Self { sender }, receiver)
    }

    pub fn sign_in(&self, shop_id: impl Into<String>) {
        let _ = self.sender.send(Some(shop_id.into()));
    }

    pub fn sign_out(&self) {
        let _ = self.sender.send(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identity_changes_are_observed() {
        let (handle, mut receiver) = IdentityHandle::new(None);
        assert_eq!(*receiver.borrow(), None);

        handle.sign_in("shop-1");
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow().as_deref(), Some("shop-1"));

        handle.sign_out();
        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow(), None);
    }
}
