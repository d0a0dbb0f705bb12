#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::notifications::NotificationPhase;

#[test]
fn show_adds_entering_notification() {
    let notifier = Notifier::new(ToastTiming::default());
    let id = notifier.show("Connection restored!", NotificationKind::Success);
    notifier.center().with_untracked(|c| {
        let n = c.get(id).unwrap();
        assert_eq!(n.phase, NotificationPhase::Entering);
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Connection restored!");
    });
}

#[test]
fn dismiss_is_idempotent() {
    let notifier = Notifier::new(ToastTiming::default());
    let keep = notifier.show("keep", NotificationKind::Info);
    let drop = notifier.show("drop", NotificationKind::Error);
    notifier.dismiss(drop);
    notifier.dismiss(drop);
    assert_eq!(notifier.center().with_untracked(NotificationCenter::ids), vec![keep]);
}
