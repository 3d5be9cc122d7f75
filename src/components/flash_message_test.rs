use super::*;

fn slot_under(owner: &Owner, message: &str) -> RwSignal<Option<String>> {
    let message = message.to_owned();
    owner.with(|| RwSignal::new(Some(message)))
}

// =============================================================
// should_clear
// =============================================================

#[test]
fn should_clear_only_the_message_that_was_shown() {
    assert!(should_clear(Some("Invalid password"), "Invalid password"));
    assert!(!should_clear(Some("Login successful!"), "Invalid password"));
    assert!(!should_clear(None, "Invalid password"));
}

// =============================================================
// expire
// =============================================================

#[test]
fn expire_clears_unchanged_message() {
    let owner = Owner::new();
    let slot = slot_under(&owner, "Invalid password");
    assert!(expire(slot, "Invalid password"));
    assert_eq!(slot.get_untracked(), None);
}

#[test]
fn expire_keeps_replacement_message() {
    let owner = Owner::new();
    let slot = slot_under(&owner, "Invalid password");
    slot.set(Some("Passwords do not match!".to_owned()));
    assert!(!expire(slot, "Invalid password"));
    assert_eq!(slot.get_untracked().as_deref(), Some("Passwords do not match!"));
}

#[test]
fn expire_after_page_disposed_is_a_no_op() {
    let owner = Owner::new();
    let slot = slot_under(&owner, "Invalid password");
    owner.cleanup();
    assert!(!expire(slot, "Invalid password"));
    assert_eq!(slot.try_get_untracked(), None);
}
