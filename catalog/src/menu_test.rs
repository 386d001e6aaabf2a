use super::*;

fn opened(index: usize) -> MegaMenu {
    let mut menu = MegaMenu::new();
    menu.pointer_enter(index, 0);
    menu.advance(OPEN_DELAY_MS);
    assert_eq!(menu.phase(), MenuPhase::Open { index });
    menu
}

// =============================================================
// Hover intent
// =============================================================

#[test]
fn hover_opens_after_delay() {
    let mut menu = MegaMenu::new();
    menu.pointer_enter(0, 1_000);
    assert_eq!(menu.open_index(), None);
    assert_eq!(menu.next_deadline(), Some(1_080));

    assert!(!menu.advance(1_079));
    assert_eq!(menu.open_index(), None);

    assert!(menu.advance(1_080));
    assert_eq!(menu.open_index(), Some(0));
    assert_eq!(menu.next_deadline(), None);
}

#[test]
fn fast_transit_never_opens() {
    let mut menu = MegaMenu::new();
    menu.pointer_enter(0, 0);
    menu.pointer_leave(30);
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.advance(500));
    assert_eq!(menu.open_index(), None);
}

#[test]
fn sliding_across_triggers_restarts_the_delay() {
    let mut menu = MegaMenu::new();
    menu.pointer_enter(0, 0);
    menu.pointer_enter(1, 50);
    assert_eq!(menu.next_deadline(), Some(130));
    menu.advance(100);
    assert_eq!(menu.open_index(), None);
    menu.advance(130);
    assert_eq!(menu.open_index(), Some(1));
}

#[test]
fn reentering_same_pending_item_keeps_deadline() {
    let mut menu = MegaMenu::new();
    menu.pointer_enter(2, 0);
    menu.pointer_enter(2, 40);
    assert_eq!(menu.next_deadline(), Some(OPEN_DELAY_MS));
}

// =============================================================
// Close grace
// =============================================================

#[test]
fn leave_and_reenter_within_grace_stays_open() {
    let mut menu = opened(0);
    menu.pointer_leave(200);
    assert_eq!(menu.open_index(), Some(0));
    assert_eq!(menu.next_deadline(), Some(340));

    menu.advance(300);
    menu.pointer_enter(0, 320);
    assert_eq!(menu.phase(), MenuPhase::Open { index: 0 });

    assert!(!menu.advance(1_000));
    assert_eq!(menu.open_index(), Some(0));
}

#[test]
fn leave_closes_after_grace() {
    let mut menu = opened(0);
    menu.pointer_leave(200);
    assert!(!menu.advance(339));
    assert!(menu.advance(340));
    assert_eq!(menu.phase(), MenuPhase::Closed);
}

// =============================================================
// Switching items
// =============================================================

#[test]
fn switching_keeps_current_panel_until_new_one_opens() {
    let mut menu = opened(0);
    menu.pointer_enter(1, 500);
    assert_eq!(menu.open_index(), Some(0));
    assert!(menu.advance(580));
    assert_eq!(menu.open_index(), Some(1));
}

#[test]
fn returning_to_shown_item_during_switch_cancels_it() {
    let mut menu = opened(0);
    menu.pointer_enter(1, 500);
    menu.pointer_enter(0, 520);
    assert_eq!(menu.phase(), MenuPhase::Open { index: 0 });
}

#[test]
fn leaving_during_switch_closes_shown_item_with_grace() {
    let mut menu = opened(0);
    menu.pointer_enter(1, 500);
    menu.pointer_leave(510);
    assert_eq!(menu.phase(), MenuPhase::Closing { index: 0, due_ms: 650 });
}

#[test]
fn entering_other_item_while_closing_switches() {
    let mut menu = opened(0);
    menu.pointer_leave(200);
    menu.pointer_enter(3, 250);
    assert_eq!(menu.phase(), MenuPhase::Opening { index: 3, due_ms: 330, shown: Some(0) });
}

#[test]
fn only_one_item_is_ever_open() {
    let mut menu = opened(0);
    menu.toggle(2);
    assert!(menu.is_open(2));
    assert!(!menu.is_open(0));
}

// =============================================================
// Immediate triggers
// =============================================================

#[test]
fn toggle_bypasses_delays() {
    let mut menu = MegaMenu::new();
    menu.toggle(1);
    assert_eq!(menu.phase(), MenuPhase::Open { index: 1 });
    menu.toggle(1);
    assert_eq!(menu.phase(), MenuPhase::Closed);
}

#[test]
fn toggle_during_close_grace_closes() {
    let mut menu = opened(1);
    menu.pointer_leave(200);
    menu.toggle(1);
    assert_eq!(menu.phase(), MenuPhase::Closed);
}

#[test]
fn escape_closes_immediately_and_cancels_pending() {
    let mut menu = MegaMenu::new();
    menu.pointer_enter(0, 0);
    assert!(menu.key(MenuKey::Escape));
    assert_eq!(menu.next_deadline(), None);
    assert!(!menu.advance(1_000));
    assert_eq!(menu.open_index(), None);
}

#[test]
fn pending_open_is_not_idle() {
    let mut menu = MegaMenu::new();
    assert!(menu.is_idle());
    menu.pointer_enter(0, 0);
    assert!(!menu.is_idle());
    assert_eq!(menu.open_index(), None);
}

#[test]
fn escape_when_closed_is_not_consumed() {
    let mut menu = MegaMenu::new();
    assert!(!menu.key(MenuKey::Escape));
    assert_eq!(MenuKey::from_dom("Escape"), MenuKey::Escape);
    assert_eq!(MenuKey::from_dom("Enter"), MenuKey::Other);
}

#[test]
fn outside_click_closes() {
    let mut menu = opened(2);
    menu.outside_click();
    assert_eq!(menu.phase(), MenuPhase::Closed);
}

// =============================================================
// Config
// =============================================================

#[test]
fn nav_item_decodes_with_defaults() {
    let item: NavItem = serde_json::from_str(r#"{"label":"About","href":"/about"}"#).unwrap();
    assert!(!item.has_panel());

    let item: NavItem = serde_json::from_str(
        r#"{"label":"Products","href":"/products",
            "columns":[{"title":"Sensors","links":[{"label":"Temperature","href":"/products?category=temperature"}]}]}"#,
    )
    .unwrap();
    assert!(item.has_panel());
    assert_eq!(item.columns[0].links[0].label, "Temperature");
}
