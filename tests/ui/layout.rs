use itask::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_stacks_sections() {
    let areas = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));

    assert_eq!(areas.header.height, 3);
    assert_eq!(areas.form.y, 3);
    assert_eq!(areas.form.height, 3);
    assert_eq!(areas.list.y, 6);
    assert_eq!(areas.list.height, 17);
    assert_eq!(areas.footer.y, 23);
}

#[test]
fn test_centered_rect_fixed() {
    let rect = LayoutManager::centered_rect_fixed(20, 10, Rect::new(0, 0, 80, 24));
    assert_eq!(rect, Rect::new(30, 7, 20, 10));

    // Shrinks to fit
    let rect = LayoutManager::centered_rect_fixed(100, 50, Rect::new(0, 0, 80, 24));
    assert_eq!(rect, Rect::new(0, 0, 80, 24));
}

#[test]
fn test_contains() {
    let rect = Rect::new(10, 5, 4, 2);

    assert!(LayoutManager::contains(rect, 10, 5));
    assert!(LayoutManager::contains(rect, 13, 6));
    assert!(!LayoutManager::contains(rect, 14, 6));
    assert!(!LayoutManager::contains(rect, 13, 7));
    assert!(!LayoutManager::contains(rect, 9, 5));
}
