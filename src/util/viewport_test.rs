use super::*;

#[test]
fn inner_size_wins_when_present() {
    let size = ViewportSize::resolve((1280.0, 720.0), (1200.0, 700.0));
    assert_eq!(size, ViewportSize { width: 1280.0, height: 720.0 });
}

#[test]
fn client_size_fills_in_zeroes() {
    let size = ViewportSize::resolve((0.0, 720.0), (1200.0, 700.0));
    assert_eq!(size, ViewportSize { width: 1200.0, height: 720.0 });
}

#[test]
fn fully_visible_rect_is_in_viewport() {
    let vp = ViewportSize { width: 800.0, height: 600.0 };
    assert!(vp.contains(&Rect { top: 0.0, left: 0.0, bottom: 600.0, right: 800.0 }));
    assert!(vp.contains(&Rect { top: 10.0, left: 10.0, bottom: 100.0, right: 100.0 }));
}

#[test]
fn partially_clipped_rect_is_not_in_viewport() {
    let vp = ViewportSize { width: 800.0, height: 600.0 };
    assert!(!vp.contains(&Rect { top: -1.0, left: 0.0, bottom: 100.0, right: 100.0 }));
    assert!(!vp.contains(&Rect { top: 0.0, left: 0.0, bottom: 601.0, right: 100.0 }));
    assert!(!vp.contains(&Rect { top: 0.0, left: 700.0, bottom: 100.0, right: 801.0 }));
}

#[cfg(not(feature = "csr"))]
#[test]
fn viewport_size_is_zero_without_browser() {
    assert_eq!(viewport_size(), ViewportSize::default());
}
