//! Viewport measurement helpers exposed to other scripts.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Prefer the window's inner size, falling back to the root element's
    /// client size when the former is zero.
    #[must_use]
    pub fn resolve(inner: (f64, f64), client: (f64, f64)) -> Self {
        let pick = |a: f64, b: f64| if a > 0.0 { a } else { b };
        Self { width: pick(inner.0, client.0), height: pick(inner.1, client.1) }
    }

    /// True when `rect` lies entirely inside this viewport.
    #[must_use]
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= self.height && rect.right <= self.width
    }
}

/// Bounding rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

pub fn viewport_size() -> ViewportSize {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ViewportSize::default();
        };
        let inner = (
            window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        );
        let client = window
            .document()
            .and_then(|d| d.document_element())
            .map_or((0.0, 0.0), |el| (f64::from(el.client_width()), f64::from(el.client_height())));
        ViewportSize::resolve(inner, client)
    }
    #[cfg(not(feature = "csr"))]
    {
        ViewportSize::default()
    }
}

#[cfg(feature = "csr")]
pub fn is_in_viewport(element: &web_sys::Element) -> bool {
    let r = element.get_bounding_client_rect();
    viewport_size().contains(&Rect { top: r.top(), left: r.left(), bottom: r.bottom(), right: r.right() })
}
