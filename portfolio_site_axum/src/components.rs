//! Server-rendered UI components

use askama::Template;
use std::fmt;

use portfolio_site::{RepeatingTimer, RollingText};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        })
    }
}

/// A button that renders as a link when it has an `href`.
///
/// # Example
///
/// ```
/// use askama::Template;
/// use portfolio_site_axum::Button;
///
/// let html = Button::new("About").href("/about").render().unwrap();
/// assert_eq!(html, r#"<a href="/about" class="button">About</a>"#);
/// ```
#[derive(Template, Debug, Clone, Default)]
#[template(path = "button.html")]
pub struct Button {
    pub label: String,
    pub href: Option<String>,
    pub button_type: ButtonType,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Snapshot of a [`RollingText`] for rendering. Renders an empty container when there is no text.
#[derive(Template, Debug, Clone, Copy)]
#[template(path = "rolling_text.html")]
pub struct RollingTextView<'a> {
    pub text: Option<&'a str>,
}

impl<'a> RollingTextView<'a> {
    pub fn new<T: RepeatingTimer>(rolling: &'a RollingText<T>) -> Self {
        Self {
            text: rolling.current(),
        }
    }
}
