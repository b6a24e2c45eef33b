//! The floating queue panel.
//!
//! ARCHITECTURE
//! ============
//! The panel is a fixed-position box with a title bar (drag target and close
//! button), a scrollable list and a corner resize handle. Rows are rendered
//! from the session's queue as one markup string on every change; the row
//! controls are plain buttons tagged with `data-action` and handled by one
//! delegated click listener on the list, so rows own no closures.
//!
//! Markup and styles are pure functions here; [`Panel`] (behind the `browser`
//! feature) only builds elements and applies them.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::consts::{
    LIST_ID, MIN_PANEL_SIZE_PX, PANEL_HEIGHT_PX, PANEL_INSET_PX, PANEL_WIDTH_PX, RESIZE_HANDLE_CLASS,
};
use crate::gesture::px;
use crate::queue::{Queue, RowKey};
use crate::sanitize::escape_for_display;

/// Attribute carrying a row's [`RowKey`].
pub const ROW_KEY_ATTR: &str = "data-key";

/// Attribute carrying a control button's [`RowAction`].
pub const ROW_ACTION_ATTR: &str = "data-action";

/// Per-row control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    MoveUp,
    MoveDown,
    Copy,
    Delete,
}

impl RowAction {
    /// All controls, in the order they appear on a row.
    pub const ALL: [Self; 4] = [Self::MoveUp, Self::MoveDown, Self::Copy, Self::Delete];

    /// Value of the `data-action` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MoveUp => "up",
            Self::MoveDown => "down",
            Self::Copy => "copy",
            Self::Delete => "del",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == raw)
    }

    fn label(self) -> &'static str {
        match self {
            Self::MoveUp => "⬆",
            Self::MoveDown => "⬇",
            Self::Copy => "📋",
            Self::Delete => "❌",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::MoveUp => "Move up",
            Self::MoveDown => "Move down",
            Self::Copy => "Copy id",
            Self::Delete => "Remove",
        }
    }
}

// =============================================================================
// STYLES
// =============================================================================

/// Stylesheet injected into `<head>`; hides the list scrollbar and styles the
/// resize handle.
#[must_use]
pub fn stylesheet() -> String {
    format!(
        "#{LIST_ID} {{\n  overflow: auto;\n  scrollbar-width: none;\n  -ms-overflow-style: none;\n  padding-right: 6px;\n}}\n\
         #{LIST_ID}::-webkit-scrollbar {{ width: 0; height: 0; }}\n\
         .{RESIZE_HANDLE_CLASS} {{\n  width: 14px; height: 14px;\n  cursor: se-resize;\n  position: absolute;\n  right: 6px;\n  bottom: 6px;\n  background: #666;\n  border-radius: 2px;\n}}\n"
    )
}

/// Inline styles for the panel container.
#[must_use]
pub fn container_style() -> Vec<(&'static str, String)> {
    let min = px(MIN_PANEL_SIZE_PX);
    vec![
        ("position", "fixed".to_owned()),
        ("top", px(PANEL_INSET_PX)),
        ("right", px(PANEL_INSET_PX)),
        ("width", px(PANEL_WIDTH_PX)),
        ("height", px(PANEL_HEIGHT_PX)),
        ("display", "flex".to_owned()),
        ("flex-direction", "column".to_owned()),
        ("background", "#222".to_owned()),
        ("color", "#fff".to_owned()),
        ("border", "1px solid #555".to_owned()),
        ("border-radius", "8px".to_owned()),
        ("z-index", "9999".to_owned()),
        ("box-sizing", "border-box".to_owned()),
        ("overflow", "hidden".to_owned()),
        ("min-width", min.clone()),
        ("min-height", min),
    ]
}

/// Inline styles for the title bar.
pub const TITLE_BAR_STYLE: [(&str, &str); 7] = [
    ("background", "#444"),
    ("padding", "6px 8px"),
    ("cursor", "move"),
    ("display", "flex"),
    ("justify-content", "space-between"),
    ("align-items", "center"),
    ("user-select", "none"),
];

/// Inline styles for the close button.
pub const CLOSE_BUTTON_STYLE: [(&str, &str); 4] = [
    ("background", "transparent"),
    ("color", "#fff"),
    ("border", "none"),
    ("cursor", "pointer"),
];

/// Inline styles for the list.
pub const LIST_STYLE: [(&str, &str); 6] = [
    ("list-style", "none"),
    ("padding", "10px"),
    ("margin", "0"),
    ("overflow-y", "auto"),
    ("flex", "1"),
    ("margin-bottom", "28px"),
];

/// Title bar markup.
pub const TITLE_MARKUP: &str = r#"<span style="font-weight:bold;">Queue</span>"#;

/// Close button label.
pub const CLOSE_LABEL: &str = "✖";

const ROW_STYLE: &str = "display:flex;justify-content:space-between;align-items:center;margin-bottom:6px";

// =============================================================================
// ROWS
// =============================================================================

/// Markup for one row. Username and id are escaped here and nowhere else.
#[must_use]
pub fn render_row(key: RowKey, username: &str, id: &str) -> String {
    let buttons: String = RowAction::ALL
        .into_iter()
        .map(|action| {
            format!(
                r#"<button {ROW_ACTION_ATTR}="{}" title="{}">{}</button>"#,
                action.as_str(),
                action.title(),
                action.label()
            )
        })
        .collect();
    format!(
        r#"<li {ROW_KEY_ATTR}="{key}" style="{ROW_STYLE}"><span><strong>{}:</strong> {}</span><span>{buttons}</span></li>"#,
        escape_for_display(username),
        escape_for_display(id),
    )
}

/// Markup for the whole list, in queue order.
#[must_use]
pub fn render_rows(queue: &Queue) -> String {
    queue
        .rows()
        .map(|row| render_row(row.key, &row.entry.username, &row.entry.id))
        .collect()
}

// =============================================================================
// DOM
// =============================================================================

#[cfg(feature = "browser")]
pub use dom::Panel;

#[cfg(feature = "browser")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, HtmlStyleElement};

    use super::*;
    use crate::error::WidgetError;
    use crate::gesture::{PanelRect, PanelUpdate};

    /// Injected panel elements.
    pub struct Panel {
        pub style: HtmlStyleElement,
        pub root: HtmlElement,
        pub title_bar: HtmlElement,
        pub close_button: HtmlElement,
        pub list: HtmlElement,
        pub resize_handle: HtmlElement,
    }

    fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, WidgetError> {
        document
            .create_element(tag)?
            .dyn_into::<T>()
            .map_err(|_| WidgetError::Dom(format!("<{tag}> has an unexpected element type")))
    }

    fn set_styles<'a>(el: &HtmlElement, styles: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<(), WidgetError> {
        let css = el.style();
        for (name, value) in styles {
            css.set_property(name, value)?;
        }
        Ok(())
    }

    impl Panel {
        /// Build the panel and attach it (and its stylesheet) to the document.
        ///
        /// # Errors
        ///
        /// Returns [`WidgetError`] if the document has no head or body, or an
        /// element cannot be created.
        pub fn mount(document: &Document) -> Result<Self, WidgetError> {
            let head = document.head().ok_or(WidgetError::MissingElement("head"))?;
            let body = document.body().ok_or(WidgetError::MissingElement("body"))?;

            let style: HtmlStyleElement = create(document, "style")?;
            style.set_text_content(Some(&stylesheet()));

            let root: HtmlElement = create(document, "div")?;
            let container_style = container_style();
            set_styles(&root, container_style.iter().map(|(k, v)| (*k, v.as_str())))?;

            let title_bar: HtmlElement = create(document, "div")?;
            set_styles(&title_bar, TITLE_BAR_STYLE)?;
            title_bar.set_inner_html(TITLE_MARKUP);

            let close_button: HtmlElement = create(document, "button")?;
            close_button.set_text_content(Some(CLOSE_LABEL));
            set_styles(&close_button, CLOSE_BUTTON_STYLE)?;
            title_bar.append_child(&close_button)?;

            let list: HtmlElement = create(document, "ul")?;
            list.set_id(LIST_ID);
            set_styles(&list, LIST_STYLE)?;

            let resize_handle: HtmlElement = create(document, "div")?;
            resize_handle.set_class_name(RESIZE_HANDLE_CLASS);

            root.append_child(&title_bar)?;
            root.append_child(&list)?;
            root.append_child(&resize_handle)?;

            head.append_child(&style)?;
            body.append_child(&root)?;

            Ok(Self { style, root, title_bar, close_button, list, resize_handle })
        }

        /// Replace the list rows with the queue's current contents.
        pub fn render(&self, queue: &Queue) {
            self.list.set_inner_html(&render_rows(queue));
        }

        pub fn scroll_to_bottom(&self) {
            self.list.set_scroll_top(self.list.scroll_height());
        }

        /// Current panel geometry in CSS pixels.
        #[must_use]
        pub fn rect(&self) -> PanelRect {
            PanelRect {
                left: f64::from(self.root.offset_left()),
                top: f64::from(self.root.offset_top()),
                width: f64::from(self.root.offset_width()),
                height: f64::from(self.root.offset_height()),
            }
        }

        /// Apply a gesture update to the panel's inline style.
        pub fn apply(&self, update: PanelUpdate) {
            let css = self.root.style();
            for (name, value) in update.style_properties() {
                if let Err(err) = css.set_property(name, &value) {
                    log::debug!("failed to set panel {name}: {err:?}");
                }
            }
        }

        /// Detach the panel and stylesheet from the document.
        pub fn remove(&self) {
            self.root.remove();
            self.style.remove();
        }

        /// The row control under a click target, if the click hit one.
        #[must_use]
        pub fn row_action_at(target: &Element) -> Option<(RowAction, RowKey)> {
            let button = target.closest(&format!("button[{ROW_ACTION_ATTR}]")).ok()??;
            let action = RowAction::parse(&button.get_attribute(ROW_ACTION_ATTR)?)?;
            let row = button.closest(&format!("li[{ROW_KEY_ATTR}]")).ok()??;
            let key = RowKey::parse(&row.get_attribute(ROW_KEY_ATTR)?)?;
            Some((action, key))
        }
    }
}
