//! JavaScript snippets that mutate the page's DOM.
//!
//! All user-controlled strings are embedded as JSON string literals and
//! assigned through `textContent` or `value`, never `innerHTML`.

pub const PROGRESS_CONTAINER_ID: &str = "progressbar-container";
pub const PROGRESS_LABEL_ID: &str = "progressbar-label";
pub const PROGRESS_FILL_ID: &str = "progressbar-fill";
pub const TPCDS_OVERLAY_ID: &str = "tpcds-overlay";
pub const TPCDS_INPUT_ID: &str = "tpcds-input";

/// CSS class that hides an element.
pub const HIDDEN_CLASS: &str = "hidden";

/// Encode `s` as a JavaScript string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Run `body` with `el` bound to the element `id`, if it exists.
fn with_element(id: &str, body: &str) -> String {
    format!(
        "(function(){{var el=document.getElementById({});if(el){{{body}}}}})();",
        js_string(id)
    )
}

pub fn set_text(id: &str, text: &str) -> String {
    with_element(id, &format!("el.textContent={};", js_string(text)))
}

/// Set the element's width to `percent`%. Non-finite values become 0.
pub fn set_width_percent(id: &str, percent: f64) -> String {
    let percent = if percent.is_finite() { percent } else { 0.0 };
    with_element(id, &format!("el.style.width='{percent}%';"))
}

pub fn set_hidden(id: &str, hidden: bool) -> String {
    let method = if hidden { "add" } else { "remove" };
    with_element(
        id,
        &format!("el.classList.{method}({});", js_string(HIDDEN_CLASS)),
    )
}

pub fn clear_value(id: &str) -> String {
    with_element(id, "el.value='';")
}

pub fn focus(id: &str) -> String {
    with_element(id, "el.focus();")
}

/// Copy `text` through an off-screen textarea and the platform copy command.
/// The staging element is removed immediately.
pub fn copy_via_staging(text: &str) -> String {
    format!(
        "(function(){{var ta=document.createElement('textarea');ta.value={};\
         ta.style.position='fixed';ta.style.left='-9999px';\
         document.body.appendChild(ta);ta.select();\
         document.execCommand('copy');document.body.removeChild(ta);}})();",
        js_string(text)
    )
}
