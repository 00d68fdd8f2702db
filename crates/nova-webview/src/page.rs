//! The bundled page: progress bar and coordinate panel markup.

use nova_ui::escape_html;

use crate::script::{
    HIDDEN_CLASS, PROGRESS_CONTAINER_ID, PROGRESS_FILL_ID, PROGRESS_LABEL_ID, TPCDS_INPUT_ID,
    TPCDS_OVERLAY_ID,
};

/// Render the page loaded into the WebView. Both widgets start hidden.
pub fn render_page(title: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
html, body {{ margin: 0; background: transparent; }}
.{HIDDEN_CLASS} {{ display: none !important; }}
#{PROGRESS_CONTAINER_ID} {{ position: fixed; left: 50%; bottom: 10%; width: 300px; transform: translateX(-50%); }}
#{PROGRESS_FILL_ID} {{ width: 0%; height: 6px; background: #4aa3ff; }}
#{TPCDS_OVERLAY_ID} {{ position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; }}
</style>
</head>
<body>
<div id="{PROGRESS_CONTAINER_ID}" class="{HIDDEN_CLASS}">
  <div id="{PROGRESS_LABEL_ID}"></div>
  <div id="{PROGRESS_FILL_ID}"></div>
</div>
<div id="{TPCDS_OVERLAY_ID}" class="{HIDDEN_CLASS}">
  <input id="{TPCDS_INPUT_ID}" type="text" autocomplete="off" spellcheck="false" placeholder="vector3(x, y, z)">
</div>
</body>
</html>
"#
    )
}
