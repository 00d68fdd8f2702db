//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Nova UI Configuration
# Only override what you want to change -- missing fields use defaults.

[resource]
# name = "nova_core"     # falls back to $NOVA_NUI_RESOURCE, then "nova_core"

[progress]
# tick_ms = 50           # 10-1000
# grace_ms = 200         # 0-5000

[panel]
# focus_delay_ms = 50    # 0-1000

[callback]
# scheme = "https"
# base_url = "http://127.0.0.1:30120"
# connect_timeout_secs = 5   # 1-60
# timeout_secs = 10          # 1-300

[window]
# title = "Nova UI"
# width = 1280
# height = 720
# transparent = true
# devtools = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
