//! IPC protocol between the page and Rust.
//!
//! - **JS -> Rust**: the init script calls `window.ipc.postMessage` with a
//!   JSON [`UiEvent`](nova_ui::UiEvent) envelope for every host `message`
//!   event and for the key events the controller reacts to.
//! - **Rust -> JS**: Rust evaluates snippets from [`crate::script`].
//!
//! Propagation is decided on the JS side because the page cannot wait for
//! Rust: input key events always stop propagating, Enter's default is
//! always prevented. This matches `UiController::handle_key`.

use nova_ui::UiEvent;

/// JavaScript injected into the page before any other script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    function send(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
    }

    window.addEventListener('message', function(event) {
        if (event.data && typeof event.data === 'object') {
            send('nui', event.data);
        }
    });

    document.addEventListener('DOMContentLoaded', function() {
        var input = document.getElementById('tpcds-input');
        if (input) {
            ['keydown', 'keyup', 'keypress'].forEach(function(type) {
                input.addEventListener(type, function(e) {
                    if (type === 'keydown' && e.key === 'Enter') {
                        e.preventDefault();
                    }
                    send('key', {
                        key: e.key,
                        phase: type.slice(3),
                        target: 'input',
                        value: input.value
                    });
                    e.stopPropagation();
                });
            });
        }

        document.addEventListener('keydown', function(e) {
            if (e.key === 'Escape') {
                send('key', { key: e.key, phase: 'down', target: 'document' });
            }
        });
    });
})();
"#;

/// Parse an IPC body posted by the init script.
pub fn parse_ipc_body(body: &str) -> Option<UiEvent> {
    UiEvent::from_json(body)
}
