/// Backend origin. Empty means the page and the API share an origin.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

/// Whether the demo form submits to `/api/call`. Until the outbound-call
/// integration is live the form shows the placeholder panel instead.
pub fn demo_backend_ready() -> bool {
    matches!(option_env!("DEMO_BACKEND_READY"), Some("true") | Some("1"))
}
