pub(crate) mod render_session;
pub(crate) mod tracer;
