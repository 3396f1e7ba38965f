// Document Assembly & Rendering pipeline:
// loader snapshot → composer markup → photo embedding → Chromium print.
// Data flows one way; the only side effect is the draft→completed flip
// after a successful render. Blocking Chromium calls run inside
// tokio::task::spawn_blocking.

pub mod composer;
pub mod handlers;
pub mod labels;
pub mod pdf;
pub mod photo;
