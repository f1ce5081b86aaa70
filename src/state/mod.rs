//! Client-side panel state.
//!
//! DESIGN
//! ======
//! `status` owns the transient feedback message, and `panel` owns the rendered
//! view-model plus the signup form. Both are plain data with synchronous
//! transitions; async orchestration lives in `controller`.

pub mod panel;
pub mod status;
