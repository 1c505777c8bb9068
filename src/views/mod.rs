//! Server-rendered HTML pages.
//!
//! Pages are plain functions returning `String`; every piece of user text
//! passes through [`escape::escape_html`] before it is interpolated.

pub mod escape;
pub mod layout;
pub mod pages;

pub use escape::escape_html;
pub use layout::{Flash, FlashCategory};
