//! Page widget state machines. Nothing in here touches the DOM; the adapters
//! in `dom` render whatever these report.

pub mod carousel;
pub mod chat;
pub mod cycle;
pub mod slideshow;
pub mod swipe;
pub mod timer;
