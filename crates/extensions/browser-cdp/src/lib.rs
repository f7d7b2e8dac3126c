//! Chrome DevTools Protocol browser driver.
//!
//! Drives a locally running Chrome (started with
//! `--remote-debugging-port=9222`) over its WebSocket debugging endpoint:
//! opens destination tabs, watches target lifecycle events, scrapes source
//! conversations, and injects hand-off prompts into destination pages. All
//! page-context work runs through `Runtime.evaluate`.

mod client;
mod clipboard;
mod driver;
mod injector;
mod protocol;
mod scrape;
mod session;
mod watcher;

pub use client::CdpClient;
pub use driver::CdpBrowserDriver;
pub use injector::build_inject_script;
pub use protocol::{BrowserVersion, PageInfo, TargetInfo};
pub use scrape::{ScrapedPage, build_scrape_script};
pub use session::PageSession;
