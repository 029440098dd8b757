pub mod title_info_url;
pub mod watch_page_url;
pub mod watch_status;

pub use title_info_url::TitleInfoUrl;
pub use watch_page_url::WatchPageUrl;
pub use watch_status::WatchStatus;
