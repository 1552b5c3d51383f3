pub mod html_page;
pub mod page;
pub mod terminal;

pub use html_page::HtmlPage;
pub use page::Page;
pub use terminal::TerminalPage;
