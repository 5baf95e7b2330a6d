pub mod block;
pub mod block_quote;
pub mod code_block;
pub mod document_list;
pub mod document_panel;
pub mod document_view;
pub mod empty_document;
pub mod error_screen;
pub mod heading;
pub mod image;
pub mod inline;
pub mod list;
pub mod outline_panel;
pub mod paragraph;
pub mod unrecognized_block;

pub use block::Block;
pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use document_list::DocumentList;
pub use document_panel::DocumentPanel;
pub use document_view::DocumentView;
pub use empty_document::EmptyDocument;
pub use error_screen::ErrorScreen;
pub use heading::Heading;
pub use image::Image;
pub use inline::Fragments;
pub use list::List;
pub use outline_panel::OutlinePanel;
pub use paragraph::Paragraph;
pub use unrecognized_block::UnrecognizedBlock;
