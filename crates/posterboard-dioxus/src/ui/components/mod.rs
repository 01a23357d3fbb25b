pub mod editable_text;
pub mod image_block;
pub mod image_modal;
pub mod poster_item;
pub mod poster_list;
pub mod status_banner;

pub use editable_text::EditableText;
pub use image_block::ImageBlock;
pub use image_modal::ImageModal;
pub use poster_item::PosterItem;
pub use poster_list::PosterList;
pub use status_banner::{Status, StatusBanner};
