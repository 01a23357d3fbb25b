use posterboard_engine::{Block, ImageSide};

/// The poster every session starts from. Supplied to the engine at mount;
/// nothing is persisted between runs.
pub fn default_poster() -> Vec<Block> {
    vec![
        Block::title("1", "Kristina Zasiado"),
        Block::image("2", "https://placekitten.com/300/300", ImageSide::Left),
        Block::text("3", "Ronelle Cesicon"),
        Block::title("4", "James Khosravi"),
        Block::image("5", "https://placekitten.com/100/100", ImageSide::Right),
        Block::text("6", "Donald Horton"),
    ]
}
