pub mod buffer;
pub mod color;
pub mod event;
pub mod rect;
pub mod style;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use color::{Color, Rgb};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use rect::Rect;
pub use style::TextStyle;
pub use terminal::Terminal;
pub use text::TextAlign;
