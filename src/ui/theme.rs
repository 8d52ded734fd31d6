use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TEXT_PRIMARY: Color = Color::Rgb(0xf4, 0xf4, 0xf5);
pub const TEXT_DIM: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const BAND_MOBILE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BAND_TABLET: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const BAND_DESKTOP: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
