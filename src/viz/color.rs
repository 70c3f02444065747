use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub enum Color {
    Purple,
    Blue,
    Orange,
    Teal,
    Gray,
    Black,
    Green,
    Pink,
    Yellow,
    Red,
    Grad(f64),
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Purple => write!(formatter, "#814ED1"),
            Color::Blue => write!(formatter, "#1383C6"),
            Color::Orange => write!(formatter, "#E16A2C"),
            Color::Teal => write!(formatter, "#009CA2"),
            Color::Gray => write!(formatter, "#BABABA"),
            Color::Black => write!(formatter, "#000000"),
            Color::Pink => write!(formatter, "#ED3981"),
            Color::Yellow => write!(formatter, "#EFCD17"),
            Color::Green => write!(formatter, "#009D4E"),
            Color::Red => write!(formatter, "#E3371E"),
            Color::Grad(value) => write!(formatter, "{}", get_gradient(*value)),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "purple" => Ok(Color::Purple),
            "blue" => Ok(Color::Blue),
            "orange" => Ok(Color::Orange),
            "teal" => Ok(Color::Teal),
            "gray" => Ok(Color::Gray),
            "black" => Ok(Color::Black),
            "green" => Ok(Color::Green),
            "pink" => Ok(Color::Pink),
            "yellow" => Ok(Color::Yellow),
            "red" => Ok(Color::Red),
            _ => Err(format!("Unknown color: {}", s)),
        }
    }
}

fn get_gradient(value: f64) -> String {
    let blue: (u8, u8, u8) = (0, 73, 255);
    let red: (u8, u8, u8) = (255, 0, 0);
    let mix_red = (blue.0 as f64 * (1.0 - value) + red.0 as f64 * value).round() as u8;
    let mix_green = (blue.1 as f64 * (1.0 - value) + red.1 as f64 * value).round() as u8;
    let mix_blue = (blue.2 as f64 * (1.0 - value) + red.2 as f64 * value).round() as u8;

    format!("#{:02X}{:02X}{:02X}", mix_red, mix_green, mix_blue)
}
