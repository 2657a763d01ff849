/// A colour, expressed in RGB, CMYK, or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

/// The palette used by the default lab record style sheet
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    /// Near-black used for running text
    pub const INK: Colour = Colour::RGB {
        r: 0.1,
        g: 0.1,
        b: 0.1,
    };
    /// Dark blue used for headings
    pub const NAVY: Colour = Colour::RGB {
        r: 0.1,
        g: 0.1,
        b: 0.4,
    };
    /// Mid grey used for headers and footers
    pub const GREY: Colour = Colour::RGB {
        r: 0.5,
        g: 0.5,
        b: 0.5,
    };
    /// 5% black, the code block background
    pub const SHADE: Colour = Colour::CMYK {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 0.05,
    };
}
