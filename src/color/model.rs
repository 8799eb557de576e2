/// Normalized RGBA color. Each channel is an `f64` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub alpha: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgba {
    /// Opaque white, the fallback for unparseable input.
    pub const WHITE: Rgba = Rgba {
        alpha: 1.0,
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    /// Channel values as R,G,B,A bytes (the pixel layout the PNG encoder
    /// consumes), each rounded to the nearest 8-bit value.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let scale = |v: f64| (v * 255.0).round() as u8;
        [
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            scale(self.alpha),
        ]
    }
}
