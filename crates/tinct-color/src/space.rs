// ABOUTME: Color space conversion math between sRGB, HSL, OKLab, and OKLCH
// ABOUTME: Implements the published OKLab M1/M2 transforms with cube-root nonlinearity

/// A parsed color in sRGB with straight alpha, all components in [0, 1].
/// The canonical in-memory form; every syntax parses into this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Whether two colors are equal within a per-channel tolerance.
    pub fn approx_eq(&self, other: &Rgba, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// HSL with hue in degrees [0, 360) and saturation/lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// OKLab color (L, a, b).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// OKLCH color (lightness, chroma, hue in degrees [0, 360)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

// ==========================
// Linear sRGB companding
// ==========================

pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

pub fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

// ==========================
// RGB <-> HSL
// ==========================

pub fn rgb_to_hsl(color: Rgba) -> Hsl {
    let (r, g, b) = (color.r, color.g, color.b);
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let l = (max + min) * 0.5;
    if (max - min).abs() < 1e-6 {
        return Hsl { h: 0.0, s: 0.0, l };
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if (max - r).abs() < 1e-6 {
        ((g - b) / d) % 6.0
    } else if (max - g).abs() < 1e-6 {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } * 60.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    Hsl {
        h: h % 360.0,
        s: s.clamp(0.0, 1.0),
        l: l.clamp(0.0, 1.0),
    }
}

pub fn hsl_to_rgb(hsl: Hsl, alpha: f32) -> Rgba {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s;
    let l = hsl.l;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgba::new(r + m, g + m, b + m, alpha)
}

// ==========================
// OKLab / OKLCH conversions (D65, per OKLab definition)
// Direct linear sRGB <-> OKLab transforms with cube-root nonlinearity.
// ==========================

pub fn rgb_to_oklab(color: Rgba) -> Oklab {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);

    // Linear sRGB -> LMS (OKLab M1)
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    // Nonlinearity (cube root)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // LMS' -> OKLab (OKLab M2)
    Oklab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

pub fn oklab_to_rgb(lab: Oklab, alpha: f32) -> Rgba {
    // OKLab -> LMS'
    let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
    let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
    let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

    // Inverse nonlinearity
    let l = l_.powi(3);
    let m = m_.powi(3);
    let s = s_.powi(3);

    // LMS -> linear sRGB
    let r_lin = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
    let g_lin = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
    let b_lin = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

    Rgba::new(
        linear_to_srgb(r_lin),
        linear_to_srgb(g_lin),
        linear_to_srgb(b_lin),
        alpha,
    )
}

pub fn rgb_to_oklch(color: Rgba) -> Oklch {
    let lab = rgb_to_oklab(color);
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let h = lab.b.atan2(lab.a).to_degrees();
    Oklch {
        l: lab.l,
        c,
        h: h.rem_euclid(360.0),
    }
}

pub fn oklch_to_rgb(lch: Oklch, alpha: f32) -> Rgba {
    let h = lch.h.to_radians();
    oklab_to_rgb(
        Oklab {
            l: lch.l,
            a: lch.c * h.cos(),
            b: lch.c * h.sin(),
        },
        alpha,
    )
}
