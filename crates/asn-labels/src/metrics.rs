//! Helvetica text metrics
//!
//! Advance widths from the standard Helvetica AFM, in 1/1000 em, for the
//! printable ASCII range. Characters outside it fall back to half an em.

/// Fallback width ratio for glyphs missing from the table
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // ' '  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

/// Advance width of one character in 1/1000 em
pub fn char_width(ch: char) -> f32 {
    let code = ch as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize] as f32
    } else {
        HELVETICA_CHAR_WIDTH_RATIO * 1000.0
    }
}

/// Width of `text` set in Helvetica at `size_pt`, in points
pub fn string_width(text: &str, size_pt: f32) -> f32 {
    text.chars().map(char_width).sum::<f32>() / 1000.0 * size_pt
}
