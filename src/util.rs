pub fn usize_to_f64(value: usize) -> f64 {
    let clamped = value.min(u32::MAX as usize);
    let as_u32 = u32::try_from(clamped).unwrap_or(u32::MAX);
    f64::from(as_u32)
}

pub const fn f64_to_f32(value: f64) -> f32 {
    #[allow(clippy::cast_possible_truncation)]
    {
        value as f32
    }
}

/// Two-decimal fixed formatting; negative zero prints as `0.00`.
pub fn fixed2(value: f64) -> String {
    let text = format!("{value:.2}");
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}
